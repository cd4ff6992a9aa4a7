//! Asset inventory glue: the upstream reference-asset listing and the local
//! icon-directory scan.

pub mod error;
pub mod remote;
pub mod scan;

pub use error::AssetError;
pub use remote::{ListingOptions, ReferenceAssets, fetch_reference_assets};
pub use scan::{ScanOutcome, scan_icon_dir};
