//! HTML report generation for iconset audits.

pub mod error;
pub mod html;
pub mod rows;

pub use error::ReportError;
pub use html::{render, write_report};
pub use rows::{ReportRow, build_rows};
