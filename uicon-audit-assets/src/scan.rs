//! Local icon-directory scan.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use uicon_audit_catalog::Catalog;
use uicon_audit_core::{Inventory, parse_icon_name};

use crate::error::AssetError;

/// What the directory scan produced.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Identifier strings for every parseable icon file.
    pub inventory: Inventory,
    /// Reference-asset names that some on-disk file actually backs.
    pub backed_assets: HashSet<String>,
    /// Files whose names did not parse and were excluded.
    pub skipped: usize,
}

/// Scan `dir` for icon files, building the inventory and the set of
/// reference assets those files back.
///
/// An unparseable name is logged, counted, and excluded; the scan always
/// completes as long as the directory itself is readable. A parsed file
/// whose attributes match no catalog entry still joins the inventory — it
/// just backs no reference asset.
pub fn scan_icon_dir(dir: &Path, catalog: &Catalog) -> Result<ScanOutcome, AssetError> {
    let mut outcome = ScanOutcome::default();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        // Iconsets keep their own index.html next to the images.
        if stem == "index" {
            continue;
        }

        let parsed = match parse_icon_name(stem) {
            Ok(parsed) => parsed,
            Err(e) => {
                log::warn!("skipping {stem:?}: {e}");
                outcome.skipped += 1;
                continue;
            }
        };

        outcome.inventory.insert(stem);

        let key = parsed.key;
        match catalog.lookup(key.species, key.temp_evolution, key.form, key.costume) {
            Some(entry) => {
                outcome.backed_assets.insert(entry.asset_name(key.shiny));
            }
            None => {
                log::debug!("{stem}: no catalog entry for this attribute combination");
            }
        }
    }

    log::info!(
        "scanned {}: {} icons, {} skipped",
        dir.display(),
        outcome.inventory.len(),
        outcome.skipped
    );

    Ok(outcome)
}
