//! Walks the catalog and materializes one table row per included
//! (entity, shiny) pair.

use std::collections::HashSet;

use uicon_audit_assets::ReferenceAssets;
use uicon_audit_catalog::{Catalog, CatalogEntry};
use uicon_audit_core::{IconStatus, Inventory, classify, resolve};

/// Base URL of the upstream 256x256 reference renders shown in the report.
const REMOTE_IMAGE_BASE: &str =
    "https://raw.githubusercontent.com/PokeMiners/pogo_assets/master/Images/Pokemon%20-%20256x256";

/// One row of the audit table.
#[derive(Debug, Clone)]
pub struct ReportRow {
    pub name: String,
    pub species_label: String,
    pub form_label: String,
    pub costume_label: String,
    pub temp_evolution_id: u32,
    pub full: String,
    pub used: String,
    pub status: IconStatus,
    pub local_image: String,
    pub remote_image: String,
}

/// Build the report rows.
///
/// Walks entries in their (species, form) order, once per shiny flag. Pairs
/// whose reference asset the upstream repository does not ship are dropped
/// entirely — that inclusion filter is independent of classification.
pub fn build_rows(
    catalog: &Catalog,
    inventory: &Inventory,
    backed_assets: &HashSet<String>,
    reference: &ReferenceAssets,
    icons_dir: &str,
) -> Vec<ReportRow> {
    let mut rows = Vec::new();

    for entry in catalog.entries() {
        for shiny in [false, true] {
            let asset_name = entry.asset_name(shiny);
            if !reference.contains(&asset_name) {
                continue;
            }

            let resolution = resolve(&entry.icon_key(shiny), inventory);
            let status = classify(&resolution, backed_assets.contains(&asset_name));
            // The 0 placeholder icon stands in for anything unresolvable.
            let used = resolution.matched.unwrap_or_else(|| "0".to_string());

            rows.push(ReportRow {
                name: if shiny {
                    format!("Shiny {}", entry.name)
                } else {
                    entry.name.clone()
                },
                species_label: species_label(entry, shiny),
                form_label: form_label(entry),
                costume_label: costume_label(entry, catalog),
                temp_evolution_id: entry.temp_evolution_id,
                full: resolution.full,
                local_image: format!("{icons_dir}/{used}.png"),
                remote_image: format!("{REMOTE_IMAGE_BASE}/{asset_name}.png"),
                used,
                status,
            });
        }
    }

    rows
}

fn species_label(entry: &CatalogEntry, shiny: bool) -> String {
    if shiny {
        format!("{} ({}) (SHINY)", entry.base_template, entry.id)
    } else {
        format!("{} ({})", entry.base_template, entry.id)
    }
}

/// `UNSET` when the variant template is just the base template.
fn form_label(entry: &CatalogEntry) -> String {
    let template = if entry.base_template == entry.template {
        "UNSET"
    } else {
        entry.template.as_str()
    };
    format!("{template} ({})", entry.form)
}

fn costume_label(entry: &CatalogEntry, catalog: &Catalog) -> String {
    let name = catalog.costume_name(entry.costume).unwrap_or("0");
    format!("{name} ({})", entry.costume)
}

#[cfg(test)]
mod tests {
    use super::*;

    use uicon_audit_catalog::CatalogDocument;

    const DOC: &str = r#"{
        "mons": [
            {"id": 1, "name": "Bulbasaur", "base_template": "BULBASAUR",
             "template": "BULBASAUR", "asset": "pm1"},
            {"id": 1, "costume": 5, "name": "Bulbasaur", "base_template": "BULBASAUR",
             "template": "BULBASAUR", "asset": "pm1_c5"},
            {"id": 1, "form": 2, "name": "Bulbasaur", "base_template": "BULBASAUR",
             "template": "BULBASAUR_FALL_2019", "asset": "pm1_f2"},
            {"id": 999, "name": "Nobody", "base_template": "NOBODY",
             "template": "NOBODY", "asset": "pm999"}
        ],
        "costumes": {"HOLIDAY_2019": 5}
    }"#;

    fn catalog() -> Catalog {
        let doc: CatalogDocument = serde_json::from_str(DOC).unwrap();
        Catalog::from_document(doc)
    }

    fn reference(names: &[&str]) -> ReferenceAssets {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn unshipped_assets_are_filtered_out() {
        let catalog = catalog();
        let inventory: Inventory = ["1"].into_iter().collect();
        // Only the plain Bulbasaur asset ships; everything else vanishes.
        let rows = build_rows(
            &catalog,
            &inventory,
            &HashSet::new(),
            &reference(&["pm1"]),
            "pokemon",
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Bulbasaur");
    }

    #[test]
    fn exact_match_row() {
        let catalog = catalog();
        let inventory: Inventory = ["1"].into_iter().collect();
        let rows = build_rows(
            &catalog,
            &inventory,
            &HashSet::from(["pm1".to_string()]),
            &reference(&["pm1"]),
            "pokemon",
        );
        let row = &rows[0];
        assert_eq!(row.full, "1");
        assert_eq!(row.used, "1");
        assert_eq!(row.status, IconStatus::Full);
        assert_eq!(row.local_image, "pokemon/1.png");
        assert!(row.remote_image.ends_with("/pm1.png"));
    }

    #[test]
    fn shiny_rows_are_labeled_and_resolved_separately() {
        let catalog = catalog();
        let inventory: Inventory = ["1"].into_iter().collect();
        let rows = build_rows(
            &catalog,
            &inventory,
            &HashSet::new(),
            &reference(&["pm1", "pm1_shiny"]),
            "pokemon",
        );
        assert_eq!(rows.len(), 2);
        let shiny = &rows[1];
        assert_eq!(shiny.name, "Shiny Bulbasaur");
        assert_eq!(shiny.species_label, "BULBASAUR (1) (SHINY)");
        assert_eq!(shiny.full, "1_s");
        assert_eq!(shiny.used, "1");
        assert_eq!(shiny.status, IconStatus::Default);
        assert!(shiny.remote_image.ends_with("/pm1_shiny.png"));
    }

    #[test]
    fn backed_fallback_vs_unbacked_default() {
        let catalog = catalog();
        let inventory: Inventory = ["1"].into_iter().collect();

        let unbacked = build_rows(
            &catalog,
            &inventory,
            &HashSet::new(),
            &reference(&["pm1_c5"]),
            "pokemon",
        );
        assert_eq!(unbacked[0].status, IconStatus::Default);

        let backed = build_rows(
            &catalog,
            &inventory,
            &HashSet::from(["pm1_c5".to_string()]),
            &reference(&["pm1_c5"]),
            "pokemon",
        );
        assert_eq!(backed[0].status, IconStatus::Fallback);
    }

    #[test]
    fn missing_row_uses_zero_sentinel() {
        let catalog = catalog();
        let rows = build_rows(
            &catalog,
            &Inventory::new(),
            &HashSet::new(),
            &reference(&["pm999"]),
            "pokemon",
        );
        let row = &rows[0];
        assert_eq!(row.status, IconStatus::Missing);
        assert_eq!(row.used, "0");
        assert_eq!(row.full, "999");
        assert_eq!(row.local_image, "pokemon/0.png");
    }

    #[test]
    fn labels_for_forms_and_costumes() {
        let catalog = catalog();
        let inventory: Inventory = ["1"].into_iter().collect();
        let rows = build_rows(
            &catalog,
            &inventory,
            &HashSet::new(),
            &reference(&["pm1_c5", "pm1_f2"]),
            "pokemon",
        );
        assert_eq!(rows.len(), 2);
        // Costume entry: base template, named costume.
        assert_eq!(rows[0].form_label, "UNSET (0)");
        assert_eq!(rows[0].costume_label, "HOLIDAY_2019 (5)");
        // Form entry: its own template, no costume name.
        assert_eq!(rows[1].form_label, "BULBASAUR_FALL_2019 (2)");
        assert_eq!(rows[1].costume_label, "0 (0)");
    }
}
