use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::CatalogError;
use crate::types::{CatalogDocument, CatalogEntry};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// The loaded catalog with its lookup indexes.
pub struct Catalog {
    /// Entries sorted by (species id, form id) — the stable order the
    /// report walks in.
    entries: Vec<CatalogEntry>,
    costume_names: HashMap<u32, String>,
    by_key: HashMap<(u32, u32, u32, u32), usize>,
}

impl Catalog {
    /// Build the catalog from a parsed document.
    pub fn from_document(doc: CatalogDocument) -> Self {
        let mut entries = doc.mons;
        entries.sort_by_key(|e| (e.id, e.form));

        let mut by_key = HashMap::new();
        for (i, entry) in entries.iter().enumerate() {
            by_key
                .entry((entry.id, entry.temp_evolution_id, entry.form, entry.costume))
                .or_insert(i);
        }

        let costume_names = doc
            .costumes
            .into_iter()
            .map(|(name, id)| (id, name))
            .collect();

        Self {
            entries,
            costume_names,
            by_key,
        }
    }

    /// Load the catalog document from a local JSON file.
    pub fn load_file(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;
        let doc: CatalogDocument = serde_json::from_str(&contents)?;
        Ok(Self::from_document(doc))
    }

    /// Fetch the catalog document from an HTTP(S) URL.
    pub fn fetch(url: &str) -> Result<Self, CatalogError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()?;
        let response = client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::fetch(format!("HTTP {status} for {url}")));
        }
        let doc: CatalogDocument = serde_json::from_str(&response.text()?)?;
        log::info!("fetched catalog from {url}");
        Ok(Self::from_document(doc))
    }

    /// Load from either a URL or a local path, decided by the scheme.
    pub fn load(source: &str) -> Result<Self, CatalogError> {
        if source.starts_with("http://") || source.starts_with("https://") {
            Self::fetch(source)
        } else {
            Self::load_file(Path::new(source))
        }
    }

    /// All entries in (species id, form id) order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Reverse costume lookup: numeric id → display name.
    pub fn costume_name(&self, id: u32) -> Option<&str> {
        self.costume_names.get(&id).map(String::as_str)
    }

    /// Find the entry with exactly these attributes.
    pub fn lookup(
        &self,
        species: u32,
        temp_evolution: u32,
        form: u32,
        costume: u32,
    ) -> Option<&CatalogEntry> {
        self.by_key
            .get(&(species, temp_evolution, form, costume))
            .map(|&i| &self.entries[i])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DOC: &str = r#"{
        "mons": [
            {"id": 3, "name": "Venusaur", "base_template": "VENUSAUR",
             "template": "VENUSAUR", "asset": "pm3"},
            {"id": 1, "form": 2, "name": "Bulbasaur", "base_template": "BULBASAUR",
             "template": "BULBASAUR_FALL_2019", "asset": "pm1_f2"},
            {"id": 1, "costume": 5, "name": "Bulbasaur", "base_template": "BULBASAUR",
             "template": "BULBASAUR", "asset": "pm1_c5"},
            {"id": 1, "name": "Bulbasaur", "base_template": "BULBASAUR",
             "template": "BULBASAUR", "asset": "pm1"}
        ],
        "costumes": {"HOLIDAY_2019": 5, "FALL_2019": 2}
    }"#;

    fn load() -> Catalog {
        let doc: CatalogDocument = serde_json::from_str(DOC).unwrap();
        Catalog::from_document(doc)
    }

    #[test]
    fn entries_sorted_by_species_then_form() {
        let catalog = load();
        let order: Vec<(u32, u32)> = catalog.entries().iter().map(|e| (e.id, e.form)).collect();
        assert_eq!(order, vec![(1, 0), (1, 0), (1, 2), (3, 0)]);
    }

    #[test]
    fn missing_numeric_fields_default_to_zero() {
        let catalog = load();
        let venusaur = catalog.lookup(3, 0, 0, 0).unwrap();
        assert_eq!(venusaur.temp_evolution_id, 0);
        assert_eq!(venusaur.costume, 0);
        assert_eq!(venusaur.gender, 0);
    }

    #[test]
    fn lookup_by_attribute_combination() {
        let catalog = load();
        assert_eq!(catalog.lookup(1, 0, 0, 5).unwrap().asset, "pm1_c5");
        assert_eq!(catalog.lookup(1, 0, 2, 0).unwrap().asset, "pm1_f2");
        assert!(catalog.lookup(1, 1, 0, 0).is_none());
    }

    #[test]
    fn costume_reverse_map() {
        let catalog = load();
        assert_eq!(catalog.costume_name(5), Some("HOLIDAY_2019"));
        assert_eq!(catalog.costume_name(99), None);
    }

    #[test]
    fn entry_asset_name_and_key() {
        let catalog = load();
        let entry = catalog.lookup(1, 0, 0, 5).unwrap();
        assert_eq!(entry.asset_name(false), "pm1_c5");
        assert_eq!(entry.asset_name(true), "pm1_c5_shiny");
        assert_eq!(entry.icon_key(true).canonical(), "1_c5_s");
    }

    #[test]
    fn load_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DOC.as_bytes()).unwrap();
        let catalog = Catalog::load_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 4);
    }
}
