use std::collections::HashMap;

use serde::Deserialize;

use uicon_audit_core::IconKey;

/// One species/form/costume/temp-evolution variant from the catalog.
///
/// Immutable value object; one entry may be backed by zero or more on-disk
/// icon files.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    /// Species id; always positive in a well-formed catalog.
    pub id: u32,
    #[serde(default)]
    pub temp_evolution_id: u32,
    #[serde(default)]
    pub form: u32,
    #[serde(default)]
    pub costume: u32,
    /// Present in the dump but unused for resolution.
    #[serde(default)]
    pub gender: u32,
    /// Display name, e.g. "Bulbasaur".
    pub name: String,
    /// Template id of the base species, e.g. "BULBASAUR".
    pub base_template: String,
    /// Template id of this concrete variant; equals `base_template` for
    /// base forms.
    pub template: String,
    /// Canonical reference-asset name for this variant.
    pub asset: String,
}

impl CatalogEntry {
    /// The fully specific icon key for this entry.
    pub fn icon_key(&self, shiny: bool) -> IconKey {
        IconKey {
            species: self.id,
            temp_evolution: self.temp_evolution_id,
            form: self.form,
            costume: self.costume,
            shiny,
        }
    }

    /// Reference-asset name, with the `_shiny` suffix for shiny variants.
    pub fn asset_name(&self, shiny: bool) -> String {
        if shiny {
            format!("{}_shiny", self.asset)
        } else {
            self.asset.clone()
        }
    }
}

/// On-the-wire catalog document.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogDocument {
    pub mons: Vec<CatalogEntry>,
    /// Costume enum as shipped by catalog dumps: display name → numeric id.
    #[serde(default)]
    pub costumes: HashMap<String, u32>,
}
