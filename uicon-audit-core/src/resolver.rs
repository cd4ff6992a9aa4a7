//! Fallback resolution: find the most specific on-disk icon for a key.
//!
//! When the exact icon is missing, optional attributes are dropped one at a
//! time in a fixed priority order until an on-disk icon is found. Shiny
//! status is sacrificed first, then costume, then form, then temp evolution
//! last — a shiny costume icon degrades to the plain costume icon before it
//! degrades to the shiny base icon.

use crate::inventory::Inventory;
use crate::key::IconKey;

/// Outcome of resolving one (entity, shiny) pair against the inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The first candidate present in the inventory, most specific first.
    /// `None` when even the bare species icon is missing.
    pub matched: Option<String>,
    /// The fully specific identifier, reported even when never matched.
    pub full: String,
}

/// Segment candidates for one optional attribute: the populated segment
/// first, then the empty fallback. Zero-valued attributes only ever yield
/// the empty segment — resolution drops attributes, it never substitutes.
fn segment_options(prefix: char, value: u32) -> Vec<String> {
    if value > 0 {
        vec![format!("_{prefix}{value}"), String::new()]
    } else {
        vec![String::new()]
    }
}

fn shiny_options(shiny: bool) -> Vec<String> {
    if shiny {
        vec!["_s".to_string(), String::new()]
    } else {
        vec![String::new()]
    }
}

/// Resolve `key` against the inventory.
///
/// Candidates are enumerated as the product of the four degradation steps in
/// their literal priority order: temp evolution outermost, then form, then
/// costume, shiny innermost. That order is a fixed business rule about which
/// visual fidelity to give up first; do not permute it.
pub fn resolve(key: &IconKey, inventory: &Inventory) -> Resolution {
    let megas = segment_options('e', key.temp_evolution);
    let forms = segment_options('f', key.form);
    let costumes = segment_options('c', key.costume);
    let shinies = shiny_options(key.shiny);

    let species = key.species.to_string();
    let full = key.canonical();

    for mega in &megas {
        for form in &forms {
            for costume in &costumes {
                for shiny in &shinies {
                    let candidate = format!("{species}{mega}{form}{costume}{shiny}");
                    if inventory.contains(&candidate) {
                        return Resolution {
                            matched: Some(candidate),
                            full,
                        };
                    }
                }
            }
        }
    }

    Resolution {
        matched: None,
        full,
    }
}
