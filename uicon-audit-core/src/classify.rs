//! Match-quality classification for resolved icons.

use crate::resolver::Resolution;

/// How well the resolved icon represents the requested (entity, shiny) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconStatus {
    /// Exact icon present, no degradation occurred.
    Full,
    /// A degraded icon was used, but some on-disk file backs this entity's
    /// own reference asset.
    Fallback,
    /// The base entity is represented but an overlay (costume etc.) is
    /// missing. This heuristic is known to misfire for entities whose base
    /// form is ambiguous; the report legend carries the caveat.
    Default,
    /// Nothing usable on disk; the `0` placeholder icon is shown.
    Missing,
}

/// Classify a resolution outcome.
///
/// The rules form an ordered decision table: every predicate is evaluated
/// and the last applicable rule wins. `Missing` is listed last so it always
/// takes precedence, then `Full` over `Fallback` over the `Default`
/// baseline.
pub fn classify(resolution: &Resolution, asset_backed: bool) -> IconStatus {
    let matched = resolution.matched.as_deref();
    let rules = [
        (true, IconStatus::Default),
        (asset_backed, IconStatus::Fallback),
        (matched == Some(resolution.full.as_str()), IconStatus::Full),
        (matched.is_none(), IconStatus::Missing),
    ];

    let mut status = IconStatus::Default;
    for (applies, outcome) in rules {
        if applies {
            status = outcome;
        }
    }
    status
}
