//! Parser and formatter for UICON filename stems.
//!
//! A UICON stem encodes one icon variant:
//! ```text
//! {species}[_e{mega}][_f{form}][_c{costume}][_g{gender}][_s]
//! ```
//!
//! The species id is mandatory; every other segment is optional and its
//! omission means zero (or non-shiny). Files found in the wild sometimes
//! carry segments in odd orders, so parsing scans tokens by prefix, but the
//! canonical form produced by [`IconKey::canonical`] always uses the fixed
//! order above.

use std::fmt;

/// Errors from parsing a UICON filename stem.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The stem is empty or its leading token is not a number.
    #[error("leading species token is not numeric: {0:?}")]
    BadSpecies(String),

    /// `0` is the placeholder "missing" icon, not a species.
    #[error("species id must be greater than zero")]
    ZeroSpecies,
}

/// The attributes of one concrete icon, normalized for resolution.
///
/// Two keys are equal iff every resolution attribute matches. Gender is
/// deliberately not part of the key — see [`ParsedIcon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconKey {
    pub species: u32,
    pub temp_evolution: u32,
    pub form: u32,
    pub costume: u32,
    pub shiny: bool,
}

impl IconKey {
    /// Canonical string form: species id, then `_e`, `_f`, `_c` segments for
    /// each nonzero attribute, then `_s` when shiny. The segment order is
    /// fixed and must not be permuted.
    pub fn canonical(&self) -> String {
        let mut s = self.species.to_string();
        if self.temp_evolution > 0 {
            s.push_str("_e");
            s.push_str(&self.temp_evolution.to_string());
        }
        if self.form > 0 {
            s.push_str("_f");
            s.push_str(&self.form.to_string());
        }
        if self.costume > 0 {
            s.push_str("_c");
            s.push_str(&self.costume.to_string());
        }
        if self.shiny {
            s.push_str("_s");
        }
        s
    }
}

impl fmt::Display for IconKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

/// A parsed filename stem: the resolution key plus the parse-only gender id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedIcon {
    pub key: IconKey,
    /// Appears in some stems as a `g{n}` token but never participates in
    /// resolution or key equality.
    pub gender: u32,
}

/// Parse a filename stem (extension already removed) into its attributes.
///
/// The leading token must be a positive integer. Later tokens are scanned
/// for `e`/`f`/`c`/`g` prefixed integers; the first well-formed occurrence
/// of each prefix wins and anything unrecognized is ignored. Shininess comes
/// from a trailing `_s` on the raw stem, which the prefix scan does not see.
pub fn parse_icon_name(stem: &str) -> Result<ParsedIcon, ParseError> {
    let mut tokens = stem.split('_');
    let lead = tokens.next().unwrap_or("");
    let species: u32 = lead
        .parse()
        .map_err(|_| ParseError::BadSpecies(lead.to_string()))?;
    if species == 0 {
        return Err(ParseError::ZeroSpecies);
    }

    let rest: Vec<&str> = tokens.collect();
    Ok(ParsedIcon {
        key: IconKey {
            species,
            temp_evolution: scan_attr(&rest, 'e'),
            form: scan_attr(&rest, 'f'),
            costume: scan_attr(&rest, 'c'),
            shiny: stem.ends_with("_s"),
        },
        gender: scan_attr(&rest, 'g'),
    })
}

/// First token matching `{prefix}{integer}` wins; malformed tokens are
/// skipped rather than rejected.
fn scan_attr(tokens: &[&str], prefix: char) -> u32 {
    tokens
        .iter()
        .filter_map(|t| t.strip_prefix(prefix))
        .find_map(|v| v.parse().ok())
        .unwrap_or(0)
}
