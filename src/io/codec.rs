//! YAML codec for the flat flag mapping.
//!
//! Pure text/mapping conversion; flag semantics live in [`crate::core`].
//! The config file is one top-level mapping of `FLAG_NAME: <bool>` — no
//! nesting, no lists, no non-boolean scalars.

use std::collections::BTreeMap;

/// Decode a YAML document into flag/value pairs.
///
/// Any document that is not a flat mapping of scalar keys to booleans is
/// an error; a parse failure is never smuggled through as a success-shaped
/// mapping. An empty document decodes to an empty mapping.
pub fn decode(raw: &str) -> Result<BTreeMap<String, bool>, serde_yaml::Error> {
    if raw.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    serde_yaml::from_str(raw)
}

/// Encode flag/value pairs as a block-style YAML document, one key per
/// line. Keys come out in mapping iteration order; round-trip equality is
/// over (name, value) sets, not textual order.
pub fn encode(flags: &BTreeMap<String, bool>) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(flags)
}
