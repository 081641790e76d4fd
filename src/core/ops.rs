//! Operation engine: target resolution and output rendering.
//!
//! Everything here is pure; printing and persistence stay in `main` and
//! [`crate::io`].

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::core::store::FlagStore;
use crate::error::{Error, Result};

/// Output modes for the `list` operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    /// Human-readable aligned columns, one row per flag.
    Default,
    /// One space-joined line of `NAME=1`/`NAME=0` tokens for shell eval.
    Bash,
    /// Single-line rendering of the full mapping, for diagnostics.
    Structured,
}

impl FromStr for ListFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "default" => Ok(ListFormat::Default),
            "bash" => Ok(ListFormat::Bash),
            "structured" => Ok(ListFormat::Structured),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Boolean rendering used by `get` and the bash listing.
pub fn render_bool(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

/// Resolve the target list for a `set`/`unset` batch.
///
/// `--all` with a non-empty explicit list is a fatal conflict; `--all`
/// alone expands to every declared name.
pub fn resolve_targets(store: &FlagStore, names: Vec<String>, all: bool) -> Result<Vec<String>> {
    if !all {
        return Ok(names);
    }
    if !names.is_empty() {
        return Err(Error::ConflictingModifier);
    }
    tracing::warn!("--all is active; the operation affects every declared flag");
    Ok(store.all_names())
}

/// Render the listing for `format`, without a trailing newline.
pub fn render_list(store: &FlagStore, format: ListFormat) -> String {
    match format {
        ListFormat::Default => {
            let width = store.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
            store
                .iter()
                .map(|(name, value)| format!("{name:<width$} : [{value:<5}]"))
                .collect::<Vec<_>>()
                .join("\n")
        }
        ListFormat::Bash => store
            .iter()
            .map(|(name, value)| format!("{name}={}", render_bool(value)))
            .collect::<Vec<_>>()
            .join(" "),
        ListFormat::Structured => {
            let snapshot: BTreeMap<&str, bool> = store.iter().collect();
            format!("{snapshot:?}")
        }
    }
}
