//! Behavior flags for the variant divergences observed in the field.

use serde::{Deserialize, Serialize};

/// Configuration for the selection resolver and monitor.
///
/// The two flags unify the observed implementation variants instead of
/// forking the core: one build rejected parentless elements up front and
/// re-checked the selection on a timer, the other relied on the selection
/// event alone and let the mutation path surface the orphan error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlagConfig {
    /// Report a parentless element as invalid during classification.
    /// Resolution always requires a parent page regardless.
    pub strict_parent_page_check: bool,
    /// Allow timer-driven selection re-checks in addition to events.
    pub selection_polling_enabled: bool,
}

impl Default for FlagConfig {
    fn default() -> Self {
        Self {
            strict_parent_page_check: true,
            selection_polling_enabled: false,
        }
    }
}
