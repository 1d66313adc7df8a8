//! Read-only display projection handed to the presentation layer.

use super::state::AngleMode;
use serde::{Deserialize, Serialize};

/// What a screen needs to render the calculator after a transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySnapshot {
    /// Main display line: the typed number, a formatted result, `"Error"`,
    /// or `"0"` when nothing is typed.
    pub primary_text: String,
    /// Trace of the pending binary operation, e.g. `"5 + "`.
    pub expression_text: String,
    /// Set whenever the memory register is non-zero.
    pub memory_flag: bool,
    pub angle_mode: AngleMode,
}

impl DisplaySnapshot {
    pub fn is_error(&self) -> bool {
        self.primary_text == super::state::ERROR_TEXT
    }
}
