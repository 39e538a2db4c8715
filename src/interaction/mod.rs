use serde::{Deserialize, Serialize};

use crate::core::Point;

/// Pointer and focus state owned by the chart facade.
///
/// The focus key is the only state that survives between layout passes;
/// every pass reads it, none writes it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InteractionState {
    cursor: Option<Point>,
    focus_key: Option<String>,
}

impl InteractionState {
    #[must_use]
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    #[must_use]
    pub fn focus_key(&self) -> Option<&str> {
        self.focus_key.as_deref()
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.cursor = Some(Point::new(x, y));
    }

    pub fn on_pointer_leave(&mut self) {
        self.cursor = None;
        self.focus_key = None;
    }

    /// Replaces the focus key and reports whether it changed.
    pub fn set_focus_key(&mut self, key: Option<String>) -> bool {
        if self.focus_key == key {
            return false;
        }
        self.focus_key = key;
        true
    }
}
