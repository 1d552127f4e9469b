//! Color workspace - shared color state with linear undo/redo.
//!
//! The workspace holds the committed color, an ordered history of
//! snapshots with a current-index pointer, and a bounded most-recently-used
//! list of hex values. Committing after an undo truncates the redone tail,
//! which gives standard linear (non-branching) undo/redo semantics.
//!
//! State lives behind a mutex so tool calls arriving over concurrent TCP
//! or HTTP connections stay consistent; every operation is a single short
//! critical section.

use std::sync::Mutex;

use tracing::debug;

use super::space::Color;
use crate::core::config::ColorConfig;

/// Shared color editing state for the color tools.
pub struct ColorWorkspace {
    state: Mutex<WorkspaceState>,
    recent_limit: usize,
}

struct WorkspaceState {
    /// Ordered color snapshots; `index` points at the committed one.
    history: Vec<Color>,
    index: usize,
    /// Most-recent-first hex values, deduplicated, capped at `recent_limit`.
    recent: Vec<String>,
}

/// Outcome of an undo/redo step: the now-committed color and whether the
/// history index actually moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub color: Color,
    pub moved: bool,
}

impl ColorWorkspace {
    /// Create a workspace seeded with the configured default color.
    ///
    /// An unparseable `default_hex` falls back to the stock default rather
    /// than failing startup.
    pub fn new(config: &ColorConfig) -> Self {
        let initial = Color::from_hex(&config.default_hex).unwrap_or_else(|_| {
            debug!(
                "Configured default color '{}' is invalid, using built-in default",
                config.default_hex
            );
            Color::from_hex(ColorConfig::BUILTIN_DEFAULT_HEX)
                .unwrap_or_else(|_| unreachable!("built-in default hex is valid"))
        });

        // The seed color is committed state but not a user action, so the
        // recent list starts empty.
        Self {
            state: Mutex::new(WorkspaceState {
                history: vec![initial],
                index: 0,
                recent: Vec::new(),
            }),
            recent_limit: config.recent_limit,
        }
    }

    /// The currently committed color.
    pub fn current(&self) -> Color {
        let state = self.lock();
        state.history[state.index].clone()
    }

    /// Commit a new color: truncate any redo tail, append the snapshot,
    /// advance the index and record the hex in the recent list.
    pub fn commit(&self, color: Color) -> Color {
        let mut state = self.lock();

        let keep = state.index + 1;
        state.history.truncate(keep);
        state.history.push(color.clone());
        state.index = keep;

        if !state.recent.iter().any(|hex| *hex == color.hex) {
            state.recent.insert(0, color.hex.clone());
            state.recent.truncate(self.recent_limit);
        }

        debug!(
            hex = %color.hex,
            index = state.index,
            "Committed color"
        );
        color
    }

    /// Step back one snapshot. A no-op at the start of history.
    pub fn undo(&self) -> StepOutcome {
        let mut state = self.lock();
        let moved = state.index > 0;
        if moved {
            state.index -= 1;
        }
        StepOutcome {
            color: state.history[state.index].clone(),
            moved,
        }
    }

    /// Step forward one snapshot. A no-op at the end of history.
    pub fn redo(&self) -> StepOutcome {
        let mut state = self.lock();
        let moved = state.index + 1 < state.history.len();
        if moved {
            state.index += 1;
        }
        StepOutcome {
            color: state.history[state.index].clone(),
            moved,
        }
    }

    /// The recent-colors list, most recent first.
    pub fn recent(&self) -> Vec<String> {
        self.lock().recent.clone()
    }

    /// Empty the recent-colors list. History is unaffected.
    pub fn clear_recent(&self) {
        self.lock().recent.clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, WorkspaceState> {
        // A poisoned lock means a panic mid-operation; every operation keeps
        // the state internally consistent, so continuing is safe.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn workspace() -> ColorWorkspace {
        ColorWorkspace::new(&ColorConfig::default())
    }

    fn color(hex: &str) -> Color {
        Color::from_hex(hex).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let ws = workspace();
        assert_eq!(ws.current().hex, "#6366f1");
        assert!(ws.recent().is_empty());
        assert!(!ws.undo().moved);
    }

    #[test]
    fn test_invalid_default_falls_back() {
        let config = ColorConfig {
            default_hex: "not-a-color".to_string(),
            ..ColorConfig::default()
        };
        let ws = ColorWorkspace::new(&config);
        assert_eq!(ws.current().hex, ColorConfig::BUILTIN_DEFAULT_HEX);
    }

    #[test]
    fn test_commit_advances_current() {
        let ws = workspace();
        ws.commit(color("#ff0000"));
        assert_eq!(ws.current().hex, "#ff0000");
        ws.commit(color("#00ff00"));
        assert_eq!(ws.current().hex, "#00ff00");
    }

    #[test]
    fn test_undo_redo_restores_snapshots_exactly() {
        let ws = workspace();
        let red = ws.commit(color("#ff0000"));
        let green = ws.commit(color("#00ff00"));
        let blue = ws.commit(color("#0000ff"));

        assert_eq!(ws.undo(), StepOutcome { color: green.clone(), moved: true });
        assert_eq!(ws.undo(), StepOutcome { color: red.clone(), moved: true });
        assert_eq!(ws.redo(), StepOutcome { color: green, moved: true });
        assert_eq!(ws.redo(), StepOutcome { color: blue, moved: true });
    }

    #[test]
    fn test_undo_redo_noop_at_bounds() {
        let ws = workspace();
        let initial = ws.current();

        let outcome = ws.undo();
        assert!(!outcome.moved);
        assert_eq!(outcome.color, initial);

        let outcome = ws.redo();
        assert!(!outcome.moved);
        assert_eq!(outcome.color, initial);
    }

    #[test]
    fn test_commit_after_undo_truncates_redo_tail() {
        let ws = workspace();
        ws.commit(color("#ff0000"));
        ws.commit(color("#00ff00"));
        ws.undo();

        ws.commit(color("#123456"));
        assert_eq!(ws.current().hex, "#123456");

        // The green branch is gone.
        assert!(!ws.redo().moved);
        assert_eq!(ws.undo().color.hex, "#ff0000");
    }

    #[test]
    fn test_recent_dedup_and_order() {
        let ws = workspace();
        ws.commit(color("#ff0000"));
        ws.commit(color("#00ff00"));
        ws.commit(color("#ff0000")); // already present, not re-added

        assert_eq!(ws.recent(), vec!["#00ff00", "#ff0000"]);
    }

    #[test]
    fn test_recent_capped_at_limit() {
        let config = ColorConfig {
            recent_limit: 3,
            ..ColorConfig::default()
        };
        let ws = ColorWorkspace::new(&config);
        for hex in ["#000001", "#000002", "#000003", "#000004"] {
            ws.commit(color(hex));
        }

        let recent = ws.recent();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent, vec!["#000004", "#000003", "#000002"]);
    }

    #[test]
    fn test_clear_recent_keeps_history() {
        let ws = workspace();
        ws.commit(color("#ff0000"));
        ws.clear_recent();

        assert!(ws.recent().is_empty());
        assert!(ws.undo().moved);
    }
}
