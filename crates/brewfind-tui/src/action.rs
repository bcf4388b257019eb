//! All possible UI actions. Actions are the sole mechanism for state mutation.

use brewfind_core::FinderEvent;

/// Every state transition in the TUI is expressed as an Action.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Tick,
    Render,

    // ── Navigation ────────────────────────────────────────────────
    FocusNext,
    FocusPrev,

    // ── Help ──────────────────────────────────────────────────────
    ToggleHelp,

    // ── Finder state (fetch outcome and filter inputs) ───────────
    Finder(FinderEvent),
}
