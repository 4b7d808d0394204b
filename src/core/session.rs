//! # Session States
//!
//! The menu-driven control loop as a state machine. `Menu` is initial;
//! `Exit` is terminal; `View` and `Add` always hand control back to `Menu`.
//!
//! ```text
//!          ┌──── 1 ────▶ View ──┐
//!          │                    │
//! Menu ────┼──── 2 ────▶ Add ───┼───▶ Menu
//!          │                    │
//!          ├──── 0 ────▶ Exit   │
//!          │                    │
//!          └── other ───────────┘
//! ```
//!
//! The transition function is pure so the dispatch table can be tested by
//! equality. The console adapter owns the return-to-menu edges and the
//! "Invalid option." report (any selection that maps back to `Menu`).

/// One state of the interactive session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Menu,
    View,
    Add,
    Exit,
}

impl SessionState {
    /// Maps a menu selection to the next state. Unrecognized selections
    /// stay in `Menu`, which the caller reports as an invalid option
    /// (no valid selection maps to `Menu`).
    pub fn from_selection(selection: i64) -> Self {
        match selection {
            1 => SessionState::View,
            2 => SessionState::Add,
            0 => SessionState::Exit,
            _ => SessionState::Menu,
        }
    }
}
