//! # Actions
//!
//! Everything that changes core state becomes an `Action`.
//! User closes a list? That's `Action::ListToggled { .. }`.
//! User presses `m`? That's `Action::SwitchDemo`.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! List toggle state itself belongs to the list components; they report the
//! result here so the status line can describe it.

use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A list was opened, closed, collapsed or expanded.
    ListToggled {
        title: String,
        open: bool,
        shown: usize,
        total: usize,
    },
    SwitchDemo,
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::ListToggled {
            title,
            open,
            shown,
            total,
        } => {
            app.status_message = if open {
                format!("{title}: showing {shown} of {total}")
            } else {
                format!("{title}: closed")
            };
            Effect::None
        }
        Action::SwitchDemo => {
            app.demo = app.demo.next();
            app.status_message = format!("Switched to {}", app.demo.label());
            log::info!("Demo switched to {:?}", app.demo);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
