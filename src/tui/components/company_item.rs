//! # Company Item
//!
//! Renders one company, showing its catchphrase only while the pointer is
//! over the entry.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CompanyItemState` is the per-entry Hidden/Visible state
//! - `CompanyItems` holds the states of the entries currently on screen
//! - `CompanyItem` is created each frame with the resolved flag
//!
//! An entry's state lives only while the entry is displayed. When the list
//! closes, collapses past it, or the demo switches away, the state is
//! dropped; showing the entry again starts from the default flag.

use std::collections::HashMap;

use log::debug;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use uuid::Uuid;

use crate::core::data::Company;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanyItemState {
    is_visible: bool,
}

impl CompanyItemState {
    pub fn new(is_visible: bool) -> Self {
        Self { is_visible }
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    pub fn on_pointer_enter(&mut self) {
        self.is_visible = true;
    }

    pub fn on_pointer_leave(&mut self) {
        self.is_visible = false;
    }
}

/// States of the mounted company entries, keyed by company id.
#[derive(Debug)]
pub struct CompanyItems {
    default_visibility: bool,
    mounted: HashMap<Uuid, CompanyItemState>,
}

impl CompanyItems {
    pub fn new(default_visibility: bool) -> Self {
        Self {
            default_visibility,
            mounted: HashMap::new(),
        }
    }

    /// Make `ids` the set of mounted entries: new ids start from the
    /// default flag, ids no longer displayed lose their state.
    pub fn mount(&mut self, ids: impl IntoIterator<Item = Uuid>) {
        let mut next = HashMap::new();
        for id in ids {
            let state = self
                .mounted
                .get(&id)
                .copied()
                .unwrap_or(CompanyItemState::new(self.default_visibility));
            next.insert(id, state);
        }
        if next.len() != self.mounted.len() {
            debug!("Company entries mounted: {} -> {}", self.mounted.len(), next.len());
        }
        self.mounted = next;
    }

    pub fn is_mounted(&self, id: Uuid) -> bool {
        self.mounted.contains_key(&id)
    }

    /// Visibility of a mounted entry; unmounted entries report the default.
    pub fn is_visible(&self, id: Uuid) -> bool {
        self.mounted
            .get(&id)
            .map_or(self.default_visibility, CompanyItemState::is_visible)
    }

    pub fn pointer_enter(&mut self, id: Uuid) {
        if let Some(state) = self.mounted.get_mut(&id) {
            state.on_pointer_enter();
        }
    }

    pub fn pointer_leave(&mut self, id: Uuid) {
        if let Some(state) = self.mounted.get_mut(&id) {
            state.on_pointer_leave();
        }
    }
}

/// Transient renderer for one company entry.
#[derive(Clone, Copy)]
pub struct CompanyItem<'a> {
    pub company: &'a Company,
    pub is_visible: bool,
}

impl<'a> CompanyItem<'a> {
    pub fn new(company: &'a Company, is_visible: bool) -> Self {
        Self {
            company,
            is_visible,
        }
    }

    pub fn into_text(self) -> Text<'a> {
        let mut lines = vec![Line::from(Span::styled(
            self.company.name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        if self.is_visible {
            lines.push(Line::from(vec![
                Span::styled("About:", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" "),
                Span::raw(self.company.catchphrase.as_str()),
            ]));
        }
        Text::from(lines)
    }
}
