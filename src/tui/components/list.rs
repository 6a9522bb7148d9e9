//! # List Component (render injection)
//!
//! A collapsible list that knows nothing about what its items look like.
//! The caller passes a render function `Fn(&T) -> Text` and the list
//! applies it to each displayed item:
//!
//! ```rust,ignore
//! List::new("Products", &app.products, &mut tui.products, |product| {
//!     ProductItem::new(product).into_text()
//! })
//! ```
//!
//! ## Architecture
//!
//! `List` is a transient component (created each frame) that wraps
//! `&'a mut ListState` (persistent state) and the items (props). It renders
//! as a [`Widget`] so it can be drawn into a scroll view's buffer; during
//! render it records its layout back into the state for hit testing.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Text;
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::core::toggle::ToggleState;
use crate::tui::component::EventHandler;
use crate::tui::components::chrome::{Chrome, ListLayout};
use crate::tui::event::TuiEvent;

const BULLET: &str = "•";
/// Bullet plus one space of gutter.
const BULLET_WIDTH: u16 = 2;

/// Persistent state for one render-injection list.
#[derive(Debug, Default)]
pub struct ListState {
    pub toggle: ToggleState,
    /// Where the last frame drew the list.
    pub layout: ListLayout,
}

impl EventHandler for ListState {
    /// The state after the change.
    type Event = ToggleState;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ToggleState> {
        match event {
            TuiEvent::ToggleOpen => self.toggle.toggle_open(),
            TuiEvent::ToggleCollapse => self.toggle.toggle_collapse(),
            _ => return None,
        }
        Some(self.toggle)
    }
}

pub struct List<'a, T, F> {
    title: &'a str,
    items: &'a [T],
    state: &'a mut ListState,
    render: F,
    focused: bool,
}

impl<'a, T, F> List<'a, T, F>
where
    F: Fn(&'a T) -> Text<'a>,
{
    pub fn new(title: &'a str, items: &'a [T], state: &'a mut ListState, render: F) -> Self {
        Self {
            title,
            items,
            state,
            render,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Rendered entries for the items currently on screen.
    fn entries(&self) -> Vec<Text<'a>> {
        let toggle = self.state.toggle;
        if !toggle.is_open() {
            return Vec::new();
        }
        toggle
            .visible(self.items)
            .iter()
            .map(|item| (self.render)(item))
            .collect()
    }

    /// Height needed to draw the whole list at `width` columns.
    pub fn height(&self, width: u16) -> u16 {
        Chrome::height(entries_height(&self.entries(), Chrome::body_width(width)))
    }
}

impl<'a, T, F> Widget for List<'a, T, F>
where
    F: Fn(&'a T) -> Text<'a>,
{
    fn render(self, area: Rect, buf: &mut Buffer) {
        let entries = self.entries();
        let chrome = Chrome {
            title: self.title,
            total: self.items.len(),
            toggle: self.state.toggle,
            focused: self.focused,
        };
        let mut layout = chrome.render(area, buf);
        layout.entries = render_entries(entries, layout.body, buf);
        self.state.layout = layout;
    }
}

// ============================================================================
// Entry stacking (shared with ProductList)
// ============================================================================

/// Total rows for `entries` stacked in a column `width` wide.
pub(crate) fn entries_height(entries: &[Text<'_>], width: u16) -> u16 {
    let text_width = width.saturating_sub(BULLET_WIDTH);
    entries
        .iter()
        .map(|text| entry_height(text, text_width))
        .fold(0u16, u16::saturating_add)
}

/// Draw `entries` top to bottom as a bulleted list, returning one rect per
/// entry. Entries that fall outside `area` get an empty rect.
pub(crate) fn render_entries(entries: Vec<Text<'_>>, area: Rect, buf: &mut Buffer) -> Vec<Rect> {
    let text_width = area.width.saturating_sub(BULLET_WIDTH);
    let mut y = area.y;
    let mut rects = Vec::with_capacity(entries.len());

    for text in entries {
        let height = entry_height(&text, text_width);
        let rect = Rect::new(area.x, y, area.width, height).intersection(area);
        if !rect.is_empty() {
            buf.set_string(rect.x, rect.y, BULLET, Style::default().fg(Color::DarkGray));
            let text_area = Rect {
                x: rect.x.saturating_add(BULLET_WIDTH),
                width: text_width,
                ..rect
            };
            entry_paragraph(text).render(text_area, buf);
        }
        rects.push(rect);
        y = y.saturating_add(height);
    }

    rects
}

fn entry_paragraph(text: Text<'_>) -> Paragraph<'_> {
    Paragraph::new(text).wrap(Wrap { trim: true })
}

/// Wrapped height of one entry; at least one row.
fn entry_height(text: &Text<'_>, width: u16) -> u16 {
    if width == 0 {
        return 1;
    }
    let lines = entry_paragraph(text.clone()).line_count(width);
    u16::try_from(lines).unwrap_or(u16::MAX).max(1)
}
