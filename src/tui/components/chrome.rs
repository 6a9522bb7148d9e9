//! # List Chrome
//!
//! The frame both list variants draw around their items:
//!
//! ```text
//! ╭────────────────────────────╮
//! │Products                 [∨]│  header: title + open/close control
//! │• Sleek Steel Chair         │
//! │  $129.00                   │  body: whatever the caller draws
//! │  ...                       │
//! │[ Show less ]               │  footer: collapse control
//! ╰────────────────────────────╯
//! ```
//!
//! The footer is drawn whether or not the list is open, so the collapse
//! control can be clicked while the body is hidden.
//!
//! Rendering returns a [`ListLayout`] recording where the controls landed,
//! which the event loop uses for mouse hit testing.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Widget};
use unicode_width::UnicodeWidthStr;

use crate::core::toggle::ToggleState;

/// Rows taken by the border (2), the header (1) and the footer (1).
pub const CHROME_HEIGHT: u16 = 4;
/// Columns taken by the left and right border.
const CHROME_WIDTH: u16 = 2;

/// What a point inside a list corresponds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListHit {
    ToggleOpen,
    ToggleCollapse,
    /// Index into the currently displayed items.
    Entry(usize),
    /// Inside the body but not on a known entry.
    Body,
}

/// Where the last render put each interactive part, in the coordinates of
/// the buffer the list was rendered into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListLayout {
    pub toggle: Rect,
    pub footer: Rect,
    pub body: Rect,
    /// One rect per displayed entry, in display order.
    pub entries: Vec<Rect>,
}

impl ListLayout {
    pub fn hit(&self, pos: Position) -> Option<ListHit> {
        if self.toggle.contains(pos) {
            return Some(ListHit::ToggleOpen);
        }
        if self.footer.contains(pos) {
            return Some(ListHit::ToggleCollapse);
        }
        if let Some(index) = self.entries.iter().position(|rect| rect.contains(pos)) {
            return Some(ListHit::Entry(index));
        }
        self.body.contains(pos).then_some(ListHit::Body)
    }
}

pub struct Chrome<'a> {
    pub title: &'a str,
    /// Length of the full collection, for the "Show all N" label.
    pub total: usize,
    pub toggle: ToggleState,
    pub focused: bool,
}

impl Chrome<'_> {
    /// Total height for a body of `body_height` rows.
    pub fn height(body_height: u16) -> u16 {
        body_height.saturating_add(CHROME_HEIGHT)
    }

    /// Width available to the body inside a list of `width` columns.
    pub fn body_width(width: u16) -> u16 {
        width.saturating_sub(CHROME_WIDTH)
    }

    /// Draw the border, header and footer. The returned layout has no
    /// entries; the caller fills those in after drawing the body.
    pub fn render(&self, area: Rect, buf: &mut Buffer) -> ListLayout {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let button_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let [header, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        let toggle_label = format!("[{}]", self.toggle.open_glyph());
        let toggle_width = (toggle_label.width() as u16).min(header.width);
        let toggle = Rect {
            x: header.right().saturating_sub(toggle_width),
            width: toggle_width,
            ..header
        };
        let title_area = Rect {
            width: header.width.saturating_sub(toggle_width + 1),
            ..header
        };
        Line::from(Span::styled(
            self.title,
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .render(title_area, buf);
        Line::from(toggle_label)
            .style(button_style)
            .render(toggle, buf);

        let footer_label = format!("[ {} ]", self.toggle.footer_label(self.total));
        let footer_button = Rect {
            width: (footer_label.width() as u16).min(footer.width),
            ..footer
        };
        Line::from(footer_label)
            .style(button_style)
            .render(footer_button, buf);

        ListLayout {
            toggle,
            footer: footer_button,
            body,
            entries: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_lines;

    fn render_chrome(toggle: ToggleState, height: u16) -> (Buffer, ListLayout) {
        let area = Rect::new(0, 0, 30, height);
        let mut buf = Buffer::empty(area);
        let chrome = Chrome {
            title: "Products",
            total: 20,
            toggle,
            focused: false,
        };
        let layout = chrome.render(area, &mut buf);
        (buf, layout)
    }

    #[test]
    fn test_height_adds_chrome() {
        assert_eq!(Chrome::height(0), 4);
        assert_eq!(Chrome::height(10), 14);
        assert_eq!(Chrome::body_width(30), 28);
    }

    #[test]
    fn test_header_and_footer_text() {
        let (buf, _) = render_chrome(ToggleState::default(), 6);
        let lines = buffer_lines(&buf);
        assert!(lines[1].contains("Products"));
        assert!(lines[1].contains("[∨]"));
        assert!(lines[4].contains("[ Show less ]"));
    }

    #[test]
    fn test_collapsed_footer_label() {
        let mut toggle = ToggleState::default();
        toggle.toggle_collapse();
        let (buf, _) = render_chrome(toggle, 6);
        assert!(buffer_lines(&buf)[4].contains("[ Show all 20 ]"));
    }

    #[test]
    fn test_layout_rects() {
        let (_, layout) = render_chrome(ToggleState::default(), 8);
        assert_eq!(layout.toggle, Rect::new(26, 1, 3, 1));
        assert_eq!(layout.body, Rect::new(1, 2, 28, 4));
        assert_eq!(layout.footer, Rect::new(1, 6, 13, 1));
        assert!(layout.entries.is_empty());
    }

    #[test]
    fn test_hit() {
        let mut layout = ListLayout {
            toggle: Rect::new(26, 1, 3, 1),
            footer: Rect::new(1, 6, 13, 1),
            body: Rect::new(1, 2, 28, 4),
            entries: vec![Rect::new(1, 2, 28, 2)],
        };
        assert_eq!(layout.hit(Position::new(27, 1)), Some(ListHit::ToggleOpen));
        assert_eq!(layout.hit(Position::new(5, 6)), Some(ListHit::ToggleCollapse));
        assert_eq!(layout.hit(Position::new(5, 3)), Some(ListHit::Entry(0)));
        assert_eq!(layout.hit(Position::new(5, 5)), Some(ListHit::Body));
        assert_eq!(layout.hit(Position::new(5, 1)), None);

        layout.entries.clear();
        assert_eq!(layout.hit(Position::new(5, 3)), Some(ListHit::Body));
    }
}
