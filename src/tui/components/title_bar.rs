//! # TitleBar Component
//!
//! Top line of the screen: the demo heading, which pattern is showing, and
//! the latest status message.
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Render Props Demo (render props) | Products: closed"`
//! 2. **Default**: `"Render Props Demo (render props)"`
//!
//! TitleBar is purely presentational: it receives all data as props and has
//! no internal state.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Human label of the active demo (e.g. "render props")
    pub demo_label: String,
    /// Status message (e.g. "Products: showing 3 of 20")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(demo_label: String, status_message: String) -> Self {
        Self {
            demo_label,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                "Render Props Demo",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" ({})", self.demo_label)),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new(
            "render props".to_string(),
            "Products: showing 3 of 20".to_string(),
        );
        let text = draw(&mut title_bar);

        assert!(text.contains("Render Props Demo"));
        assert!(text.contains("(render props)"));
        assert!(text.contains("| Products: showing 3 of 20"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new("higher-order component".to_string(), String::new());
        let text = draw(&mut title_bar);

        assert!(text.contains("(higher-order component)"));
        assert!(!text.contains('|'));
    }
}
