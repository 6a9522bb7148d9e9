use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use std::time::Duration;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    SwitchDemo,
    FocusNext,

    // Routed to the focused list
    ToggleOpen,
    ToggleCollapse,

    // Keyboard stand-in for the mouse pointer
    PointerUp,
    PointerDown,

    // Keyboard scrolling, applied to the focused column
    ScrollPageUp,
    ScrollPageDown,

    // Mouse input carries the screen position
    WheelUp(u16, u16),
    WheelDown(u16, u16),
    MouseMove(u16, u16),
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`. Terminal errors read as "no event".
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    if !matches!(event::poll(timeout), Ok(true)) {
        return None;
    }
    match event::read() {
        Ok(raw) => map_event(raw),
        Err(e) => {
            log::warn!("Failed to read terminal event: {e}");
            None
        }
    }
}

/// Translate a crossterm event into a `TuiEvent`.
pub fn map_event(raw: Event) -> Option<TuiEvent> {
    match raw {
        Event::Key(key_event) => {
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
                (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                (_, KeyCode::Char('m')) => Some(TuiEvent::SwitchDemo),
                (_, KeyCode::Tab) | (_, KeyCode::BackTab) => Some(TuiEvent::FocusNext),
                (_, KeyCode::Char('o')) | (_, KeyCode::Enter) => Some(TuiEvent::ToggleOpen),
                (_, KeyCode::Char('c')) | (_, KeyCode::Char(' ')) => {
                    Some(TuiEvent::ToggleCollapse)
                }
                (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(TuiEvent::PointerUp),
                (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Some(TuiEvent::PointerDown),
                (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
                (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Moved => Some(TuiEvent::MouseMove(mouse_event.column, mouse_event.row)),
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::ScrollUp => {
                Some(TuiEvent::WheelUp(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::ScrollDown => {
                Some(TuiEvent::WheelDown(mouse_event.column, mouse_event.row))
            }
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, MouseEvent};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_toggle_keys() {
        assert_eq!(map_event(key(KeyCode::Char('o'))), Some(TuiEvent::ToggleOpen));
        assert_eq!(map_event(key(KeyCode::Enter)), Some(TuiEvent::ToggleOpen));
        assert_eq!(map_event(key(KeyCode::Char('c'))), Some(TuiEvent::ToggleCollapse));
        assert_eq!(map_event(key(KeyCode::Char(' '))), Some(TuiEvent::ToggleCollapse));
    }

    #[test]
    fn test_ctrl_c_quits_but_plain_c_collapses() {
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(map_event(ctrl_c), Some(TuiEvent::Quit));
        assert_eq!(map_event(key(KeyCode::Char('c'))), Some(TuiEvent::ToggleCollapse));
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(map_event(key(KeyCode::Tab)), Some(TuiEvent::FocusNext));
        assert_eq!(map_event(key(KeyCode::Down)), Some(TuiEvent::PointerDown));
        assert_eq!(map_event(key(KeyCode::Char('k'))), Some(TuiEvent::PointerUp));
        assert_eq!(map_event(key(KeyCode::Char('m'))), Some(TuiEvent::SwitchDemo));
        assert_eq!(map_event(key(KeyCode::Esc)), Some(TuiEvent::Quit));
        assert_eq!(map_event(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut release = KeyEvent::new(KeyCode::Char('o'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(map_event(Event::Key(release)), None);
    }

    #[test]
    fn test_mouse_events() {
        assert_eq!(
            map_event(mouse(MouseEventKind::Moved, 4, 9)),
            Some(TuiEvent::MouseMove(4, 9))
        );
        assert_eq!(
            map_event(mouse(MouseEventKind::Down(MouseButton::Left), 1, 2)),
            Some(TuiEvent::MouseClick(1, 2))
        );
        assert_eq!(map_event(mouse(MouseEventKind::Down(MouseButton::Right), 1, 2)), None);
        assert_eq!(
            map_event(mouse(MouseEventKind::ScrollDown, 70, 5)),
            Some(TuiEvent::WheelDown(70, 5))
        );
        assert_eq!(
            map_event(mouse(MouseEventKind::ScrollUp, 3, 8)),
            Some(TuiEvent::WheelUp(3, 8))
        );
    }

    #[test]
    fn test_page_keys_scroll_by_page() {
        assert_eq!(map_event(key(KeyCode::PageDown)), Some(TuiEvent::ScrollPageDown));
        assert_eq!(map_event(key(KeyCode::PageUp)), Some(TuiEvent::ScrollPageUp));
    }

    #[test]
    fn test_resize() {
        assert_eq!(map_event(Event::Resize(80, 24)), Some(TuiEvent::Resize));
    }
}
