//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates input into component state changes and `core::Action`s.
//!
//! ## Screen Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ Render Props Demo (render props) | status    │  TitleBar
//! ├──────────────────────┬───────────────────────┤
//! │ column 0             │ column 1              │  one list per column,
//! │ (scrolls)            │ (scrolls)             │  chosen by the demo
//! ├──────────────────────┴───────────────────────┤
//! │ key help                                     │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop blocks on input (up to 250ms), drains all
//! pending events, and redraws only when at least one arrived.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::layout::{Position, Rect};
use tui_scrollview::ScrollViewState;
use uuid::Uuid;

use crate::Demo;
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    CompanyItems, ListHit, ListLayout, ListState, ProductList, WithToggles, with_toggles,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(250);

/// The lists that can occupy a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelId {
    /// Render-injection list of products
    Products,
    /// Render-injection list of companies
    Companies,
    /// Bare `ProductList`, no toggles
    PlainProducts,
    /// `with_toggles(ProductList)`
    ProductsHoc,
}

impl PanelId {
    /// Left and right column for a demo.
    pub fn for_demo(demo: Demo) -> [PanelId; 2] {
        match demo {
            Demo::RenderProps => [PanelId::Products, PanelId::Companies],
            Demo::Hoc => [PanelId::PlainProducts, PanelId::ProductsHoc],
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PanelId::Products | PanelId::PlainProducts => "Products",
            PanelId::Companies => "Companies",
            PanelId::ProductsHoc => "Products HOC",
        }
    }
}

/// The entry under the mouse, or under the keyboard pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pointer {
    pub panel: PanelId,
    /// Index into the panel's displayed items.
    pub entry: usize,
}

/// Scroll state and on-screen position of one column.
#[derive(Default)]
pub struct Column {
    pub area: Rect,
    pub scroll: ScrollViewState,
    /// Content height from the last frame.
    pub content_height: u16,
}

impl Column {
    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.area.height);
        let current = self.scroll.offset();
        if current.y > max_y {
            self.scroll.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Scroll so `rect` (content coordinates) is fully visible, aligning its
    /// top edge if it is taller than the viewport.
    pub fn scroll_to(&mut self, rect: Rect) {
        let offset_y = self.scroll.offset().y;
        if rect.y < offset_y {
            self.scroll.set_offset(Position { x: 0, y: rect.y });
        } else if rect.bottom() > offset_y + self.area.height {
            let new_y = rect
                .bottom()
                .saturating_sub(self.area.height)
                .min(rect.y);
            self.scroll.set_offset(Position { x: 0, y: new_y });
        }
    }

    /// Map a screen position inside this column to content coordinates.
    fn to_content(&self, screen: Position) -> Option<Position> {
        if !self.area.contains(screen) {
            return None;
        }
        let offset = self.scroll.offset();
        Some(Position {
            x: screen.x - self.area.x + offset.x,
            y: screen.y - self.area.y + offset.y,
        })
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Render-injection lists
    pub products: ListState,
    pub companies: ListState,
    pub company_items: CompanyItems,
    // Wrapping-function list; owns its own toggle state
    pub products_hoc: WithToggles<ProductList>,
    pub columns: [Column; 2],
    /// Index of the column keyboard toggles apply to
    pub focus: usize,
    pub pointer: Option<Pointer>,
    /// Last screen position reported by the mouse, while it drives the pointer
    pub mouse: Option<Position>,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        let mut state = Self {
            products: ListState::default(),
            companies: ListState::default(),
            company_items: CompanyItems::new(app.default_visibility),
            products_hoc: with_toggles(ProductList),
            columns: Default::default(),
            focus: 0,
            pointer: None,
            mouse: None,
        };
        state.sync_company_items(app);
        state
    }

    fn layout_of(&self, panel: PanelId) -> Option<&ListLayout> {
        match panel {
            PanelId::Products => Some(&self.products.layout),
            PanelId::Companies => Some(&self.companies.layout),
            PanelId::ProductsHoc => Some(self.products_hoc.layout()),
            PanelId::PlainProducts => None,
        }
    }

    /// Mount exactly the company entries that are on screen.
    pub fn sync_company_items(&mut self, app: &App) {
        let toggle = self.companies.toggle;
        let on_screen =
            PanelId::for_demo(app.demo).contains(&PanelId::Companies) && toggle.is_open();
        let ids: Vec<Uuid> = if on_screen {
            toggle.visible(&app.companies).iter().map(|c| c.id).collect()
        } else {
            Vec::new()
        };
        self.company_items.mount(ids);
    }

    /// Id of the item displayed at `entry` in `panel`, if any.
    fn item_at(&self, app: &App, panel: PanelId, entry: usize) -> Option<Uuid> {
        match panel {
            PanelId::Products => {
                let toggle = self.products.toggle;
                toggle
                    .is_open()
                    .then(|| toggle.visible(&app.products).get(entry).map(|p| p.id))
                    .flatten()
            }
            PanelId::Companies => {
                let toggle = self.companies.toggle;
                toggle
                    .is_open()
                    .then(|| toggle.visible(&app.companies).get(entry).map(|c| c.id))
                    .flatten()
            }
            PanelId::PlainProducts | PanelId::ProductsHoc => None,
        }
    }

    /// Id of the item under the pointer, if it is in a visible panel.
    pub fn hovered_id(&self, app: &App) -> Option<Uuid> {
        let pointer = self.pointer?;
        if !PanelId::for_demo(app.demo).contains(&pointer.panel) {
            return None;
        }
        self.item_at(app, pointer.panel, pointer.entry)
    }

    /// Move the pointer, sending leave to the old company entry and enter
    /// to the new one.
    pub fn set_pointer(&mut self, app: &App, pointer: Option<Pointer>) {
        if self.pointer == pointer {
            return;
        }
        if let Some(old) = self.pointer
            && old.panel == PanelId::Companies
            && let Some(id) = self.item_at(app, old.panel, old.entry)
        {
            self.company_items.pointer_leave(id);
        }
        if let Some(new) = pointer
            && new.panel == PanelId::Companies
            && let Some(id) = self.item_at(app, new.panel, new.entry)
        {
            self.company_items.pointer_enter(id);
        }
        debug!("Pointer: {:?} -> {:?}", self.pointer, pointer);
        self.pointer = pointer;
    }

    /// Find the column, panel and list part under a screen position.
    pub fn hit_test(&self, demo: Demo, col: u16, row: u16) -> Option<(usize, PanelId, ListHit)> {
        let screen = Position::new(col, row);
        self.columns
            .iter()
            .zip(PanelId::for_demo(demo))
            .enumerate()
            .find_map(|(index, (column, panel))| {
                let content = column.to_content(screen)?;
                let hit = self.layout_of(panel)?.hit(content)?;
                Some((index, panel, hit))
            })
    }

    /// Index of the column whose screen area contains a position.
    fn column_at(&self, col: u16, row: u16) -> Option<usize> {
        let screen = Position::new(col, row);
        self.columns
            .iter()
            .position(|column| column.area.contains(screen))
    }

    /// Point at whatever entry is under the mouse now. Scrolling moves
    /// entries under a still mouse, so this runs after every scroll too.
    fn refresh_mouse_pointer(&mut self, app: &App) {
        let Some(mouse) = self.mouse else {
            return;
        };
        let pointer = match self.hit_test(app.demo, mouse.x, mouse.y) {
            Some((_, panel, ListHit::Entry(entry))) => Some(Pointer { panel, entry }),
            _ => None,
        };
        self.set_pointer(app, pointer);
    }

    /// Apply one input event. Returns an action when core state should change.
    pub fn dispatch(&mut self, app: &App, event: TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::Quit => Some(Action::Quit),
            TuiEvent::SwitchDemo => {
                self.set_pointer(app, None);
                Some(Action::SwitchDemo)
            }
            TuiEvent::FocusNext => {
                self.set_pointer(app, None);
                self.focus = (self.focus + 1) % self.columns.len();
                None
            }
            TuiEvent::ToggleOpen | TuiEvent::ToggleCollapse => {
                self.toggle_column(app, self.focus, &event)
            }
            TuiEvent::PointerUp => {
                self.move_pointer(app, false);
                None
            }
            TuiEvent::PointerDown => {
                self.move_pointer(app, true);
                None
            }
            TuiEvent::ScrollPageUp => {
                self.columns[self.focus].scroll.scroll_page_up();
                self.refresh_mouse_pointer(app);
                None
            }
            TuiEvent::ScrollPageDown => {
                let column = &mut self.columns[self.focus];
                column.scroll.scroll_page_down();
                column.clamp_scroll();
                self.refresh_mouse_pointer(app);
                None
            }
            TuiEvent::WheelUp(col, row) => {
                self.mouse = Some(Position::new(col, row));
                if let Some(column) = self.column_at(col, row) {
                    self.columns[column].scroll.scroll_up();
                }
                self.refresh_mouse_pointer(app);
                None
            }
            TuiEvent::WheelDown(col, row) => {
                self.mouse = Some(Position::new(col, row));
                if let Some(column) = self.column_at(col, row) {
                    let column = &mut self.columns[column];
                    column.scroll.scroll_down();
                    column.clamp_scroll();
                }
                self.refresh_mouse_pointer(app);
                None
            }
            TuiEvent::MouseMove(col, row) => {
                self.mouse = Some(Position::new(col, row));
                self.refresh_mouse_pointer(app);
                None
            }
            TuiEvent::MouseClick(col, row) => {
                let (column, _, hit) = self.hit_test(app.demo, col, row)?;
                self.focus = column;
                match hit {
                    ListHit::ToggleOpen => self.toggle_column(app, column, &TuiEvent::ToggleOpen),
                    ListHit::ToggleCollapse => {
                        self.toggle_column(app, column, &TuiEvent::ToggleCollapse)
                    }
                    ListHit::Entry(_) | ListHit::Body => None,
                }
            }
            TuiEvent::Resize => None,
        }
    }

    /// Route a toggle event to the list in `column`.
    fn toggle_column(&mut self, app: &App, column: usize, event: &TuiEvent) -> Option<Action> {
        let panel = *PanelId::for_demo(app.demo).get(column)?;
        if panel == PanelId::PlainProducts {
            return None;
        }

        // Entries are about to move; whatever was hovered is left first.
        self.set_pointer(app, None);
        let (toggled, total) = match panel {
            PanelId::Products => (self.products.handle_event(event), app.products.len()),
            PanelId::Companies => (self.companies.handle_event(event), app.companies.len()),
            PanelId::ProductsHoc => (self.products_hoc.handle_event(event), app.products.len()),
            PanelId::PlainProducts => (None, 0),
        };
        let toggled = toggled?;
        self.sync_company_items(app);

        info!(
            "{} toggled: open={}, collapsed={}",
            panel.title(),
            toggled.is_open(),
            toggled.is_collapsed()
        );
        Some(Action::ListToggled {
            title: panel.title().to_string(),
            open: toggled.is_open(),
            shown: toggled.shown(total),
            total,
        })
    }

    /// Step the keyboard pointer through the focused list's entries.
    fn move_pointer(&mut self, app: &App, down: bool) {
        let panel = PanelId::for_demo(app.demo)[self.focus];
        let count = match panel {
            PanelId::Products => self.products.toggle.shown(app.products.len()),
            PanelId::Companies => self.companies.toggle.shown(app.companies.len()),
            PanelId::PlainProducts | PanelId::ProductsHoc => 0,
        };
        // The keyboard owns the pointer until the mouse moves again
        self.mouse = None;
        if count == 0 {
            self.set_pointer(app, None);
            return;
        }

        let entry = match self.pointer.filter(|p| p.panel == panel) {
            Some(p) if down => (p.entry + 1).min(count - 1),
            Some(p) => p.entry.saturating_sub(1),
            None if down => 0,
            None => count - 1,
        };
        self.set_pointer(app, Some(Pointer { panel, entry }));

        if let Some(rect) = self
            .layout_of(panel)
            .and_then(|layout| layout.entries.get(entry))
            .copied()
        {
            self.columns[self.focus].scroll_to(rect);
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(&app);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()
        .inspect_err(|e| warn!("Failed to enable terminal modes: {e}"));

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = tui.dispatch(&app, event) else {
                continue;
            };
            debug!("Event loop dispatching: {:?}", action);
            if update(&mut app, action) == Effect::Quit {
                should_quit = true;
                break;
            }
            tui.sync_company_items(&app);
        }

        if should_quit {
            break;
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}
