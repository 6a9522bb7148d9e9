//! # WithToggles (wrapping function)
//!
//! [`with_toggles`] takes any presentational view and returns a new view
//! with the open/close header and collapse footer layered around it. The
//! wrapped view never learns about collapsing: it receives the same props
//! with `items` replaced by whatever prefix the wrapper decides to show.
//!
//! ```text
//! WithToggles<V>
//! ├── toggle: ToggleState     // owned by the wrapper instance
//! ├── layout: ListLayout      // hit areas from the last render
//! └── inner: V                // e.g. ProductList
//!
//! props ──► WithToggles ──► ListProps { items: visible prefix, ..props } ──► inner
//! ```
//!
//! `WithToggles<V>` is itself an [`ItemsView`], so it can be mounted
//! anywhere its inner view could.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::core::toggle::ToggleState;
use crate::tui::component::EventHandler;
use crate::tui::components::chrome::{Chrome, ListLayout};
use crate::tui::event::TuiEvent;

/// Props handed to a list view.
pub struct ListProps<'a, T> {
    pub title: &'a str,
    pub items: &'a [T],
    pub focused: bool,
}

// Manual impls: derive would require `T: Clone`.
impl<T> Clone for ListProps<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListProps<'_, T> {}

/// A presentational list: draws whatever items it is given.
pub trait ItemsView<T> {
    /// Rows needed to draw `props` at `width` columns.
    fn height(&self, props: ListProps<'_, T>, width: u16) -> u16;

    fn render(&mut self, props: ListProps<'_, T>, area: Rect, buf: &mut Buffer);
}

/// Wrap `inner` with open/close and collapse controls.
pub fn with_toggles<V>(inner: V) -> WithToggles<V> {
    WithToggles {
        inner,
        toggle: ToggleState::default(),
        layout: ListLayout::default(),
    }
}

#[derive(Debug)]
pub struct WithToggles<V> {
    inner: V,
    toggle: ToggleState,
    layout: ListLayout,
}

impl<V> WithToggles<V> {
    pub fn toggle(&self) -> ToggleState {
        self.toggle
    }

    pub fn layout(&self) -> &ListLayout {
        &self.layout
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// The props the inner view receives: everything forwarded, items limited.
    pub fn forward<'a, T>(&self, props: ListProps<'a, T>) -> ListProps<'a, T> {
        ListProps {
            items: self.toggle.visible(props.items),
            ..props
        }
    }
}

impl<V> EventHandler for WithToggles<V> {
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

impl<T, V: ItemsView<T>> ItemsView<T> for WithToggles<V> {
    fn height(&self, props: ListProps<'_, T>, width: u16) -> u16 {
        let body = if self.toggle.is_open() {
            self.inner
                .height(self.forward(props), Chrome::body_width(width))
        } else {
            0
        };
        Chrome::height(body)
    }

    fn render(&mut self, props: ListProps<'_, T>, area: Rect, buf: &mut Buffer) {
        let chrome = Chrome {
            title: props.title,
            total: props.items.len(),
            toggle: self.toggle,
            focused: props.focused,
        };
        let layout = chrome.render(area, buf);
        if self.toggle.is_open() {
            let forwarded = self.forward(props);
            self.inner.render(forwarded, layout.body, buf);
        }
        self.layout = layout;
    }
}

/// Adapter that lets an [`ItemsView`] be drawn as a [`Widget`].
pub struct Mounted<'v, 'p, V, T> {
    view: &'v mut V,
    props: ListProps<'p, T>,
}

impl<'v, 'p, V, T> Mounted<'v, 'p, V, T>
where
    V: ItemsView<T>,
{
    pub fn new(view: &'v mut V, props: ListProps<'p, T>) -> Self {
        Self { view, props }
    }

    pub fn height(&self, width: u16) -> u16 {
        self.view.height(self.props, width)
    }
}

impl<V, T> Widget for Mounted<'_, '_, V, T>
where
    V: ItemsView<T>,
{
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.view.render(self.props, area, buf);
    }
}
