use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Text;

use crate::core::data::Product;
use crate::tui::components::list::{entries_height, render_entries};
use crate::tui::components::product_item::ProductItem;
use crate::tui::components::with_toggles::{ItemsView, ListProps};

/// A plain bulleted list of products.
///
/// Draws every item it is given and nothing else; it has no title row and
/// no notion of collapsing. Wrap it with `with_toggles` to get those.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProductList;

impl ProductList {
    fn entries<'a>(props: ListProps<'a, Product>) -> Vec<Text<'a>> {
        props
            .items
            .iter()
            .map(|product| ProductItem::new(product).into_text())
            .collect()
    }
}

impl ItemsView<Product> for ProductList {
    fn height(&self, props: ListProps<'_, Product>, width: u16) -> u16 {
        entries_height(&Self::entries(props), width)
    }

    fn render(&mut self, props: ListProps<'_, Product>, area: Rect, buf: &mut Buffer) {
        render_entries(Self::entries(props), area, buf);
    }
}
