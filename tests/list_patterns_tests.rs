use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Text};
use ratatui::widgets::Widget;
use toggles::core::data::{DataConfig, Dataset, Product};
use toggles::core::toggle::COLLAPSED_LEN;
use toggles::tui::component::EventHandler;
use toggles::tui::components::{
    CompanyItems, ItemsView, List, ListProps, ListState, Mounted, ProductItem, ProductList,
    WithToggles, with_toggles,
};
use toggles::tui::event::TuiEvent;

// ============================================================================
// Helper Functions
// ============================================================================

fn seeded_dataset() -> Dataset {
    Dataset::generate(&DataConfig {
        seed: Some(2024),
        ..DataConfig::default()
    })
}

fn rows(buf: &Buffer) -> String {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn name_only(product: &Product) -> Text<'_> {
    Text::from(Line::from(product.name.as_str()))
}

/// Draws a render-injection list of product names at its natural height.
fn draw_names(products: &[Product], state: &mut ListState) -> String {
    let height = List::new("Products", products, state, name_only).height(60);
    let area = Rect::new(0, 0, 60, height);
    let mut buf = Buffer::empty(area);
    List::new("Products", products, state, name_only).render(area, &mut buf);
    rows(&buf)
}

// ============================================================================
// Mock Data
// ============================================================================

#[test]
fn test_generated_collections_have_expected_shape() {
    let data = Dataset::generate(&DataConfig::default());
    assert_eq!(data.products.len(), 20);
    assert_eq!(data.companies.len(), 15);
    assert!(data.products.iter().all(|p| !p.name.is_empty()
        && !p.description.is_empty()
        && !p.price.is_empty()));
    assert!(data
        .companies
        .iter()
        .all(|c| !c.name.is_empty() && !c.catchphrase.is_empty()));
}

#[test]
fn test_dataset_serializes_to_json() {
    let data = seeded_dataset();
    let json = serde_json::to_value(&data).unwrap();
    assert_eq!(json["products"].as_array().unwrap().len(), 20);
    assert_eq!(json["companies"][0]["name"], data.companies[0].name.as_str());
}

// ============================================================================
// Render-injection List
// ============================================================================

#[test]
fn test_open_toggle_parity_and_collapse_reset() {
    let data = seeded_dataset();
    let mut state = ListState::default();

    for clicks in 1..=4 {
        state.handle_event(&TuiEvent::ToggleCollapse);
        state.handle_event(&TuiEvent::ToggleOpen);
        assert!(!state.toggle.is_collapsed(), "collapse survived click {clicks}");

        let rendered = draw_names(&data.products, &mut state);
        let body_visible = rendered.contains(&data.products[0].name);
        assert_eq!(body_visible, clicks % 2 == 0, "after {clicks} open clicks");
    }
}

#[test]
fn test_collapse_round_trip_on_render() {
    let data = seeded_dataset();
    let mut state = ListState::default();

    state.handle_event(&TuiEvent::ToggleCollapse);
    let collapsed = draw_names(&data.products, &mut state);
    assert_eq!(state.layout.entries.len(), COLLAPSED_LEN);
    assert!(collapsed.contains("Show all 20"));

    state.handle_event(&TuiEvent::ToggleCollapse);
    let expanded = draw_names(&data.products, &mut state);
    assert_eq!(state.layout.entries.len(), 20);
    assert!(expanded.contains("Show less"));
}

// ============================================================================
// Wrapping function
// ============================================================================

/// A third-party-style view that only counts what it is handed.
#[derive(Default)]
struct CountingView {
    last_len: Option<usize>,
    last_title: Option<String>,
}

impl ItemsView<Product> for CountingView {
    fn height(&self, props: ListProps<'_, Product>, _width: u16) -> u16 {
        props.items.len() as u16
    }

    fn render(&mut self, props: ListProps<'_, Product>, _area: Rect, _buf: &mut Buffer) {
        self.last_len = Some(props.items.len());
        self.last_title = Some(props.title.to_string());
    }
}

#[test]
fn test_wrapped_view_never_sees_full_collection_while_collapsed() {
    let data = seeded_dataset();
    let mut wrapped = with_toggles(CountingView::default());
    wrapped.handle_event(&TuiEvent::ToggleCollapse);

    let props = ListProps {
        title: "Products HOC",
        items: &data.products,
        focused: false,
    };
    let mounted = Mounted::new(&mut wrapped, props);
    let area = Rect::new(0, 0, 40, mounted.height(40));
    let mut buf = Buffer::empty(area);
    mounted.render(area, &mut buf);

    assert_eq!(wrapped.inner().last_len, Some(COLLAPSED_LEN));
    assert_eq!(wrapped.inner().last_title.as_deref(), Some("Products HOC"));
}

fn product_text(product: &Product) -> Text<'_> {
    ProductItem::new(product).into_text()
}

fn draw_render_props(products: &[Product], state: &mut ListState) -> String {
    let height = List::new("Products", products, state, product_text).height(60);
    let area = Rect::new(0, 0, 60, height);
    let mut buf = Buffer::empty(area);
    List::new("Products", products, state, product_text).render(area, &mut buf);
    rows(&buf)
}

fn draw_wrapped(products: &[Product], wrapped: &mut WithToggles<ProductList>) -> String {
    let props = ListProps {
        title: "Products",
        items: products,
        focused: false,
    };
    let mounted = Mounted::new(wrapped, props);
    let area = Rect::new(0, 0, 60, mounted.height(60));
    let mut buf = Buffer::empty(area);
    mounted.render(area, &mut buf);
    rows(&buf)
}

#[test]
fn test_product_list_with_toggles_matches_render_props_list() {
    let data = seeded_dataset();
    let mut state = ListState::default();
    let mut wrapped = with_toggles(ProductList);

    assert_eq!(
        draw_render_props(&data.products, &mut state),
        draw_wrapped(&data.products, &mut wrapped)
    );

    for event in [TuiEvent::ToggleCollapse, TuiEvent::ToggleOpen, TuiEvent::ToggleOpen] {
        state.handle_event(&event);
        wrapped.handle_event(&event);
        assert_eq!(
            draw_render_props(&data.products, &mut state),
            draw_wrapped(&data.products, &mut wrapped),
            "after {event:?}"
        );
        assert_eq!(state.layout.toggle, wrapped.layout().toggle);
        assert_eq!(state.layout.footer, wrapped.layout().footer);
    }
}

#[test]
fn test_wrapped_product_list_height() {
    let data = seeded_dataset();
    let wrapped = with_toggles(ProductList);
    let props = ListProps {
        title: "Products",
        items: &data.products,
        focused: false,
    };
    // 20 products, three rows each, plus header/footer/borders
    assert_eq!(wrapped.height(props, 200), 60 + 4);
}

// ============================================================================
// Company hover state
// ============================================================================

#[test]
fn test_company_hover_is_per_entry() {
    let data = seeded_dataset();
    let mut items = CompanyItems::new(false);
    items.mount(data.companies.iter().map(|c| c.id));

    items.pointer_enter(data.companies[3].id);
    let visible: Vec<usize> = data
        .companies
        .iter()
        .enumerate()
        .filter(|(_, c)| items.is_visible(c.id))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(visible, vec![3]);
}
