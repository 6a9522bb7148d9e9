use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::Widget;
use tui_scrollview::{ScrollView, ScrollbarVisibility};
use uuid::Uuid;

use crate::core::data::{Company, Product};
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{
    CompanyItem, CompanyItems, List, ListProps, Mounted, ProductItem, ProductList, TitleBar,
};
use crate::tui::{Column, PanelId, TuiState};

const HELP_TEXT: &str =
    " Tab focus · o open/close · c collapse · ↑↓ hover · PgUp/PgDn scroll · m switch demo · q quit ";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min, Percentage};
    let [title_area, main_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());

    TitleBar::new(app.demo.label().to_string(), app.status_message.clone())
        .render(frame, title_area);

    let column_areas: [Rect; 2] = Layout::horizontal([Percentage(50), Percentage(50)])
        .spacing(1)
        .areas(main_area);

    tui.sync_company_items(app);
    for (index, panel) in PanelId::for_demo(app.demo).into_iter().enumerate() {
        tui.columns[index].area = column_areas[index];
        draw_panel(frame, app, tui, index, panel);
    }

    frame.render_widget(
        Line::from(HELP_TEXT)
            .style(Style::default().fg(Color::DarkGray))
            .centered(),
        help_area,
    );
}

/// Draw the list for `panel` into column `index`.
fn draw_panel(frame: &mut Frame, app: &App, tui: &mut TuiState, index: usize, panel: PanelId) {
    let content_width = tui.columns[index].area.width.saturating_sub(1);
    let focused = tui.focus == index;
    let hovered = tui.hovered_id(app);

    match panel {
        PanelId::Products => {
            let list = List::new(
                panel.title(),
                &app.products,
                &mut tui.products,
                product_renderer(hovered),
            )
            .focused(focused);
            let height = list.height(content_width);
            render_scrolled(frame, &mut tui.columns[index], list, content_width, height);
        }
        PanelId::Companies => {
            let list = List::new(
                panel.title(),
                &app.companies,
                &mut tui.companies,
                company_renderer(&tui.company_items, hovered),
            )
            .focused(focused);
            let height = list.height(content_width);
            render_scrolled(frame, &mut tui.columns[index], list, content_width, height);
        }
        PanelId::PlainProducts => {
            let mut view = ProductList;
            let props = ListProps {
                title: panel.title(),
                items: &app.products,
                focused,
            };
            let mounted = Mounted::new(&mut view, props);
            let height = mounted.height(content_width);
            render_scrolled(frame, &mut tui.columns[index], mounted, content_width, height);
        }
        PanelId::ProductsHoc => {
            let props = ListProps {
                title: panel.title(),
                items: &app.products,
                focused,
            };
            let mounted = Mounted::new(&mut tui.products_hoc, props);
            let height = mounted.height(content_width);
            render_scrolled(frame, &mut tui.columns[index], mounted, content_width, height);
        }
    }
}

/// Render prop for product entries.
fn product_renderer<'a>(hovered: Option<Uuid>) -> impl Fn(&'a Product) -> Text<'a> {
    move |product| highlight(ProductItem::new(product).into_text(), hovered == Some(product.id))
}

/// Render prop for company entries; reads each entry's own hover state.
fn company_renderer<'a>(
    items: &'a CompanyItems,
    hovered: Option<Uuid>,
) -> impl Fn(&'a Company) -> Text<'a> {
    move |company| {
        let entry = CompanyItem::new(company, items.is_visible(company.id));
        highlight(entry.into_text(), hovered == Some(company.id))
    }
}

fn highlight(text: Text<'_>, is_hovered: bool) -> Text<'_> {
    if is_hovered {
        text.patch_style(Style::default().add_modifier(Modifier::REVERSED))
    } else {
        text
    }
}

/// Render `widget` at full height into a scroll view filling the column.
fn render_scrolled<W: Widget>(
    frame: &mut Frame,
    column: &mut Column,
    widget: W,
    content_width: u16,
    content_height: u16,
) {
    column.content_height = content_height;
    column.clamp_scroll();

    let mut scroll_view = ScrollView::new(Size::new(content_width, content_height.max(1)))
        .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
        .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
    scroll_view.render_widget(widget, Rect::new(0, 0, content_width, content_height));

    frame.render_stateful_widget(scroll_view, column.area, &mut column.scroll);
}
