use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

use crate::core::data::Product;

/// A stateless renderer for one product: name, price, description.
#[derive(Clone, Copy)]
pub struct ProductItem<'a> {
    pub product: &'a Product,
}

impl<'a> ProductItem<'a> {
    pub fn new(product: &'a Product) -> Self {
        Self { product }
    }

    pub fn into_text(self) -> Text<'a> {
        Text::from(vec![
            Line::from(Span::styled(
                self.product.name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("${}", self.product.price),
                Style::default().fg(Color::Green),
            )),
            Line::from(Span::styled(
                self.product.description.as_str(),
                Style::default().fg(Color::Gray),
            )),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn product() -> Product {
        Product {
            id: Uuid::nil(),
            name: "Rustic Granite Lamp".to_string(),
            description: "Made from recycled materials.".to_string(),
            price: "42.50".to_string(),
        }
    }

    #[test]
    fn test_lines_in_order() {
        let product = product();
        let text = ProductItem::new(&product).into_text();
        let lines: Vec<String> = text.lines.iter().map(|l| l.to_string()).collect();
        assert_eq!(
            lines,
            vec!["Rustic Granite Lamp", "$42.50", "Made from recycled materials."]
        );
    }

    #[test]
    fn test_name_is_bold() {
        let product = product();
        let text = ProductItem::new(&product).into_text();
        let name_style = text.lines[0].spans[0].style;
        assert!(name_style.add_modifier.contains(Modifier::BOLD));
    }
}
