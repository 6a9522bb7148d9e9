//! # TUI Components
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: heading, active demo and status message
//! - `ProductItem`: one product as three lines of text
//! - `ProductList`: a bulleted list of whatever products it is given
//!
//! ### Stateful Components
//!
//! - `List`: collapsible list over a caller-supplied render function,
//!   backed by a persistent `ListState`
//! - `WithToggles`: the same collapsible behavior added around any
//!   `ItemsView` by the `with_toggles` function
//! - `CompanyItem`: one company whose details show on hover, backed by
//!   `CompanyItems`
//!
//! Both collapsible variants draw their frame through `chrome`, which also
//! records the hit areas used for mouse input.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── chrome.rs        (Header/footer frame + hit testing)
//! ├── list.rs          (Render-injection list)
//! ├── with_toggles.rs  (Wrapping-function list)
//! ├── product_item.rs  (Single product renderer)
//! ├── product_list.rs  (Plain product list, wrapped by with_toggles)
//! └── company_item.rs  (Single company renderer + hover state)
//! ```

pub mod chrome;
pub mod company_item;
pub mod list;
pub mod product_item;
pub mod product_list;
pub mod title_bar;
pub mod with_toggles;

pub use chrome::{ListHit, ListLayout};
pub use company_item::{CompanyItem, CompanyItems};
pub use list::{List, ListState};
pub use product_item::ProductItem;
pub use product_list::ProductList;
pub use title_bar::TitleBar;
pub use with_toggles::{ItemsView, ListProps, Mounted, WithToggles, with_toggles};
