//! # Core Application Logic
//!
//! Data and state machines for the demo. Nothing in here knows about
//! ratatui or crossterm.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Dataset (mock data)  │
//!                    │  • ToggleState          │
//!                    │  • App + update()       │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`data`]: `Product`, `Company` and the random generator
//! - [`toggle`]: open/collapse state shared by both list variants
//! - [`state`]: the `App` struct
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`config`]: config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod data;
pub mod state;
pub mod toggle;
