//! Component trait system for the page
//!
//! Each piece of the page that draws itself implements [`Component`]; the
//! pieces that react to keys also implement [`Interactive`]. The App only
//! routes input to the focused widget and hands out the render context.
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                      App                      │
//! │   (routes keys, owns both contact widgets)    │
//! └───────────────────────────────────────────────┘
//!            │                         │
//!            ▼                         ▼
//!     ┌─────────────┐          ┌──────────────┐
//!     │ Hero widget │          │Contact widget│
//!     └─────────────┘          └──────────────┘
//!            │                         │
//!            └──── Component + Interactive ────┘
//! ```

mod component;
mod interactive;

pub use component::{Component, ComponentId, RenderContext};
pub use interactive::{Handled, Interactive};
