//! Core component trait - the foundation of the UI system
//!
//! Every UI element that can be rendered implements `Component`.
//! This trait provides identity and rendering capability.

use crate::theme::Theme;
use crate::widget::WidgetSlot;
use ratatui::{layout::Rect, Frame};

/// Unique identifier for a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    /// Contact disclosure widget in the given section
    Contact(WidgetSlot),
    /// Toast notification (non-focusable)
    Toast,
    /// Captured log lines (non-focusable)
    Logs,
}

/// Immutable context passed to components during rendering
///
/// Components only see what they need - no access to mutable app state.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Color theme for styling
    pub theme: &'a Theme,

    /// Which widget currently has focus
    pub focus: WidgetSlot,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme, focus: WidgetSlot) -> Self {
        Self { theme, focus }
    }

    /// Check if a component is currently focused
    pub fn is_focused(&self, id: ComponentId) -> bool {
        id == ComponentId::Contact(self.focus)
    }
}

/// Base trait for all UI components
///
/// A component is anything that can render itself to the terminal.
pub trait Component {
    /// Unique identifier for this component
    fn id(&self) -> ComponentId;

    /// Render the component to the given area
    ///
    /// # Arguments
    ///
    /// * `f` - The frame to render to
    /// * `area` - The rectangular area allocated for this component
    /// * `ctx` - Immutable render context (theme, focus)
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_matches_slot() {
        let theme = Theme::default();
        let ctx = RenderContext::new(&theme, WidgetSlot::Contact);

        assert!(ctx.is_focused(ComponentId::Contact(WidgetSlot::Contact)));
        assert!(!ctx.is_focused(ComponentId::Contact(WidgetSlot::Hero)));
        assert!(!ctx.is_focused(ComponentId::Toast));
    }
}
