//! Component and Focusable traits.

use crate::core::input_event::InputEvent;

/// Renderable widget interface.
///
/// The host application owns the event loop and screen composition: it calls
/// [`Component::render`] with the column budget it allocated to the widget and
/// joins the returned lines itself. Rendering must be deterministic — calling
/// `render` twice with unchanged state produces an identical block.
pub trait Component {
    /// Render to a list of lines at the given width.
    fn render(&mut self, width: usize) -> Vec<String>;

    /// Provide the viewport allocated to this component (optional).
    ///
    /// This is a budget, not a promise about the number of lines `render`
    /// returns; stateless widgets ignore it.
    fn set_viewport_size(&mut self, _cols: usize, _rows: usize) {}

    /// Handle a structured input event (optional).
    fn handle_event(&mut self, _event: &InputEvent) {}

    /// Invalidate any cached state.
    fn invalidate(&mut self) {}

    /// Optional focus behavior for widgets that track a selection.
    fn as_focusable(&mut self) -> Option<&mut dyn Focusable> {
        None
    }
}

/// Focusable behavior for components that track focus.
pub trait Focusable {
    fn set_focused(&mut self, focused: bool);
    fn is_focused(&self) -> bool;
}
