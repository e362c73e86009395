use crate::{
    display::DisplayItem,
    layout::{ControlState, StripLayout, Transition},
};

/// Drawing surface for the carousel strip.
///
/// The controller only computes positions and control states; the host
/// decides how items, controls and offsets reach the screen.
pub trait StripRenderer {
    /// Lays out every item side by side, replacing whatever was drawn before.
    /// `layout` is `None` when the catalog is empty.
    fn render_items(&mut self, items: &[DisplayItem], layout: Option<StripLayout>);

    fn set_controls(&mut self, controls: ControlState);

    /// Moves the strip to `offset_px` from its resting position.
    fn position_strip(&mut self, offset_px: f64, transition: Transition);

    /// Current rendered width of the whole strip, in pixels.
    fn strip_width(&self) -> f64;
}
