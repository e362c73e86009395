use rand::Rng;
use shared::{domain::BlockRecord, error::CatalogError};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::{
    client::CatalogClient,
    display::DisplayItem,
    error::ClientError,
    layout::{strip_offset, ControlState, StripLayout, Transition},
    navigation::{BlockChange, Cursor, NavControl},
    renderer::StripRenderer,
};

/// Carousel state machine driving a [`StripRenderer`].
///
/// Block changes are published on the `events` channel handed to
/// [`CarouselController::new`] and then applied to the strip.
pub struct CarouselController<R: StripRenderer> {
    renderer: R,
    items: Vec<DisplayItem>,
    cursor: Cursor,
    events: broadcast::Sender<BlockChange>,
}

impl<R: StripRenderer> CarouselController<R> {
    pub fn new(mut renderer: R, events: broadcast::Sender<BlockChange>) -> Self {
        renderer.set_controls(ControlState::INITIAL);
        Self {
            renderer,
            items: Vec::new(),
            cursor: Cursor::default(),
            events,
        }
    }

    pub fn items(&self) -> &[DisplayItem] {
        &self.items
    }

    pub fn current_block(&self) -> usize {
        self.cursor.current()
    }

    pub fn controls(&self) -> ControlState {
        self.cursor.controls()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Fetches the catalog once and renders it. On failure the carousel stays empty.
    pub async fn load<G: Rng + ?Sized>(
        &mut self,
        client: &CatalogClient,
        rng: &mut G,
    ) -> Result<(), ClientError> {
        let records = client.fetch_blocks().await?;
        self.populate(&records, rng)?;
        Ok(())
    }

    /// Builds one item per record, in order, and performs the initial render.
    ///
    /// Nothing is rendered unless every record yields an item. The strip is
    /// moved back to the first block without animation.
    pub fn populate<G: Rng + ?Sized>(
        &mut self,
        records: &[BlockRecord],
        rng: &mut G,
    ) -> Result<(), CatalogError> {
        let items = records
            .iter()
            .map(|record| DisplayItem::from_record(record, &mut *rng))
            .collect::<Result<Vec<_>, _>>()?;

        if !self.items.is_empty() {
            warn!(
                previous = self.items.len(),
                "replacing an already rendered catalog"
            );
        }

        self.cursor = Cursor::new(items.len());
        self.items = items;
        self.renderer
            .render_items(&self.items, StripLayout::for_items(self.items.len()));
        self.renderer.set_controls(self.cursor.controls());
        self.relocate(0, Transition::Immediate);
        info!(blocks = self.items.len(), "carousel rendered");
        Ok(())
    }

    /// Handles activation of the element carrying `class_name`.
    pub fn activate(&mut self, class_name: &str) -> Option<BlockChange> {
        let Some(control) = NavControl::from_element_class(class_name) else {
            debug!(class_name, "ignoring activation of non-navigation element");
            return None;
        };
        self.navigate(control)
    }

    pub fn navigate(&mut self, control: NavControl) -> Option<BlockChange> {
        let change = self.cursor.step(control)?;
        debug!(?change, "block changed");
        // No subscribers is fine; the strip is still updated below.
        let _ = self.events.send(change);
        self.block_change(change.current_block());
        Some(change)
    }

    /// Re-applies the offset for the current block without animation.
    pub fn resize(&mut self) {
        self.relocate(self.cursor.current(), Transition::Immediate);
    }

    fn block_change(&mut self, current_block: usize) {
        self.renderer
            .set_controls(ControlState::at(current_block, self.items.len()));
        self.relocate(current_block, Transition::SLIDE);
    }

    fn relocate(&mut self, current_block: usize, transition: Transition) {
        let offset = strip_offset(
            self.renderer.strip_width(),
            self.items.len(),
            current_block,
        );
        debug!(current_block, offset, ?transition, "relocating strip");
        self.renderer.position_strip(offset, transition);
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
