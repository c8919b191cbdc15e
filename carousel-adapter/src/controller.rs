use alloc::vec::Vec;

use carousel::{
    Carousel, CarouselOptions, DisplayItem, DragMachine, DragOptions, FrameState, Metrics,
    PointerEvent,
};

use crate::product::{Product, ProductTab, sort_products};

/// A framework-neutral controller that wires the rotation owner and the drag
/// machine together for a storefront hero strip.
///
/// The hosting view drives it by calling:
/// - [`Self::set_products`] / [`Self::set_metrics`] / [`Self::set_tab`] when
///   data, layout or sorting change
/// - the four `on_pointer_*` entry points from the handlers bound to the
///   draggable surface
/// - [`Self::on_frame`] once per animation frame while [`Self::needs_frame`]
///   reports true
///
/// Released shifts never touch the offset directly: the drag machine returns
/// the proposal and this controller applies it to the carousel.
#[derive(Clone, Debug)]
pub struct Controller {
    carousel: Carousel<Product>,
    drag: DragMachine,
    metrics: Metrics,
    catalog: Vec<Product>,
    tab: ProductTab,
}

impl Controller {
    pub fn new(catalog: Vec<Product>, metrics: Metrics) -> Self {
        Self::with_drag_options(catalog, metrics, DragOptions::new())
    }

    pub fn with_drag_options(
        catalog: Vec<Product>,
        metrics: Metrics,
        drag_options: DragOptions,
    ) -> Self {
        let options = CarouselOptions::new(metrics.capacity, |p: &Product| p.id);
        let mut controller = Self {
            carousel: Carousel::new(Vec::new(), options),
            drag: DragMachine::new(drag_options),
            metrics,
            catalog,
            tab: ProductTab::default(),
        };
        controller.apply_catalog();
        controller
    }

    pub fn carousel(&self) -> &Carousel<Product> {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel<Product> {
        &mut self.carousel
    }

    pub fn drag(&self) -> &DragMachine {
        &self.drag
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    pub fn tab(&self) -> ProductTab {
        self.tab
    }

    /// Replaces the catalog. The active tab's ordering is reapplied.
    pub fn set_products(&mut self, catalog: Vec<Product>) {
        self.catalog = catalog;
        self.apply_catalog();
    }

    /// Applies fresh layout measurements (viewport capacity, card step).
    pub fn set_metrics(&mut self, metrics: Metrics) {
        self.metrics = metrics;
        self.carousel.set_capacity(metrics.capacity);
        self.sync_drag();
    }

    /// Switches the sort tab and reorders the strip from the kept catalog
    /// order, so switching back restores it.
    pub fn set_tab(&mut self, tab: ProductTab) {
        if self.tab == tab {
            return;
        }
        self.tab = tab;
        self.apply_catalog();
    }

    /// Starts a gesture. Returns `true` when the pointer was captured.
    pub fn on_pointer_down(&mut self, ev: &PointerEvent) -> bool {
        self.drag.pointer_down(ev)
    }

    pub fn on_pointer_move(&mut self, ev: &PointerEvent) {
        self.drag.pointer_move(ev);
    }

    pub fn on_pointer_up(&mut self, ev: &PointerEvent) {
        if let Some(shift) = self.drag.pointer_up(ev) {
            self.carousel.apply_shift(shift);
        }
    }

    pub fn on_pointer_cancel(&mut self, ev: &PointerEvent) {
        if let Some(shift) = self.drag.pointer_cancel(ev) {
            self.carousel.apply_shift(shift);
        }
    }

    pub fn needs_frame(&self) -> bool {
        self.drag.needs_frame()
    }

    pub fn on_frame(&mut self) {
        self.drag.on_frame();
    }

    /// The combined render-boundary snapshot for the current frame.
    pub fn frame_state(&self) -> FrameState {
        FrameState {
            rotation: self.carousel.rotation_state(),
            drag: self.drag.snapshot(),
        }
    }

    /// Whether the click pending after the last gesture should be cancelled.
    pub fn should_suppress_click(&self) -> bool {
        self.drag.should_suppress_click()
    }

    pub fn move_left(&mut self) {
        self.carousel.move_left();
    }

    pub fn move_right(&mut self) {
        self.carousel.move_right();
    }

    pub fn for_each_visible(&self, f: impl FnMut(&DisplayItem<Product>)) {
        self.carousel.for_each_visible(f);
    }

    pub fn collect_visible(&self, out: &mut Vec<DisplayItem<Product>>) {
        self.carousel.collect_visible(out);
    }

    /// Drops any in-flight gesture without emitting. Call on view teardown.
    pub fn reset_gesture(&mut self) {
        self.drag.reset();
    }

    fn apply_catalog(&mut self) {
        let mut items = self.catalog.clone();
        sort_products(&mut items, self.tab);
        self.carousel.set_items(items);
        self.sync_drag();
    }

    fn sync_drag(&mut self) {
        self.drag.set_enabled(self.carousel.loop_enabled());
        self.drag.set_card_step_px(self.metrics.card_step_px);
        self.drag.set_item_count(self.carousel.len());
    }
}
