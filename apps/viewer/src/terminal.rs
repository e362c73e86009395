//! Text renderer: prints the strip, the controls and every reposition.

use std::io::Write;

use client_core::{ControlState, DisplayItem, StripLayout, StripRenderer, Transition};
use tracing::warn;

pub struct TerminalRenderer<W: Write> {
    out: W,
    viewport_width: f64,
    item_count: usize,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, viewport_width: f64) -> Self {
        Self {
            out,
            viewport_width,
            item_count: 0,
        }
    }

    pub fn set_viewport_width(&mut self, viewport_width: f64) {
        self.viewport_width = viewport_width;
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: std::fmt::Arguments<'_>) {
        if let Err(error) = writeln!(self.out, "{line}").and_then(|_| self.out.flush()) {
            warn!(%error, "failed to write carousel output");
        }
    }
}

impl<W: Write> StripRenderer for TerminalRenderer<W> {
    fn render_items(&mut self, items: &[DisplayItem], layout: Option<StripLayout>) {
        self.item_count = items.len();
        let Some(layout) = layout else {
            self.emit(format_args!("strip: empty"));
            return;
        };
        self.emit(format_args!(
            "strip: {} blocks, width {:.0}%, each {:.2}%",
            items.len(),
            layout.container_width_percent,
            layout.item_width_percent
        ));
        for (index, item) in items.iter().enumerate() {
            self.emit(format_args!(
                "  [{index}] {} | {}",
                item.title,
                item.images().join(" ")
            ));
        }
    }

    fn set_controls(&mut self, controls: ControlState) {
        let mark = |enabled: bool| if enabled { "on" } else { "off" };
        self.emit(format_args!(
            "controls: prev={} next={}",
            mark(controls.prev_enabled),
            mark(controls.next_enabled)
        ));
    }

    fn position_strip(&mut self, offset_px: f64, transition: Transition) {
        self.emit(format_args!(
            "strip: left={offset_px}px transition={}",
            transition.css()
        ));
    }

    fn strip_width(&self) -> f64 {
        self.viewport_width * self.item_count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str) -> DisplayItem {
        DisplayItem {
            title: title.into(),
            img1: "/img/1.jpg".into(),
            img2: "/img/2.jpg".into(),
            img3: "/img/1.jpg".into(),
            img4: "/img/3.jpg".into(),
        }
    }

    #[test]
    fn strip_spans_one_viewport_per_item() {
        let mut renderer = TerminalRenderer::new(Vec::new(), 300.0);
        assert_eq!(renderer.strip_width(), 0.0);

        let items = [item("Bilbao"), item("Barcelona"), item("Donostia")];
        renderer.render_items(&items, StripLayout::for_items(3));
        assert_eq!(renderer.strip_width(), 900.0);

        renderer.set_viewport_width(500.0);
        assert_eq!(renderer.strip_width(), 1500.0);

        renderer.render_items(&[], StripLayout::for_items(0));
        assert_eq!(renderer.strip_width(), 0.0);
    }

    #[test]
    fn prints_items_controls_and_positions() {
        let mut renderer = TerminalRenderer::new(Vec::new(), 300.0);
        renderer.render_items(&[item("Bilbao")], StripLayout::for_items(1));
        renderer.set_controls(ControlState::at(0, 1));
        renderer.position_strip(-300.0, Transition::SLIDE);

        let output = String::from_utf8(renderer.into_inner()).expect("utf8");
        assert!(output.contains("[0] Bilbao | /img/1.jpg /img/2.jpg /img/1.jpg /img/3.jpg"));
        assert!(output.contains("controls: prev=off next=off"));
        assert!(output.contains(
            "strip: left=-300px transition=left 800ms cubic-bezier(0.165, 0.84, 0.44, 1)"
        ));
    }
}
