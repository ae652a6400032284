use crate::constants::{SCROLL_TOP_THRESHOLD_PX, SHOW_CLASS, WIDTH_PROPERTY};
use crate::region::{UiRegion, Viewport};

/// Reading progress in percent.
///
/// The scrollable range is floored at 1px so an empty or short document
/// yields a finite value. No upper clamp: sub-pixel rounding near the
/// bottom of the page can report slightly over 100.
#[inline]
pub fn progress_percent(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let range = (document_height - viewport_height).max(1.0);
    scroll_y / range * 100.0
}

#[inline]
pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD_PX
}

/// CSS width for the progress bar, e.g. `50%`.
#[inline]
pub fn width_value(percent: f64) -> String {
    format!("{}%", percent)
}

pub struct ScrollIndicator<R, V> {
    bar: R,
    scroll_top: R,
    viewport: V,
}

impl<R: UiRegion, V: Viewport> ScrollIndicator<R, V> {
    pub fn new(bar: R, scroll_top: R, viewport: V) -> Self {
        Self {
            bar,
            scroll_top,
            viewport,
        }
    }

    pub fn refresh_progress(&self) -> f64 {
        let percent = progress_percent(
            self.viewport.scroll_y(),
            self.viewport.document_height(),
            self.viewport.viewport_height(),
        );
        self.bar.set_style(WIDTH_PROPERTY, &width_value(percent));
        percent
    }

    pub fn on_scroll(&self) {
        self.refresh_progress();
        self.scroll_top
            .set_class(SHOW_CLASS, scroll_top_visible(self.viewport.scroll_y()));
    }

    // Resizing changes the scrollable range but not the offset, so the
    // scroll-top button is left alone.
    pub fn on_resize(&self) {
        self.refresh_progress();
    }

    pub fn scroll_to_top(&self) {
        log::debug!("[progress] scrolling to top");
        self.viewport.scroll_to_top();
    }
}
