use crate::constants::{ARIA_EXPANDED, ARIA_LABEL, NAV_CLOSE_LABEL, NAV_OPEN_LABEL, OPEN_CLASS};
use crate::region::UiRegion;
use std::cell::Cell;

/// Mobile navigation disclosure.
///
/// `open` is the source of truth; the trigger's `aria-expanded` and the
/// panel's `open` class are written from it.
pub struct NavDisclosure<R> {
    trigger: R,
    panel: R,
    open: Cell<bool>,
}

impl<R: UiRegion> NavDisclosure<R> {
    /// Adopts whatever expanded state the markup was rendered with.
    pub fn new(trigger: R, panel: R) -> Self {
        let open = trigger.attribute(ARIA_EXPANDED).as_deref() == Some("true");
        Self {
            trigger,
            panel,
            open: Cell::new(open),
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    /// Flip the panel, returning the new state.
    pub fn toggle(&self) -> bool {
        let open = !self.open.get();
        self.set(open);
        self.trigger.set_attribute(
            ARIA_LABEL,
            if open { NAV_CLOSE_LABEL } else { NAV_OPEN_LABEL },
        );
        log::debug!("[nav] toggled open={}", open);
        open
    }

    /// Force the panel closed. Returns whether it was open. The trigger's
    /// label is only swapped by `toggle`.
    pub fn close(&self) -> bool {
        if !self.open.get() {
            return false;
        }
        self.set(false);
        log::debug!("[nav] closed");
        true
    }

    /// A link inside the panel was followed.
    #[inline]
    pub fn on_link_activated(&self) -> bool {
        self.close()
    }

    fn set(&self, open: bool) {
        self.open.set(open);
        self.trigger
            .set_attribute(ARIA_EXPANDED, if open { "true" } else { "false" });
        self.panel.set_class(OPEN_CLASS, open);
    }
}
