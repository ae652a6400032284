use crate::constants::{ARIA_HIDDEN, CARD_CONTENT_ATTR, CARD_TITLE_ATTR, OPEN_CLASS};
use crate::region::UiRegion;
use std::cell::Cell;

/// Title and body carried by a post card's data attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostCard {
    pub title: String,
    pub content: String,
}

impl PostCard {
    pub fn from_region(card: &impl UiRegion) -> Self {
        Self {
            title: card.attribute(CARD_TITLE_ATTR).unwrap_or_default(),
            content: card.attribute(CARD_CONTENT_ATTR).unwrap_or_default(),
        }
    }
}

/// Reading overlay. The `open` class and `aria-hidden` always move together.
pub struct ReadingModal<R> {
    overlay: R,
    title: R,
    body: R,
    close_control: R,
    open: Cell<bool>,
}

impl<R: UiRegion> ReadingModal<R> {
    pub fn new(overlay: R, title: R, body: R, close_control: R) -> Self {
        let open = overlay.has_class(OPEN_CLASS);
        Self {
            overlay,
            title,
            body,
            close_control,
            open: Cell::new(open),
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    /// Open with the content of the card enclosing the activated control.
    /// Without a card there is nothing to show and the call is a no-op.
    pub fn open_card<C: UiRegion>(&self, card: Option<&C>) -> bool {
        let Some(card) = card else {
            log::debug!("[modal] open affordance outside a card; ignored");
            return false;
        };
        self.show(&PostCard::from_region(card));
        true
    }

    pub fn show(&self, post: &PostCard) {
        self.title.set_text(&post.title);
        self.body.set_text(&post.content);
        self.overlay.add_class(OPEN_CLASS);
        self.overlay.set_attribute(ARIA_HIDDEN, "false");
        self.open.set(true);
        self.close_control.focus();
        log::debug!("[modal] opened {:?}", post.title);
    }

    pub fn close(&self) {
        self.overlay.remove_class(OPEN_CLASS);
        self.overlay.set_attribute(ARIA_HIDDEN, "true");
        if self.open.replace(false) {
            log::debug!("[modal] closed");
        }
    }

    /// Clicks on the overlay's content bubble up to it; only a click on the
    /// backdrop itself dismisses.
    pub fn on_overlay_click(&self, target_is_overlay: bool) {
        if target_is_overlay {
            self.close();
        }
    }
}
