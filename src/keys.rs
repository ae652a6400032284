use crate::modal::ReadingModal;
use crate::nav::NavDisclosure;
use crate::region::UiRegion;
use std::rc::Rc;

/// The keys the page reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKey {
    Escape,
    Enter,
    Space,
    Other,
}

impl PageKey {
    #[inline]
    pub fn from_key(key: &str) -> Self {
        match key {
            "Escape" => PageKey::Escape,
            "Enter" => PageKey::Enter,
            " " => PageKey::Space,
            _ => PageKey::Other,
        }
    }
}

/// Enter/Space on a focused card opens it, but only when the card itself has
/// focus; nested controls keep their own key handling.
#[inline]
pub fn card_key_activates(key: PageKey, target_is_card: bool) -> bool {
    target_is_card && matches!(key, PageKey::Enter | PageKey::Space)
}

/// Document-wide key handling shared by the navigation and the modal.
pub struct GlobalKeys<R> {
    nav: Rc<NavDisclosure<R>>,
    modal: Rc<ReadingModal<R>>,
}

impl<R: UiRegion> GlobalKeys<R> {
    pub fn new(nav: Rc<NavDisclosure<R>>, modal: Rc<ReadingModal<R>>) -> Self {
        Self { nav, modal }
    }

    /// Returns whether the key was handled.
    pub fn handle(&self, key: PageKey) -> bool {
        match key {
            PageKey::Escape => {
                self.nav.close();
                self.modal.close();
                true
            }
            _ => false,
        }
    }
}
