use super::Listener;
use crate::constants::OPEN_SELECTOR;
use crate::dom::DomRegion;
use crate::error::PageError;
use crate::keys::{card_key_activates, GlobalKeys, PageKey};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_global_keydown(
    document: &web::Document,
    keys: GlobalKeys<DomRegion>,
) -> Result<Listener, PageError> {
    Listener::new(document, "keydown", move |ev: web::KeyboardEvent| {
        keys.handle(PageKey::from_key(&ev.key()));
    })
}

// Enter/Space on a focused card clicks its open control, which routes
// through the same click listener as a pointer activation.
pub fn wire_card_keydown(cards: &[DomRegion]) -> Result<Vec<Listener>, PageError> {
    cards
        .iter()
        .map(|card| {
            let el = card.element().clone();
            Listener::new(card.element(), "keydown", move |ev: web::KeyboardEvent| {
                let on_card = ev
                    .target()
                    .map(|t| js_sys::Object::is(&t, &el))
                    .unwrap_or(false);
                if !card_key_activates(PageKey::from_key(&ev.key()), on_card) {
                    return;
                }
                ev.prevent_default();
                if let Ok(Some(control)) = el.query_selector(OPEN_SELECTOR) {
                    if let Some(control) = control.dyn_ref::<web::HtmlElement>() {
                        control.click();
                    }
                }
            })
        })
        .collect()
}
