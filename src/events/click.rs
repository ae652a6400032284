use super::Listener;
use crate::constants::CARD_SELECTOR;
use crate::dom::{DomRegion, LocalStorageStore};
use crate::error::PageError;
use crate::modal::ReadingModal;
use crate::nav::NavDisclosure;
use crate::theme::ThemeController;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_theme_toggle(
    controller: ThemeController<DomRegion, LocalStorageStore>,
    button: &DomRegion,
) -> Result<Listener, PageError> {
    Listener::new(button.element(), "click", move |_: web::MouseEvent| {
        controller.toggle();
    })
}

pub fn wire_nav(
    nav: Rc<NavDisclosure<DomRegion>>,
    trigger: &DomRegion,
    links: &[web::HtmlElement],
) -> Result<Vec<Listener>, PageError> {
    let mut listeners = Vec::with_capacity(links.len() + 1);

    let nav_toggle = nav.clone();
    listeners.push(Listener::new(
        trigger.element(),
        "click",
        move |_: web::MouseEvent| {
            nav_toggle.toggle();
        },
    )?);

    // Following a link on small screens should not leave the menu covering
    // the page.
    for link in links {
        let nav_link = nav.clone();
        listeners.push(Listener::new(link, "click", move |_: web::MouseEvent| {
            nav_link.on_link_activated();
        })?);
    }
    Ok(listeners)
}

/// Card element enclosing the event target, if any.
fn enclosing_card(ev: &web::Event) -> Option<DomRegion> {
    ev.target()?
        .dyn_into::<web::Element>()
        .ok()?
        .closest(CARD_SELECTOR)
        .ok()
        .flatten()?
        .dyn_into::<web::HtmlElement>()
        .ok()
        .map(DomRegion::new)
}

pub fn wire_modal(
    modal: Rc<ReadingModal<DomRegion>>,
    open_controls: &[web::HtmlElement],
    overlay: &DomRegion,
    close_control: &DomRegion,
) -> Result<Vec<Listener>, PageError> {
    let mut listeners = Vec::with_capacity(open_controls.len() + 2);

    for control in open_controls {
        let modal_open = modal.clone();
        listeners.push(Listener::new(control, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            let card = enclosing_card(&ev);
            modal_open.open_card(card.as_ref());
        })?);
    }

    let modal_close = modal.clone();
    listeners.push(Listener::new(
        close_control.element(),
        "click",
        move |_: web::MouseEvent| modal_close.close(),
    )?);

    let backdrop = overlay.element().clone();
    listeners.push(Listener::new(
        overlay.element(),
        "click",
        move |ev: web::MouseEvent| {
            let on_backdrop = ev
                .target()
                .map(|t| js_sys::Object::is(&t, &backdrop))
                .unwrap_or(false);
            modal.on_overlay_click(on_backdrop);
        },
    )?);
    Ok(listeners)
}
