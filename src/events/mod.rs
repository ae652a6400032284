pub mod click;
pub mod keyboard;
pub mod scroll;

pub use click::{wire_modal, wire_nav, wire_theme_toggle};
pub use keyboard::{wire_card_keydown, wire_global_keydown};
pub use scroll::wire_scroll;

use crate::error::PageError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A registered event listener. Dropping it removes the listener from its
/// target and releases the callback.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new<E, F>(
        target: &web::EventTarget,
        event: &'static str,
        handler: F,
    ) -> Result<Self, PageError>
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        Self::register(target, event, handler, None)
    }

    /// Registers with `{ passive: true }`, for scroll-style listeners that
    /// never call `preventDefault`.
    pub fn passive<E, F>(
        target: &web::EventTarget,
        event: &'static str,
        handler: F,
    ) -> Result<Self, PageError>
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        Self::register(target, event, handler, Some(opts))
    }

    fn register<E, F>(
        target: &web::EventTarget,
        event: &'static str,
        mut handler: F,
        opts: Option<web::AddEventListenerOptions>,
    ) -> Result<Self, PageError>
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |ev: web::Event| {
            match ev.dyn_into::<E>() {
                Ok(ev) => handler(ev),
                Err(_) => log::warn!("[page] unexpected event type for {}", event),
            }
        }) as Box<dyn FnMut(_)>);
        let function: &js_sys::Function = callback.as_ref().unchecked_ref();
        match opts {
            Some(opts) => target.add_event_listener_with_callback_and_add_event_listener_options(
                event, function, &opts,
            )?,
            None => target.add_event_listener_with_callback(event, function)?,
        }
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
