//! Aurora page enhancements.
//!
//! Behaviour lives in target-independent modules written against the
//! `region` capabilities so it can be exercised on the host. The `wasm32`
//! build adds the `web_sys` bindings and the `start` entry point.

pub mod constants;
pub mod entrance;
pub mod error;
pub mod keys;
pub mod modal;
pub mod nav;
pub mod progress;
pub mod region;
pub mod theme;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod page;

#[cfg(target_arch = "wasm32")]
pub use web_entry::*;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::dom;
    use crate::page::{self, Page};
    use std::cell::RefCell;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    thread_local! {
        static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
    }

    fn boot() {
        if PAGE.with(|slot| slot.borrow().is_some()) {
            log::warn!("[page] already wired; ignoring second start");
            return;
        }
        match page::init() {
            Ok(p) => PAGE.with(|slot| *slot.borrow_mut() = Some(p)),
            Err(e) => log::error!("init error: {:?}", e),
        }
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("aurora-page starting");

        // Markup must be parsed before elements can be looked up.
        match dom::window_document() {
            Some(doc) if doc.ready_state() == "loading" => {
                let on_ready = Closure::once_into_js(boot);
                doc.add_event_listener_with_callback(
                    "DOMContentLoaded",
                    on_ready.unchecked_ref(),
                )?;
            }
            _ => boot(),
        }
        Ok(())
    }

    /// Unbind every behaviour and cancel pending entrance timers.
    #[wasm_bindgen]
    pub fn teardown() {
        if let Some(p) = PAGE.with(|slot| slot.borrow_mut().take()) {
            drop(p);
        }
    }
}
