use crate::constants::{PREFERS_LIGHT_QUERY, THEME_STORAGE_KEY};
use crate::error::PageError;
use crate::region::{Scheduler, SchemePreference, ThemeStore, UiRegion, Viewport};
use std::cell::RefCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn html_element_by_id(
    document: &web::Document,
    id: &'static str,
) -> Result<web::HtmlElement, PageError> {
    document
        .get_element_by_id(id)
        .ok_or(PageError::MissingElement(id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| PageError::NotHtmlElement(id))
}

/// All HTML elements under `parent` matching `selector`, in document order.
pub fn query_html_all(parent: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = parent.query_selector_all(selector) else {
        log::warn!("[page] bad selector {:?}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// An `HtmlElement` seen through the `UiRegion` capability.
#[derive(Clone, Debug)]
pub struct DomRegion(web::HtmlElement);

impl DomRegion {
    pub fn new(element: web::HtmlElement) -> Self {
        Self(element)
    }

    #[inline]
    pub fn element(&self) -> &web::HtmlElement {
        &self.0
    }
}

impl UiRegion for DomRegion {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        _ = self.0.set_attribute(name, value);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        _ = self.0.class_list().remove_1(class);
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_style(&self, property: &str, value: &str) {
        _ = self.0.style().set_property(property, value);
    }

    fn focus(&self) {
        _ = self.0.focus();
    }
}

/// `localStorage`, when the browser grants it.
pub struct LocalStorageStore {
    storage: Option<web::Storage>,
}

impl LocalStorageStore {
    pub fn new(window: &web::Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            log::warn!("[theme] localStorage unavailable; theme will not persist");
        }
        Self { storage }
    }
}

impl ThemeStore for LocalStorageStore {
    fn load(&self) -> Option<String> {
        self.storage
            .as_ref()
            .and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten())
    }

    fn save(&self, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.set_item(THEME_STORAGE_KEY, value) {
                log::warn!("[theme] persist failed: {:?}", e);
            }
        }
    }
}

pub struct MediaPreference {
    window: web::Window,
}

impl MediaPreference {
    pub fn new(window: &web::Window) -> Self {
        Self {
            window: window.clone(),
        }
    }
}

impl SchemePreference for MediaPreference {
    fn prefers_light(&self) -> bool {
        self.window
            .match_media(PREFERS_LIGHT_QUERY)
            .ok()
            .flatten()
            .map(|m| m.matches())
            .unwrap_or(false)
    }
}

pub struct WindowViewport {
    window: web::Window,
    document: web::Document,
}

impl WindowViewport {
    pub fn new(window: &web::Window, document: &web::Document) -> Self {
        Self {
            window: window.clone(),
            document: document.clone(),
        }
    }
}

impl Viewport for WindowViewport {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    fn document_height(&self) -> f64 {
        self.document
            .document_element()
            .map(|el| f64::from(el.scroll_height()))
            .unwrap_or(0.0)
    }

    fn scroll_to_top(&self) {
        let opts = web::ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&opts);
    }
}

/// `setTimeout`-backed scheduler. Keeps every callback alive until it is
/// dropped, at which point timers that have not fired yet are cleared.
pub struct TimeoutScheduler {
    window: web::Window,
    pending: RefCell<Vec<(i32, Closure<dyn FnMut()>)>>,
}

impl TimeoutScheduler {
    pub fn new(window: &web::Window) -> Self {
        Self {
            window: window.clone(),
            pending: RefCell::new(Vec::new()),
        }
    }

    /// Timers scheduled so far, fired or not.
    pub fn len(&self) -> usize {
        self.pending.borrow().len()
    }
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let callback = Closure::once(move || task());
        let timeout = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                timeout,
            ) {
            Ok(handle) => self.pending.borrow_mut().push((handle, callback)),
            Err(e) => log::warn!("[entrance] setTimeout failed: {:?}", e),
        }
    }
}

impl Drop for TimeoutScheduler {
    fn drop(&mut self) {
        for (handle, _) in self.pending.get_mut().drain(..) {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}
