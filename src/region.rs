//! Capabilities the behaviours are written against.
//!
//! Nothing in here references `web_sys`; the browser implementations live in
//! `dom.rs` and host tests supply their own fakes. All methods take `&self`
//! because the underlying handles (DOM nodes, storage) are shared and
//! mutated through the platform, not through Rust ownership.

/// A single addressable element of the page.
pub trait UiRegion {
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);

    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);

    /// Add or remove `class` so that its presence matches `present`.
    fn set_class(&self, class: &str, present: bool) {
        if present {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    fn set_text(&self, text: &str);
    fn set_style(&self, property: &str, value: &str);
    fn focus(&self);
}

/// Persisted key-value slot holding the theme name.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
}

/// The environment's colour-scheme preference.
pub trait SchemePreference {
    fn prefers_light(&self) -> bool;
}

/// Read-only scroll geometry plus the one scroll command the page issues.
pub trait Viewport {
    fn scroll_y(&self) -> f64;
    fn viewport_height(&self) -> f64;
    fn document_height(&self) -> f64;
    fn scroll_to_top(&self);
}

/// One-shot timers.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}
