// Test doubles for the region capabilities, shared by the host-side tests.

#![allow(dead_code)]

use aurora_page::region::{Scheduler, SchemePreference, ThemeStore, UiRegion, Viewport};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

#[derive(Default, Debug)]
pub struct RegionState {
    pub attributes: BTreeMap<String, String>,
    pub classes: BTreeSet<String>,
    pub text: String,
    pub styles: BTreeMap<String, String>,
    pub focus_count: usize,
}

/// Records every mutation. Clones share state, so a test can keep one handle
/// while the behaviour owns another.
#[derive(Clone, Default, Debug)]
pub struct FakeRegion(Rc<RefCell<RegionState>>);

impl FakeRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.0.borrow_mut().classes.insert(class.to_string());
        self
    }

    pub fn attr(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    pub fn has(&self, class: &str) -> bool {
        self.0.borrow().classes.contains(class)
    }

    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().styles.get(property).cloned()
    }

    pub fn focus_count(&self) -> usize {
        self.0.borrow().focus_count
    }
}

impl UiRegion for FakeRegion {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attr(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn has_class(&self, class: &str) -> bool {
        self.has(class)
    }

    fn add_class(&self, class: &str) {
        self.0.borrow_mut().classes.insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.remove(class);
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }

    fn set_style(&self, property: &str, value: &str) {
        self.0
            .borrow_mut()
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn focus(&self) {
        self.0.borrow_mut().focus_count += 1;
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    value: Rc<RefCell<Option<String>>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryStore {
    pub fn with_value(value: &str) -> Self {
        let store = Self::default();
        *store.value.borrow_mut() = Some(value.to_string());
        store
    }

    pub fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value()
    }

    fn save(&self, value: &str) {
        *self.value.borrow_mut() = Some(value.to_string());
        self.writes.set(self.writes.get() + 1);
    }
}

/// Fixed colour-scheme preference that counts how often it was asked.
#[derive(Default)]
pub struct FixedPreference {
    pub light: bool,
    pub queries: Cell<usize>,
}

impl FixedPreference {
    pub fn light() -> Self {
        Self {
            light: true,
            queries: Cell::new(0),
        }
    }

    pub fn dark() -> Self {
        Self::default()
    }
}

impl SchemePreference for FixedPreference {
    fn prefers_light(&self) -> bool {
        self.queries.set(self.queries.get() + 1);
        self.light
    }
}

#[derive(Clone, Default)]
pub struct FakeViewport {
    pub scroll_y: Rc<Cell<f64>>,
    pub viewport_height: Rc<Cell<f64>>,
    pub document_height: Rc<Cell<f64>>,
    pub scroll_to_top_calls: Rc<Cell<usize>>,
}

impl FakeViewport {
    pub fn new(document_height: f64, viewport_height: f64) -> Self {
        let vp = Self::default();
        vp.document_height.set(document_height);
        vp.viewport_height.set(viewport_height);
        vp
    }

    pub fn scroll_to(&self, y: f64) {
        self.scroll_y.set(y);
    }
}

impl Viewport for FakeViewport {
    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height.get()
    }

    fn document_height(&self) -> f64 {
        self.document_height.get()
    }

    fn scroll_to_top(&self) {
        self.scroll_to_top_calls.set(self.scroll_to_top_calls.get() + 1);
        self.scroll_y.set(0.0);
    }
}

/// Timers on a virtual clock, fired by `advance_to`.
#[derive(Default)]
pub struct ManualScheduler {
    queue: RefCell<Vec<(u32, Box<dyn FnOnce()>)>>,
}

impl ManualScheduler {
    pub fn delays(&self) -> Vec<u32> {
        self.queue.borrow().iter().map(|(d, _)| *d).collect()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Fire every timer due at or before `now_ms`, earliest first. Returns the
    /// number fired.
    pub fn advance_to(&self, now_ms: u32) -> usize {
        let mut due: Vec<(u32, Box<dyn FnOnce()>)> = Vec::new();
        {
            let mut queue = self.queue.borrow_mut();
            let mut i = 0;
            while i < queue.len() {
                if queue[i].0 <= now_ms {
                    due.push(queue.remove(i));
                } else {
                    i += 1;
                }
            }
        }
        due.sort_by_key(|(d, _)| *d);
        let fired = due.len();
        for (_, task) in due {
            task();
        }
        fired
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        self.queue.borrow_mut().push((delay_ms, task));
    }
}
