//! Composition root: resolves the page's elements once and binds every
//! behaviour to them.

use crate::constants::{CARD_SELECTOR, NAV_LINK_SELECTOR, OPEN_SELECTOR, PageIds};
use crate::dom::{
    self, DomRegion, LocalStorageStore, MediaPreference, TimeoutScheduler, WindowViewport,
};
use crate::entrance;
use crate::error::PageError;
use crate::events::{self, Listener};
use crate::keys::GlobalKeys;
use crate::modal::ReadingModal;
use crate::nav::NavDisclosure;
use crate::progress::ScrollIndicator;
use crate::theme::ThemeController;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Element handles the behaviours are bound to.
pub struct PageElements {
    pub root: DomRegion,
    pub theme_toggle: DomRegion,
    pub nav_button: DomRegion,
    pub nav: DomRegion,
    pub nav_links: Vec<web::HtmlElement>,
    pub modal: DomRegion,
    pub modal_title: DomRegion,
    pub modal_body: DomRegion,
    pub modal_close: DomRegion,
    pub open_controls: Vec<web::HtmlElement>,
    pub cards: Vec<DomRegion>,
    pub progress: DomRegion,
    pub scroll_top: DomRegion,
}

impl PageElements {
    pub fn lookup(document: &web::Document, ids: &PageIds) -> Result<Self, PageError> {
        let by_id = |id: &'static str| dom::html_element_by_id(document, id).map(DomRegion::new);
        let root = document
            .document_element()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            .map(DomRegion::new)
            .ok_or(PageError::NoDocument)?;
        let nav = by_id(ids.nav)?;
        let nav_links = dom::query_html_all(nav.element(), NAV_LINK_SELECTOR);
        let (open_controls, cards) = match document.document_element() {
            Some(el) => (
                dom::query_html_all(&el, OPEN_SELECTOR),
                dom::query_html_all(&el, CARD_SELECTOR)
                    .into_iter()
                    .map(DomRegion::new)
                    .collect(),
            ),
            None => (Vec::new(), Vec::new()),
        };
        Ok(Self {
            root,
            theme_toggle: by_id(ids.theme_toggle)?,
            nav_button: by_id(ids.nav_button)?,
            nav,
            nav_links,
            modal: by_id(ids.modal)?,
            modal_title: by_id(ids.modal_title)?,
            modal_body: by_id(ids.modal_body)?,
            modal_close: by_id(ids.modal_close)?,
            open_controls,
            cards,
            progress: by_id(ids.progress)?,
            scroll_top: by_id(ids.scroll_top)?,
        })
    }
}

/// Everything registered on the page. Dropping it unbinds the behaviours and
/// cancels entrance timers that have not fired.
pub struct Page {
    listeners: Vec<Listener>,
    timers: TimeoutScheduler,
}

impl Page {
    pub fn wire(
        window: &web::Window,
        document: &web::Document,
        el: PageElements,
    ) -> Result<Self, PageError> {
        let mut listeners = Vec::new();

        let theme = ThemeController::new(
            el.root,
            el.theme_toggle.clone(),
            LocalStorageStore::new(window),
        );
        let applied = theme.init(&MediaPreference::new(window));
        log::info!("[theme] applied {}", applied);
        listeners.push(events::wire_theme_toggle(theme, &el.theme_toggle)?);

        let nav = Rc::new(NavDisclosure::new(el.nav_button.clone(), el.nav));
        listeners.extend(events::wire_nav(nav.clone(), &el.nav_button, &el.nav_links)?);

        let modal = Rc::new(ReadingModal::new(
            el.modal.clone(),
            el.modal_title,
            el.modal_body,
            el.modal_close.clone(),
        ));
        listeners.extend(events::wire_modal(
            modal.clone(),
            &el.open_controls,
            &el.modal,
            &el.modal_close,
        )?);
        listeners.extend(events::wire_card_keydown(&el.cards)?);
        listeners.push(events::wire_global_keydown(
            document,
            GlobalKeys::new(nav, modal),
        )?);

        let indicator = Rc::new(ScrollIndicator::new(
            el.progress,
            el.scroll_top.clone(),
            WindowViewport::new(window, document),
        ));
        indicator.refresh_progress();
        listeners.extend(events::wire_scroll(window, indicator, &el.scroll_top)?);

        let timers = TimeoutScheduler::new(window);
        let cards = entrance::stagger(&el.cards, &timers);

        log::info!(
            "[page] wired {} listeners, {} cards",
            listeners.len(),
            cards
        );
        Ok(Self { listeners, timers })
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        log::info!(
            "[page] unbinding {} listeners, {} timers",
            self.listeners.len(),
            self.timers.len()
        );
    }
}

pub fn init() -> anyhow::Result<Page> {
    let window = web::window().ok_or(PageError::NoWindow)?;
    let document = dom::window_document().ok_or(PageError::NoDocument)?;
    let elements = PageElements::lookup(&document, &PageIds::default())?;
    Ok(Page::wire(&window, &document, elements)?)
}
