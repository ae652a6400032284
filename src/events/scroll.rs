use super::Listener;
use crate::dom::{DomRegion, WindowViewport};
use crate::error::PageError;
use crate::progress::ScrollIndicator;
use std::rc::Rc;
use web_sys as web;

pub fn wire_scroll(
    window: &web::Window,
    indicator: Rc<ScrollIndicator<DomRegion, WindowViewport>>,
    scroll_top: &DomRegion,
) -> Result<Vec<Listener>, PageError> {
    let on_scroll = indicator.clone();
    let on_resize = indicator.clone();
    Ok(vec![
        Listener::passive(window, "scroll", move |_: web::Event| on_scroll.on_scroll())?,
        Listener::new(window, "resize", move |_: web::Event| on_resize.on_resize())?,
        Listener::new(scroll_top.element(), "click", move |_: web::MouseEvent| {
            indicator.scroll_to_top()
        })?,
    ])
}
