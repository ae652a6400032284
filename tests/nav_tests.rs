// Host-side tests for the mobile navigation disclosure.

mod common;

use aurora_page::constants::{
    ARIA_EXPANDED, ARIA_LABEL, NAV_CLOSE_LABEL, NAV_OPEN_LABEL, OPEN_CLASS,
};
use aurora_page::nav::NavDisclosure;
use common::FakeRegion;

fn closed_nav() -> (FakeRegion, FakeRegion, NavDisclosure<FakeRegion>) {
    let trigger = FakeRegion::new().with_attribute(ARIA_EXPANDED, "false");
    let panel = FakeRegion::new();
    let nav = NavDisclosure::new(trigger.clone(), panel.clone());
    (trigger, panel, nav)
}

#[test]
fn toggle_opens_and_mirrors_state() {
    let (trigger, panel, nav) = closed_nav();
    assert!(!nav.is_open());

    assert!(nav.toggle());
    assert_eq!(trigger.attr(ARIA_EXPANDED).as_deref(), Some("true"));
    assert_eq!(trigger.attr(ARIA_LABEL).as_deref(), Some(NAV_CLOSE_LABEL));
    assert!(panel.has(OPEN_CLASS));

    assert!(!nav.toggle());
    assert_eq!(trigger.attr(ARIA_EXPANDED).as_deref(), Some("false"));
    assert_eq!(trigger.attr(ARIA_LABEL).as_deref(), Some(NAV_OPEN_LABEL));
    assert!(!panel.has(OPEN_CLASS));
}

#[test]
fn adopts_expanded_state_from_markup() {
    let trigger = FakeRegion::new().with_attribute(ARIA_EXPANDED, "true");
    let nav = NavDisclosure::new(trigger, FakeRegion::new());
    assert!(nav.is_open());
    assert!(!nav.toggle());
}

#[test]
fn missing_expanded_attribute_means_closed() {
    let nav = NavDisclosure::new(FakeRegion::new(), FakeRegion::new());
    assert!(!nav.is_open());
}

#[test]
fn link_activation_closes_open_panel() {
    let (trigger, panel, nav) = closed_nav();
    nav.toggle();
    assert!(nav.on_link_activated());
    assert!(!nav.is_open());
    assert!(!panel.has(OPEN_CLASS));
    assert_eq!(trigger.attr(ARIA_EXPANDED).as_deref(), Some("false"));
    // Only the trigger swaps its label
    assert_eq!(trigger.attr(ARIA_LABEL).as_deref(), Some(NAV_CLOSE_LABEL));
}

#[test]
fn close_after_toggle_keeps_label_until_next_toggle() {
    let (trigger, _panel, nav) = closed_nav();
    nav.toggle();
    assert!(nav.close());
    assert_eq!(trigger.attr(ARIA_LABEL).as_deref(), Some(NAV_CLOSE_LABEL));
    assert!(nav.toggle());
    assert_eq!(trigger.attr(ARIA_LABEL).as_deref(), Some(NAV_CLOSE_LABEL));
    assert!(!nav.toggle());
    assert_eq!(trigger.attr(ARIA_LABEL).as_deref(), Some(NAV_OPEN_LABEL));
}

#[test]
fn link_activation_leaves_closed_panel_untouched() {
    let (trigger, panel, nav) = closed_nav();
    assert!(!nav.on_link_activated());
    assert!(!nav.is_open());
    assert!(!panel.has(OPEN_CLASS));
    // Nothing was written
    assert_eq!(trigger.attr(ARIA_LABEL), None);
}
