/// Markup contract and behaviour tuning.
///
/// The page markup is owned by the site templates; these names must stay in
/// sync with it. Timing and threshold values keep magic numbers out of the
/// behaviour modules.
// Persisted theme
pub const THEME_STORAGE_KEY: &str = "aurora-theme";
pub const PREFERS_LIGHT_QUERY: &str = "(prefers-color-scheme: light)";

// Element ids
pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const NAV_BUTTON_ID: &str = "mobileNavBtn";
pub const NAV_ID: &str = "primaryNav";
pub const MODAL_ID: &str = "modal";
pub const MODAL_TITLE_ID: &str = "modalTitle";
pub const MODAL_BODY_ID: &str = "modalContent";
pub const MODAL_CLOSE_ID: &str = "closeModal";
pub const PROGRESS_ID: &str = "readingProgress";
pub const SCROLL_TOP_ID: &str = "scrollTop";

// Selectors
pub const CARD_SELECTOR: &str = ".post-card";
pub const OPEN_SELECTOR: &str = "[data-open]";
pub const NAV_LINK_SELECTOR: &str = "a";

// Attributes
pub const THEME_ATTR: &str = "data-theme";
pub const CARD_TITLE_ATTR: &str = "data-title";
pub const CARD_CONTENT_ATTR: &str = "data-content";
pub const ARIA_EXPANDED: &str = "aria-expanded";
pub const ARIA_LABEL: &str = "aria-label";
pub const ARIA_PRESSED: &str = "aria-pressed";
pub const ARIA_HIDDEN: &str = "aria-hidden";

// Classes
pub const OPEN_CLASS: &str = "open";
pub const SHOW_CLASS: &str = "show";
pub const LOADED_CLASS: &str = "loaded";

// Inline style properties
pub const DELAY_PROPERTY: &str = "--delay";
pub const WIDTH_PROPERTY: &str = "width";

// Navigation trigger labels
pub const NAV_OPEN_LABEL: &str = "Open menu";
pub const NAV_CLOSE_LABEL: &str = "Close menu";

// Scroll-top appears strictly past this offset (CSS px)
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 300.0;

// Entrance stagger (ms)
pub const ENTRANCE_STEP_MS: u32 = 80;
pub const ENTRANCE_BASE_MS: u32 = 60;

/// Element ids the page wiring resolves at startup.
///
/// `Default` matches the Aurora templates; hosts with different markup can
/// pass their own set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageIds {
    pub theme_toggle: &'static str,
    pub nav_button: &'static str,
    pub nav: &'static str,
    pub modal: &'static str,
    pub modal_title: &'static str,
    pub modal_body: &'static str,
    pub modal_close: &'static str,
    pub progress: &'static str,
    pub scroll_top: &'static str,
}

impl Default for PageIds {
    fn default() -> Self {
        Self {
            theme_toggle: THEME_TOGGLE_ID,
            nav_button: NAV_BUTTON_ID,
            nav: NAV_ID,
            modal: MODAL_ID,
            modal_title: MODAL_TITLE_ID,
            modal_body: MODAL_BODY_ID,
            modal_close: MODAL_CLOSE_ID,
            progress: PROGRESS_ID,
            scroll_top: SCROLL_TOP_ID,
        }
    }
}
