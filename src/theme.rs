use crate::constants::{ARIA_PRESSED, THEME_ATTR};
use crate::region::{SchemePreference, ThemeStore, UiRegion};
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    #[inline]
    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    #[inline]
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value written to the toggle's `aria-pressed`: the control reads as
    /// pressed while the light theme is active.
    #[inline]
    pub fn pressed_attr(self) -> &'static str {
        match self {
            Theme::Light => "true",
            Theme::Dark => "false",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the startup theme: a stored value wins, otherwise the platform
/// preference, with dark as the fallback.
pub fn resolve_initial(stored: Option<&str>, prefers_light: bool) -> Theme {
    match stored {
        Some(value) if !value.is_empty() => match Theme::parse(value) {
            Some(theme) => return theme,
            None => log::warn!("[theme] ignoring unknown stored value {:?}", value),
        },
        _ => {}
    }
    if prefers_light {
        Theme::Light
    } else {
        Theme::Dark
    }
}

/// Keeps the root attribute, the persisted value and the toggle's pressed
/// state in step.
pub struct ThemeController<R, S> {
    root: R,
    toggle: R,
    store: S,
}

impl<R: UiRegion, S: ThemeStore> ThemeController<R, S> {
    pub fn new(root: R, toggle: R, store: S) -> Self {
        Self {
            root,
            toggle,
            store,
        }
    }

    /// Resolve and apply the startup theme.
    pub fn init(&self, preference: &impl SchemePreference) -> Theme {
        let stored = self.store.load();
        // Only consult the media query when nothing usable is stored.
        let prefers_light = match stored.as_deref().and_then(Theme::parse) {
            Some(_) => false,
            None => preference.prefers_light(),
        };
        let theme = resolve_initial(stored.as_deref(), prefers_light);
        self.apply(theme);
        theme
    }

    pub fn apply(&self, theme: Theme) {
        self.root.set_attribute(THEME_ATTR, theme.as_str());
        self.store.save(theme.as_str());
        self.toggle.set_attribute(ARIA_PRESSED, theme.pressed_attr());
    }

    /// The theme currently on the root element; dark when absent.
    pub fn current(&self) -> Theme {
        self.root
            .attribute(THEME_ATTR)
            .as_deref()
            .and_then(Theme::parse)
            .unwrap_or_default()
    }

    pub fn toggle(&self) -> Theme {
        let next = self.current().toggled();
        self.apply(next);
        log::info!("[theme] switched to {}", next);
        next
    }
}
