//! Light/dark theme.
//!
//! The theme travels as an explicit [`ThemeContext`] value into the renderers.
//! Reading and writing the persisted preference happens only through a
//! [`ThemeStore`]; in the server that store is the `theme` cookie.

use std::fmt;
use std::str::FromStr;

use axum::http::HeaderValue;
use axum_extra::headers::Cookie;
use serde::{Deserialize, Serialize};

use crate::error::SiteError;

/// Cookie holding the theme preference.
pub const THEME_COOKIE: &str = "theme";

/// One year.
const THEME_COOKIE_MAX_AGE: u64 = 365 * 24 * 3600;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Class put on `<html>`; dark is the unstyled default.
    #[must_use]
    pub const fn html_class(self) -> &'static str {
        match self {
            Self::Dark => "",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(SiteError::validation("theme", format!("unknown theme '{other}'"))),
        }
    }
}

/// Persistent key-value boundary for the theme preference.
pub trait ThemeStore {
    /// Stored preference, if any.
    fn load(&self) -> Option<Theme>;

    /// Persist a new preference.
    fn save(&mut self, theme: Theme);
}

/// Theme handed to renderers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeContext {
    pub theme: Theme,
}

impl ThemeContext {
    /// Read the stored preference, defaulting to dark.
    #[must_use]
    pub fn from_store(store: &dyn ThemeStore) -> Self {
        Self { theme: store.load().unwrap_or_default() }
    }

    #[must_use]
    pub const fn is_dark(&self) -> bool {
        matches!(self.theme, Theme::Dark)
    }
}

/// Flip the stored theme and persist the result.
pub fn toggle_theme(store: &mut dyn ThemeStore) -> Theme {
    let next = store.load().unwrap_or_default().toggled();
    store.save(next);
    next
}

/// Cookie-backed store: reads from the request, emits `Set-Cookie` for the response.
#[derive(Debug, Clone, Default)]
pub struct CookieThemeStore {
    current: Option<Theme>,
    pending: Option<Theme>,
}

impl CookieThemeStore {
    /// Build from the request's `Cookie` header. Unparseable values are ignored.
    #[must_use]
    pub fn from_cookie(cookie: Option<&Cookie>) -> Self {
        let current = cookie.and_then(|c| c.get(THEME_COOKIE)).and_then(|v| v.parse().ok());
        Self { current, pending: None }
    }

    /// `Set-Cookie` value for a preference saved during this request.
    #[must_use]
    pub fn set_cookie_header(&self) -> Option<HeaderValue> {
        let theme = self.pending?;
        let value = format!(
            "{THEME_COOKIE}={}; Path=/; Max-Age={THEME_COOKIE_MAX_AGE}; SameSite=Lax",
            theme.as_str()
        );
        HeaderValue::from_str(&value).ok()
    }
}

impl ThemeStore for CookieThemeStore {
    fn load(&self) -> Option<Theme> {
        self.pending.or(self.current)
    }

    fn save(&mut self, theme: Theme) {
        self.pending = Some(theme);
    }
}
