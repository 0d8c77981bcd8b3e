//! # Theme
//!
//! Display theme shared by every view. Starts as [`Theme::Light`] and only ever changes through
//! [`ThemeStore::toggle_theme`].
use std::{fmt, str::FromStr};

use tokio::sync::watch;
use tracing::debug;

use crate::store::Store;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme `{other}`")),
        }
    }
}

#[derive(Debug, Default)]
pub struct ThemeStore {
    store: Store<Theme>,
}

impl ThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theme(&self) -> Theme {
        self.store.get()
    }

    pub fn toggle_theme(&self) {
        self.store.update(|theme| {
            *theme = theme.toggled();
            debug!("Theme switched to {theme}");
        });
    }

    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.store.subscribe()
    }
}
