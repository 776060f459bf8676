//! Carousel/grid view mode and its persisted flag.

use super::constants::VIEW_MODE_STORAGE_KEY;
use super::error::StorageError;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Carousel,
    Grid,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Carousel => "carousel",
            ViewMode::Grid => "grid",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Carousel => ViewMode::Grid,
            ViewMode::Grid => ViewMode::Carousel,
        }
    }

    pub fn is_grid(self) -> bool {
        self == ViewMode::Grid
    }

    /// Reduced motion always wins over the stored preference.
    pub fn under_motion_pref(self, reduced_motion: bool) -> Self {
        if reduced_motion {
            ViewMode::Grid
        } else {
            self
        }
    }

    /// Label for the toggle control, describing what pressing it does.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ViewMode::Carousel => "Switch to accessible grid view",
            ViewMode::Grid => "Switch to immersive 3D carousel view",
        }
    }

    pub fn toggle_text(self) -> &'static str {
        match self {
            ViewMode::Carousel => "View as Grid",
            ViewMode::Grid => "View as Carousel",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown view mode: {0}")]
pub struct UnknownViewMode(pub String);

impl FromStr for ViewMode {
    type Err = UnknownViewMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "carousel" => Ok(ViewMode::Carousel),
            "grid" => Ok(ViewMode::Grid),
            other => Err(UnknownViewMode(other.to_string())),
        }
    }
}

/// Small fallible key-value store, e.g. `window.localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Read the stored mode. Any failure or unknown value reads as "absent".
pub fn load_view_mode(store: &dyn KeyValueStore) -> Option<ViewMode> {
    match store.get(VIEW_MODE_STORAGE_KEY) {
        Ok(Some(raw)) => raw.parse().ok(),
        Ok(None) => None,
        Err(e) => {
            log::debug!("[view] stored mode unreadable: {}", e);
            None
        }
    }
}

/// Write the mode; failures are logged and otherwise ignored.
pub fn save_view_mode(store: &dyn KeyValueStore, mode: ViewMode) {
    if let Err(e) = store.set(VIEW_MODE_STORAGE_KEY, mode.as_str()) {
        log::debug!("[view] could not persist mode: {}", e);
    }
}

/// Startup view: stored preference, defaulting to carousel, then forced to
/// grid under reduced motion.
pub fn initial_view_mode(store: &dyn KeyValueStore, reduced_motion: bool) -> ViewMode {
    load_view_mode(store)
        .unwrap_or_default()
        .under_motion_pref(reduced_motion)
}
