//! Global theme state singleton
//!
//! Observers and stylesheet builders read the active theme from here
//! instead of threading it through every call.

use std::sync::{Mutex, OnceLock, RwLock};

use tracing::debug;

use crate::theme::Theme;

/// Global theme state instance
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

/// Global change callback - set by the app layer to re-run style generation
static CHANGE_CALLBACK: Mutex<Option<fn()>> = Mutex::new(None);

/// Set the function called after the active theme changes
pub fn set_change_callback(callback: fn()) {
    *CHANGE_CALLBACK.lock().unwrap() = Some(callback);
}

fn notify_change() {
    // Copy out so the callback may replace itself
    let callback = *CHANGE_CALLBACK.lock().unwrap();
    if let Some(callback) = callback {
        callback();
    }
}

/// Global theme state
pub struct ThemeState {
    theme: RwLock<Theme>,
}

impl ThemeState {
    /// Initialize the global theme state.
    ///
    /// Safe to call multiple times; the first call wins.
    pub fn init(theme: Theme) {
        let _ = THEME_STATE.set(ThemeState {
            theme: RwLock::new(theme),
        });
    }

    /// Initialize with the default breakpoints
    pub fn init_default() {
        Self::init(Theme::default());
    }

    /// Get the global theme state instance
    pub fn get() -> &'static ThemeState {
        THEME_STATE
            .get()
            .expect("ThemeState not initialized. Call ThemeState::init() at app startup.")
    }

    /// Try to get the global theme state (returns None if not initialized)
    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    /// Snapshot of the active theme
    pub fn theme(&self) -> Theme {
        self.theme.read().unwrap().clone()
    }

    /// Replace the active theme; no-op if it is unchanged
    pub fn set_theme(&self, theme: Theme) {
        let mut current = self.theme.write().unwrap();
        if *current == theme {
            return;
        }
        debug!(
            "ThemeState::set_theme - switching from {:?} to {:?}",
            current.name(),
            theme.name()
        );
        *current = theme;
        drop(current);

        notify_change();
    }
}
