//! Global theme host for app embedding
//!
//! The engine itself is pure (providers are plain values); the host is the
//! one piece of ambient state an embedding app needs: the root provider, the
//! current host appearance, and a redraw hook. Themes are rebuilt on every
//! change, never mutated in place.

use std::sync::{Mutex, OnceLock, RwLock};

use crate::platform::detect_system_appearance;
use crate::provider::ThemeProvider;
use crate::theme::{ColorScheme, Theme, ThemeMode, ThemeOverrides};

/// Global theme host instance
static THEME_HOST: OnceLock<ThemeHost> = OnceLock::new();

/// Global redraw callback - set by the app layer to trigger UI updates
static REDRAW_CALLBACK: Mutex<Option<fn()>> = Mutex::new(None);

/// Register a function that triggers UI redraws when the theme changes.
pub fn set_redraw_callback(callback: fn()) {
    *REDRAW_CALLBACK.lock().unwrap() = Some(callback);
}

fn trigger_redraw() {
    if let Some(callback) = *REDRAW_CALLBACK.lock().unwrap() {
        callback();
    }
}

/// App-level theme state: root overrides, resolved provider, host appearance.
pub struct ThemeHost {
    overrides: RwLock<ThemeOverrides>,
    provider: RwLock<ThemeProvider>,
    appearance: RwLock<ColorScheme>,
}

impl ThemeHost {
    /// Initialize the global host (call once at app startup).
    pub fn init(overrides: ThemeOverrides) {
        let host = ThemeHost {
            provider: RwLock::new(ThemeProvider::root(overrides.clone())),
            overrides: RwLock::new(overrides),
            appearance: RwLock::new(detect_system_appearance()),
        };
        let _ = THEME_HOST.set(host);
    }

    /// Initialize with the built-in defaults and detected appearance.
    pub fn init_default() {
        Self::init(ThemeOverrides::default());
    }

    /// Get the global host instance
    pub fn get() -> &'static ThemeHost {
        THEME_HOST
            .get()
            .expect("ThemeHost not initialized. Call ThemeHost::init() at app startup.")
    }

    /// Try to get the global host (returns None if not initialized)
    pub fn try_get() -> Option<&'static ThemeHost> {
        THEME_HOST.get()
    }

    /// The root provider for this app. Subtree scopes hang off this via
    /// [`ThemeProvider::child`].
    pub fn provider(&self) -> ThemeProvider {
        self.provider.read().unwrap().clone()
    }

    /// The currently active resolved theme.
    pub fn active_theme(&self) -> Theme {
        let appearance = self.appearance();
        self.provider.read().unwrap().theme(appearance).clone()
    }

    /// The concrete scheme currently in effect (mode resolved against the
    /// host appearance).
    pub fn scheme(&self) -> ColorScheme {
        let appearance = self.appearance();
        self.provider.read().unwrap().mode().resolve(appearance)
    }

    pub fn mode(&self) -> ThemeMode {
        self.provider.read().unwrap().mode()
    }

    /// Replace the mode and rebuild the root theme.
    pub fn set_mode(&self, mode: ThemeMode) {
        {
            let mut overrides = self.overrides.write().unwrap();
            if overrides.mode == Some(mode) {
                return;
            }
            overrides.mode = Some(mode);
            *self.provider.write().unwrap() = ThemeProvider::root(overrides.clone());
        }
        tracing::debug!(?mode, "theme mode changed");
        trigger_redraw();
    }

    /// Flip between explicit light and dark, starting from the scheme
    /// currently in effect.
    pub fn toggle_scheme(&self) {
        let next = match self.scheme().toggle() {
            ColorScheme::Light => ThemeMode::Light,
            ColorScheme::Dark => ThemeMode::Dark,
        };
        self.set_mode(next);
    }

    /// The current host appearance feeding `Auto` mode.
    pub fn appearance(&self) -> ColorScheme {
        *self.appearance.read().unwrap()
    }

    /// Record a host appearance change. Only consumers in `Auto` mode will
    /// observe a different active theme.
    pub fn set_appearance(&self, appearance: ColorScheme) {
        {
            let mut current = self.appearance.write().unwrap();
            if *current == appearance {
                return;
            }
            tracing::debug!(from = ?*current, to = ?appearance, "host appearance changed");
            *current = appearance;
        }
        trigger_redraw();
    }

    /// Replace the root overrides wholesale and rebuild.
    pub fn set_overrides(&self, overrides: ThemeOverrides) {
        {
            *self.provider.write().unwrap() = ThemeProvider::root(overrides.clone());
            *self.overrides.write().unwrap() = overrides;
        }
        trigger_redraw();
    }
}
