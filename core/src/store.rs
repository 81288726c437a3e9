//! Persisted State
//!
//! Two storage scopes, both best-effort:
//!
//! - **Durable**: `$XDG_CONFIG_HOME/festejo/state.toml` holds the last
//!   selected locale and page as raw string values. Missing file,
//!   unparseable file, or unknown values all resolve to defaults - none
//!   of these is an error the user sees.
//! - **Session**: a marker file under `$XDG_RUNTIME_DIR/festejo/`
//!   (fallback `/tmp/festejo-$UID/`) records that the intro overlay has
//!   played this login session. Presence of the file is the flag.
//!
//! If either location is unavailable the store degrades to in-memory
//! defaults for the session; failures are logged at debug level only.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::locale::Locale;
use crate::page::Page;

/// Failure reading the durable state file
///
/// Only used internally to describe why a read was discarded; every
/// caller degrades to defaults.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file exists but could not be read
    #[error("failed to read state file at {path}: {source}")]
    Read {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// The file was read but is not valid TOML
    #[error("failed to parse state file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Raw on-disk layout of the durable state file
///
/// Both entries are optional strings; interpretation (and defaulting of
/// anything absent or unknown) happens at load time.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct StateFile {
    locale: Option<String>,
    page: Option<String>,
}

/// State restored at startup, with defaults already applied
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SavedState {
    /// Last selected locale (default: English)
    pub locale: Locale,
    /// Last viewed page (default: Home)
    pub page: Page,
}

/// Reads and writes the persisted selection and the session intro flag
#[derive(Debug)]
pub struct StateStore {
    state_path: Option<PathBuf>,
    marker_path: Option<PathBuf>,
}

impl StateStore {
    /// Store rooted at the standard per-user locations
    ///
    /// Either path may be unavailable (no XDG dirs, sandboxed home); the
    /// affected scope then silently stays in-memory.
    #[must_use]
    pub fn open() -> Self {
        Self {
            state_path: dirs::config_dir().map(|dir| dir.join("festejo").join("state.toml")),
            marker_path: Some(session_dir().join("intro-shown")),
        }
    }

    /// Store rooted at explicit paths (tests)
    #[must_use]
    pub fn with_paths(state_path: PathBuf, marker_path: PathBuf) -> Self {
        Self {
            state_path: Some(state_path),
            marker_path: Some(marker_path),
        }
    }

    /// Store that never touches the filesystem
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            state_path: None,
            marker_path: None,
        }
    }

    /// Restore the persisted selection, defaulting anything missing
    #[must_use]
    pub fn load(&self) -> SavedState {
        let file = match self.read_state_file() {
            Ok(file) => file,
            Err(error) => {
                tracing::debug!(%error, "state file unavailable, using defaults");
                StateFile::default()
            }
        };

        SavedState {
            locale: file
                .locale
                .as_deref()
                .and_then(Locale::from_code)
                .unwrap_or_default(),
            page: file
                .page
                .as_deref()
                .and_then(Page::from_code)
                .unwrap_or_default(),
        }
    }

    /// Persist the selected locale (best-effort)
    pub fn save_locale(&self, locale: Locale) {
        self.update_state_file(|file| file.locale = Some(locale.code().to_string()));
    }

    /// Persist the selected page (best-effort)
    pub fn save_page(&self, page: Page) {
        self.update_state_file(|file| file.page = Some(page.code().to_string()));
    }

    /// Whether the intro already played this session
    #[must_use]
    pub fn intro_shown(&self) -> bool {
        self.marker_path
            .as_ref()
            .is_some_and(|path| path.exists())
    }

    /// Record that the intro played this session (best-effort)
    pub fn mark_intro_shown(&self) {
        let Some(path) = &self.marker_path else {
            return;
        };
        if let Some(parent) = path.parent() {
            if let Err(error) = fs::create_dir_all(parent) {
                tracing::debug!(%error, "could not create session dir");
                return;
            }
        }
        if let Err(error) = fs::write(path, b"1") {
            tracing::debug!(%error, "could not write intro marker");
        }
    }

    fn read_state_file(&self) -> Result<StateFile, StoreError> {
        let Some(path) = &self.state_path else {
            return Ok(StateFile::default());
        };
        if !path.exists() {
            return Ok(StateFile::default());
        }
        let raw = fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.clone(),
            source,
        })?;
        Ok(toml::from_str(&raw)?)
    }

    /// Read-modify-write of the whole state file
    ///
    /// An unreadable existing file is replaced rather than surfaced.
    fn update_state_file(&self, mutate: impl FnOnce(&mut StateFile)) {
        let Some(path) = &self.state_path else {
            return;
        };

        let mut file = self.read_state_file().unwrap_or_default();
        mutate(&mut file);

        if let Some(parent) = path.parent() {
            if let Err(error) = fs::create_dir_all(parent) {
                tracing::debug!(%error, "could not create config dir");
                return;
            }
        }

        match toml::to_string(&file) {
            Ok(serialized) => {
                if let Err(error) = fs::write(path, serialized) {
                    tracing::debug!(%error, "could not write state file");
                }
            }
            Err(error) => tracing::debug!(%error, "could not serialize state file"),
        }
    }
}

/// Session-scoped directory for the intro marker
///
/// `$XDG_RUNTIME_DIR/festejo`, falling back to `/tmp/festejo-$UID` on
/// Unix hosts without a runtime dir, matching the lifetime of a login
/// session as closely as the platform allows.
fn session_dir() -> PathBuf {
    if let Some(dir) = dirs::runtime_dir() {
        return dir.join("festejo");
    }

    #[cfg(unix)]
    {
        let uid = unsafe { libc::getuid() };
        PathBuf::from(format!("/tmp/festejo-{uid}"))
    }

    #[cfg(not(unix))]
    {
        std::env::temp_dir().join("festejo")
    }
}
