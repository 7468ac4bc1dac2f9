//! Durable storage for the host profile.
//!
//! The profile lives in a JSON document at a fixed relative path. `setup`
//! writes it; every benchmark run reads it back and refuses to continue
//! without it.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;
use tracing::debug;

use crate::domain::HostProfile;

/// Default location of the profile document, relative to the working
/// directory.
pub const DEFAULT_PROFILE_FILE: &str = "pulsebench_env.json";

/// Errors from saving or loading the profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// No profile has been written yet.
    #[error("Environment file '{}' not found. Run `pulsebench setup` first.", .path.display())]
    NotInitialized { path: PathBuf },

    /// The document exists but is not a valid profile.
    #[error("Environment file '{}' is malformed: {reason}", .path.display())]
    Malformed { path: PathBuf, reason: String },

    /// The document parsed but violates profile invariants.
    #[error("Environment file '{}' is invalid: {reason}", .path.display())]
    Invalid { path: PathBuf, reason: String },

    /// Reading or writing the file failed.
    #[error("Failed to access environment file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads and writes the [`HostProfile`] document.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new(DEFAULT_PROFILE_FILE)
    }
}

impl ProfileStore {
    /// Create a store backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the profile document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `profile`, replacing any previous content.
    pub fn save(&self, profile: &HostProfile) -> Result<(), ProfileError> {
        self.check(profile)?;

        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        profile
            .serialize(&mut serializer)
            .map_err(|e| ProfileError::Malformed {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;
        buf.push(b'\n');

        let io_err = |source| ProfileError::Io {
            path: self.path.clone(),
            source,
        };
        let mut file = fs::File::create(&self.path).map_err(io_err)?;
        file.write_all(&buf).map_err(io_err)?;

        debug!(path = %self.path.display(), "Saved host profile");
        Ok(())
    }

    fn check(&self, profile: &HostProfile) -> Result<(), ProfileError> {
        if profile.is_valid() {
            Ok(())
        } else {
            Err(ProfileError::Invalid {
                path: self.path.clone(),
                reason: "cpu_threads must be at least 1".to_string(),
            })
        }
    }

    /// Read the profile back.
    ///
    /// A missing file is reported as [`ProfileError::NotInitialized`]; no
    /// defaults are fabricated.
    pub fn load(&self) -> Result<HostProfile, ProfileError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ProfileError::NotInitialized {
                    path: self.path.clone(),
                });
            }
            Err(source) => {
                return Err(ProfileError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let profile: HostProfile =
            serde_json::from_str(&content).map_err(|e| ProfileError::Malformed {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        self.check(&profile)?;

        debug!(path = %self.path.display(), distro = %profile.distro, "Loaded host profile");
        Ok(profile)
    }
}
