//! Bearer token storage
//!
//! The token lives in memory and, when a session file is configured, is
//! mirrored to disk so a later process can pick it up again.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::error::Error;

#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    token: String,
}

/// Shared handle to the current bearer token
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
    path: Option<PathBuf>,
}

impl Session {
    /// In-memory session without persistence
    pub fn new() -> Self {
        Self::default()
    }

    /// Session backed by `path`, loading a previously stored token if present
    pub fn load(path: Option<PathBuf>) -> Result<Self, Error> {
        let token = match &path {
            Some(path) if path.exists() => read_token(path)?,
            _ => None,
        };

        Ok(Self {
            token: Arc::new(RwLock::new(token)),
            path,
        })
    }

    /// Get the current token
    pub fn token(&self) -> Option<String> {
        let current = self.token.read().unwrap_or_else(|e| e.into_inner());
        current.clone()
    }

    pub fn is_present(&self) -> bool {
        self.token().is_some()
    }

    /// Replace the token, then persist it when a session file is configured
    ///
    /// The in-memory token is updated even when writing the file fails.
    pub fn set_token(&self, token: &str) -> Result<(), Error> {
        {
            let mut current = self.token.write().unwrap_or_else(|e| e.into_inner());
            *current = Some(token.to_string());
        }

        if let Some(path) = &self.path {
            let stored = StoredSession { token: token.to_string() };
            if let Some(dir) = path.parent() {
                if !dir.as_os_str().is_empty() {
                    fs::create_dir_all(dir)?;
                }
            }
            fs::write(path, serde_json::to_vec(&stored)?)?;
            debug!("Session stored in {}", path.display());
        }

        Ok(())
    }

    /// Forget the token and remove the session file
    pub fn clear(&self) -> Result<(), Error> {
        {
            let mut current = self.token.write().unwrap_or_else(|e| e.into_inner());
            *current = None;
        }

        if let Some(path) = &self.path {
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }
}

fn read_token(path: &Path) -> Result<Option<String>, Error> {
    let bytes = fs::read(path)?;
    let stored: StoredSession = serde_json::from_slice(&bytes)?;
    Ok(Some(stored.token).filter(|t| !t.is_empty()))
}
