//! Session Store
//!
//! The session provider every other component reads through. It is owned by
//! the application and injected as `Arc<dyn SessionStore>`, so tests can swap
//! in a fresh store.
//!
//! Lifecycle: empty at startup (or whatever the file store finds on disk),
//! written only by the auth bridge on a successful login or registration,
//! cleared only by logout. The HTTP client and the route guard only read.
//!
//! ## Implementations
//!
//! - [`MemorySessionStore`] - lives as long as the process
//! - [`FileSessionStore`] - JSON file, so a terminal session survives between runs

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::shared::{ClientError, Session};

/// `getSession` / `signIn` / `signOut` semantics over one active session
pub trait SessionStore: Send + Sync {
    /// The active session, if any
    fn get_session(&self) -> Result<Option<Session>, ClientError>;

    /// Replace the active session
    fn sign_in(&self, session: Session) -> Result<(), ClientError>;

    /// Drop the active session
    fn sign_out(&self) -> Result<(), ClientError>;

    /// Access token of the active session. Read failures count as "no token".
    fn access_token(&self) -> Option<String> {
        match self.get_session() {
            Ok(session) => session.map(|s| s.access_token),
            Err(e) => {
                tracing::warn!("[SESSION] Could not read session: {}", e);
                None
            }
        }
    }
}

/// In-process session store
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that starts out signed in
    pub fn with_session(session: Session) -> Self {
        Self {
            session: RwLock::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get_session(&self) -> Result<Option<Session>, ClientError> {
        let guard = self
            .session
            .read()
            .map_err(|_| ClientError::session("session lock poisoned"))?;
        Ok(guard.clone())
    }

    fn sign_in(&self, session: Session) -> Result<(), ClientError> {
        let mut guard = self
            .session
            .write()
            .map_err(|_| ClientError::session("session lock poisoned"))?;
        *guard = Some(session);
        Ok(())
    }

    fn sign_out(&self) -> Result<(), ClientError> {
        let mut guard = self
            .session
            .write()
            .map_err(|_| ClientError::session("session lock poisoned"))?;
        *guard = None;
        Ok(())
    }
}

/// Session persisted as JSON at a fixed path
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/chatdesk/session.json`
    pub fn default_path() -> Result<PathBuf, ClientError> {
        dirs::config_dir()
            .map(|dir| dir.join("chatdesk").join("session.json"))
            .ok_or_else(|| ClientError::session("no configuration directory for this platform"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn get_session(&self) -> Result<Option<Session>, ClientError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ClientError::session(format!(
                    "failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };
        let session = serde_json::from_str(&raw).map_err(|e| {
            ClientError::session(format!("corrupt session file {}: {}", self.path.display(), e))
        })?;
        Ok(Some(session))
    }

    fn sign_in(&self, session: Session) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ClientError::session(format!("failed to create {}: {}", parent.display(), e)))?;
        }
        let raw = serde_json::to_string_pretty(&session)
            .map_err(|e| ClientError::session(format!("failed to encode session: {}", e)))?;
        write_private(&self.path, raw.as_bytes())
            .map_err(|e| ClientError::session(format!("failed to write {}: {}", self.path.display(), e)))?;
        tracing::debug!("[SESSION] Session written to {}", self.path.display());
        Ok(())
    }

    fn sign_out(&self) -> Result<(), ClientError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::session(format!(
                "failed to remove {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

// Tokens sit in this file; it is created owner-only and an existing file is
// narrowed before it is truncated.
#[cfg(unix)]
fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    if path.exists() {
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    }
    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(contents)
}

#[cfg(not(unix))]
fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    std::fs::write(path, contents)
}
