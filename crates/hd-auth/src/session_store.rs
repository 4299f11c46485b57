use crate::capability::Capability;
use crate::error::{AuthError, Result as AuthResult};
use crate::session::Session;

use hd_core::User;

use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use error_location::ErrorLocation;
use log::warn;

/// File name of the persisted bearer token entry
pub const TOKEN_ENTRY: &str = "token";
/// File name of the persisted user entry (JSON)
pub const USER_ENTRY: &str = "user";

/// Durable session state holder.
///
/// The store is anonymous (no token) or authenticated (token + user). Both
/// entries live as plain files in the session directory and are rehydrated
/// synchronously at `open` with no network round-trip; a stale token is only
/// discovered when a later API call is rejected.
///
/// Processes sharing one directory are not coordinated: the last writer
/// wins, exactly like two browser tabs sharing local storage.
pub struct SessionStore {
    dir: PathBuf,
    current: RwLock<Option<Session>>,
}

impl SessionStore {
    /// Open the store rooted at `dir`, creating the directory if needed and
    /// restoring any previously persisted session.
    #[track_caller]
    pub fn open(dir: impl Into<PathBuf>) -> AuthResult<Self> {
        let dir = dir.into();

        std::fs::create_dir_all(&dir).map_err(|e| AuthError::Storage {
            path: dir.clone(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        let current = Self::rehydrate(&dir);

        Ok(Self {
            dir,
            current: RwLock::new(current),
        })
    }

    /// Restore a session from the persisted entries. Corrupt or partial
    /// state downgrades to anonymous rather than failing the open.
    fn rehydrate(dir: &Path) -> Option<Session> {
        let token = std::fs::read_to_string(dir.join(TOKEN_ENTRY)).ok()?;
        let token = token.trim().to_string();
        if token.is_empty() {
            return None;
        }

        let raw_user = match std::fs::read_to_string(dir.join(USER_ENTRY)) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("session token present but user entry unreadable: {e}");
                return None;
            }
        };

        match serde_json::from_str::<User>(&raw_user) {
            Ok(user) => Some(Session::new(user, token)),
            Err(e) => {
                warn!("persisted user entry is corrupt, starting anonymous: {e}");
                None
            }
        }
    }

    /// The current session, if authenticated.
    pub fn current(&self) -> Option<Session> {
        self.read_lock().clone()
    }

    /// The current bearer token, if authenticated.
    pub fn token(&self) -> Option<String> {
        self.read_lock().as_ref().map(|s| s.token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.read_lock().is_some()
    }

    /// Persist `user` + `token` and transition to authenticated.
    #[track_caller]
    pub fn establish(&self, user: User, token: String) -> AuthResult<Session> {
        let token_path = self.dir.join(TOKEN_ENTRY);
        std::fs::write(&token_path, &token).map_err(|e| AuthError::Storage {
            path: token_path,
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        let raw_user = serde_json::to_string(&user).map_err(|e| AuthError::Decode {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;
        let user_path = self.dir.join(USER_ENTRY);
        std::fs::write(&user_path, raw_user).map_err(|e| AuthError::Storage {
            path: user_path,
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        let session = Session::new(user, token);
        *self.write_lock() = Some(session.clone());
        Ok(session)
    }

    /// Drop both persisted entries and transition to anonymous.
    /// Clearing an already-anonymous store is a no-op success.
    #[track_caller]
    pub fn clear(&self) -> AuthResult<()> {
        for entry in [TOKEN_ENTRY, USER_ENTRY] {
            let path = self.dir.join(entry);
            if let Err(e) = std::fs::remove_file(&path)
                && e.kind() != std::io::ErrorKind::NotFound
            {
                return Err(AuthError::Storage {
                    path,
                    source: e,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        *self.write_lock() = None;
        Ok(())
    }

    /// Check the signed-in role against the capability table, returning the
    /// user on success. Anonymous sessions and insufficient roles fail;
    /// callers surface the denial without issuing any request.
    #[track_caller]
    pub fn authorize(&self, capability: Capability) -> AuthResult<User> {
        let Some(session) = self.current() else {
            return Err(AuthError::NotAuthenticated {
                location: ErrorLocation::from(Location::caller()),
            });
        };

        if !capability.granted_to(session.user.role) {
            return Err(AuthError::Forbidden {
                capability,
                role: session.user.role,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(session.user)
    }

    fn read_lock(&self) -> RwLockReadGuard<'_, Option<Session>> {
        self.current.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_lock(&self) -> RwLockWriteGuard<'_, Option<Session>> {
        self.current.write().unwrap_or_else(|e| e.into_inner())
    }
}
