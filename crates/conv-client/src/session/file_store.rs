use crate::{SessionError, SessionResult, SessionStore};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use conv_core::{Session, UserProfile};
use log::{debug, info, warn};

const TOKEN_FILE: &str = "token";
const USER_FILE: &str = "user.json";
const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Session persisted as two files, `token` and `user.json`, in one directory.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_FILE)
    }

    fn user_path(&self) -> PathBuf {
        self.dir.join(USER_FILE)
    }

    fn read_token(&self) -> Option<String> {
        let path = self.token_path();
        match fs::read_to_string(&path) {
            Ok(contents) => {
                let token = contents.trim();
                (!token.is_empty()).then(|| token.to_string())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!("Cannot read session token at {path:?}: {e}");
                None
            }
        }
    }

    fn read_user(&self) -> Option<UserProfile> {
        let path = self.user_path();
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("Cannot read stored user at {path:?}: {e}");
                return None;
            }
        };

        match serde_json::from_str::<UserProfile>(&contents) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Stored user corrupted at {path:?}: {e}");
                self.backup_corrupted(&path);
                None
            }
        }
    }

    /// Moves a corrupted `user.json` aside as `user.json.corrupted.{timestamp}`.
    fn backup_corrupted(&self, path: &Path) {
        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self.dir.join(format!("{USER_FILE}.corrupted.{timestamp}"));

        match fs::rename(path, &backup_path) {
            Ok(()) => warn!("Backed up corrupted user to {backup_path:?}"),
            Err(e) => warn!("Failed to back up corrupted user at {path:?}: {e}"),
        }
    }

    /// Temp file, fsync, then rename over the target.
    fn write_atomic(&self, name: &str, contents: &[u8]) -> SessionResult<()> {
        let final_path = self.dir.join(name);
        let temp_path = self.dir.join(format!("{name}.tmp.{}", std::process::id()));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

            file.write_all(contents)
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            SessionError::atomic_rename(temp_path, final_path.clone(), e)
        })
    }

    fn remove_if_present(path: PathBuf) -> SessionResult<()> {
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::file_remove(path, e)),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<Session> {
        let Some(token) = self.read_token() else {
            debug!("No stored session in {:?}", self.dir);
            return None;
        };

        Some(Session::new(token, self.read_user()))
    }

    fn save(&self, session: &Session) -> SessionResult<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| SessionError::dir_creation(self.dir.clone(), e))?;

        // Profile before token: a new token never sits beside a stale profile
        match &session.user {
            Some(user) => {
                let json = serde_json::to_string_pretty(user)?;
                self.write_atomic(USER_FILE, json.as_bytes())?;
            }
            None => Self::remove_if_present(self.user_path())?,
        }
        self.write_atomic(TOKEN_FILE, session.token.as_bytes())?;

        info!("Saved session in {:?}", self.dir);
        Ok(())
    }

    fn clear(&self) -> SessionResult<()> {
        Self::remove_if_present(self.token_path())?;
        Self::remove_if_present(self.user_path())?;

        info!("Cleared session in {:?}", self.dir);
        Ok(())
    }
}
