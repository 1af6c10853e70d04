//! Local persistence for the session: `localStorage` in the browser, a JSON
//! file in the platform data directory everywhere else.

use thiserror::Error;

use super::session::Session;

pub const SESSION_KEY: &str = "homewatch.session";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no local storage available on this platform")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
    #[error("stored session is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[cfg(not(target_arch = "wasm32"))]
    #[error("session file error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn encode_session(session: &Session) -> Result<String, StorageError> {
    Ok(serde_json::to_string(session)?)
}

pub fn decode_session(raw: &str) -> Result<Option<Session>, StorageError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(raw)?))
}

pub fn load_session() -> Result<Option<Session>, StorageError> {
    match backend::read()? {
        Some(raw) => decode_session(&raw),
        None => Ok(None),
    }
}

pub fn save_session(session: &Session) -> Result<(), StorageError> {
    backend::write(&encode_session(session)?)
}

pub fn clear_session() -> Result<(), StorageError> {
    backend::remove()
}

#[cfg(target_arch = "wasm32")]
mod backend {
    use super::{StorageError, SESSION_KEY};

    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|err| StorageError::Access(format!("{err:?}")))?
            .ok_or(StorageError::Unavailable)
    }

    pub fn read() -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(SESSION_KEY)
            .map_err(|err| StorageError::Access(format!("{err:?}")))
    }

    pub fn write(raw: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(SESSION_KEY, raw)
            .map_err(|err| StorageError::Access(format!("{err:?}")))
    }

    pub fn remove() -> Result<(), StorageError> {
        local_storage()?
            .remove_item(SESSION_KEY)
            .map_err(|err| StorageError::Access(format!("{err:?}")))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::{fs, io::ErrorKind, path::PathBuf};

    use directories::ProjectDirs;

    use super::{StorageError, SESSION_KEY};

    fn session_path() -> Result<PathBuf, StorageError> {
        let dirs =
            ProjectDirs::from("app", "Homewatch", "homewatch").ok_or(StorageError::Unavailable)?;
        Ok(dirs.data_dir().join(format!("{SESSION_KEY}.json")))
    }

    pub fn read() -> Result<Option<String>, StorageError> {
        match fs::read_to_string(session_path()?) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub fn write(raw: &str) -> Result<(), StorageError> {
        let path = session_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, raw)?;
        Ok(())
    }

    pub fn remove() -> Result<(), StorageError> {
        match fs::remove_file(session_path()?) {
            Err(err) if err.kind() != ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_round_trips_through_json() {
        let session = Session::new("jwt", "admin_lia");
        let raw = encode_session(&session).unwrap();
        assert!(raw.contains("\"role\":\"admin\""));
        assert_eq!(decode_session(&raw).unwrap(), Some(session));
    }

    #[test]
    fn blank_entry_is_no_session() {
        assert_eq!(decode_session("  ").unwrap(), None);
    }

    #[test]
    fn corrupt_entry_is_an_error() {
        assert!(matches!(
            decode_session("{\"token\":1}"),
            Err(StorageError::Corrupt(_))
        ));
    }
}
