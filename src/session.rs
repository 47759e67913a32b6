//! Persisted session handling
//!
//! The last successful sign-in is kept as JSON next to the config file so
//! the app can skip the form on the next launch. An expired session is
//! treated as absent.

use crate::state::AuthSession;
use anyhow::Result;
use std::path::Path;

fn session_path(data_dir: &Path) -> std::path::PathBuf {
    data_dir.join("session.json")
}

pub fn load(data_dir: &Path) -> Option<AuthSession> {
    let path = session_path(data_dir);
    let content = std::fs::read_to_string(&path).ok()?;
    let session: AuthSession = match serde_json::from_str(&content) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!("Discarding unreadable session file: {}", e);
            std::fs::remove_file(&path).ok();
            return None;
        }
    };

    if session.is_expired(chrono::Utc::now().timestamp()) {
        tracing::info!("Stored session for {} has expired", session.email);
        std::fs::remove_file(&path).ok();
        return None;
    }

    Some(session)
}

pub fn save(data_dir: &Path, session: &AuthSession) -> Result<()> {
    let content = serde_json::to_string_pretty(session)?;
    std::fs::write(session_path(data_dir), content)?;
    Ok(())
}

pub fn clear(data_dir: &Path) -> Result<()> {
    let path = session_path(data_dir);
    if path.exists() {
        std::fs::remove_file(path)?;
    }
    Ok(())
}
