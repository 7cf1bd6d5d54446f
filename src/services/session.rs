// src/services/session.rs

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::user::{Role, User};

/// A logged-in client.
#[derive(Debug, Clone)]
pub struct ActiveSession {
    pub user_id: String,
    pub role: Role,
    /// Same instant as the token's `exp` claim.
    pub expires_at: DateTime<Utc>,
}

impl ActiveSession {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Live sessions keyed by session id.
///
/// Tokens carry the session id, so closing a session here revokes its token.
/// Expired sessions are swept on every login and on lookup.
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<Uuid, ActiveSession>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a session that lives until `expires_at`.
    pub async fn open(&self, user: &User, expires_at: DateTime<Utc>) -> Uuid {
        let now = Utc::now();
        let id = Uuid::new_v4();
        let session = ActiveSession {
            user_id: user.id.clone(),
            role: user.role,
            expires_at,
        };

        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired(now));
        let swept = before - sessions.len();
        if swept > 0 {
            tracing::debug!(swept, "Expired sessions removed");
        }
        sessions.insert(id, session);
        id
    }

    pub async fn close(&self, id: Uuid) -> Option<ActiveSession> {
        self.sessions.write().await.remove(&id)
    }

    /// The session, if it is still open, unexpired and belongs to `user_id`.
    /// An expired session is removed.
    pub async fn get(&self, id: Uuid, user_id: &str) -> Option<ActiveSession> {
        let now = Utc::now();
        {
            let sessions = self.sessions.read().await;
            match sessions.get(&id) {
                None => return None,
                Some(s) if !s.is_expired(now) => {
                    return Some(s).filter(|s| s.user_id == user_id).cloned();
                }
                Some(_) => {}
            }
        }

        self.sessions.write().await.remove(&id);
        tracing::debug!(session_id = %id, "Expired session removed");
        None
    }

    /// Number of sessions held, expired ones included until the next sweep.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
