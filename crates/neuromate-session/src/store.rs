use std::collections::HashMap;
use std::sync::Arc;

use jiff::{SignedDuration, Timestamp};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use neuromate_core::models::diagnosis::DiagnosisResult;
use neuromate_core::models::report::ReportData;
use neuromate_instruments::Catalog;

use crate::error::SessionError;
use crate::session::{NextStep, Session};

/// Every live screening session, keyed by an opaque id.
///
/// The outer lock only guards the id map. Each session sits behind its own
/// mutex so answers for one respondent are applied in order while other
/// respondents proceed independently.
pub struct SessionStore {
    catalog: &'static Catalog,
    sessions: RwLock<HashMap<Uuid, Arc<Mutex<Session>>>>,
}

impl SessionStore {
    pub fn new(catalog: &'static Catalog) -> Self {
        Self {
            catalog,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    /// Allocate a fresh session and return its id with the first prompt.
    pub async fn start(&self) -> (Uuid, String) {
        let mut sessions = self.sessions.write().await;
        let id = loop {
            let candidate = Uuid::new_v4();
            if !sessions.contains_key(&candidate) {
                break candidate;
            }
        };
        sessions.insert(id, Arc::new(Mutex::new(Session::new(id, Timestamp::now()))));
        drop(sessions);

        tracing::info!(session_id = %id, "session started");
        (id, self.catalog.first_prompt().to_string())
    }

    pub async fn submit(&self, id: Uuid, raw_answer: &str) -> Result<NextStep, SessionError> {
        let session = self.get(id).await?;
        let mut session = session.lock().await;
        session.submit(self.catalog, raw_answer, Timestamp::now())
    }

    /// The frozen result. Repeated calls return identical values.
    pub async fn final_result(&self, id: Uuid) -> Result<DiagnosisResult, SessionError> {
        let session = self.get(id).await?;
        let session = session.lock().await;
        session
            .result()
            .cloned()
            .ok_or(SessionError::ScreeningNotComplete(id))
    }

    /// Frozen session state for the report renderer.
    pub async fn export(&self, id: Uuid) -> Result<ReportData, SessionError> {
        let session = self.get(id).await?;
        let session = session.lock().await;
        session.report_data(Timestamp::now())
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Shared handle to a live session. A session is never evicted while a
    /// handle to it is held.
    pub async fn session(&self, id: Uuid) -> Result<Arc<Mutex<Session>>, SessionError> {
        self.get(id).await
    }

    /// Drop sessions whose last successful answer is older than `ttl`.
    /// Returns the number of evicted sessions.
    ///
    /// Every caller clones the session handle under the map lock before it
    /// locks the session, so a handle count above one means a request is in
    /// flight and the session is kept.
    pub async fn evict_idle(&self, ttl: SignedDuration, now: Timestamp) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| {
            if Arc::strong_count(session) > 1 {
                return true;
            }
            match session.try_lock() {
                Ok(session) => now.duration_since(session.last_activity()) <= ttl,
                Err(_) => true,
            }
        });
        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::info!(evicted, remaining = sessions.len(), "evicted idle sessions");
        }
        evicted
    }

    async fn get(&self, id: Uuid) -> Result<Arc<Mutex<Session>>, SessionError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(SessionError::SessionNotFound(id))
    }
}
