use std::collections::HashMap;
use std::sync::{Mutex, PoisonError, TryLockError};
use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::dashboard::WeeklyGoal;
use crate::focus::{focus_cell, FocusReader, FocusWriter, ManualFocus};
use crate::progress::UserProgress;

/// Everything one browser session owns. Handlers receive it explicitly.
pub struct Session {
    pub progress: UserProgress,
    pub focus: FocusWriter,
    pub manual_focus: ManualFocus,
    pub weekly_goal: Option<WeeklyGoal>,
    last_seen: Instant,
}

impl Session {
    pub fn new() -> Self {
        Self::with_progress(UserProgress::new())
    }

    pub fn with_progress(progress: UserProgress) -> Self {
        let (focus, _reader) = focus_cell();
        Self {
            progress,
            focus,
            manual_focus: ManualFocus::new(),
            weekly_goal: None,
            last_seen: Instant::now(),
        }
    }

    pub fn focus_reader(&self) -> FocusReader {
        self.focus.reader()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

pub const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(60 * 60);
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

/// In-memory session store. Nothing survives a restart.
///
/// Sessions idle longer than `idle_ttl` are dropped, and the least recently
/// used one is evicted once `max_sessions` is reached.
pub struct SessionRegistry {
    sessions: Mutex<HashMap<Uuid, Session>>,
    idle_ttl: Duration,
    max_sessions: usize,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_IDLE_TTL, DEFAULT_MAX_SESSIONS)
    }

    pub fn with_limits(idle_ttl: Duration, max_sessions: usize) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            idle_ttl,
            max_sessions: max_sessions.max(1),
        }
    }

    /// Runs `f` against the session, seeding it on first use.
    ///
    /// Seeding happens once per id; later calls reuse the stored progress
    /// until the session expires.
    pub fn with_session<R>(&self, id: Uuid, f: impl FnOnce(&mut Session) -> R) -> R {
        let now = Instant::now();
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);

        let expired = sessions
            .get(&id)
            .is_some_and(|session| now.saturating_duration_since(session.last_seen) > self.idle_ttl);
        if expired {
            sessions.remove(&id);
            log::info!("study session {id} expired");
        }

        if !sessions.contains_key(&id) {
            self.evict(&mut sessions, now);
            log::info!("starting study session {id}");
        }

        let session = sessions.entry(id).or_insert_with(Session::new);
        session.last_seen = now;
        f(session)
    }

    // Makes room for one more session
    fn evict(&self, sessions: &mut HashMap<Uuid, Session>, now: Instant) {
        let before = sessions.len();
        sessions.retain(|_, session| now.saturating_duration_since(session.last_seen) <= self.idle_ttl);

        while sessions.len() >= self.max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, session)| session.last_seen)
                .map(|(id, _)| *id);
            match oldest {
                Some(id) => sessions.remove(&id),
                None => break,
            };
        }

        let evicted = before - sessions.len();
        if evicted > 0 {
            log::debug!("evicted {evicted} study sessions");
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Like `len`, but `None` instead of waiting while another caller holds the registry.
    pub fn try_len(&self) -> Option<usize> {
        match self.sessions.try_lock() {
            Ok(sessions) => Some(sessions.len()),
            Err(TryLockError::Poisoned(poisoned)) => Some(poisoned.into_inner().len()),
            Err(TryLockError::WouldBlock) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
