use crate::session::Session;
use crate::store::{SessionError, SessionStore};

/// Owns the current session and its persistence.
///
/// Lifecycle: [`init`](Self::init) once at startup, [`establish`](Self::establish)
/// after a successful login, [`teardown`](Self::teardown) on logout or when the
/// backend rejects the token.
#[derive(Debug)]
pub struct SessionManager<S> {
    store: S,
    current: Option<Session>,
}

impl<S: SessionStore> SessionManager<S> {
    pub fn new(store: S) -> Self {
        Self { store, current: None }
    }

    /// Load a persisted session, if any. A corrupt store is cleared and
    /// treated as logged out.
    pub fn init(&mut self) -> Result<Option<&Session>, SessionError> {
        self.current = match self.store.load() {
            Ok(session) => session,
            Err(SessionError::Corrupt(e)) => {
                tracing::warn!(error = %e, "discarding unreadable session");
                self.store.clear()?;
                None
            }
            Err(e) => return Err(e),
        };
        if let Some(session) = &self.current {
            tracing::debug!(email = %session.email(), "session restored");
        }
        Ok(self.current.as_ref())
    }

    pub fn establish(&mut self, session: Session) -> Result<&Session, SessionError> {
        self.store.save(&session)?;
        tracing::info!(email = %session.email(), "logged in");
        Ok(self.current.insert(session))
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Forget the session in memory and in the store.
    pub fn teardown(&mut self) -> Result<(), SessionError> {
        if let Some(session) = self.current.take() {
            tracing::info!(email = %session.email(), "logged out");
        }
        self.store.clear()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
