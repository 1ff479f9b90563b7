//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! only shared resource is the upstream query backend; the page state itself
//! lives in the browser.

use std::sync::Arc;

use crate::backend::QueryBackend;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn QueryBackend>,
}

impl AppState {
    #[must_use]
    pub fn new(backend: Arc<dyn QueryBackend>) -> Self {
        Self { backend }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Mutex;

    use serde_json::Value;

    use super::*;
    use crate::backend::BackendError;

    /// Backend that replays canned replies and records every query it saw.
    pub struct MockBackend {
        replies: Mutex<Vec<Result<Value, BackendError>>>,
        pub seen: Mutex<Vec<String>>,
    }

    impl MockBackend {
        #[must_use]
        pub fn new(replies: Vec<Result<Value, BackendError>>) -> Self {
            Self { replies: Mutex::new(replies), seen: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait::async_trait]
    impl QueryBackend for MockBackend {
        async fn interpret(&self, query: &str) -> Result<Value, BackendError> {
            self.seen.lock().unwrap().push(query.to_owned());
            let mut replies = self.replies.lock().unwrap();
            if replies.is_empty() {
                return Err(BackendError::Request("mock exhausted".into()));
            }
            replies.remove(0)
        }
    }

    /// Create a test `AppState` around `backend`.
    #[must_use]
    pub fn test_app_state(backend: Arc<MockBackend>) -> AppState {
        AppState::new(backend)
    }
}
