//! Mock chat-completion provider for tests and offline runs.

use super::{ChatCompletion, CompletionRequest, CompletionResponse};
use crate::errors::CompletionError;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A chat-completion provider returning queued canned responses.
///
/// Responses are returned in queue order; a call past the end of the queue
/// fails with [`CompletionError::EmptyResponse`].
#[derive(Debug, Default)]
pub struct MockChatClient {
    responses: Vec<String>,
    call_count: AtomicUsize,
}

impl MockChatClient {
    /// Creates a mock provider with the given response queue.
    #[must_use]
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            responses,
            call_count: AtomicUsize::new(0),
        }
    }

    /// Returns how many completions have been requested.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Resets the queue position and call count.
    pub fn reset(&self) {
        self.call_count.store(0, Ordering::SeqCst);
    }
}

#[async_trait]
impl ChatCompletion for MockChatClient {
    async fn complete(
        &self,
        _request: CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        let index = self.call_count.fetch_add(1, Ordering::SeqCst);
        let content = self
            .responses
            .get(index)
            .ok_or(CompletionError::EmptyResponse)?
            .clone();

        Ok(CompletionResponse {
            content,
            model: Some("mock".to_string()),
            finish_reason: Some("stop".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn responses_come_back_in_queue_order() {
        let mock = MockChatClient::new(vec!["first".to_string(), "second".to_string()]);

        let one = mock
            .complete(CompletionRequest::from_user("a"))
            .await
            .expect("queued response");
        let two = mock
            .complete(CompletionRequest::from_user("b"))
            .await
            .expect("queued response");

        assert_eq!(one.content, "first");
        assert_eq!(two.content, "second");
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn exhausted_queue_is_an_empty_response() {
        let mock = MockChatClient::new(vec![]);
        let err = mock
            .complete(CompletionRequest::from_user("a"))
            .await
            .expect_err("empty queue must fail");

        assert!(matches!(err, CompletionError::EmptyResponse));
    }

    #[tokio::test]
    async fn reset_rewinds_the_queue() {
        let mock = MockChatClient::new(vec!["only".to_string()]);
        let _ = mock.complete(CompletionRequest::from_user("a")).await;
        mock.reset();

        let again = mock
            .complete(CompletionRequest::from_user("a"))
            .await
            .expect("queue rewound");
        assert_eq!(again.content, "only");
        assert_eq!(mock.call_count(), 1);
    }
}
