//! Submitting user text and running one exchange with the service.

use tracing::{debug, info, warn};

use chatline_common::{ConversationTurn, RequestState, SessionEvent};

use super::manager::Session;
use super::types::{ExchangeOutcome, IgnoreReason, RequestGuard, Submission};

/// Assistant turn appended when an exchange fails for any reason.
pub(crate) const EXCHANGE_ERROR_MESSAGE: &str = "Sorry, I encountered an error. Please try again.";

impl Session {
    /// Record `text` as a user turn and exchange it with the service.
    ///
    /// Dropped without effect when `text` is blank or a request is already
    /// in flight; there is no queue. Resolves once the assistant turn
    /// (reply or error) has been appended.
    pub async fn submit(&self, text: &str) -> Submission {
        let message = text.trim();
        if message.is_empty() {
            return Submission::Ignored(IgnoreReason::Empty);
        }

        let guard = match RequestGuard::acquire(self, RequestState::AwaitingChatReply) {
            Ok(guard) => guard,
            Err(state) => {
                debug!(session = %self.id.short(), ?state, "submission dropped, session busy");
                return Submission::Ignored(IgnoreReason::Busy);
            }
        };

        self.append(ConversationTurn::user(message));
        self.events.publish(SessionEvent::InputCleared);

        Submission::Exchanged(self.exchange(message, guard).await)
    }

    async fn exchange(&self, message: &str, guard: RequestGuard<'_>) -> ExchangeOutcome {
        self.set_typing(true);

        // Includes the user turn just appended.
        let history = self.history();

        let outcome = match self.backend.chat(message, &history).await {
            Ok(reply) => {
                let delay = self.pacing.sample();
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                info!(
                    session = %self.id.short(),
                    delay_ms = delay.as_millis() as u64,
                    "reply received"
                );
                self.set_typing(false);
                self.append(ConversationTurn::assistant(reply.response));
                ExchangeOutcome::Replied { delay }
            }
            Err(e) => {
                warn!(session = %self.id.short(), error = %e, "chat exchange failed");
                self.set_typing(false);
                self.append(ConversationTurn::assistant(EXCHANGE_ERROR_MESSAGE));
                ExchangeOutcome::Failed
            }
        };

        drop(guard);
        outcome
    }
}
