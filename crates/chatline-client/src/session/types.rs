//! Session result types and the request-state guard.

use std::time::Duration;

use chatline_common::{RequestState, SessionEvent};

use super::manager::Session;

/// Why a submission was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Nothing left after trimming whitespace.
    Empty,
    /// Another request is still in flight.
    Busy,
}

/// How an accepted exchange ended. Either way exactly one assistant turn
/// was appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeOutcome {
    /// The service answered; `delay` is the pacing applied before showing it.
    Replied { delay: Duration },
    /// The exchange failed and the generic error turn was shown immediately.
    Failed,
}

impl ExchangeOutcome {
    pub fn delay(&self) -> Duration {
        match self {
            ExchangeOutcome::Replied { delay } => *delay,
            ExchangeOutcome::Failed => Duration::ZERO,
        }
    }
}

/// Result of [`Session::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Ignored(IgnoreReason),
    Exchanged(ExchangeOutcome),
}

impl Submission {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Submission::Ignored(_))
    }
}

/// Holds the session out of `Idle` for one request.
///
/// Acquiring moves the session into the requested state and disables
/// input; dropping returns it to `Idle`, clears the typing indicator and
/// re-enables input. Release happens on drop so a cancelled future never
/// leaves the session stuck.
pub(crate) struct RequestGuard<'a> {
    session: &'a Session,
}

impl<'a> RequestGuard<'a> {
    /// Fails with the current state if the session is not idle.
    pub(crate) fn acquire(session: &'a Session, state: RequestState) -> Result<Self, RequestState> {
        let mut st = session.lock();
        if st.request != RequestState::Idle {
            return Err(st.request);
        }
        st.request = state;
        if st.input_enabled {
            st.input_enabled = false;
            session.events.publish(SessionEvent::InputEnabled(false));
        }
        Ok(Self { session })
    }
}

impl Drop for RequestGuard<'_> {
    fn drop(&mut self) {
        let mut st = self.session.lock();
        st.request = RequestState::Idle;
        if st.typing {
            st.typing = false;
            self.session.events.publish(SessionEvent::TypingChanged(false));
        }
        if !st.input_enabled {
            st.input_enabled = true;
            self.session.events.publish(SessionEvent::InputEnabled(true));
        }
    }
}
