//! Session struct, state accessors, and history bookkeeping.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::broadcast;

use chatline_common::{
    ConversationTurn, EventBus, RequestState, SessionEvent, SessionId, SessionStatus,
};

use crate::pacing::ReplyPacing;
use crate::ChatBackend;

/// Mutable state, only ever locked between awaits.
#[derive(Debug, Default)]
pub(crate) struct SessionState {
    /// Append-only conversation history.
    pub(crate) history: Vec<ConversationTurn>,
    pub(crate) status: SessionStatus,
    pub(crate) request: RequestState,
    /// Whether the presentation layer should accept input.
    pub(crate) input_enabled: bool,
    /// Whether the "assistant is typing" indicator is shown.
    pub(crate) typing: bool,
    /// Set once the startup probe has run.
    pub(crate) probed: bool,
}

/// One conversation with the chat service.
///
/// Methods take `&self` so a host can hold a submission in flight while
/// still reading state or attempting (and having dropped) another one.
pub struct Session {
    pub(super) id: SessionId,
    pub(super) backend: Arc<dyn ChatBackend>,
    pub(super) pacing: ReplyPacing,
    pub(crate) events: EventBus,
    state: Mutex<SessionState>,
}

impl Session {
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self {
            id: SessionId::new(),
            backend,
            pacing: ReplyPacing::default(),
            events: EventBus::default(),
            state: Mutex::new(SessionState::default()),
        }
    }

    pub fn with_pacing(mut self, pacing: ReplyPacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Publish onto an existing bus instead of a private one.
    pub fn with_event_bus(mut self, events: EventBus) -> Self {
        self.events = events;
        self
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Append a turn and announce it.
    pub(crate) fn append(&self, turn: ConversationTurn) {
        let mut st = self.lock();
        st.history.push(turn.clone());
        self.events.publish(SessionEvent::TurnAppended(turn));
    }

    pub(crate) fn set_typing(&self, typing: bool) {
        let mut st = self.lock();
        if st.typing != typing {
            st.typing = typing;
            self.events.publish(SessionEvent::TypingChanged(typing));
        }
    }

    pub(crate) fn set_status(&self, status: SessionStatus) {
        let mut st = self.lock();
        st.status = status;
        self.events.publish(SessionEvent::StatusChanged(status));
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Receive presentation events from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Snapshot of the conversation so far.
    pub fn history(&self) -> Vec<ConversationTurn> {
        self.lock().history.clone()
    }

    pub fn turn_count(&self) -> usize {
        self.lock().history.len()
    }

    pub fn status(&self) -> SessionStatus {
        self.lock().status
    }

    pub fn request_state(&self) -> RequestState {
        self.lock().request
    }

    pub fn is_input_enabled(&self) -> bool {
        self.lock().input_enabled
    }

    pub fn is_typing(&self) -> bool {
        self.lock().typing
    }

    pub fn pacing(&self) -> ReplyPacing {
        self.pacing
    }
}
