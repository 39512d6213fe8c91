pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ChatlineError, ConfigError};
pub use events::{EventBus, SessionEvent};
pub use id::{new_id, SessionId};
pub use types::{ConversationTurn, RequestState, Role, SessionStatus};

pub type Result<T> = std::result::Result<T, ChatlineError>;
