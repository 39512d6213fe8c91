//! Startup connectivity probe.

use tracing::{debug, info, warn};

use chatline_common::{ConversationTurn, RequestState, SessionStatus};

use super::manager::Session;
use super::types::RequestGuard;

/// Explanation shown when the service cannot be reached at startup.
pub(crate) fn connectivity_notice(base_url: &str) -> String {
    format!(
        "⚠️ Cannot connect to the API server. Please make sure:\n\
         1. The API server is running\n\
         2. The API is accessible at {base_url}\n\
         3. Cross-origin requests to it are not being blocked (check for CORS errors)"
    )
}

impl Session {
    /// Probe the service once and record whether it is reachable.
    ///
    /// Input is enabled afterwards whatever the outcome, so the user can
    /// always read the explanation and try sending anyway. Once a result is
    /// recorded, later calls return it without probing again; a probe that
    /// was dropped before its result came back runs again next time.
    pub async fn initialize(&self) -> SessionStatus {
        {
            let st = self.lock();
            if st.probed {
                debug!(session = %self.id.short(), "already initialized");
                return st.status;
            }
        }

        let guard = match RequestGuard::acquire(self, RequestState::AwaitingHealthCheck) {
            Ok(guard) => guard,
            Err(busy) => {
                debug!(session = %self.id.short(), state = ?busy, "probe skipped, session busy");
                return self.status();
            }
        };

        let status = match self.backend.health().await {
            Ok(report) => {
                info!(
                    session = %self.id.short(),
                    version = report.version.as_deref().unwrap_or("unknown"),
                    "API connected"
                );
                SessionStatus::Connected
            }
            Err(e) => {
                warn!(session = %self.id.short(), error = %e, "API connection failed");
                SessionStatus::Disconnected
            }
        };

        self.set_status(status);
        self.lock().probed = true;
        if status == SessionStatus::Disconnected {
            self.append(ConversationTurn::assistant(connectivity_notice(
                self.backend.base_url(),
            )));
        }
        drop(guard);
        status
    }
}
