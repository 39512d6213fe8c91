//! The read-submit loop over stdin.

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};

use chatline_client::{HttpBackend, Session};
use chatline_common::ChatlineError;

use crate::commands::{self, Input};
use crate::render;

pub async fn run(session: &Session, backend: &HttpBackend) -> Result<(), ChatlineError> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", commands::HELP);

    while let Some(line) = lines.next_line().await? {
        match commands::parse(&line) {
            Input::Quit => break,
            Input::Help => println!("{}", commands::HELP),
            Input::History => {
                let json = serde_json::to_string_pretty(&session.history())
                    .map_err(|e| ChatlineError::Other(format!("failed to encode history: {e}")))?;
                println!("{json}");
            }
            Input::Models => match backend.models().await {
                Ok(models) => print!("{}", render::format_models(&models)),
                Err(e) => {
                    warn!(error = %e, "model listing failed");
                    println!("Could not list models: {e}");
                }
            },
            Input::Message(text) => {
                let result = session.submit(text).await;
                debug!(?result, "submission finished");
                // Let the renderer print the reply before the next read.
                tokio::task::yield_now().await;
            }
        }
    }

    Ok(())
}
