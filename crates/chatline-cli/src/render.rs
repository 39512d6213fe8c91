//! Prints session events to the terminal.

use tokio::sync::broadcast::{self, error::RecvError};
use tracing::warn;

use chatline_client::{ApiInfo, ModelsResponse};
use chatline_common::{ConversationTurn, Role, SessionEvent};

/// Text for one turn. User turns are already on screen as typed, so
/// only assistant turns are shown.
pub fn format_turn(turn: &ConversationTurn) -> Option<String> {
    match turn.role {
        Role::User => None,
        Role::Assistant => Some(format!(
            "[{}] bot: {}",
            turn.timestamp.format("%H:%M:%S"),
            turn.content
        )),
    }
}

pub fn format_event(event: &SessionEvent) -> Option<String> {
    match event {
        SessionEvent::StatusChanged(status) => Some(format!("-- {status} --")),
        SessionEvent::TurnAppended(turn) => format_turn(turn),
        SessionEvent::TypingChanged(true) => Some("bot is typing...".into()),
        _ => None,
    }
}

pub async fn render_events(mut rx: broadcast::Receiver<SessionEvent>) {
    loop {
        match rx.recv().await {
            Ok(event) => {
                if let Some(line) = format_event(&event) {
                    println!("{line}");
                }
            }
            Err(RecvError::Lagged(missed)) => warn!(missed, "renderer fell behind"),
            Err(RecvError::Closed) => break,
        }
    }
}

pub fn print_banner(info: &ApiInfo) {
    match &info.version {
        Some(version) => println!("{} (v{version})", info.message),
        None => println!("{}", info.message),
    }
}

pub fn format_models(models: &ModelsResponse) -> String {
    let mut out = String::new();
    for model in &models.available_models {
        let marker = if models.current_model.as_deref() == Some(model.name.as_str()) {
            "*"
        } else {
            " "
        };
        out.push_str(&format!("{marker} {}  {}\n", model.name, model.description));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatline_client::ModelInfo;
    use chatline_common::SessionStatus;

    #[test]
    fn only_assistant_turns_are_printed() {
        assert!(format_turn(&ConversationTurn::user("hi")).is_none());

        let line = format_turn(&ConversationTurn::assistant("Hi there!")).unwrap();
        assert!(line.ends_with("bot: Hi there!"));
    }

    #[test]
    fn status_and_typing_lines() {
        let line = format_event(&SessionEvent::StatusChanged(SessionStatus::Disconnected));
        assert_eq!(line.as_deref(), Some("-- API Disconnected --"));

        assert!(format_event(&SessionEvent::TypingChanged(true)).is_some());
        assert!(format_event(&SessionEvent::TypingChanged(false)).is_none());
        assert!(format_event(&SessionEvent::InputCleared).is_none());
    }

    #[test]
    fn models_mark_current() {
        let models = ModelsResponse {
            available_models: vec![
                ModelInfo {
                    name: "gpt-3.5-turbo".into(),
                    description: "Fast".into(),
                },
                ModelInfo {
                    name: "gpt-4".into(),
                    description: "Capable".into(),
                },
            ],
            current_model: Some("gpt-4".into()),
        };
        let out = format_models(&models);
        let lines: Vec<_> = out.lines().collect();
        assert!(lines[0].starts_with("  gpt-3.5-turbo"));
        assert!(lines[1].starts_with("* gpt-4"));
    }
}
