//! Slash commands understood by the prompt.

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<'a> {
    /// Text to send to the chat service.
    Message(&'a str),
    History,
    Models,
    Help,
    Quit,
}

pub const HELP: &str = "\
Type a message and press Enter to send it.
  /history  print the conversation as JSON
  /models   list the models the service offers
  /help     show this help
  /quit     exit";

/// Unknown slash words are sent as ordinary messages.
pub fn parse(line: &str) -> Input<'_> {
    match line.trim() {
        "/history" => Input::History,
        "/models" => Input::Models,
        "/help" | "/?" => Input::Help,
        "/quit" | "/exit" => Input::Quit,
        _ => Input::Message(line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(parse("/history"), Input::History);
        assert_eq!(parse("  /models "), Input::Models);
        assert_eq!(parse("/?"), Input::Help);
        assert_eq!(parse("/exit"), Input::Quit);
    }

    #[test]
    fn everything_else_is_a_message() {
        assert_eq!(parse("hello"), Input::Message("hello"));
        assert_eq!(parse("/unknown"), Input::Message("/unknown"));
        assert_eq!(parse("  "), Input::Message("  "));
        assert_eq!(parse("what does /history do?"), Input::Message("what does /history do?"));
    }
}
