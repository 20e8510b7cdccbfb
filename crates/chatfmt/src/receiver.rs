//! Message transport: who a finished message can be sent to.
//!
//! The host implements these traits for its own players, consoles and
//! channels; this crate only produces [`Text`] and [`Title`] values and hands
//! them over. [`TerminalConsole`] is a ready-made receiver that prints to the
//! process terminal.

use console::Term;

use crate::text::{Text, Title};

/// Anything that can be sent a chat message.
pub trait MessageReceiver {
    fn send_message(&self, message: &Text);
}

/// Where in the client a message is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ChatType {
    /// Player chat.
    #[default]
    Chat,
    /// Server feedback.
    System,
    /// The line above the hotbar.
    ActionBar,
}

/// A receiver that distinguishes chat types.
pub trait ChatTypeMessageReceiver {
    fn send_message_as(&self, chat_type: ChatType, message: &Text);
}

/// A receiver that can display titles.
pub trait TitleReceiver {
    fn send_title(&self, title: &Title);
}

/// A group of receivers addressed as one.
pub trait MessageChannel {
    fn send(&self, message: &Text) {
        self.send_as(ChatType::default(), message);
    }

    fn send_as(&self, chat_type: ChatType, message: &Text);
}

/// The host server: console, broadcast and permission-scoped channels.
pub trait Server {
    /// The system console.
    fn console(&self) -> &dyn MessageReceiver;

    /// Everyone online.
    fn broadcast_channel(&self) -> &dyn MessageChannel;

    /// Everyone holding `permission`.
    fn permission_channel(&self, permission: &str) -> Box<dyn MessageChannel + '_>;
}

/// Prints messages to the process terminal.
///
/// Messages are rendered with ANSI colors when the terminal supports them and
/// as plain text otherwise.
#[derive(Debug, Clone)]
pub struct TerminalConsole {
    term: Term,
}

impl TerminalConsole {
    /// Prints to standard error.
    pub fn stderr() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    /// Prints to standard output.
    pub fn stdout() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    /// Renders a message the way this console would print it.
    pub fn render(&self, message: &Text) -> String {
        if self.term.features().colors_supported() {
            message.to_ansi()
        } else {
            message.to_plain()
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::stderr()
    }
}

impl MessageReceiver for TerminalConsole {
    fn send_message(&self, message: &Text) {
        if let Err(e) = self.term.write_line(&self.render(message)) {
            tracing::warn!(error = %e, "failed to write message to terminal");
        }
    }
}

impl ChatTypeMessageReceiver for TerminalConsole {
    fn send_message_as(&self, _chat_type: ChatType, message: &Text) {
        self.send_message(message);
    }
}

impl<R: MessageReceiver + ?Sized> MessageReceiver for &R {
    fn send_message(&self, message: &Text) {
        (**self).send_message(message);
    }
}

impl<R: TitleReceiver + ?Sized> TitleReceiver for &R {
    fn send_title(&self, title: &Title) {
        (**self).send_title(title);
    }
}

impl<C: MessageChannel + ?Sized> MessageChannel for &C {
    fn send_as(&self, chat_type: ChatType, message: &Text) {
        (**self).send_as(chat_type, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Collect(RefCell<Vec<(ChatType, String)>>);

    impl MessageChannel for Collect {
        fn send_as(&self, chat_type: ChatType, message: &Text) {
            self.0.borrow_mut().push((chat_type, message.to_plain()));
        }
    }

    #[test]
    fn test_channel_send_defaults_to_chat() {
        let channel = Collect::default();
        channel.send(&Text::new("hi"));
        assert_eq!(channel.0.borrow()[0], (ChatType::Chat, "hi".to_string()));
    }

    #[test]
    fn test_terminal_render_keeps_content() {
        let console = TerminalConsole::stdout();
        assert!(console.render(&Text::new("status ok")).contains("status ok"));
    }
}
