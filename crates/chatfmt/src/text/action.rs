//! Interactions attached to a piece of text.

use url::Url;

use super::Text;
use crate::error::FormatError;

/// What happens when the text is clicked.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickAction {
    /// Runs a command as the clicking player.
    RunCommand(String),
    /// Places a command in the player's chat input.
    SuggestCommand(String),
    /// Opens a link.
    OpenUrl(Url),
    /// Jumps to a page of the paged list the text belongs to.
    ChangePage(usize),
}

impl ClickAction {
    /// Creates an [`OpenUrl`](ClickAction::OpenUrl) action from a string.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidUrl`] if `url` does not parse.
    pub fn open_url(url: &str) -> Result<Self, FormatError> {
        Url::parse(url)
            .map(ClickAction::OpenUrl)
            .map_err(|e| FormatError::InvalidUrl {
                url: url.to_string(),
                message: e.to_string(),
            })
    }
}

/// What is shown when the pointer rests on the text.
#[derive(Debug, Clone, PartialEq)]
pub enum HoverAction {
    /// Shows a tooltip.
    ShowText(Box<Text>),
}

impl HoverAction {
    /// Creates a tooltip action.
    pub fn show_text(text: impl Into<Text>) -> Self {
        HoverAction::ShowText(Box::new(text.into()))
    }
}

/// What happens when the text is shift-clicked.
#[derive(Debug, Clone, PartialEq)]
pub enum ShiftClickAction {
    /// Inserts text into the player's chat input.
    InsertText(String),
}

/// Any of the three interaction kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum TextAction {
    Click(ClickAction),
    Hover(HoverAction),
    ShiftClick(ShiftClickAction),
}

impl From<ClickAction> for TextAction {
    fn from(action: ClickAction) -> Self {
        TextAction::Click(action)
    }
}

impl From<HoverAction> for TextAction {
    fn from(action: HoverAction) -> Self {
        TextAction::Hover(action)
    }
}

impl From<ShiftClickAction> for TextAction {
    fn from(action: ShiftClickAction) -> Self {
        TextAction::ShiftClick(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_url_valid() {
        let action = ClickAction::open_url("https://example.com/docs").unwrap();
        match action {
            ClickAction::OpenUrl(url) => assert_eq!(url.host_str(), Some("example.com")),
            other => panic!("Expected OpenUrl, got {:?}", other),
        }
    }

    #[test]
    fn test_open_url_malformed() {
        let result = ClickAction::open_url("not a url");
        assert!(matches!(result, Err(FormatError::InvalidUrl { .. })));
    }

    #[test]
    fn test_into_text_action() {
        let action: TextAction = ShiftClickAction::InsertText("/spawn".into()).into();
        assert!(matches!(action, TextAction::ShiftClick(_)));
    }
}
