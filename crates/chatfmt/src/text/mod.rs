//! Rich text: styled fragments with interactions.
//!
//! A [`Text`] is a tree. Each node carries its own content, a [`StyleSpec`]
//! and optional interactions; children render after the node's own content
//! and inherit its style where they leave fields unset.
//!
//! ```rust
//! use chatfmt::style::{StyleSpec, TextColor};
//! use chatfmt::text::Text;
//!
//! let text = Text::builder("Hello, ")
//!     .style(StyleSpec::from(TextColor::White))
//!     .append(Text::styled("world", StyleSpec::from(TextColor::Gold)))
//!     .build();
//!
//! assert_eq!(text.to_plain(), "Hello, world");
//! ```

mod action;
mod title;

pub use action::{ClickAction, HoverAction, ShiftClickAction, TextAction};
pub use title::{Title, TitleTimes};

use crate::style::StyleSpec;

/// An immutable piece of rich text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Text {
    content: String,
    style: StyleSpec,
    children: Vec<Text>,
    click: Option<ClickAction>,
    hover: Option<HoverAction>,
    shift_click: Option<ShiftClickAction>,
}

impl Text {
    /// Creates unstyled text.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    /// Creates text with a style.
    pub fn styled(content: impl Into<String>, style: StyleSpec) -> Self {
        Self {
            content: content.into(),
            style,
            ..Default::default()
        }
    }

    /// A line break.
    pub fn new_line() -> Self {
        Self::new("\n")
    }

    /// Starts a builder with the given root content.
    pub fn builder(content: impl Into<String>) -> TextBuilder {
        TextBuilder {
            content: content.into(),
            ..Default::default()
        }
    }

    /// Starts a builder seeded with this text.
    pub fn to_builder(&self) -> TextBuilder {
        TextBuilder {
            content: self.content.clone(),
            style: self.style,
            children: self.children.clone(),
            click: self.click.clone(),
            hover: self.hover.clone(),
            shift_click: self.shift_click.clone(),
        }
    }

    /// Returns a copy with the root style replaced.
    pub fn with_style(mut self, style: StyleSpec) -> Self {
        self.style = style;
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn style(&self) -> &StyleSpec {
        &self.style
    }

    pub fn children(&self) -> &[Text] {
        &self.children
    }

    pub fn click(&self) -> Option<&ClickAction> {
        self.click.as_ref()
    }

    pub fn hover(&self) -> Option<&HoverAction> {
        self.hover.as_ref()
    }

    pub fn shift_click(&self) -> Option<&ShiftClickAction> {
        self.shift_click.as_ref()
    }

    /// Returns true if neither this node nor any child has content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() && self.children.iter().all(Text::is_empty)
    }

    /// Returns the text with all styling and interactions dropped.
    pub fn to_plain(&self) -> String {
        let mut out = String::new();
        self.write_plain(&mut out);
        out
    }

    fn write_plain(&self, out: &mut String) {
        out.push_str(&self.content);
        for child in &self.children {
            child.write_plain(out);
        }
    }

    /// Renders the text with ANSI escape codes.
    ///
    /// Styling is forced on regardless of whether stdout is a terminal.
    pub fn to_ansi(&self) -> String {
        let mut out = String::new();
        self.write_ansi(&StyleSpec::NONE, &mut out);
        out
    }

    fn write_ansi(&self, inherited: &StyleSpec, out: &mut String) {
        let effective = inherited.merge(&self.style);
        if !self.content.is_empty() {
            let style = effective.to_style().force_styling(true);
            // Style each line separately so breaks don't carry escape codes
            let mut lines = self.content.split('\n').peekable();
            while let Some(line) = lines.next() {
                if !line.is_empty() {
                    out.push_str(&style.apply_to(line).to_string());
                }
                if lines.peek().is_some() {
                    out.push('\n');
                }
            }
        }
        for child in &self.children {
            child.write_ansi(&effective, out);
        }
    }
}

impl From<&str> for Text {
    fn from(content: &str) -> Self {
        Text::new(content)
    }
}

impl From<String> for Text {
    fn from(content: String) -> Self {
        Text::new(content)
    }
}

/// Mutable builder for [`Text`].
///
/// [`build`](Self::build) does not consume the builder; the same builder can
/// produce the same text any number of times.
#[derive(Debug, Clone, Default)]
pub struct TextBuilder {
    content: String,
    style: StyleSpec,
    children: Vec<Text>,
    click: Option<ClickAction>,
    hover: Option<HoverAction>,
    shift_click: Option<ShiftClickAction>,
}

impl TextBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the root style.
    pub fn style(mut self, style: StyleSpec) -> Self {
        self.style = style;
        self
    }

    /// Appends a child.
    pub fn append(mut self, text: Text) -> Self {
        self.children.push(text);
        self
    }

    /// Appends a child in place.
    pub fn push(&mut self, text: Text) {
        self.children.push(text);
    }

    /// Sets an interaction on the root, replacing any of the same kind.
    pub fn action(mut self, action: impl Into<TextAction>) -> Self {
        self.set_action(action.into());
        self
    }

    /// Sets an interaction on the root in place.
    pub fn set_action(&mut self, action: TextAction) {
        match action {
            TextAction::Click(click) => self.click = Some(click),
            TextAction::Hover(hover) => self.hover = Some(hover),
            TextAction::ShiftClick(shift) => self.shift_click = Some(shift),
        }
    }

    /// Returns true if no content or children have been added.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() && self.children.is_empty()
    }

    /// Snapshots the builder into a [`Text`].
    pub fn build(&self) -> Text {
        Text {
            content: self.content.clone(),
            style: self.style,
            children: self.children.clone(),
            click: self.click.clone(),
            hover: self.hover.clone(),
            shift_click: self.shift_click.clone(),
        }
    }
}
