//! Building a message fragment by fragment.
//!
//! A [`Formatter`] is bound to one [`Format`] and accumulates styled text.
//! Each category call (`info`, `stress`, ...) appends a fragment rendered with
//! that category's style; terminal calls (`tell`, `log`, `broadcast`,
//! `send_title`) build the accumulated text and deliver it.
//!
//! ```rust
//! use chatfmt::{args, Format};
//!
//! let format = Format::default();
//! let mut fmt = format.fmt();
//! fmt.info("Teleported ")
//!     .stress("Alex")
//!     .info_args(" to %s", &args!["spawn"]);
//!
//! assert_eq!(fmt.build().to_plain(), "Teleported Alex to spawn");
//! ```
//!
//! A formatter builds exactly one message. Nothing stops you from appending
//! after a terminal call, but the next send will then include everything
//! written so far.

use std::fmt;
use std::sync::Arc;

use crate::args::{substitute, Arg, DisplayName};
use crate::format::{Category, Format};
use crate::receiver::{
    ChatType, ChatTypeMessageReceiver, MessageChannel, MessageReceiver, Server, TitleReceiver,
};
use crate::style::StyleSpec;
use crate::text::{
    ClickAction, HoverAction, ShiftClickAction, Text, TextAction, TextBuilder, Title, TitleTimes,
};

/// Input to a category call.
///
/// Plain input becomes a new fragment in the category's style. Rich input
/// keeps its structure; only its root style is replaced.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Plain(String),
    Rich(Text),
}

impl Content {
    fn apply(self, spec: &StyleSpec) -> Text {
        match self {
            Content::Plain(s) => Text::styled(s, *spec),
            Content::Rich(text) => text.with_style(*spec),
        }
    }
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Content::Plain(value.to_string())
    }
}

impl From<String> for Content {
    fn from(value: String) -> Self {
        Content::Plain(value)
    }
}

impl From<&String> for Content {
    fn from(value: &String) -> Self {
        Content::Plain(value.clone())
    }
}

impl From<Arg> for Content {
    fn from(value: Arg) -> Self {
        Content::Plain(value.into_string())
    }
}

impl<T: DisplayName + ?Sized> From<&T> for Content {
    fn from(value: &T) -> Self {
        Content::Plain(value.display_name())
    }
}

impl From<Text> for Content {
    fn from(value: Text) -> Self {
        Content::Rich(value)
    }
}

impl From<&Text> for Content {
    fn from(value: &Text) -> Self {
        Content::Rich(value.clone())
    }
}

impl From<&Formatter> for Content {
    fn from(value: &Formatter) -> Self {
        Content::Rich(value.build())
    }
}

macro_rules! content_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Content {
                fn from(value: $ty) -> Self {
                    Content::Plain(value.to_string())
                }
            }
        )*
    };
}

content_from_display!(
    char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

/// Single-use accumulator of styled text bound to one [`Format`].
#[derive(Debug, Clone)]
pub struct Formatter {
    format: Arc<Format>,
    parent: Option<Text>,
    builder: TextBuilder,
    empty: bool,
}

impl Formatter {
    /// Creates an empty formatter.
    pub fn new(format: impl Into<Arc<Format>>) -> Self {
        Self {
            format: format.into(),
            parent: None,
            builder: TextBuilder::new(),
            empty: true,
        }
    }

    /// The format fragments are styled with.
    pub fn format(&self) -> &Format {
        &self.format
    }

    /// Returns true until the first fragment or action is added.
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Builds the text accumulated so far.
    pub fn build(&self) -> Text {
        self.builder.build()
    }

    /// Wraps the accumulated text in a tooltip action.
    pub fn to_hover(&self) -> HoverAction {
        HoverAction::show_text(self.build())
    }

    // =========================================================================
    // Appending
    // =========================================================================

    /// Appends a pre-styled fragment.
    pub fn append(&mut self, text: impl Into<Text>) -> &mut Self {
        self.empty = false;
        self.builder.push(text.into());
        self
    }

    /// Appends a line break, unless nothing has been written yet.
    pub fn line(&mut self) -> &mut Self {
        if !self.empty {
            self.append(Text::new_line());
        }
        self
    }

    /// Appends input in the style of `category`.
    pub fn styled(&mut self, category: Category, input: impl Into<Content>) -> &mut Self {
        let text = input.into().apply(self.format.spec(category));
        self.append(text)
    }

    /// Substitutes `args` into `pattern` and appends the result in the style of
    /// `category`. With no arguments the pattern is appended verbatim.
    pub fn styled_args(&mut self, category: Category, pattern: &str, args: &[Arg]) -> &mut Self {
        if args.is_empty() {
            return self.styled(category, pattern);
        }
        self.styled(category, substitute(pattern, args))
    }

    /// Calls `each` for every item, appending `separator` in the style of
    /// `category` between items.
    pub fn styled_list<I, F>(
        &mut self,
        category: Category,
        items: I,
        separator: &str,
        each: F,
    ) -> &mut Self
    where
        I: IntoIterator,
        F: FnMut(&mut Formatter, I::Item),
    {
        self.list(
            items,
            |fmt| {
                fmt.styled(category, separator);
            },
            each,
        )
    }

    /// Calls `each` for every item and `separator` between items.
    pub fn list<I, S, F>(&mut self, items: I, mut separator: S, mut each: F) -> &mut Self
    where
        I: IntoIterator,
        S: FnMut(&mut Formatter),
        F: FnMut(&mut Formatter, I::Item),
    {
        let mut items = items.into_iter().peekable();
        while let Some(item) = items.next() {
            each(self, item);
            if items.peek().is_some() {
                separator(self);
            }
        }
        self
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Attaches an interaction to the whole message built so far.
    ///
    /// Counts as content: the formatter is no longer empty afterwards.
    pub fn action(&mut self, action: impl Into<TextAction>) -> &mut Self {
        self.empty = false;
        self.builder.set_action(action.into());
        self
    }

    /// Runs a command when the message is clicked.
    pub fn command(&mut self, pattern: &str, args: &[Arg]) -> &mut Self {
        self.action(ClickAction::RunCommand(substitute(pattern, args)))
    }

    /// Suggests a command when the message is clicked.
    pub fn suggest(&mut self, pattern: &str, args: &[Arg]) -> &mut Self {
        self.action(ClickAction::SuggestCommand(substitute(pattern, args)))
    }

    /// Inserts text into the chat input when the message is shift-clicked.
    pub fn insert(&mut self, pattern: &str, args: &[Arg]) -> &mut Self {
        self.action(ShiftClickAction::InsertText(substitute(pattern, args)))
    }

    /// Opens a link when the message is clicked.
    ///
    /// A malformed URL is logged and otherwise ignored.
    pub fn url(&mut self, url: &str) -> &mut Self {
        match ClickAction::open_url(url) {
            Ok(action) => self.action(action),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring link action");
                self
            }
        }
    }

    // =========================================================================
    // Titles
    // =========================================================================

    /// Starts the subtitle of a two-part title.
    ///
    /// The text accumulated here so far becomes the main title. It is copied
    /// now: fragments appended to this formatter afterwards do not show up in
    /// the title, so finish the main title before calling this.
    pub fn subtitle(&self) -> Formatter {
        Formatter {
            format: Arc::clone(&self.format),
            parent: Some(self.build()),
            builder: TextBuilder::new(),
            empty: true,
        }
    }

    /// Builds a title, leaving the durations to the receiver.
    pub fn title(&self) -> Title {
        self.title_timed(TitleTimes::default())
    }

    /// Builds a title with explicit durations.
    pub fn title_timed(&self, times: TitleTimes) -> Title {
        let own = self.build();
        let title = match &self.parent {
            Some(main) => Title::new(main.clone()).subtitle(own),
            None => Title::new(own),
        };
        title.times(times)
    }

    /// Shows the title to every receiver.
    pub fn send_title<'r, I, R>(&self, times: TitleTimes, receivers: I) -> &Self
    where
        I: IntoIterator<Item = &'r R>,
        R: TitleReceiver + ?Sized + 'r,
    {
        let title = self.title_timed(times);
        for receiver in receivers {
            receiver.send_title(&title);
        }
        self
    }

    // =========================================================================
    // Sending
    // =========================================================================

    /// Sends the message to one receiver.
    pub fn tell<R: MessageReceiver + ?Sized>(&self, receiver: &R) -> &Self {
        receiver.send_message(&self.build());
        self
    }

    /// Sends the message to every receiver.
    pub fn tell_all<'r, I, R>(&self, receivers: I) -> &Self
    where
        I: IntoIterator<Item = &'r R>,
        R: MessageReceiver + ?Sized + 'r,
    {
        let message = self.build();
        for receiver in receivers {
            receiver.send_message(&message);
        }
        self
    }

    /// Sends the message to a channel.
    pub fn tell_channel<C: MessageChannel + ?Sized>(&self, channel: &C) -> &Self {
        channel.send(&self.build());
        self
    }

    /// Sends the message to every channel.
    pub fn tell_channels<'c, I, C>(&self, channels: I) -> &Self
    where
        I: IntoIterator<Item = &'c C>,
        C: MessageChannel + ?Sized + 'c,
    {
        let message = self.build();
        for channel in channels {
            channel.send(&message);
        }
        self
    }

    /// Sends the message as `chat_type` to every receiver.
    pub fn tell_chat<'r, I, R>(&self, chat_type: ChatType, receivers: I) -> &Self
    where
        I: IntoIterator<Item = &'r R>,
        R: ChatTypeMessageReceiver + ?Sized + 'r,
    {
        let message = self.build();
        for receiver in receivers {
            receiver.send_message_as(chat_type, &message);
        }
        self
    }

    /// Sends the message as `chat_type` to every channel.
    pub fn tell_channel_chat<'c, I, C>(&self, chat_type: ChatType, channels: I) -> &Self
    where
        I: IntoIterator<Item = &'c C>,
        C: MessageChannel + ?Sized + 'c,
    {
        let message = self.build();
        for channel in channels {
            channel.send_as(chat_type, &message);
        }
        self
    }

    /// Sends the message to everyone holding `permission`.
    pub fn tell_permitted(&self, server: &dyn Server, permission: &str) -> &Self {
        let channel = server.permission_channel(permission);
        self.tell_channel(channel.as_ref())
    }

    /// Sends the message to the server console.
    pub fn log(&self, server: &dyn Server) -> &Self {
        self.tell(server.console())
    }

    /// Sends the message to everyone online.
    pub fn broadcast(&self, server: &dyn Server) -> &Self {
        self.tell_channel(server.broadcast_channel())
    }
}

macro_rules! category_methods {
    ($($category:ident => $plain:ident, $args:ident, $list:ident;)*) => {
        impl Formatter {
            $(
                #[doc = concat!("Appends input in the `", stringify!($plain), "` style.")]
                pub fn $plain(&mut self, input: impl Into<Content>) -> &mut Self {
                    self.styled(Category::$category, input)
                }

                #[doc = concat!("Appends a substituted pattern in the `", stringify!($plain), "` style.")]
                pub fn $args(&mut self, pattern: &str, args: &[Arg]) -> &mut Self {
                    self.styled_args(Category::$category, pattern, args)
                }

                #[doc = concat!("Appends items separated by `", stringify!($plain), "` text.")]
                pub fn $list<I, F>(&mut self, items: I, separator: &str, each: F) -> &mut Self
                where
                    I: IntoIterator,
                    F: FnMut(&mut Formatter, I::Item),
                {
                    self.styled_list(Category::$category, items, separator, each)
                }
            )*
        }
    };
}

category_methods! {
    Info => info, info_args, info_list;
    Subdued => subdued, subdued_args, subdued_list;
    Stress => stress, stress_args, stress_list;
    Error => error, error_args, error_list;
    Warn => warn, warn_args, warn_list;
}

impl From<&Formatter> for Text {
    fn from(fmt: &Formatter) -> Self {
        fmt.build()
    }
}

impl fmt::Display for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build().to_plain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use crate::style::{TextColor, TextStyle};
    use std::cell::RefCell;

    #[derive(Default)]
    struct Inbox(RefCell<Vec<Text>>);

    impl MessageReceiver for Inbox {
        fn send_message(&self, message: &Text) {
            self.0.borrow_mut().push(message.clone());
        }
    }

    struct Named(&'static str);

    impl DisplayName for Named {
        fn display_name(&self) -> String {
            self.0.to_string()
        }
    }

    fn fmt() -> Formatter {
        Format::default().fmt()
    }

    // =========================================================================
    // Empty state
    // =========================================================================

    #[test]
    fn test_new_formatter_is_empty() {
        assert!(fmt().is_empty());
    }

    #[test]
    fn test_append_marks_populated() {
        let mut f = fmt();
        f.append(Text::new("x"));
        assert!(!f.is_empty());
    }

    #[test]
    fn test_category_call_marks_populated() {
        let mut f = fmt();
        f.subdued("x");
        assert!(!f.is_empty());
    }

    #[test]
    fn test_line_on_empty_adds_nothing() {
        let mut f = fmt();
        f.line();
        assert!(f.is_empty());
        assert_eq!(f.build().to_plain(), "");
    }

    #[test]
    fn test_line_after_content() {
        let mut f = fmt();
        f.info("a").line().info("b");
        assert_eq!(f.build().to_plain(), "a\nb");
    }

    #[test]
    fn test_action_marks_populated_without_text() {
        let mut f = fmt();
        f.command("/home", &[]);
        assert!(!f.is_empty());
        assert_eq!(f.build().to_plain(), "");
    }

    // =========================================================================
    // Styling
    // =========================================================================

    #[test]
    fn test_category_style_applied() {
        let mut f = fmt();
        f.subdued("quiet");
        let built = f.build();
        assert_eq!(
            *built.children()[0].style(),
            StyleSpec::of(TextColor::Yellow, &[TextStyle::Italic])
        );
    }

    #[test]
    fn test_rich_input_is_wrapped_not_reparsed() {
        let inner = Text::builder("a")
            .append(Text::styled("b", StyleSpec::from(TextColor::Green)))
            .build();
        let mut f = fmt();
        f.warn(&inner);

        let built = f.build();
        let fragment = &built.children()[0];
        assert_eq!(fragment.style().color, Some(TextColor::Red));
        assert_eq!(fragment.children()[0].style().color, Some(TextColor::Green));
        assert_eq!(fragment.to_plain(), "ab");
    }

    #[test]
    fn test_args_substituted() {
        let mut f = fmt();
        f.info_args("%s joined %s", &args![&Named("Alex"), "the game"]);
        assert_eq!(f.build().to_plain(), "Alex joined the game");
    }

    #[test]
    fn test_no_args_appends_verbatim() {
        let mut f = fmt();
        f.info_args("100%s", &[]);
        assert_eq!(f.build().to_plain(), "100%s");
    }

    #[test]
    fn test_named_input_uses_display_name() {
        let mut f = fmt();
        f.stress(&Named("Nether"));
        assert_eq!(f.build().to_plain(), "Nether");
    }

    // =========================================================================
    // Lists
    // =========================================================================

    fn separators(f: &Formatter, sep: &str) -> usize {
        f.build()
            .children()
            .iter()
            .filter(|t| t.content() == sep)
            .count()
    }

    #[test]
    fn test_list_no_items_no_separator() {
        let mut f = fmt();
        f.info_list(Vec::<&str>::new(), ",", |f, item| {
            f.stress(item);
        });
        assert_eq!(separators(&f, ","), 0);
        assert!(f.is_empty());
    }

    #[test]
    fn test_list_single_item_no_separator() {
        let mut f = fmt();
        f.info_list(["x"], ",", |f, item| {
            f.stress(item);
        });
        assert_eq!(separators(&f, ","), 0);
        assert_eq!(f.build().to_plain(), "x");
    }

    #[test]
    fn test_list_two_items_one_separator() {
        let mut f = fmt();
        f.info_list(["x", "y"], ",", |f, item| {
            f.stress(item);
        });
        assert_eq!(separators(&f, ","), 1);
        assert_eq!(f.build().to_plain(), "x,y");
    }

    #[test]
    fn test_list_separator_uses_category_style() {
        let mut f = fmt();
        f.error_list(["a", "b"], " | ", |f, item| {
            f.info(item);
        });
        let built = f.build();
        let sep = &built.children()[1];
        assert_eq!(sep.content(), " | ");
        assert_eq!(sep.style().color, Some(TextColor::Gray));
    }

    // =========================================================================
    // Actions and titles
    // =========================================================================

    #[test]
    fn test_action_applies_to_whole_message() {
        let mut f = fmt();
        f.info("click ").stress("here").suggest("/msg %s ", &args!["Alex"]);
        let built = f.build();
        assert_eq!(
            built.click(),
            Some(&ClickAction::SuggestCommand("/msg Alex ".into()))
        );
        assert!(built.children().iter().all(|c| c.click().is_none()));
    }

    #[test]
    fn test_malformed_url_is_noop() {
        let mut f = fmt();
        f.url("::not a url::");
        assert!(f.is_empty());
        assert!(f.build().click().is_none());
    }

    #[test]
    fn test_insert_sets_shift_click() {
        let mut f = fmt();
        f.info("coords").insert("%d %d", &args![10, -4]);
        assert_eq!(
            f.build().shift_click(),
            Some(&ShiftClickAction::InsertText("10 -4".into()))
        );
    }

    #[test]
    fn test_title_without_parent() {
        let mut f = fmt();
        f.stress("Welcome");
        let title = f.title();
        assert_eq!(title.title.map(|t| t.to_plain()), Some("Welcome".to_string()));
        assert!(title.subtitle.is_none());
        assert_eq!(title.times, TitleTimes::default());
    }

    #[test]
    fn test_title_with_subtitle() {
        let mut main = fmt();
        main.stress("Arena");
        let mut sub = main.subtitle();
        sub.subdued_args("round %d", &args![3]);
        let title = sub.title_timed(TitleTimes::fade(10, 60));

        assert_eq!(title.title.unwrap().to_plain(), "Arena");
        assert_eq!(title.subtitle.unwrap().to_plain(), "round 3");
        assert_eq!(title.times.stay, Some(60));
    }

    #[test]
    fn test_subtitle_copies_main_title_at_call_time() {
        let mut main = fmt();
        main.stress("Arena");
        let mut sub = main.subtitle();
        main.info(" (late)");
        sub.subdued("go");

        let title = sub.title();
        assert_eq!(title.title.unwrap().to_plain(), "Arena");
        assert_eq!(main.build().to_plain(), "Arena (late)");
    }

    // =========================================================================
    // Sending
    // =========================================================================

    #[test]
    fn test_tell_sends_same_content_each_call() {
        let inbox = Inbox::default();
        let mut f = fmt();
        f.info("hello");
        f.tell(&inbox).tell(&inbox);

        let got = inbox.0.borrow();
        assert_eq!(got.len(), 2);
        assert_eq!(got[0], got[1]);
    }

    #[test]
    fn test_tell_all_reaches_everyone() {
        let a = Inbox::default();
        let b = Inbox::default();
        let mut f = fmt();
        f.warn("restarting");
        f.tell_all([&a, &b]);
        assert_eq!(a.0.borrow().len(), 1);
        assert_eq!(b.0.borrow()[0].to_plain(), "restarting");
    }

    #[test]
    fn test_display_is_plain() {
        let mut f = fmt();
        f.info("a").stress("b");
        assert_eq!(f.to_string(), "ab");
    }
}
