//! # chatfmt - Consistent chat message styling
//!
//! `chatfmt` lets plugins describe messages by meaning instead of by color.
//! A message is built from fragments tagged with one of five categories
//! (info, subdued, stress, error, warn); a [`Format`] decides how each
//! category looks. Server owners restyle a plugin's messages by editing one
//! small file per plugin, without the plugin knowing.
//!
//! ## Quick start
//!
//! ```rust
//! use chatfmt::{args, Format};
//!
//! let format = Format::default();
//! let message = format
//!     .info("Welcome back, ")
//!     .stress("Alex")
//!     .subdued_args(" (%d unread)", &args![3])
//!     .build();
//!
//! assert_eq!(message.to_plain(), "Welcome back, Alex (3 unread)");
//! ```
//!
//! ## Per-plugin formats
//!
//! [`FormatRegistry`] maps identifiers to formats, each persisted as
//! `<root>/<id>.conf`. A plugin ships its preferred default with
//! [`FormatRegistry::init`]; an owner's edits to the file always win.
//!
//! ## Sending
//!
//! The crate does not talk to players directly. Terminal calls such as
//! [`Formatter::tell`] hand finished [`Text`](text::Text) to the host through
//! the traits in [`receiver`]. [`TerminalConsole`](receiver::TerminalConsole)
//! prints to the local terminal.
//!
//! ## Modules
//!
//! - [`style`]: colors, toggles and [`StyleSpec`](style::StyleSpec)
//! - [`format`]: [`Format`], its builder and file representation
//! - [`text`]: the rich-text tree, interactions and titles
//! - [`formatter`]: [`Formatter`], the message builder
//! - [`pagination`]: paged lists
//! - [`registry`]: per-identifier formats on disk
//! - [`receiver`]: delivery traits
//! - [`args`]: placeholder substitution

pub mod args;
pub mod error;
pub mod format;
pub mod formatter;
pub mod pagination;
pub mod receiver;
pub mod registry;
pub mod style;
pub mod text;

pub use args::{Arg, DisplayName};
pub use error::FormatError;
pub use format::{Category, Format, FormatBuilder, FormatConfig};
pub use formatter::{Content, Formatter};
pub use pagination::{PaginatedFormatter, PaginationList};
pub use receiver::{
    ChatType, ChatTypeMessageReceiver, MessageChannel, MessageReceiver, Server, TitleReceiver,
};
pub use registry::{FormatRegistry, FormatStore, PluginContext, RegistryConfig, GLOBAL_ID};
pub use style::{StyleSpec, TextColor, TextStyle};
pub use text::{Text, Title, TitleTimes};
