//! Paged lists built line by line.
//!
//! ```rust
//! use chatfmt::Format;
//!
//! let format = Format::default();
//! let mut list = format.list();
//! list.title().stress("Homes");
//! for name in ["spawn", "base", "mine"] {
//!     list.line().info(name);
//! }
//! list.sort(true);
//!
//! let pages = list.build();
//! let names: Vec<String> = pages.contents().iter().map(|t| t.to_plain()).collect();
//! assert_eq!(names, ["base", "mine", "spawn"]);
//! ```

mod list;

pub use list::{PaginationList, PaginationListBuilder, DEFAULT_LINES_PER_PAGE, LINE_WIDTH};

use std::sync::Arc;

use crate::format::Format;
use crate::formatter::Formatter;
use crate::text::Text;

/// Accumulates the parts of a [`PaginationList`].
///
/// Title, header, footer and padding each have their own [`Formatter`], all
/// bound to the same format. Body lines are written one at a time through
/// [`line`](Self::line).
#[derive(Debug, Clone)]
pub struct PaginatedFormatter {
    format: Arc<Format>,
    title: Formatter,
    header: Formatter,
    footer: Formatter,
    padding: Formatter,
    line: Formatter,
    lines: Vec<Text>,
    lines_per_page: usize,
}

impl PaginatedFormatter {
    pub fn new(format: impl Into<Arc<Format>>) -> Self {
        let format = format.into();
        Self {
            title: Formatter::new(Arc::clone(&format)),
            header: Formatter::new(Arc::clone(&format)),
            footer: Formatter::new(Arc::clone(&format)),
            padding: Formatter::new(Arc::clone(&format)),
            line: Formatter::new(Arc::clone(&format)),
            format,
            lines: Vec::new(),
            lines_per_page: DEFAULT_LINES_PER_PAGE,
        }
    }

    pub fn format(&self) -> &Format {
        &self.format
    }

    pub fn title(&mut self) -> &mut Formatter {
        &mut self.title
    }

    pub fn header(&mut self) -> &mut Formatter {
        &mut self.header
    }

    pub fn footer(&mut self) -> &mut Formatter {
        &mut self.footer
    }

    /// Text repeated either side of the title.
    pub fn padding(&mut self) -> &mut Formatter {
        &mut self.padding
    }

    /// Finishes the line in progress and starts a new one.
    pub fn line(&mut self) -> &mut Formatter {
        self.flush();
        &mut self.line
    }

    /// Content lines per page; 0 puts everything on one page.
    pub fn lines(&mut self, lines_per_page: usize) -> &mut Self {
        self.lines_per_page = lines_per_page;
        self
    }

    /// Sorts the finished lines by their plain text.
    ///
    /// The line in progress is finished first. The sort is stable.
    pub fn sort(&mut self, ignore_case: bool) -> &mut Self {
        self.flush();
        if ignore_case {
            self.lines.sort_by_cached_key(|line| line.to_plain().to_lowercase());
        } else {
            self.lines.sort_by_cached_key(Text::to_plain);
        }
        self
    }

    /// Finished lines so far, not counting the line in progress.
    pub fn finished_lines(&self) -> &[Text] {
        &self.lines
    }

    /// Finishes the line in progress and builds the paged list.
    pub fn build(&mut self) -> PaginationList {
        self.flush();

        let mut builder = PaginationList::builder()
            .contents(self.lines.clone())
            .lines_per_page(self.lines_per_page);
        if !self.title.is_empty() {
            builder = builder.title(self.title.build());
        }
        if !self.header.is_empty() {
            builder = builder.header(self.header.build());
        }
        if !self.footer.is_empty() {
            builder = builder.footer(self.footer.build());
        }
        if !self.padding.is_empty() {
            builder = builder.padding(self.padding.build());
        }
        builder.build()
    }

    fn flush(&mut self) {
        if self.line.is_empty() {
            return;
        }
        let finished = std::mem::replace(&mut self.line, Formatter::new(Arc::clone(&self.format)));
        self.lines.push(finished.build());
    }
}
