//! Paged rendering of a list of lines.

use unicode_width::UnicodeWidthStr;

use crate::receiver::MessageReceiver;
use crate::text::{ClickAction, Text};

/// Default number of content lines per page.
pub const DEFAULT_LINES_PER_PAGE: usize = 10;

/// Chat width, in columns, that title bars are padded to.
pub const LINE_WIDTH: usize = 53;

const DEFAULT_PADDING: &str = "=";

/// A list of lines split into pages, with optional decorations.
///
/// Each rendered page is, in order: the title bar (title centered between
/// repeats of the padding text), the header, the page's lines, the footer and
/// a navigation line when there is more than one page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaginationList {
    title: Option<Text>,
    header: Option<Text>,
    footer: Option<Text>,
    padding: Option<Text>,
    contents: Vec<Text>,
    lines_per_page: usize,
}

impl PaginationList {
    pub fn builder() -> PaginationListBuilder {
        PaginationListBuilder::default()
    }

    pub fn title(&self) -> Option<&Text> {
        self.title.as_ref()
    }

    pub fn header(&self) -> Option<&Text> {
        self.header.as_ref()
    }

    pub fn footer(&self) -> Option<&Text> {
        self.footer.as_ref()
    }

    pub fn padding(&self) -> Option<&Text> {
        self.padding.as_ref()
    }

    pub fn contents(&self) -> &[Text] {
        &self.contents
    }

    pub fn lines_per_page(&self) -> usize {
        self.lines_per_page
    }

    /// Number of pages; an empty list still has one (empty) page.
    pub fn page_count(&self) -> usize {
        if self.lines_per_page == 0 || self.contents.is_empty() {
            return 1;
        }
        self.contents.len().div_ceil(self.lines_per_page)
    }

    /// Content lines of one page, numbered from 1.
    pub fn page_contents(&self, page: usize) -> Option<&[Text]> {
        if page == 0 || page > self.page_count() {
            return None;
        }
        if self.lines_per_page == 0 {
            return Some(&self.contents);
        }
        let start = (page - 1) * self.lines_per_page;
        let end = (start + self.lines_per_page).min(self.contents.len());
        Some(&self.contents[start.min(end)..end])
    }

    /// Renders one page, numbered from 1, to the lines a receiver would see.
    pub fn render_page(&self, page: usize) -> Option<Vec<Text>> {
        let contents = self.page_contents(page)?;
        let mut lines = Vec::with_capacity(contents.len() + 4);

        if self.title.is_some() || self.padding.is_some() {
            lines.push(self.title_bar());
        }
        if let Some(header) = &self.header {
            lines.push(header.clone());
        }
        lines.extend(contents.iter().cloned());
        if let Some(footer) = &self.footer {
            lines.push(footer.clone());
        }
        let pages = self.page_count();
        if pages > 1 {
            lines.push(navigation(page, pages));
        }

        Some(lines)
    }

    /// Sends one page, line by line.
    ///
    /// Returns false without sending anything if the page does not exist.
    pub fn send_page<R: MessageReceiver + ?Sized>(&self, receiver: &R, page: usize) -> bool {
        match self.render_page(page) {
            Some(lines) => {
                for line in &lines {
                    receiver.send_message(line);
                }
                true
            }
            None => {
                tracing::debug!(page, pages = self.page_count(), "no such page");
                false
            }
        }
    }

    /// Sends the first page.
    pub fn send_to<R: MessageReceiver + ?Sized>(&self, receiver: &R) {
        self.send_page(receiver, 1);
    }

    fn title_bar(&self) -> Text {
        let padding = self
            .padding
            .clone()
            .unwrap_or_else(|| Text::new(DEFAULT_PADDING));
        let pad_width = padding.to_plain().width().max(1);

        let (title, title_width) = match &self.title {
            Some(title) => {
                let width = title.to_plain().width() + 2;
                (Some(title), width)
            }
            None => (None, 0),
        };

        let repeats = LINE_WIDTH.saturating_sub(title_width) / pad_width;
        let left = repeats / 2;
        let right = repeats - left;

        let mut bar = Text::builder("");
        for _ in 0..left {
            bar = bar.append(padding.clone());
        }
        if let Some(title) = title {
            bar = bar
                .append(Text::new(" "))
                .append(title.clone())
                .append(Text::new(" "));
        }
        for _ in 0..right {
            bar = bar.append(padding.clone());
        }
        bar.build()
    }
}

fn navigation(page: usize, pages: usize) -> Text {
    let mut nav = Text::builder("");
    if page > 1 {
        nav = nav.append(
            Text::builder("«")
                .action(ClickAction::ChangePage(page - 1))
                .build(),
        );
    }
    nav = nav.append(Text::new(format!(" {}/{} ", page, pages)));
    if page < pages {
        nav = nav.append(
            Text::builder("»")
                .action(ClickAction::ChangePage(page + 1))
                .build(),
        );
    }
    nav.build()
}

/// Builder for [`PaginationList`].
#[derive(Debug, Clone)]
pub struct PaginationListBuilder {
    list: PaginationList,
}

impl Default for PaginationListBuilder {
    fn default() -> Self {
        Self {
            list: PaginationList {
                lines_per_page: DEFAULT_LINES_PER_PAGE,
                ..Default::default()
            },
        }
    }
}

impl PaginationListBuilder {
    pub fn title(mut self, title: Text) -> Self {
        self.list.title = Some(title);
        self
    }

    pub fn header(mut self, header: Text) -> Self {
        self.list.header = Some(header);
        self
    }

    pub fn footer(mut self, footer: Text) -> Self {
        self.list.footer = Some(footer);
        self
    }

    pub fn padding(mut self, padding: Text) -> Self {
        self.list.padding = Some(padding);
        self
    }

    pub fn contents(mut self, contents: Vec<Text>) -> Self {
        self.list.contents = contents;
        self
    }

    /// Content lines per page; 0 puts everything on one page.
    pub fn lines_per_page(mut self, lines: usize) -> Self {
        self.list.lines_per_page = lines;
        self
    }

    pub fn build(self) -> PaginationList {
        self.list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(n: usize) -> Vec<Text> {
        (1..=n).map(|i| Text::new(format!("line {}", i))).collect()
    }

    fn plain(texts: &[Text]) -> Vec<String> {
        texts.iter().map(Text::to_plain).collect()
    }

    #[test]
    fn test_default_lines_per_page() {
        assert_eq!(PaginationList::builder().build().lines_per_page(), 10);
    }

    #[test]
    fn test_page_count() {
        let list = PaginationList::builder().contents(lines(25)).build();
        assert_eq!(list.page_count(), 3);
        assert_eq!(list.page_contents(3).unwrap().len(), 5);
        assert!(list.page_contents(4).is_none());
        assert!(list.page_contents(0).is_none());
    }

    #[test]
    fn test_empty_list_has_one_page() {
        let list = PaginationList::builder().build();
        assert_eq!(list.page_count(), 1);
        assert_eq!(list.page_contents(1).unwrap().len(), 0);
    }

    #[test]
    fn test_zero_lines_per_page_is_single_page() {
        let list = PaginationList::builder()
            .contents(lines(30))
            .lines_per_page(0)
            .build();
        assert_eq!(list.page_count(), 1);
        assert_eq!(list.page_contents(1).unwrap().len(), 30);
    }

    #[test]
    fn test_render_order() {
        let list = PaginationList::builder()
            .title(Text::new("Homes"))
            .header(Text::new("name | world"))
            .footer(Text::new("end"))
            .contents(lines(2))
            .build();

        let page = plain(&list.render_page(1).unwrap());
        assert_eq!(page.len(), 5);
        assert!(page[0].contains(" Homes "));
        assert_eq!(&page[1..], &["name | world", "line 1", "line 2", "end"]);
    }

    #[test]
    fn test_title_bar_is_centered_and_padded() {
        let list = PaginationList::builder()
            .title(Text::new("Hi"))
            .padding(Text::new("-"))
            .build();
        let bar = list.render_page(1).unwrap()[0].to_plain();
        assert!(bar.starts_with("---"));
        assert!(bar.ends_with("---"));
        assert_eq!(bar.width(), LINE_WIDTH);
    }

    #[test]
    fn test_no_decorations_without_title_or_padding() {
        let list = PaginationList::builder().contents(lines(1)).build();
        assert_eq!(plain(&list.render_page(1).unwrap()), vec!["line 1"]);
    }

    #[test]
    fn test_navigation_line_on_multi_page() {
        let list = PaginationList::builder()
            .contents(lines(3))
            .lines_per_page(1)
            .build();
        let page = list.render_page(2).unwrap();
        let nav = page.last().unwrap();
        assert_eq!(nav.to_plain(), "« 2/3 »");
        assert_eq!(
            nav.children()[0].click(),
            Some(&ClickAction::ChangePage(1))
        );
    }
}
