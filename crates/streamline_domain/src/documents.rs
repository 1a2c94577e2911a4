//! Paged documents, printing and translation.

use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use streamline_foundation::{Error, Result};
use streamline_pipeline::map;

/// One page of a document.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Page {
    content: String,
}

impl Page {
    /// Creates a page.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Returns the text on the page.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// A titled sequence of pages.
///
/// Pages are fixed at construction; every transformation returns a new
/// document. Cloning shares the page storage.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Document {
    title: String,
    pages: Arc<[Page]>,
}

impl Document {
    /// Creates a document.
    #[must_use]
    pub fn new(title: impl Into<String>, pages: impl IntoIterator<Item = Page>) -> Self {
        Self {
            title: title.into(),
            pages: pages.into_iter().collect(),
        }
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the pages.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Returns the content of page `number` (zero-based).
    ///
    /// # Errors
    /// Returns `IndexOutOfBounds` if the document has no such page.
    pub fn page_content(&self, number: usize) -> Result<&str> {
        self.pages
            .get(number)
            .map(Page::content)
            .ok_or_else(|| Error::index_out_of_bounds(number, self.pages.len()))
    }

    /// Returns a copy whose every page ends with a `Document: <title>` footer.
    #[must_use]
    pub fn copy_with_footer(&self) -> Self {
        let pages = map(self.pages(), |p| self.append_footer(p));
        self.copy_with_pages(pages)
    }

    fn append_footer(&self, original: &Page) -> Page {
        Page::new(format!("{}\nDocument: {}", original.content(), self.title))
    }

    fn copy_with_pages(&self, pages: Vec<Page>) -> Self {
        Self::new(self.title.clone(), pages)
    }
}

/// Renders title pages and pages, each followed by a page break line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PagePrinter {
    page_break: String,
}

impl PagePrinter {
    /// Creates a printer using `page_break` between pages.
    #[must_use]
    pub fn new(page_break: impl Into<String>) -> Self {
        Self {
            page_break: page_break.into(),
        }
    }

    /// Renders the title page of `document`.
    #[must_use]
    pub fn print_title_page(&self, document: &Document) -> String {
        format!("{}\n{}\n", document.title(), self.page_break)
    }

    /// Renders one page.
    #[must_use]
    pub fn print_page(&self, page: &Page) -> String {
        format!("{}\n{}\n", page.content(), self.page_break)
    }
}

/// Text translation.
pub trait Translator {
    /// Translates `input`.
    fn translate(&self, input: &str) -> String;
}

impl<F> Translator for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, input: &str) -> String {
        self(input)
    }
}

/// Built-in languages.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    /// Every string reversed, character by character.
    Reversish,
}

impl Translator for Language {
    fn translate(&self, input: &str) -> String {
        match self {
            Self::Reversish => input.chars().rev().collect(),
        }
    }
}

/// Titles of `documents`, in order.
#[must_use]
pub fn titles_of(documents: &[Document]) -> Vec<String> {
    map(documents, |d| d.title().to_string())
}

/// Number of characters on `page`.
#[must_use]
pub fn character_count(page: &Page) -> usize {
    page.content().chars().count()
}

/// Character count of every page of `document`, in page order.
#[must_use]
pub fn page_character_counts(document: &Document) -> Vec<usize> {
    map(document.pages(), character_count)
}

/// Renders the title page followed by every page.
#[must_use]
pub fn print(document: &Document, printer: &PagePrinter) -> String {
    let mut output = printer.print_title_page(document);
    for page in map(document.pages(), |p| printer.print_page(p)) {
        output.push_str(&page);
    }
    output
}

/// Translates the title and every page of `document`.
#[must_use]
pub fn translate(document: &Document, translator: &dyn Translator) -> Document {
    let pages = map(document.pages(), |p| Page::new(translator.translate(p.content())));
    Document::new(translator.translate(document.title()), pages)
}

/// Content of each requested page, in request order.
///
/// # Errors
/// Returns `IndexOutOfBounds` for the first missing page.
pub fn page_contents(document: &Document, numbers: &[usize]) -> Result<Vec<String>> {
    numbers
        .iter()
        .map(|n| document.page_content(*n).map(str::to_string))
        .collect()
}

/// Builds one page per content string.
pub fn pages_from<I, S>(contents: I) -> Vec<Page>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    contents.into_iter().map(Page::new).collect()
}
