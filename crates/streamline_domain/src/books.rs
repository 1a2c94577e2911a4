//! Books, their authors and publishers.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use streamline_foundation::{Container, ContainerKind};
use streamline_pipeline::{collect, map};

/// A book author.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Author {
    first_name: String,
    last_name: String,
}

impl Author {
    /// Creates an author.
    #[must_use]
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Returns `"first last"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

/// A publishing house.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Publisher {
    name: String,
}

impl Publisher {
    /// Creates a publisher.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A published book.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Book {
    title: String,
    author: Author,
    publisher: Publisher,
}

impl Book {
    /// Creates a book.
    #[must_use]
    pub fn new(title: impl Into<String>, author: Author, publisher: Publisher) -> Self {
        Self {
            title: title.into(),
            author,
            publisher,
        }
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the author.
    #[must_use]
    pub fn author(&self) -> &Author {
        &self.author
    }

    /// Returns the publisher.
    #[must_use]
    pub fn publisher(&self) -> &Publisher {
        &self.publisher
    }
}

/// Titles of `books`, in order.
#[must_use]
pub fn titles_of(books: &[Book]) -> Vec<String> {
    map(books, |b| b.title().to_string())
}

/// Full names of the authors of `books`, in order.
#[must_use]
pub fn names_of_authors_of(books: &[Book]) -> Vec<String> {
    map(books, |b| b.author().full_name())
}

/// The distinct publishers of `books`.
#[must_use]
pub fn publishers_represented_by(books: &[Book]) -> Container<Publisher> {
    collect(map(books, |b| b.publisher().clone()), ContainerKind::UniqueSet)
}
