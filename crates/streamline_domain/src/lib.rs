//! Domain entities and the collection operations over them.
//!
//! Each module owns one family of entities and exposes the filter, map and
//! collect operations relevant to it:
//! - [`shapes`] - Recoloring shapes in place while logging their old colors
//! - [`voting`] - Eligible voters, district registers and unspoiled ballots
//! - [`books`] - Titles, author names and distinct publishers
//! - [`documents`] - Page statistics, printing, translation and footers
//! - [`music`] - Libraries, artist ordering and pluggable song ratings

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod books;
pub mod documents;
pub mod music;
pub mod shapes;
pub mod voting;

pub use books::{Author, Book, Publisher};
pub use documents::{Document, Language, Page, PagePrinter, Translator};
pub use music::{
    CloudScrobblingMusicLibrary, CloudScrobblingService, LocalFilesystemMusicLibrary, MusicLibrary,
    RatedLibrary, Rating, Song, StarRating, UserRatedLocalFilesystemMusicLibrary,
};
pub use shapes::{Color, Shape};
pub use voting::{Ballot, ElectoralDistrict, Party, Person, RegisteredVoter, VotingRules};
