//! Music libraries and song ratings.
//!
//! A [`MusicLibrary`] only knows its songs and how often each was played.
//! How a song is rated is a separate [`ScoreStrategy`] chosen when a
//! [`RatedLibrary`] is built: the play-count share by default, or a lookup
//! supplied by the library's data source.

use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use streamline_foundation::{Result, Score};
use streamline_pipeline::{FixedScores, Population, ScoreStrategy, WeightShare};

/// A song rating out of 100.
pub type Rating = Score;

/// A song.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Song {
    title: String,
    artist: String,
}

impl Song {
    /// Creates a song.
    #[must_use]
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
        }
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the artist.
    #[must_use]
    pub fn artist(&self) -> &str {
        &self.artist
    }
}

/// Zero to five stars, as entered by a listener.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StarRating {
    /// No stars.
    ZeroStars,
    /// One star.
    OneStar,
    /// Two stars.
    TwoStars,
    /// Three stars.
    ThreeStars,
    /// Four stars.
    FourStars,
    /// Five stars.
    FiveStars,
}

impl StarRating {
    /// Returns the number of stars.
    #[must_use]
    pub const fn stars(self) -> u8 {
        self as u8
    }

    /// Returns the stars as a percentage, 20 per star.
    #[must_use]
    pub const fn percentage(self) -> i64 {
        self.stars() as i64 * 20
    }
}

/// A collection of songs and their play counts.
pub trait MusicLibrary {
    /// Every song in the library.
    fn all_songs(&self) -> Vec<Song>;

    /// How many times `song` was played.
    fn times_played(&self, song: &Song) -> u64;

    /// Every song, ordered by artist.
    fn sorted_by_artist(&self) -> Vec<Song> {
        sort_by_artist(&self.all_songs())
    }
}

/// Returns `songs` ordered by artist; songs by one artist keep their order.
#[must_use]
pub fn sort_by_artist(songs: &[Song]) -> Vec<Song> {
    let mut sorted = songs.to_vec();
    sorted.sort_by(|a, b| a.artist.cmp(&b.artist));
    sorted
}

/// A library paired with the strategy used to rate its songs.
pub struct RatedLibrary<L> {
    library: L,
    strategy: Box<dyn ScoreStrategy<Song>>,
}

impl<L: MusicLibrary> RatedLibrary<L> {
    /// Pairs `library` with `strategy`.
    #[must_use]
    pub fn new(library: L, strategy: impl ScoreStrategy<Song> + 'static) -> Self {
        Self {
            library,
            strategy: Box::new(strategy),
        }
    }

    /// Rates songs by their share of the library's total play count.
    #[must_use]
    pub fn play_share(library: L) -> Self {
        Self::new(library, WeightShare)
    }

    /// Returns the underlying library.
    #[must_use]
    pub fn library(&self) -> &L {
        &self.library
    }

    /// Rates one song.
    ///
    /// # Errors
    /// Returns the strategy's error, with a `rating of <title>` frame pushed.
    pub fn rating_of(&self, song: &Song) -> Result<Rating> {
        let songs = self.library.all_songs();
        let weight = |s: &Song| self.library.times_played(s);
        let population = Population::new(&songs, &weight);
        let rating = self
            .strategy
            .score(song, &population)
            .map_err(|e| e.with_frame(format!("rating of {}", song.title)))?;
        debug!(title = %song.title, %rating, "rated song");
        Ok(rating)
    }

    /// Rates every song in the library, in library order.
    ///
    /// # Errors
    /// Returns the first song's rating error.
    pub fn ratings(&self) -> Result<Vec<(Song, Rating)>> {
        self.library
            .all_songs()
            .into_iter()
            .map(|song| {
                let rating = self.rating_of(&song)?;
                Ok((song, rating))
            })
            .collect()
    }
}

fn catalogue() -> Vec<Song> {
    vec![
        Song::new("A Change Is Gonna Come", "Sam Cooke"),
        Song::new("Bad Moon Rising", "Creedence Clearwater Revival"),
        Song::new("Candy", "Paulo Nutini"),
        Song::new("Desolation Row", "Bob Dylan"),
        Song::new("Eleanor Rigby", "The Beatles"),
    ]
}

/// Songs stored on the local filesystem with locally counted plays.
#[derive(Clone, Debug, Default)]
pub struct LocalFilesystemMusicLibrary {
    songs: Vec<Song>,
    plays: HashMap<Song, u64>,
}

impl LocalFilesystemMusicLibrary {
    /// Creates a library of never-played songs.
    #[must_use]
    pub fn new(songs: impl IntoIterator<Item = Song>) -> Self {
        Self {
            songs: songs.into_iter().collect(),
            plays: HashMap::new(),
        }
    }

    /// Builder method to set the play count of `song`, adding it if absent.
    #[must_use]
    pub fn with_play_count(mut self, song: Song, count: u64) -> Self {
        if !self.songs.contains(&song) {
            self.songs.push(song.clone());
        }
        self.plays.insert(song, count);
        self
    }

    /// Records one more play of `song`, adding it if absent.
    pub fn record_play(&mut self, song: &Song) {
        if !self.songs.contains(song) {
            self.songs.push(song.clone());
        }
        *self.plays.entry(song.clone()).or_default() += 1;
    }
}

impl MusicLibrary for LocalFilesystemMusicLibrary {
    fn all_songs(&self) -> Vec<Song> {
        self.songs.clone()
    }

    fn times_played(&self, song: &Song) -> u64 {
        self.plays.get(song).copied().unwrap_or(0)
    }
}

/// A stand-in for a remote scrobbling service.
///
/// Play counts are pseudo-random but reproducible: each song's count is
/// drawn from a generator seeded with the service seed and the song.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CloudScrobblingService {
    seed: u64,
}

impl Default for CloudScrobblingService {
    fn default() -> Self {
        Self::new(42)
    }
}

impl CloudScrobblingService {
    /// Creates a service with the given seed.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Play count between 1 and 500 reported by the cloud.
    #[must_use]
    pub fn retrieve_times_played_from_cloud(&self, song: &Song) -> u64 {
        let mut hasher = DefaultHasher::new();
        song.hash(&mut hasher);
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed ^ hasher.finish());
        rng.gen_range(1..=500)
    }

    /// Rating scrobbled by other listeners, 0 for unknown songs.
    #[must_use]
    pub fn retrieve_scrobbled_rating_of(&self, song: &Song) -> i64 {
        match song.title() {
            "Candy" => 78,
            "A Change Is Gonna Come" => 65,
            "Desolation Row" => 34,
            "Bad Moon Rising" => 28,
            "Eleanor Rigby" => 42,
            _ => 0,
        }
    }

    /// Every song known to the service.
    #[must_use]
    pub fn retrieve_all_songs(&self) -> Vec<Song> {
        catalogue()
    }
}

/// A library whose songs and play counts live in the cloud.
#[derive(Clone, Debug, Default)]
pub struct CloudScrobblingMusicLibrary {
    service: CloudScrobblingService,
}

impl CloudScrobblingMusicLibrary {
    /// Creates a library backed by `service`.
    #[must_use]
    pub const fn new(service: CloudScrobblingService) -> Self {
        Self { service }
    }

    /// Pairs the library with the service's scrobbled ratings.
    #[must_use]
    pub fn rated(self) -> RatedLibrary<Self> {
        let service = self.service;
        RatedLibrary::new(
            self,
            FixedScores::new(move |song: &Song| service.retrieve_scrobbled_rating_of(song)),
        )
    }
}

impl MusicLibrary for CloudScrobblingMusicLibrary {
    fn all_songs(&self) -> Vec<Song> {
        self.service.retrieve_all_songs()
    }

    fn times_played(&self, song: &Song) -> u64 {
        self.service.retrieve_times_played_from_cloud(song)
    }
}

/// A local library where the listener rates songs with stars.
#[derive(Clone, Debug)]
pub struct UserRatedLocalFilesystemMusicLibrary {
    songs: Vec<Song>,
}

impl Default for UserRatedLocalFilesystemMusicLibrary {
    fn default() -> Self {
        Self { songs: catalogue() }
    }
}

impl UserRatedLocalFilesystemMusicLibrary {
    /// Creates the library with its fixed song set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stars the listener gave `song`.
    #[must_use]
    pub fn user_rating_of(&self, song: &Song) -> StarRating {
        stars_for(song)
    }

    /// Pairs the library with its listener's star ratings.
    #[must_use]
    pub fn rated(self) -> RatedLibrary<Self> {
        RatedLibrary::new(
            self,
            FixedScores::new(|song: &Song| stars_for(song).percentage()),
        )
    }
}

fn stars_for(song: &Song) -> StarRating {
    match song.title() {
        "Candy" => StarRating::FiveStars,
        "A Change Is Gonna Come" => StarRating::FourStars,
        "Desolation Row" => StarRating::ThreeStars,
        "Bad Moon Rising" => StarRating::TwoStars,
        "Eleanor Rigby" => StarRating::OneStar,
        _ => StarRating::ZeroStars,
    }
}

impl MusicLibrary for UserRatedLocalFilesystemMusicLibrary {
    fn all_songs(&self) -> Vec<Song> {
        self.songs.clone()
    }

    fn times_played(&self, _song: &Song) -> u64 {
        5
    }
}
