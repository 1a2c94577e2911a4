//! Integration tests for music libraries and rating strategies

use streamline_domain::{
    CloudScrobblingMusicLibrary, CloudScrobblingService, LocalFilesystemMusicLibrary, MusicLibrary,
    RatedLibrary, Song, UserRatedLocalFilesystemMusicLibrary,
};
use streamline_foundation::{ErrorKind, Score};
use streamline_pipeline::FixedScores;

fn candy() -> Song {
    Song::new("Candy", "Paulo Nutini")
}

#[test]
fn cloud_ratings_come_from_the_service() {
    let rated = CloudScrobblingMusicLibrary::new(CloudScrobblingService::default()).rated();
    let ratings = rated.ratings().unwrap();
    let values: Vec<u8> = ratings.iter().map(|(_, r)| r.value()).collect();
    assert_eq!(values, vec![65, 28, 78, 34, 42]);
}

#[test]
fn user_ratings_are_twenty_per_star() {
    let rated = UserRatedLocalFilesystemMusicLibrary::new().rated();
    let desolation_row = Song::new("Desolation Row", "Bob Dylan");
    assert_eq!(rated.rating_of(&desolation_row).unwrap(), Score::new(60).unwrap());
    assert_eq!(
        rated.rating_of(&Song::new("Eleanor Rigby", "The Beatles")).unwrap().value(),
        20
    );
}

#[test]
fn play_share_over_local_library() {
    let library = LocalFilesystemMusicLibrary::new(Vec::new())
        .with_play_count(candy(), 1)
        .with_play_count(Song::new("Other", "Someone"), 3);
    let rated = RatedLibrary::play_share(library);
    assert_eq!(rated.rating_of(&candy()).unwrap().value(), 25);
}

#[test]
fn out_of_range_strategy_is_rejected() {
    let rated = RatedLibrary::new(
        LocalFilesystemMusicLibrary::new(vec![candy()]),
        FixedScores::new(|_: &Song| 101_i64),
    );
    let err = rated.rating_of(&candy()).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::Validation {
            value: 101,
            min: 0,
            max: 100
        }
    ));
}

#[test]
fn libraries_sort_by_artist() {
    let songs = CloudScrobblingMusicLibrary::default().sorted_by_artist();
    assert_eq!(songs.first().map(Song::artist), Some("Bob Dylan"));
    assert_eq!(songs.last().map(Song::artist), Some("The Beatles"));
}
