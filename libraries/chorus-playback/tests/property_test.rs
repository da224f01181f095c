//! Property-based tests for queue navigation
//!
//! Uses proptest to verify navigator invariants across many random inputs.

use chorus_playback::navigator::{
    build_queue_with_rng, next_track_index, previous_track_index,
    rebuild_queue_with_current_track_with_rng, should_continue_playback,
};
use chorus_playback::{RepeatMode, Track};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

// ===== Helpers =====

fn arbitrary_track() -> impl Strategy<Value = Track> {
    (
        "[A-Za-z ]{1,30}",                  // title
        "[A-Za-z ]{1,20}",                  // artist
        proptest::option::of(1u64..36000), // duration (seconds)
    )
        .prop_map(|(title, artist, duration_secs)| Track {
            id: String::new(), // assigned uniquely below
            title,
            artist,
            url: "https://cdn.example.com/test.mp3".to_string(),
            duration: duration_secs.map(Duration::from_secs),
        })
}

/// Track sequences with unique ids, as queues built from playlists have
fn arbitrary_tracks() -> impl Strategy<Value = Vec<Track>> {
    prop::collection::vec(arbitrary_track(), 1..50).prop_map(|mut tracks| {
        for (i, track) in tracks.iter_mut().enumerate() {
            track.id = format!("t{}", i);
            track.url = format!("https://cdn.example.com/t{}.mp3", i);
        }
        tracks
    })
}

fn arbitrary_repeat_mode() -> impl Strategy<Value = RepeatMode> {
    prop_oneof![
        Just(RepeatMode::Off),
        Just(RepeatMode::Track),
        Just(RepeatMode::Playlist),
    ]
}

fn sorted_ids(tracks: &[Track]) -> Vec<&str> {
    let mut ids: Vec<&str> = tracks.iter().map(|t| t.id.as_str()).collect();
    ids.sort_unstable();
    ids
}

// ===== Property Tests =====

proptest! {
    /// Property: without shuffle, build_queue is an exact copy
    #[test]
    fn unshuffled_queue_preserves_order_exactly(tracks in arbitrary_tracks(), seed in any::<u64>()) {
        let queue = build_queue_with_rng(&tracks, false, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(queue, tracks);
    }

    /// Property: shuffled queue is a permutation (same multiset, same length)
    #[test]
    fn shuffled_queue_is_permutation(tracks in arbitrary_tracks(), seed in any::<u64>()) {
        let queue = build_queue_with_rng(&tracks, true, &mut StdRng::seed_from_u64(seed));

        prop_assert_eq!(queue.len(), tracks.len());
        prop_assert_eq!(sorted_ids(&queue), sorted_ids(&tracks));
    }

    /// Property: rebuilding with shuffle always pins the current track to index 0
    #[test]
    fn rebuild_pins_current_track(
        tracks in arbitrary_tracks(),
        current_index in any::<prop::sample::Index>(),
        seed in any::<u64>()
    ) {
        let current = tracks[current_index.index(tracks.len())].clone();
        let queue = rebuild_queue_with_current_track_with_rng(
            &tracks, &current, true, &mut StdRng::seed_from_u64(seed),
        );

        prop_assert_eq!(queue[0].id.as_str(), current.id.as_str());
        prop_assert_eq!(sorted_ids(&queue), sorted_ids(&tracks));
    }

    /// Property: rebuilding without shuffle returns the input order unchanged
    #[test]
    fn rebuild_without_shuffle_is_identity(
        tracks in arbitrary_tracks(),
        current_index in any::<prop::sample::Index>()
    ) {
        let current = tracks[current_index.index(tracks.len())].clone();
        let queue = rebuild_queue_with_current_track_with_rng(
            &tracks, &current, false, &mut StdRng::seed_from_u64(0),
        );

        prop_assert_eq!(queue, tracks);
    }

    /// Property: repeat-track always replays the current index
    #[test]
    fn repeat_track_replays_current(len in 1usize..100, index in any::<prop::sample::Index>()) {
        let i = index.index(len);
        prop_assert_eq!(next_track_index(i, len, RepeatMode::Track), Some(i));
    }

    /// Property: anywhere before the last track, every mode advances by one
    #[test]
    fn mid_queue_advances_by_one(
        len in 2usize..100,
        index in any::<prop::sample::Index>(),
        mode in arbitrary_repeat_mode()
    ) {
        let i = index.index(len - 1); // i in [0, len-2]
        prop_assume!(mode != RepeatMode::Track);
        prop_assert_eq!(next_track_index(i, len, mode), Some(i + 1));
    }

    /// Property: a returned next index is always in bounds
    #[test]
    fn next_index_in_bounds(
        len in 1usize..100,
        index in any::<prop::sample::Index>(),
        mode in arbitrary_repeat_mode()
    ) {
        let i = index.index(len);
        if let Some(next) = next_track_index(i, len, mode) {
            prop_assert!(next < len);
        }
    }

    /// Property: should_continue_playback agrees with next_track_index
    #[test]
    fn continuation_matches_next_index(
        len in 0usize..100,
        i in 0usize..100,
        mode in arbitrary_repeat_mode()
    ) {
        prop_assert_eq!(
            should_continue_playback(i, len, mode),
            next_track_index(i, len, mode).is_some()
        );
    }

    /// Property: previous steps back by one and never wraps
    #[test]
    fn previous_index_contract(i in 0usize..1000) {
        match previous_track_index(i) {
            Some(prev) => {
                prop_assert!(i > 0);
                prop_assert_eq!(prev, i - 1);
            }
            None => prop_assert_eq!(i, 0),
        }
    }

    /// Property: the same seed produces the same shuffle
    #[test]
    fn seeded_shuffle_is_reproducible(tracks in arbitrary_tracks(), seed in any::<u64>()) {
        let a = build_queue_with_rng(&tracks, true, &mut StdRng::seed_from_u64(seed));
        let b = build_queue_with_rng(&tracks, true, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(a, b);
    }
}
