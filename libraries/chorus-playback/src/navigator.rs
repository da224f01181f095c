//! Queue navigation
//!
//! Pure, stateless functions computing queue construction and
//! next/previous/continuation decisions. No I/O, no shared mutable state,
//! safe to call concurrently from any thread.
//!
//! Shuffle uses a Fisher-Yates pass over an injectable random source. The
//! plain entry points default to [`rand::thread_rng`]; the `_with_rng`
//! variants take any [`Rng`] so tests can supply a seeded generator.

use crate::types::{RepeatMode, Track};
use rand::{thread_rng, Rng};

/// Build a playback queue from an ordered track sequence
///
/// Without shuffle, returns a copy of the input in the caller's order.
/// With shuffle, returns a uniformly-random permutation of the input.
pub fn build_queue(tracks: &[Track], shuffle: bool) -> Vec<Track> {
    build_queue_with_rng(tracks, shuffle, &mut thread_rng())
}

/// [`build_queue`] with an explicit random source
pub fn build_queue_with_rng<R: Rng>(tracks: &[Track], shuffle: bool, rng: &mut R) -> Vec<Track> {
    let mut queue = tracks.to_vec();
    if shuffle {
        fisher_yates(&mut queue, rng);
    }
    queue
}

/// Rebuild the queue when shuffle is toggled while a track is playing
///
/// With shuffle, the remaining tracks are shuffled and `current` is placed
/// at index 0, so the now-playing track is never shuffled away from "now
/// playing". Without shuffle, the original order is returned unchanged
/// (restoring playlist order after shuffle is turned off).
///
/// `current` is expected to be present in `tracks`; validating that is the
/// caller's responsibility.
pub fn rebuild_queue_with_current_track(
    tracks: &[Track],
    current: &Track,
    shuffle: bool,
) -> Vec<Track> {
    rebuild_queue_with_current_track_with_rng(tracks, current, shuffle, &mut thread_rng())
}

/// [`rebuild_queue_with_current_track`] with an explicit random source
pub fn rebuild_queue_with_current_track_with_rng<R: Rng>(
    tracks: &[Track],
    current: &Track,
    shuffle: bool,
    rng: &mut R,
) -> Vec<Track> {
    if !shuffle {
        return tracks.to_vec();
    }

    let mut rest: Vec<Track> = tracks.iter().filter(|t| t.id != current.id).cloned().collect();
    fisher_yates(&mut rest, rng);

    let mut queue = Vec::with_capacity(rest.len() + 1);
    queue.push(current.clone());
    queue.extend(rest);
    queue
}

/// Compute the index of the next track to play
///
/// Decision order:
/// 1. Repeat-track replays the current index
/// 2. A following track exists in sequence
/// 3. Repeat-playlist wraps to index 0 on a non-empty queue
/// 4. Otherwise `None` - playback should stop
pub fn next_track_index(
    current_index: usize,
    queue_len: usize,
    repeat: RepeatMode,
) -> Option<usize> {
    if repeat == RepeatMode::Track {
        return Some(current_index);
    }

    if current_index + 1 < queue_len {
        return Some(current_index + 1);
    }

    if repeat == RepeatMode::Playlist && queue_len > 0 {
        return Some(0);
    }

    None
}

/// Compute the index of the previous track
///
/// Returns `current_index - 1`, or `None` at index 0. Deliberately
/// asymmetric with [`next_track_index`]: "previous" never wraps to the last
/// track under playlist repeat, matching the restart-or-stop behavior of
/// most media players.
pub fn previous_track_index(current_index: usize) -> Option<usize> {
    if current_index > 0 {
        Some(current_index - 1)
    } else {
        None
    }
}

/// Check whether playback should continue after the current track ends
///
/// Exactly equivalent to `next_track_index(..).is_some()`. Used by the
/// orchestrator to gate auto-advance on the `Ended` signal.
pub fn should_continue_playback(
    current_index: usize,
    queue_len: usize,
    repeat: RepeatMode,
) -> bool {
    next_track_index(current_index, queue_len, repeat).is_some()
}

/// In-place Fisher-Yates shuffle
///
/// Iterates from the last index down to 1, swapping each position with a
/// uniformly chosen index in `[0, i]`. Each permutation is equally likely
/// given a uniform `rng`.
fn fisher_yates<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
