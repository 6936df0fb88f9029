//! Rank-range selection over word counts.
//!
//! Reproduces "most common N then slice" semantics explicitly: a stable
//! sort by count descending (first-seen order breaks ties), truncation
//! to `end_rank`, then index-bounded slicing.

use crate::count::WordCounts;
use std::fmt;

/// A contiguous slice of the frequency ranking, 1-indexed inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedSlice {
    /// (word, count) pairs, count descending, covering ranks
    /// `start_rank` up to `end_rank` or the last unique word.
    pub entries: Vec<(String, u64)>,
    /// Unique words available in the counts.
    pub unique_words: usize,
    pub start_rank: usize,
    pub end_rank: usize,
}

impl RankedSlice {
    /// True when fewer than `end_rank` unique words existed, so the
    /// slice stops short of the requested end. Still a success.
    pub fn is_truncated(&self) -> bool {
        self.unique_words < self.end_rank
    }
}

/// Reasons a rank-range query yields no slice at all.
///
/// These are usage outcomes, not crashes; callers print them and move
/// on.
#[derive(Debug)]
pub enum RankQueryError {
    /// `start_rank < 1` or `end_rank < start_rank`.
    InvalidRange { start_rank: usize, end_rank: usize },
    /// No words were counted.
    EmptyCounts,
    /// Fewer unique words exist than `start_rank` requires.
    NotEnoughWords {
        unique_words: usize,
        start_rank: usize,
        end_rank: usize,
    },
}

impl fmt::Display for RankQueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankQueryError::InvalidRange {
                start_rank,
                end_rank,
            } => write!(f, "invalid rank range {} to {}", start_rank, end_rank),
            RankQueryError::EmptyCounts => write!(f, "no word counts available"),
            RankQueryError::NotEnoughWords {
                unique_words,
                start_rank,
                end_rank,
            } => write!(
                f,
                "Only {} unique words found; cannot display words from rank {} to {}.",
                unique_words, start_rank, end_rank
            ),
        }
    }
}

impl std::error::Error for RankQueryError {}

/// Selects the (word, count) pairs ranked `start_rank..=end_rank` by
/// descending count, ties broken by first-seen order.
///
/// Returns `Err` for invalid bounds, empty counts, or fewer unique
/// words than `start_rank`. When the unique-word count falls between
/// `start_rank` and `end_rank`, the slice is truncated to what exists
/// and returned as a success (`RankedSlice::is_truncated`).
pub fn select_rank_range(
    counts: &WordCounts,
    start_rank: usize,
    end_rank: usize,
) -> Result<RankedSlice, RankQueryError> {
    if start_rank < 1 || end_rank < start_rank {
        return Err(RankQueryError::InvalidRange {
            start_rank,
            end_rank,
        });
    }
    if counts.is_empty() {
        return Err(RankQueryError::EmptyCounts);
    }

    // Stable sort keeps first-seen order among equal counts.
    let mut ranked: Vec<(String, u64)> = counts.iter().cloned().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(end_rank);

    if ranked.len() < start_rank {
        return Err(RankQueryError::NotEnoughWords {
            unique_words: ranked.len(),
            start_rank,
            end_rank,
        });
    }

    let entries = ranked.split_off(start_rank - 1);
    Ok(RankedSlice {
        entries,
        unique_words: counts.len(),
        start_rank,
        end_rank,
    })
}
