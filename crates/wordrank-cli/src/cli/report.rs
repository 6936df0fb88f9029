//! The fetch -> tokenize -> count -> rank pipeline and its output.

use wordrank_core::count::WordCounts;
use wordrank_core::rank::{self, RankQueryError};
use wordrank_core::{fetch, tokenize};

/// Runs the full pipeline, printing either the ranked words or the
/// failure message of the first stage that produced nothing. Every
/// outcome returns normally; pipeline failures are messages, not
/// process errors.
pub fn run_report(url: &str, start_rank: usize, end_rank: usize) {
    tracing::info!("fetching {}", url);
    let Some(text) = fetch::fetch_text(url) else {
        println!("Failed to retrieve content.");
        return;
    };

    let words = tokenize::tokenize(&text);
    if words.is_empty() {
        println!("No words found after processing the text.");
        return;
    }
    tracing::debug!("{} words after normalization", words.len());

    let counts = WordCounts::from_words(words);
    if counts.is_empty() {
        // Unreachable with a non-empty word list; kept as a guard.
        println!("No word frequencies found.");
        return;
    }

    match rank::select_rank_range(&counts, start_rank, end_rank) {
        Ok(slice) => {
            if slice.is_truncated() {
                println!("Only {} words found", slice.unique_words);
            }
            println!(
                "Words ranked from {} to {} by frequency:",
                start_rank, end_rank
            );
            for (word, count) in &slice.entries {
                println!("{}: {}", word, count);
            }
        }
        Err(err) => {
            if matches!(err, RankQueryError::NotEnoughWords { .. }) {
                println!("{}", err);
            } else {
                tracing::warn!("rank query rejected: {}", err);
            }
            println!("No word frequencies found in the specified rank range.");
        }
    }
}
