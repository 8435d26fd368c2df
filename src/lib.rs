//! # libaho
//!
//! Multi-pattern string search with an [Aho-Corasick](https://en.wikipedia.org/wiki/Aho%E2%80%93Corasick_algorithm)
//! automaton.
//!
//! Given a fixed set of words, the automaton scans a text once and reports the
//! *leftmost-longest* occurrence of any of them: the occurrence that starts
//! earliest, and of those starting at the same position, the longest. This is
//! the match a regular expression alternation `word0|word1|...` would report
//! if it preferred longer alternatives.
//!
//! ## Features
//!
//! - **Generic over symbol type**: works with `char`, `u8`, `u16` (UTF-16 code
//!   units), or any type implementing [`AhoChar`](aho::AhoChar)
//! - **Compact**: arena-allocated trie nodes that don't allocate edge storage
//!   until they have three children
//! - **Single pass**: suffix and dictionary links let a search resume after a
//!   failed transition without rescanning text
//! - **Thread-safe**: a built [`StringMatcher`](aho::StringMatcher) is immutable
//!   and `Send + Sync`
//!
//! ## Quick Start
//!
//! ```
//! use libaho::aho::StringMatcher;
//!
//! let matcher = StringMatcher::new(["a", "ab", "bab", "bc", "bca", "c", "caa"]).unwrap();
//!
//! // "caa" starts at 0 and is the longest word starting there.
//! let m = matcher.find_str("caaa").unwrap();
//! assert_eq!((m.start(), m.word_id()), (0, 6));
//!
//! // Non-overlapping occurrences: "caa", then "a".
//! assert_eq!(matcher.count_str("caaa"), 2);
//! ```
//!
//! Empty word lists and empty words are rejected:
//!
//! ```
//! use libaho::aho::{BuildError, StringMatcher};
//!
//! let no_words: Vec<&str> = Vec::new();
//! assert_eq!(StringMatcher::new(no_words).unwrap_err(), BuildError::EmptyWordList);
//! assert_eq!(StringMatcher::new(["ok", ""]).unwrap_err(), BuildError::EmptyWord(1));
//! ```
//!
//! ## Generic Usage
//!
//! The automaton is generic over the edge label type:
//!
//! ```
//! use libaho::aho::build_matcher;
//!
//! let words: Vec<Vec<u8>> = vec![vec![1, 2, 3], vec![2, 3, 4], vec![2, 3]];
//! let matcher = build_matcher(words).unwrap();
//!
//! let m = matcher.find(&[0, 2, 3, 4]).unwrap();
//! assert_eq!((m.start(), m.word_id(), m.len()), (1, 1, 3));
//! ```

/// Aho-Corasick automaton: trie, links, matcher and builder.
pub mod aho;

pub use aho::{build_matcher, BuildError, Match, StringMatcher};
