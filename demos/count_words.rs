//! Example: counting word occurrences in a text.
//!
//! This shows how to build a small report on top of the raw matcher
//! interface. The `WordCounter` struct wraps a `StringMatcher` and tallies
//! how often each word occurs, without overlaps.
//!
//! Run with: cargo run --example count_words [WORDLIST] [TEXT]
//!
//! Without arguments a built-in word list and text are used.

use std::error::Error;

use libaho::aho::builder::build_matcher_from_file;
use libaho::aho::StringMatcher;

/// A convenient wrapper around a matcher for per-word statistics.
struct WordCounter {
    matcher: StringMatcher<char>,
}

impl WordCounter {
    fn new(matcher: StringMatcher<char>) -> Self {
        WordCounter { matcher }
    }

    /// Returns how often each word occurs in `text`, indexed by word id.
    fn tally(&self, text: &str) -> Vec<usize> {
        let text: Vec<char> = text.chars().collect();
        let mut counts = vec![0; self.matcher.words().len()];
        for m in self.matcher.find_iter(&text) {
            counts[m.word_id()] += 1;
        }
        counts
    }

    /// Returns the leftmost-longest word in `text` and where it starts.
    fn first(&self, text: &str) -> Option<(String, usize)> {
        let m = self.matcher.find_str(text)?;
        let word = self.matcher.word(m.word_id())?.iter().collect();
        Some((word, m.start()))
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (matcher, text) = match args.as_slice() {
        [words, text] => (
            build_matcher_from_file(words)?,
            std::fs::read_to_string(text)?,
        ),
        _ => (
            StringMatcher::new(["he", "she", "his", "hers", "shell", "sea"])?,
            "she sells sea shells by the sea shore, his shells are hers".to_string(),
        ),
    };
    let counter = WordCounter::new(matcher);

    if let Some((word, start)) = counter.first(&text) {
        println!("First match: {word:?} at {start}");
    }

    println!("\nOccurrences:");
    let counts = counter.tally(&text);
    for (word, count) in counter.matcher.words().zip(counts) {
        let word: String = word.iter().collect();
        println!("  {word}: {count}");
    }

    println!("\nTotal: {}", counter.matcher.count_str(&text));
    Ok(())
}
