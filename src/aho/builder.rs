use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use smallvec::SmallVec;
use thiserror::Error;
use tracing::debug;

use super::automaton::Automaton;
use super::char_trait::AhoChar;
use super::matcher::StringMatcher;
use super::node::WordId;
use super::trie::Trie;

/// Symbol buffer for one word.
pub type Word<C> = SmallVec<[C; 32]>;

/// Trait for types that can be used as a word when building a matcher.
///
/// Implemented for common string and sequence types so that [`Builder::add_word`]
/// and [`build_matcher`] accept them directly without manual conversion.
pub trait IntoWord<C: AhoChar> {
    /// Collects this word into a symbol buffer.
    fn collect_word(self) -> Word<C>;
}

// String types → char

impl IntoWord<char> for &str {
    fn collect_word(self) -> Word<char> {
        self.chars().collect()
    }
}

impl IntoWord<char> for &&str {
    fn collect_word(self) -> Word<char> {
        self.chars().collect()
    }
}

impl IntoWord<char> for String {
    fn collect_word(self) -> Word<char> {
        self.chars().collect()
    }
}

impl IntoWord<char> for &String {
    fn collect_word(self) -> Word<char> {
        self.chars().collect()
    }
}

// Generic sequence types → C

impl<C: AhoChar> IntoWord<C> for &[C] {
    fn collect_word(self) -> Word<C> {
        self.iter().copied().collect()
    }
}

impl<C: AhoChar> IntoWord<C> for Vec<C> {
    fn collect_word(self) -> Word<C> {
        self.into_iter().collect()
    }
}

impl<C: AhoChar> IntoWord<C> for &Vec<C> {
    fn collect_word(self) -> Word<C> {
        self.iter().copied().collect()
    }
}

impl<C: AhoChar, const N: usize> IntoWord<C> for [C; N] {
    fn collect_word(self) -> Word<C> {
        self.into_iter().collect()
    }
}

impl<C: AhoChar, const N: usize> IntoWord<C> for &[C; N] {
    fn collect_word(self) -> Word<C> {
        self.iter().copied().collect()
    }
}

/// Errors that can occur when building a matcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// No words were supplied.
    #[error("word list must not be empty")]
    EmptyWordList,
    /// The word with the given id is empty.
    #[error("word {0} must not be empty")]
    EmptyWord(WordId),
}

/// A builder for constructing a [`StringMatcher`] one word at a time.
///
/// Words get ids in the order they are added, starting at 0. Adding a word
/// that is already present is allowed: matches of that word then report the
/// id of the last copy.
#[derive(Debug)]
pub struct Builder<C: AhoChar> {
    trie: Trie<C>,
    words: Vec<Word<C>>,
}

impl<C: AhoChar> Default for Builder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: AhoChar> Builder<C> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Builder {
            trie: Trie::new(),
            words: Vec::new(),
        }
    }

    /// Adds a word and returns the id it was given.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::EmptyWord` if the word is empty. The builder is
    /// left unchanged and the id is not consumed.
    pub fn add_word(&mut self, word: impl IntoWord<C>) -> Result<WordId, BuildError> {
        let word = word.collect_word();
        let id = self.words.len();
        if word.is_empty() {
            return Err(BuildError::EmptyWord(id));
        }
        if let Some(previous) = self.trie.insert(&word, id) {
            debug!(word = ?word.as_slice(), previous, id, "duplicate word replaces earlier id");
        }
        self.words.push(word);
        Ok(id)
    }

    /// Number of words added so far.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if no word has been added.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Links the trie and returns the finished matcher.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::EmptyWordList` if no word was added.
    pub fn build(self) -> Result<StringMatcher<C>, BuildError> {
        if self.words.is_empty() {
            return Err(BuildError::EmptyWordList);
        }
        let automaton = Automaton::new(self.trie);
        debug!(
            words = self.words.len(),
            nodes = automaton.node_count(),
            "built Aho-Corasick automaton"
        );
        Ok(StringMatcher::from_parts(self.words, automaton))
    }
}

/// Builds a matcher from an iterator of words.
///
/// Each word must implement [`IntoWord`], allowing this function to accept
/// `&str`, `String`, slices, vectors, arrays, or any other supported word type.
/// Word ids follow iteration order.
///
/// # Examples
///
/// ```
/// use libaho::aho::builder::build_matcher;
///
/// let matcher = build_matcher(["he", "she", "his", "hers"]).unwrap();
/// let m = matcher.find_str("ushers").unwrap();
/// assert_eq!((m.start(), m.word_id()), (1, 1));
/// assert_eq!(matcher.count_str("she sells his shells"), 3);
/// ```
///
/// Building from byte sequences:
///
/// ```
/// use libaho::aho::builder::build_matcher;
///
/// let matcher = build_matcher([b"GATT", b"TACA"]).unwrap();
/// assert_eq!(matcher.count(b"GATTACA"), 1);
/// ```
///
/// # Errors
///
/// Returns `BuildError::EmptyWordList` if `words` is empty and
/// `BuildError::EmptyWord` for the first empty word.
pub fn build_matcher<C, W>(
    words: impl IntoIterator<Item = W>,
) -> Result<StringMatcher<C>, BuildError>
where
    C: AhoChar,
    W: IntoWord<C>,
{
    let mut builder = Builder::new();
    for word in words {
        builder.add_word(word)?;
    }
    builder.build()
}

/// Builds a matcher from a word list file.
///
/// Reads words from a text file (one word per line). Trailing whitespace is
/// trimmed, empty lines are skipped and lines starting with '#' are treated
/// as comments. Word ids count only the lines that were kept.
///
/// # Examples
///
/// ```no_run
/// use libaho::aho::builder::build_matcher_from_file;
///
/// let matcher = build_matcher_from_file("words.txt").unwrap();
/// ```
pub fn build_matcher_from_file(
    path: impl AsRef<Path>,
) -> Result<StringMatcher<char>, Box<dyn Error>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut builder = Builder::new();

    // Reuse one line buffer instead of allocating a string per line.
    let mut buf = String::with_capacity(80);
    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        let word = buf.trim_end();
        if !word.is_empty() && !is_comment(word) {
            builder.add_word(word)?;
        }
    }
    debug!(path = %path.display(), words = builder.len(), "loaded word list");
    Ok(builder.build()?)
}

/// Returns true if this line is a comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}
