use super::automaton::{Automaton, Match};
use super::builder::{build_matcher, BuildError, IntoWord, Word};
use super::char_trait::AhoChar;
use super::node::WordId;
use super::scanner::FindIter;

/// A multi-word matcher that owns its word list and automaton.
///
/// Built once from a non-empty list of non-empty words, then read-only:
/// the matcher is `Send + Sync` and every search keeps its cursor on the
/// stack, so any number of threads can search with one instance. There is
/// no way to change the word list after construction; build a new matcher
/// instead.
///
/// # Examples
///
/// ```
/// use libaho::aho::StringMatcher;
///
/// let matcher = StringMatcher::new(["a", "ab", "bab", "bc", "bca", "c", "caa"]).unwrap();
/// let m = matcher.find_str("caaa").unwrap();
/// assert_eq!((m.start(), m.word_id()), (0, 6));
/// assert_eq!(matcher.count_str("caaa"), 2);
/// ```
#[derive(Clone)]
pub struct StringMatcher<C: AhoChar> {
    words: Vec<Word<C>>,
    automaton: Automaton<C>,
}

impl<C: AhoChar> StringMatcher<C> {
    /// Builds a matcher from `words`. Word ids follow iteration order.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::EmptyWordList` if `words` is empty and
    /// `BuildError::EmptyWord` for the first empty word.
    pub fn new<W: IntoWord<C>>(words: impl IntoIterator<Item = W>) -> Result<Self, BuildError> {
        build_matcher(words)
    }

    pub(crate) fn from_parts(words: Vec<Word<C>>, automaton: Automaton<C>) -> Self {
        StringMatcher { words, automaton }
    }

    /// Finds the leftmost-longest occurrence of any word in `text`.
    #[inline]
    pub fn find(&self, text: &[C]) -> Option<Match> {
        self.automaton.find(text)
    }

    /// Counts the non-overlapping occurrences of the words in `text`.
    #[inline]
    pub fn count(&self, text: &[C]) -> usize {
        self.automaton.count(text)
    }

    /// Returns an iterator over the non-overlapping occurrences in `text`.
    #[inline]
    pub fn find_iter<'a, 't>(&'a self, text: &'t [C]) -> FindIter<'a, 't, C> {
        self.automaton.find_iter(text)
    }

    /// The words this matcher was built from, in insertion order.
    pub fn words(&self) -> impl ExactSizeIterator<Item = &[C]> + '_ {
        self.words.iter().map(|w| w.as_slice())
    }

    /// Returns the word with the given id.
    pub fn word(&self, id: WordId) -> Option<&[C]> {
        self.words.get(id).map(|w| w.as_slice())
    }

    /// Returns `true` if `word` is one of the words this matcher was built from.
    pub fn contains(&self, word: impl IntoWord<C>) -> bool {
        self.automaton.contains(word.collect_word())
    }

    /// Number of automaton states, including the root.
    pub fn node_count(&self) -> usize {
        self.automaton.node_count()
    }

    /// The underlying automaton.
    pub fn automaton(&self) -> &Automaton<C> {
        &self.automaton
    }
}

impl StringMatcher<char> {
    /// Like [`find`](StringMatcher::find), for a string. Positions count `char`s, not bytes.
    pub fn find_str(&self, text: &str) -> Option<Match> {
        let text: Vec<char> = text.chars().collect();
        self.find(&text)
    }

    /// Like [`count`](StringMatcher::count), for a string.
    pub fn count_str(&self, text: &str) -> usize {
        let text: Vec<char> = text.chars().collect();
        self.count(&text)
    }
}

impl<C: AhoChar> std::fmt::Debug for StringMatcher<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StringMatcher")
            .field("word_count", &self.words.len())
            .field("node_count", &self.node_count())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const WIKI: [&str; 7] = ["a", "ab", "bab", "bc", "bca", "c", "caa"];

    fn find(matcher: &StringMatcher<char>, text: &str) -> Option<(usize, WordId)> {
        matcher.find_str(text).map(Into::into)
    }

    #[test]
    fn simple_matcher() {
        let matcher = StringMatcher::new(WIKI).unwrap();
        assert_eq!(find(&matcher, "a"), Some((0, 0)));
        assert_eq!(find(&matcher, "ab"), Some((0, 1)));
        assert_eq!(find(&matcher, "bab"), Some((0, 2)));
        assert_eq!(find(&matcher, "bc"), Some((0, 3)));
        assert_eq!(find(&matcher, "bca"), Some((0, 4)));
        assert_eq!(find(&matcher, "c"), Some((0, 5)));
        assert_eq!(find(&matcher, "caa"), Some((0, 6)));
        assert_eq!(find(&matcher, "caaa"), Some((0, 6)));
    }

    #[test]
    fn count() {
        let matcher = StringMatcher::new(WIKI).unwrap();
        assert_eq!(matcher.count_str("a"), 1);
        assert_eq!(matcher.count_str("aa"), 2);
        assert_eq!(matcher.count_str("caa"), 1);
        assert_eq!(matcher.count_str("caaa"), 2);
    }

    #[test]
    fn repeated_calls_agree() {
        let matcher = StringMatcher::new(WIKI).unwrap();
        for text in ["caaa", "xbabc", "", "zzz", "bcabcab"] {
            assert_eq!(matcher.find_str(text), matcher.find_str(text));
            assert_eq!(matcher.count_str(text), matcher.count_str(text));
        }
    }

    #[test]
    fn positions_count_chars() {
        let matcher = StringMatcher::new(["以渔"]).unwrap();
        let m = matcher.find_str("授人以渔").unwrap();
        assert_eq!(m.range(), 2..4);
    }

    #[test]
    fn words_keep_insertion_order() {
        let matcher = StringMatcher::new(["zeta", "alpha", "zeta"]).unwrap();
        let words: Vec<String> = matcher.words().map(|w| w.iter().collect()).collect();
        assert_eq!(words, ["zeta", "alpha", "zeta"]);
        assert_eq!(matcher.word(1), Some(&['a', 'l', 'p', 'h', 'a'][..]));
        assert_eq!(matcher.word(3), None);
    }

    #[test]
    fn contains_words() {
        let matcher = StringMatcher::new(WIKI).unwrap();
        assert!(matcher.contains("caa"));
        assert!(!matcher.contains("ca"));
        assert!(!matcher.contains(""));
    }

    #[test]
    fn node_count_counts_prefixes() {
        let matcher = StringMatcher::new(["ABC", "ABD"]).unwrap();
        // root + A + B + C + D
        assert_eq!(matcher.node_count(), 5);
    }

    #[test]
    fn debug_shows_sizes() {
        let matcher = StringMatcher::new(["ABC", "ABD"]).unwrap();
        assert_eq!(
            format!("{matcher:?}"),
            "StringMatcher { word_count: 2, node_count: 5 }"
        );
    }

    #[test]
    fn matcher_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StringMatcher<char>>();
        assert_send_sync::<StringMatcher<u16>>();
    }

    #[test]
    fn shared_between_threads() {
        let matcher = StringMatcher::new(WIKI).unwrap();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| matcher.count_str("caaa bab bca")))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), 4);
            }
        });
    }

    #[test]
    fn utf16_code_units() {
        let words: Vec<Vec<u16>> = ["café", "fé"]
            .iter()
            .map(|w| w.encode_utf16().collect())
            .collect();
        let matcher = StringMatcher::new(&words).unwrap();
        let text: Vec<u16> = "un café".encode_utf16().collect();
        assert_eq!(matcher.find(&text).map(Into::into), Some((3, 0)));
    }
}
