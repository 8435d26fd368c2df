use std::ops::Range;

use super::char_trait::AhoChar;
use super::links::{build_links, Links};
use super::node::{NodeId, TrieNode, WordId, ROOT};
use super::trie::Trie;

/// A word occurrence in a text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Match {
    start: usize,
    len: usize,
    word_id: WordId,
}

impl Match {
    /// Position of the first symbol of the occurrence.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Position just past the last symbol of the occurrence.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Length of the matched word.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: words are never empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Id of the matched word.
    #[inline]
    pub fn word_id(&self) -> WordId {
        self.word_id
    }

    /// The matched positions.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Same match, shifted right by `offset` positions.
    #[inline]
    pub(crate) fn offset(self, offset: usize) -> Match {
        Match {
            start: self.start + offset,
            ..self
        }
    }
}

impl From<Match> for (usize, WordId) {
    fn from(m: Match) -> Self {
        (m.start, m.word_id)
    }
}

/// A trie together with its suffix and dictionary links.
///
/// Only constructible from a fully built trie, so matching never sees a
/// partially linked node. Immutable afterwards: any number of threads may
/// search with the same automaton at once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Automaton<C: AhoChar> {
    trie: Trie<C>,
    links: Vec<Links>,
}

impl<C: AhoChar> From<Trie<C>> for Automaton<C> {
    fn from(trie: Trie<C>) -> Self {
        Automaton::new(trie)
    }
}

impl<C: AhoChar> Automaton<C> {
    /// Links `trie` and wraps it into an automaton.
    pub fn new(trie: Trie<C>) -> Self {
        let links = build_links(&trie);
        Automaton { trie, links }
    }

    /// The underlying trie.
    #[inline]
    pub fn trie(&self) -> &Trie<C> {
        &self.trie
    }

    /// Returns the node with the given id.
    #[inline]
    pub fn node(&self, id: NodeId) -> &TrieNode<C> {
        self.trie.node(id)
    }

    /// Links of the node with the given id.
    #[inline]
    pub fn links(&self, id: NodeId) -> Links {
        self.links[id]
    }

    /// Number of states, including the root.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.trie.len()
    }

    /// Finds the leftmost-longest occurrence of any word in `text`.
    ///
    /// Among all occurrences the one starting earliest wins; of those
    /// starting at the same position, the longest wins. The text is scanned
    /// once, left to right, and the scan stops as soon as no later
    /// occurrence could start at or before the best one found so far.
    pub fn find(&self, text: &[C]) -> Option<Match> {
        let mut state = ROOT;
        let mut best: Option<Match> = None;

        for (i, &ch) in text.iter().enumerate() {
            loop {
                if let Some(next) = self.trie.child(state, ch) {
                    state = next;
                    break;
                }
                if state == ROOT {
                    // Back at the root with no edge: every occurrence from
                    // here on starts after the best one.
                    if best.is_some() {
                        return best;
                    }
                    break;
                }
                state = self.links[state].suffix;
            }

            let dictionary = self.links[state].dictionary;
            if dictionary == ROOT {
                continue;
            }
            let node = self.trie.node(dictionary);
            let Some(word_id) = node.word_id() else {
                continue;
            };
            // The dictionary link is the longest word ending at `i`, so it
            // also has the earliest start of the words ending here. Ties on
            // start are resolved towards the later, hence longer, word.
            let len = node.depth();
            let start = i + 1 - len;
            if best.is_none_or(|b| start <= b.start) {
                best = Some(Match {
                    start,
                    len,
                    word_id,
                });
            }
        }

        best
    }

    /// Returns true if `word` is exactly one of the words the automaton was built from.
    pub fn contains(&self, word: impl IntoIterator<Item = C>) -> bool {
        self.trie
            .walk(word)
            .is_some_and(|node| self.trie.node(node).is_match())
    }
}
