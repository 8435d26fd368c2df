use itertools::{Itertools, Position};

use super::char_trait::AhoChar;
use super::node::{NodeId, TrieNode, WordId, ROOT};

/// Arena of trie nodes, referenced by index. Node 0 is the root.
///
/// The trie only grows: nodes are appended and never removed or re-parented,
/// so a [`NodeId`] stays valid for the lifetime of the trie.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trie<C: AhoChar> {
    nodes: Vec<TrieNode<C>>,
}

impl<C: AhoChar> Default for Trie<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: AhoChar> Trie<C> {
    /// Creates a trie holding only the root.
    pub fn new() -> Self {
        Trie {
            nodes: vec![TrieNode::root()],
        }
    }

    /// Inserts `word` and marks its last node with `id`.
    ///
    /// Returns the id previously stored on that node, which happens when the
    /// same word is inserted twice. The newer id wins. An empty word leaves
    /// the trie unchanged.
    pub fn insert(&mut self, word: &[C], id: WordId) -> Option<WordId> {
        let mut current = ROOT;
        let mut replaced = None;
        for (position, &ch) in word.iter().with_position() {
            current = match self.nodes[current].get(ch) {
                Some(child) => child,
                None => self.add_child(current, ch),
            };
            if matches!(position, Position::Last | Position::Only) {
                replaced = self.nodes[current].set_word(id);
            }
        }
        replaced
    }

    fn add_child(&mut self, parent: NodeId, ch: C) -> NodeId {
        let id = self.nodes.len();
        let depth = self.nodes[parent].depth() + 1;
        self.nodes.push(TrieNode::child_of(parent, ch, depth));
        self.nodes[parent].insert(ch, id);
        id
    }

    /// Returns the node with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this trie.
    #[inline]
    pub fn node(&self, id: NodeId) -> &TrieNode<C> {
        &self.nodes[id]
    }

    /// Follows the edge labeled `ch` out of `id`.
    #[inline]
    pub fn child(&self, id: NodeId, ch: C) -> Option<NodeId> {
        self.nodes[id].get(ch)
    }

    /// Follows `path` from the root and returns the node it ends at.
    pub fn walk(&self, path: impl IntoIterator<Item = C>) -> Option<NodeId> {
        path.into_iter().try_fold(ROOT, |node, ch| self.child(node, ch))
    }

    /// Spells the path from the root to `id`.
    pub fn path(&self, id: NodeId) -> Vec<C> {
        let mut path = Vec::with_capacity(self.nodes[id].depth());
        let mut current = id;
        while let Some((parent, ch)) = self.nodes[current].parent_edge() {
            path.push(ch);
            current = parent;
        }
        path.reverse();
        path
    }

    /// Number of nodes, including the root.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if no word has been inserted, i.e. only the root exists.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }
}
