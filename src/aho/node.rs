use super::char_trait::AhoChar;
use super::children::{ChildIter, Children};

/// Index of a node in the trie arena.
pub type NodeId = usize;

/// Index of a word in the list the automaton was built from (0-based, insertion order).
pub type WordId = usize;

/// The root node, representing the empty prefix. Always the first node in the arena.
pub const ROOT: NodeId = 0;

/// A node in the trie: one per distinct prefix of the inserted words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrieNode<C: AhoChar> {
    children: Children<C>,
    /// Parent node and the letter on the edge from it. `None` only for the root.
    parent: Option<(NodeId, C)>,
    depth: usize,
    word: Option<WordId>,
}

impl<C: AhoChar> TrieNode<C> {
    /// Creates the root node.
    pub(crate) fn root() -> Self {
        TrieNode {
            children: Children::None,
            parent: None,
            depth: 0,
            word: None,
        }
    }

    /// Creates a node reached from `parent` over `letter`.
    pub(crate) fn child_of(parent: NodeId, letter: C, depth: usize) -> Self {
        TrieNode {
            children: Children::None,
            parent: Some((parent, letter)),
            depth,
            word: None,
        }
    }

    /// Returns the node that letter's edge leads to, or None if no such edge exists.
    #[inline]
    pub fn get(&self, letter: C) -> Option<NodeId> {
        self.children.get(letter)
    }

    /// Returns an iterator over all `(letter, node)` edges of this node.
    #[inline]
    pub fn children(&self) -> ChildIter<'_, C> {
        self.children.iter()
    }

    /// Returns the number of children.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// The node one letter shorter, or `None` for the root.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent.map(|(parent, _)| parent)
    }

    /// The letter consumed to reach this node from its parent, or `None` for the root.
    #[inline]
    pub fn accessing_char(&self) -> Option<C> {
        self.parent.map(|(_, letter)| letter)
    }

    /// Parent and accessing letter together.
    #[inline]
    pub(crate) fn parent_edge(&self) -> Option<(NodeId, C)> {
        self.parent
    }

    /// Length of the path from the root to this node.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// True if the path to this node spells a complete word.
    #[inline]
    pub fn is_match(&self) -> bool {
        self.word.is_some()
    }

    /// Id of the word ending at this node, if any.
    #[inline]
    pub fn word_id(&self) -> Option<WordId> {
        self.word
    }

    /// Marks this node as the end of word `id`, returning the id it replaced.
    pub(crate) fn set_word(&mut self, id: WordId) -> Option<WordId> {
        self.word.replace(id)
    }

    pub(crate) fn insert(&mut self, letter: C, node: NodeId) {
        self.children.insert(letter, node);
    }
}
