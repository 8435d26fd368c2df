/// Trie plus suffix and dictionary links, and the leftmost-longest search.
pub mod automaton;
/// Builder for constructing matchers from word lists.
pub mod builder;
/// Trait for types that can serve as edge labels.
pub mod char_trait;
/// Compact per-node edge storage.
pub mod children;
/// Breadth-first computation of suffix and dictionary links.
pub mod links;
/// The public matcher owning its words and automaton.
pub mod matcher;
/// Trie node type and id aliases.
pub mod node;
/// Non-overlapping match iteration and counting.
pub mod scanner;
/// Arena of trie nodes.
pub mod trie;

pub use automaton::{Automaton, Match};
pub use builder::{build_matcher, build_matcher_from_file, BuildError, Builder, IntoWord};
pub use char_trait::AhoChar;
pub use matcher::StringMatcher;
pub use node::{NodeId, TrieNode, WordId, ROOT};
pub use scanner::FindIter;
pub use trie::Trie;
