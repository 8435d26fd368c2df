use std::collections::VecDeque;

use super::char_trait::AhoChar;
use super::node::{NodeId, ROOT};
use super::trie::Trie;

/// Suffix and dictionary links of one trie node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Links {
    /// Node spelling the longest proper suffix of this node's path that is also a trie path.
    pub suffix: NodeId,
    /// Nearest match node along the suffix chain, including the node itself. Root if none.
    pub dictionary: NodeId,
}

impl Links {
    const ROOT: Links = Links {
        suffix: ROOT,
        dictionary: ROOT,
    };
}

/// Computes the links of every node in `trie`.
///
/// Nodes are visited breadth-first from the root, so the parent of a node and
/// every node on its suffix chain are linked before the node itself. The trie
/// is only read; the result is indexed by [`NodeId`].
pub fn build_links<C: AhoChar>(trie: &Trie<C>) -> Vec<Links> {
    let mut links = vec![Links::ROOT; trie.len()];
    let mut queue = VecDeque::with_capacity(trie.len());
    queue.push_back(ROOT);
    while let Some(node) = queue.pop_front() {
        links[node] = node_links(trie, &links, node);
        queue.extend(trie.node(node).children().map(|(_, child)| child));
    }
    links
}

fn node_links<C: AhoChar>(trie: &Trie<C>, links: &[Links], node: NodeId) -> Links {
    let Some((parent, ch)) = trie.node(node).parent_edge() else {
        return Links::ROOT;
    };

    let suffix = if parent == ROOT {
        ROOT
    } else {
        // Walk the parent's suffix chain until some node can be extended by `ch`.
        let mut candidate = links[parent].suffix;
        loop {
            if let Some(next) = trie.child(candidate, ch) {
                break next;
            }
            if candidate == ROOT {
                break ROOT;
            }
            candidate = links[candidate].suffix;
        }
    };

    let dictionary = if trie.node(node).is_match() {
        node
    } else {
        links[suffix].dictionary
    };

    Links { suffix, dictionary }
}

#[cfg(test)]
mod test {
    use super::*;

    // Words from the classic Wikipedia illustration of the algorithm.
    const WORDS: [&str; 7] = ["a", "ab", "bab", "bc", "bca", "c", "caa"];

    fn wiki_trie() -> Trie<char> {
        let mut trie = Trie::new();
        for (id, word) in WORDS.iter().enumerate() {
            trie.insert(&word.chars().collect::<Vec<_>>(), id);
        }
        trie
    }

    fn spelled(trie: &Trie<char>, node: NodeId) -> String {
        trie.path(node).into_iter().collect()
    }

    /// Returns (suffix link path, dictionary link path) for the node spelling `path`.
    fn links_of(trie: &Trie<char>, links: &[Links], path: &str) -> (String, String) {
        let node = trie.walk(path.chars()).unwrap();
        let l = links[node];
        (spelled(trie, l.suffix), spelled(trie, l.dictionary))
    }

    #[test]
    fn root_links_to_itself() {
        let trie = wiki_trie();
        let links = build_links(&trie);
        assert_eq!(links[ROOT], Links::ROOT);
    }

    #[test]
    fn one_for_every_node() {
        let trie = wiki_trie();
        assert_eq!(build_links(&trie).len(), trie.len());
    }

    #[test]
    fn depth_one_nodes_link_to_root() {
        let trie = wiki_trie();
        let links = build_links(&trie);
        assert_eq!(links_of(&trie, &links, "a"), ("".to_string(), "a".to_string()));
        assert_eq!(links_of(&trie, &links, "b"), ("".to_string(), "".to_string()));
        assert_eq!(links_of(&trie, &links, "c"), ("".to_string(), "c".to_string()));
    }

    #[test]
    fn wikipedia_suffix_links() {
        let trie = wiki_trie();
        let links = build_links(&trie);
        let suffix = |p: &str| links_of(&trie, &links, p).0;
        assert_eq!(suffix("ab"), "b");
        assert_eq!(suffix("ba"), "a");
        assert_eq!(suffix("bab"), "ab");
        assert_eq!(suffix("bc"), "c");
        assert_eq!(suffix("bca"), "ca");
        assert_eq!(suffix("ca"), "a");
        assert_eq!(suffix("caa"), "a");
    }

    #[test]
    fn wikipedia_dictionary_links() {
        let trie = wiki_trie();
        let links = build_links(&trie);
        let dictionary = |p: &str| links_of(&trie, &links, p).1;
        // Match nodes point at themselves.
        for word in WORDS {
            assert_eq!(dictionary(word), word);
        }
        // Inner nodes inherit from their suffix chain.
        assert_eq!(dictionary("ba"), "a");
        assert_eq!(dictionary("ca"), "a");
    }

    #[test]
    fn suffix_chain_skips_dead_ends() {
        // "abc" extends its parent's suffix "b"; "abcx" finds no extension anywhere on the chain.
        let mut trie = Trie::new();
        for (id, word) in ["abcx", "bcd", "cd"].iter().enumerate() {
            trie.insert(&word.chars().collect::<Vec<_>>(), id);
        }
        let links = build_links(&trie);
        assert_eq!(links_of(&trie, &links, "abc"), ("bc".to_string(), "".to_string()));
        assert_eq!(links_of(&trie, &links, "bcd"), ("cd".to_string(), "bcd".to_string()));
        assert_eq!(links_of(&trie, &links, "abcx"), ("".to_string(), "abcx".to_string()));
    }

    #[test]
    fn dictionary_link_skips_non_matching_suffixes() {
        // "ab" is not a word, but its suffix "b" is.
        let mut trie = Trie::new();
        for (id, word) in ["xab", "abz", "b"].iter().enumerate() {
            trie.insert(&word.chars().collect::<Vec<_>>(), id);
        }
        let links = build_links(&trie);
        assert_eq!(links_of(&trie, &links, "xa"), ("a".to_string(), "".to_string()));
        assert_eq!(links_of(&trie, &links, "ab"), ("b".to_string(), "b".to_string()));
    }
}
