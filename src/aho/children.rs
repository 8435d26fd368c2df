use hashbrown::HashMap;

use super::char_trait::AhoChar;
use super::node::NodeId;

/// Number of children above which edges move from a vector into a hash map.
const MAP_THRESHOLD: usize = 16;

/// A compact representation of the outgoing edges of a trie node that doesn't
/// allocate until there are at least three children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Children<C: AhoChar> {
    /// No children.
    None,
    /// Exactly one child (letter, node).
    One((C, NodeId)),
    /// Exactly two children (letter1, node1, letter2, node2).
    Two((C, NodeId, C, NodeId)),
    /// Three up to `MAP_THRESHOLD` children stored in a vector.
    Many(Vec<(C, NodeId)>),
    /// Wide nodes, keyed by letter.
    Map(HashMap<C, NodeId>),
}

impl<C: AhoChar> Children<C> {
    /// Returns the node that letter's edge leads to, or None if no such edge exists.
    #[inline]
    pub fn get(&self, letter: C) -> Option<NodeId> {
        match self {
            Children::None => None,
            Children::One((ch, node)) => (*ch == letter).then_some(*node),
            Children::Two((c1, n1, c2, n2)) => {
                if letter == *c1 {
                    Some(*n1)
                } else if letter == *c2 {
                    Some(*n2)
                } else {
                    None
                }
            }
            Children::Many(children) => {
                // Unrolling by 2 exposes load-level parallelism and beats a plain scalar loop
                // on the small fan-outs typical of inner trie nodes.
                let chunks = children.chunks_exact(2);
                let remainder = chunks.remainder();
                for chunk in chunks {
                    if chunk[0].0 == letter {
                        return Some(chunk[0].1);
                    }
                    if chunk[1].0 == letter {
                        return Some(chunk[1].1);
                    }
                }
                for &(ch, node) in remainder {
                    if ch == letter {
                        return Some(node);
                    }
                }
                None
            }
            Children::Map(children) => children.get(&letter).copied(),
        }
    }

    /// Inserts an edge. The letter must not already be present.
    pub fn insert(&mut self, letter: C, node: NodeId) {
        debug_assert!(self.get(letter).is_none(), "insert: letter already exists");
        let c = (letter, node);
        match self {
            Children::None => *self = Children::One(c),
            Children::One((c1, n1)) => *self = Children::Two((*c1, *n1, c.0, c.1)),
            Children::Two((c1, n1, c2, n2)) => {
                *self = Children::Many(vec![(*c1, *n1), (*c2, *n2), c])
            }
            Children::Many(children) if children.len() >= MAP_THRESHOLD => {
                let mut map: HashMap<C, NodeId> = children.drain(..).collect();
                map.insert(letter, node);
                *self = Children::Map(map);
            }
            Children::Many(children) => children.push(c),
            Children::Map(children) => {
                children.insert(letter, node);
            }
        }
    }

    /// Returns the number of children.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Children::None => 0,
            Children::One(_) => 1,
            Children::Two(_) => 2,
            Children::Many(children) => children.len(),
            Children::Map(children) => children.len(),
        }
    }

    /// True if there are no children.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Children::None)
    }

    /// Returns an iterator over all `(letter, node)` edges, in no particular order.
    pub fn iter(&self) -> ChildIter<'_, C> {
        let inner = match self {
            Children::None => IterInner::Slice(Default::default()),
            Children::One(c) => IterInner::Slice(std::slice::from_ref(c).iter()),
            Children::Two((c1, n1, c2, n2)) => {
                IterInner::Pair([(*c1, *n1), (*c2, *n2)].into_iter())
            }
            Children::Many(children) => IterInner::Slice(children.iter()),
            Children::Map(children) => IterInner::Map(children.iter()),
        };
        ChildIter { inner }
    }
}

/// An iterator over the edges of a trie node.
#[derive(Clone)]
pub struct ChildIter<'a, C: AhoChar> {
    inner: IterInner<'a, C>,
}

#[derive(Clone)]
enum IterInner<'a, C: AhoChar> {
    Slice(std::slice::Iter<'a, (C, NodeId)>),
    Pair(std::array::IntoIter<(C, NodeId), 2>),
    Map(hashbrown::hash_map::Iter<'a, C, NodeId>),
}

impl<C: AhoChar> Iterator for ChildIter<'_, C> {
    type Item = (C, NodeId);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IterInner::Slice(it) => it.next().copied(),
            IterInner::Pair(it) => it.next(),
            IterInner::Map(it) => it.next().map(|(&ch, &node)| (ch, node)),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            IterInner::Slice(it) => it.size_hint(),
            IterInner::Pair(it) => it.size_hint(),
            IterInner::Map(it) => it.size_hint(),
        }
    }
}

impl<C: AhoChar> ExactSizeIterator for ChildIter<'_, C> {}

#[cfg(test)]
mod test {
    use super::*;

    fn sorted(children: &Children<char>) -> Vec<(char, NodeId)> {
        let mut edges: Vec<_> = children.iter().collect();
        edges.sort();
        edges
    }

    #[test]
    fn no_children() {
        let n = Children::<char>::None;
        assert_eq!(n.iter().next(), None);
        assert_eq!(n.len(), 0);
        assert!(n.is_empty());
        assert_eq!(n.get('a'), None);
    }

    #[test]
    fn one_child() {
        let mut n = Children::None;
        n.insert('a', 1);
        assert_eq!(n, Children::One(('a', 1)));
        assert_eq!(n.get('a'), Some(1));
        assert_eq!(n.get('b'), None);
        assert_eq!(sorted(&n), vec![('a', 1)]);
    }

    #[test]
    fn two_children() {
        let mut n = Children::None;
        n.insert('a', 1);
        n.insert('b', 2);
        assert_eq!(n.get('a'), Some(1));
        assert_eq!(n.get('b'), Some(2));
        assert_eq!(n.get('c'), None);
        assert_eq!(n.len(), 2);
        assert_eq!(n.iter().len(), 2);
    }

    #[test]
    fn three_children() {
        let mut n = Children::None;
        n.insert('a', 1);
        n.insert('b', 2);
        n.insert('c', 3);
        assert!(matches!(n, Children::Many(_)));
        assert_eq!(sorted(&n), vec![('a', 1), ('b', 2), ('c', 3)]);
        assert_eq!(n.get('c'), Some(3));
        assert_eq!(n.get('d'), None);
    }

    #[test]
    fn a_thousand_children() {
        let mut n = Children::None;
        let letters = (0..).filter_map(std::char::from_u32).take(1000);
        for (i, ch) in letters.clone().enumerate() {
            n.insert(ch, i + 1);
        }
        assert!(matches!(n, Children::Map(_)));
        assert_eq!(n.len(), 1000);
        assert_eq!(n.iter().len(), 1000);
        for (i, ch) in letters.enumerate() {
            assert_eq!(n.get(ch), Some(i + 1));
        }
        assert_eq!(n.get('\u{10FFFF}'), None);
    }

    #[test]
    fn threshold_boundary_keeps_all_edges() {
        let mut n = Children::None;
        for (i, ch) in ('a'..='z').enumerate() {
            n.insert(ch, i);
            assert_eq!(n.len(), i + 1);
        }
        for (i, ch) in ('a'..='z').enumerate() {
            assert_eq!(n.get(ch), Some(i));
        }
    }
}
