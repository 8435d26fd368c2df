use std::iter::FusedIterator;

use super::automaton::{Automaton, Match};
use super::char_trait::AhoChar;

/// Iterator over the non-overlapping leftmost-longest matches in a text.
///
/// Each match is found by searching the part of the text after the end of
/// the previous match, so reported ranges never share a position. Positions
/// are relative to the start of the whole text.
#[derive(Clone, Debug)]
pub struct FindIter<'a, 't, C: AhoChar> {
    automaton: &'a Automaton<C>,
    text: &'t [C],
    pos: usize,
}

impl<'a, 't, C: AhoChar> FindIter<'a, 't, C> {
    pub(crate) fn new(automaton: &'a Automaton<C>, text: &'t [C]) -> Self {
        FindIter {
            automaton,
            text,
            pos: 0,
        }
    }
}

impl<C: AhoChar> Iterator for FindIter<'_, '_, C> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        let rest = self.text.get(self.pos..)?;
        match self.automaton.find(rest) {
            Some(m) => {
                let m = m.offset(self.pos);
                self.pos = m.end();
                Some(m)
            }
            None => {
                self.pos = self.text.len() + 1;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.text.len().saturating_sub(self.pos)))
    }
}

impl<C: AhoChar> FusedIterator for FindIter<'_, '_, C> {}

impl<C: AhoChar> Automaton<C> {
    /// Returns an iterator over the non-overlapping matches in `text`, left to right.
    pub fn find_iter<'a, 't>(&'a self, text: &'t [C]) -> FindIter<'a, 't, C> {
        FindIter::new(self, text)
    }

    /// Counts the non-overlapping matches in `text`.
    pub fn count(&self, text: &[C]) -> usize {
        self.find_iter(text).count()
    }
}
