use std::fmt::Debug;
use std::hash::Hash;

/// Trait for types that can serve as edge labels in the automaton.
///
/// This trait is automatically implemented for any type satisfying all the
/// required bounds (`char`, `u8`, `u16`, `u32`, etc.).
///
/// - `Copy`: edges and texts store labels by value
/// - `Eq`: comparing a text symbol against edge labels
/// - `Hash`: keyed lookup on nodes with many children
/// - `Debug`: debug printing of nodes
pub trait AhoChar: Copy + Eq + Hash + Debug {}

impl<T: Copy + Eq + Hash + Debug> AhoChar for T {}
