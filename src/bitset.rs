use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};

use crate::bits::{ClearBits, SetBits};
use crate::iter::BitElementIter;
use crate::resolver::ElementResolver;

const WORD_BITS: usize = u64::BITS as usize;

/// Growable bitmap backed by `Vec<u64>`.
///
/// Setting a bit past the end grows the storage. Every position past the end
/// reads as unset, and unsetting one is a no-op, so unlike [`BitMap`] no
/// index ever panics.
///
/// Requires the `alloc` feature.
///
/// # Examples
/// ```
/// use bit_element::BitSet;
///
/// let mut bits = BitSet::new();
/// bits.set(3);
/// bits.set(130);
/// assert!(bits.is_set(130));
/// assert!(!bits.is_set(10_000));
/// assert_eq!(bits.popcount(), 2);
/// ```
///
/// [`BitMap`]: crate::BitMap
#[derive(Default, Clone)]
pub struct BitSet {
    words: Vec<u64>,
}

impl BitSet {
    /// Creates an empty bitset without allocating.
    pub const fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Creates an empty bitset with room for `bits` bits before it grows.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            words: Vec::with_capacity(bits.div_ceil(WORD_BITS)),
        }
    }

    /// Returns the index of the highest set bit plus one, or zero if no bit
    /// is set.
    pub fn len(&self) -> usize {
        match self.words.iter().rposition(|word| *word != 0) {
            Some(idx) => (idx + 1) * WORD_BITS - self.words[idx].leading_zeros() as usize,
            None => 0,
        }
    }

    /// Returns `true` if no bit is set.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|word| *word == 0)
    }

    /// Sets the bit at `idx`, growing the storage if needed.
    pub fn set(&mut self, idx: usize) {
        let (word, shift) = (idx / WORD_BITS, idx % WORD_BITS);
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        self.words[word] |= 1 << shift;
    }

    /// Unsets the bit at `idx`. Past the end this does nothing.
    #[inline]
    pub fn unset(&mut self, idx: usize) {
        self.words.as_mut_slice().clear_bit(idx)
    }

    /// Returns `true` if the bit at `idx` is set.
    #[inline]
    pub fn is_set(&self, idx: usize) -> bool {
        self.words
            .get(idx / WORD_BITS)
            .is_some_and(|word| word & 1 << (idx % WORD_BITS) != 0)
    }

    /// Unsets every bit, keeping the storage.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Returns the number of set bits.
    pub fn popcount(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns the smallest set index `>= from`, or `None`.
    #[inline]
    pub fn next_set_bit(&self, from: usize) -> Option<usize> {
        self.words.as_slice().next_set_bit(from)
    }

    /// Traverses the set bits as elements, with the bitset borrowed shared.
    pub fn elements<'a, R>(&'a self, resolver: R) -> BitElementIter<&'a Self, R>
    where
        R: ElementResolver<&'a Self>,
    {
        BitElementIter::new(self, resolver)
    }

    /// Traverses the set bits as elements, with the bitset borrowed mutably
    /// so the resolver can clear bits on removal.
    ///
    /// # Examples
    /// ```
    /// use bit_element::{BitSet, ClearOnRemove, Positions};
    ///
    /// let mut bits: BitSet = [2, 5, 9].into_iter().collect();
    /// let mut iter = bits.elements_mut(ClearOnRemove::new(Positions));
    /// while let Some(Ok(pos)) = iter.next() {
    ///     if pos % 2 == 1 {
    ///         iter.remove().unwrap();
    ///     }
    /// }
    /// assert!(bits.is_set(2));
    /// assert_eq!(bits.popcount(), 1);
    /// ```
    pub fn elements_mut<'a, R>(&'a mut self, resolver: R) -> BitElementIter<&'a mut Self, R>
    where
        R: ElementResolver<&'a mut Self>,
    {
        BitElementIter::new(self, resolver)
    }
}

impl SetBits for BitSet {
    #[inline]
    fn next_set_bit(&self, from: usize) -> Option<usize> {
        BitSet::next_set_bit(self, from)
    }
}

impl ClearBits for BitSet {
    #[inline]
    fn clear_bit(&mut self, position: usize) {
        self.unset(position)
    }
}

impl FromIterator<usize> for BitSet {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        let mut bits = Self::new();
        bits.extend(iter);
        bits
    }
}

impl Extend<usize> for BitSet {
    fn extend<T: IntoIterator<Item = usize>>(&mut self, iter: T) {
        for idx in iter {
            self.set(idx);
        }
    }
}

impl Debug for BitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let mut ones = f.debug_set();
        let mut from = 0;
        while let Some(idx) = self.next_set_bit(from) {
            ones.entry(&idx);
            from = idx + 1;
        }
        ones.finish()
    }
}
