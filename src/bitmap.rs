use core::fmt::{Debug, Formatter};
use core::iter::FusedIterator;

use crate::bits::{ClearBits, SetBits};
use crate::iter::BitElementIter;
use crate::resolver::ElementResolver;

/// Computes the number of buckets needed to store `bit_count` bits.
///
/// Inline this call as a const expression into the type annotation generics
/// to avoid a panic in [`BitMap::new`].
///
/// # Examples
/// ```
/// use bit_element::bucket_count;
///
/// assert_eq!(bucket_count(9), 2);
/// assert_eq!(bucket_count(16), 2);
/// assert_eq!(bucket_count(17), 3);
/// ```
pub const fn bucket_count(bit_count: usize) -> usize {
    bit_count.div_ceil(8)
}

pub(crate) fn assert_const_params(bit_count: usize, buckets: usize) {
    assert_ne!(bit_count, 0, "BIT_COUNT must be greater than zero.");
    assert_eq!(
        bucket_count(bit_count),
        buckets,
        "BUCKET_COUNT must match bucket_count(BIT_COUNT)."
    );
}

/// Fixed-size, stack-only bitmap.
///
/// `BIT_COUNT` is the number of usable bits. `BUCKET_COUNT` is the number of
/// `u8` buckets backing them and should be given as
/// `{ bucket_count(BIT_COUNT) }`. Bits are stored least significant first.
///
/// Out-of-bounds indices panic. Unused bits in the last bucket are never set.
#[derive(PartialEq, Eq, Hash, Clone, Copy)]
pub struct BitMap<const BIT_COUNT: usize, const BUCKET_COUNT: usize>([u8; BUCKET_COUNT]);

impl<const BIT_COUNT: usize, const BUCKET_COUNT: usize> BitMap<BIT_COUNT, BUCKET_COUNT> {
    /// Creates a new bitmap with all bits unset.
    ///
    /// # Panics
    /// Panics if `BIT_COUNT == 0` or `BUCKET_COUNT != bucket_count(BIT_COUNT)`.
    ///
    /// # Examples
    /// ```
    /// use bit_element::{BitMap, bucket_count};
    ///
    /// let bitmap = BitMap::<16, { bucket_count(16) }>::new();
    /// assert_eq!(bitmap.popcount(), 0);
    /// ```
    pub fn new() -> Self {
        assert_const_params(BIT_COUNT, BUCKET_COUNT);
        Self([0u8; BUCKET_COUNT])
    }

    /// Creates a bitmap with only the given indices set.
    ///
    /// # Panics
    /// Panics if any index is `>= BIT_COUNT`, or on bad const parameters
    /// (see [`new`](Self::new)).
    ///
    /// # Examples
    /// ```
    /// use bit_element::{BitMap, bucket_count};
    ///
    /// let bitmap = BitMap::<5, { bucket_count(5) }>::from_ones_iter([0, 2, 4]);
    /// assert!(bitmap.is_set(2));
    /// assert!(!bitmap.is_set(3));
    /// ```
    pub fn from_ones_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut bitmap = Self::new();
        for idx in iter {
            bitmap.set(idx);
        }
        bitmap
    }

    /// Sets the bit at `idx`.
    ///
    /// # Panics
    /// Panics if `idx >= BIT_COUNT`.
    #[inline]
    pub fn set(&mut self, idx: usize) {
        let (bucket, shift) = Self::locate(idx);
        self.0[bucket] |= 1 << shift;
    }

    /// Unsets the bit at `idx`.
    ///
    /// # Panics
    /// Panics if `idx >= BIT_COUNT`.
    #[inline]
    pub fn unset(&mut self, idx: usize) {
        let (bucket, shift) = Self::locate(idx);
        self.0[bucket] &= !(1 << shift);
    }

    /// Returns `true` if the bit at `idx` is set.
    ///
    /// # Panics
    /// Panics if `idx >= BIT_COUNT`.
    #[inline]
    pub fn is_set(&self, idx: usize) -> bool {
        let (bucket, shift) = Self::locate(idx);
        self.0[bucket] & 1 << shift != 0
    }

    #[inline]
    fn locate(idx: usize) -> (usize, usize) {
        assert!(idx < BIT_COUNT, "Bit index {idx} out of bounds");
        (idx / 8, idx % 8)
    }

    /// Returns the number of set bits.
    #[inline]
    pub fn popcount(&self) -> usize {
        self.0.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Returns the index of the first set bit, or `None` if all are unset.
    #[inline]
    pub fn first_set_bit(&self) -> Option<usize> {
        self.next_set_bit(0)
    }

    /// Returns the smallest set index `>= from`, or `None`.
    ///
    /// `from` may be past the end, in which case the result is `None`. Runs in
    /// O(b) where b is the bucket count.
    ///
    /// # Examples
    /// ```
    /// use bit_element::{BitMap, bucket_count};
    ///
    /// let bm = BitMap::<12, { bucket_count(12) }>::from_ones_iter([3, 9]);
    /// assert_eq!(bm.next_set_bit(0), Some(3));
    /// assert_eq!(bm.next_set_bit(4), Some(9));
    /// assert_eq!(bm.next_set_bit(10), None);
    /// assert_eq!(bm.next_set_bit(100), None);
    /// ```
    #[inline]
    pub fn next_set_bit(&self, from: usize) -> Option<usize> {
        self.0
            .as_slice()
            .next_set_bit(from)
            .filter(|&idx| idx < BIT_COUNT)
    }

    /// Returns an iterator over the indices of all set bits, ascending.
    #[inline]
    pub fn iter_ones(&self) -> IterOnes<'_, BIT_COUNT, BUCKET_COUNT> {
        IterOnes {
            bitmap: self,
            from: 0,
        }
    }

    /// Traverses the set bits as elements, with the bitmap borrowed shared.
    ///
    /// # Examples
    /// ```
    /// use bit_element::{BitMap, SliceResolver, bucket_count};
    ///
    /// let fruit = ["apple", "banana", "cherry", "date"];
    /// let picked = BitMap::<4, { bucket_count(4) }>::from_ones_iter([1, 3]);
    /// let names: Vec<_> = picked
    ///     .elements(SliceResolver::new(&fruit))
    ///     .map(|r| *r.unwrap())
    ///     .collect();
    /// assert_eq!(names, ["banana", "date"]);
    /// ```
    pub fn elements<'a, R>(&'a self, resolver: R) -> BitElementIter<&'a Self, R>
    where
        R: ElementResolver<&'a Self>,
    {
        BitElementIter::new(self, resolver)
    }

    /// Traverses the set bits as elements, with the bitmap borrowed mutably
    /// so the resolver can clear bits on removal.
    pub fn elements_mut<'a, R>(&'a mut self, resolver: R) -> BitElementIter<&'a mut Self, R>
    where
        R: ElementResolver<&'a mut Self>,
    {
        BitElementIter::new(self, resolver)
    }
}

impl<const BIT_COUNT: usize, const BUCKET_COUNT: usize> Default
    for BitMap<BIT_COUNT, BUCKET_COUNT>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<const BIT_COUNT: usize, const BUCKET_COUNT: usize> SetBits
    for BitMap<BIT_COUNT, BUCKET_COUNT>
{
    #[inline]
    fn next_set_bit(&self, from: usize) -> Option<usize> {
        BitMap::next_set_bit(self, from)
    }
}

impl<const BIT_COUNT: usize, const BUCKET_COUNT: usize> ClearBits
    for BitMap<BIT_COUNT, BUCKET_COUNT>
{
    /// Same as [`BitMap::unset`], including the panic on out-of-bounds.
    #[inline]
    fn clear_bit(&mut self, position: usize) {
        self.unset(position)
    }
}

impl<const BIT_COUNT: usize, const BUCKET_COUNT: usize> Debug for BitMap<BIT_COUNT, BUCKET_COUNT> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "BitMap<{BIT_COUNT}> ")?;
        f.debug_set().entries(self.iter_ones()).finish()
    }
}

/// Iterator over the indices of set bits in a [`BitMap`].
///
/// Returned by [`BitMap::iter_ones()`].
#[derive(Clone, Copy)]
pub struct IterOnes<'bitmap, const BIT_COUNT: usize, const BUCKET_COUNT: usize> {
    bitmap: &'bitmap BitMap<BIT_COUNT, BUCKET_COUNT>,
    from: usize,
}

impl<const BIT_COUNT: usize, const BUCKET_COUNT: usize> Iterator
    for IterOnes<'_, BIT_COUNT, BUCKET_COUNT>
{
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.bitmap.next_set_bit(self.from)?;
        self.from = idx + 1;
        Some(idx)
    }
}

impl<const BIT_COUNT: usize, const BUCKET_COUNT: usize> FusedIterator
    for IterOnes<'_, BIT_COUNT, BUCKET_COUNT>
{
}
