/// A bitmap that can report its set positions.
///
/// This is the only query [`BitElementIter`] makes against a bitmap. It is
/// implemented for [`BitMap`], for `BitSet` (with the `alloc` feature), for
/// slices and arrays of unsigned words and of `bool`, and for shared or
/// mutable references to any implementor.
///
/// Words are read least significant bit first: bit `i` of a `[u8]` lives in
/// byte `i / 8` at shift `i % 8`.
///
/// # Examples
/// ```
/// use bit_element::SetBits;
///
/// let words: [u8; 2] = [0b0000_0100, 0b0000_0001];
/// assert_eq!(words.next_set_bit(0), Some(2));
/// assert_eq!(words.next_set_bit(3), Some(8));
/// assert_eq!(words.next_set_bit(9), None);
/// ```
///
/// [`BitElementIter`]: crate::BitElementIter
/// [`BitMap`]: crate::BitMap
pub trait SetBits {
    /// Returns the smallest set position that is `>= from`, or `None` if
    /// there is none.
    fn next_set_bit(&self, from: usize) -> Option<usize>;
}

/// A bitmap whose positions can be cleared one at a time.
///
/// Used by resolvers that implement removal by unsetting the bit, such as
/// [`ClearOnRemove`](crate::ClearOnRemove).
pub trait ClearBits: SetBits {
    /// Clears the bit at `position`.
    ///
    /// Slices ignore positions past their end, since such a position can
    /// never be set.
    fn clear_bit(&mut self, position: usize);
}

impl<T: SetBits + ?Sized> SetBits for &T {
    #[inline]
    fn next_set_bit(&self, from: usize) -> Option<usize> {
        (**self).next_set_bit(from)
    }
}

impl<T: SetBits + ?Sized> SetBits for &mut T {
    #[inline]
    fn next_set_bit(&self, from: usize) -> Option<usize> {
        (**self).next_set_bit(from)
    }
}

impl<T: ClearBits + ?Sized> ClearBits for &mut T {
    #[inline]
    fn clear_bit(&mut self, position: usize) {
        (**self).clear_bit(position)
    }
}

macro_rules! impl_for_words {
    ($($word:ty),*) => {$(
        impl SetBits for [$word] {
            fn next_set_bit(&self, from: usize) -> Option<usize> {
                const BITS: usize = <$word>::BITS as usize;
                let mut word_idx = from / BITS;
                // drop the bits below `from` in the first word
                let mut current = *self.get(word_idx)? & (<$word>::MAX << (from % BITS));
                loop {
                    if current != 0 {
                        return Some(word_idx * BITS + current.trailing_zeros() as usize);
                    }
                    word_idx += 1;
                    current = *self.get(word_idx)?;
                }
            }
        }

        impl ClearBits for [$word] {
            #[inline]
            fn clear_bit(&mut self, position: usize) {
                const BITS: usize = <$word>::BITS as usize;
                if let Some(word) = self.get_mut(position / BITS) {
                    *word &= !((1 as $word) << (position % BITS));
                }
            }
        }

        impl<const N: usize> SetBits for [$word; N] {
            #[inline]
            fn next_set_bit(&self, from: usize) -> Option<usize> {
                self.as_slice().next_set_bit(from)
            }
        }

        impl<const N: usize> ClearBits for [$word; N] {
            #[inline]
            fn clear_bit(&mut self, position: usize) {
                self.as_mut_slice().clear_bit(position)
            }
        }
    )*};
}

impl_for_words!(u8, u16, u32, u64, u128, usize);

impl SetBits for [bool] {
    fn next_set_bit(&self, from: usize) -> Option<usize> {
        let offset = self.get(from..)?.iter().position(|bit| *bit)?;
        Some(from + offset)
    }
}

impl ClearBits for [bool] {
    #[inline]
    fn clear_bit(&mut self, position: usize) {
        if let Some(bit) = self.get_mut(position) {
            *bit = false;
        }
    }
}

impl<const N: usize> SetBits for [bool; N] {
    #[inline]
    fn next_set_bit(&self, from: usize) -> Option<usize> {
        self.as_slice().next_set_bit(from)
    }
}

impl<const N: usize> ClearBits for [bool; N] {
    #[inline]
    fn clear_bit(&mut self, position: usize) {
        self.as_mut_slice().clear_bit(position)
    }
}
