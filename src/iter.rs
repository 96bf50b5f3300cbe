use crate::bits::SetBits;
use crate::error::Error;
use crate::resolver::ElementResolver;

/// Lazy, single-pass iterator over the set bits of a bitmap, yielding the
/// element a resolver assigns to each position.
///
/// Positions are visited in strictly ascending order. The iterator keeps a
/// cursor on the last visited position and asks the live bitmap for the next
/// set bit after it on every step, so changes made between steps through
/// [`bits_mut`] are observed. Nothing at or below the cursor is ever visited
/// again.
///
/// `B` is the bitmap handle: an owned bitmap, `&bitmap` or `&mut bitmap`.
/// It must be mutable if the resolver clears bits on removal.
///
/// # Examples
/// ```
/// use bit_element::{BitElementIter, Error, resolver};
///
/// let bits = [0b0001_1010u8];
/// let mut iter = BitElementIter::new(
///     &bits,
///     resolver::from_fns(|pos| Ok::<_, ()>(format!("E{pos}")), |_, _| Ok(())),
/// );
/// assert_eq!(iter.next_element(), Ok("E1".to_string()));
/// assert_eq!(iter.next_element(), Ok("E3".to_string()));
/// assert_eq!(iter.next_element(), Ok("E4".to_string()));
/// assert!(!iter.has_next());
/// assert_eq!(iter.next_element(), Err(Error::Exhausted));
/// ```
///
/// [`bits_mut`]: BitElementIter::bits_mut
#[derive(Debug, Clone)]
pub struct BitElementIter<B, R> {
    bits: B,
    resolver: R,
    cursor: Option<usize>,
}

impl<B, R> BitElementIter<B, R>
where
    B: SetBits,
    R: ElementResolver<B>,
{
    /// Creates an iterator positioned before the first set bit.
    pub fn new(bits: B, resolver: R) -> Self {
        Self {
            bits,
            resolver,
            cursor: None,
        }
    }

    /// Returns `true` if a set bit exists after the cursor.
    ///
    /// Does not move the cursor.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.peek().is_some()
    }

    /// Moves the cursor to the next set bit and returns its element.
    ///
    /// The cursor moves before the resolver is asked, so a position whose
    /// lookup fails is still consumed and becomes the target of
    /// [`remove`](Self::remove).
    ///
    /// # Errors
    /// [`Error::Exhausted`] if no set bit is left, in which case the cursor
    /// stays where it was. [`Error::Resolver`] if the lookup fails.
    pub fn next_element(&mut self) -> Result<R::Element, Error<R::Error>> {
        let position = self.advance().ok_or(Error::Exhausted)?;
        self.resolver.element_at(position).map_err(Error::Resolver)
    }

    /// Removes the element at the cursor through the resolver.
    ///
    /// The cursor is left in place. Calling this twice at the same cursor
    /// calls the resolver twice with the same position.
    ///
    /// # Errors
    /// [`Error::RemoveBeforeNext`] if no position has been visited yet. The
    /// resolver is not called in that case. [`Error::Resolver`] if the
    /// removal fails.
    pub fn remove(&mut self) -> Result<(), Error<R::Error>> {
        let position = self.cursor.ok_or(Error::RemoveBeforeNext)?;
        self.resolver
            .remove_element_at(&mut self.bits, position)
            .map_err(Error::Resolver)
    }

    /// Returns the last visited position, or `None` before the first step.
    #[inline]
    pub fn position(&self) -> Option<usize> {
        self.cursor
    }

    /// Returns the bitmap handle.
    #[inline]
    pub fn bits(&self) -> &B {
        &self.bits
    }

    /// Returns the bitmap handle mutably, to change bits between steps.
    #[inline]
    pub fn bits_mut(&mut self) -> &mut B {
        &mut self.bits
    }

    /// Returns the resolver.
    #[inline]
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Returns the resolver mutably.
    #[inline]
    pub fn resolver_mut(&mut self) -> &mut R {
        &mut self.resolver
    }

    /// Consumes the iterator, returning the bitmap handle and the resolver.
    pub fn into_parts(self) -> (B, R) {
        (self.bits, self.resolver)
    }

    fn peek(&self) -> Option<usize> {
        let from = match self.cursor {
            None => 0,
            Some(curr) => curr.checked_add(1)?,
        };
        self.bits.next_set_bit(from)
    }

    fn advance(&mut self) -> Option<usize> {
        let position = self.peek()?;
        self.cursor = Some(position);
        Some(position)
    }
}

impl<B, R> Iterator for BitElementIter<B, R>
where
    B: SetBits,
    R: ElementResolver<B>,
{
    type Item = Result<R::Element, R::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let position = self.advance()?;
        Some(self.resolver.element_at(position))
    }
}
