//! Strategies that turn bit positions into elements.
//!
//! An [`ElementResolver`] supplies the two operations a
//! [`BitElementIter`](crate::BitElementIter) delegates: looking up the
//! element behind a position and removing it. How elements are stored, and
//! whether removing one also clears its bit, is entirely up to the resolver.

use core::marker::PhantomData;

use crate::bits::ClearBits;
use crate::error::ResolveError;

/// Maps bit positions of a bitmap `B` to elements and removes them.
///
/// `B` is the bitmap handle the iterator was built with. It is only handed
/// to [`remove_element_at`], so looking an element up can never change the
/// bitmap.
///
/// # Examples
/// ```
/// use bit_element::{BitElementIter, ElementResolver};
///
/// struct Doubled;
///
/// impl<B: ?Sized> ElementResolver<B> for Doubled {
///     type Element = usize;
///     type Error = core::convert::Infallible;
///
///     fn element_at(&mut self, position: usize) -> Result<usize, Self::Error> {
///         Ok(position * 2)
///     }
///
///     fn remove_element_at(&mut self, _bits: &mut B, _position: usize) -> Result<(), Self::Error> {
///         Ok(())
///     }
/// }
///
/// let bits = [0b0001_0010u8];
/// let mut iter = BitElementIter::new(&bits, Doubled);
/// assert_eq!(iter.next(), Some(Ok(2)));
/// assert_eq!(iter.next(), Some(Ok(8)));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`remove_element_at`]: ElementResolver::remove_element_at
pub trait ElementResolver<B: ?Sized> {
    /// The element a position resolves to.
    type Element;
    /// Error raised by either operation. It reaches the caller unchanged.
    type Error;

    /// Returns the element for `position`.
    ///
    /// Must be defined for every position that is or was set during the
    /// traversal.
    fn element_at(&mut self, position: usize) -> Result<Self::Element, Self::Error>;

    /// Removes the element at `position`.
    ///
    /// Any effect on the bitmap, such as clearing the bit, is the resolver's
    /// own business and goes through `bits`.
    fn remove_element_at(&mut self, bits: &mut B, position: usize) -> Result<(), Self::Error>;
}

impl<B: ?Sized, R: ElementResolver<B> + ?Sized> ElementResolver<B> for &mut R {
    type Element = R::Element;
    type Error = R::Error;

    #[inline]
    fn element_at(&mut self, position: usize) -> Result<Self::Element, Self::Error> {
        (**self).element_at(position)
    }

    #[inline]
    fn remove_element_at(&mut self, bits: &mut B, position: usize) -> Result<(), Self::Error> {
        (**self).remove_element_at(bits, position)
    }
}

/// Resolves each position to itself.
///
/// Removal is not supported and fails with [`ResolveError::Unsupported`].
/// Wrap it in [`ClearOnRemove`] to remove by clearing the bit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Positions;

impl<B: ?Sized> ElementResolver<B> for Positions {
    type Element = usize;
    type Error = ResolveError;

    #[inline]
    fn element_at(&mut self, position: usize) -> Result<usize, ResolveError> {
        Ok(position)
    }

    fn remove_element_at(&mut self, _bits: &mut B, position: usize) -> Result<(), ResolveError> {
        Err(ResolveError::Unsupported { position })
    }
}

/// Resolves position `i` to `&slice[i]`.
///
/// A set position past the end of the slice fails with
/// [`ResolveError::OutOfRange`]. A borrowed slice cannot give up an element,
/// so removal fails with [`ResolveError::Unsupported`].
///
/// # Examples
/// ```
/// use bit_element::{BitElementIter, SliceResolver};
///
/// let names = ["zero", "one", "two", "three"];
/// let bits = [true, false, true, true];
/// let picked: Result<Vec<_>, _> = BitElementIter::new(&bits, SliceResolver::new(&names)).collect();
/// assert_eq!(picked.unwrap(), [&"zero", &"two", &"three"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SliceResolver<'a, T> {
    elements: &'a [T],
}

impl<'a, T> SliceResolver<'a, T> {
    /// Creates a resolver over `elements`.
    pub fn new(elements: &'a [T]) -> Self {
        Self { elements }
    }
}

impl<'a, T, B: ?Sized> ElementResolver<B> for SliceResolver<'a, T> {
    type Element = &'a T;
    type Error = ResolveError;

    fn element_at(&mut self, position: usize) -> Result<&'a T, ResolveError> {
        self.elements
            .get(position)
            .ok_or(ResolveError::OutOfRange {
                position,
                len: self.elements.len(),
            })
    }

    fn remove_element_at(&mut self, _bits: &mut B, position: usize) -> Result<(), ResolveError> {
        Err(ResolveError::Unsupported { position })
    }
}

/// A resolver built from two closures. See [`from_fns`].
pub struct FnResolver<F, G, B: ?Sized> {
    element: F,
    remove: G,
    _bits: PhantomData<fn(&mut B)>,
}

/// Builds a resolver from an element closure and a remove closure.
///
/// Both closures must agree on the error type.
///
/// # Examples
/// ```
/// use bit_element::{resolver, BitElementIter};
///
/// let mut removed = Vec::new();
/// let mut bits = [0b0000_0110u8];
/// let mut iter = BitElementIter::new(
///     &mut bits,
///     resolver::from_fns(
///         |pos| Ok::<_, ()>(format!("E{pos}")),
///         |_bits, pos| {
///             removed.push(pos);
///             Ok(())
///         },
///     ),
/// );
/// assert_eq!(iter.next_element(), Ok("E1".to_string()));
/// iter.remove().unwrap();
/// assert_eq!(iter.next_element(), Ok("E2".to_string()));
/// drop(iter);
/// assert_eq!(removed, [1]);
/// ```
pub fn from_fns<F, G, B, E, Fail>(element: F, remove: G) -> FnResolver<F, G, B>
where
    B: ?Sized,
    F: FnMut(usize) -> Result<E, Fail>,
    G: FnMut(&mut B, usize) -> Result<(), Fail>,
{
    FnResolver {
        element,
        remove,
        _bits: PhantomData,
    }
}

impl<F, G, B, E, Fail> ElementResolver<B> for FnResolver<F, G, B>
where
    B: ?Sized,
    F: FnMut(usize) -> Result<E, Fail>,
    G: FnMut(&mut B, usize) -> Result<(), Fail>,
{
    type Element = E;
    type Error = Fail;

    #[inline]
    fn element_at(&mut self, position: usize) -> Result<E, Fail> {
        (self.element)(position)
    }

    #[inline]
    fn remove_element_at(&mut self, bits: &mut B, position: usize) -> Result<(), Fail> {
        (self.remove)(bits, position)
    }
}

/// Delegates element lookup to `R` and removes by clearing the bit.
///
/// The wrapped resolver's own removal is never called.
///
/// # Examples
/// ```
/// use bit_element::{BitElementIter, ClearOnRemove, Positions};
///
/// let mut bits = [0b1010_0000u8];
/// let mut iter = BitElementIter::new(&mut bits, ClearOnRemove::new(Positions));
/// assert_eq!(iter.next_element(), Ok(5));
/// iter.remove().unwrap();
/// drop(iter);
/// assert_eq!(bits, [0b1000_0000]);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClearOnRemove<R>(pub R);

impl<R> ClearOnRemove<R> {
    /// Wraps `resolver`.
    pub fn new(resolver: R) -> Self {
        Self(resolver)
    }

    /// Returns the wrapped resolver.
    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<B: ClearBits + ?Sized, R: ElementResolver<B>> ElementResolver<B> for ClearOnRemove<R> {
    type Element = R::Element;
    type Error = R::Error;

    #[inline]
    fn element_at(&mut self, position: usize) -> Result<Self::Element, Self::Error> {
        self.0.element_at(position)
    }

    #[inline]
    fn remove_element_at(&mut self, bits: &mut B, position: usize) -> Result<(), Self::Error> {
        bits.clear_bit(position);
        Ok(())
    }
}
