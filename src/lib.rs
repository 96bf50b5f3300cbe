//! Lazy, removable iteration over the set bits of a bitmap, where each bit
//! position is turned into a domain element by a pluggable strategy.
//! `no_std`, no `unsafe`, heap only with the `alloc` feature.
//!
//! [`BitElementIter`] is the main struct in this library. It walks a bitmap
//! from the lowest set bit upward and asks an [`ElementResolver`] for the
//! element behind each visited position. The same resolver also performs
//! removal by position, so the iterator never has to know how elements are
//! stored.
//!
//! # Examples
//! ```
//! use bit_element::{BitMap, ClearOnRemove, SliceResolver, bucket_count};
//!
//! let tasks = ["build", "test", "lint", "deploy", "notify"];
//! let mut pending = BitMap::<5, { bucket_count(5) }>::from_ones_iter([1, 3, 4]);
//!
//! let mut iter = pending.elements_mut(ClearOnRemove::new(SliceResolver::new(&tasks)));
//! while iter.has_next() {
//!     let task = iter.next_element().unwrap();
//!     if *task != "deploy" {
//!         iter.remove().unwrap();
//!     }
//! }
//!
//! assert_eq!(pending.iter_ones().collect::<Vec<_>>(), [3]);
//! ```
//!
//! # Features
//!
//! - `#![no_std]` compatible
//! - [`BitElementIter`]: ascending, single-pass, observes the live bitmap
//!   on every step, usable as a std [`Iterator`]
//! - Bitmap providers through [`SetBits`] / [`ClearBits`]:
//!   - [`BitMap`], a fixed-size, stack-only bitmap
//!   - [`BitSet`], a growable bitmap (`alloc` feature, on by default)
//!   - slices and arrays of `u8` .. `u128`, `usize` and `bool`
//! - Stock resolvers: [`Positions`], [`SliceResolver`], [`ClearOnRemove`]
//!   and closures via [`resolver::from_fns`]
//! - Typed errors: [`Error`] for the iterator, [`ResolveError`] for the
//!   stock resolvers

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(test)]
extern crate std;

mod bitmap;
#[cfg(feature = "alloc")]
mod bitset;
mod bits;
mod error;
mod iter;
pub mod resolver;

pub use bitmap::{BitMap, IterOnes, bucket_count};
#[cfg(feature = "alloc")]
pub use bitset::BitSet;
pub use bits::{ClearBits, SetBits};
pub use error::{Error, ResolveError};
pub use iter::BitElementIter;
pub use resolver::{ClearOnRemove, ElementResolver, FnResolver, Positions, SliceResolver};
