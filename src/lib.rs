//! # Simple Vector
//!
//! The `simple_vector` crate provides a `#[no_std]` growable array, [`SimpleVector`], built on a
//! raw heap buffer, [`ArrayBuf`], that it manages by hand.
//!
//! The two layers split the work the same way `Vec` and its internal `RawVec` do. `ArrayBuf` owns
//! one contiguous block, tracks how many of its slots hold live values, and is the only place that
//! talks to the allocator. `SimpleVector` adds the sequence operations (push, insert, erase, pop)
//! and the growth policy: a full vector doubles its capacity, an empty one starts at a single slot.
//!
//! Growth is fallible. When the allocator refuses a block the operation returns
//! [`VectorError::AllocFailure`] and the container keeps its previous block and contents, so a
//! failed `push` or `reserve` never leaves a half-moved buffer behind. Trait conversions that
//! cannot return an error (`Clone`, `FromIterator`, `Extend`, `From<[T; N]>`) panic instead.
//!
//! Element access comes in three flavours: `[]` panics when out of range, [`SimpleVector::at`]
//! returns [`VectorError::OutOfRange`], and the `unsafe` [`SimpleVector::get_unchecked`] checks
//! nothing.
//!
//! ```
//! use simple_vector::SimpleVector;
//!
//! let mut v = SimpleVector::new();
//! v.push(5).unwrap();
//! v.push(7).unwrap();
//! v.push(9).unwrap();
//! assert_eq!(v.capacity(), 4);
//!
//! v.erase(1).unwrap();
//! v.insert(0, 1).unwrap();
//! assert_eq!(v, [1, 5, 9]);
//! assert!(v.at(3).is_err());
//! ```
//!
//! Reallocations are reported through `tracing` at trace level, and refused allocations at warn
//! level. The crate never installs a subscriber.

#![no_std]

extern crate alloc;
#[cfg(test)]
extern crate std;

mod allocator;
mod buffer;
pub mod error;
#[cfg(test)]
mod testing;
mod vector;

pub use buffer::ArrayBuf;
pub use error::VectorError;
pub use error::VectorResult;
pub use vector::IntoIter;
pub use vector::SimpleVector;
