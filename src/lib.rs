#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod builder;

/// Seeded key hashing.
///
/// This module provides the deterministic hash functions used to place and
/// find keys, and the [`SeededHasher`](hash::SeededHasher) seam that lets a
/// table use a different hash family.
pub mod hash;

pub mod static_map;

/// A read-only set built on top of [`StaticMap`].
///
/// This module provides a `StaticSet` that wraps a `StaticMap<K, ()>` and
/// answers membership queries for a fixed key set.
pub mod static_set;

pub use builder::BuildError;
pub use builder::Builder;
pub use builder::build;
#[cfg(feature = "foldhash")]
pub use hash::FoldHasher;
pub use hash::PerfectHash;
pub use hash::SeededHasher;
pub use hash::StandardHasher;
pub use static_map::StaticMap;
pub use static_set::StaticSet;
