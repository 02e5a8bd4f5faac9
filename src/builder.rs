//! Construction of [`StaticMap`] and [`StaticSet`] tables.
//!
//! A table is built exactly once from an ordered sequence of `(key, value)`
//! pairs. Keys are placed with Robin Hood linear probing: on a collision, the
//! incoming entry takes the slot only if it has travelled strictly further
//! from its ideal slot than the resident, and the evicted resident continues
//! the walk. Equal displacement never swaps, so the first entry to reach a
//! slot at a given displacement keeps it.
//!
//! Placement depends on insertion order. Permuting the input can move keys to
//! different slots but never changes which keys are stored.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;

use thiserror::Error;

use crate::hash::PerfectHash;
use crate::hash::SeededHasher;
use crate::hash::StandardHasher;
use crate::static_map::Slot;
use crate::static_map::StaticMap;
use crate::static_map::displacement;
use crate::static_map::ideal_slot;
use crate::static_set::StaticSet;

/// Error returned when a table cannot be built.
///
/// A failed build never produces a partially filled table. Every failure is
/// a deterministic function of the input, the capacity and the seed, so
/// retrying with the same configuration fails the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError<K> {
    /// A probe walk covered the whole table without finding an empty slot.
    ///
    /// `key` is the entry being carried when the walk gave up, which may be
    /// a previously placed key evicted along the way. Recover by building
    /// again with a larger capacity.
    #[error("capacity {capacity} is too small to place {len} keys")]
    CapacityOverflow {
        /// The key that could not be placed.
        key: K,
        /// The capacity that was attempted.
        capacity: usize,
        /// The number of keys in the input.
        len: usize,
    },
    /// The same key appeared more than once in the input.
    #[error("duplicate key in build input")]
    DuplicateKey {
        /// The repeated key.
        key: K,
    },
    /// Every seed tried produced an entry displaced further than allowed.
    #[error("max displacement {observed} exceeds limit {limit} after {seeds_tried} seed(s)")]
    DisplacementLimit {
        /// The configured limit.
        limit: usize,
        /// The max displacement of the last attempt.
        observed: usize,
        /// How many seeds were tried.
        seeds_tried: u32,
    },
    /// The capacity multiplier was not finite or below `1.0`. Also returned
    /// when it scales the key count past `usize::MAX`.
    #[error("invalid capacity multiplier {0}")]
    InvalidMultiplier(f64),
}

impl<K> BuildError<K> {
    /// Returns the key responsible for the failure, if there is one.
    pub fn key(&self) -> Option<&K> {
        match self {
            BuildError::CapacityOverflow { key, .. } | BuildError::DuplicateKey { key } => {
                Some(key)
            }
            BuildError::DisplacementLimit { .. } | BuildError::InvalidMultiplier(_) => None,
        }
    }
}

/// Configuration for building a table.
///
/// The defaults reproduce the plain Robin Hood build: capacity equal to the
/// number of keys, seed `0`, no displacement limit and no reseeding.
///
/// # Examples
///
/// ```rust
/// # use robin_static::Builder;
/// #
/// let pairs = (0..50).map(|i| (format!("key{i:03}"), i));
/// let map = Builder::new().capacity_multiplier(1.5).build(pairs).unwrap();
///
/// assert_eq!(map.capacity(), 75);
/// assert_eq!(map.get("key049"), Some(&49));
/// assert_eq!(map.get("key050"), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Builder {
    capacity: Option<usize>,
    multiplier: f64,
    seed: u64,
    max_displacement: Option<usize>,
    reseed_attempts: u32,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    /// Creates a builder with the default configuration.
    pub const fn new() -> Self {
        Self {
            capacity: None,
            multiplier: 1.0,
            seed: 0,
            max_displacement: None,
            reseed_attempts: 0,
        }
    }

    /// Sets the exact number of slots. Takes precedence over
    /// [`capacity_multiplier`](Self::capacity_multiplier).
    pub const fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Sizes the table as `ceil(len * multiplier)` slots.
    ///
    /// Smaller multipliers save memory but produce longer probe walks. Values
    /// above roughly `2.0` give little further benefit.
    pub const fn capacity_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Sets the seed used for the placement hash.
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Rejects any placement where an entry ends up more than `limit` slots
    /// from its ideal slot.
    pub const fn max_displacement(mut self, limit: usize) -> Self {
        self.max_displacement = Some(limit);
        self
    }

    /// Number of additional seeds to try when the displacement limit is
    /// exceeded. Seeds are tried in order `seed + 1`, `seed + 2`, ...
    pub const fn reseed_attempts(mut self, attempts: u32) -> Self {
        self.reseed_attempts = attempts;
        self
    }

    /// Builds a map using the [`StandardHasher`].
    pub fn build<K, V, I>(&self, pairs: I) -> Result<StaticMap<K, V>, BuildError<K>>
    where
        K: PerfectHash + Eq,
        I: IntoIterator<Item = (K, V)>,
    {
        self.build_with_hasher(pairs, StandardHasher)
    }

    /// Builds a map that places and finds keys with `hasher`.
    pub fn build_with_hasher<K, V, H, I>(
        &self,
        pairs: I,
        hasher: H,
    ) -> Result<StaticMap<K, V, H>, BuildError<K>>
    where
        K: Eq,
        H: SeededHasher<K>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut items: Vec<(K, V)> = pairs.into_iter().collect();
        let len = items.len();
        let capacity = self.resolve_capacity(len)?;

        log::debug!(
            "building static table: {} keys, capacity {}, seed {}",
            len,
            capacity,
            self.seed
        );

        if capacity == 0 {
            if !items.is_empty() {
                log::warn!("cannot place {} keys in an empty table", len);
                let (key, _) = items.swap_remove(0);
                return Err(BuildError::CapacityOverflow { key, capacity, len });
            }
            return Ok(StaticMap::from_parts(Box::new([]), 0, self.seed, 0, hasher));
        }

        let mut seed = self.seed;
        let mut seeds_tried = 0u32;
        loop {
            let hashes: Vec<u64> = items.iter().map(|(key, _)| hasher.hash(key, seed)).collect();
            seeds_tried = seeds_tried.saturating_add(1);

            let placement = match place(&items, &hashes, capacity) {
                Ok(placement) => placement,
                Err(PlaceError::Overflow { index }) => {
                    log::warn!(
                        "capacity {} overflowed while placing {} keys",
                        capacity,
                        len
                    );
                    let (key, _) = items.swap_remove(index);
                    return Err(BuildError::CapacityOverflow { key, capacity, len });
                }
                Err(PlaceError::Duplicate { index }) => {
                    let (key, _) = items.swap_remove(index);
                    return Err(BuildError::DuplicateKey { key });
                }
            };

            match self.max_displacement {
                Some(limit) if placement.max_displacement > limit => {
                    if seeds_tried > self.reseed_attempts {
                        log::warn!(
                            "max displacement {} over limit {} after {} seed(s)",
                            placement.max_displacement,
                            limit,
                            seeds_tried
                        );
                        return Err(BuildError::DisplacementLimit {
                            limit,
                            observed: placement.max_displacement,
                            seeds_tried,
                        });
                    }
                    log::trace!(
                        "seed {} reached displacement {} (limit {}), reseeding",
                        seed,
                        placement.max_displacement,
                        limit
                    );
                    seed = seed.wrapping_add(1);
                }
                _ => {
                    log::debug!(
                        "built static table: {} keys in {} slots, seed {}, max displacement {}",
                        len,
                        capacity,
                        seed,
                        placement.max_displacement
                    );
                    let max_displacement = placement.max_displacement;
                    let slots = placement.into_slots(items);
                    return Ok(StaticMap::from_parts(
                        slots,
                        len,
                        seed,
                        max_displacement,
                        hasher,
                    ));
                }
            }
        }
    }

    /// Builds a set of `keys` using the [`StandardHasher`].
    pub fn build_set<K, I>(&self, keys: I) -> Result<StaticSet<K>, BuildError<K>>
    where
        K: PerfectHash + Eq,
        I: IntoIterator<Item = K>,
    {
        self.build_set_with_hasher(keys, StandardHasher)
    }

    /// Builds a set of `keys` that places and finds keys with `hasher`.
    pub fn build_set_with_hasher<K, H, I>(
        &self,
        keys: I,
        hasher: H,
    ) -> Result<StaticSet<K, H>, BuildError<K>>
    where
        K: Eq,
        H: SeededHasher<K>,
        I: IntoIterator<Item = K>,
    {
        self.build_with_hasher(keys.into_iter().map(|key| (key, ())), hasher)
            .map(StaticSet::from_map)
    }

    fn resolve_capacity<K>(&self, len: usize) -> Result<usize, BuildError<K>> {
        if let Some(capacity) = self.capacity {
            return Ok(capacity);
        }

        let multiplier = self.multiplier;
        if !multiplier.is_finite() || multiplier < 1.0 {
            return Err(BuildError::InvalidMultiplier(multiplier));
        }

        // `usize::MAX as f64` rounds up, so anything at or past it saturates.
        let scaled = len as f64 * multiplier;
        if scaled >= usize::MAX as f64 {
            return Err(BuildError::InvalidMultiplier(multiplier));
        }

        let capacity = scaled as usize;
        if (capacity as f64) < scaled {
            capacity
                .checked_add(1)
                .ok_or(BuildError::InvalidMultiplier(multiplier))
        } else {
            Ok(capacity)
        }
    }
}

/// Builds a map with exactly `capacity` slots using the default
/// configuration.
///
/// # Examples
///
/// ```rust
/// # use robin_static::BuildError;
/// #
/// let map = robin_static::build(2, [(10u32, 'a'), (20, 'b')]).unwrap();
/// assert_eq!(map.get(&20), Some(&'b'));
///
/// let err = robin_static::build(1, [(10u32, 'a'), (20, 'b')]).unwrap_err();
/// assert!(matches!(err, BuildError::CapacityOverflow { capacity: 1, len: 2, .. }));
/// ```
pub fn build<K, V, I>(capacity: usize, pairs: I) -> Result<StaticMap<K, V>, BuildError<K>>
where
    K: PerfectHash + Eq,
    I: IntoIterator<Item = (K, V)>,
{
    Builder::new().capacity(capacity).build(pairs)
}

/// Slot contents during placement: the cached hash and the input position.
#[derive(Clone, Copy)]
struct Placed {
    hash: u64,
    index: usize,
}

struct Placement {
    slots: Vec<Option<Placed>>,
    max_displacement: usize,
}

enum PlaceError {
    Overflow { index: usize },
    Duplicate { index: usize },
}

impl Placement {
    /// Moves every input pair into its assigned slot.
    fn into_slots<K, V>(self, items: Vec<(K, V)>) -> Box<[Option<Slot<K, V>>]> {
        let mut items: Vec<Option<(K, V)>> = items.into_iter().map(Some).collect();
        self.slots
            .into_iter()
            .map(|placed| {
                placed.and_then(|Placed { hash, index }| {
                    items[index]
                        .take()
                        .map(|(key, value)| Slot { hash, key, value })
                })
            })
            .collect()
    }
}

/// Places every item, in input order, into a table of `capacity` slots.
///
/// `capacity` must be non-zero.
fn place<K: Eq, V>(
    items: &[(K, V)],
    hashes: &[u64],
    capacity: usize,
) -> Result<Placement, PlaceError> {
    debug_assert!(capacity > 0);
    debug_assert_eq!(items.len(), hashes.len());

    let mut slots: Vec<Option<Placed>> = vec![None; capacity];
    let mut max_displacement = 0;

    for (index, &hash) in hashes.iter().enumerate() {
        let mut incoming = Placed { hash, index };
        let mut idx = ideal_slot(hash, capacity);
        let mut probe_distance = 0;

        loop {
            if probe_distance >= capacity {
                return Err(PlaceError::Overflow {
                    index: incoming.index,
                });
            }

            let Some(resident) = &mut slots[idx] else {
                slots[idx] = Some(incoming);
                max_displacement = max_displacement.max(probe_distance);
                break;
            };

            if resident.hash == incoming.hash && items[resident.index].0 == items[incoming.index].0 {
                return Err(PlaceError::Duplicate {
                    index: incoming.index,
                });
            }

            let existing = displacement(resident.hash, idx, capacity);
            if probe_distance > existing {
                core::mem::swap(resident, &mut incoming);
                max_displacement = max_displacement.max(probe_distance);
                probe_distance = existing;
            }

            idx += 1;
            if idx == capacity {
                idx = 0;
            }
            probe_distance += 1;
        }
    }

    Ok(Placement {
        slots,
        max_displacement,
    })
}
