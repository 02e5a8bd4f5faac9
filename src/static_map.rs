//! An immutable map over a key set fixed at build time.
//!
//! [`StaticMap`] owns a slot array sized once by the
//! [`Builder`](crate::Builder) and never resized or mutated afterwards. A
//! lookup hashes the query with the seed the table was built with, starts at
//! `hash % capacity` and walks forward until it finds the key, an empty slot,
//! or a resident that sits closer to its own ideal slot than the walk has
//! travelled. Under Robin Hood placement the last case proves the key is
//! absent.

use alloc::boxed::Box;
use core::borrow::Borrow;
use core::fmt::Debug;

use crate::hash::SeededHasher;
use crate::hash::StandardHasher;

cfg_if::cfg_if! {
    if #[cfg(all(target_arch = "x86_64", target_feature = "sse"))] {
        #[inline(always)]
        fn prefetch<T>(ptr: *const T) {
            // SAFETY: Prefetching is a hint and does not fault on any address.
            unsafe {
                use core::arch::x86_64::*;
                _mm_prefetch(ptr as *const i8, _MM_HINT_T0);
            }
        }
    } else {
        #[inline(always)]
        fn prefetch<T>(_ptr: *const T) {}
    }
}

#[inline(always)]
pub(crate) fn ideal_slot(hash: u64, capacity: usize) -> usize {
    (hash % capacity as u64) as usize
}

/// Distance from the ideal slot of `hash` to `idx`, wrapping at `capacity`.
#[inline(always)]
pub(crate) fn displacement(hash: u64, idx: usize, capacity: usize) -> usize {
    let ideal = ideal_slot(hash, capacity);
    if idx >= ideal {
        idx - ideal
    } else {
        idx + capacity - ideal
    }
}

#[derive(Clone)]
pub(crate) struct Slot<K, V> {
    pub(crate) hash: u64,
    pub(crate) key: K,
    pub(crate) value: V,
}

/// Probe statistics for a built table.
#[cfg(feature = "stats")]
#[derive(Debug, Clone)]
pub struct DebugStats {
    /// Number of keys stored
    pub populated: usize,
    /// Total number of slots
    pub capacity: usize,
    /// Load factor (populated / capacity)
    pub load_factor: f64,
    /// Largest distance of any key from its ideal slot
    pub max_displacement: usize,
    /// Mean distance of keys from their ideal slots
    pub mean_displacement: f64,
    /// Total memory in bytes used by the slot array
    pub total_bytes: usize,
    /// Memory in bytes held by empty slots
    pub wasted_bytes: usize,
}

#[cfg(feature = "stats")]
impl DebugStats {
    /// Pretty-print the debug statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Static Table Statistics ===");
        println!(
            "Population: {}/{} ({:.2}% load factor)",
            self.populated,
            self.capacity,
            self.load_factor * 100.0
        );
        println!(
            "Displacement: max {}, mean {:.3}",
            self.max_displacement, self.mean_displacement
        );
        println!("Total Allocated: {} bytes", self.total_bytes);
        println!(
            "Memory: {} bytes in empty slots ({:.02}%)",
            self.wasted_bytes,
            if self.total_bytes == 0 {
                0.0
            } else {
                (self.wasted_bytes as f64 / self.total_bytes as f64) * 100.0
            }
        );
    }
}

/// A read-only map from a fixed key set to values.
///
/// Built once by [`Builder`](crate::Builder) or [`build`](crate::build), then
/// shared freely: no method takes `&mut self`, so any number of threads may
/// query the same table without synchronization.
///
/// ## Performance Characteristics
///
/// - **Memory**: one `Option<(u64, K, V)>` per slot; capacity is chosen at
///   build time and never changes.
/// - **Lookups**: at most `max_displacement() + 1` probes.
///
/// ## Example
///
/// ```rust
/// # use std::sync::LazyLock;
/// #
/// # use robin_static::StaticMap;
/// #
/// static STATUS: LazyLock<StaticMap<&'static str, u16>> = LazyLock::new(|| {
///     robin_static::build(3, [("ok", 200), ("missing", 404), ("teapot", 418)])
///         .expect("three keys fit in three slots")
/// });
///
/// assert_eq!(STATUS.get("teapot"), Some(&418));
/// assert_eq!(STATUS.get("gone"), None);
/// ```
#[derive(Clone)]
pub struct StaticMap<K, V, H = StandardHasher> {
    slots: Box<[Option<Slot<K, V>>]>,
    len: usize,
    seed: u64,
    max_displacement: usize,
    hasher: H,
}

impl<K, V, H> Debug for StaticMap<K, V, H>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, H> StaticMap<K, V, H> {
    pub(crate) fn from_parts(
        slots: Box<[Option<Slot<K, V>>]>,
        len: usize,
        seed: u64,
        max_displacement: usize,
        hasher: H,
    ) -> Self {
        debug_assert_eq!(slots.iter().filter(|slot| slot.is_some()).count(), len);
        Self {
            slots,
            len,
            seed,
            max_displacement,
            hasher,
        }
    }

    /// Returns the value stored for `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let map = robin_static::build(4, [(String::from("a"), 1), (String::from("b"), 2)]).unwrap();
    ///
    /// assert_eq!(map.get("a"), Some(&1));
    /// assert_eq!(map.get("c"), None);
    /// ```
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: SeededHasher<Q>,
    {
        self.find(key).map(|slot| &slot.value)
    }

    /// Returns the stored key and value for `key`.
    #[inline]
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: SeededHasher<Q>,
    {
        self.find(key).map(|slot| (&slot.key, &slot.value))
    }

    /// Returns the value stored for `key`, or `default` when the key is not
    /// in the table.
    ///
    /// Useful for callers that represent "not found" with a sentinel value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let map = robin_static::build(1, [("key000", 0i32)]).unwrap();
    ///
    /// assert_eq!(map.get_or("key000", -1), 0);
    /// assert_eq!(map.get_or("anything_else", -1), -1);
    /// ```
    #[inline]
    pub fn get_or<Q>(&self, key: &Q, default: V) -> V
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: SeededHasher<Q>,
        V: Copy,
    {
        self.get(key).copied().unwrap_or(default)
    }

    /// Returns `true` if `key` is in the table.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: SeededHasher<Q>,
    {
        self.find(key).is_some()
    }

    fn find<Q>(&self, key: &Q) -> Option<&Slot<K, V>>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: SeededHasher<Q>,
    {
        if self.len == 0 {
            return None;
        }

        let capacity = self.slots.len();
        let hash = self.hasher.hash(key, self.seed);
        let mut idx = ideal_slot(hash, capacity);
        prefetch(self.slots.as_ptr().wrapping_add(idx));

        let bound = self.max_displacement.saturating_add(1).min(capacity);
        for distance in 0..bound {
            let slot = self.slots[idx].as_ref()?;
            if slot.hash == hash {
                let stored: &Q = slot.key.borrow();
                if stored == key {
                    return Some(slot);
                }
            }
            if displacement(slot.hash, idx, capacity) < distance {
                return None;
            }

            idx += 1;
            if idx == capacity {
                idx = 0;
            }
        }

        None
    }

    /// Returns the number of keys in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the table holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots, including empty ones.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the seed the table was placed with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the largest distance of any key from its ideal slot.
    pub fn max_displacement(&self) -> usize {
        self.max_displacement
    }

    /// Returns `len / capacity`, or `0.0` for a table with no slots.
    pub fn load_factor(&self) -> f64 {
        if self.slots.is_empty() {
            0.0
        } else {
            self.len as f64 / self.slots.len() as f64
        }
    }

    /// Returns the hash family used by the table.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Returns an iterator over the entries in slot order.
    ///
    /// Slot order is deterministic for a given input order, capacity and
    /// seed, but is otherwise unspecified.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.slots.iter(),
            remaining: self.len,
        }
    }

    /// Returns an iterator over the keys in slot order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the values in slot order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Counts entries by their distance from their ideal slot.
    ///
    /// Returns a vector of length `max_displacement() + 1` (empty for an
    /// empty table) where index `d` holds the number of keys stored `d`
    /// slots past their ideal slot.
    #[cfg(feature = "stats")]
    pub fn probe_histogram(&self) -> alloc::vec::Vec<usize> {
        if self.len == 0 {
            return alloc::vec::Vec::new();
        }

        let capacity = self.slots.len();
        let mut hist = alloc::vec![0usize; self.max_displacement + 1];
        for (idx, slot) in self.slots.iter().enumerate() {
            if let Some(slot) = slot {
                hist[displacement(slot.hash, idx, capacity)] += 1;
            }
        }
        hist
    }

    /// Returns displacement and memory statistics for the table.
    #[cfg(feature = "stats")]
    pub fn debug_stats(&self) -> DebugStats {
        let hist = self.probe_histogram();
        let total: usize = hist
            .iter()
            .enumerate()
            .map(|(distance, count)| distance * count)
            .sum();
        let slot_bytes = core::mem::size_of::<Option<Slot<K, V>>>();

        DebugStats {
            populated: self.len,
            capacity: self.slots.len(),
            load_factor: self.load_factor(),
            max_displacement: self.max_displacement,
            mean_displacement: if self.len == 0 {
                0.0
            } else {
                total as f64 / self.len as f64
            },
            total_bytes: self.slots.len() * slot_bytes,
            wasted_bytes: (self.slots.len() - self.len) * slot_bytes,
        }
    }
}

impl<'a, K, V, H> IntoIterator for &'a StaticMap<K, V, H> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of a [`StaticMap`].
pub struct Iter<'a, K, V> {
    inner: core::slice::Iter<'a, Option<Slot<K, V>>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.inner.by_ref().find_map(Option::as_ref)?;
        self.remaining -= 1;
        Some((&slot.key, &slot.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

/// Iterator over the keys of a [`StaticMap`].
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Iterator over the values of a [`StaticMap`].
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;
    use alloc::string::ToString;
    use alloc::vec::Vec;
    use core::hash::Hash;
    use core::hash::Hasher;

    use rand::Rng;
    use rand::SeedableRng;
    use rand::TryRngCore;
    use rand::rngs::OsRng;
    use rand::rngs::SmallRng;
    use siphasher::sip::SipHasher;

    use super::*;
    use crate::Builder;
    use crate::build;

    #[derive(Clone, Copy, Default)]
    struct SipSeeded;

    impl<K: Hash + ?Sized> SeededHasher<K> for SipSeeded {
        fn hash(&self, key: &K, seed: u64) -> u64 {
            let mut hasher = SipHasher::new_with_keys(seed, 0x5851_f42d_4c95_7f2d);
            key.hash(&mut hasher);
            hasher.finish()
        }
    }

    fn string_pairs(n: usize) -> Vec<(String, i64)> {
        (0..n).map(|i| (format!("key{i:03}"), i as i64)).collect()
    }

    /// Walks every slot from the ideal index, stopping only at an empty slot
    /// or after `capacity` probes.
    fn full_walk<'a, K, V, H, Q>(map: &'a StaticMap<K, V, H>, key: &Q) -> Option<&'a V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: SeededHasher<Q>,
    {
        let capacity = map.slots.len();
        if capacity == 0 {
            return None;
        }
        let mut idx = ideal_slot(map.hasher.hash(key, map.seed), capacity);
        for _ in 0..capacity {
            let slot = map.slots[idx].as_ref()?;
            let stored: &Q = slot.key.borrow();
            if stored == key {
                return Some(&slot.value);
            }
            idx = (idx + 1) % capacity;
        }
        None
    }

    #[test]
    fn single_key_single_slot() {
        let map = build(1, string_pairs(1)).unwrap();
        assert_eq!(map.get("key000"), Some(&0));
        assert_eq!(map.get("anything_else"), None);
        assert_eq!(map.len(), 1);
        assert_eq!(map.capacity(), 1);
    }

    #[test]
    fn full_table_round_trip() {
        let map = build(20, string_pairs(20)).unwrap();
        assert_eq!(map.len(), 20);
        assert_eq!(map.load_factor(), 1.0);
        for (key, value) in string_pairs(20) {
            assert_eq!(map.get(key.as_str()), Some(&value), "{:?}", map);
        }
        assert_eq!(map.get("key019"), Some(&19));
        assert_eq!(map.get("key020"), None);
        assert_eq!(map.max_displacement(), 2);
    }

    #[test]
    fn sparse_table_round_trip() {
        let map = build(75, string_pairs(50)).unwrap();
        assert_eq!(map.len(), 50);
        for (key, value) in string_pairs(50) {
            assert_eq!(map.get(key.as_str()), Some(&value));
            assert!(map.contains_key(key.as_str()));
        }
        for i in 50..200 {
            assert_eq!(map.get(format!("key{i:03}").as_str()), None);
        }
    }

    #[test]
    fn sentinel_lookup() {
        let map = build(20, string_pairs(20)).unwrap();
        assert_eq!(map.get_or("key007", -1), 7);
        assert_eq!(map.get_or("key020", -1), -1);
        assert_eq!(map.get_or("", -1), -1);
    }

    #[test]
    fn lookups_match_full_walk() {
        let mut rng = SmallRng::seed_from_u64(42);
        for capacity_pct in [100usize, 110, 150, 200] {
            let keys: Vec<u32> = (0..300).map(|_| rng.random_range(0..1000)).collect();
            let mut unique = keys.clone();
            unique.sort_unstable();
            unique.dedup();

            let capacity = unique.len() * capacity_pct / 100;
            let map = build(capacity, unique.iter().map(|&k| (k, k ^ 0xabcd))).unwrap();
            for probe in 0..1200u32 {
                assert_eq!(map.get(&probe), full_walk(&map, &probe), "probe {probe}");
            }
        }
    }

    #[test]
    fn negative_lookups_never_alias() {
        let mut rng = SmallRng::seed_from_u64(3);
        let present: Vec<u64> = (0..256).map(|i| i * 2).collect();
        let map = build(256, present.iter().map(|&k| (k, k))).unwrap();
        for _ in 0..10_000 {
            let probe: u64 = rng.random_range(0..1024);
            match map.get(&probe) {
                Some(&value) => assert_eq!(value, probe),
                None => assert!(probe % 2 == 1 || probe >= 512),
            }
        }
    }

    #[test]
    fn byte_string_keys() {
        let pairs: Vec<(Vec<u8>, u8)> = (0..16u8).map(|i| (vec_key(i), i)).collect();
        let map = build(16, pairs).unwrap();
        for i in 0..16u8 {
            assert_eq!(map.get(vec_key(i).as_slice()), Some(&i));
        }
        assert_eq!(map.get(&b"missing"[..]), None);
    }

    fn vec_key(i: u8) -> Vec<u8> {
        [b'k', b'-', i].to_vec()
    }

    #[test]
    fn signed_keys() {
        let map = build(8, (-4i32..4).map(|k| (k, k * 100))).unwrap();
        for k in -4i32..4 {
            assert_eq!(map.get(&k), Some(&(k * 100)));
        }
        assert_eq!(map.get(&4), None);
        assert_eq!(map.get_or(&-5, -1), -1);
    }

    #[test]
    fn get_key_value_returns_stored_key() {
        let map = build(4, [("alpha".to_string(), 1u8), ("beta".to_string(), 2)]).unwrap();
        let (key, value) = map.get_key_value("beta").unwrap();
        assert_eq!(key, "beta");
        assert_eq!(*value, 2);
        assert!(map.get_key_value("gamma").is_none());
    }

    #[test]
    fn custom_hasher() {
        let map = Builder::new()
            .capacity_multiplier(1.2)
            .build_with_hasher(string_pairs(100), SipSeeded)
            .unwrap();
        for (key, value) in string_pairs(100) {
            assert_eq!(map.get(key.as_str()), Some(&value));
        }
        assert_eq!(map.get("key100"), None);
    }

    #[test]
    fn borrowed_queries_need_matching_hashes() {
        #[derive(Clone, Copy)]
        struct Bytes;

        impl SeededHasher<Vec<u8>> for Bytes {
            fn hash(&self, key: &Vec<u8>, seed: u64) -> u64 {
                crate::hash::fnv1a(key, seed)
            }
        }

        impl SeededHasher<[u8]> for Bytes {
            fn hash(&self, key: &[u8], seed: u64) -> u64 {
                crate::hash::fnv1a(key, seed)
            }
        }

        #[derive(Clone, Copy)]
        struct Mismatched;

        impl SeededHasher<Vec<u8>> for Mismatched {
            fn hash(&self, key: &Vec<u8>, seed: u64) -> u64 {
                crate::hash::fnv1a(key, seed)
            }
        }

        impl SeededHasher<[u8]> for Mismatched {
            fn hash(&self, key: &[u8], seed: u64) -> u64 {
                !crate::hash::fnv1a(key, seed)
            }
        }

        let pairs = || (0..32u8).map(|i| (alloc::vec![b'k', i], i));

        let map = build_with(pairs(), Bytes);
        for (key, value) in pairs() {
            assert_eq!(map.get(key.as_slice()), Some(&value));
            assert_eq!(map.get(&key), Some(&value));
        }

        // Owned queries still agree with the stored hash; borrowed ones never do.
        let map = build_with(pairs(), Mismatched);
        for (key, value) in pairs() {
            assert_eq!(map.get(&key), Some(&value));
            assert_eq!(map.get(key.as_slice()), None);
        }
    }

    fn build_with<H: SeededHasher<Vec<u8>>>(
        pairs: impl IntoIterator<Item = (Vec<u8>, u8)>,
        hasher: H,
    ) -> StaticMap<Vec<u8>, u8, H> {
        Builder::new()
            .capacity_multiplier(1.25)
            .build_with_hasher(pairs, hasher)
            .unwrap()
    }

    #[test]
    fn custom_hasher_with_random_seed() {
        let seed = OsRng.try_next_u64().unwrap();
        let map = Builder::new()
            .seed(seed)
            .build_with_hasher((0..500u64).map(|k| (k, k + 1)), SipSeeded)
            .unwrap();
        assert_eq!(map.seed(), seed);
        for k in 0..500u64 {
            assert_eq!(map.get(&k), Some(&(k + 1)));
        }
    }

    #[test]
    #[cfg(feature = "foldhash")]
    fn fold_hasher_tuple_keys() {
        let pairs: Vec<((u32, u32), u32)> =
            (0..20).flat_map(|a| (0..5).map(move |b| ((a, b), a * 5 + b))).collect();
        let map = Builder::new()
            .build_with_hasher(pairs.clone(), crate::FoldHasher)
            .unwrap();
        for (key, value) in &pairs {
            assert_eq!(map.get(key), Some(value));
        }
        assert_eq!(map.get(&(20, 0)), None);
    }

    #[test]
    fn empty_map() {
        let map = build(0, Vec::<(String, u8)>::new()).unwrap();
        assert!(map.is_empty());
        assert_eq!(map.get("x"), None);
        assert_eq!(map.iter().len(), 0);
        assert_eq!(map.load_factor(), 0.0);

        let map = build(10, Vec::<(u64, u8)>::new()).unwrap();
        assert!(map.is_empty());
        assert_eq!(map.capacity(), 10);
        assert_eq!(map.get(&0), None);
    }

    #[test]
    fn iteration() {
        let map = build(30, string_pairs(25)).unwrap();
        let iter = map.iter();
        assert_eq!(iter.len(), 25);

        let mut values: Vec<i64> = map.values().copied().collect();
        values.sort_unstable();
        assert_eq!(values, (0..25).collect::<Vec<_>>());
        assert_eq!(map.keys().count(), 25);
        assert_eq!((&map).into_iter().count(), 25);

        let mut iter = map.iter();
        iter.next();
        assert_eq!(iter.size_hint(), (24, Some(24)));
    }

    #[test]
    fn debug_and_clone() {
        let map = build(1, [(1u64, "a")]).unwrap();
        assert_eq!(format!("{map:?}"), r#"{1: "a"}"#);

        let map = build(20, string_pairs(20)).unwrap();
        let copy = map.clone();
        assert_eq!(
            map.iter().collect::<Vec<_>>(),
            copy.iter().collect::<Vec<_>>()
        );
        assert_eq!(copy.get("key003"), Some(&3));
    }

    #[test]
    fn shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StaticMap<String, u64>>();
        assert_send_sync::<StaticMap<&'static str, i32>>();
    }

    #[test]
    #[cfg(feature = "std")]
    fn initialized_once_at_startup() {
        use std::sync::OnceLock;

        static TABLE: OnceLock<StaticMap<u32, u32>> = OnceLock::new();

        fn table() -> &'static StaticMap<u32, u32> {
            TABLE.get_or_init(|| {
                Builder::new()
                    .capacity_multiplier(1.5)
                    .build((0..1000u32).map(|k| (k, k * 3)))
                    .unwrap()
            })
        }

        std::thread::scope(|scope| {
            for t in 0..4u32 {
                scope.spawn(move || {
                    for k in (t..1000).step_by(4) {
                        assert_eq!(table().get(&k), Some(&(k * 3)));
                    }
                    assert_eq!(table().get(&(1000 + t)), None);
                });
            }
        });
        assert!(core::ptr::eq(table(), table()));
    }

    #[test]
    #[cfg(feature = "stats")]
    fn probe_statistics() {
        let map = build(20, string_pairs(20)).unwrap();
        assert_eq!(map.probe_histogram(), [9, 10, 1]);

        let stats = map.debug_stats();
        assert_eq!(stats.populated, 20);
        assert_eq!(stats.capacity, 20);
        assert_eq!(stats.max_displacement, 2);
        assert_eq!(stats.mean_displacement, 0.6);
        assert_eq!(stats.wasted_bytes, 0);

        let map = build(75, string_pairs(50)).unwrap();
        assert_eq!(map.probe_histogram(), [25, 15, 9, 1]);
        let stats = map.debug_stats();
        assert_eq!(stats.wasted_bytes * 3, stats.total_bytes);

        let empty = build(4, Vec::<(u8, u8)>::new()).unwrap();
        assert!(empty.probe_histogram().is_empty());
    }

    #[test]
    #[cfg_attr(miri, ignore)]
    #[cfg(all(feature = "stats", feature = "std"))]
    fn statistics_output() {
        let map = Builder::new()
            .capacity_multiplier(1.1)
            .build((0..10_000u64).map(|k| (k, ())))
            .unwrap();
        map.debug_stats().print();
    }
}
