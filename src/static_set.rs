use core::borrow::Borrow;
use core::fmt::Debug;

use crate::hash::SeededHasher;
use crate::hash::StandardHasher;
use crate::static_map::Keys;
use crate::static_map::StaticMap;

/// A read-only set over a key set fixed at build time.
///
/// `StaticSet<K, H>` is a [`StaticMap<K, (), H>`] and has the same placement,
/// lookup and error behavior.
///
/// # Examples
///
/// ```rust
/// # use robin_static::Builder;
/// #
/// let set = Builder::new().build_set(["alpha", "beta", "gamma"]).unwrap();
///
/// assert!(set.contains("beta"));
/// assert!(!set.contains("delta"));
/// assert_eq!(set.len(), 3);
/// ```
#[derive(Clone)]
pub struct StaticSet<K, H = StandardHasher> {
    map: StaticMap<K, (), H>,
}

impl<K, H> Debug for StaticSet<K, H>
where
    K: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K, H> StaticSet<K, H> {
    pub(crate) fn from_map(map: StaticMap<K, (), H>) -> Self {
        Self { map }
    }

    /// Returns `true` if `key` is in the set.
    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: SeededHasher<Q>,
    {
        self.map.contains_key(key)
    }

    /// Returns the stored key equal to `key`.
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: SeededHasher<Q>,
    {
        self.map.get_key_value(key).map(|(k, _)| k)
    }

    /// Returns the number of keys in the set.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set holds no keys.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the number of slots, including empty ones.
    pub fn capacity(&self) -> usize {
        self.map.capacity()
    }

    /// Returns an iterator over the keys in slot order.
    pub fn iter(&self) -> Keys<'_, K, ()> {
        self.map.keys()
    }

    /// Returns the underlying map.
    pub fn as_map(&self) -> &StaticMap<K, (), H> {
        &self.map
    }
}

impl<'a, K, H> IntoIterator for &'a StaticSet<K, H> {
    type Item = &'a K;
    type IntoIter = Keys<'a, K, ()>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
