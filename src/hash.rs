use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

/// 64-bit golden ratio, used to spread seeds apart before mixing.
pub const GOLDEN_RATIO_64: u64 = 0x9e37_79b9_7f4a_7c15;

const MIX_C1: u64 = 0xff51_afd7_ed55_8ccd;
const MIX_C2: u64 = 0xc4ce_b9fe_1a85_ec53;

/// Offset basis for the seeded FNV-1a.
///
/// This is the published 64-bit basis `0xcbf2_9ce4_8422_2325` with its last
/// decimal digit dropped. Table layouts depend on it, so it must not change.
pub const FNV_OFFSET_BASIS: u64 = 1_469_598_103_934_665_603;

/// Standard 64-bit FNV prime.
pub const FNV_PRIME: u64 = 1_099_511_628_211;

/// 64-bit finalizer: xor-shift by 33 around two odd multiplies.
///
/// # Examples
///
/// ```rust
/// # use robin_static::hash::mix64;
/// #
/// assert_eq!(mix64(0), 0);
/// assert_ne!(mix64(1), mix64(2));
/// ```
#[inline(always)]
pub const fn mix64(mut x: u64) -> u64 {
    x ^= x >> 33;
    x = x.wrapping_mul(MIX_C1);
    x ^= x >> 33;
    x = x.wrapping_mul(MIX_C2);
    x ^= x >> 33;
    x
}

/// Hashes an integer key that has already been widened to `u64`.
#[inline(always)]
pub const fn hash_u64(value: u64, seed: u64) -> u64 {
    mix64(value.wrapping_add(seed.wrapping_mul(GOLDEN_RATIO_64)))
}

/// FNV-1a over `bytes`, with `seed` folded into the offset basis.
///
/// # Examples
///
/// ```rust
/// # use robin_static::hash::fnv1a;
/// # use robin_static::hash::FNV_OFFSET_BASIS;
/// #
/// assert_eq!(fnv1a(b"", 0), FNV_OFFSET_BASIS);
/// assert_ne!(fnv1a(b"key000", 0), fnv1a(b"key000", 1));
/// ```
#[inline]
pub const fn fnv1a(bytes: &[u8], seed: u64) -> u64 {
    let mut hash = FNV_OFFSET_BASIS ^ seed;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}

/// A key kind the [`StandardHasher`] knows how to hash.
///
/// Integers are widened to `u64` (sign-extending signed types) and mixed with
/// [`hash_u64`]. Byte strings are hashed with [`fnv1a`]. Owned and borrowed
/// forms of the same bytes hash identically, so a table keyed by `String` can
/// be queried with a `&str`.
pub trait PerfectHash {
    /// Hashes `self` under `seed`.
    fn perfect_hash(&self, seed: u64) -> u64;
}

macro_rules! impl_perfect_hash_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl PerfectHash for $t {
                #[inline(always)]
                fn perfect_hash(&self, seed: u64) -> u64 {
                    hash_u64(*self as u64, seed)
                }
            }
        )*
    };
}

impl_perfect_hash_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, bool, char);

macro_rules! impl_perfect_hash_bytes {
    ($($t:ty),* $(,)?) => {
        $(
            impl PerfectHash for $t {
                #[inline]
                fn perfect_hash(&self, seed: u64) -> u64 {
                    let bytes: &[u8] = self.as_ref();
                    fnv1a(bytes, seed)
                }
            }
        )*
    };
}

impl_perfect_hash_bytes!(str, [u8], String, Vec<u8>);

impl<const N: usize> PerfectHash for [u8; N] {
    #[inline]
    fn perfect_hash(&self, seed: u64) -> u64 {
        fnv1a(self, seed)
    }
}

impl<T: PerfectHash + ?Sized> PerfectHash for &T {
    #[inline(always)]
    fn perfect_hash(&self, seed: u64) -> u64 {
        (**self).perfect_hash(seed)
    }
}

impl<T: PerfectHash + ?Sized> PerfectHash for Box<T> {
    #[inline(always)]
    fn perfect_hash(&self, seed: u64) -> u64 {
        (**self).perfect_hash(seed)
    }
}

/// A seeded hash family that can place keys of type `K`.
///
/// Implementations must be pure: the same `(key, seed)` must always produce
/// the same value, both while a table is built and for every later lookup.
///
/// # Examples
///
/// ```rust
/// # use robin_static::Builder;
/// # use robin_static::SeededHasher;
/// #
/// #[derive(Clone, Copy, Default)]
/// struct Identity;
///
/// impl SeededHasher<u64> for Identity {
///     fn hash(&self, key: &u64, seed: u64) -> u64 {
///         key ^ seed
///     }
/// }
///
/// let map = Builder::new()
///     .build_with_hasher([(1u64, "a"), (2, "b")], Identity)
///     .unwrap();
/// assert_eq!(map.get(&2), Some(&"b"));
/// ```
///
/// Lookups compare the stored hash before comparing keys. When a map with
/// keys `K` is queried through a borrowed form `Q` (`K: Borrow<Q>`), the
/// hasher's implementations for `K` and `Q` must return the same hash for
/// keys that borrow as equal, the same contract `Hash` has with `Borrow`.
/// Otherwise `get` misses keys that are present. [`StandardHasher`] meets
/// this for `String`/`str` and `Vec<u8>`/`[u8]`.
pub trait SeededHasher<K: ?Sized> {
    /// Hashes `key` under `seed`.
    fn hash(&self, key: &K, seed: u64) -> u64;
}

/// The default hash family: [`mix64`] for integers, [`fnv1a`] for byte
/// strings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StandardHasher;

impl<K: PerfectHash + ?Sized> SeededHasher<K> for StandardHasher {
    #[inline(always)]
    fn hash(&self, key: &K, seed: u64) -> u64 {
        key.perfect_hash(seed)
    }
}

/// A hash family backed by `foldhash`, usable for any `K: Hash`.
///
/// Uses the fixed-seed state, so hashes are stable across runs and
/// processes.
#[cfg(feature = "foldhash")]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FoldHasher;

#[cfg(feature = "foldhash")]
impl<K: core::hash::Hash + ?Sized> SeededHasher<K> for FoldHasher {
    #[inline]
    fn hash(&self, key: &K, seed: u64) -> u64 {
        use core::hash::BuildHasher;

        foldhash::fast::FixedState::with_seed(seed).hash_one(key)
    }
}
