#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
pub(crate) type IdIndexMap<K> = HashMap<K, usize>;
#[cfg(not(feature = "std"))]
pub(crate) type IdIndexMap<K> = BTreeMap<K, usize>;

/// Bound for item identities.
///
/// With `std` this is `Hash + Eq + Clone`; without it, `Ord + Clone` (ids are indexed in a
/// `BTreeMap`).
#[cfg(feature = "std")]
pub trait ItemId: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq + Clone> ItemId for K {}

#[cfg(not(feature = "std"))]
pub trait ItemId: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<K: Ord + Clone> ItemId for K {}
