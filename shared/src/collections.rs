//! Hash collections used across the workspace.
//!
//! With the default `fast_hash` feature the maps come from `hashbrown`,
//! otherwise from the standard library.

use crate::Day;

#[cfg(feature = "fast_hash")]
pub type CustomHashMap<K, V> = hashbrown::HashMap<K, V>;
#[cfg(feature = "fast_hash")]
pub type CustomHashSet<K> = hashbrown::HashSet<K>;

#[cfg(not(feature = "fast_hash"))]
pub type CustomHashMap<K, V> = std::collections::HashMap<K, V>;
#[cfg(not(feature = "fast_hash"))]
pub type CustomHashSet<K> = std::collections::HashSet<K>;

/// Days on which something holds at one location.
pub type DaySet = CustomHashSet<Day>;
