//! Pair registry: one pool per unordered token pair.

mod pair_registry;

pub use pair_registry::PairRegistry;
