//! Thread-safe access to a [`PairRegistry`](crate::registry::PairRegistry).

mod shared;

pub use shared::SharedRegistry;
