//! Reference [`TokenLedger`](crate::traits::TokenLedger) bindings.

mod in_memory;

pub use in_memory::InMemoryLedger;
