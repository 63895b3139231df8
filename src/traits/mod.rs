//! Seams between the pool and its collaborators.
//!
//! [`TokenLedger`] is the external fungible-token capability pools settle
//! against. [`PoolView`] is the read-only pricing surface shared by live
//! pools and the immutable snapshots that concurrent readers query.

mod pool_view;
mod token_ledger;

pub use pool_view::PoolView;
pub use token_ledger::TokenLedger;
