//! Concrete [`AssetLedger`](crate::traits::AssetLedger) implementations.

mod in_memory;

pub use in_memory::InMemoryAssetLedger;
