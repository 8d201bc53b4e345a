//! Pool configuration.
//!
//! [`PoolConfig`] carries the immutable parameters fixed at pool creation:
//! the swap fee and the pool's own account on the asset ledgers.

mod pool_config;

pub use pool_config::{PoolConfig, DEFAULT_POOL_ACCOUNT};
