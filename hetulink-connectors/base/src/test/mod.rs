//! Scripted connection used to exercise connectors without a running engine

pub use mock::*;
