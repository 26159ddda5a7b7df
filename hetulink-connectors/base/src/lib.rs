pub mod interface;

#[cfg(feature = "test")]
pub mod test;
