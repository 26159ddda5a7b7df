mod connection;
pub use connection::*;
mod metadata;
pub use metadata::*;
