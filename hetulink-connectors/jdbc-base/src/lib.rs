// Base connector for data sources reached through a JDBC driver.
// The driver itself runs behind a bridge (a JVM hosted by the caller),
// this crate prepares everything the bridge needs to load and connect it.

mod bridge;
pub use bridge::*;
mod conf;
pub use conf::*;
mod err;
pub use err::*;
mod jar;
pub use jar::*;
