pub use serde_yaml::{from_value, Mapping, Number, Sequence, Value};

mod extras;
pub use extras::*;
mod util;
pub use util::*;
