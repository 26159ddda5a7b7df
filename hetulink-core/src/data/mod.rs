mod value;
mod r#type;

pub use value::*;
pub use r#type::*;
