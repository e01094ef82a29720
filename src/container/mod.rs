pub mod container;
pub mod value;

pub use container::{Container, DynamicContainer};
pub use value::Value;
