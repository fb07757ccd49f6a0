pub mod descriptor;
pub mod entity;
pub mod record;
pub mod value;

pub use descriptor::Descriptor;
pub use entity::Entity;
pub use record::Record;
pub use value::{ToValue, Value};
