pub mod map;
pub mod source;

pub use map::PropertyMap;
pub use source::{PropertySource, ResourceLoader};
