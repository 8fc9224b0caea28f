pub mod entities;
pub mod value_objects;

pub use entities::Document;
pub use value_objects::{Report, Statistics, REPORT_TOP_WORDS};
