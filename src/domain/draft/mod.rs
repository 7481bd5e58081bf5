pub mod entity;
pub mod keywords;
pub mod services;
pub mod text;
pub mod value_objects;

pub use entity::Draft;
pub use keywords::KeywordList;
pub use value_objects::ReadTime;
