pub mod draft;
pub mod editorial;
pub mod errors;
