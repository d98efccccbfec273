pub mod draft;
pub mod parse;
