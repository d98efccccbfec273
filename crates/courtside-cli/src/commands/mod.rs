pub mod dispatch;
pub mod generate;
pub mod reconcile;
pub mod schema;
pub mod shared;
pub mod submit;
