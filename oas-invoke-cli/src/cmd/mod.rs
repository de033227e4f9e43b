pub mod endpoints;
pub mod invoke;
pub mod list;
pub mod validate;
