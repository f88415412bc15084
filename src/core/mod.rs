pub mod assert;
pub mod config;
pub mod prelude;
