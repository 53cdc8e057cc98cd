pub mod context;
pub mod macros;
pub mod types;
