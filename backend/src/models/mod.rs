pub mod catalog;
pub mod macros;

pub use catalog::*;
