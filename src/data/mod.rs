pub mod error;
pub mod filter;
pub mod loader;
pub mod tables;

pub use error::DataError;
pub use filter::*;
pub use loader::{load_variables, VariableSet, VariableTable};
pub use tables::*;
