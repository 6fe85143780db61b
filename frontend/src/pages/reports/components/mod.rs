pub mod filters;
pub mod table;

pub use filters::*;
pub use table::*;
