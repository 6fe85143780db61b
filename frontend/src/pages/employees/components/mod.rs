pub mod detail;
pub mod form;
pub mod list;

pub use detail::*;
pub use form::*;
pub use list::*;
