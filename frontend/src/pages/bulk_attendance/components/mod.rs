pub mod progress;
pub mod summary;

pub use progress::*;
pub use summary::*;
