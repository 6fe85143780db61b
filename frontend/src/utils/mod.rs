pub mod browser;
pub mod time;

pub use browser::navigate;
