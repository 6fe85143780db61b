mod attendance;
pub mod client;
mod dashboard;
mod employees;
pub mod query;
pub mod types;

pub use client::*;
pub use query::{QueryClient, QueryKey};
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
