pub mod client;
pub mod errors;
pub mod pipeline;
pub mod types;

pub use client::{BROWSER_USER_AGENT, UpstreamClient};
pub use errors::FetchError;
pub use types::{Charset, PageResponse};
