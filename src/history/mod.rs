mod client;
mod errors;
mod types;

pub use client::HistoryApi;
pub use errors::HistoryApiError;
pub use types::{ClearHistoryRequest, VideoHistoryRequest};
