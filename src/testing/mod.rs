//! Testing utilities.
//!
//! Provides a mock hosting API, a canned summarizer, and record builders
//! for testing code that uses this crate without network access.

pub mod fixtures;
mod mock;

pub use mock::{MockCall, MockHostingApi, MockResponse};
pub use crate::summary::StaticSummarizer;
