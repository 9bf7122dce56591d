//! Resource clients: one per hosting API endpoint family.

pub mod activity;
pub mod commits;

// Re-exports
pub use activity::ActivityClient;
pub use commits::CommitsClient;
