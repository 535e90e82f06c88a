//! Helper functions shared across the pipeline

pub mod id;

pub use id::{derive_id, AUTHOR_EXT, POST_EXT};
