//! Post models

use serde::{Deserialize, Serialize};

use crate::authors::AuthorRecord;

/// Lightweight listing entry for a post
///
/// Built from the metadata header alone; the body is never rendered for a
/// summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    /// Identifier derived from the storage file name
    pub id: String,

    /// Post title
    pub title: String,

    /// Publication date as written in the header (ISO 8601 recommended)
    pub date: String,
}

/// A fully resolved post: rendered body plus joined author record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedPost {
    /// Identifier derived from the storage file name
    pub id: String,

    /// Post title
    pub title: String,

    /// Publication date as written in the header
    pub date: String,

    /// Display category
    pub category: String,

    /// Featured image file name
    pub featured_image: String,

    /// Body rendered to HTML
    pub rendered_body: String,

    /// The referenced author, embedded by value
    pub author: AuthorRecord,
}
