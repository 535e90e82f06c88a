//! Post metadata header parsing

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Metadata header of a post file
///
/// Every field is required; a header missing one of them does not produce a
/// partially populated record, it fails the parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostFrontMatter {
    pub title: String,
    /// Publication date, compared as a raw string (ISO 8601 recommended)
    pub date: String,
    pub category: String,
    #[serde(rename = "featuredImage")]
    pub featured_image: String,
    /// Identifier of the author record this post references
    pub author: String,
}

impl PostFrontMatter {
    /// Parse the `---`-delimited YAML header from the top of a post file.
    /// Returns (front_matter, markdown_body).
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let content = content.trim_start();

        let rest = content
            .strip_prefix("---")
            .ok_or_else(|| anyhow!("missing metadata header"))?;
        let rest = rest.trim_start_matches(['\n', '\r']);

        let end_pos = rest
            .find("\n---")
            .ok_or_else(|| anyhow!("unterminated metadata header"))?;
        let yaml_content = &rest[..end_pos];
        let body = rest[end_pos + 4..].trim_start_matches(['\n', '\r']);

        let fm: PostFrontMatter = serde_yaml::from_str(yaml_content)
            .map_err(|e| anyhow!("invalid metadata header: {}", e))?;

        Ok((fm, body))
    }
}
