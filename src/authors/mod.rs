//! Author repository - loads author records from the author data directory

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use walkdir::WalkDir;

use crate::error::{ContentError, Result};
use crate::helpers::{derive_id, AUTHOR_EXT};
use crate::Site;

/// Author fields as stored on disk, one JSON file per author
///
/// Every field is required; a file missing one of them fails to parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorData {
    /// Display name
    pub name: String,

    /// Profile picture location
    pub profile: String,

    /// Social media links, in display order
    pub social: Vec<String>,
}

/// An author record joined with its identifier
///
/// The identifier is not stored in the author file; it is attached when a
/// record is fetched by id or joined into a resolved post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorRecord {
    /// Identifier derived from the storage file name
    pub id: String,

    /// Display name
    pub name: String,

    /// Profile picture location
    pub profile: String,

    /// Social media links, in display order
    pub social: Vec<String>,
}

impl AuthorRecord {
    /// Join stored author data with its identifier
    pub fn from_data(id: &str, data: AuthorData) -> Self {
        Self {
            id: id.to_string(),
            name: data.name,
            profile: data.profile,
            social: data.social,
        }
    }
}

/// Loads author records from the site's author data directory
///
/// Every call reads the directory fresh; nothing is cached across calls.
pub struct AuthorRepository<'a> {
    site: &'a Site,
}

impl<'a> AuthorRepository<'a> {
    /// Create a new author repository over a site handle
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Load every author record, keyed by derived identifier
    ///
    /// The map preserves directory enumeration order. A single malformed
    /// entry aborts the whole listing; no partial results are returned.
    pub fn list_all(&self) -> Result<IndexMap<String, AuthorData>> {
        let dir = &self.site.authors_dir;
        let mut authors = IndexMap::new();

        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
            let entry = entry.map_err(|e| ContentError::storage(dir, e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let content = fs::read_to_string(path)
                .map_err(|e| ContentError::storage(path, e))?;
            let data: AuthorData = serde_json::from_str(&content)
                .map_err(|e| ContentError::parse(path, e.to_string()))?;

            let file_name = entry.file_name().to_string_lossy();
            authors.insert(derive_id(&file_name, AUTHOR_EXT).to_string(), data);
        }

        tracing::debug!("loaded {} author records from {:?}", authors.len(), dir);
        Ok(authors)
    }

    /// List author identifiers without reading file contents
    pub fn list_ids(&self) -> Result<Vec<String>> {
        let dir = &self.site.authors_dir;
        let mut ids = Vec::new();

        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
            let entry = entry.map_err(|e| ContentError::storage(dir, e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let file_name = entry.file_name().to_string_lossy();
            ids.push(derive_id(&file_name, AUTHOR_EXT).to_string());
        }

        Ok(ids)
    }

    /// Fetch a single author record by identifier
    pub fn get_by_id(&self, id: &str) -> Result<AuthorRecord> {
        let path = self.site.authors_dir.join(format!("{}{}", id, AUTHOR_EXT));

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ContentError::not_found(id));
            }
            Err(e) => return Err(ContentError::storage(&path, e)),
        };

        let data: AuthorData = serde_json::from_str(&content)
            .map_err(|e| ContentError::parse(&path, e.to_string()))?;

        Ok(AuthorRecord::from_data(id, data))
    }
}
