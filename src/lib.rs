//! postforge: a markdown blog content pipeline
//!
//! This crate turns a directory of author records and a directory of
//! markdown posts into render-ready content: post bodies become HTML with
//! syntax-highlighted code blocks, each post is cross-referenced with its
//! author, and listings are enumerated and sorted for display.

pub mod authors;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;

use anyhow::Result;
use std::path::Path;

/// The content store handle
///
/// Carries the site configuration and the resolved storage directories.
/// Repositories are constructed over a `Site` rather than reaching for
/// ambient path constants, so tests can point one at a fixture directory.
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Posts directory
    pub posts_dir: std::path::PathBuf,
    /// Author data directory
    pub authors_dir: std::path::PathBuf,
}

impl Site {
    /// Create a new Site instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let posts_dir = base_dir.join(&config.posts_dir);
        let authors_dir = base_dir.join(&config.authors_dir);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
            authors_dir,
        })
    }

    /// Post repository over this site
    pub fn posts(&self) -> content::PostRepository<'_> {
        content::PostRepository::new(self)
    }

    /// Author repository over this site
    pub fn authors(&self) -> authors::AuthorRepository<'_> {
        authors::AuthorRepository::new(self)
    }
}
