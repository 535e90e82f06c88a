//! Post repository - loads, enumerates and resolves posts

use std::fs;
use std::io::ErrorKind;
use walkdir::WalkDir;

use super::{MarkdownRenderer, PostFrontMatter, PostSummary, ResolvedPost};
use crate::authors::AuthorRepository;
use crate::error::{ContentError, Result};
use crate::helpers::{derive_id, POST_EXT};
use crate::Site;

/// Loads posts from the site's posts directory
///
/// Every call reads the directory fresh; nothing is cached across calls.
pub struct PostRepository<'a> {
    site: &'a Site,
    renderer: MarkdownRenderer,
}

impl<'a> PostRepository<'a> {
    /// Create a new post repository over a site handle
    pub fn new(site: &'a Site) -> Self {
        let renderer = MarkdownRenderer::with_options(
            &site.config.highlight.theme,
            site.config.highlight.line_number,
        );
        Self { site, renderer }
    }

    /// Build a summary for every post, sorted by date descending
    ///
    /// Only the metadata header of each file is parsed; bodies are never
    /// rendered here. Dates are compared as raw strings, which matches
    /// calendar order exactly when they are written as ISO 8601. The sort is
    /// stable, so equal dates keep directory enumeration order. A single
    /// malformed entry aborts the whole listing.
    pub fn list_summaries(&self) -> Result<Vec<PostSummary>> {
        let dir = &self.site.posts_dir;
        let mut summaries = Vec::new();

        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
            let entry = entry.map_err(|e| ContentError::storage(dir, e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let content = fs::read_to_string(path)
                .map_err(|e| ContentError::storage(path, e))?;
            let (header, _body) = PostFrontMatter::parse(&content)
                .map_err(|e| ContentError::parse(path, e.to_string()))?;

            let file_name = entry.file_name().to_string_lossy();
            summaries.push(PostSummary {
                id: derive_id(&file_name, POST_EXT).to_string(),
                title: header.title,
                date: header.date,
            });
        }

        summaries.sort_by(|a, b| b.date.cmp(&a.date));

        tracing::debug!("listed {} post summaries from {:?}", summaries.len(), dir);
        Ok(summaries)
    }

    /// List post identifiers in directory enumeration order
    ///
    /// File contents are not read. The order is whatever the filesystem
    /// yields; callers wanting display order use `list_summaries`.
    pub fn list_ids(&self) -> Result<Vec<String>> {
        let dir = &self.site.posts_dir;
        let mut ids = Vec::new();

        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
            let entry = entry.map_err(|e| ContentError::storage(dir, e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let file_name = entry.file_name().to_string_lossy();
            ids.push(derive_id(&file_name, POST_EXT).to_string());
        }

        Ok(ids)
    }

    /// Resolve a single post by identifier
    ///
    /// Reads the post file, renders its body and joins the author record
    /// named in the header. Author lookup errors propagate unchanged; there
    /// is no fallback author. Any failing sub-step fails the whole
    /// resolution.
    pub fn resolve(&self, id: &str) -> Result<ResolvedPost> {
        let path = self.site.posts_dir.join(format!("{}{}", id, POST_EXT));

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ContentError::not_found(id));
            }
            Err(e) => return Err(ContentError::storage(&path, e)),
        };

        let (header, body) = PostFrontMatter::parse(&content)
            .map_err(|e| ContentError::parse(&path, e.to_string()))?;

        let rendered_body = self.renderer.render(body);
        let author = AuthorRepository::new(self.site).get_by_id(&header.author)?;

        Ok(ResolvedPost {
            id: id.to_string(),
            title: header.title,
            date: header.date,
            category: header.category,
            featured_image: header.featured_image,
            rendered_body,
            author,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use std::path::Path;

    fn fixture_site(base: &Path) -> Site {
        let config = SiteConfig::default();
        Site {
            posts_dir: base.join(&config.posts_dir),
            authors_dir: base.join(&config.authors_dir),
            base_dir: base.to_path_buf(),
            config,
        }
    }

    fn write_post(dir: &Path, id: &str, date: &str, body: &str) {
        fs::create_dir_all(dir).unwrap();
        let content = format!(
            "---\ntitle: Post {id}\ndate: \"{date}\"\ncategory: Engineering\nfeaturedImage: {id}.jpg\nauthor: jane-doe\n---\n\n{body}\n"
        );
        fs::write(dir.join(format!("{}.md", id)), content).unwrap();
    }

    fn write_author(dir: &Path, id: &str) {
        fs::create_dir_all(dir).unwrap();
        let json = format!(
            r#"{{"name": "Jane Doe", "profile": "/authors/{id}.jpg", "social": ["https://github.com/{id}"]}}"#
        );
        fs::write(dir.join(format!("{}.json", id)), json).unwrap();
    }

    #[test]
    fn test_summaries_sorted_by_date_descending() {
        let tmp = tempfile::tempdir().unwrap();
        let site = fixture_site(tmp.path());
        write_post(&site.posts_dir, "older", "2023-01-10", "Old body.");
        write_post(&site.posts_dir, "newer", "2023-05-01", "New body.");

        let repo = PostRepository::new(&site);
        let summaries = repo.list_summaries().unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].id, "newer");
        assert_eq!(summaries[0].date, "2023-05-01");
        assert_eq!(summaries[1].id, "older");
        for pair in summaries.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn test_summaries_abort_on_malformed_entry() {
        let tmp = tempfile::tempdir().unwrap();
        let site = fixture_site(tmp.path());
        write_post(&site.posts_dir, "good", "2023-05-01", "Body.");
        fs::write(site.posts_dir.join("bad.md"), "No header here.\n").unwrap();

        let repo = PostRepository::new(&site);
        let err = repo.list_summaries().unwrap_err();
        assert!(matches!(err, ContentError::Parse { .. }));
    }

    #[test]
    fn test_summaries_fail_without_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let site = fixture_site(tmp.path());

        let repo = PostRepository::new(&site);
        let err = repo.list_summaries().unwrap_err();
        assert!(matches!(err, ContentError::Storage { .. }));
    }

    #[test]
    fn test_list_ids_strips_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let site = fixture_site(tmp.path());
        write_post(&site.posts_dir, "first-post", "2023-05-01", "Body.");
        write_post(&site.posts_dir, "second-post", "2023-01-10", "Body.");
        // Files without the post extension still yield an identifier
        fs::write(site.posts_dir.join("stray"), "whatever").unwrap();

        let repo = PostRepository::new(&site);
        let mut ids = repo.list_ids().unwrap();
        ids.sort();
        assert_eq!(ids, vec!["first-post", "second-post", "stray"]);
    }

    #[test]
    fn test_resolve_joins_author_and_renders_body() {
        let tmp = tempfile::tempdir().unwrap();
        let site = fixture_site(tmp.path());
        write_post(
            &site.posts_dir,
            "hello",
            "2023-05-01",
            "# Hi\n\n```js\nconst a=1;\n```",
        );
        write_author(&site.authors_dir, "jane-doe");

        let repo = PostRepository::new(&site);
        let post = repo.resolve("hello").unwrap();
        assert_eq!(post.id, "hello");
        assert_eq!(post.title, "Post hello");
        assert_eq!(post.date, "2023-05-01");
        assert_eq!(post.category, "Engineering");
        assert_eq!(post.featured_image, "hello.jpg");
        assert_eq!(post.author.id, "jane-doe");
        assert_eq!(post.author.name, "Jane Doe");
        assert!(post.rendered_body.contains("<h1>Hi</h1>"));
        assert!(post.rendered_body.contains("highlight"));
        assert!(post.rendered_body.contains("const"));
    }

    #[test]
    fn test_resolve_unknown_id() {
        let tmp = tempfile::tempdir().unwrap();
        let site = fixture_site(tmp.path());
        fs::create_dir_all(&site.posts_dir).unwrap();

        let repo = PostRepository::new(&site);
        let err = repo.resolve("missing").unwrap_err();
        assert!(matches!(err, ContentError::NotFound { ref id } if id == "missing"));
    }

    #[test]
    fn test_resolve_missing_author() {
        let tmp = tempfile::tempdir().unwrap();
        let site = fixture_site(tmp.path());
        write_post(&site.posts_dir, "orphan", "2023-05-01", "Body.");
        fs::create_dir_all(&site.authors_dir).unwrap();

        let repo = PostRepository::new(&site);
        let err = repo.resolve("orphan").unwrap_err();
        assert!(matches!(err, ContentError::NotFound { ref id } if id == "jane-doe"));
    }

    #[test]
    fn test_resolve_rendering_is_deterministic() {
        let tmp = tempfile::tempdir().unwrap();
        let site = fixture_site(tmp.path());
        write_post(&site.posts_dir, "hello", "2023-05-01", "# Hi\n\nBody text.");
        write_author(&site.authors_dir, "jane-doe");

        let repo = PostRepository::new(&site);
        let first = repo.resolve("hello").unwrap();
        let second = repo.resolve("hello").unwrap();
        assert_eq!(first.rendered_body, second.rendered_body);
    }
}
