//! Identifier derivation from storage file names

/// Extension for post source files
pub const POST_EXT: &str = ".md";

/// Extension for author data files
pub const AUTHOR_EXT: &str = ".json";

/// Derive a content identifier from a storage file name by stripping the
/// namespace's known extension. Names without the extension pass through
/// unchanged, so any file in the store yields a usable identifier.
pub fn derive_id<'a>(storage_name: &'a str, extension: &str) -> &'a str {
    storage_name.strip_suffix(extension).unwrap_or(storage_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_known_extension() {
        assert_eq!(derive_id("foo.md", POST_EXT), "foo");
        assert_eq!(derive_id("jane-doe.json", AUTHOR_EXT), "jane-doe");
    }

    #[test]
    fn test_passthrough_without_extension() {
        assert_eq!(derive_id("foo", POST_EXT), "foo");
        assert_eq!(derive_id("notes.txt", POST_EXT), "notes.txt");
    }

    #[test]
    fn test_only_suffix_is_stripped() {
        assert_eq!(derive_id("foo.md.md", POST_EXT), "foo.md");
        assert_eq!(derive_id("md", POST_EXT), "md");
    }
}
