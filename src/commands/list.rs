//! List site content

use anyhow::Result;

use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            let summaries = site.posts().list_summaries()?;
            println!("Posts ({}):", summaries.len());
            for summary in summaries {
                println!("  {} - {} [{}]", summary.date, summary.title, summary.id);
            }
        }
        "author" | "authors" => {
            let authors = site.authors().list_all()?;
            println!("Authors ({}):", authors.len());
            for (id, author) in authors {
                println!("  {} [{}]", author.name, id);
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, author", content_type);
        }
    }

    Ok(())
}
