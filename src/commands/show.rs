//! Show a single resolved post

use anyhow::Result;

use crate::Site;

/// Resolve a post by identifier and print it
pub fn run(site: &Site, id: &str) -> Result<()> {
    let post = site.posts().resolve(id)?;

    println!("{}", post.title);
    println!("{} - {}", post.category, post.date);
    println!("by {} [{}]", post.author.name, post.author.id);
    for link in &post.author.social {
        println!("  {}", link);
    }
    println!();
    println!("{}", post.rendered_body);

    Ok(())
}
