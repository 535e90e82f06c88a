//! Create a new post

use anyhow::Result;
use std::fs;

use crate::Site;

/// Create a new post file with a scaffolded metadata header
pub fn run(site: &Site, title: &str, author: Option<&str>) -> Result<()> {
    let now = chrono::Local::now();

    fs::create_dir_all(&site.posts_dir)?;

    let slug = slug::slugify(title);
    let filename = site
        .config
        .new_post_name
        .replace(":title", &slug)
        .replace(":year", &now.format("%Y").to_string())
        .replace(":month", &now.format("%m").to_string())
        .replace(":day", &now.format("%d").to_string());

    let file_path = site.posts_dir.join(&filename);
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let author = author.unwrap_or(&site.config.author);
    let content = format!(
        r#"---
title: "{}"
date: "{}"
category: ""
featuredImage: ""
author: "{}"
---

"#,
        title,
        now.format("%Y-%m-%d"),
        author
    );

    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);

    Ok(())
}
