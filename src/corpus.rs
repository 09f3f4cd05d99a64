//! Builds a [`LinkGraph`] out of a directory of HTML pages.

use crate::{LinkGraph, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;
use walkdir::WalkDir;

lazy_static! {
    static ref HREF_RE: Regex = Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).unwrap();
}

/// Reads every `*.html` file directly under `dir`.
///
/// The file name is the page name. Anchors pointing to pages outside `dir`
/// and anchors pointing back to the page itself are dropped.
pub fn crawl<P: AsRef<Path>>(dir: P) -> Result<LinkGraph> {
    let dir = dir.as_ref();
    let mut pages = vec![];
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if !name.ends_with(".html") {
            continue;
        }
        let contents = std::fs::read_to_string(entry.path())?;
        let links = extract_links(&contents);
        log::debug!("{name}: {} anchors", links.len());
        pages.push((name, links));
    }
    log::debug!("crawled {} pages from {}", pages.len(), dir.display());
    Ok(LinkGraph::from_links(pages))
}

pub fn extract_links(contents: &str) -> Vec<String> {
    HREF_RE
        .captures_iter(contents)
        .map(|cap| cap[1].to_string())
        .collect()
}
