use std::path::Path;

use chrono::NaiveDate;
use spdlog::prelude::*;

use crate::error::{Result, SitemapError};
use crate::sitemap::Sitemap;
use crate::storage::{self, InputStats};

fn report_input(input: &Path, stats: &InputStats) {
    println!(
        "Read {} total lines from {}",
        stats.total_lines,
        input.display()
    );
    println!("Found {} valid URLs", stats.valid);
    if stats.empty > 0 {
        println!("Filtered out {} empty lines", stats.empty);
    }
}

pub fn generate(input: &Path, output: &Path, lastmod: NaiveDate) -> Result<usize> {
    let (urls, stats) = storage::read_urls(input)?;
    report_input(input, &stats);

    let sitemap = Sitemap::build(urls, lastmod);
    if sitemap.is_empty() {
        return Err(SitemapError::NoValidEntries {
            path: input.to_path_buf(),
        });
    }

    for entry in sitemap.entries() {
        trace!(
            "builder: loc={} changefreq={} priority={}",
            entry.loc,
            entry.changefreq,
            entry.priority
        );
    }

    let xml = sitemap.to_xml().map_err(|source| SitemapError::OutputWrite {
        path: output.to_path_buf(),
        source,
    })?;
    storage::write(output, &xml)?;

    info!(
        "builder: wrote {} entries to {} lastmod={}",
        sitemap.len(),
        output.to_string_lossy(),
        sitemap.lastmod()
    );
    Ok(sitemap.len())
}

/// Runs [`generate`] and reports any failure; 0 means nothing was written.
pub fn create_sitemap(input: &Path, output: &Path, lastmod: NaiveDate) -> usize {
    match generate(input, output, lastmod) {
        Ok(count) => count,
        Err(err) => {
            error!("{}", err);
            if let SitemapError::InputNotFound { .. } = err {
                println!("Make sure the file is in the same directory as this script.");
            }
            0
        }
    }
}
