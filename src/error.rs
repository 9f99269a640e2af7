use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("{} not found!", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("failed reading {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no URLs found in {}!", .path.display())]
    NoValidEntries { path: PathBuf },

    #[error("failed writing sitemap {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SitemapError>;
