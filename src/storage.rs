use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

use spdlog::prelude::*;

use crate::error::{Result, SitemapError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputStats {
    pub total_lines: usize,
    pub valid: usize,
    pub empty: usize,
}

pub fn read(path: &Path) -> Result<String> {
    let buf = fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => SitemapError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => SitemapError::InputRead {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let data = String::from_utf8(buf).map_err(|e| SitemapError::InputRead {
        path: path.to_path_buf(),
        source: io::Error::new(ErrorKind::InvalidData, e),
    })?;
    trace!(
        "storage: read {} len={}",
        path.to_string_lossy(),
        data.len()
    );
    Ok(data)
}

// Breaks on "\r\n", "\n" and a lone "\r"; a trailing break does not start a new line.
fn lines(data: &str) -> impl Iterator<Item = &str> {
    let mut rest = data;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\n', '\r']) {
            Some(i) => {
                let line = &rest[..i];
                let skip = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[i + skip..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

pub fn split_urls(data: &str) -> (Vec<String>, InputStats) {
    let mut urls = Vec::new();
    let mut stats = InputStats::default();
    for line in lines(data) {
        stats.total_lines += 1;
        match line.trim() {
            "" => stats.empty += 1,
            url => urls.push(url.to_string()),
        }
    }
    stats.valid = urls.len();
    (urls, stats)
}

pub fn read_urls(path: &Path) -> Result<(Vec<String>, InputStats)> {
    let data = read(path)?;
    Ok(split_urls(&data))
}

pub fn write(path: &Path, data: &str) -> Result<()> {
    trace!(
        "storage: write {} len={}",
        path.to_string_lossy(),
        data.len()
    );
    let to_output_err = |source| SitemapError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_output_err)?;
    }
    fs::write(path, data).map_err(to_output_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_urls_trims_and_counts_blank_lines() {
        let (urls, stats) = split_urls("  https://a.com \n\n\t\nhttps://a.com/blog/x\r\n");
        assert_eq!(urls, vec!["https://a.com", "https://a.com/blog/x"]);
        assert_eq!(
            stats,
            InputStats {
                total_lines: 4,
                valid: 2,
                empty: 2
            }
        );
    }

    #[test]
    fn split_urls_breaks_on_lone_carriage_return() {
        let (urls, stats) = split_urls("https://a.com\rhttps://a.com/blog/x\r");
        assert_eq!(urls, vec!["https://a.com", "https://a.com/blog/x"]);
        assert_eq!(stats.total_lines, 2);

        let (urls, stats) = split_urls("a\r\rb\r\nc");
        assert_eq!(urls, vec!["a", "b", "c"]);
        assert_eq!(
            stats,
            InputStats {
                total_lines: 4,
                valid: 3,
                empty: 1
            }
        );
    }

    #[test]
    fn split_urls_keeps_duplicates_in_order() {
        let (urls, _) = split_urls("b\na\nb\n");
        assert_eq!(urls, vec!["b", "a", "b"]);
    }

    #[test]
    fn read_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_urls(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, SitemapError::InputNotFound { .. }));
    }

    #[test]
    fn read_invalid_utf8_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, [0xff, 0xfe, b'\n']).unwrap();
        match read_urls(&path).unwrap_err() {
            SitemapError::InputRead { source, .. } => {
                assert_eq!(source.kind(), ErrorKind::InvalidData)
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("sitemap.xml");
        write(&path, "<urlset/>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<urlset/>");
    }

    #[test]
    fn write_into_directory_is_output_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = write(dir.path(), "x").unwrap_err();
        assert!(matches!(err, SitemapError::OutputWrite { .. }));
    }
}
