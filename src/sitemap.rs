use std::io;

use chrono::NaiveDate;
use quick_xml::se::Serializer;
use serde::Serialize;

use crate::classify::{classify, ChangeFreq, Priority};

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const LASTMOD_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlEntry {
    pub loc: String,
    pub changefreq: ChangeFreq,
    pub priority: Priority,
}

impl UrlEntry {
    pub fn new(loc: String) -> Self {
        let (changefreq, priority) = classify(&loc);
        UrlEntry {
            loc,
            changefreq,
            priority,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Sitemap {
    lastmod: NaiveDate,
    entries: Vec<UrlEntry>,
}

#[derive(Serialize)]
struct UrlSetXml<'a> {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,
    url: Vec<UrlXml<'a>>,
}

#[derive(Serialize)]
struct UrlXml<'a> {
    loc: &'a str,
    lastmod: &'a str,
    changefreq: &'static str,
    priority: &'static str,
}

impl Sitemap {
    /// Every entry shares `lastmod`; order and duplicates follow `urls`.
    pub fn build<I>(urls: I, lastmod: NaiveDate) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Sitemap {
            lastmod,
            entries: urls.into_iter().map(UrlEntry::new).collect(),
        }
    }

    pub fn entries(&self) -> &[UrlEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lastmod(&self) -> String {
        self.lastmod.format(LASTMOD_FORMAT).to_string()
    }

    pub fn to_xml(&self) -> io::Result<String> {
        let lastmod = self.lastmod();
        let urlset = UrlSetXml {
            xmlns: SITEMAP_NS,
            url: self
                .entries
                .iter()
                .map(|entry| UrlXml {
                    loc: &entry.loc,
                    lastmod: &lastmod,
                    changefreq: entry.changefreq.as_str(),
                    priority: entry.priority.as_str(),
                })
                .collect(),
        };

        let mut body = String::new();
        let mut ser = Serializer::with_root(&mut body, Some("urlset")).map_err(io::Error::other)?;
        ser.indent(' ', 2);
        urlset.serialize(ser).map_err(io::Error::other)?;

        Ok(format!("{XML_DECLARATION}\n{body}"))
    }
}
