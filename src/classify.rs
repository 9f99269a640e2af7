use std::fmt;

const BLOG_SEGMENT: &str = "/blog/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Monthly,
    Weekly,
}

impl ChangeFreq {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Weekly => "weekly",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Home,
    Blog,
    Page,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Home => "1.0",
            Priority::Blog => "0.8",
            Priority::Page => "0.9",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_blog(url: &str) -> bool {
    url.to_lowercase().contains(BLOG_SEGMENT)
}

pub fn change_freq(url: &str) -> ChangeFreq {
    if is_blog(url) {
        ChangeFreq::Monthly
    } else {
        ChangeFreq::Weekly
    }
}

// First match wins: the root check runs before the blog check.
pub fn priority(url: &str) -> Priority {
    if url.ends_with(".com") || url.ends_with(".com/") {
        Priority::Home
    } else if is_blog(url) {
        Priority::Blog
    } else {
        Priority::Page
    }
}

pub fn classify(url: &str) -> (ChangeFreq, Priority) {
    (change_freq(url), priority(url))
}
