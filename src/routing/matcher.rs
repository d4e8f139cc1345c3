//! Asset path matching.
//!
//! # Responsibilities
//! - Match a path's file extension against the image extension list
//! - Match exact asset names from the allow-list
//! - Combine conditions with OR semantics
//!
//! # Design Decisions
//! - Extension matching is case-insensitive
//! - Allow-list matching is exact (after stripping the leading slash)
//! - Purely local: no matcher ever touches the network

use crate::config::AssetConfig;

/// Trait for matching catch-all paths.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this condition.
    fn matches(&self, path: &str) -> bool;
}

/// Matches the final segment's file extension.
#[derive(Debug, Clone)]
pub struct ExtensionMatcher {
    extensions: Vec<String>,
}

impl ExtensionMatcher {
    /// Extensions are normalized to lowercase.
    pub fn new(extensions: &[String]) -> Self {
        Self {
            extensions: extensions.iter().map(|e| e.to_ascii_lowercase()).collect(),
        }
    }
}

impl Matcher for ExtensionMatcher {
    fn matches(&self, path: &str) -> bool {
        let name = last_segment(path).to_ascii_lowercase();
        self.extensions
            .iter()
            .any(|ext| name.len() > ext.len() && name.ends_with(ext.as_str()))
    }
}

/// Matches an exact asset path.
#[derive(Debug, Clone)]
pub struct AllowListMatcher {
    names: Vec<String>,
}

impl AllowListMatcher {
    pub fn new(names: &[String]) -> Self {
        Self {
            names: names
                .iter()
                .map(|n| n.trim_start_matches('/').to_string())
                .collect(),
        }
    }
}

impl Matcher for AllowListMatcher {
    fn matches(&self, path: &str) -> bool {
        let path = path.trim_start_matches('/');
        self.names.iter().any(|n| n == path)
    }
}

/// Combines multiple matchers with OR semantics.
#[derive(Debug)]
pub struct AnyMatcher {
    matchers: Vec<Box<dyn Matcher>>,
}

impl AnyMatcher {
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }
}

impl Matcher for AnyMatcher {
    fn matches(&self, path: &str) -> bool {
        self.matchers.iter().any(|m| m.matches(path))
    }
}

/// Decides which catch-all paths are image assets.
#[derive(Debug)]
pub struct AssetMatcher {
    inner: AnyMatcher,
    favicon: String,
}

impl AssetMatcher {
    pub fn from_config(config: &AssetConfig) -> Self {
        Self {
            inner: AnyMatcher::new(vec![
                Box::new(ExtensionMatcher::new(&config.extensions)),
                Box::new(AllowListMatcher::new(&config.allow_list)),
            ]),
            favicon: config.favicon.to_ascii_lowercase(),
        }
    }

    /// True when the path should be fetched from the asset origin.
    pub fn is_asset(&self, path: &str) -> bool {
        self.inner.matches(path)
    }

    /// True when the path names the favicon, which skips the content type check.
    pub fn is_favicon(&self, path: &str) -> bool {
        last_segment(path).eq_ignore_ascii_case(&self.favicon)
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}
