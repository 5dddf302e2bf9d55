//! Navigation path normalization.
//!
//! # Responsibilities
//! - Turn a raw path (`"/notes//edit/42?tab=1"`) into clean segments
//! - Resolve relative links against the URL a view is mounted at
//! - Segment-aware prefix checks for active highlighting
//!
//! # Design Decisions
//! - Parsing goes through `url` so `.`/`..`, query and fragment follow WHATWG rules
//! - Segments stay percent-encoded; parameters are captured as written in the URL
//! - Empty segments are dropped, so `/notes/` and `/notes` are the same path

use std::fmt;

use serde::{Serialize, Serializer};
use url::Url;

const BASE: &str = "shell://app/";

/// Error produced when a path cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid navigation path `{path}`: {reason}")]
pub struct PathError {
    pub path: String,
    pub reason: String,
}

/// An absolute, normalized navigation path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NavPath {
    segments: Vec<String>,
}

impl NavPath {
    /// The root path `/`.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a path. Relative input is taken relative to the root.
    pub fn parse(input: &str) -> Result<Self, PathError> {
        Self::root().join(input)
    }

    /// Resolve `link` against this path treated as a directory.
    ///
    /// `/notes` joined with `edit/1` gives `/notes/edit/1`; a leading `/`
    /// in `link` ignores the base.
    ///
    /// Links carrying a scheme (`https:`, `mailto:`) leave the shell and are
    /// rejected.
    pub fn join(&self, link: &str) -> Result<Self, PathError> {
        if let Ok(external) = Url::parse(link) {
            return Err(PathError {
                path: link.to_string(),
                reason: format!("external `{}:` link", external.scheme()),
            });
        }
        let base = self.to_base_url().map_err(|e| PathError {
            path: self.to_string(),
            reason: e.to_string(),
        })?;
        let target = if link.starts_with('/') {
            format!("/{}", link.trim_start_matches('/'))
        } else {
            link.to_string()
        };
        let url = base.join(&target).map_err(|e| PathError {
            path: link.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::from_url(&url))
    }

    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments
                .into_iter()
                .map(Into::into)
                .filter(|s: &String| !s.is_empty())
                .collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// True when `prefix`'s segments are a leading run of this path's segments.
    pub fn starts_with(&self, prefix: &NavPath) -> bool {
        self.segments.starts_with(&prefix.segments)
    }

    fn to_base_url(&self) -> Result<Url, url::ParseError> {
        let mut base = String::from(BASE);
        for segment in &self.segments {
            base.push_str(segment);
            base.push('/');
        }
        Url::parse(&base)
    }

    fn from_url(url: &Url) -> Self {
        match url.path_segments() {
            Some(segments) => Self::from_segments(segments),
            None => Self::root(),
        }
    }
}

impl fmt::Display for NavPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

impl Serialize for NavPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
