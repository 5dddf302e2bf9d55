//! Route path pattern matching.
//!
//! # Responsibilities
//! - Parse route paths (`"all"`, `"edit/:id"`, `"**"`) into segment patterns
//! - Match a pattern against the leading URL segments still unconsumed
//! - Capture `:name` parameters
//!
//! # Design Decisions
//! - Static segments are case-sensitive
//! - A parameter captures exactly one non-empty segment
//! - `**` must be the last segment and captures the whole remainder
//! - No regex: matching is a single pass over the segments

use std::collections::BTreeMap;
use std::fmt;

/// Name under which a wildcard capture is stored.
pub const WILDCARD_PARAM: &str = "**";

/// Error for a route path that cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("parameter segment in `{0}` has no name")]
    UnnamedParam(String),
    #[error("wildcard must be the last segment of `{0}`")]
    WildcardNotLast(String),
    #[error("route path `{0}` contains a query or fragment delimiter")]
    Delimiter(String),
}

/// One segment of a route path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Static(String),
    Param(String),
    Wildcard,
}

/// A parsed route path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

/// Result of matching a pattern against URL segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentMatch {
    /// Number of URL segments consumed.
    pub consumed: usize,
    /// Captured parameters.
    pub params: BTreeMap<String, String>,
}

impl PathPattern {
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        if raw.contains(['?', '#']) {
            return Err(PatternError::Delimiter(raw.to_string()));
        }

        let parts: Vec<&str> = raw.split('/').filter(|s| !s.is_empty()).collect();
        let mut segments = Vec::with_capacity(parts.len());
        for (i, part) in parts.iter().enumerate() {
            let segment = if *part == WILDCARD_PARAM {
                if i + 1 != parts.len() {
                    return Err(PatternError::WildcardNotLast(raw.to_string()));
                }
                Segment::Wildcard
            } else if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(PatternError::UnnamedParam(raw.to_string()));
                }
                Segment::Param(name.to_string())
            } else {
                Segment::Static(part.to_string())
            };
            segments.push(segment);
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Empty path: consumes nothing.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::Wildcard))
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Match against the leading URL segments of `remaining`.
    pub fn match_segments<S: AsRef<str>>(&self, remaining: &[S]) -> Option<SegmentMatch> {
        let mut matched = SegmentMatch::default();

        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Wildcard => {
                    let rest: Vec<&str> = remaining[i..].iter().map(|s| s.as_ref()).collect();
                    matched.params.insert(WILDCARD_PARAM.to_string(), rest.join("/"));
                    matched.consumed = remaining.len();
                    return Some(matched);
                }
                Segment::Static(expected) => {
                    let actual = remaining.get(i)?;
                    if actual.as_ref() != expected.as_str() {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let actual = remaining.get(i)?.as_ref();
                    if actual.is_empty() {
                        return None;
                    }
                    matched.params.insert(name.clone(), actual.to_string());
                }
            }
        }

        matched.consumed = self.segments.len();
        Some(matched)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
