//! Namespace paths.
//!
//! A namespace path is an ordered, validated list of segments. Segments are
//! stored individually and only joined with `.` when a declaration block is
//! rendered, so no component ever does string surgery on a dotted name.

use std::fmt;

/// Validated namespace path with at least one segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespacePath {
    segments: Vec<String>,
}

impl NamespacePath {
    /// Build a path from pre-split segments.
    ///
    /// Fails if the list is empty or any segment is not a valid identifier.
    pub fn new(segments: Vec<String>) -> Result<Self, PathError> {
        if segments.is_empty() {
            return Err(PathError::Empty);
        }
        for segment in &segments {
            if !is_valid_segment(segment) {
                return Err(PathError::InvalidSegment(segment.clone()));
            }
        }
        Ok(Self { segments })
    }

    /// Parse a dotted path such as "com.example.app".
    pub fn from_dotted(dotted: &str) -> Result<Self, PathError> {
        Self::new(dotted.split('.').map(str::to_string).collect())
    }

    /// Return a new path with one more segment appended.
    pub fn child(&self, segment: impl Into<String>) -> Result<Self, PathError> {
        let segment = segment.into();
        if !is_valid_segment(&segment) {
            return Err(PathError::InvalidSegment(segment));
        }
        let mut segments = self.segments.clone();
        segments.push(segment);
        Ok(Self { segments })
    }

    /// The path segments in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for NamespacePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// Returns true if the segment is usable as a namespace component.
pub(crate) fn is_valid_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Error building a namespace path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A path must have at least one segment.
    Empty,
    /// Segment is not a valid identifier.
    InvalidSegment(String),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::Empty => write!(f, "namespace path must have at least one segment"),
            PathError::InvalidSegment(segment) => {
                write!(f, "invalid namespace segment `{segment}`")
            }
        }
    }
}

impl std::error::Error for PathError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_with_dots() {
        let path = NamespacePath::from_dotted("com.example.app").unwrap();
        assert_eq!(path.to_string(), "com.example.app");
        assert_eq!(path.segments().len(), 3);
    }

    #[test]
    fn test_single_segment() {
        let path = NamespacePath::from_dotted("schema_public").unwrap();
        assert_eq!(path.to_string(), "schema_public");
    }

    #[test]
    fn test_empty_path_rejected() {
        assert_eq!(NamespacePath::new(vec![]), Err(PathError::Empty));
    }

    #[test]
    fn test_invalid_segments_rejected() {
        assert_eq!(
            NamespacePath::from_dotted("a..b"),
            Err(PathError::InvalidSegment(String::new()))
        );
        assert_eq!(
            NamespacePath::from_dotted("a.1b"),
            Err(PathError::InvalidSegment("1b".into()))
        );
        assert_eq!(
            NamespacePath::from_dotted("a.b-c"),
            Err(PathError::InvalidSegment("b-c".into()))
        );
    }

    #[test]
    fn test_underscore_and_digits_allowed() {
        assert!(NamespacePath::from_dotted("_private.v2.schema_public").is_ok());
    }

    #[test]
    fn test_child_appends() {
        let path = NamespacePath::from_dotted("com.example").unwrap();
        let child = path.child("schema_public").unwrap();
        assert_eq!(child.to_string(), "com.example.schema_public");
        assert_eq!(path.to_string(), "com.example");
    }

    #[test]
    fn test_child_validates() {
        let path = NamespacePath::from_dotted("com").unwrap();
        assert!(path.child("9lives").is_err());
    }
}
