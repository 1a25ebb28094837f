//! Defines the `Error` and `Result` types used by this crate.

use std::fmt;
use thiserror::Error;

/// A type alias for `Result<T, Error>`.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The error returned by all fallible operations within this crate.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// Represents a generic error message.
    #[error("{0}")]
    Message(String),

    /// The block path of a block is empty or its keyword is not a valid
    /// identifier.
    #[error("invalid block path at `{path}`: {reason}")]
    InvalidBlockPath {
        /// Location of the offending block within the document.
        path: ErrorPath,
        /// Human readable description of what is wrong with the path.
        reason: String,
    },

    /// An attribute key does not match the HCL identifier grammar.
    #[error("invalid attribute identifier `{ident}` at `{path}`")]
    InvalidAttributeIdentifier {
        /// The offending attribute key.
        ident: String,
        /// Location of the attribute within the document.
        path: ErrorPath,
    },

    /// A value of an unrecognized shape was encountered while converting
    /// untyped input into the data model.
    #[error("unsupported attribute value kind `{kind}` at `{path}`")]
    UnsupportedValueKind {
        /// Description of the unsupported value shape.
        kind: String,
        /// Location of the value within the document.
        path: ErrorPath,
    },

    /// An escape marker carries expression text that cannot possibly be a
    /// valid Terraform expression, e.g. the empty string.
    #[error("malformed expression in `{marker}` marker at `{path}`")]
    MalformedExpression {
        /// The marker the expression was found in (`$var` or `$func`).
        marker: String,
        /// Location of the marker within the document.
        path: ErrorPath,
    },

    /// Represents generic IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Error emitted by serde_json.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Error emitted by serde_yaml.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    pub(crate) fn invalid_block_path<T>(path: ErrorPath, reason: T) -> Self
    where
        T: AsRef<str>,
    {
        Self::InvalidBlockPath {
            path,
            reason: reason.as_ref().to_string(),
        }
    }

    pub(crate) fn invalid_attribute_identifier<T>(ident: T, path: ErrorPath) -> Self
    where
        T: AsRef<str>,
    {
        Self::InvalidAttributeIdentifier {
            ident: ident.as_ref().to_string(),
            path,
        }
    }

    pub(crate) fn unsupported_value_kind<T>(kind: T, path: ErrorPath) -> Self
    where
        T: AsRef<str>,
    {
        Self::UnsupportedValueKind {
            kind: kind.as_ref().to_string(),
            path,
        }
    }

    pub(crate) fn malformed_expression<T>(marker: T, path: ErrorPath) -> Self
    where
        T: AsRef<str>,
    {
        Self::MalformedExpression {
            marker: marker.as_ref().to_string(),
            path,
        }
    }
}

/// A single segment of an [`ErrorPath`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A block path element, attribute key or object key.
    Key(String),
    /// A position within an array or within the document's top-level blocks.
    Index(usize),
}

/// The location of an error within a document, as the sequence of block path
/// elements, attribute keys and array indices leading from the document root
/// to the failing node.
///
/// Renders flat-key style, e.g. `resource.aws_instance.web.tags[1]`. An empty
/// path renders as `$`, the document root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorPath {
    segments: Vec<PathSegment>,
}

impl ErrorPath {
    /// Creates an empty path pointing at the document root.
    pub fn new() -> Self {
        Self::default()
    }

    /// The segments of this path, from the document root to the error site.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns true if the path points at the document root.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub(crate) fn push_key<T>(&mut self, key: T)
    where
        T: Into<String>,
    {
        self.segments.push(PathSegment::Key(key.into()));
    }

    pub(crate) fn push_index(&mut self, index: usize) {
        self.segments.push(PathSegment::Index(index));
    }

    pub(crate) fn pop(&mut self) {
        self.segments.pop();
    }
}

impl fmt::Display for ErrorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("$");
        }

        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }

                    f.write_str(key)?;
                }
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }

        Ok(())
    }
}
