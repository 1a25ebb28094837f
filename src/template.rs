//! String templates mixing literal text with interpolated expressions.

/// A string value built from literal and interpolation segments.
///
/// Literal segments are escaped when the template is encoded, including the
/// `${` and `%{` template introducers. Interpolation segments are spliced in
/// verbatim as `${expr}`. This keeps active interpolations and literal text
/// strictly separated instead of relying on escaping rules inside a single
/// string.
///
/// ```
/// use hclgen::Template;
///
/// let greeting = Template::new()
///     .literal("Hello, ")
///     .interpolation("var.name")
///     .literal("!");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Template {
    segments: Vec<Segment>,
}

/// A single segment of a [`Template`].
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text, escaped on output.
    Literal(String),
    /// A Terraform expression spliced into the string as `${expr}`.
    Interpolation(String),
}

impl Template {
    /// Creates an empty template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a literal text segment.
    pub fn literal<T>(mut self, text: T) -> Self
    where
        T: Into<String>,
    {
        self.segments.push(Segment::Literal(text.into()));
        self
    }

    /// Appends an interpolated expression segment.
    pub fn interpolation<T>(mut self, expr: T) -> Self
    where
        T: Into<String>,
    {
        self.segments.push(Segment::Interpolation(expr.into()));
        self
    }

    /// The segments of this template, in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns true if the template has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
