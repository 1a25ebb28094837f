//! The Value enum, the tagged union of all attribute value shapes.

mod from;

use crate::template::Template;

pub use crate::number::Number;

/// The map type used for objects. Preserves insertion order.
pub type Map<K, V> = indexmap::IndexMap<K, V>;

/// Represents any valid HCL attribute value.
#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    /// Represents the HCL null value.
    Null,
    /// Represents an HCL boolean.
    Bool(bool),
    /// Represents an HCL number, either integer or float.
    Number(Number),
    /// Represents an HCL string. Encoded fully literally: template
    /// introducers in the text are escaped so the parsed value round-trips.
    String(String),
    /// Represents a string template mixing literal text and interpolations.
    Template(Template),
    /// Represents an HCL array.
    Array(Vec<Value>),
    /// Represents an HCL object.
    Object(Map<String, Value>),
    /// Represents a reference to a Terraform variable, encoded as a quoted
    /// `"${var.name}"` interpolation.
    Variable(Variable),
    /// Represents raw Terraform expression text, encoded verbatim and
    /// unquoted.
    RawExpr(RawExpression),
}

impl Default for Value {
    fn default() -> Value {
        Value::Null
    }
}

impl Value {
    /// If the `Value` is a String, returns the associated str. Returns None
    /// otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the `Value` is a Bool, returns the associated bool. Returns None
    /// otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the `Value` is a Number, returns the associated `Number`. Returns
    /// None otherwise.
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }

    /// If the `Value` is an Array, returns the associated vector. Returns
    /// None otherwise.
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    /// If the `Value` is an Object, returns the associated map. Returns None
    /// otherwise.
    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns true if the `Value` is a Null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true if the `Value` is a String.
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// Returns true if the `Value` is an Array.
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Returns true if the `Value` is an Object.
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Returns a short description of the value's kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Template(_) => "template",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Variable(_) => "variable",
            Self::RawExpr(_) => "raw expression",
        }
    }
}

/// A reference to a Terraform variable.
///
/// Carries the variable name; in value position it encodes as the quoted
/// interpolation `"${var.<name>}"`. Any other traversal or function call goes
/// through [`RawExpression`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    name: String,
}

impl Variable {
    /// Creates a reference to the Terraform variable `name`.
    pub fn new<T>(name: T) -> Self
    where
        T: Into<String>,
    {
        Self { name: name.into() }
    }

    /// The name of the referenced variable.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full traversal expression, e.g. `var.env`.
    pub fn traversal(&self) -> String {
        format!("var.{}", self.name)
    }
}

/// Raw Terraform expression text.
///
/// The content is opaque to this crate: it is emitted into the output
/// verbatim and unquoted, and never validated against the Terraform
/// expression grammar. Malformed expressions surface when Terraform parses
/// the generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawExpression {
    expr: String,
}

impl RawExpression {
    /// Creates a raw expression from the given text.
    pub fn new<T>(expr: T) -> Self
    where
        T: Into<String>,
    {
        Self { expr: expr.into() }
    }

    /// The expression text.
    pub fn as_str(&self) -> &str {
        &self.expr
    }

    /// Consumes the expression, returning the inner text.
    pub fn into_inner(self) -> String {
        self.expr
    }
}
