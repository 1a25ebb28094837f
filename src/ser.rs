//! The compiler from block trees to HCL document text.
//!
//! Compilation is a pure, synchronous transform: it borrows the input tree,
//! builds the document into a private buffer and returns the buffer only on
//! success. Errors abort the whole compilation; partial output is never
//! handed out.

use crate::error::{Error, ErrorPath, Result};
use crate::format::FormatOptions;
use crate::ident::is_identifier;
use crate::structure::{Block, Body};
use crate::template::{Segment, Template};
use crate::value::{Map, Value};
use std::io;

/// Compiles a document with the default format options.
pub fn to_string(body: &Body) -> Result<String> {
    to_string_with(body, &FormatOptions::default())
}

/// Compiles a document with the given format options.
pub fn to_string_with(body: &Body, opts: &FormatOptions) -> Result<String> {
    let mut compiler = Compiler::new(opts);

    compiler.compile_body(body)?;

    Ok(compiler.into_output())
}

/// Compiles a document with the default format options and writes it to
/// `writer`.
pub fn to_writer<W>(writer: W, body: &Body) -> Result<()>
where
    W: io::Write,
{
    to_writer_with(writer, body, &FormatOptions::default())
}

/// Compiles a document with the given format options and writes it to
/// `writer`. Nothing is written when compilation fails.
pub fn to_writer_with<W>(mut writer: W, body: &Body, opts: &FormatOptions) -> Result<()>
where
    W: io::Write,
{
    let output = to_string_with(body, opts)?;

    writer.write_all(output.as_bytes())?;

    Ok(())
}

struct Compiler<'a> {
    opts: &'a FormatOptions,
    out: String,
    path: ErrorPath,
}

impl<'a> Compiler<'a> {
    fn new(opts: &'a FormatOptions) -> Self {
        Compiler {
            opts,
            out: String::new(),
            path: ErrorPath::new(),
        }
    }

    fn into_output(self) -> String {
        self.out
    }

    fn compile_body(&mut self, body: &Body) -> Result<()> {
        for (index, block) in body.iter().enumerate() {
            if index > 0 && self.opts.blank_lines {
                self.out.push('\n');
            }

            self.compile_block(index, block, 0)?;
        }

        if !self.opts.trailing_newline && self.out.ends_with('\n') {
            self.out.pop();
        }

        Ok(())
    }

    fn compile_block(&mut self, index: usize, block: &Block, level: usize) -> Result<()> {
        let ident = match block.path().first() {
            None => {
                self.path.push_index(index);
                return Err(Error::invalid_block_path(
                    self.path.clone(),
                    "empty block path",
                ));
            }
            Some(ident) if !is_identifier(ident) => {
                self.path.push_index(index);
                return Err(Error::invalid_block_path(
                    self.path.clone(),
                    format!("`{}` is not a valid block identifier", ident),
                ));
            }
            Some(ident) => ident,
        };

        self.push_indent(level);
        self.out.push_str(ident);

        for label in block.labels() {
            self.out.push(' ');
            encode_string_literal(&mut self.out, label);
        }

        self.out.push_str(" {\n");

        for element in block.path() {
            self.path.push_key(element.as_str());
        }

        let has_attributes = block.attributes().next().is_some();

        self.emit_attributes(block, level + 1)?;

        for (child_index, child) in block.children().iter().enumerate() {
            if self.opts.blank_lines && (child_index > 0 || has_attributes) {
                self.out.push('\n');
            }

            self.compile_block(child_index, child, level + 1)?;
        }

        for _ in block.path() {
            self.path.pop();
        }

        self.push_indent(level);
        self.out.push_str("}\n");

        Ok(())
    }

    fn emit_attributes(&mut self, block: &Block, level: usize) -> Result<()> {
        for (key, value) in block.attributes() {
            if !is_identifier(key) {
                self.path.push_key(key);
                return Err(Error::invalid_attribute_identifier(key, self.path.clone()));
            }

            self.push_indent(level);
            self.out.push_str(key);
            self.out.push_str(" = ");
            self.encode_value(value, level);
            self.out.push('\n');
        }

        Ok(())
    }

    /// Encodes a value starting on a line at the given indentation level.
    /// Multi-line arrays and objects indent their entries one level deeper
    /// and close at `level`.
    fn encode_value(&mut self, value: &Value, level: usize) {
        match value {
            Value::Null => self.out.push_str("null"),
            Value::Bool(true) => self.out.push_str("true"),
            Value::Bool(false) => self.out.push_str("false"),
            Value::Number(num) => self.out.push_str(&num.to_string()),
            Value::String(s) => encode_string_literal(&mut self.out, s),
            Value::Template(template) => self.encode_template(template),
            Value::Variable(var) => {
                self.out.push_str("\"${");
                self.out.push_str(&var.traversal());
                self.out.push_str("}\"");
            }
            Value::RawExpr(raw) => self.out.push_str(raw.as_str()),
            Value::Array(array) => self.encode_array(array, level),
            Value::Object(object) => self.encode_object(object, level),
        }
    }

    fn encode_array(&mut self, array: &[Value], level: usize) {
        if array.is_empty() {
            self.out.push_str("[]");
            return;
        }

        if array.iter().all(is_inline) {
            self.out.push('[');

            for (index, element) in array.iter().enumerate() {
                if index > 0 {
                    self.out.push_str(", ");
                }

                self.encode_value(element, level);
            }

            self.out.push(']');
        } else {
            self.out.push_str("[\n");

            for element in array {
                self.push_indent(level + 1);
                self.encode_value(element, level + 1);
                self.out.push_str(",\n");
            }

            self.push_indent(level);
            self.out.push(']');
        }
    }

    fn encode_object(&mut self, object: &Map<String, Value>, level: usize) {
        if object.is_empty() {
            self.out.push_str("{}");
            return;
        }

        self.out.push_str("{\n");

        for (key, value) in object {
            self.push_indent(level + 1);

            // Object keys are not restricted to the identifier grammar, keys
            // like `kubernetes.io/cluster/name` fall back to quoted strings.
            if is_identifier(key) {
                self.out.push_str(key);
            } else {
                encode_string_literal(&mut self.out, key);
            }

            self.out.push_str(" = ");
            self.encode_value(value, level + 1);
            self.out.push('\n');
        }

        self.push_indent(level);
        self.out.push('}');
    }

    fn encode_template(&mut self, template: &Template) {
        self.out.push('"');

        for segment in template.segments() {
            match segment {
                Segment::Literal(text) => escape_into(&mut self.out, text),
                Segment::Interpolation(expr) => {
                    self.out.push_str("${");
                    self.out.push_str(expr);
                    self.out.push('}');
                }
            }
        }

        self.out.push('"');
    }

    fn push_indent(&mut self, level: usize) {
        for _ in 0..self.opts.indent * level {
            self.out.push(' ');
        }
    }
}

/// True if the value renders on a single line inside an inline array.
fn is_inline(value: &Value) -> bool {
    !matches!(
        value,
        Value::Array(_) | Value::Object(_) | Value::Template(_)
    )
}

fn encode_string_literal(out: &mut String, s: &str) {
    out.push('"');
    escape_into(out, s);
    out.push('"');
}

/// Escapes string content per the HCL string grammar. Template introducers
/// `${` and `%{` are escaped as well, so literal text never produces an
/// active interpolation or directive.
fn escape_into(out: &mut String, s: &str) {
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '$' | '%' if chars.peek() == Some(&'{') => {
                out.push(c);
                out.push(c);
            }
            c if c.is_control() => {
                let mut buf = [0u16; 2];

                for unit in c.encode_utf16(&mut buf) {
                    out.push_str(&format!("\\u{:04x}", unit));
                }
            }
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::value::{RawExpression, Variable};
    use pretty_assertions::assert_eq;

    fn encode(value: Value) -> String {
        let body = vec![Block::new(["x"]).attribute("v", value)];
        let output = to_string(&body).unwrap();

        // Strip `x {\n  v = ` and `\n}\n`.
        output
            .strip_prefix("x {\n  v = ")
            .and_then(|rest| rest.strip_suffix("\n}\n"))
            .unwrap()
            .to_string()
    }

    #[test]
    fn encode_scalars() {
        assert_eq!(encode(Value::Null), "null");
        assert_eq!(encode(Value::from(true)), "true");
        assert_eq!(encode(Value::from(false)), "false");
        assert_eq!(encode(Value::from(42)), "42");
        assert_eq!(encode(Value::from(-1.5)), "-1.5");
        assert_eq!(encode(Value::from(8.0)), "8.0");
        assert_eq!(encode(Value::from("plain")), "\"plain\"");
    }

    #[test]
    fn encode_string_escapes() {
        assert_eq!(
            encode(Value::from("He said \"hi\" \\ bye")),
            r#""He said \"hi\" \\ bye""#
        );
        assert_eq!(encode(Value::from("line\nbreak\tand\r")), r#""line\nbreak\tand\r""#);
        assert_eq!(encode(Value::from("\u{1}")), r#""\u0001""#);
    }

    #[test]
    fn literal_template_introducers_are_inert() {
        assert_eq!(encode(Value::from("a ${not_interp}")), r#""a $${not_interp}""#);
        assert_eq!(encode(Value::from("%{ directive }")), r#""%%{ directive }""#);
        // A `$` not followed by `{` stays as is.
        assert_eq!(encode(Value::from("cost: 5$")), r#""cost: 5$""#);
    }

    #[test]
    fn encode_template_splices() {
        let template = Template::new()
            .literal("name-")
            .interpolation("var.env")
            .literal("-${suffix}");

        assert_eq!(
            encode(Value::from(template)),
            r#""name-${var.env}-$${suffix}""#
        );
    }

    #[test]
    fn encode_variable_reference() {
        assert_eq!(encode(Value::from(Variable::new("env"))), r#""${var.env}""#);
    }

    #[test]
    fn raw_expression_passthrough() {
        assert_eq!(
            encode(Value::from(RawExpression::new(r#"tomap({Name = "x"})"#))),
            r#"tomap({Name = "x"})"#
        );
    }

    #[test]
    fn encode_arrays() {
        assert_eq!(encode(Value::Array(Vec::new())), "[]");
        assert_eq!(
            encode(Value::from(vec![Value::from(1), Value::from("two"), Value::Null])),
            r#"[1, "two", null]"#
        );
    }

    #[test]
    fn encode_nested_array_multi_line() {
        let value = Value::from(vec![
            Value::from(vec![1, 2]),
            Value::from(vec![3]),
        ]);

        assert_eq!(encode(value), "[\n    [1, 2],\n    [3],\n  ]");
    }

    #[test]
    fn encode_objects() {
        assert_eq!(encode(Value::Object(Map::new())), "{}");

        let value = Value::from_iter([
            ("Name", Value::from("web")),
            ("kubernetes.io/cluster/demo", Value::from("owned")),
        ]);

        assert_eq!(
            encode(value),
            "{\n    Name = \"web\"\n    \"kubernetes.io/cluster/demo\" = \"owned\"\n  }"
        );
    }

    #[test]
    fn empty_block() {
        let body = vec![Block::new(["terraform"])];

        assert_eq!(to_string(&body).unwrap(), "terraform {\n}\n");
    }

    #[test]
    fn block_with_labels() {
        let body = vec![Block::new(["resource", "aws_instance", "web"])];

        assert_eq!(
            to_string(&body).unwrap(),
            "resource \"aws_instance\" \"web\" {\n}\n"
        );
    }

    #[test]
    fn attribute_order_is_preserved() {
        let body = vec![Block::new(["x"])
            .attribute("b", 2)
            .attribute("a", 1)
            .attribute("c", 3)];

        assert_eq!(
            to_string(&body).unwrap(),
            "x {\n  b = 2\n  a = 1\n  c = 3\n}\n"
        );
    }

    #[test]
    fn nested_blocks() {
        let body = vec![Block::new(["resource", "aws_instance", "web"])
            .attribute("ami", "ami-123")
            .child(Block::new(["lifecycle"]).attribute("create_before_destroy", true))];

        let expected = r#"resource "aws_instance" "web" {
  ami = "ami-123"

  lifecycle {
    create_before_destroy = true
  }
}
"#;

        assert_eq!(to_string(&body).unwrap(), expected);
    }

    #[test]
    fn blank_line_between_children() {
        let body = vec![Block::new(["x"])
            .child(Block::new(["a"]))
            .child(Block::new(["b"]))];

        assert_eq!(
            to_string(&body).unwrap(),
            "x {\n  a {\n  }\n\n  b {\n  }\n}\n"
        );
    }

    #[test]
    fn document_blank_line_separation() {
        let body = vec![Block::new(["terraform"]), Block::new(["locals"])];

        assert_eq!(
            to_string(&body).unwrap(),
            "terraform {\n}\n\nlocals {\n}\n"
        );
    }

    #[test]
    fn compact_format() {
        let opts = FormatOptions {
            blank_lines: false,
            ..Default::default()
        };

        let body = vec![
            Block::new(["x"]).attribute("a", 1).child(Block::new(["y"])),
            Block::new(["z"]),
        ];

        assert_eq!(
            to_string_with(&body, &opts).unwrap(),
            "x {\n  a = 1\n  y {\n  }\n}\nz {\n}\n"
        );
    }

    #[test]
    fn custom_indent_width() {
        let opts = FormatOptions {
            indent: 4,
            ..Default::default()
        };

        let body = vec![Block::new(["x"]).attribute("a", 1)];

        assert_eq!(to_string_with(&body, &opts).unwrap(), "x {\n    a = 1\n}\n");
    }

    #[test]
    fn no_trailing_newline() {
        let opts = FormatOptions {
            trailing_newline: false,
            ..Default::default()
        };

        let body = vec![Block::new(["terraform"])];

        assert_eq!(to_string_with(&body, &opts).unwrap(), "terraform {\n}");
    }

    #[test]
    fn empty_body() {
        assert_eq!(to_string(&Vec::new()).unwrap(), "");
    }

    #[test]
    fn deterministic_output() {
        let body = vec![Block::new(["resource", "aws_instance", "web"])
            .attribute("tags", Value::from_iter([("Name", "web")]))];

        assert_eq!(to_string(&body).unwrap(), to_string(&body.clone()).unwrap());
    }

    #[test]
    fn empty_block_path_fails() {
        let body = vec![Block::new(["x"]), Block::new(Vec::<String>::new())];
        let err = to_string(&body).unwrap_err();

        match err {
            Error::InvalidBlockPath { path, .. } => assert_eq!(path.to_string(), "[1]"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn invalid_block_keyword_fails() {
        let body = vec![Block::new(["not an ident", "label"])];

        assert!(matches!(
            to_string(&body).unwrap_err(),
            Error::InvalidBlockPath { .. }
        ));
    }

    #[test]
    fn invalid_attribute_identifier_fails() {
        let body = vec![Block::new(["resource", "aws_instance", "web"])
            .attribute("bad key", 1)];

        match to_string(&body).unwrap_err() {
            Error::InvalidAttributeIdentifier { ident, path } => {
                assert_eq!(ident, "bad key");
                assert_eq!(path.to_string(), "resource.aws_instance.web.bad key");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn nested_failure_aborts_whole_document() {
        let body = vec![
            Block::new(["terraform"]),
            Block::new(["resource", "aws_instance", "web"])
                .child(Block::new(Vec::<String>::new())),
        ];

        assert!(to_string(&body).is_err());
    }
}
