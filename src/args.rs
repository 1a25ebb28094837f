//! Command line arguments for hclgen.

use clap::{Parser, ValueEnum, ValueHint};
use std::fmt;
use std::path::{Path, PathBuf};

/// Compile a JSON or YAML infrastructure description into Terraform HCL.
///
/// The input document is an array of block objects, each with a `block` path,
/// an `attributes` map and optional nested `child` blocks. Inside attribute
/// values, `{"$var": "name"}` references the Terraform variable `var.name`
/// and `{"$func": "expr"}` embeds raw expression text verbatim.
#[derive(Parser, Debug)]
#[command(name = "hclgen", version)]
pub struct Options {
    /// Input file. Reads from stdin if omitted or `-`.
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Set the input encoding. If absent the encoding is detected from the
    /// input file extension.
    #[arg(short = 'i', long, value_enum)]
    pub input_encoding: Option<Encoding>,

    /// Output file. Writes to stdout if omitted.
    #[arg(short = 'o', long, value_hint = ValueHint::FilePath)]
    pub output_file: Option<PathBuf>,

    /// Number of spaces per indentation level.
    #[arg(long, default_value_t = 2)]
    pub indent: usize,

    /// Do not emit blank lines between blocks.
    #[arg(long)]
    pub compact: bool,

    /// Do not terminate the document with a newline.
    #[arg(long)]
    pub no_trailing_newline: bool,
}

/// Supported input encodings.
#[derive(ValueEnum, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Encoding {
    /// JSON input.
    Json,
    /// YAML input.
    #[value(alias = "yml")]
    Yaml,
}

impl Encoding {
    /// Detects the encoding from a file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Encoding> {
        let ext = path.as_ref().extension()?.to_str()?;

        Self::from_extension(ext)
    }

    fn from_extension(ext: &str) -> Option<Encoding> {
        match ext {
            "json" => Some(Encoding::Json),
            "yaml" | "yml" => Some(Encoding::Yaml),
            _ => None,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Json => f.write_str("JSON"),
            Encoding::Yaml => f.write_str("YAML"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn encoding_from_path() {
        assert_eq!(Encoding::from_path("infra.json"), Some(Encoding::Json));
        assert_eq!(Encoding::from_path("infra.yaml"), Some(Encoding::Yaml));
        assert_eq!(Encoding::from_path("infra.yml"), Some(Encoding::Yaml));
        assert_eq!(Encoding::from_path("infra.tf"), None);
        assert_eq!(Encoding::from_path("infra"), None);
    }
}
