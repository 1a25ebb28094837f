//! hclgen is a command line tool to compile JSON or YAML infrastructure
//! descriptions into Terraform-compatible HCL.

#![deny(missing_docs)]

mod args;

use anyhow::{Context, Result};
use args::{Encoding, Options};
use clap::Parser;
use hclgen::{Body, FormatBuilder};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read input file: {}", path.display())),
        _ => {
            let mut buf = String::new();

            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read from stdin")?;

            Ok(buf)
        }
    }
}

fn deserialize(data: &str, encoding: Encoding) -> Result<Body> {
    match encoding {
        Encoding::Json => serde_json::from_str(data)
            .with_context(|| format!("failed to deserialize {}", encoding)),
        Encoding::Yaml => serde_yaml::from_str(data)
            .with_context(|| format!("failed to deserialize {}", encoding)),
    }
}

fn main() -> Result<()> {
    let opts = Options::parse();

    let encoding = opts
        .input_encoding
        .or_else(|| opts.file.as_deref().and_then(Encoding::from_path))
        .context("unable to detect input encoding, please provide it explicitly via -i")?;

    let data = read_input(opts.file.as_deref())?;
    let body = deserialize(&data, encoding)?;

    let format = FormatBuilder::new()
        .indent(opts.indent)
        .blank_lines(!opts.compact)
        .trailing_newline(!opts.no_trailing_newline)
        .build();

    let output = hclgen::to_string_with(&body, &format)?;

    match &opts.output_file {
        Some(path) => fs::write(path, output)
            .with_context(|| format!("failed to write output file: {}", path.display())),
        None => {
            io::stdout().write_all(output.as_bytes())?;
            Ok(())
        }
    }
}
