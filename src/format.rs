//! Formatting configuration for the compiler.

/// Options that control the layout of generated HCL.
///
/// All indentation and separator decisions flow from this one struct, so the
/// formatting surface is a single tunable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Number of spaces per indentation level.
    pub indent: usize,
    /// Emit blank lines between top-level blocks, between consecutive child
    /// blocks and between a block's attributes and its first child.
    pub blank_lines: bool,
    /// Terminate the document with a newline.
    pub trailing_newline: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            blank_lines: true,
            trailing_newline: true,
        }
    }
}

impl FormatOptions {
    /// Creates the default format options.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A builder for [`FormatOptions`].
#[derive(Debug, Clone, Default)]
pub struct FormatBuilder {
    opts: FormatOptions,
}

impl FormatBuilder {
    /// Creates a builder initialized with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of spaces per indentation level.
    pub fn indent(&mut self, indent: usize) -> &mut Self {
        self.opts.indent = indent;
        self
    }

    /// Toggles blank line separation.
    pub fn blank_lines(&mut self, blank_lines: bool) -> &mut Self {
        self.opts.blank_lines = blank_lines;
        self
    }

    /// Toggles the trailing newline.
    pub fn trailing_newline(&mut self, trailing_newline: bool) -> &mut Self {
        self.opts.trailing_newline = trailing_newline;
        self
    }

    /// Builds the configured [`FormatOptions`].
    pub fn build(&self) -> FormatOptions {
        self.opts.clone()
    }
}
