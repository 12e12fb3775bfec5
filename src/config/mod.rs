//! Module defining the configuration of a single generator run.

use std::path::{Path, PathBuf};

use crate::variant::Variant;


/// Number of test declarations the generator binaries emit.
pub const DEFAULT_TEST_COUNT: usize = 1000;

/// Everything a generator run needs: where to write, how many lines, and the text around them.
///
/// `line_template` receives the zero-based index and returns one complete line, newline included.
#[derive(Debug, Clone)]
pub struct GeneratorConfig<F> {
    pub output_path: PathBuf,
    pub test_count: usize,
    pub header: String,
    pub line_template: F,
    pub footer: String,
}

impl<F> GeneratorConfig<F>
where
    F: Fn(usize) -> String,
{
    /// A configuration without header or footer.
    pub fn new(output_path: impl Into<PathBuf>, test_count: usize, line_template: F) -> Self {
        Self {
            output_path: output_path.into(),
            test_count,
            header: String::new(),
            line_template,
            footer: String::new(),
        }
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = footer.into();
        self
    }

    pub fn with_test_count(mut self, test_count: usize) -> Self {
        self.test_count = test_count;
        self
    }

    /// Moves the output file into `dir`, keeping its file name.
    pub fn in_dir(mut self, dir: impl AsRef<Path>) -> Self {
        let file_name = self.output_path.file_name().map(ToOwned::to_owned);
        self.output_path = match file_name {
            Some(name) => dir.as_ref().join(name),
            None => dir.as_ref().to_path_buf(),
        };
        self
    }
}

impl GeneratorConfig<fn(usize) -> String> {
    /// The hardcoded configuration of a variant: [`DEFAULT_TEST_COUNT`] tests written to the
    /// variant's file in the current working directory.
    pub fn for_variant(variant: Variant) -> Self {
        GeneratorConfig::new(
            variant.output_file_name(),
            DEFAULT_TEST_COUNT,
            variant.line_template(),
        )
        .with_header(variant.header())
        .with_footer(variant.footer())
    }
}
