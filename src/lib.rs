mod config;
mod error;
mod generator;
mod report;
mod telemetry;
mod variant;

pub use config::{DEFAULT_TEST_COUNT, GeneratorConfig};
pub use error::Error;
pub use generator::{generate, write_tests};
pub use report::GenerationReport;
pub use telemetry::setup_logging;
pub use variant::Variant;

/// Generates the benchmark file of `variant` in the current working directory.
///
/// This is what the `gen-gtest-test` and `gen-lightest-test` binaries run: the variant's
/// header, [`DEFAULT_TEST_COUNT`] test declarations and its footer, written to
/// [`Variant::output_file_name`]. An existing file is overwritten.
///
/// # Errors
///
/// Any file-system failure while creating, writing or syncing the file is returned as
/// [`Error::Io`]. Nothing is retried and a partially written file is left in place.
///
/// # Example
///
/// ```no_run
/// use bench_gen::{Variant, generate_variant};
///
/// let report = generate_variant(Variant::Lightest).unwrap();
/// assert_eq!(report.tests_written, 1000);
/// ```
///
/// Library callers who need a different count, location or template build a
/// [`GeneratorConfig`] and call [`generate`] directly:
///
/// ```no_run
/// use bench_gen::{GeneratorConfig, Variant, generate};
///
/// let config = GeneratorConfig::for_variant(Variant::Gtest)
///     .with_test_count(3)
///     .in_dir("target/bench");
/// generate(&config).unwrap();
/// ```
pub fn generate_variant(variant: Variant) -> Result<GenerationReport, Error> {
    generate(&GeneratorConfig::for_variant(variant))
}
