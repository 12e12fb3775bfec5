use std::fmt;
use std::path::PathBuf;

/// Summary of one successful generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub path: PathBuf,
    pub tests_written: usize,
    pub bytes_written: u64,
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "wrote {} tests ({} bytes) to {}",
            self.tests_written,
            self.bytes_written,
            self.path.display()
        )
    }
}
