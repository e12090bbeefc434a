//! Command implementations.

pub mod analyze;
pub mod outline;

pub use self::analyze::{execute_analyze, AnalysisReport};
pub use self::outline::execute_outline;

use crate::error::Result;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read the input text from a file, or from stdin when no file is given.
pub fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;
    use std::io::Write;

    #[test]
    fn test_read_input_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Compost feeds the soil.").unwrap();
        assert_eq!(read_input(Some(file.path())).unwrap(), "Compost feeds the soil.");
    }

    #[test]
    fn test_read_input_missing_file() {
        let result = read_input(Some(Path::new("/nonexistent/notes.txt")));
        assert!(matches!(result, Err(crate::CliError::Io(_))));
    }
}
