//! Sample input boundary.
//!
//! A sample is given either inline as a JSON array of numbers or as the
//! path of a file holding one. Anything else is rejected.

use std::fs;
use std::path::Path;

use crate::error::{Result, SignificanceError};

/// Parses a sample from an inline JSON array or a JSON file path.
///
/// # Examples
///
/// ```
/// use u_significance::input::parse_sample;
///
/// assert_eq!(parse_sample("[1, 2.5, -3]").unwrap(), vec![1.0, 2.5, -3.0]);
/// assert!(parse_sample("one, two").is_err());
/// ```
pub fn parse_sample(arg: &str) -> Result<Vec<f64>> {
    let inline_err = match serde_json::from_str::<Vec<f64>>(arg) {
        Ok(sample) => return Ok(sample),
        Err(e) => e,
    };

    let path = Path::new(arg);
    if path.is_file() {
        let contents = fs::read_to_string(path)?;
        return serde_json::from_str(&contents).map_err(|e| SignificanceError::InvalidInput {
            source_desc: format!("file {}", path.display()),
            reason: e.to_string(),
        });
    }

    Err(SignificanceError::InvalidInput {
        source_desc: format!("'{arg}'"),
        reason: format!("not a JSON array of numbers or a readable file ({inline_err})"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn inline_array() {
        let s = parse_sample(" [0.5, 1e-3, 2] ").expect("should parse");
        assert_eq!(s, vec![0.5, 0.001, 2.0]);
    }

    #[test]
    fn empty_array() {
        assert!(parse_sample("[]").expect("should parse").is_empty());
    }

    #[test]
    fn rejects_non_numeric() {
        let err = parse_sample(r#"[1, "two"]"#).unwrap_err();
        assert!(matches!(err, SignificanceError::InvalidInput { .. }));
    }

    #[test]
    fn rejects_object() {
        assert!(matches!(
            parse_sample(r#"{"a": 1}"#),
            Err(SignificanceError::InvalidInput { .. })
        ));
    }

    #[test]
    fn reads_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "[3, 4, 5]").expect("write");
        let path = file.path().to_str().expect("utf-8 path");
        assert_eq!(parse_sample(path).expect("should parse"), vec![3.0, 4.0, 5.0]);
    }

    #[test]
    fn malformed_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "3 4 5").expect("write");
        let path = file.path().to_str().expect("utf-8 path");
        let err = parse_sample(path).unwrap_err();
        assert!(err.to_string().contains("file"), "{err}");
    }
}
