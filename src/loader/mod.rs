//! Control-point file loading.
//!
//! Track paths live in plain text files resolved against a base
//! directory: one `x y z` offset per line, blank lines and `#` comments
//! ignored. Points are returned in file order; decoding them into
//! world space is `track::path`'s job.

use std::fs;
use std::path::Path;

use crate::geom::Float3;

#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    /// A non-comment line that is not exactly three floats.
    Malformed {
        line: usize,
    },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "failed to read track file: {err}"),
            LoadError::Malformed { line } => {
                write!(f, "malformed control point on line {line}")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            LoadError::Malformed { .. } => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}

/// Reads the control-point file `file_name` under `base_dir`.
pub fn load_control_points(base_dir: &Path, file_name: &str) -> Result<Vec<Float3>, LoadError> {
    let text = fs::read_to_string(base_dir.join(file_name))?;
    parse_control_points(&text)
}

/// Parses control points from track-file text.
pub fn parse_control_points(text: &str) -> Result<Vec<Float3>, LoadError> {
    let mut points = Vec::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let x = parse_field(fields.next(), index)?;
        let y = parse_field(fields.next(), index)?;
        let z = parse_field(fields.next(), index)?;
        if fields.next().is_some() {
            return Err(LoadError::Malformed { line: index + 1 });
        }

        points.push(Float3::new(x, y, z));
    }

    log::debug!("loaded {} control points", points.len());
    Ok(points)
}

fn parse_field(field: Option<&str>, index: usize) -> Result<f32, LoadError> {
    field
        .and_then(|s| s.parse::<f32>().ok())
        .ok_or(LoadError::Malformed { line: index + 1 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_points_in_file_order() {
        let text = "1 0 0\n0.5 0 0.5\n-1 2 0\n";
        let points = parse_control_points(text).unwrap();

        assert_eq!(points.len(), 3);
        assert_eq!(points[0], Float3::new(1.0, 0.0, 0.0));
        assert_eq!(points[1], Float3::new(0.5, 0.0, 0.5));
        assert_eq!(points[2], Float3::new(-1.0, 2.0, 0.0));
    }

    #[test]
    fn skips_blank_lines_and_comments() {
        let text = "# loop start\n\n1 0 0\n   \n# midpoint\n0 0 1\n";
        let points = parse_control_points(text).unwrap();
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn reports_malformed_line_numbers() {
        let text = "1 0 0\nnot a point\n";
        let result = parse_control_points(text);
        assert!(matches!(result, Err(LoadError::Malformed { line: 2 })));
    }

    #[test]
    fn rejects_extra_fields() {
        let text = "1 0 0 7\n";
        let result = parse_control_points(text);
        assert!(matches!(result, Err(LoadError::Malformed { line: 1 })));
    }

    #[test]
    fn rejects_truncated_triples() {
        let text = "1 0\n";
        let result = parse_control_points(text);
        assert!(matches!(result, Err(LoadError::Malformed { line: 1 })));
    }

    #[test]
    fn empty_file_yields_no_points() {
        assert!(parse_control_points("").unwrap().is_empty());
    }
}
