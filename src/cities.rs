//! City list reader: one `x y` pair per line.

use std::fs;
use std::path::Path;

use crate::cost::Point;
use crate::error::{AcoError, AcoResult};

pub fn load_points(path: impl AsRef<Path>) -> AcoResult<Vec<Point>> {
    let text = fs::read_to_string(path)?;
    parse_points(&text)
}

/// Parses whitespace-separated coordinates. Blank lines and lines starting
/// with `#` are skipped.
pub fn parse_points(text: &str) -> AcoResult<Vec<Point>> {
    let mut points = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let parse_err = |message: String| AcoError::Parse {
            line: index + 1,
            message,
        };
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(parse_err(format!(
                "expected 2 coordinates, found {}",
                parts.len()
            )));
        }
        let x = parts[0]
            .parse::<f64>()
            .map_err(|e| parse_err(format!("bad x coordinate {:?}: {}", parts[0], e)))?;
        let y = parts[1]
            .parse::<f64>()
            .map_err(|e| parse_err(format!("bad y coordinate {:?}: {}", parts[1], e)))?;
        points.push(Point::new(x, y));
    }
    Ok(points)
}
