//! Plain-text point files.
//!
//! ```text
//! 3
//! -1 2
//! 0 0
//! 9 10
//! ```
//!
//! Line 1 is the number of points, every following line is one `x y` pair.
//! Cluster labels are not stored.

use crate::error::TestkitError;
use log::info;
use ndarray::{Array2, ArrayView2};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Write points to any writer: the count line, then one `x y` line per row.
pub fn write_points_to<W: Write>(writer: &mut W, points: &ArrayView2<i64>) -> std::io::Result<()> {
    writeln!(writer, "{}", points.nrows())?;
    for row in points.outer_iter() {
        writeln!(writer, "{} {}", row[0], row[1])?;
    }
    Ok(())
}

/// Create or overwrite `path` with the given points.
///
/// A failed write may leave the file truncated.
pub fn write_points(path: impl AsRef<Path>, points: &ArrayView2<i64>) -> Result<(), TestkitError> {
    let path = path.as_ref();
    if points.ncols() != 2 {
        return Err(TestkitError::InvalidArgument(format!(
            "points must have 2 columns, got {}",
            points.ncols()
        )));
    }

    let file = File::create(path).map_err(|e| TestkitError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_points_to(&mut writer, points).map_err(|e| TestkitError::io(path, e))?;
    writer.flush().map_err(|e| TestkitError::io(path, e))?;

    info!("Points saved to {}", path.display());
    Ok(())
}

/// Parse points from a reader.
///
/// Blank lines are ignored. The header count must match the number of point lines.
pub fn read_points_from<R: BufRead>(reader: R) -> Result<Array2<i64>, TestkitError> {
    let mut expected: Option<usize> = None;
    let mut coords: Vec<i64> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| TestkitError::parse(line_no, e.to_string()))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if expected.is_none() {
            let count = line.parse::<usize>().map_err(|_| {
                TestkitError::parse(line_no, format!("expected point count, found '{}'", line))
            })?;
            expected = Some(count);
            continue;
        }

        let mut fields = line.split_whitespace();
        let (x, y) = match (fields.next(), fields.next(), fields.next()) {
            (Some(x), Some(y), None) => (x, y),
            _ => {
                return Err(TestkitError::parse(
                    line_no,
                    format!("expected '<x> <y>', found '{}'", line),
                ))
            }
        };
        for field in [x, y] {
            let value = field.parse::<i64>().map_err(|_| {
                TestkitError::parse(line_no, format!("'{}' is not an integer", field))
            })?;
            coords.push(value);
        }
    }

    let expected = expected.ok_or_else(|| TestkitError::parse(1, "missing point count"))?;
    let n_points = coords.len() / 2;
    if n_points != expected {
        return Err(TestkitError::parse(
            1,
            format!("header says {} points but {} were found", expected, n_points),
        ));
    }

    Array2::from_shape_vec((n_points, 2), coords)
        .map_err(|e| TestkitError::parse(1, e.to_string()))
}

/// Read a points file written by [`write_points`]
pub fn read_points(path: impl AsRef<Path>) -> Result<Array2<i64>, TestkitError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| TestkitError::io(path, e))?;
    read_points_from(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_write_points_format() {
        let points = array![[-1, 2], [0, 0], [9, 10]];
        let mut buf = Vec::new();
        write_points_to(&mut buf, &points.view()).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), "3\n-1 2\n0 0\n9 10\n");
    }

    #[test]
    fn test_write_points_empty() {
        let points = Array2::<i64>::zeros((0, 2));
        let mut buf = Vec::new();
        write_points_to(&mut buf, &points.view()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "0\n");
    }

    #[test]
    fn test_read_points() {
        let input = "3\n-1 2\n0   0\n\n9 10\n";
        let points = read_points_from(input.as_bytes()).unwrap();
        assert_eq!(points, array![[-1, 2], [0, 0], [9, 10]]);
    }

    #[test]
    fn test_read_points_count_mismatch() {
        let result = read_points_from("4\n1 1\n2 2\n".as_bytes());
        assert!(matches!(result, Err(TestkitError::Parse { .. })));
    }

    #[test]
    fn test_read_points_bad_line() {
        match read_points_from("2\n1 1\n2 x\n".as_bytes()) {
            Err(TestkitError::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected parse error, got {:?}", other),
        }
        assert!(read_points_from("1\n1 2 3\n".as_bytes()).is_err());
        assert!(read_points_from("1\n1.5 2\n".as_bytes()).is_err());
    }

    #[test]
    fn test_read_points_missing_header() {
        assert!(matches!(
            read_points_from("".as_bytes()),
            Err(TestkitError::Parse { .. })
        ));
        assert!(matches!(
            read_points_from("abc\n".as_bytes()),
            Err(TestkitError::Parse { .. })
        ));
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_points("/nonexistent/dir/points.txt");
        assert!(matches!(result, Err(TestkitError::Io { .. })));
    }
}
