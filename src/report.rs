//! Parser for the text report printed by the external k-means program.
//!
//! Only two line shapes matter:
//!
//! ```text
//! **Cluster 0 (12 points) Center : (1.5, 2.0)
//! (1,2) (2,2) (1,3)
//! ```
//!
//! A header opens a cluster and the `(x,y)` lines right after it are its
//! members. Anything else is skipped.

use crate::error::TestkitError;
use log::debug;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

const HEADER_PREFIX: &str = "**Cluster";

/// One cluster read from a report: its center and member points
#[derive(Debug, Clone, PartialEq)]
pub struct ReportCluster {
    pub center: (f64, f64),
    pub points: Vec<(i64, i64)>,
}

impl ReportCluster {
    pub fn new(center_x: f64, center_y: f64) -> Self {
        Self {
            center: (center_x, center_y),
            points: Vec::new(),
        }
    }
}

enum ParseState {
    Scanning,
    Collecting(ReportCluster),
}

fn center_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"Center\s*:\s*\(([^,()]*),([^,()]*)\)").expect("center pattern is valid")
    })
}

fn point_list_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\((.*)\)$").expect("point list pattern is valid"))
}

fn parse_header(line: &str, line_no: usize) -> Result<ReportCluster, TestkitError> {
    let caps = center_pattern().captures(line).ok_or_else(|| {
        TestkitError::parse(line_no, format!("cluster header without 'Center : (x, y)': '{}'", line.trim()))
    })?;

    let coord = |idx: usize| -> Result<f64, TestkitError> {
        let raw = caps[idx].trim();
        raw.parse::<f64>()
            .map_err(|_| TestkitError::parse(line_no, format!("invalid center coordinate '{}'", raw)))
    };

    Ok(ReportCluster::new(coord(1)?, coord(2)?))
}

fn parse_point_line(
    line: &str,
    line_no: usize,
    points: &mut Vec<(i64, i64)>,
) -> Result<(), TestkitError> {
    let trimmed = line.trim();
    let caps = point_list_pattern()
        .captures(trimmed)
        .ok_or_else(|| TestkitError::parse(line_no, format!("unterminated point list: '{}'", trimmed)))?;

    for segment in caps[1].split(") (") {
        let segment = segment.trim_matches(&['(', ')'][..]);
        let parsed = segment.split_once(',').and_then(|(x, y)| {
            Some((x.trim().parse::<i64>().ok()?, y.trim().parse::<i64>().ok()?))
        });
        match parsed {
            Some(point) => points.push(point),
            None => {
                return Err(TestkitError::parse(
                    line_no,
                    format!("invalid point '({})'", segment),
                ))
            }
        }
    }

    Ok(())
}

fn scan(line: &str, line_no: usize) -> Result<ParseState, TestkitError> {
    if line.starts_with(HEADER_PREFIX) {
        Ok(ParseState::Collecting(parse_header(line, line_no)?))
    } else {
        Ok(ParseState::Scanning)
    }
}

/// Parse a cluster report into clusters in file order.
///
/// # Errors
///
/// Returns `Parse` for a header lacking `Center : (x, y)` or a point that is
/// not an integer pair. No partial result is returned.
pub fn parse_report(text: &str) -> Result<Vec<ReportCluster>, TestkitError> {
    let mut clusters = Vec::new();
    let mut state = ParseState::Scanning;

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        state = match state {
            ParseState::Collecting(mut cluster) if line.starts_with('(') => {
                parse_point_line(line, line_no, &mut cluster.points)?;
                ParseState::Collecting(cluster)
            }
            ParseState::Collecting(cluster) => {
                clusters.push(cluster);
                scan(line, line_no)?
            }
            ParseState::Scanning => scan(line, line_no)?,
        };
    }

    if let ParseState::Collecting(cluster) = state {
        clusters.push(cluster);
    }

    debug!(
        "Parsed {} clusters, {} points",
        clusters.len(),
        clusters.iter().map(|c| c.points.len()).sum::<usize>()
    );
    Ok(clusters)
}

/// Read and parse a cluster report file
pub fn read_report(path: impl AsRef<Path>) -> Result<Vec<ReportCluster>, TestkitError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| TestkitError::io(path, e))?;
    parse_report(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_clusters() {
        let report = "**Cluster 0 Center : (1.0, 2.0)\n(3,4) (5,6)\n**Cluster 1 Center : (10.0,10.0)\n(11,11)";
        let clusters = parse_report(report).unwrap();

        assert_eq!(
            clusters,
            vec![
                ReportCluster {
                    center: (1.0, 2.0),
                    points: vec![(3, 4), (5, 6)],
                },
                ReportCluster {
                    center: (10.0, 10.0),
                    points: vec![(11, 11)],
                },
            ]
        );
    }

    #[test]
    fn test_parse_skips_preamble_and_trailer() {
        let report = "\
K-means finished in 12 iterations
Total points: 3

**Cluster 0 (2 points) Center : (0.5, -1.25)
(0,-1) (1,-2)
Inertia: 4.2
(99,99)
**Cluster 1 (1 points) Center : (7, 8)
(7,8)
Done.
";
        let clusters = parse_report(report).unwrap();
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].center, (0.5, -1.25));
        assert_eq!(clusters[0].points, vec![(0, -1), (1, -2)]);
        assert_eq!(clusters[1].center, (7.0, 8.0));
        assert_eq!(clusters[1].points, vec![(7, 8)]);
    }

    #[test]
    fn test_parse_kmeans_program_output() {
        // Exact shape printed by the k-means binary: no space before '(',
        // a trailing space after the last point, a bare newline for an empty cluster
        let report = concat!(
            "Initialization Time: 0.000120 seconds\n",
            "end at iter :3\n",
            "Total 3 iterations.\n",
            "**Cluster 0 ****Center :(1.000000,2.000000)\n",
            "(1,2) (1,3) (2,1) \n",
            "**Cluster 1 ****Center :(40.500000,-3.250000)\n",
            "\n",
            "**Cluster 2 ****Center :(10.000000,10.000000)\n",
            "(10,10) \n",
            "K-Means Execution Time: 0.000310 seconds\n",
            "Sqrt of Sum of Squared Distances (SSD): 2.449490\n",
        );
        let clusters = parse_report(report).unwrap();

        assert_eq!(
            clusters,
            vec![
                ReportCluster {
                    center: (1.0, 2.0),
                    points: vec![(1, 2), (1, 3), (2, 1)],
                },
                ReportCluster {
                    center: (40.5, -3.25),
                    points: vec![],
                },
                ReportCluster {
                    center: (10.0, 10.0),
                    points: vec![(10, 10)],
                },
            ]
        );
    }

    #[test]
    fn test_parse_multiple_point_lines() {
        let report = "**Cluster 0 Center : (0.0, 0.0)\n(1,1) (2,2)\n(3,3)\n( -4 , 5 )";
        let clusters = parse_report(report).unwrap();
        assert_eq!(clusters[0].points, vec![(1, 1), (2, 2), (3, 3), (-4, 5)]);
    }

    #[test]
    fn test_parse_header_without_points() {
        let report = "**Cluster 0 Center : (1.0, 1.0)\n**Cluster 1 Center : (2.0, 2.0)\n";
        let clusters = parse_report(report).unwrap();
        assert_eq!(clusters.len(), 2);
        assert!(clusters.iter().all(|c| c.points.is_empty()));
    }

    #[test]
    fn test_parse_empty_report() {
        assert!(parse_report("").unwrap().is_empty());
        assert!(parse_report("no clusters here\n(1,2)\n").unwrap().is_empty());
    }

    #[test]
    fn test_header_without_center_fails() {
        match parse_report("intro\n**Cluster 0 has no center\n(1,1)") {
            Err(TestkitError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_center_value_fails() {
        let result = parse_report("**Cluster 0 Center : (abc, 1.0)");
        assert!(matches!(result, Err(TestkitError::Parse { .. })));
    }

    #[test]
    fn test_non_integer_point_fails() {
        let result = parse_report("**Cluster 0 Center : (1.0, 1.0)\n(1,2) (3.5,4)");
        match result {
            Err(TestkitError::Parse { line, message }) => {
                assert_eq!(line, 2);
                assert!(message.contains("3.5,4"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_unterminated_point_line_fails() {
        let result = parse_report("**Cluster 0 Center : (1.0, 1.0)\n(1,2) (3,4");
        assert!(matches!(result, Err(TestkitError::Parse { .. })));
    }
}
