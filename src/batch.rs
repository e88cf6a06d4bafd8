//! Batch runs over directories of puzzle files
//!
//! Two report layouts:
//!
//! - **part2**: every algorithm on every file of one directory, full human
//!   report per case
//! - **part3**: every algorithm on the depth buckets `L8`, `L15` and `L24`
//!   (subdirectories), averaged time and node count per bucket
//!
//! Each case runs in-process with its own statistics and time budget.

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{info, warn};

use crate::error::{InputError, Result};
use crate::solver::{Algorithm, OutputFormat, Solver};

/// Subdirectories scanned by a part3 run
pub const DEPTH_BUCKETS: [&str; 3] = ["L8", "L15", "L24"];

const RULE: &str = "---------------";

/// Report layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Part2,
    Part3,
}

impl Part {
    /// Report file written when none is given
    pub fn default_output(self) -> &'static str {
        match self {
            Part::Part2 => "part2.txt",
            Part::Part3 => "part3.txt",
        }
    }
}

impl FromStr for Part {
    type Err = InputError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "part2" => Ok(Part::Part2),
            "part3" => Ok(Part::Part3),
            _ => Err(InputError::InvalidPart(s.to_string())),
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::Part2 => f.write_str("part2"),
            Part::Part3 => f.write_str("part3"),
        }
    }
}

/// Mean elapsed seconds and node count over one bucket
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketAverage {
    pub time_secs: f64,
    pub nodes: f64,
    /// Cases that contributed
    pub cases: usize,
}

/// Regular files directly inside `dir`, sorted by file name.
pub fn puzzle_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => InputError::FileNotFound(dir.to_path_buf()),
        _ => InputError::Io {
            path: dir.to_path_buf(),
            source,
        },
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Runs every algorithm over a set of puzzle files.
#[derive(Debug, Clone, Copy, Default)]
pub struct Batch {
    solver: Solver,
}

impl Batch {
    pub fn new(solver: Solver) -> Self {
        Self { solver }
    }

    pub fn run<W: Write>(&self, part: Part, dir: &Path, out: &mut W) -> Result<()> {
        match part {
            Part::Part2 => self.run_part2(dir, out),
            Part::Part3 => self.run_part3(dir, out),
        }
    }

    /// Full report for every (algorithm, file) pair.
    ///
    /// A file that cannot be loaded gets its error message in place of a report.
    pub fn run_part2<W: Write>(&self, dir: &Path, out: &mut W) -> Result<()> {
        let files = puzzle_files(dir)?;
        for algorithm in Algorithm::ALL {
            writeln!(out, "Algorithm: {algorithm}")?;
            writeln!(out, "{RULE}")?;
            for file in &files {
                info!("{algorithm} on {}", file.display());
                writeln!(out, "{}:", display_name(file))?;
                match self.solver.solve_file(file, algorithm) {
                    Ok(report) => writeln!(out, "{}\n", report.render(OutputFormat::Human))?,
                    Err(err) => {
                        warn!("{}: {err}", file.display());
                        writeln!(out, "{err}\n")?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Per-bucket averages for every algorithm.
    ///
    /// Missing or empty buckets are skipped with a warning.
    pub fn run_part3<W: Write>(&self, dir: &Path, out: &mut W) -> Result<()> {
        for algorithm in Algorithm::ALL {
            writeln!(out, "Algorithm: {algorithm}")?;
            writeln!(out, "{RULE}")?;
            for bucket in DEPTH_BUCKETS {
                let bucket_dir = dir.join(bucket);
                if !bucket_dir.is_dir() {
                    warn!("skipping missing bucket {}", bucket_dir.display());
                    continue;
                }
                let files = puzzle_files(&bucket_dir)?;
                let Some(avg) = self.average(&files, algorithm)? else {
                    warn!("no solvable puzzles in {}", bucket_dir.display());
                    continue;
                };
                writeln!(out, "{bucket}:")?;
                writeln!(out, "Average time: {}", avg.time_secs)?;
                writeln!(out, "Average nodes: {}\n", avg.nodes)?;
            }
        }
        Ok(())
    }

    /// Average time and nodes of `algorithm` over `files`.
    ///
    /// Cases rejected as unsolvable do not count. Returns `None` when no case ran.
    pub fn average(&self, files: &[PathBuf], algorithm: Algorithm) -> Result<Option<BucketAverage>> {
        let mut total_time = 0.0;
        let mut total_nodes = 0u64;
        let mut cases = 0usize;

        for file in files {
            info!("{algorithm} on {}", file.display());
            let report = self.solver.solve_file(file, algorithm)?;
            match report.timing() {
                Some((elapsed, nodes)) => {
                    total_time += elapsed.as_secs_f64();
                    total_nodes += nodes;
                    cases += 1;
                }
                None => warn!("{}: not solvable, left out of the average", file.display()),
            }
        }

        Ok((cases > 0).then(|| BucketAverage {
            time_secs: total_time / cases as f64,
            nodes: total_nodes as f64 / cases as f64,
            cases,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const ONE_MOVE: &str = "1 2 3\n4 5 6\n7 _ 8\n";
    const TWO_MOVES: &str = "1 2 3\n4 5 6\n_ 7 8\n";
    const UNSOLVABLE: &str = "1 2 3\n4 5 6\n8 7 _\n";

    fn write(dir: &Path, name: &str, text: &str) {
        fs::write(dir.join(name), text).unwrap();
    }

    #[test]
    fn test_parse_part() {
        assert_eq!("part2".parse::<Part>().unwrap(), Part::Part2);
        assert_eq!("PART3".parse::<Part>().unwrap(), Part::Part3);
        assert!(matches!(
            "part1".parse::<Part>(),
            Err(InputError::InvalidPart(p)) if p == "part1"
        ));
        assert_eq!(Part::Part3.default_output(), "part3.txt");
    }

    #[test]
    fn test_puzzle_files_sorted_and_files_only() {
        let dir = tempdir().unwrap();
        write(dir.path(), "b.txt", ONE_MOVE);
        write(dir.path(), "a.txt", ONE_MOVE);
        fs::create_dir(dir.path().join("sub")).unwrap();

        let files = puzzle_files(dir.path()).unwrap();
        let names: Vec<String> = files.iter().map(|p| display_name(p)).collect();
        assert_eq!(names, ["a.txt", "b.txt"]);
    }

    #[test]
    fn test_puzzle_files_missing_dir() {
        let dir = tempdir().unwrap();
        let err = puzzle_files(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Input(InputError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_part2_report_layout() {
        let dir = tempdir().unwrap();
        write(dir.path(), "easy.txt", ONE_MOVE);
        write(dir.path(), "odd.txt", UNSOLVABLE);

        let mut out = Vec::new();
        Batch::default().run(Part::Part2, dir.path(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.matches("Algorithm: ").count(), 5);
        assert!(text.starts_with("Algorithm: bfs\n---------------\neasy.txt:\nPath: L\n"));
        assert_eq!(text.matches("odd.txt:\nThe given puzzle is not solvable\n").count(), 5);
        assert!(text.contains("Algorithm: h3\n"));
    }

    #[test]
    fn test_part2_bad_file_reported_inline() {
        let dir = tempdir().unwrap();
        write(dir.path(), "bad.txt", "1 2 3");

        let mut out = Vec::new();
        Batch::default().run_part2(dir.path(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("bad.txt:\nexpected 9 tiles, found 3\n"));
    }

    #[test]
    fn test_average_skips_unsolvable() {
        let dir = tempdir().unwrap();
        write(dir.path(), "1.txt", ONE_MOVE);
        write(dir.path(), "2.txt", TWO_MOVES);
        write(dir.path(), "3.txt", UNSOLVABLE);
        let files = puzzle_files(dir.path()).unwrap();

        let avg = Batch::default()
            .average(&files, Algorithm::AStarManhattan)
            .unwrap()
            .unwrap();
        assert_eq!(avg.cases, 2);
        assert!(avg.nodes > 0.0);
        assert!(avg.time_secs >= 0.0);
    }

    #[test]
    fn test_average_of_nothing() {
        let avg = Batch::default().average(&[], Algorithm::Bfs).unwrap();
        assert_eq!(avg, None);
    }

    #[test]
    fn test_part3_report_layout() {
        let dir = tempdir().unwrap();
        let l8 = dir.path().join("L8");
        let l15 = dir.path().join("L15");
        fs::create_dir(&l8).unwrap();
        fs::create_dir(&l15).unwrap();
        write(&l8, "a.txt", ONE_MOVE);
        write(&l8, "b.txt", TWO_MOVES);
        write(&l15, "a.txt", TWO_MOVES);
        // L24 missing on purpose

        let mut out = Vec::new();
        Batch::default().run(Part::Part3, dir.path(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.matches("L8:\nAverage time: ").count(), 5);
        assert_eq!(text.matches("L15:\nAverage time: ").count(), 5);
        assert!(!text.contains("L24:"));
        assert_eq!(text.matches("Average nodes: ").count(), 10);
    }
}
