//! Expected pipeline artifacts.
//!
//! The containerized pipeline writes three files into the output directory.
//! The launcher only names them in its completion report; it never creates
//! or verifies them.

use std::path::{Path, PathBuf};

/// One file the pipeline is expected to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Artifact {
    /// Human-readable label used in the completion report.
    pub label: &'static str,
    /// File name within the output directory.
    pub file_name: &'static str,
}

impl Artifact {
    /// Path of this artifact under `output_dir`.
    pub fn path_under(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(self.file_name)
    }
}

/// All expected artifacts, in report order.
pub const EXPECTED: [Artifact; 3] = [
    Artifact {
        label: "Gantt chart",
        file_name: "gantt_chart.html",
    },
    Artifact {
        label: "Timeline analysis",
        file_name: "timeline_analysis.html",
    },
    Artifact {
        label: "Chart data",
        file_name: "gantt_data.json",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_under_joins_output_dir() {
        let artifact = EXPECTED[0];
        assert_eq!(
            artifact.path_under(Path::new("output")),
            PathBuf::from("output/gantt_chart.html")
        );
    }

    #[test]
    fn expected_covers_chart_timeline_and_data() {
        let names: Vec<&str> = EXPECTED.iter().map(|a| a.file_name).collect();
        assert_eq!(
            names,
            vec![
                "gantt_chart.html",
                "timeline_analysis.html",
                "gantt_data.json"
            ]
        );
    }
}
