use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Summary of one `hull` run, written next to the output as `<stem>.report.json`.
#[derive(Clone, Debug, Serialize)]
pub struct HullReport {
    pub code_rev: String,
    pub input: String,
    pub output: String,
    pub dim: usize,
    pub threads: usize,
    pub input_count: usize,
    pub hull_count: usize,
    pub reduction_pct: f64,
    pub area: Option<f64>,
    pub perimeter: Option<f64>,
    pub elapsed_ms: f64,
}

/// Percentage of points removed going from `before` to `after`.
pub fn reduction_pct(before: usize, after: usize) -> f64 {
    if before == 0 {
        return 0.0;
    }
    (1.0 - after as f64 / before as f64) * 100.0
}

/// Write `report` as pretty JSON beside `artifact`; returns the sidecar path.
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, report: &HullReport) -> Result<PathBuf> {
    let path = sidecar_path(artifact.as_ref());
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report dir {}", parent.display()))?;
        }
    }
    fs::write(&path, serde_json::to_vec_pretty(report)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "hull".to_string());
    artifact.with_file_name(format!("{stem}.report.json"))
}

/// Revision baked in at build time or set at runtime via `GIT_COMMIT`.
pub fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|s| !s.is_empty()))
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    fn sample(output: &str) -> HullReport {
        HullReport {
            code_rev: "abc".into(),
            input: "in.csv".into(),
            output: output.into(),
            dim: 2,
            threads: 4,
            input_count: 4,
            hull_count: 3,
            reduction_pct: reduction_pct(4, 3),
            area: Some(6.0),
            perimeter: None,
            elapsed_ms: 0.5,
        }
    }

    #[test]
    fn sidecar_path_replaces_extension() {
        let derived = sidecar_path(Path::new("/tmp/out/hull.csv"));
        assert_eq!(derived, Path::new("/tmp/out/hull.report.json"));
    }

    #[test]
    fn reduction_handles_empty_input() {
        assert_eq!(reduction_pct(0, 0), 0.0);
        assert_eq!(reduction_pct(4, 3), 25.0);
        assert_eq!(reduction_pct(10, 10), 0.0);
    }

    #[test]
    fn write_sidecar_round_trips_json() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("hull.csv");
        let path = write_sidecar(&artifact, &sample(&artifact.to_string_lossy())).unwrap();
        assert!(path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["hull_count"], 3);
        assert_eq!(parsed["area"], 6.0);
        assert!(parsed["perimeter"].is_null());
        assert_eq!(parsed["output"], artifact.to_string_lossy().as_ref());
    }
}
