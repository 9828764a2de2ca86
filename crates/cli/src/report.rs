use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::json;

/// Run parameters recorded next to a written plan.
pub struct Params {
    pub cake: String,
    pub children: usize,
    pub resolution: usize,
    pub tolerance: f64,
    pub feasible: bool,
    pub chords: usize,
}

/// Write `<artifact>.report.json` describing how the plan was produced.
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, params: Params) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let path = report_path(artifact);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report dir {}", parent.display()))?;
        }
    }
    let doc = json!({
        "params": {
            "cake": params.cake,
            "children": params.children,
            "resolution": params.resolution,
            "tolerance": params.tolerance,
        },
        "outcome": {
            "feasible": params.feasible,
            "chords": params.chords,
        },
        "outputs": [artifact.to_string_lossy()],
    });
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn report_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("plan"));
    let mut name = stem;
    name.push(".report.json");
    artifact.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn report_path_rewrites_extension() {
        let base = Path::new("/tmp/output/plan.json");
        assert_eq!(report_path(base), Path::new("/tmp/output/plan.report.json"));
    }

    #[test]
    fn write_sidecar_creates_file() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("plan.json");
        fs::write(&artifact, "{}").unwrap();
        let path = write_sidecar(
            &artifact,
            Params {
                cake: "cake.json".into(),
                children: 4,
                resolution: 100,
                tolerance: 0.5,
                feasible: true,
                chords: 3,
            },
        )
        .unwrap();
        assert!(path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["outcome"]["chords"], 3);
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
    }
}
