// src/dataset.rs

use anyhow::{Context, Result};
use serde::Serialize;
use std::{io::Write, path::Path};
use tempfile::NamedTempFile;

use crate::schema::HeaderSchema;

/// One normalised incident row, positionally aligned with the headers.
pub type IncidentRecord = Vec<String>;

/// Everything scraped so far: the header schema plus every record, in the
/// order pages and groups were processed.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedDataset {
    pub headers: HeaderSchema,
    pub data: Vec<IncidentRecord>,
}

impl ProcessedDataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ready once both headers and at least one record are present.
    pub fn is_ready(&self) -> bool {
        !self.headers.is_empty() && !self.data.is_empty()
    }

    /// Serialise the whole dataset and atomically replace `path` with it.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let json = serde_json::to_vec(self).context("serialising dataset")?;
        let mut tmp = NamedTempFile::new_in(dir)
            .with_context(|| format!("creating temp file in {}", dir.display()))?;
        tmp.write_all(&json)
            .with_context(|| format!("writing {}", tmp.path().display()))?;
        tmp.persist(path)
            .with_context(|| format!("persisting {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;
    use tempfile::tempdir;

    fn sample() -> ProcessedDataset {
        ProcessedDataset {
            headers: schema::expected(),
            data: vec![vec!["05 jan 1970".into(), "stockholm, sweden".into()]],
        }
    }

    #[test]
    fn test_empty_is_not_ready() {
        let mut ds = ProcessedDataset::new();
        assert!(!ds.is_ready());
        ds.headers = schema::expected();
        assert!(!ds.is_ready());
        ds.data.push(vec!["x".into()]);
        assert!(ds.is_ready());
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["headers"]["0"], "date");
        assert_eq!(value["headers"]["3"], "aircraft type");
        assert_eq!(value["data"][0][1], "stockholm, sweden");
    }

    #[test]
    fn test_write_json_overwrites() {
        let tmp = tempdir().unwrap();
        let out = tmp.path().join("output.json");
        std::fs::write(&out, "stale").unwrap();

        sample().write_json(&out).unwrap();

        let written: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(written["headers"]["5"], "fatalities");
        assert_eq!(written["data"][0][0], "05 jan 1970");

        // nothing left behind besides the output itself
        let entries = std::fs::read_dir(tmp.path()).unwrap().count();
        assert_eq!(entries, 1);
    }
}
