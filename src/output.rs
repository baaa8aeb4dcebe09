//! Output formatting and persistence for computed aggregates.
//!
//! Supports pretty-printing, JSON logging, and JSON file export.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Logs an artifact using Rust's debug pretty-print format.
pub fn print_pretty<T: std::fmt::Debug>(artifact: &T) {
    debug!("{:#?}", artifact);
}

/// Logs an artifact as pretty-printed JSON.
pub fn print_json<T: Serialize>(artifact: &T) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(artifact)?);
    Ok(())
}

/// Writes an artifact as pretty-printed JSON to `path`, creating parent
/// directories as needed. Overwrites any previous export.
pub fn write_json<T: Serialize>(path: &str, artifact: &T) -> Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(artifact)?;
    debug!(path, bytes = json.len(), "Writing JSON export");
    fs::write(path, json).with_context(|| format!("writing {}", path))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::types::Kpi;
    use std::env;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    fn sample_kpi() -> Kpi {
        Kpi {
            total_count: 300,
            average_daily: 150.0,
            registered_ratio: 230.0 / 300.0,
        }
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        print_pretty(&sample_kpi());
    }

    #[test]
    fn test_print_json_does_not_panic() {
        print_json(&sample_kpi()).unwrap();
    }

    #[test]
    fn test_write_json_round_trips() {
        let path = temp_path("bikeshare_insights_test_kpi.json");
        let _ = fs::remove_file(&path); // clean up any prior run

        write_json(&path, &sample_kpi()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["total_count"], 300);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_json_overwrites() {
        let path = temp_path("bikeshare_insights_test_overwrite.json");
        let _ = fs::remove_file(&path);

        write_json(&path, &sample_kpi()).unwrap();
        write_json(&path, &sample_kpi()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content.matches("total_count").count(),
            1,
            "export must be replaced, not appended"
        );

        fs::remove_file(&path).unwrap();
    }
}
