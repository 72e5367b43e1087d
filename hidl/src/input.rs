//! Loading the parsed unit and printing pass diagnostics.

use std::{fs, path::Path};

use eyre::{Context, Result};
use hidlgen_ast::Unit;
use hidlgen_codegen::Diagnostic;

/// Read a unit serialized as JSON.
pub fn load_unit(path: &Path) -> Result<Unit> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    let unit: Unit = serde_json::from_str(&content)
        .wrap_err_with(|| format!("Failed to parse unit from {}", path.display()))?;
    log::debug!(
        "loaded {} with {} declarations",
        unit.package,
        unit.declarations.len()
    );
    Ok(unit)
}

/// Print diagnostics to stderr as `warning: ...` / `error: ... (line N)`.
pub fn print_diagnostics(diagnostics: &[Diagnostic]) {
    for diag in diagnostics {
        eprintln!("{}", diag);
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use hidlgen_codegen::testing::sample_unit;

    use super::*;

    #[test]
    fn test_load_unit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("light.json");
        fs::write(&path, serde_json::to_string(&sample_unit()).unwrap()).unwrap();

        let unit = load_unit(&path).unwrap();
        assert_eq!(unit, sample_unit());
    }

    #[test]
    fn test_load_unit_errors_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_unit(&path).unwrap_err();
        assert!(err.to_string().contains("broken.json"));

        let missing = dir.path().join("missing.json");
        let err = load_unit(&missing).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }
}
