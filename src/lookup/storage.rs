use super::tables::{validate_lookup_tables, LookupTables};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Tables shipped with the crate, compiled in from `data/lookup_tables.yaml`.
const EMBEDDED_TABLES: &str = include_str!("../../data/lookup_tables.yaml");

/// Parse lookup tables from YAML text. Scores outside 0-10 are rejected.
pub fn parse_lookup_tables(content: &str) -> Result<LookupTables> {
    let mut tables: LookupTables =
        serde_saphyr::from_str(content).context("Failed to parse lookup tables")?;
    if let Err(errors) = validate_lookup_tables(&tables) {
        anyhow::bail!("Lookup table errors: {}", errors.join("; "));
    }
    tables.normalize_keys();
    Ok(tables)
}

/// Load the tables compiled into the binary.
pub fn load_embedded_tables() -> Result<LookupTables> {
    parse_lookup_tables(EMBEDDED_TABLES).context("Embedded lookup tables are malformed")
}

/// Load lookup tables from `path`, or the embedded copy when no path is given.
///
/// A path that is given but does not exist is an error.
pub fn load_lookup_tables(path: Option<&Path>) -> Result<LookupTables> {
    let Some(path) = path else {
        let tables = load_embedded_tables()?;
        tracing::debug!(version = tables.version, "using embedded lookup tables");
        return Ok(tables);
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read lookup tables at {}", path.display()))?;
    let tables = parse_lookup_tables(&content)
        .with_context(|| format!("Invalid lookup tables in {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        version = tables.version,
        institutions = tables.institutions.len(),
        fields = tables.fields.len(),
        skills = tables.skills.len(),
        "loaded lookup tables"
    );
    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_tables_load() {
        let tables = load_embedded_tables().unwrap();
        assert_eq!(tables.version, 1);
        assert_eq!(tables.institutions.default, 5.5);
        assert_eq!(tables.fields.default, 6.0);
        assert_eq!(tables.skills.default, 6.0);
        assert!(!tables.institutions.is_empty());
    }

    #[test]
    fn test_embedded_reference_scores() {
        let tables = load_embedded_tables().unwrap();
        assert_eq!(tables.institution_score("Stanford University"), 10.0);
        assert_eq!(tables.skill_score("Machine Learning"), 10.0);
        assert_eq!(tables.skill_score("Data Science"), 9.5);
        assert_eq!(tables.skill_score("Statistics"), 8.5);
        assert_eq!(tables.field_score("Machine Learning Specialization"), 10.0);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
version: 7
institutions:
  default: 4.0
  scores:
    "Acme Institute": 9.0
fields:
  default: 5.0
  scores:
    "Rust": 8.8
skills:
  default: 3.0
"#
        )
        .unwrap();

        let tables = load_lookup_tables(Some(file.path())).unwrap();
        assert_eq!(tables.version, 7);
        assert_eq!(tables.institution_score("Acme Institute"), 9.0);
        // field keys are lowercased on load
        assert_eq!(tables.field_score("Intro to RUST"), 8.8);
        assert_eq!(tables.skill_score("anything"), 3.0);
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_lookup_tables(Some(&dir.path().join("nope.yaml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_section_rejected() {
        let yaml = r#"
institutions: { default: 5.5 }
fields: { default: 6.0 }
skills: { default: 6.0 }
certificates: { default: 1.0 }
"#;
        assert!(parse_lookup_tables(yaml).is_err());
    }

    #[test]
    fn test_out_of_range_file_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
institutions:
  default: 50.0
fields:
  default: -3.0
skills:
  default: 6.0
"#
        )
        .unwrap();

        let err = load_lookup_tables(Some(file.path())).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("institutions.default"));
        assert!(message.contains("fields.default"));
    }
}
