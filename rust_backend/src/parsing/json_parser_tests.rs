#[cfg(test)]
mod tests {
    use crate::core::{DataLoadError, OutcomeClass};
    use crate::parsing::json_parser::{parse_launch_json, parse_launch_json_str};
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Test parsing a bare array with snake_case field names
    #[test]
    fn test_parse_bare_array() {
        let json = r#"[
            {"site": "CCAFS LC-40", "payload_mass_kg": 0.0, "class": 0, "booster_version": "F9 v1.0  B0003"},
            {"site": "KSC LC-39A", "payload_mass_kg": 2490, "class": 1, "booster_version": "F9 FT B1031.1"}
        ]"#;

        let records = parse_launch_json_str(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].outcome, OutcomeClass::Failure);
        assert_eq!(records[1].payload_kg(), 2490.0);
        assert_eq!(records[1].booster_version, "F9 FT B1031.1");
    }

    /// Column headers of the CSV export are accepted as aliases
    #[test]
    fn test_parse_with_export_headers() {
        let json = r#"{"launches": [
            {"Launch Site": "VAFB SLC-4E", "Payload Mass (kg)": "500", "class": true, "Booster Version": "F9 v1.1"}
        ]}"#;

        let records = parse_launch_json_str(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].site, "VAFB SLC-4E");
        assert_eq!(records[0].payload_kg(), 500.0);
        assert!(records[0].is_success());
    }

    /// Missing booster version defaults to an empty label
    #[test]
    fn test_booster_version_optional() {
        let json = r#"[{"site": "KSC LC-39A", "payload_mass_kg": 100, "class": 1}]"#;
        let records = parse_launch_json_str(json).unwrap();
        assert_eq!(records[0].booster_version, "");
    }

    /// Errors report the path of the offending field
    #[test]
    fn test_error_path_points_at_field() {
        let json = r#"{"launches": [
            {"site": "A", "payload_mass_kg": 100, "class": 1},
            {"site": "A", "payload_mass_kg": 100, "class": 5}
        ]}"#;

        let err = parse_launch_json_str(json).unwrap_err();
        match err {
            DataLoadError::Json { path, message } => {
                assert_eq!(path, "launches[1].class");
                assert!(message.contains("expected 0 or 1"), "message: {}", message);
            }
            other => panic!("Expected Json error, got {:?}", other),
        }
    }

    /// A required field that is absent is an error
    #[test]
    fn test_missing_site_field() {
        let json = r#"[{"payload_mass_kg": 100, "class": 1}]"#;
        let err = parse_launch_json_str(json).unwrap_err();
        assert!(matches!(err, DataLoadError::Json { .. }));
    }

    /// Objects without a launches key are rejected
    #[test]
    fn test_object_without_launches() {
        let err = parse_launch_json_str(r#"{"records": []}"#).unwrap_err();
        assert!(matches!(err, DataLoadError::Json { .. }));
    }

    /// Test reading from a file
    #[test]
    fn test_parse_launch_json_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            r#"[{{"site": "KSC LC-39A", "payload_mass_kg": 3000, "class": 0, "booster_version": "B5"}}]"#
        )
        .unwrap();

        let records = parse_launch_json(temp_file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].outcome, OutcomeClass::Failure);
    }

    /// Missing files surface as IO errors
    #[test]
    fn test_parse_missing_file() {
        let err = parse_launch_json(std::path::Path::new("/nonexistent/launches.json")).unwrap_err();
        assert!(matches!(err, DataLoadError::Io { .. }));
    }
}
