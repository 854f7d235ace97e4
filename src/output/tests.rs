//! Unit tests for the output writer

use super::*;
use serde_json::json;
use tempfile::TempDir;

#[cfg(test)]
mod output_tests {
    use super::*;

    #[test]
    fn test_write_output_to_file_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("players.json");
        let data = json!({"1234": {"name": "José", "team": "SF"}});

        write_output(&data, Some(&file_path)).unwrap();

        let contents = fs::read_to_string(&file_path).unwrap();
        let parsed: Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed, data);
    }

    #[test]
    fn test_write_output_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("a").join("b").join("out.json");
        let data = json!([{"a": "1"}]);

        write_output(&data, Some(&file_path)).unwrap();

        assert!(file_path.exists());
        let contents = fs::read_to_string(&file_path).unwrap();
        assert_eq!(contents, r#"[{"a":"1"}]"#);
    }

    #[test]
    fn test_write_output_empty_array() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.json");

        write_output(&json!([]), Some(&file_path)).unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "[]");
    }

    #[test]
    fn test_write_output_keeps_unicode_unescaped() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("unicode.json");

        write_output(&json!({"name": "Saquón"}), Some(&file_path)).unwrap();

        let contents = fs::read_to_string(&file_path).unwrap();
        assert!(contents.contains("Saquón"));
        assert!(!contents.contains("\\u"));
    }

    #[test]
    fn test_write_output_stdout_sentinel_writes_no_file() {
        write_output(&json!({}), Some(Path::new(STDOUT_SENTINEL))).unwrap();

        // The sentinel must never be treated as a file path
        assert!(!Path::new(STDOUT_SENTINEL).exists());
    }

    #[test]
    fn test_count_label_object() {
        assert_eq!(count_label(&json!({"a": 1, "b": 2})), "2");
        assert_eq!(count_label(&json!({})), "0");
    }

    #[test]
    fn test_count_label_array() {
        assert_eq!(count_label(&json!(["x", "y", "z"])), "3");
        assert_eq!(count_label(&json!([])), "0");
    }

    #[test]
    fn test_count_label_scalar() {
        assert_eq!(count_label(&json!("hello")), "object");
        assert_eq!(count_label(&json!(42)), "object");
        assert_eq!(count_label(&Value::Null), "object");
    }

    #[test]
    fn test_compact_serialization() {
        assert_eq!(serde_json::to_string(&json!({})).unwrap(), "{}");

        let data = json!({"a": [1, 2], "b": "x"});
        let text = serde_json::to_string(&data).unwrap();
        assert!(!text.contains('\n'));
        assert!(!text.contains(": "));
    }
}
