// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use portfolio_dashboard_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn invalid_document() {
        let err = CoreError::InvalidDocument("expected value at line 1".into());
        assert_eq!(
            err.to_string(),
            "Invalid portfolio document: expected value at line 1"
        );
    }

    #[test]
    fn serialization() {
        let err = CoreError::Serialization("oops".into());
        assert_eq!(err.to_string(), "Serialization error: oops");
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("bad".into());
        assert_eq!(err.to_string(), "Deserialization error: bad");
    }

    #[test]
    fn storage() {
        let err = CoreError::Storage("quota exceeded".into());
        assert_eq!(err.to_string(), "Storage error: quota exceeded");
    }

    #[test]
    fn file_io() {
        let err = CoreError::FileIO("permission denied".into());
        assert_eq!(err.to_string(), "File I/O error: permission denied");
    }
}

// ── From conversions ────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
        let err: CoreError = io.into();
        assert!(matches!(err, CoreError::FileIO(ref msg) if msg.contains("missing file")));
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn question_mark_propagation() {
        fn parse(text: &str) -> Result<serde_json::Value, CoreError> {
            Ok(serde_json::from_str(text)?)
        }
        assert!(parse("{}").is_ok());
        assert!(matches!(parse("nope"), Err(CoreError::Deserialization(_))));
    }

    #[test]
    fn errors_are_std_errors() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&CoreError::Storage("x".into()));
    }
}
