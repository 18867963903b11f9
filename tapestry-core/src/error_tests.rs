#[cfg(test)]
mod tests {
    use crate::error::*;
    use std::io;

    // ===== Error Creation Tests =====

    #[test]
    fn test_duplicate_entry_error() {
        let err = Error::DuplicateEntry("PageBlock".to_string());
        assert_eq!(err.to_string(), "Duplicate documentation entry: PageBlock");
    }

    #[test]
    fn test_not_found_error() {
        let err = Error::NotFound("Card".to_string());
        assert_eq!(err.to_string(), "No documentation entry for component: Card");
    }

    #[test]
    fn test_schema_violation_error() {
        let err = Error::SchemaViolation {
            entry: "Card".to_string(),
            field: "category",
        };
        assert_eq!(
            err.to_string(),
            "Schema violation in entry 'Card': missing category"
        );
    }

    #[test]
    fn test_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = Error::Io(io_err);
        assert!(err.to_string().contains("IO error:"));
    }

    #[test]
    fn test_other_error() {
        let anyhow_err = anyhow::anyhow!("custom error");
        let err = Error::Other(anyhow_err);
        assert_eq!(err.to_string(), "custom error");
    }

    // ===== Error Conversion Tests =====

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_from_anyhow_error() {
        let anyhow_err = anyhow::anyhow!("something went wrong");
        let err: Error = anyhow_err.into();
        assert!(matches!(err, Error::Other(_)));
        assert_eq!(err.to_string(), "something went wrong");
    }

    // ===== Error Propagation Tests =====

    #[test]
    fn test_error_propagation() {
        fn inner(fail: bool) -> Result<u32> {
            if fail {
                Err(Error::NotFound("Card".to_string()))
            } else {
                Ok(42)
            }
        }

        fn outer(fail: bool) -> Result<u32> {
            let value = inner(fail)?;
            Ok(value * 2)
        }

        assert_eq!(outer(false).unwrap(), 84);

        let err = outer(true).unwrap_err();
        match err {
            Error::NotFound(name) => assert_eq!(name, "Card"),
            _ => panic!("Wrong error type"),
        }
    }

    // ===== Debug Implementation Tests =====

    #[test]
    fn test_error_debug() {
        let err = Error::SchemaViolation {
            entry: "Card".to_string(),
            field: "example",
        };
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("SchemaViolation"));
        assert!(debug_str.contains("example"));
    }
}
