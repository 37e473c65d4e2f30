use crate::utils::error::{DrawError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Returns true when `candidate` matches an entry of `roster`, ignoring case.
pub fn is_duplicate<S: AsRef<str>>(candidate: &str, roster: &[S]) -> bool {
    let candidate = candidate.to_lowercase();
    roster
        .iter()
        .any(|entry| entry.as_ref().to_lowercase() == candidate)
}

/// Trims a raw name, rejecting values that are blank afterwards.
pub fn normalize_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(DrawError::InvalidInput);
    }
    Ok(name.to_string())
}

/// Splits a comma-separated list such as `"João, Maria, Pedro"` into trimmed names.
/// Blank entries are dropped.
pub fn split_name_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(DrawError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DrawError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(DrawError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_duplicate_ignores_case() {
        let roster = vec!["João".to_string(), "Maria".to_string()];
        assert!(is_duplicate("joão", &roster));
        assert!(is_duplicate("MARIA", &roster));
        assert!(!is_duplicate("Pedro", &roster));
    }

    #[test]
    fn test_is_duplicate_empty_roster() {
        let roster: Vec<String> = Vec::new();
        assert!(!is_duplicate("Ana", &roster));
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Ana \t").unwrap(), "Ana");
        assert!(matches!(normalize_name("   "), Err(DrawError::InvalidInput)));
        assert!(matches!(normalize_name(""), Err(DrawError::InvalidInput)));
    }

    #[test]
    fn test_split_name_list() {
        assert_eq!(
            split_name_list("João, Maria, Pedro"),
            vec!["João", "Maria", "Pedro"]
        );
        assert!(split_name_list("").is_empty());
        assert_eq!(split_name_list(" A ,, B , "), vec!["A", "B"]);
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("draw.min_participants", 3, 3).is_ok());
        assert!(validate_positive_number("draw.min_participants", 2, 3).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output.path", "./draw.json").is_ok());
        assert!(validate_path("output.path", "").is_err());
        assert!(validate_path("output.path", "a\0b").is_err());
    }
}
