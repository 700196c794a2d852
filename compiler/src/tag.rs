use crate::{error::TagEnumError, tokenizer::lookup};

/// Tag key that marks a field as an enum element.
pub const ENUM_TAG_KEY: &str = "enum";

/// Display name meaning "use the field's identifier".
pub const IDENTIFIER_SENTINEL: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumTag {
    pub name:        String,
    pub description: String,
}

/// Parses `enum:"<name>[,<description>]"` out of a raw field tag.
///
/// The value is split on commas and only the first two segments are used, so
/// a description cannot itself contain a comma.
pub fn parse_enum_tag(tag: &str) -> Result<EnumTag, TagEnumError> {
    let value = lookup(tag, ENUM_TAG_KEY).ok_or_else(|| TagEnumError::MalformedTag {
        tag: tag.to_string(),
    })?;

    let mut splits = value.split(',');
    let name = splits.next().unwrap_or_default().to_string();
    let description = splits.next().unwrap_or_default().to_string();

    Ok(EnumTag { name, description })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_description() {
        let tag = parse_enum_tag(r#"enum:"Active,currently running""#).unwrap();
        assert_eq!(tag.name, "Active");
        assert_eq!(tag.description, "currently running");
    }

    #[test]
    fn test_name_only() {
        let tag = parse_enum_tag(r#"enum:"Active""#).unwrap();
        assert_eq!(tag.name, "Active");
        assert_eq!(tag.description, "");
    }

    #[test]
    fn test_sentinel_is_returned_verbatim() {
        let tag = parse_enum_tag(r#"enum:"-""#).unwrap();
        assert_eq!(tag.name, IDENTIFIER_SENTINEL);
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let tag = parse_enum_tag(r#"json:"status" enum:"Done,finished""#).unwrap();
        assert_eq!(tag.name, "Done");
        assert_eq!(tag.description, "finished");
    }

    #[test]
    fn test_extra_commas_are_dropped() {
        let tag = parse_enum_tag(r#"enum:"Late,overdue, by a lot""#).unwrap();
        assert_eq!(tag.name, "Late");
        assert_eq!(tag.description, "overdue");
    }

    #[test]
    fn test_missing_key_is_malformed() {
        let err = parse_enum_tag(r#"other:"x""#).unwrap_err();
        assert!(
            matches!(err, TagEnumError::MalformedTag { ref tag } if tag == r#"other:"x""#),
            "expected a MalformedTag but got {:?}",
            err
        );
    }

    #[test]
    fn test_unquoted_value_is_malformed() {
        assert!(matches!(
            parse_enum_tag("enum:Active"),
            Err(TagEnumError::MalformedTag { .. })
        ));
    }
}
