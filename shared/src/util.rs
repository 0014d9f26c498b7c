//! Small helpers shared across crates

/// Separator between a document's base name and its subtype,
/// e.g. `"Academic Certificate - Diploma"`.
pub const SUBTYPE_SEPARATOR: &str = " - ";

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Base name of a possibly composite document name.
///
/// Everything before the first `" - "`; the whole name when there is no subtype.
pub fn base_document_name(name: &str) -> &str {
    name.split(SUBTYPE_SEPARATOR).next().unwrap_or(name)
}

/// Subtype of a composite document name, if any
pub fn document_subtype(name: &str) -> Option<&str> {
    name.split(SUBTYPE_SEPARATOR).nth(1)
}

/// Build `"<base> - <subtype>"`, or just the base when the subtype is absent or blank
pub fn compose_document_name(base: &str, subtype: Option<&str>) -> String {
    match subtype.map(str::trim).filter(|s| !s.is_empty()) {
        Some(sub) => format!("{base}{SUBTYPE_SEPARATOR}{sub}"),
        None => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_document_name() {
        assert_eq!(
            base_document_name("Academic Certificate - Diploma"),
            "Academic Certificate"
        );
        assert_eq!(base_document_name("PSV Badge"), "PSV Badge");
        assert_eq!(base_document_name(""), "");
    }

    #[test]
    fn test_document_subtype() {
        assert_eq!(
            document_subtype("Academic Certificate - Degree"),
            Some("Degree")
        );
        assert_eq!(document_subtype("KRA PIN"), None);
    }

    #[test]
    fn test_compose_document_name() {
        assert_eq!(
            compose_document_name("Academic Certificate", Some("Diploma")),
            "Academic Certificate - Diploma"
        );
        assert_eq!(compose_document_name("Referee Letter", Some("  ")), "Referee Letter");
        assert_eq!(compose_document_name("Referee Letter", None), "Referee Letter");
    }
}
