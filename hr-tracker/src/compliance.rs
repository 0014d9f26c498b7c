//! Required-document rule engine
//!
//! Pure functions over the [`Catalog`] deciding which documents a department
//! role must provide, which are still missing and whether the universal
//! legal minimum is met. Both the registration flow and the profile editor
//! go through here.

use serde::Serialize;
use shared::models::DocumentType;
use shared::util::base_document_name;
use shared::{AppError, AppResult, ErrorCode};

use crate::catalog::Catalog;

/// Department-specific documents for a role, in suggestion order.
///
/// Empty unless a requirement rule matches (drivers in Transport or Express
/// with the standard catalog).
pub fn required_documents<'a>(catalog: &'a Catalog, department: &str, role_title: &str) -> &'a [String] {
    catalog
        .requirement_rule(department, role_title)
        .map(|r| r.documents.as_slice())
        .unwrap_or(&[])
}

/// First requirement not yet present, by base name
pub fn next_suggested_document<'a, 'b>(
    requirements: &'a [String],
    present_base_names: impl IntoIterator<Item = &'b str>,
) -> Option<&'a str> {
    let present: Vec<&str> = present_base_names.into_iter().collect();
    requirements
        .iter()
        .map(String::as_str)
        .find(|r| !present.contains(r))
}

/// Requirements with no document whose name starts with them
pub fn missing_requirements<'a, 'b>(
    requirements: &'a [String],
    document_names: impl IntoIterator<Item = &'b str>,
) -> Vec<&'a str> {
    let names: Vec<&str> = document_names.into_iter().collect();
    requirements
        .iter()
        .map(String::as_str)
        .filter(|r| !names.iter().any(|n| n.starts_with(*r)))
        .collect()
}

/// Number of documents whose base name is in the legal set
pub fn legal_document_count<'b>(catalog: &Catalog, document_names: impl IntoIterator<Item = &'b str>) -> usize {
    document_names
        .into_iter()
        .filter(|n| catalog.is_legal_document(n))
        .count()
}

/// Suggested next document with its preset type and tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSuggestion {
    pub name: String,
    pub document_type: Option<DocumentType>,
    pub tag: Option<String>,
}

/// Next department-specific document to collect, if any
pub fn suggest_document<'b>(
    catalog: &Catalog,
    department: &str,
    role_title: &str,
    present_document_names: impl IntoIterator<Item = &'b str>,
) -> Option<DocumentSuggestion> {
    let requirements = required_documents(catalog, department, role_title);
    let next = next_suggested_document(
        requirements,
        present_document_names.into_iter().map(base_document_name),
    )?;
    let preset = catalog.preset(next);
    Some(DocumentSuggestion {
        name: next.to_string(),
        document_type: preset.map(|p| p.document_type),
        tag: preset.and_then(|p| p.tag.clone()),
    })
}

/// Progress toward a compliant document set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceSummary {
    pub legal_count: usize,
    pub legal_minimum: usize,
    /// `None` when the role has no department-specific rule
    pub missing_required: Option<Vec<String>>,
}

impl ComplianceSummary {
    pub fn legal_satisfied(&self) -> bool {
        self.legal_count >= self.legal_minimum
    }

    pub fn is_compliant(&self) -> bool {
        self.legal_satisfied()
            && self
                .missing_required
                .as_ref()
                .is_none_or(|missing| missing.is_empty())
    }
}

pub fn summarize(catalog: &Catalog, department: &str, role_title: &str, document_names: &[&str]) -> ComplianceSummary {
    let missing_required = catalog.requirement_rule(department, role_title).map(|rule| {
        missing_requirements(&rule.documents, document_names.iter().copied())
            .into_iter()
            .map(str::to_string)
            .collect()
    });
    ComplianceSummary {
        legal_count: legal_document_count(catalog, document_names.iter().copied()),
        legal_minimum: catalog.legal_minimum,
        missing_required,
    }
}

/// Block a document set that is below the legal minimum or misses a
/// department-specific document.
pub fn check_documents(
    catalog: &Catalog,
    department: &str,
    role_title: &str,
    document_names: &[&str],
) -> AppResult<()> {
    let legal_count = legal_document_count(catalog, document_names.iter().copied());
    if legal_count < catalog.legal_minimum {
        return Err(AppError::with_message(
            ErrorCode::InsufficientLegalDocuments,
            format!(
                "Upload at least {} Employment & Legal documents",
                catalog.legal_minimum
            ),
        )
        .with_detail("legal_count", legal_count)
        .with_detail("legal_minimum", catalog.legal_minimum));
    }

    if let Some(rule) = catalog.requirement_rule(department, role_title) {
        let missing = missing_requirements(&rule.documents, document_names.iter().copied());
        if !missing.is_empty() {
            return Err(AppError::with_message(
                ErrorCode::MissingRequiredDocuments,
                format!("{} (missing: {})", rule.message, missing.join(", ")),
            )
            .with_detail("department", department)
            .with_detail("missing", missing));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRANSPORT_SET: [&str; 4] = [
        "Valid Driver's License (BCE)",
        "Defensive Driving Certificate",
        "Medical Fitness Certificate",
        "Road Safety Training Certificate",
    ];

    const LEGAL_FOUR: [&str; 4] = [
        "Signed Employment Contract",
        "Job Offer Letter",
        "CV / Résumé",
        "Academic Certificate - Degree",
    ];

    #[test]
    fn test_required_documents_only_for_transport_and_express_drivers() {
        let catalog = Catalog::standard();
        assert_eq!(required_documents(&catalog, "Transport", "driver"), TRANSPORT_SET);
        let express = required_documents(&catalog, "Express", "Driver (Bus)");
        assert_eq!(express[0], "Valid Driver's License (PSV)");
        assert_eq!(express[1], "PSV Badge");

        assert!(required_documents(&catalog, "Transport", "Dispatcher").is_empty());
        assert!(required_documents(&catalog, "Workshop", "Driver").is_empty());
        assert!(required_documents(&catalog, "", "Driver").is_empty());
    }

    #[test]
    fn test_next_suggested_document_in_order() {
        let catalog = Catalog::standard();
        let req = required_documents(&catalog, "Transport", "Driver");
        assert_eq!(next_suggested_document(req, []), Some(TRANSPORT_SET[0]));
        assert_eq!(
            next_suggested_document(req, [TRANSPORT_SET[0], TRANSPORT_SET[2]]),
            Some(TRANSPORT_SET[1])
        );
        assert_eq!(next_suggested_document(req, TRANSPORT_SET), None);
    }

    #[test]
    fn test_missing_requirements_uses_prefix_match() {
        let catalog = Catalog::standard();
        let req = required_documents(&catalog, "Transport", "Driver");
        let queue = [
            "Valid Driver's License (BCE) - Class C",
            "Defensive Driving Certificate",
            "Medical Fitness Certificate",
            "Road Safety Training Certificate",
        ];
        assert!(missing_requirements(req, queue).is_empty());

        let partial = ["Medical Fitness Certificate"];
        assert_eq!(missing_requirements(req, partial).len(), 3);
    }

    #[test]
    fn test_legal_count_uses_base_name() {
        let catalog = Catalog::standard();
        let names = [
            "Academic Certificate - Degree",
            "Academic Certificate - KCSE",
            "Referee Letter",
            "PSV Badge",
        ];
        assert_eq!(legal_document_count(&catalog, names), 3);
    }

    #[test]
    fn test_suggestion_carries_preset() {
        let catalog = Catalog::standard();
        let s = suggest_document(&catalog, "Express", "Driver (Bus)", ["Valid Driver's License (PSV)"]).unwrap();
        assert_eq!(s.name, "PSV Badge");
        assert_eq!(s.document_type, Some(DocumentType::License));
        assert_eq!(s.tag.as_deref(), Some("express"));

        assert!(suggest_document(&catalog, "Fuel", "Fuel Clerk", []).is_none());
    }

    #[test]
    fn test_check_blocks_insufficient_legal_documents() {
        let catalog = Catalog::standard();
        let names = ["Signed Employment Contract", "Job Offer Letter", "Referee Letter"];
        let err = check_documents(&catalog, "HR", "HR Assistant", &names).unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientLegalDocuments);
        assert_eq!(err.message, "Upload at least 4 Employment & Legal documents");
        assert_eq!(err.detail("legal_count").unwrap(), 3);
    }

    #[test]
    fn test_check_names_missing_road_safety_certificate() {
        let catalog = Catalog::standard();
        let mut names: Vec<&str> = LEGAL_FOUR.to_vec();
        names.extend(&TRANSPORT_SET[..3]);

        let err = check_documents(&catalog, "Transport", "Driver", &names).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingRequiredDocuments);
        assert!(err.message.contains("Road Safety Training Certificate"));
        assert_eq!(err.detail("missing").unwrap()[0], "Road Safety Training Certificate");
    }

    #[test]
    fn test_check_passes_complete_set() {
        let catalog = Catalog::standard();
        let mut names: Vec<&str> = LEGAL_FOUR.to_vec();
        names.extend(TRANSPORT_SET);
        assert!(check_documents(&catalog, "Transport", "Driver", &names).is_ok());

        let summary = summarize(&catalog, "Transport", "Driver", &names);
        assert!(summary.is_compliant());
        assert_eq!(summary.legal_count, 4);
    }

    #[test]
    fn test_summary_without_rule() {
        let catalog = Catalog::standard();
        let summary = summarize(&catalog, "Finance", "Cashier", &["Referee Letter"]);
        assert!(summary.missing_required.is_none());
        assert!(!summary.legal_satisfied());
        assert!(!summary.is_compliant());
    }
}
