//! Role, department and document catalog
//!
//! All lookup tables the tracker consults: departments with their codes and
//! allowed roles, role-title keywords that classify an employee, document
//! presets, the universal legal set and per-department requirement rules.
//! Loaded once at startup, either from the built-in [`Catalog::standard`]
//! tables or from a JSON file with the same shape.

mod standard;

use serde::{Deserialize, Serialize};
use shared::models::{DocumentType, EmployeeType};
use shared::util::base_document_name;
use shared::{AppError, AppResult};
use std::collections::HashSet;
use std::path::Path;

/// Department code used when the department is unknown or absent
pub const FALLBACK_DEPARTMENT_CODE: &str = "EMP";

/// Department with its employee-number prefix and allowed role titles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub name: String,
    pub code: String,
    pub roles: Vec<String>,
}

/// Role titles containing any keyword map to `employee_type`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleClassifier {
    pub employee_type: EmployeeType,
    pub keywords: Vec<String>,
}

/// Default type and tag of a known document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentPreset {
    pub name: String,
    pub document_type: DocumentType,
    #[serde(default)]
    pub tag: Option<String>,
}

/// Documents required for a department role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementRule {
    pub department: String,
    /// Matched case-insensitively against the role title
    pub role_keyword: String,
    /// Required base names, in suggestion order
    pub documents: Vec<String>,
    /// Message shown when any document is missing
    pub message: String,
}

impl RequirementRule {
    pub fn applies_to(&self, department: &str, role_title: &str) -> bool {
        self.department == department
            && role_title
                .to_lowercase()
                .contains(&self.role_keyword.to_lowercase())
    }
}

/// Lookup tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub departments: Vec<Department>,
    /// Checked in order, first match wins
    pub role_classifiers: Vec<RoleClassifier>,
    pub default_employee_type: EmployeeType,
    pub presets: Vec<DocumentPreset>,
    /// Universal employment and legal document set
    pub legal_documents: Vec<String>,
    pub legal_minimum: usize,
    pub requirement_rules: Vec<RequirementRule>,
    /// Documents an employee may hold several of (distinguished by subtype)
    #[serde(default)]
    pub multi_instance_documents: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    /// Load a catalog from a JSON file
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::config(format!("Failed to read catalog {}: {}", path.display(), e))
        })?;
        let catalog: Catalog = serde_json::from_str(&raw).map_err(|e| {
            AppError::config(format!("Invalid catalog {}: {}", path.display(), e))
        })?;
        catalog.validate()?;
        tracing::info!(
            path = %path.display(),
            departments = catalog.departments.len(),
            rules = catalog.requirement_rules.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Built-in tables, or the file when one is configured
    pub fn from_file_or_standard(path: Option<&str>) -> AppResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::standard()),
        }
    }

    /// Reject tables that cannot be satisfied or are ambiguous
    pub fn validate(&self) -> AppResult<()> {
        let mut names = HashSet::new();
        for dept in &self.departments {
            if !names.insert(dept.name.as_str()) {
                return Err(AppError::config(format!("Duplicate department: {}", dept.name)));
            }
            if dept.code.trim().is_empty() {
                return Err(AppError::config(format!("Department {} has no code", dept.name)));
            }
        }
        if self.legal_minimum > self.legal_documents.len() {
            return Err(AppError::config(format!(
                "Legal minimum {} exceeds the {} legal documents",
                self.legal_minimum,
                self.legal_documents.len()
            )));
        }
        for rule in &self.requirement_rules {
            if rule.role_keyword.trim().is_empty() || rule.documents.is_empty() {
                return Err(AppError::config(format!(
                    "Incomplete requirement rule for {}",
                    rule.department
                )));
            }
        }
        Ok(())
    }

    pub fn department(&self, name: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.name == name)
    }

    pub fn department_names(&self) -> impl Iterator<Item = &str> {
        self.departments.iter().map(|d| d.name.as_str())
    }

    /// Allowed role titles; empty for an unknown department
    pub fn roles_for(&self, department: &str) -> &[String] {
        self.department(department)
            .map(|d| d.roles.as_slice())
            .unwrap_or(&[])
    }

    /// Employee-number prefix
    pub fn department_code(&self, department: Option<&str>) -> &str {
        department
            .and_then(|name| self.department(name))
            .map(|d| d.code.as_str())
            .unwrap_or(FALLBACK_DEPARTMENT_CODE)
    }

    /// Classify a role title
    pub fn employee_type_for_role(&self, role_title: &str) -> EmployeeType {
        let role = role_title.to_lowercase();
        self.role_classifiers
            .iter()
            .find(|c| c.keywords.iter().any(|k| role.contains(&k.to_lowercase())))
            .map(|c| c.employee_type)
            .unwrap_or(self.default_employee_type)
    }

    /// Preset for a document name (subtype ignored)
    pub fn preset(&self, document_name: &str) -> Option<&DocumentPreset> {
        let base = base_document_name(document_name);
        self.presets.iter().find(|p| p.name == base)
    }

    pub fn is_legal_document(&self, document_name: &str) -> bool {
        let base = base_document_name(document_name);
        self.legal_documents.iter().any(|n| n == base)
    }

    /// Whether uploading this document adds to, rather than replaces, existing ones
    pub fn is_multi_instance(&self, document_name: &str) -> bool {
        let base = base_document_name(document_name);
        self.multi_instance_documents.iter().any(|n| n == base)
    }

    /// Rule for a department and role title, if any
    pub fn requirement_rule(&self, department: &str, role_title: &str) -> Option<&RequirementRule> {
        self.requirement_rules
            .iter()
            .find(|r| r.applies_to(department, role_title))
    }
}
