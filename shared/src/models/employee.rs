//! Employee Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Employee classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeType {
    Driver,
    Mechanic,
    Admin,
    Manager,
    Clerk,
}

impl EmployeeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Driver => "DRIVER",
            Self::Mechanic => "MECHANIC",
            Self::Admin => "ADMIN",
            Self::Manager => "MANAGER",
            Self::Clerk => "CLERK",
        }
    }
}

/// Employment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeStatus {
    #[default]
    Active,
    OnLeave,
    Suspended,
    Terminated,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::OnLeave => "ON_LEAVE",
            Self::Suspended => "SUSPENDED",
            Self::Terminated => "TERMINATED",
        }
    }
}

/// Engagement kind chosen at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractType {
    #[default]
    FullTime,
    Probation,
    Contract,
}

impl ContractType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullTime => "FULL_TIME",
            Self::Probation => "PROBATION",
            Self::Contract => "CONTRACT",
        }
    }
}

/// Employee record as returned by the HR service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    /// `<DEPTCODE>-<sequence>`, unique per department
    pub employee_number: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub phone: String,
    #[serde(default)]
    pub phone_alt: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub role_title: Option<String>,
    pub employee_type: EmployeeType,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub secondary_department: Option<String>,
    #[serde(default)]
    pub status: EmployeeStatus,
    pub employment_date: NaiveDate,
    #[serde(default)]
    pub termination_date: Option<NaiveDate>,
    #[serde(default)]
    pub supervisor_id: Option<i64>,
    /// Free-form on the server; the tracker writes [`ContractType`] values
    #[serde(default)]
    pub contract_type: Option<String>,
    #[serde(default)]
    pub contract_start: Option<NaiveDate>,
    #[serde(default)]
    pub contract_end: Option<NaiveDate>,
    #[serde(default)]
    pub probation_end: Option<NaiveDate>,
    #[serde(default)]
    pub license_number: Option<String>,
    #[serde(default)]
    pub emergency_contact_name: Option<String>,
    #[serde(default)]
    pub emergency_contact_phone: Option<String>,
}

impl Employee {
    pub fn department_or_empty(&self) -> &str {
        self.department.as_deref().unwrap_or("")
    }

    pub fn role_title_or_empty(&self) -> &str {
        self.role_title.as_deref().unwrap_or("")
    }
}

/// Create employee payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub employee_number: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_title: Option<String>,
    pub employee_type: EmployeeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supervisor_id: Option<i64>,
    pub status: EmployeeStatus,
    pub employment_date: NaiveDate,
    pub contract_type: ContractType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_start: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_end: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probation_end: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact_phone: Option<String>,
}

/// Update employee payload (profile edit form)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_type: Option<EmployeeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EmployeeStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supervisor_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact_phone: Option<String>,
}

impl EmployeeUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Employee list filters (query parameters)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_type: Option<EmployeeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EmployeeStatus>,
}

/// Active head count per employee type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeCountByType {
    pub employee_type: EmployeeType,
    pub count: i64,
}

/// Lifecycle change recorded by the HR service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeHistory {
    pub id: i64,
    pub employee_id: i64,
    /// e.g. `STATUS_CHANGE`, `ROLE_CHANGE`
    pub change_type: String,
    #[serde(default)]
    pub from_value: Option<String>,
    #[serde(default)]
    pub to_value: Option<String>,
    pub effective_date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_deserialize_with_missing_optionals() {
        let json = r#"{
            "id": 3,
            "employee_number": "TPT-0003",
            "name": "Jane Wanjiru",
            "phone": "0700000000",
            "employee_type": "DRIVER",
            "employment_date": "2024-02-01"
        }"#;
        let emp: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(emp.employee_type, EmployeeType::Driver);
        assert_eq!(emp.status, EmployeeStatus::Active);
        assert_eq!(emp.department_or_empty(), "");
        assert_eq!(
            emp.employment_date,
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
        );
    }

    #[test]
    fn test_status_wire_names() {
        let json = serde_json::to_string(&EmployeeStatus::OnLeave).unwrap();
        assert_eq!(json, "\"ON_LEAVE\"");
        assert_eq!(ContractType::FullTime.as_str(), "FULL_TIME");
    }

    #[test]
    fn test_filter_skips_empty_fields() {
        let filter = EmployeeFilter {
            department: Some("Transport".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(json, serde_json::json!({ "department": "Transport" }));
    }

    #[test]
    fn test_update_is_empty() {
        assert!(EmployeeUpdate::default().is_empty());
        let update = EmployeeUpdate {
            phone: Some("0711".into()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}
