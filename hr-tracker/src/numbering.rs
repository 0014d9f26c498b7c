//! Employee numbering
//!
//! Numbers are `<DEPTCODE>-<sequence>`, the sequence zero-padded to four
//! digits and one past the highest sequence already used in the department.
//!
//! Generation reads the locally loaded employee list, so two operators
//! registering into the same department at once can produce the same
//! number. The HR service rejects the duplicate with a conflict.

use shared::models::Employee;

use crate::catalog::Catalog;

/// Leading decimal digits of `s` (after optional whitespace), if any
fn leading_number(s: &str) -> Option<u64> {
    let s = s.trim_start();
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().ok()
}

/// Sequence part of an employee number: the text after the last hyphen
pub fn sequence_of(employee_number: &str) -> Option<u64> {
    let suffix = employee_number
        .rsplit_once('-')
        .map(|(_, tail)| tail)
        .unwrap_or(employee_number);
    leading_number(suffix)
}

/// Next employee number for `department`.
///
/// Only employees of the same department (absent counts as `""`) are
/// considered; unparsable sequences and sequences with no successor are ignored.
pub fn next_employee_number(catalog: &Catalog, department: Option<&str>, employees: &[Employee]) -> String {
    let dept = department.unwrap_or("");
    let next = employees
        .iter()
        .filter(|e| e.department.as_deref().unwrap_or("") == dept)
        .filter_map(|e| sequence_of(&e.employee_number)?.checked_add(1))
        .max()
        .unwrap_or(1);

    let code = catalog.department_code(department.filter(|d| !d.is_empty()));
    format!("{}-{:04}", code, next)
}

/// First employee of the department who manages it
pub fn department_manager_id(department: Option<&str>, employees: &[Employee]) -> Option<i64> {
    let dept = department.filter(|d| !d.is_empty())?;
    employees
        .iter()
        .find(|e| {
            e.department.as_deref() == Some(dept)
                && (e.role_title_or_empty().to_lowercase().contains("manager")
                    || e.employee_type == shared::models::EmployeeType::Manager)
        })
        .map(|e| e.id)
}
