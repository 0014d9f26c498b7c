//! Operator session

use shared::models::Employee;

/// Role allowed to manage employees of every branch
pub const ADMIN_ROLE: &str = "HR_ADMIN";

/// Who is operating the tracker
///
/// Management rights are advisory. They gate tracker operations but the HR
/// service performs its own checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub role: String,
    pub branch: String,
}

impl SessionContext {
    pub fn new(role: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            branch: branch.into(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }

    /// Whether an employee in `branch` may be managed
    pub fn can_manage_branch(&self, branch: Option<&str>) -> bool {
        if self.is_admin() {
            return true;
        }
        branch.is_some_and(|b| !b.is_empty() && b == self.branch)
    }

    pub fn can_manage(&self, employee: &Employee) -> bool {
        self.can_manage_branch(employee.branch.as_deref())
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new("HR_OFFICER", "HQ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_manages_everything() {
        let admin = SessionContext::new(ADMIN_ROLE, "HQ");
        assert!(admin.can_manage_branch(Some("MSA")));
        assert!(admin.can_manage_branch(None));
    }

    #[test]
    fn test_officer_limited_to_own_branch() {
        let officer = SessionContext::default();
        assert!(officer.can_manage_branch(Some("HQ")));
        assert!(!officer.can_manage_branch(Some("MSA")));
        assert!(!officer.can_manage_branch(None));
        assert!(!officer.can_manage_branch(Some("")));
    }
}
