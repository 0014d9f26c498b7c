//! New-employee registration
//!
//! A [`Registration`] holds the entry form and the pending document queue.
//! Submitting it either stores a quick-add draft or, after every check
//! passes, creates the employee remotely, stores the identity documents and
//! uploads the queue.

use chrono::NaiveDate;
use hr_client::{ClientError, HrService};
use shared::models::{
    DraftRegistration, Employee, EmployeeCreate, EmployeeDocument, EmployeeStatus, EmployeeType,
};
use shared::{AppError, AppResult, ErrorCode};
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::compliance::{self, ComplianceSummary, DocumentSuggestion};
use crate::drafts::DraftStore;
use crate::identity::IdentityDetails;
use crate::numbering::{department_manager_id, next_employee_number};
use crate::queue::PendingDocumentQueue;
use crate::timeline::Engagement;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, non_blank,
    validate_optional_text, validate_required_text,
};

/// Registration entry form
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: String,
    pub phone_alt: Option<String>,
    pub address: Option<String>,
    pub role_title: Option<String>,
    pub employee_type: EmployeeType,
    pub department: Option<String>,
    pub branch: Option<String>,
    pub secondary_department: Option<String>,
    pub status: EmployeeStatus,
    pub employment_date: Option<NaiveDate>,
    pub engagement: Engagement,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub identity: IdentityDetails,
    /// Store a draft instead of registering
    pub quick_add: bool,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: None,
            phone: String::new(),
            phone_alt: None,
            address: None,
            role_title: None,
            employee_type: EmployeeType::Driver,
            department: None,
            branch: None,
            secondary_department: None,
            status: EmployeeStatus::Active,
            employment_date: None,
            engagement: Engagement::full_time(),
            emergency_contact_name: None,
            emergency_contact_phone: None,
            identity: IdentityDetails::default(),
            quick_add: false,
        }
    }
}

impl RegistrationForm {
    /// Pre-filled form for a stored draft
    pub fn from_draft(catalog: &Catalog, draft: &DraftRegistration) -> Self {
        let (first, last) = draft.split_name();
        let mut form = Self {
            first_name: first.to_string(),
            last_name: last.to_string(),
            department: non_blank(draft.department.as_deref()),
            branch: non_blank(draft.branch.as_deref()),
            ..Default::default()
        };
        if let Some(role) = non_blank(draft.role_title.as_deref()) {
            form.set_role(catalog, role);
        }
        form
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// Change department; the role is cleared when the new department does not offer it
    pub fn set_department(&mut self, catalog: &Catalog, department: impl Into<String>) {
        let department = department.into();
        let keeps_role = self
            .role_title
            .as_ref()
            .is_some_and(|r| catalog.roles_for(&department).contains(r));
        if !keeps_role {
            self.role_title = None;
        }
        self.department = Some(department);
    }

    /// Set the role title and the employee type it implies
    pub fn set_role(&mut self, catalog: &Catalog, role_title: impl Into<String>) {
        let role_title = role_title.into();
        self.employee_type = catalog.employee_type_for_role(&role_title);
        self.role_title = Some(role_title);
    }

    fn department_or_empty(&self) -> &str {
        self.department.as_deref().unwrap_or("")
    }

    fn role_or_empty(&self) -> &str {
        self.role_title.as_deref().unwrap_or("")
    }

    fn validate_basics(&self) -> AppResult<()> {
        validate_required_text(&self.full_name(), "name", MAX_NAME_LEN)?;
        validate_required_text(&self.phone, "phone", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&self.email, "email", MAX_EMAIL_LEN)?;
        validate_optional_text(&self.phone_alt, "phone_alt", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&self.address, "address", MAX_ADDRESS_LEN)?;
        if self.employment_date.is_none() {
            return Err(AppError::required("employment_date"));
        }
        Ok(())
    }
}

/// Result of a submission
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationOutcome {
    /// Quick add stored a draft
    Drafted(DraftRegistration),
    Registered {
        employee: Employee,
        documents: Vec<EmployeeDocument>,
    },
}

/// Employee already created by an earlier submission whose uploads did not finish
#[derive(Debug, Clone)]
struct CreatedEmployee {
    employee: Employee,
    /// Identity uploads already stored, in [`IdentityDetails::uploads`] order
    identity_stored: usize,
}

pub struct Registration {
    catalog: Arc<Catalog>,
    service: Arc<dyn HrService>,
    pub form: RegistrationForm,
    queue: PendingDocumentQueue,
    created: Option<CreatedEmployee>,
}

impl Registration {
    pub fn new(catalog: Arc<Catalog>, service: Arc<dyn HrService>) -> Self {
        Self {
            catalog,
            service,
            form: RegistrationForm::default(),
            queue: PendingDocumentQueue::new(),
            created: None,
        }
    }

    /// Employee created by a submission that still has uploads outstanding
    pub fn created_employee(&self) -> Option<&Employee> {
        self.created.as_ref().map(|c| &c.employee)
    }

    pub fn queue(&self) -> &PendingDocumentQueue {
        &self.queue
    }

    pub fn queue_mut(&mut self) -> &mut PendingDocumentQueue {
        &mut self.queue
    }

    /// Next department document to collect, given what is queued
    pub fn suggestion(&self) -> Option<DocumentSuggestion> {
        compliance::suggest_document(
            &self.catalog,
            self.form.department_or_empty(),
            self.form.role_or_empty(),
            self.queue.names(),
        )
    }

    pub fn compliance_summary(&self) -> ComplianceSummary {
        compliance::summarize(
            &self.catalog,
            self.form.department_or_empty(),
            self.form.role_or_empty(),
            &self.queue.names(),
        )
    }

    /// Checks run before any remote call.
    ///
    /// Quick add only needs a name; a full registration also needs contact
    /// details, identity, the legal minimum and the department documents.
    pub fn validate(&self) -> AppResult<()> {
        if self.form.quick_add {
            return validate_required_text(&self.form.full_name(), "name", MAX_NAME_LEN);
        }
        self.form.validate_basics()?;
        self.form.identity.validate()?;
        compliance::check_documents(
            &self.catalog,
            self.form.department_or_empty(),
            self.form.role_or_empty(),
            &self.queue.names(),
        )
    }

    /// Submit the form.
    ///
    /// `employees` is the loaded employee list used for numbering and
    /// supervisor lookup. The form and queue are reset after success; on a
    /// failed upload the queue keeps its entries and the created employee is
    /// kept, so the next submit only retries the outstanding uploads.
    pub async fn submit(
        &mut self,
        employees: &[Employee],
        drafts: &mut DraftStore,
        now_millis: i64,
    ) -> AppResult<RegistrationOutcome> {
        self.validate()?;

        let department = non_blank(self.form.department.as_deref());
        let employee_number = next_employee_number(&self.catalog, department.as_deref(), employees);

        if self.form.quick_add {
            let draft = DraftRegistration {
                id: format!("{}-{}", employee_number, now_millis),
                name: self.form.full_name(),
                department,
                role_title: non_blank(self.form.role_title.as_deref()),
                branch: non_blank(self.form.branch.as_deref()),
            };
            drafts.save_draft(draft.clone())?;
            self.reset();
            return Ok(RegistrationOutcome::Drafted(draft));
        }

        if self.created.is_none() {
            let employee = self.create_employee(department, employee_number, employees).await?;
            self.created = Some(CreatedEmployee { employee, identity_stored: 0 });
        }
        let Some(created) = self.created.as_mut() else {
            return Err(AppError::internal("created employee missing"));
        };
        let employee_id = created.employee.id;

        let uploads = self.form.identity.uploads(employee_id);
        for upload in uploads.iter().skip(created.identity_stored) {
            self.service.upload_document(upload).await?;
            created.identity_stored += 1;
        }

        let documents = self.queue.commit(self.service.as_ref(), employee_id).await?;
        let employee = created.employee.clone();
        self.reset();
        Ok(RegistrationOutcome::Registered { employee, documents })
    }

    async fn create_employee(
        &self,
        department: Option<String>,
        employee_number: String,
        employees: &[Employee],
    ) -> AppResult<Employee> {
        let employment_date = self
            .form
            .employment_date
            .ok_or_else(|| AppError::required("employment_date"))?;
        let dates = self.form.engagement.resolve(employment_date)?;

        let payload = EmployeeCreate {
            employee_number,
            name: self.form.full_name(),
            email: non_blank(self.form.email.as_deref()),
            phone: self.form.phone.trim().to_string(),
            phone_alt: non_blank(self.form.phone_alt.as_deref()),
            date_of_birth: None,
            address: non_blank(self.form.address.as_deref()),
            role_title: non_blank(self.form.role_title.as_deref()),
            employee_type: self.form.employee_type,
            supervisor_id: department_manager_id(department.as_deref(), employees),
            department,
            branch: non_blank(self.form.branch.as_deref()),
            secondary_department: non_blank(self.form.secondary_department.as_deref()),
            status: self.form.status,
            employment_date,
            contract_type: dates.contract_type,
            contract_start: dates.contract_start,
            contract_end: dates.contract_end,
            probation_end: dates.probation_end,
            emergency_contact_name: non_blank(self.form.emergency_contact_name.as_deref()),
            emergency_contact_phone: non_blank(self.form.emergency_contact_phone.as_deref()),
        };

        let employee = self.service.create_employee(&payload).await.map_err(|e| match e {
            ClientError::Conflict(msg) => AppError::with_message(ErrorCode::EmployeeNumberExists, msg)
                .with_detail("employee_number", payload.employee_number.clone()),
            other => other.into(),
        })?;
        tracing::info!(
            id = employee.id,
            number = %employee.employee_number,
            department = ?employee.department,
            "Employee registered"
        );

        Ok(employee)
    }

    /// Take a draft out of the store and load it into the form
    pub fn resume_draft(&mut self, drafts: &mut DraftStore, id: &str) -> AppResult<()> {
        let draft = drafts.take(id)?;
        self.reset();
        self.form = RegistrationForm::from_draft(&self.catalog, &draft);
        tracing::debug!(id, "Draft resumed");
        Ok(())
    }

    /// Clear form, queue and any half-finished registration
    pub fn reset(&mut self) {
        self.form = RegistrationForm::default();
        self.queue.clear();
        self.created = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_trims() {
        let form = RegistrationForm {
            first_name: " Jane ".into(),
            last_name: "".into(),
            ..Default::default()
        };
        assert_eq!(form.full_name(), "Jane");
    }

    #[test]
    fn test_set_role_infers_type() {
        let catalog = Catalog::standard();
        let mut form = RegistrationForm::default();
        form.set_department(&catalog, "Workshop");
        form.set_role(&catalog, "Panel Beater");
        assert_eq!(form.employee_type, EmployeeType::Mechanic);

        form.set_department(&catalog, "Finance");
        assert_eq!(form.role_title, None);
    }

    #[test]
    fn test_from_draft_splits_name() {
        let catalog = Catalog::standard();
        let draft = DraftRegistration {
            id: "EXP-0003-1700000000000".into(),
            name: "Mary Anne Wanjiru".into(),
            department: Some("Express".into()),
            role_title: Some("Driver (Bus)".into()),
            branch: Some("".into()),
        };
        let form = RegistrationForm::from_draft(&catalog, &draft);
        assert_eq!(form.first_name, "Mary");
        assert_eq!(form.last_name, "Anne Wanjiru");
        assert_eq!(form.employee_type, EmployeeType::Driver);
        assert_eq!(form.branch, None);
        assert!(!form.quick_add);
    }
}
