//! In-memory HR service
//!
//! Implements [`HrService`] over plain vectors so the tracker's flows can be
//! exercised without a backend. Failures can be injected per document name
//! or for the whole service.

use async_trait::async_trait;
use chrono::{Days, Local, NaiveDate};
use hr_client::{ClientError, ClientResult, HrService};
use parking_lot::Mutex;
use shared::models::{
    Certification, DocumentUpdate, DocumentUpload, Employee, EmployeeCountByType, EmployeeCreate,
    EmployeeDocument, EmployeeFilter, EmployeeHistory, EmployeeStatus, EmployeeUpdate,
    ExpiryStatus, HolidayCalendar, HolidayQuery,
};
use std::collections::{BTreeMap, HashSet};

#[derive(Default)]
struct State {
    employees: Vec<Employee>,
    documents: Vec<EmployeeDocument>,
    certifications: Vec<Certification>,
    history: Vec<EmployeeHistory>,
    holidays: Option<HolidayCalendar>,
    next_id: i64,
    /// Every upload received, in arrival order
    uploads: Vec<DocumentUpload>,
    deleted: Vec<i64>,
    failing_documents: HashSet<String>,
    unavailable: bool,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Mock HR backend
pub struct MockHrService {
    state: Mutex<State>,
    today: NaiveDate,
}

impl Default for MockHrService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHrService {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::default()),
            today: Local::now().date_naive(),
        }
    }

    /// Fix "today" for expiry windows
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn with_employees(self, employees: Vec<Employee>) -> Self {
        {
            let mut state = self.state.lock();
            let max_id = employees.iter().map(|e| e.id).max().unwrap_or(0);
            state.next_id = state.next_id.max(max_id);
            state.employees.extend(employees);
        }
        self
    }

    pub fn with_documents(self, documents: Vec<EmployeeDocument>) -> Self {
        {
            let mut state = self.state.lock();
            let max_id = documents.iter().map(|d| d.id).max().unwrap_or(0);
            state.next_id = state.next_id.max(max_id);
            state.documents.extend(documents);
        }
        self
    }

    pub fn with_certifications(self, certifications: Vec<Certification>) -> Self {
        self.state.lock().certifications.extend(certifications);
        self
    }

    pub fn with_history(self, history: Vec<EmployeeHistory>) -> Self {
        self.state.lock().history.extend(history);
        self
    }

    pub fn with_holidays(self, calendar: HolidayCalendar) -> Self {
        self.state.lock().holidays = Some(calendar);
        self
    }

    /// Reject uploads whose document name equals `name`
    pub fn fail_uploads_named(&self, name: impl Into<String>) {
        self.state.lock().failing_documents.insert(name.into());
    }

    /// Stop rejecting uploads
    pub fn clear_failures(&self) {
        self.state.lock().failing_documents.clear();
    }

    /// Make every call fail as if the backend were down
    pub fn set_unavailable(&self, unavailable: bool) {
        self.state.lock().unavailable = unavailable;
    }

    pub fn employees(&self) -> Vec<Employee> {
        self.state.lock().employees.clone()
    }

    pub fn documents(&self) -> Vec<EmployeeDocument> {
        self.state.lock().documents.clone()
    }

    pub fn uploads(&self) -> Vec<DocumentUpload> {
        self.state.lock().uploads.clone()
    }

    pub fn deleted_documents(&self) -> Vec<i64> {
        self.state.lock().deleted.clone()
    }

    fn check_available(&self) -> ClientResult<()> {
        if self.state.lock().unavailable {
            return Err(ClientError::Internal("service unavailable".into()));
        }
        Ok(())
    }

    fn within(&self, date: Option<NaiveDate>, days: u32) -> bool {
        let Some(date) = date else {
            return false;
        };
        let horizon = self
            .today
            .checked_add_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MAX);
        date >= self.today && date <= horizon
    }
}

fn matches_filter(emp: &Employee, filter: &EmployeeFilter) -> bool {
    if let Some(search) = filter.search.as_deref().map(str::to_lowercase) {
        let hit = emp.name.to_lowercase().contains(&search)
            || emp.employee_number.to_lowercase().contains(&search);
        if !hit {
            return false;
        }
    }
    if filter.branch.is_some() && emp.branch != filter.branch {
        return false;
    }
    if filter.department.is_some() && emp.department != filter.department {
        return false;
    }
    if filter.employee_type.is_some_and(|t| t != emp.employee_type) {
        return false;
    }
    if filter.status.is_some_and(|s| s != emp.status) {
        return false;
    }
    true
}

#[async_trait]
impl HrService for MockHrService {
    async fn list_employees(&self, filter: &EmployeeFilter) -> ClientResult<Vec<Employee>> {
        self.check_available()?;
        let state = self.state.lock();
        Ok(state
            .employees
            .iter()
            .filter(|e| matches_filter(e, filter))
            .cloned()
            .collect())
    }

    async fn get_employee(&self, id: i64) -> ClientResult<Employee> {
        self.check_available()?;
        self.state
            .lock()
            .employees
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("Employee {} not found", id)))
    }

    async fn create_employee(&self, data: &EmployeeCreate) -> ClientResult<Employee> {
        self.check_available()?;
        let mut state = self.state.lock();
        if state
            .employees
            .iter()
            .any(|e| e.employee_number == data.employee_number)
        {
            return Err(ClientError::Conflict(format!(
                "Employee number {} already exists",
                data.employee_number
            )));
        }

        let employee = Employee {
            id: state.next_id(),
            employee_number: data.employee_number.clone(),
            name: data.name.clone(),
            email: data.email.clone(),
            phone: data.phone.clone(),
            phone_alt: data.phone_alt.clone(),
            date_of_birth: data.date_of_birth,
            address: data.address.clone(),
            role_title: data.role_title.clone(),
            employee_type: data.employee_type,
            department: data.department.clone(),
            branch: data.branch.clone(),
            secondary_department: data.secondary_department.clone(),
            status: data.status,
            employment_date: data.employment_date,
            termination_date: None,
            supervisor_id: data.supervisor_id,
            contract_type: Some(data.contract_type.as_str().to_string()),
            contract_start: data.contract_start,
            contract_end: data.contract_end,
            probation_end: data.probation_end,
            license_number: None,
            emergency_contact_name: data.emergency_contact_name.clone(),
            emergency_contact_phone: data.emergency_contact_phone.clone(),
        };
        tracing::debug!(id = employee.id, number = %employee.employee_number, "mock employee created");
        state.employees.push(employee.clone());
        Ok(employee)
    }

    async fn update_employee(&self, id: i64, data: &EmployeeUpdate) -> ClientResult<Employee> {
        self.check_available()?;
        let mut state = self.state.lock();
        let emp = state
            .employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ClientError::NotFound(format!("Employee {} not found", id)))?;

        if let Some(v) = &data.name {
            emp.name = v.clone();
        }
        if let Some(v) = &data.email {
            emp.email = Some(v.clone());
        }
        if let Some(v) = &data.phone {
            emp.phone = v.clone();
        }
        if let Some(v) = &data.phone_alt {
            emp.phone_alt = Some(v.clone());
        }
        if let Some(v) = data.date_of_birth {
            emp.date_of_birth = Some(v);
        }
        if let Some(v) = &data.address {
            emp.address = Some(v.clone());
        }
        if let Some(v) = &data.role_title {
            emp.role_title = Some(v.clone());
        }
        if let Some(v) = data.employee_type {
            emp.employee_type = v;
        }
        if let Some(v) = &data.department {
            emp.department = Some(v.clone());
        }
        if let Some(v) = &data.branch {
            emp.branch = Some(v.clone());
        }
        if let Some(v) = data.status {
            emp.status = v;
        }
        if let Some(v) = data.termination_date {
            emp.termination_date = Some(v);
        }
        if let Some(v) = data.supervisor_id {
            emp.supervisor_id = Some(v);
        }
        if let Some(v) = &data.license_number {
            emp.license_number = Some(v.clone());
        }
        if let Some(v) = &data.emergency_contact_name {
            emp.emergency_contact_name = Some(v.clone());
        }
        if let Some(v) = &data.emergency_contact_phone {
            emp.emergency_contact_phone = Some(v.clone());
        }
        Ok(emp.clone())
    }

    async fn employee_history(&self, employee_id: i64) -> ClientResult<Vec<EmployeeHistory>> {
        self.check_available()?;
        Ok(self
            .state
            .lock()
            .history
            .iter()
            .filter(|h| h.employee_id == employee_id)
            .cloned()
            .collect())
    }

    async fn list_documents(&self, employee_id: Option<i64>) -> ClientResult<Vec<EmployeeDocument>> {
        self.check_available()?;
        Ok(self
            .state
            .lock()
            .documents
            .iter()
            .filter(|d| employee_id.is_none_or(|id| d.employee_id == id))
            .cloned()
            .collect())
    }

    async fn upload_document(&self, upload: &DocumentUpload) -> ClientResult<EmployeeDocument> {
        self.check_available()?;
        let mut state = self.state.lock();
        state.uploads.push(upload.clone());

        if state.failing_documents.contains(&upload.document_name) {
            return Err(ClientError::Internal(format!(
                "Upload of {} failed",
                upload.document_name
            )));
        }

        let document = EmployeeDocument {
            id: state.next_id(),
            employee_id: upload.employee_id,
            document_type: upload.document_type,
            document_name: upload.document_name.clone(),
            file_path: upload
                .file
                .as_ref()
                .map(|f| format!("uploads/{}/{}", upload.employee_id, f.file_name)),
            tag: upload.tag.clone(),
            issue_date: upload.issue_date,
            expiry_date: upload.expiry_date,
            status: ExpiryStatus::from_expiry(upload.expiry_date, ExpiryStatus::Valid, self.today),
            is_sensitive: upload.is_sensitive.unwrap_or(false),
            verified: false,
            approved_by: None,
            notes: upload.notes.clone(),
        };
        state.documents.push(document.clone());
        Ok(document)
    }

    async fn update_document(&self, id: i64, data: &DocumentUpdate) -> ClientResult<EmployeeDocument> {
        self.check_available()?;
        let today = self.today;
        let mut state = self.state.lock();
        let doc = state
            .documents
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| ClientError::NotFound(format!("Document {} not found", id)))?;

        if let Some(v) = &data.document_name {
            doc.document_name = v.clone();
        }
        if let Some(v) = data.expiry_date {
            doc.expiry_date = Some(v);
            doc.status = ExpiryStatus::from_expiry(Some(v), doc.status, today);
        }
        if let Some(v) = data.status {
            doc.status = v;
        }
        if let Some(v) = &data.notes {
            doc.notes = Some(v.clone());
        }
        if let Some(v) = &data.tag {
            doc.tag = Some(v.clone());
        }
        if let Some(v) = data.verified {
            doc.verified = v;
        }
        if let Some(v) = &data.approved_by {
            doc.approved_by = Some(v.clone());
        }
        Ok(doc.clone())
    }

    async fn delete_document(&self, id: i64) -> ClientResult<()> {
        self.check_available()?;
        let mut state = self.state.lock();
        let before = state.documents.len();
        state.documents.retain(|d| d.id != id);
        if state.documents.len() == before {
            return Err(ClientError::NotFound(format!("Document {} not found", id)));
        }
        state.deleted.push(id);
        Ok(())
    }

    async fn list_certifications(&self, employee_id: Option<i64>) -> ClientResult<Vec<Certification>> {
        self.check_available()?;
        Ok(self
            .state
            .lock()
            .certifications
            .iter()
            .filter(|c| employee_id.is_none_or(|id| c.employee_id == id))
            .cloned()
            .collect())
    }

    async fn expiring_documents(&self, days: u32) -> ClientResult<Vec<EmployeeDocument>> {
        self.check_available()?;
        Ok(self
            .state
            .lock()
            .documents
            .iter()
            .filter(|d| self.within(d.expiry_date, days))
            .cloned()
            .collect())
    }

    async fn expiring_certifications(&self, days: u32) -> ClientResult<Vec<Certification>> {
        self.check_available()?;
        Ok(self
            .state
            .lock()
            .certifications
            .iter()
            .filter(|c| self.within(c.expiry_date, days))
            .cloned()
            .collect())
    }

    async fn employee_count_by_type(&self) -> ClientResult<Vec<EmployeeCountByType>> {
        self.check_available()?;
        let state = self.state.lock();
        let mut counts: BTreeMap<&'static str, EmployeeCountByType> = BTreeMap::new();
        for emp in state
            .employees
            .iter()
            .filter(|e| e.status == EmployeeStatus::Active)
        {
            counts
                .entry(emp.employee_type.as_str())
                .or_insert(EmployeeCountByType {
                    employee_type: emp.employee_type,
                    count: 0,
                })
                .count += 1;
        }
        Ok(counts.into_values().collect())
    }

    async fn expiring_contracts(&self, days: u32) -> ClientResult<Vec<Employee>> {
        self.check_available()?;
        Ok(self
            .state
            .lock()
            .employees
            .iter()
            .filter(|e| self.within(e.contract_end, days))
            .cloned()
            .collect())
    }

    async fn upcoming_probation_completions(&self, days: u32) -> ClientResult<Vec<Employee>> {
        self.check_available()?;
        Ok(self
            .state
            .lock()
            .employees
            .iter()
            .filter(|e| self.within(e.probation_end, days))
            .cloned()
            .collect())
    }

    async fn holidays(&self, query: &HolidayQuery) -> ClientResult<HolidayCalendar> {
        self.check_available()?;
        Ok(self
            .state
            .lock()
            .holidays
            .clone()
            .unwrap_or_else(|| HolidayCalendar {
                year: query.year,
                country: query.country.clone(),
                branch: query.branch.clone(),
                dates: Vec::new(),
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{ContractType, DocumentType, EmployeeType};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create(number: &str, department: &str) -> EmployeeCreate {
        EmployeeCreate {
            employee_number: number.into(),
            name: "Test Person".into(),
            email: None,
            phone: "0700".into(),
            phone_alt: None,
            date_of_birth: None,
            address: None,
            role_title: Some("Driver".into()),
            employee_type: EmployeeType::Driver,
            department: Some(department.into()),
            branch: Some("HQ".into()),
            secondary_department: None,
            supervisor_id: None,
            status: EmployeeStatus::Active,
            employment_date: date(2024, 1, 1),
            contract_type: ContractType::FullTime,
            contract_start: None,
            contract_end: None,
            probation_end: None,
            emergency_contact_name: None,
            emergency_contact_phone: None,
        }
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_number() {
        let mock = MockHrService::new();
        mock.create_employee(&create("TPT-0001", "Transport")).await.unwrap();
        let err = mock
            .create_employee(&create("TPT-0001", "Transport"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_filter_by_department() {
        let mock = MockHrService::new();
        mock.create_employee(&create("TPT-0001", "Transport")).await.unwrap();
        mock.create_employee(&create("EXP-0001", "Express")).await.unwrap();

        let filter = EmployeeFilter {
            department: Some("Express".into()),
            ..Default::default()
        };
        let found = mock.list_employees(&filter).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].employee_number, "EXP-0001");
    }

    #[tokio::test]
    async fn test_injected_upload_failure() {
        let mock = MockHrService::new();
        mock.fail_uploads_named("PSV Badge");

        let ok = DocumentUpload::new(1, DocumentType::License, "Valid Driver's License (PSV)");
        let bad = DocumentUpload::new(1, DocumentType::License, "PSV Badge");
        assert!(mock.upload_document(&ok).await.is_ok());
        assert!(mock.upload_document(&bad).await.is_err());
        assert_eq!(mock.uploads().len(), 2);
        assert_eq!(mock.documents().len(), 1);
    }

    #[tokio::test]
    async fn test_expiring_documents_window() {
        let mock = MockHrService::new().with_today(date(2024, 6, 1));
        let soon = DocumentUpload::new(1, DocumentType::Certificate, "Medical Fitness Certificate")
            .with_dates(None, Some(date(2024, 6, 20)));
        let later = DocumentUpload::new(1, DocumentType::Certificate, "PSV Badge")
            .with_dates(None, Some(date(2024, 12, 1)));
        mock.upload_document(&soon).await.unwrap();
        mock.upload_document(&later).await.unwrap();

        let expiring = mock.expiring_documents(60).await.unwrap();
        assert_eq!(expiring.len(), 1);
        assert_eq!(expiring[0].status, ExpiryStatus::ExpiringSoon);
    }

    #[tokio::test]
    async fn test_unavailable() {
        let mock = MockHrService::new();
        mock.set_unavailable(true);
        assert!(mock.employee_count_by_type().await.is_err());
    }
}
