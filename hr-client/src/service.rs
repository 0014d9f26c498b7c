//! HR service API
//!
//! [`HrService`] is the seam between the tracker and the remote HR backend.
//! [`HttpClient`] implements it over the `/hr/...` REST endpoints; tests use
//! an in-memory implementation.

use async_trait::async_trait;
use serde::Serialize;
use shared::models::{
    Certification, DocumentUpdate, DocumentUpload, Employee, EmployeeCountByType, EmployeeCreate,
    EmployeeDocument, EmployeeFilter, EmployeeHistory, EmployeeUpdate, HolidayCalendar,
    HolidayQuery,
};

use crate::{ClientResult, HttpClient};

/// Remote HR operations
#[async_trait]
pub trait HrService: Send + Sync {
    // ========== Employees ==========

    async fn list_employees(&self, filter: &EmployeeFilter) -> ClientResult<Vec<Employee>>;

    async fn get_employee(&self, id: i64) -> ClientResult<Employee>;

    async fn create_employee(&self, data: &EmployeeCreate) -> ClientResult<Employee>;

    async fn update_employee(&self, id: i64, data: &EmployeeUpdate) -> ClientResult<Employee>;

    async fn employee_history(&self, employee_id: i64) -> ClientResult<Vec<EmployeeHistory>>;

    // ========== Documents ==========

    /// All documents, or only those of one employee
    async fn list_documents(&self, employee_id: Option<i64>) -> ClientResult<Vec<EmployeeDocument>>;

    /// Create a document; multipart when a file is attached
    async fn upload_document(&self, upload: &DocumentUpload) -> ClientResult<EmployeeDocument>;

    async fn update_document(&self, id: i64, data: &DocumentUpdate) -> ClientResult<EmployeeDocument>;

    async fn delete_document(&self, id: i64) -> ClientResult<()>;

    // ========== Certifications ==========

    async fn list_certifications(&self, employee_id: Option<i64>) -> ClientResult<Vec<Certification>>;

    // ========== Analytics ==========

    async fn expiring_documents(&self, days: u32) -> ClientResult<Vec<EmployeeDocument>>;

    async fn expiring_certifications(&self, days: u32) -> ClientResult<Vec<Certification>>;

    async fn employee_count_by_type(&self) -> ClientResult<Vec<EmployeeCountByType>>;

    async fn expiring_contracts(&self, days: u32) -> ClientResult<Vec<Employee>>;

    async fn upcoming_probation_completions(&self, days: u32) -> ClientResult<Vec<Employee>>;

    // ========== Calendar ==========

    async fn holidays(&self, query: &HolidayQuery) -> ClientResult<HolidayCalendar>;
}

#[derive(Serialize)]
struct EmployeeIdQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    employee_id: Option<i64>,
}

#[derive(Serialize)]
struct DaysQuery {
    days: u32,
}

#[async_trait]
impl HrService for HttpClient {
    async fn list_employees(&self, filter: &EmployeeFilter) -> ClientResult<Vec<Employee>> {
        self.get_query("/hr/employees", filter).await
    }

    async fn get_employee(&self, id: i64) -> ClientResult<Employee> {
        self.get(&format!("/hr/employees/{}", id)).await
    }

    async fn create_employee(&self, data: &EmployeeCreate) -> ClientResult<Employee> {
        self.post("/hr/employees", data).await
    }

    async fn update_employee(&self, id: i64, data: &EmployeeUpdate) -> ClientResult<Employee> {
        self.put(&format!("/hr/employees/{}", id), data).await
    }

    async fn employee_history(&self, employee_id: i64) -> ClientResult<Vec<EmployeeHistory>> {
        self.get(&format!("/hr/employees/{}/history", employee_id)).await
    }

    async fn list_documents(&self, employee_id: Option<i64>) -> ClientResult<Vec<EmployeeDocument>> {
        self.get_query("/hr/documents", &EmployeeIdQuery { employee_id }).await
    }

    async fn upload_document(&self, upload: &DocumentUpload) -> ClientResult<EmployeeDocument> {
        if upload.file.is_some() {
            self.post_multipart("/hr/documents/upload", upload).await
        } else {
            self.post("/hr/documents", upload).await
        }
    }

    async fn update_document(&self, id: i64, data: &DocumentUpdate) -> ClientResult<EmployeeDocument> {
        self.put(&format!("/hr/documents/{}", id), data).await
    }

    async fn delete_document(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/hr/documents/{}", id)).await
    }

    async fn list_certifications(&self, employee_id: Option<i64>) -> ClientResult<Vec<Certification>> {
        self.get_query("/hr/certifications", &EmployeeIdQuery { employee_id }).await
    }

    async fn expiring_documents(&self, days: u32) -> ClientResult<Vec<EmployeeDocument>> {
        self.get_query("/hr/analytics/expiring-documents", &DaysQuery { days }).await
    }

    async fn expiring_certifications(&self, days: u32) -> ClientResult<Vec<Certification>> {
        self.get_query("/hr/analytics/expiring-certifications", &DaysQuery { days }).await
    }

    async fn employee_count_by_type(&self) -> ClientResult<Vec<EmployeeCountByType>> {
        self.get("/hr/analytics/employee-count-by-type").await
    }

    async fn expiring_contracts(&self, days: u32) -> ClientResult<Vec<Employee>> {
        self.get_query("/hr/analytics/expiring-contracts", &DaysQuery { days }).await
    }

    async fn upcoming_probation_completions(&self, days: u32) -> ClientResult<Vec<Employee>> {
        self.get_query("/hr/analytics/upcoming-probation-completions", &DaysQuery { days })
            .await
    }

    async fn holidays(&self, query: &HolidayQuery) -> ClientResult<HolidayCalendar> {
        self.get_query("/hr/calendar/holidays", query).await
    }
}
