//! Employee profile editing
//!
//! [`ProfileEditor`] works on one loaded employee and their documents.
//! Every mutation first checks the session may manage the employee, then
//! calls the HR service and refreshes or patches the local document list.

use chrono::NaiveDate;
use futures::FutureExt;
use futures::future::{BoxFuture, try_join_all};
use hr_client::{ClientResult, HrService};
use shared::models::{
    DocumentUpdate, Employee, EmployeeDocument, EmployeeHistory, EmployeeUpdate, ExpiryStatus,
};
use shared::util::base_document_name;
use shared::{AppError, AppResult, ErrorCode};
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::compliance::{self, ComplianceSummary, DocumentSuggestion};
use crate::core::SessionContext;
use crate::identity::{
    IdentityDetails, PASSPORT_PHOTO_DOCUMENT, find_document, photo_upload, value_upload,
};
use crate::queue::PendingDocumentQueue;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
};

type ServiceOp = BoxFuture<'static, ClientResult<()>>;

pub struct ProfileEditor {
    catalog: Arc<Catalog>,
    service: Arc<dyn HrService>,
    session: SessionContext,
    employee: Employee,
    documents: Vec<EmployeeDocument>,
    queue: PendingDocumentQueue,
}

impl ProfileEditor {
    /// Load the employee's documents
    pub async fn open(
        catalog: Arc<Catalog>,
        service: Arc<dyn HrService>,
        session: SessionContext,
        employee: Employee,
    ) -> AppResult<Self> {
        let documents = service.list_documents(Some(employee.id)).await.map_err(|e| {
            tracing::error!(employee_id = employee.id, error = %e, "Failed to load documents");
            AppError::with_message(ErrorCode::RemoteServiceError, "Failed to load documents")
        })?;

        Ok(Self {
            catalog,
            service,
            session,
            employee,
            documents,
            queue: PendingDocumentQueue::new(),
        })
    }

    pub fn employee(&self) -> &Employee {
        &self.employee
    }

    pub fn documents(&self) -> &[EmployeeDocument] {
        &self.documents
    }

    /// Documents with their expiry status as of `today`
    pub fn documents_with_status(&self, today: NaiveDate) -> Vec<(&EmployeeDocument, ExpiryStatus)> {
        self.documents
            .iter()
            .map(|d| (d, d.effective_status(today)))
            .collect()
    }

    /// Identity numbers currently on file
    pub fn identity(&self) -> IdentityDetails {
        IdentityDetails::from_documents(&self.documents)
    }

    pub fn can_manage(&self) -> bool {
        self.session.can_manage(&self.employee)
    }

    fn ensure_can_manage(&self) -> AppResult<()> {
        if self.can_manage() {
            return Ok(());
        }
        let err = match self.employee.branch.as_deref().filter(|b| !b.is_empty()) {
            Some(branch) => AppError::new(ErrorCode::BranchMismatch)
                .with_detail("employee_branch", branch)
                .with_detail("session_branch", self.session.branch.as_str()),
            None => AppError::new(ErrorCode::AdminRequired).with_detail("employee_id", self.employee.id),
        };
        tracing::warn!(employee_id = self.employee.id, role = %self.session.role, "Profile change refused");
        Err(err)
    }

    fn document_mut(&mut self, id: i64) -> AppResult<&mut EmployeeDocument> {
        self.documents
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| AppError::with_message(ErrorCode::DocumentNotFound, format!("Document {} not found", id)))
    }

    /// Reload the document list
    pub async fn refresh(&mut self) -> AppResult<()> {
        self.documents = self.service.list_documents(Some(self.employee.id)).await?;
        Ok(())
    }

    /// Store identity numbers and optionally replace the passport photo.
    ///
    /// Existing identity documents get their notes updated, missing ones are
    /// created. All calls are issued together, then the list is reloaded.
    pub async fn save_identity(&mut self, details: &IdentityDetails) -> AppResult<()> {
        self.ensure_can_manage()?;
        let employee_id = self.employee.id;
        let mut ops: Vec<ServiceOp> = Vec::new();

        for (name, value) in details.values() {
            let service = Arc::clone(&self.service);
            match find_document(&self.documents, name) {
                Some(doc) => {
                    let id = doc.id;
                    let update = DocumentUpdate {
                        notes: Some(value.to_string()),
                        ..Default::default()
                    };
                    ops.push(async move { service.update_document(id, &update).await.map(|_| ()) }.boxed());
                }
                None => {
                    let upload = value_upload(employee_id, name, value);
                    ops.push(async move { service.upload_document(&upload).await.map(|_| ()) }.boxed());
                }
            }
        }

        if let Some(photo) = &details.passport_photo {
            if let Some(existing) = find_document(&self.documents, PASSPORT_PHOTO_DOCUMENT) {
                let service = Arc::clone(&self.service);
                let id = existing.id;
                ops.push(async move { service.delete_document(id).await }.boxed());
            }
            let service = Arc::clone(&self.service);
            let upload = photo_upload(employee_id, photo.clone());
            ops.push(async move { service.upload_document(&upload).await.map(|_| ()) }.boxed());
        }

        try_join_all(ops).await.map_err(|e| {
            tracing::error!(employee_id, error = %e, "Identity save failed");
            AppError::from(e)
        })?;
        tracing::info!(employee_id, "Identity saved");
        self.refresh().await
    }

    pub async fn set_verified(&mut self, document_id: i64, verified: bool) -> AppResult<()> {
        self.ensure_can_manage()?;
        let update = DocumentUpdate {
            verified: Some(verified),
            ..Default::default()
        };
        let updated = self.service.update_document(document_id, &update).await?;
        self.document_mut(document_id)?.verified = updated.verified;
        Ok(())
    }

    pub async fn set_expiry(&mut self, document_id: i64, expiry_date: NaiveDate) -> AppResult<()> {
        self.ensure_can_manage()?;
        let update = DocumentUpdate {
            expiry_date: Some(expiry_date),
            ..Default::default()
        };
        self.service.update_document(document_id, &update).await?;
        self.refresh().await
    }

    /// Record who approved a document; the name must not be blank
    pub async fn approve(&mut self, document_id: i64, approver: &str) -> AppResult<()> {
        self.ensure_can_manage()?;
        let approver = approver.trim();
        if approver.is_empty() {
            return Err(AppError::required("approver"));
        }
        let update = DocumentUpdate {
            approved_by: Some(approver.to_string()),
            ..Default::default()
        };
        let updated = self.service.update_document(document_id, &update).await?;
        self.document_mut(document_id)?.approved_by = updated.approved_by;
        Ok(())
    }

    pub async fn delete_document(&mut self, document_id: i64) -> AppResult<()> {
        self.ensure_can_manage()?;
        self.service.delete_document(document_id).await?;
        tracing::info!(employee_id = self.employee.id, document_id, "Document deleted");
        self.refresh().await
    }

    pub fn queue(&self) -> &PendingDocumentQueue {
        &self.queue
    }

    pub fn queue_mut(&mut self) -> &mut PendingDocumentQueue {
        &mut self.queue
    }

    fn present_names(&self) -> Vec<&str> {
        self.documents
            .iter()
            .map(|d| d.document_name.as_str())
            .chain(self.queue.names())
            .collect()
    }

    /// Next department document to collect, counting stored and queued ones
    pub fn suggestion(&self) -> Option<DocumentSuggestion> {
        compliance::suggest_document(
            &self.catalog,
            self.employee.department_or_empty(),
            self.employee.role_title_or_empty(),
            self.present_names(),
        )
    }

    pub fn compliance_summary(&self) -> ComplianceSummary {
        compliance::summarize(
            &self.catalog,
            self.employee.department_or_empty(),
            self.employee.role_title_or_empty(),
            &self.present_names(),
        )
    }

    /// Upload the queued documents.
    ///
    /// Each upload replaces a stored document with the same base name unless
    /// that document may be held several times. The queue is cleared only
    /// when every upload succeeded.
    pub async fn upload_queue(&mut self) -> AppResult<Vec<EmployeeDocument>> {
        self.ensure_can_manage()?;
        if self.queue.is_empty() {
            return Err(AppError::new(ErrorCode::DocumentQueueEmpty));
        }

        let employee_id = self.employee.id;
        let ops = self.queue.items().iter().map(|item| {
            let service = Arc::clone(&self.service);
            let upload = item.to_upload(employee_id);
            let base = item.base_name();
            let replaced = (!self.catalog.is_multi_instance(base))
                .then(|| {
                    self.documents
                        .iter()
                        .find(|d| base_document_name(&d.document_name) == base)
                        .map(|d| d.id)
                })
                .flatten();
            async move {
                if let Some(id) = replaced {
                    service.delete_document(id).await?;
                }
                service.upload_document(&upload).await
            }
        });

        let uploaded = try_join_all(ops).await.map_err(|e| {
            tracing::error!(employee_id, error = %e, "Profile upload failed, queue kept");
            AppError::with_message(ErrorCode::DocumentUploadFailed, format!("Document upload failed: {}", e))
        })?;
        tracing::info!(employee_id, count = uploaded.len(), "Profile documents uploaded");

        self.refresh().await?;
        self.queue.clear();
        Ok(uploaded)
    }

    /// Edit form pre-filled from the employee
    pub fn edit_form(&self) -> EmployeeUpdate {
        let e = &self.employee;
        EmployeeUpdate {
            name: Some(e.name.clone()),
            email: e.email.clone(),
            phone: Some(e.phone.clone()),
            phone_alt: e.phone_alt.clone(),
            address: e.address.clone(),
            role_title: e.role_title.clone(),
            employee_type: Some(e.employee_type),
            department: e.department.clone(),
            branch: e.branch.clone(),
            status: Some(e.status),
            ..Default::default()
        }
    }

    /// Save employee details; an empty update is a no-op
    pub async fn update_employee(&mut self, update: &EmployeeUpdate) -> AppResult<&Employee> {
        self.ensure_can_manage()?;
        if update.is_empty() {
            return Ok(&self.employee);
        }
        if let Some(name) = &update.name
            && name.trim().is_empty()
        {
            return Err(AppError::required("name"));
        }
        validate_optional_text(&update.name, "name", MAX_NAME_LEN)?;
        validate_optional_text(&update.email, "email", MAX_EMAIL_LEN)?;
        validate_optional_text(&update.phone, "phone", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&update.address, "address", MAX_ADDRESS_LEN)?;

        self.employee = self.service.update_employee(self.employee.id, update).await?;
        tracing::info!(employee_id = self.employee.id, "Employee updated");
        Ok(&self.employee)
    }

    pub async fn history(&self) -> AppResult<Vec<EmployeeHistory>> {
        Ok(self.service.employee_history(self.employee.id).await?)
    }
}
