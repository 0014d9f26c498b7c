//! Pending document queue
//!
//! Documents collected for an employee before one batch upload. Entries are
//! kept newest first. A commit uploads everything together and clears the
//! queue only when every upload succeeded.

use chrono::NaiveDate;
use futures::future::try_join_all;
use hr_client::HrService;
use shared::models::{DocumentFile, DocumentType, DocumentUpload, EmployeeDocument};
use shared::util::{base_document_name, compose_document_name, document_subtype};
use shared::{AppError, AppResult, ErrorCode};

use crate::catalog::Catalog;
use crate::compliance::DocumentSuggestion;

/// Document waiting to be uploaded
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDocument {
    pub document_type: DocumentType,
    /// `"<base>"` or `"<base> - <subtype>"`
    pub document_name: String,
    pub tag: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub file: DocumentFile,
}

impl PendingDocument {
    pub fn base_name(&self) -> &str {
        base_document_name(&self.document_name)
    }

    pub fn to_upload(&self, employee_id: i64) -> DocumentUpload {
        let upload = DocumentUpload::new(employee_id, self.document_type, &self.document_name)
            .with_dates(self.issue_date, self.expiry_date)
            .with_file(self.file.clone());
        match &self.tag {
            Some(tag) => upload.with_tag(tag),
            None => upload,
        }
    }
}

/// Document entry form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentForm {
    pub document_type: Option<DocumentType>,
    /// Base name
    pub document_name: Option<String>,
    pub sub_type: Option<String>,
    pub tag: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub file: Option<DocumentFile>,
}

impl DocumentForm {
    /// Select a document by name, applying its preset type and tag.
    ///
    /// A composite `"<base> - <subtype>"` selection fills both fields.
    pub fn select(&mut self, catalog: &Catalog, selection: &str) {
        let base = base_document_name(selection);
        self.document_name = Some(base.to_string());
        self.sub_type = document_subtype(selection).map(str::to_string);
        let preset = catalog.preset(base);
        self.document_type = preset.map(|p| p.document_type);
        self.tag = preset.and_then(|p| p.tag.clone());
    }

    /// Pre-fill name, type and tag from a suggestion, keeping dates and file
    pub fn apply_suggestion(&mut self, suggestion: &DocumentSuggestion) {
        self.document_name = Some(suggestion.name.clone());
        self.sub_type = None;
        self.document_type = suggestion.document_type;
        self.tag = suggestion.tag.clone();
    }

    /// Turn the form into a queue entry; type, name and file are required
    pub fn into_pending(self) -> AppResult<PendingDocument> {
        let name = self.document_name.filter(|n| !n.trim().is_empty());
        let (Some(document_type), Some(name), Some(file)) = (self.document_type, name, self.file) else {
            return Err(AppError::new(ErrorCode::DocumentIncomplete));
        };
        Ok(PendingDocument {
            document_type,
            document_name: compose_document_name(&name, self.sub_type.as_deref()),
            tag: self.tag.filter(|t| !t.trim().is_empty()),
            issue_date: self.issue_date,
            expiry_date: self.expiry_date,
            file,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct PendingDocumentQueue {
    items: Vec<PendingDocument>,
}

impl PendingDocumentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry at the front
    pub fn enqueue(&mut self, item: PendingDocument) {
        tracing::debug!(document = %item.document_name, "Document queued");
        self.items.insert(0, item);
    }

    /// Validate a form and queue it
    pub fn enqueue_form(&mut self, form: DocumentForm) -> AppResult<()> {
        self.enqueue(form.into_pending()?);
        Ok(())
    }

    /// Remove the entry at `index`
    pub fn dequeue(&mut self, index: usize) -> AppResult<PendingDocument> {
        if index >= self.items.len() {
            return Err(AppError::new(ErrorCode::InvalidQueueIndex)
                .with_detail("index", index)
                .with_detail("len", self.items.len()));
        }
        Ok(self.items.remove(index))
    }

    pub fn items(&self) -> &[PendingDocument] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Full document names
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|i| i.document_name.as_str()).collect()
    }

    pub fn base_names(&self) -> Vec<&str> {
        self.items.iter().map(PendingDocument::base_name).collect()
    }

    /// Upload every entry for `employee_id`.
    ///
    /// Uploads run concurrently. On any failure the queue is left intact for
    /// a retry; documents already stored are not rolled back.
    pub async fn commit(&mut self, service: &dyn HrService, employee_id: i64) -> AppResult<Vec<EmployeeDocument>> {
        if self.items.is_empty() {
            return Ok(Vec::new());
        }

        let uploads: Vec<DocumentUpload> = self.items.iter().map(|i| i.to_upload(employee_id)).collect();
        match try_join_all(uploads.iter().map(|u| service.upload_document(u))).await {
            Ok(documents) => {
                tracing::info!(employee_id, count = documents.len(), "Documents uploaded");
                self.items.clear();
                Ok(documents)
            }
            Err(e) => {
                tracing::error!(employee_id, error = %e, "Document upload failed, queue kept");
                Err(AppError::with_message(
                    ErrorCode::DocumentUploadFailed,
                    format!("Document upload failed: {}", e),
                ))
            }
        }
    }
}
