//! Statutory identity details
//!
//! Identity numbers are stored as `ID` documents tagged `identity`, the value
//! kept in the document notes. The passport photo is an `ID` document with a
//! file attached.

use shared::models::{DocumentFile, DocumentType, DocumentUpload, EmployeeDocument};
use shared::{AppError, AppResult, ErrorCode};

pub const ID_OR_PASSPORT_DOCUMENT: &str = "National ID / Passport Number";
pub const KRA_PIN_DOCUMENT: &str = "KRA PIN";
pub const NHIF_DOCUMENT: &str = "NHIF Number";
pub const NSSF_DOCUMENT: &str = "NSSF Number";
pub const PASSPORT_PHOTO_DOCUMENT: &str = "Passport-size photo";
pub const IDENTITY_TAG: &str = "identity";

/// The four value-carrying identity document names, in entry order
pub const IDENTITY_VALUE_DOCUMENTS: [&str; 4] = [
    ID_OR_PASSPORT_DOCUMENT,
    KRA_PIN_DOCUMENT,
    NHIF_DOCUMENT,
    NSSF_DOCUMENT,
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdentityDetails {
    pub id_or_passport: String,
    pub kra_pin: String,
    pub nhif: String,
    pub nssf: String,
    pub passport_photo: Option<DocumentFile>,
}

impl IdentityDetails {
    /// Values paired with their document names
    pub fn values(&self) -> [(&'static str, &str); 4] {
        [
            (ID_OR_PASSPORT_DOCUMENT, self.id_or_passport.as_str()),
            (KRA_PIN_DOCUMENT, self.kra_pin.as_str()),
            (NHIF_DOCUMENT, self.nhif.as_str()),
            (NSSF_DOCUMENT, self.nssf.as_str()),
        ]
    }

    /// All four numbers and the photo are needed for a full registration
    pub fn validate(&self) -> AppResult<()> {
        let missing: Vec<&str> = self
            .values()
            .iter()
            .filter(|(_, v)| v.trim().is_empty())
            .map(|(name, _)| *name)
            .chain(self.passport_photo.is_none().then_some(PASSPORT_PHOTO_DOCUMENT))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::new(ErrorCode::IdentityIncomplete).with_detail("missing", missing))
        }
    }

    /// Uploads storing these details for a new employee; the photo last
    pub fn uploads(&self, employee_id: i64) -> Vec<DocumentUpload> {
        let mut uploads: Vec<DocumentUpload> = self
            .values()
            .iter()
            .map(|(name, value)| value_upload(employee_id, name, value))
            .collect();
        if let Some(photo) = &self.passport_photo {
            uploads.push(photo_upload(employee_id, photo.clone()));
        }
        uploads
    }

    /// Current values recorded in an employee's documents.
    ///
    /// Missing documents or notes read as empty; the photo is never loaded.
    pub fn from_documents(documents: &[EmployeeDocument]) -> Self {
        let note = |name: &str| {
            find_document(documents, name)
                .and_then(|d| d.notes.clone())
                .unwrap_or_default()
        };
        Self {
            id_or_passport: note(ID_OR_PASSPORT_DOCUMENT),
            kra_pin: note(KRA_PIN_DOCUMENT),
            nhif: note(NHIF_DOCUMENT),
            nssf: note(NSSF_DOCUMENT),
            passport_photo: None,
        }
    }
}

/// First document with exactly `name`
pub fn find_document<'a>(documents: &'a [EmployeeDocument], name: &str) -> Option<&'a EmployeeDocument> {
    documents.iter().find(|d| d.document_name == name)
}

pub(crate) fn value_upload(employee_id: i64, name: &str, value: &str) -> DocumentUpload {
    DocumentUpload::new(employee_id, DocumentType::Id, name)
        .with_tag(IDENTITY_TAG)
        .with_notes(value)
}

pub(crate) fn photo_upload(employee_id: i64, photo: DocumentFile) -> DocumentUpload {
    DocumentUpload::new(employee_id, DocumentType::Id, PASSPORT_PHOTO_DOCUMENT)
        .with_tag(IDENTITY_TAG)
        .with_file(photo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ExpiryStatus;

    fn complete() -> IdentityDetails {
        IdentityDetails {
            id_or_passport: "12345678".into(),
            kra_pin: "A001234567Z".into(),
            nhif: "NH-99".into(),
            nssf: "NS-42".into(),
            passport_photo: Some(DocumentFile::new("me.jpg", vec![0xFF, 0xD8])),
        }
    }

    fn doc(id: i64, name: &str, notes: Option<&str>) -> EmployeeDocument {
        EmployeeDocument {
            id,
            employee_id: 7,
            document_type: DocumentType::Id,
            document_name: name.into(),
            file_path: None,
            tag: Some(IDENTITY_TAG.into()),
            issue_date: None,
            expiry_date: None,
            status: ExpiryStatus::Valid,
            is_sensitive: false,
            verified: false,
            approved_by: None,
            notes: notes.map(str::to_string),
        }
    }

    #[test]
    fn test_validate_requires_every_field() {
        assert!(complete().validate().is_ok());

        let mut details = complete();
        details.nssf = "  ".into();
        details.passport_photo = None;
        let err = details.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::IdentityIncomplete);
        assert_eq!(
            err.message,
            "Enter National ID/Passport, KRA PIN, NHIF, NSSF and upload passport photo"
        );
        assert_eq!(
            err.detail("missing"),
            Some(&serde_json::json!([NSSF_DOCUMENT, PASSPORT_PHOTO_DOCUMENT]))
        );
    }

    #[test]
    fn test_uploads_are_tagged_id_documents() {
        let uploads = complete().uploads(7);
        assert_eq!(uploads.len(), 5);
        assert!(uploads.iter().all(|u| u.document_type == DocumentType::Id));
        assert!(uploads.iter().all(|u| u.tag.as_deref() == Some(IDENTITY_TAG)));
        assert_eq!(uploads[1].document_name, KRA_PIN_DOCUMENT);
        assert_eq!(uploads[1].notes.as_deref(), Some("A001234567Z"));
        assert_eq!(uploads[4].document_name, PASSPORT_PHOTO_DOCUMENT);
        assert!(uploads[4].file.is_some());
    }

    #[test]
    fn test_from_documents_reads_notes() {
        let docs = vec![
            doc(1, KRA_PIN_DOCUMENT, Some("P051")),
            doc(2, NHIF_DOCUMENT, None),
            doc(3, "Referee Letter", Some("ignored")),
        ];
        let details = IdentityDetails::from_documents(&docs);
        assert_eq!(details.kra_pin, "P051");
        assert_eq!(details.nhif, "");
        assert_eq!(details.id_or_passport, "");
        assert!(details.passport_photo.is_none());
    }
}
