#![allow(dead_code)]

use chrono::NaiveDate;
use hr_service_mock::MockHrService;
use hr_tracker::queue::PendingDocument;
use hr_tracker::{Catalog, IdentityDetails};
use shared::models::{
    DocumentFile, DocumentType, Employee, EmployeeDocument, EmployeeStatus, ExpiryStatus,
};
use std::sync::Arc;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn employee(id: i64, number: &str, department: &str, role: &str, branch: &str) -> Employee {
    let catalog = Catalog::standard();
    Employee {
        id,
        employee_number: number.into(),
        name: format!("Employee {}", id),
        email: None,
        phone: "0712000000".into(),
        phone_alt: None,
        date_of_birth: None,
        address: None,
        role_title: Some(role.into()),
        employee_type: catalog.employee_type_for_role(role),
        department: Some(department.into()),
        branch: Some(branch.into()),
        secondary_department: None,
        status: EmployeeStatus::Active,
        employment_date: date(2023, 1, 9),
        termination_date: None,
        supervisor_id: None,
        contract_type: None,
        contract_start: None,
        contract_end: None,
        probation_end: None,
        license_number: None,
        emergency_contact_name: None,
        emergency_contact_phone: None,
    }
}

pub fn document(id: i64, employee_id: i64, name: &str, notes: Option<&str>) -> EmployeeDocument {
    EmployeeDocument {
        id,
        employee_id,
        document_type: DocumentType::Other,
        document_name: name.into(),
        file_path: None,
        tag: None,
        issue_date: None,
        expiry_date: None,
        status: ExpiryStatus::Valid,
        is_sensitive: false,
        verified: false,
        approved_by: None,
        notes: notes.map(str::to_string),
    }
}

pub fn file(name: &str) -> DocumentFile {
    DocumentFile::new(name, b"%PDF-1.4".to_vec())
}

pub fn pending(catalog: &Catalog, name: &str) -> PendingDocument {
    let base = shared::util::base_document_name(name);
    let preset = catalog.preset(base);
    PendingDocument {
        document_type: preset.map(|p| p.document_type).unwrap_or(DocumentType::Other),
        document_name: name.into(),
        tag: preset.and_then(|p| p.tag.clone()),
        issue_date: None,
        expiry_date: None,
        file: file("scan.pdf"),
    }
}

pub fn complete_identity() -> IdentityDetails {
    IdentityDetails {
        id_or_passport: "29876543".into(),
        kra_pin: "A009876543K".into(),
        nhif: "NHIF-5521".into(),
        nssf: "NSSF-7730".into(),
        passport_photo: Some(DocumentFile::new("photo.jpg", vec![0xFF, 0xD8, 0xFF])),
    }
}

pub fn services(mock: MockHrService) -> (Arc<MockHrService>, Arc<dyn hr_client::HrService>) {
    let mock = Arc::new(mock);
    let service: Arc<dyn hr_client::HrService> = mock.clone();
    (mock, service)
}
