//! Built-in catalog tables

use shared::models::{DocumentType, EmployeeType};

use super::{Catalog, Department, DocumentPreset, RoleClassifier, RequirementRule};

const DEPARTMENTS: &[(&str, &str, &[&str])] = &[
    (
        "Transport",
        "TPT",
        &[
            "Dispatcher",
            "Operations Manager",
            "Logistics Officer",
            "Driver",
            "Tracking",
            "Invoicing",
        ],
    ),
    (
        "Express",
        "EXP",
        &[
            "Operations Manager",
            "Booking Clerk (Passengers & Parcel)",
            "Conductor",
            "Driver (Bus)",
            "Route Supervisor",
            "Parcel Officer",
            "Revenue Clerk",
            "Tracking",
        ],
    ),
    (
        "Fuel",
        "FUL",
        &["Fuel Manager", "Fuel Clerk", "Lubricant Officer", "Fuel Pump Attendant"],
    ),
    (
        "Workshop",
        "WSH",
        &[
            "Workshop Manager",
            "Foreman",
            "Job Card Clerk",
            "Mechanic",
            "Electrician",
            "Panel Beater",
            "Welder",
            "Tyre Technician",
            "Store Manager",
            "Store Clerk",
            "Checklist Officer",
        ],
    ),
    ("HR", "HR", &["HR Manager", "HR Assistant"]),
    ("Finance", "FIN", &["Finance Manager", "Accountant", "Cashier"]),
    (
        "Support Services",
        "SUP",
        &[
            "Security Supervisor",
            "Security",
            "Watchman",
            "Carwash",
            "Loader",
            "Machine Operator",
            "Yard Controller",
            "Safety Compliance Officer",
        ],
    ),
    ("System-wide", "SYS", &["System Administrator", "General Manager"]),
];

const ROLE_CLASSIFIERS: &[(EmployeeType, &[&str])] = &[
    (EmployeeType::Driver, &["driver"]),
    (
        EmployeeType::Mechanic,
        &["mechanic", "electrician", "welder", "panel beater", "tyre technician"],
    ),
    (EmployeeType::Manager, &["manager"]),
    (
        EmployeeType::Clerk,
        &["clerk", "officer", "attendant", "supervisor", "controller", "assistant"],
    ),
];

const LEGAL_DOCUMENTS: &[(&str, DocumentType, &str)] = &[
    ("Signed Employment Contract", DocumentType::Contract, "legal"),
    ("Job Offer Letter", DocumentType::Contract, "legal"),
    ("Letter of Acceptance", DocumentType::Contract, "legal"),
    ("Employee Personal Data Form", DocumentType::Other, "personal"),
    ("CV / Résumé", DocumentType::Other, "personal"),
    ("Academic Certificate", DocumentType::Certificate, "legal"),
    ("Good Conduct Certificate", DocumentType::Certificate, "legal"),
    ("Referee Letter", DocumentType::Other, "personal"),
    ("Signed Company Policies", DocumentType::Other, "legal"),
];

const DRIVER_DOCUMENTS: &[(&str, DocumentType, &str)] = &[
    ("Valid Driver's License (BCE)", DocumentType::License, "transport"),
    ("Defensive Driving Certificate", DocumentType::Certificate, "legal"),
    ("Medical Fitness Certificate", DocumentType::Certificate, "medical"),
    ("Road Safety Training Certificate", DocumentType::Certificate, "legal"),
    ("Valid Driver's License (PSV)", DocumentType::License, "express"),
    ("PSV Badge", DocumentType::License, "express"),
];

const LEGAL_MINIMUM: usize = 4;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Catalog {
    /// Built-in tables
    pub fn standard() -> Self {
        let departments = DEPARTMENTS
            .iter()
            .map(|(name, code, roles)| Department {
                name: name.to_string(),
                code: code.to_string(),
                roles: strings(roles),
            })
            .collect();

        let role_classifiers = ROLE_CLASSIFIERS
            .iter()
            .map(|(employee_type, keywords)| RoleClassifier {
                employee_type: *employee_type,
                keywords: strings(keywords),
            })
            .collect();

        let presets = LEGAL_DOCUMENTS
            .iter()
            .chain(DRIVER_DOCUMENTS)
            .map(|(name, document_type, tag)| DocumentPreset {
                name: name.to_string(),
                document_type: *document_type,
                tag: Some(tag.to_string()),
            })
            .collect();

        let requirement_rules = vec![
            RequirementRule {
                department: "Transport".into(),
                role_keyword: "driver".into(),
                documents: strings(&[
                    "Valid Driver's License (BCE)",
                    "Defensive Driving Certificate",
                    "Medical Fitness Certificate",
                    "Road Safety Training Certificate",
                ]),
                message: "Transport drivers must upload BCE license, Defensive Driving, Medical Fitness, and Road Safety Training".into(),
            },
            RequirementRule {
                department: "Express".into(),
                role_keyword: "driver".into(),
                documents: strings(&[
                    "Valid Driver's License (PSV)",
                    "PSV Badge",
                    "Medical Fitness Certificate",
                    "Defensive Driving Certificate",
                ]),
                message: "Express bus drivers must upload PSV license, PSV badge, Medical Fitness, and Defensive Driving".into(),
            },
        ];

        Self {
            departments,
            role_classifiers,
            default_employee_type: EmployeeType::Admin,
            presets,
            legal_documents: LEGAL_DOCUMENTS.iter().map(|(n, _, _)| n.to_string()).collect(),
            legal_minimum: LEGAL_MINIMUM,
            requirement_rules,
            multi_instance_documents: strings(&["Academic Certificate"]),
        }
    }
}
