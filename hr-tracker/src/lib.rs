//! HR Tracker - employee compliance and lifecycle tracking
//!
//! # Overview
//!
//! - **Catalog** (`catalog`): departments, role classification, document presets and rules
//! - **Compliance** (`compliance`): required documents, legal minimum, suggestions
//! - **Numbering** (`numbering`): per-department employee numbers, supervisor lookup
//! - **Timeline** (`timeline`): contract/probation dates and business days
//! - **Drafts** (`drafts`, `storage`): quick-add registrations in a key-value store
//! - **Flows** (`registration`, `profile`, `dashboard`): the operator workflows
//!
//! # Module layout
//!
//! ```text
//! hr-tracker/src/
//! ├── core/          # config, session
//! ├── catalog/       # lookup tables
//! ├── storage/       # key-value capability
//! ├── utils/         # logging, dates, validation
//! ├── compliance.rs
//! ├── numbering.rs
//! ├── timeline.rs
//! ├── drafts.rs
//! ├── queue.rs
//! ├── identity.rs
//! ├── registration.rs
//! ├── profile.rs
//! └── dashboard.rs
//! ```

pub mod catalog;
pub mod compliance;
pub mod core;
pub mod dashboard;
pub mod drafts;
pub mod identity;
pub mod numbering;
pub mod profile;
pub mod queue;
pub mod registration;
pub mod storage;
pub mod timeline;
pub mod utils;

// Re-export public types
pub use catalog::Catalog;
pub use core::{Config, SessionContext};
pub use dashboard::{DashboardSnapshot, EngagementAlerts};
pub use drafts::DraftStore;
pub use identity::IdentityDetails;
pub use profile::ProfileEditor;
pub use queue::{DocumentForm, PendingDocument, PendingDocumentQueue};
pub use registration::{Registration, RegistrationForm, RegistrationOutcome};
pub use storage::{JsonFileStore, KvStore, MemoryStore};
pub use timeline::{Engagement, WorkCalendar};

// Re-export unified error types from shared
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and start logging as configured by the environment
pub fn setup_environment() -> Config {
    let _ = dotenv::dotenv();
    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        config.is_production(),
        config.log_dir.as_deref(),
    );
    config
}
