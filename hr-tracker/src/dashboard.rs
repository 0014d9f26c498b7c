//! Dashboard data loading
//!
//! One call fetches everything the HR overview shows. Remote failures are
//! logged and collapsed into a single user-facing message.

use chrono::NaiveDate;
use hr_client::{ClientResult, HrService};
use serde::Serialize;
use shared::models::{
    Certification, Employee, EmployeeCountByType, EmployeeDocument, EmployeeFilter,
    HolidayCalendar, HolidayQuery,
};
use shared::{AppError, AppResult, ErrorCode};

use crate::core::{Config, SessionContext};
use crate::timeline::{EngagementProgress, WorkCalendar, engagement_progress};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load HR data. Ensure backend is running.";

fn load_failed(e: impl std::fmt::Display, what: &str) -> AppError {
    tracing::error!(error = %e, "Error loading HR {}", what);
    AppError::with_message(ErrorCode::RemoteServiceError, LOAD_FAILED_MESSAGE)
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub employees: Vec<Employee>,
    pub expiring_documents: Vec<EmployeeDocument>,
    pub expiring_certifications: Vec<Certification>,
    pub counts_by_type: Vec<EmployeeCountByType>,
    pub holidays: HolidayCalendar,
    #[serde(skip)]
    pub calendar: WorkCalendar,
}

impl DashboardSnapshot {
    /// Load employees matching `filter`, expiring documents and
    /// certifications, per-type counts and the holiday calendar for `year`
    pub async fn load(
        service: &dyn HrService,
        config: &Config,
        session: &SessionContext,
        filter: &EmployeeFilter,
        year: i32,
    ) -> AppResult<Self> {
        let query = HolidayQuery {
            year,
            branch: Some(session.branch.clone()).filter(|b| !b.is_empty()),
            country: config.holiday_country.clone(),
        };

        let fetched: ClientResult<_> = futures::try_join!(
            service.list_employees(filter),
            service.expiring_documents(config.document_alert_days),
            service.expiring_certifications(config.document_alert_days),
            service.employee_count_by_type(),
            service.holidays(&query),
        );
        let (employees, expiring_documents, expiring_certifications, counts_by_type, holidays) =
            fetched.map_err(|e| load_failed(e, "dashboard"))?;

        let calendar = WorkCalendar::from_holiday_calendar(config.excluded_weekdays.clone(), &holidays);
        tracing::info!(
            employees = employees.len(),
            expiring_documents = expiring_documents.len(),
            expiring_certifications = expiring_certifications.len(),
            holidays = calendar.holiday_count(),
            "HR dashboard loaded"
        );

        Ok(Self {
            employees,
            expiring_documents,
            expiring_certifications,
            counts_by_type,
            holidays,
            calendar,
        })
    }

    pub fn count_of(&self, employee_type: shared::models::EmployeeType) -> i64 {
        self.counts_by_type
            .iter()
            .filter(|c| c.employee_type == employee_type)
            .map(|c| c.count)
            .sum()
    }

    /// Employees on probation or a fixed-term contract with their business days
    pub fn engagement_progress(&self, today: NaiveDate) -> Vec<(&Employee, EngagementProgress)> {
        self.employees
            .iter()
            .filter_map(|e| engagement_progress(e, &self.calendar, today).map(|p| (e, p)))
            .collect()
    }
}

/// Contracts ending and probations completing soon
#[derive(Debug, Clone, Default, Serialize)]
pub struct EngagementAlerts {
    pub expiring_contracts: Vec<Employee>,
    pub probation_completions: Vec<Employee>,
}

impl EngagementAlerts {
    pub async fn load(service: &dyn HrService, config: &Config) -> AppResult<Self> {
        let (expiring_contracts, probation_completions) = futures::try_join!(
            service.expiring_contracts(config.contract_alert_days),
            service.upcoming_probation_completions(config.probation_alert_days),
        )
        .map_err(|e| load_failed(e, "alerts"))?;

        Ok(Self {
            expiring_contracts,
            probation_completions,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.expiring_contracts.is_empty() && self.probation_completions.is_empty()
    }
}
