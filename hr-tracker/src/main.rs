use std::sync::Arc;

use anyhow::Context;
use chrono::Datelike;
use hr_client::{HrService, HttpClient};
use hr_tracker::utils::time::today;
use hr_tracker::{Catalog, DashboardSnapshot, DraftStore, EngagementAlerts, JsonFileStore, setup_environment};
use shared::models::{EmployeeFilter, EmployeeType};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, logging) and configuration
    let config = setup_environment();
    tracing::info!(env = %config.environment, api = %config.api_url, "HR tracker starting");

    // 2. Catalog and session
    let catalog = Catalog::from_file_or_standard(config.catalog_file.as_deref())
        .context("failed to load catalog")?;
    let session = config.session();
    tracing::info!(
        departments = catalog.departments.len(),
        role = %session.role,
        branch = %session.branch,
        "Catalog loaded"
    );

    // 3. HR service client
    let client = HttpClient::new(&config.client_config()).context("failed to build HTTP client")?;
    let service: Arc<dyn HrService> = Arc::new(client);

    // 4. Drafts
    let store = JsonFileStore::new(config.drafts_dir());
    let drafts = DraftStore::open(Arc::new(store));

    // 5. Dashboard
    let today = today();
    let snapshot = DashboardSnapshot::load(
        service.as_ref(),
        &config,
        &session,
        &EmployeeFilter::default(),
        today.year(),
    )
    .await?;
    let alerts = EngagementAlerts::load(service.as_ref(), &config).await?;

    tracing::info!(
        employees = snapshot.employees.len(),
        drivers = snapshot.count_of(EmployeeType::Driver),
        expiring_documents = snapshot.expiring_documents.len(),
        expiring_certifications = snapshot.expiring_certifications.len(),
        expiring_contracts = alerts.expiring_contracts.len(),
        probation_completions = alerts.probation_completions.len(),
        pending_drafts = drafts.len(),
        "Compliance summary"
    );

    for (employee, progress) in snapshot.engagement_progress(today) {
        tracing::info!(
            number = %employee.employee_number,
            name = %employee.name,
            kind = progress.kind.as_str(),
            end = %progress.end,
            total = progress.days.total,
            remaining = progress.days.remaining,
            "Engagement"
        );
    }

    Ok(())
}
