//! Engagement timeline calculator
//!
//! Contract and probation end dates, and business-day counts that skip
//! excluded weekdays and holidays.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use shared::models::{ContractType, Employee, HolidayCalendar};
use shared::{AppError, AppResult};
use std::collections::HashSet;

use crate::utils::time::parse_date;

/// Weekday numbers are 0 = Sunday ... 6 = Saturday
pub const SUNDAY: u32 = 0;

/// Add calendar months.
///
/// A day that does not exist in the target month is clamped to that month's
/// last day (Jan 31 + 1 month = Feb 28/29).
pub fn add_months(date: NaiveDate, months: u32) -> AppResult<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| AppError::validation(format!("{} + {} months is out of range", date, months)))
}

/// [`add_months`] over ISO `YYYY-MM-DD` strings
pub fn add_months_iso(date: &str, months: u32) -> AppResult<String> {
    Ok(add_months(parse_date(date)?, months)?.to_string())
}

/// Which days count as working days
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkCalendar {
    excluded_weekdays: Vec<u32>,
    holidays: HashSet<NaiveDate>,
}

impl Default for WorkCalendar {
    fn default() -> Self {
        Self::new(vec![SUNDAY], [])
    }
}

impl WorkCalendar {
    pub fn new(excluded_weekdays: Vec<u32>, holidays: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            excluded_weekdays,
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Holidays given as ISO strings; unparsable entries are skipped
    pub fn from_iso_holidays<S: AsRef<str>>(excluded_weekdays: Vec<u32>, holidays: &[S]) -> Self {
        let parsed = holidays
            .iter()
            .filter_map(|h| NaiveDate::parse_from_str(h.as_ref().trim(), "%Y-%m-%d").ok());
        Self::new(excluded_weekdays, parsed)
    }

    pub fn from_holiday_calendar(excluded_weekdays: Vec<u32>, calendar: &HolidayCalendar) -> Self {
        Self::new(excluded_weekdays, calendar.holiday_dates())
    }

    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        let weekday = date.weekday().num_days_from_sunday();
        !self.excluded_weekdays.contains(&weekday) && !self.holidays.contains(&date)
    }

    /// Working days in `start..=end`; zero when `start > end`
    pub fn count_working_days(&self, start: NaiveDate, end: NaiveDate) -> u32 {
        if start > end {
            return 0;
        }
        start
            .iter_days()
            .take_while(|d| *d <= end)
            .filter(|d| self.is_working_day(*d))
            .count() as u32
    }
}

/// Working days of a period and how many are still ahead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BusinessDays {
    pub total: u32,
    pub remaining: u32,
}

/// Working days in `start..=end`, and from `max(today, start)` through `end`
pub fn business_days_between(
    start: NaiveDate,
    end: NaiveDate,
    calendar: &WorkCalendar,
    today: NaiveDate,
) -> BusinessDays {
    BusinessDays {
        total: calendar.count_working_days(start, end),
        remaining: calendar.count_working_days(start.max(today), end),
    }
}

/// [`business_days_between`] over ISO strings
pub fn business_days_between_iso(
    start: &str,
    end: &str,
    excluded_weekdays: &[u32],
    holidays: &[String],
    today: NaiveDate,
) -> AppResult<BusinessDays> {
    let calendar = WorkCalendar::from_iso_holidays(excluded_weekdays.to_vec(), holidays);
    Ok(business_days_between(
        parse_date(start)?,
        parse_date(end)?,
        &calendar,
        today,
    ))
}

/// Engagement chosen at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Engagement {
    pub kind: ContractType,
    /// Contract or probation length; no end date without it
    pub months: Option<u32>,
}

impl Engagement {
    pub fn full_time() -> Self {
        Self::default()
    }

    pub fn probation(months: u32) -> Self {
        Self {
            kind: ContractType::Probation,
            months: Some(months),
        }
    }

    pub fn contract(months: u32) -> Self {
        Self {
            kind: ContractType::Contract,
            months: Some(months),
        }
    }

    /// Lifecycle dates for an employee starting on `employment_date`
    pub fn resolve(&self, employment_date: NaiveDate) -> AppResult<EngagementDates> {
        let end = self
            .months
            .map(|m| add_months(employment_date, m))
            .transpose()?;

        Ok(match self.kind {
            ContractType::FullTime => EngagementDates {
                contract_type: ContractType::FullTime,
                ..Default::default()
            },
            ContractType::Contract => EngagementDates {
                contract_type: ContractType::Contract,
                contract_start: Some(employment_date),
                contract_end: end,
                probation_end: None,
            },
            ContractType::Probation => EngagementDates {
                contract_type: ContractType::Probation,
                contract_start: None,
                contract_end: None,
                probation_end: end,
            },
        })
    }
}

/// Dates written to the employee record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngagementDates {
    pub contract_type: ContractType,
    pub contract_start: Option<NaiveDate>,
    pub contract_end: Option<NaiveDate>,
    pub probation_end: Option<NaiveDate>,
}

/// Open-ended period of an employee, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EngagementProgress {
    pub kind: ContractType,
    pub end: NaiveDate,
    pub days: BusinessDays,
}

/// Business days of the employee's probation, or failing that, contract
pub fn engagement_progress(
    employee: &Employee,
    calendar: &WorkCalendar,
    today: NaiveDate,
) -> Option<EngagementProgress> {
    let (kind, start, end) = match (employee.probation_end, employee.contract_end) {
        (Some(end), _) => (ContractType::Probation, employee.employment_date, end),
        (None, Some(end)) => (
            ContractType::Contract,
            employee.contract_start.unwrap_or(employee.employment_date),
            end,
        ),
        (None, None) => return None,
    };
    Some(EngagementProgress {
        kind,
        end,
        days: business_days_between(start, end, calendar, today),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_months_clamps_to_month_end() {
        assert_eq!(add_months(date(2024, 1, 31), 1).unwrap(), date(2024, 2, 29));
        assert_eq!(add_months(date(2023, 1, 31), 1).unwrap(), date(2023, 2, 28));
        assert_eq!(add_months(date(2024, 3, 15), 12).unwrap(), date(2025, 3, 15));
        assert_eq!(add_months_iso("2024-08-31", 6).unwrap(), "2025-02-28");
    }

    #[test]
    fn test_week_excluding_sunday() {
        let days = business_days_between_iso("2024-01-01", "2024-01-07", &[0], &[], date(2023, 12, 1)).unwrap();
        assert_eq!(days.total, 6);
        assert_eq!(days.remaining, 6);
    }

    #[test]
    fn test_start_after_end_is_zero() {
        let days = business_days_between_iso("2024-02-10", "2024-02-01", &[0], &[], date(2024, 1, 1)).unwrap();
        assert_eq!(days, BusinessDays { total: 0, remaining: 0 });
    }

    #[test]
    fn test_holidays_and_weekends_skipped() {
        // Mon 2024-12-23 .. Sun 2024-12-29, Christmas and Boxing Day off
        let holidays = vec!["2024-12-25".to_string(), "2024-12-26".to_string(), "junk".to_string()];
        let days =
            business_days_between_iso("2024-12-23", "2024-12-29", &[0, 6], &holidays, date(2024, 12, 27)).unwrap();
        assert_eq!(days.total, 3);
        // Fri 27 only
        assert_eq!(days.remaining, 1);
    }

    #[test]
    fn test_remaining_zero_after_end() {
        let cal = WorkCalendar::default();
        let days = business_days_between(date(2024, 1, 1), date(2024, 1, 31), &cal, date(2024, 3, 1));
        assert_eq!(days.remaining, 0);
        assert!(days.total > 0);
    }

    #[test]
    fn test_engagement_resolution() {
        let start = date(2024, 1, 31);

        let contract = Engagement::contract(6).resolve(start).unwrap();
        assert_eq!(contract.contract_type, ContractType::Contract);
        assert_eq!(contract.contract_start, Some(start));
        assert_eq!(contract.contract_end, Some(date(2024, 7, 31)));
        assert_eq!(contract.probation_end, None);

        let probation = Engagement::probation(1).resolve(start).unwrap();
        assert_eq!(probation.probation_end, Some(date(2024, 2, 29)));
        assert_eq!(probation.contract_start, None);

        let full = Engagement::full_time().resolve(start).unwrap();
        assert_eq!(full.contract_type, ContractType::FullTime);
        assert_eq!(full.contract_end, None);

        let open_contract = Engagement { kind: ContractType::Contract, months: None }.resolve(start).unwrap();
        assert_eq!(open_contract.contract_start, Some(start));
        assert_eq!(open_contract.contract_end, None);
    }
}
