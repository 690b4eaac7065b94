use std::fmt::Display;

use anyhow::anyhow;
use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use super::StdResult;

/// The earliest creation date accepted by a search, formatted as `YYYY-MM-DD`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct DateFloor(NaiveDate);

impl DateFloor {
    /// Computes the date floor lying `days` days before `now`.
    pub fn days_before(now: DateTime<Utc>, days: i64) -> Self {
        Self((now - TimeDelta::days(days)).date_naive())
    }

    /// Retrieves the underlying date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl Display for DateFloor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// A search for the most starred repositories created after a date floor.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct SearchRequest {
    /// The page to fetch, starting at 1.
    pub(crate) page: u32,

    /// Only repositories created after this date are returned.
    pub(crate) date_floor: DateFloor,
}

impl SearchRequest {
    /// Creates a new `SearchRequest`, failing when `page` is 0.
    pub fn try_new(page: u32, date_floor: DateFloor) -> StdResult<Self> {
        if page == 0 {
            return Err(anyhow!("Search pages start at 1, got page {page}"));
        }

        Ok(Self { page, date_floor })
    }

    /// Retrieves the page.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Retrieves the date floor.
    pub fn date_floor(&self) -> &DateFloor {
        &self.date_floor
    }

    /// Builds the search query text.
    pub fn query(&self) -> String {
        format!("created:>{}", self.date_floor)
    }

    /// Builds the query string parameters, sorted by stars in descending order.
    pub fn query_parameters(&self) -> Vec<(&'static str, String)> {
        vec![
            ("q", self.query()),
            ("sort", "stars".to_string()),
            ("order", "desc".to_string()),
            ("page", self.page.to_string()),
        ]
    }

    /// Creates a dummy `SearchRequest` for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy(page: u32) -> Self {
        Self {
            page,
            date_floor: DateFloor(NaiveDate::from_ymd_opt(2026, 9, 16).unwrap()),
        }
    }
}

impl Display for SearchRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchRequest: query={}, page={}",
            self.query(),
            self.page
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn date_floor_is_thirty_days_before_now() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap();

        let date_floor = DateFloor::days_before(now, 30);

        assert_eq!("2026-09-16", date_floor.to_string());
    }

    #[test]
    fn date_floor_crosses_year_boundary() {
        let now = Utc.with_ymd_and_hms(2026, 1, 10, 0, 0, 0).unwrap();

        let date_floor = DateFloor::days_before(now, 30);

        assert_eq!("2025-12-11", date_floor.to_string());
    }

    #[test]
    fn date_floor_differs_one_day_apart() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();

        let today = DateFloor::days_before(now, 30);
        let tomorrow = DateFloor::days_before(now + TimeDelta::days(1), 30);

        assert_ne!(today.to_string(), tomorrow.to_string());
    }

    #[test]
    fn try_new_rejects_page_zero() {
        let date_floor = SearchRequest::dummy(1).date_floor;

        SearchRequest::try_new(0, date_floor).expect_err("Page 0 should be rejected");
    }

    #[test]
    fn query_parameters_sort_by_stars_descending() {
        let request = SearchRequest::dummy(3);

        assert_eq!(
            vec![
                ("q", "created:>2026-09-16".to_string()),
                ("sort", "stars".to_string()),
                ("order", "desc".to_string()),
                ("page", "3".to_string()),
            ],
            request.query_parameters()
        );
    }
}
