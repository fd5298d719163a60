use chrono::Datelike;
use rust_decimal::Decimal;

use crate::core::period::{days_in_month, Period, ViewMode};
use crate::core::{AppError, Result};
use crate::modules::reports::models::{Payment, RevenueSeries, SeriesPoint};

/// Sums successful payments into an ordered, fixed-length chart series
///
/// By-day mode yields one bucket per calendar day of the selected month,
/// by-month mode exactly twelve buckets for the selected year. A period
/// with no qualifying payments still yields the full-length all-zero
/// series; chart consumers never receive a truncated axis.
pub struct RevenueBucketer;

impl RevenueBucketer {
    pub fn new() -> Self {
        Self
    }

    /// Bucket the payment stream for the given view mode and period
    ///
    /// # Errors
    /// Returns a validation error when the period granularity does not
    /// match the view mode (a bare year in by-day mode, or a year-month in
    /// by-month mode), or when the month is out of range.
    pub fn bucket(
        &self,
        payments: &[Payment],
        view: ViewMode,
        period: Period,
    ) -> Result<RevenueSeries> {
        match (view, period) {
            (ViewMode::ByDay, Period::YearMonth { year, month }) => {
                // The period may have been built directly or deserialized,
                // bypassing Period::year_month, so re-check the range here.
                if !(1..=12).contains(&month) {
                    return Err(AppError::validation(format!(
                        "month must be between 1 and 12, got {}",
                        month
                    )));
                }
                Ok(self.bucket_by_day(payments, year, month))
            }
            (ViewMode::ByMonth, Period::Year { year }) => {
                Ok(self.bucket_by_month(payments, year))
            }
            (view, period) => Err(AppError::validation(format!(
                "view mode {} does not accept period {:?}",
                view, period
            ))),
        }
    }

    fn bucket_by_day(&self, payments: &[Payment], year: i32, month: u32) -> RevenueSeries {
        let days = days_in_month(year, month);
        let mut amounts = vec![Decimal::ZERO; days as usize];

        for payment in payments.iter().filter(|p| p.is_success()) {
            // Timestampless payments have no bucket; they are excluded
            // rather than guessed into one.
            let Some(ts) = payment.paid_at else { continue };
            if ts.year() == year && ts.month() == month {
                amounts[(ts.day() - 1) as usize] += payment.amount;
            }
        }

        let points = amounts
            .into_iter()
            .enumerate()
            .map(|(i, amount)| SeriesPoint::new(format!("{}/{}", i as u32 + 1, month), amount))
            .collect();
        RevenueSeries::new(points)
    }

    fn bucket_by_month(&self, payments: &[Payment], year: i32) -> RevenueSeries {
        let mut amounts = vec![Decimal::ZERO; 12];

        for payment in payments.iter().filter(|p| p.is_success()) {
            let Some(ts) = payment.paid_at else { continue };
            if ts.year() == year {
                amounts[ts.month0() as usize] += payment.amount;
            }
        }

        let points = amounts
            .into_iter()
            .enumerate()
            .map(|(i, amount)| SeriesPoint::new((i + 1).to_string(), amount))
            .collect();
        RevenueSeries::new(points)
    }
}

impl Default for RevenueBucketer {
    fn default() -> Self {
        Self::new()
    }
}
