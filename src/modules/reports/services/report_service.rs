use chrono::{Local, NaiveDateTime};
use serde_json::Value;
use tracing::{info, warn};

use crate::core::period::{Period, ViewMode};
use crate::core::{AppError, Result};
use crate::modules::reports::models::RevenueReport;
use crate::modules::reports::services::{
    ComboRanker, EntityNormalizer, PaymentSynthesizer, RevenueBucketer, SortCriterion,
};

/// Tunable report settings, passed explicitly rather than read from
/// ambient state
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Length of the top-combo list
    pub top_n: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top_n: ComboRanker::DEFAULT_TOP_N,
        }
    }
}

/// Caller-selected report parameters
#[derive(Debug, Clone, Copy)]
pub struct ReportParams {
    pub view: ViewMode,
    pub period: Period,
    pub sort: SortCriterion,
}

impl ReportParams {
    /// Validate that the period granularity matches the view mode and the
    /// month is in range; the period fields are public (and deserializable)
    /// so the `Period::year_month` constructor may have been bypassed
    fn validate(&self) -> Result<()> {
        match (self.view, self.period) {
            (ViewMode::ByDay, Period::YearMonth { month, .. }) if !(1..=12).contains(&month) => {
                Err(AppError::validation(format!(
                    "month must be between 1 and 12, got {}",
                    month
                )))
            }
            (ViewMode::ByDay, Period::YearMonth { .. })
            | (ViewMode::ByMonth, Period::Year { .. }) => Ok(()),
            (view, period) => Err(AppError::validation(format!(
                "view mode {} does not accept period {:?}",
                view, period
            ))),
        }
    }
}

/// Service producing the per-host revenue report
///
/// A stateless pure transformation: every invocation normalizes, scopes,
/// synthesizes, buckets and ranks afresh from the supplied snapshot, so it
/// is safe to re-invoke on every parameter change with nothing memoized to
/// go stale.
pub struct ReportService {
    options: ReportOptions,
    normalizer: EntityNormalizer,
    synthesizer: PaymentSynthesizer,
    bucketer: RevenueBucketer,
}

impl ReportService {
    pub fn new(options: ReportOptions) -> Self {
        Self {
            options,
            normalizer: EntityNormalizer::new(),
            synthesizer: PaymentSynthesizer::new(),
            bucketer: RevenueBucketer::new(),
        }
    }

    /// Generate the revenue report for the given host and parameters
    ///
    /// The raw arrays are the point-in-time snapshot loaded by the data
    /// layer; partial load failures must surface here as empty arrays, not
    /// errors, so the report still renders.
    ///
    /// # Errors
    /// Returns a validation error only for a view-mode/period mismatch;
    /// malformed records degrade per-record instead.
    pub fn generate_report(
        &self,
        bookings: &[Value],
        reviews: &[Value],
        combos: &[Value],
        host_id: i64,
        params: ReportParams,
    ) -> Result<RevenueReport> {
        self.generate_report_at(Local::now().naive_local(), bookings, reviews, combos, host_id, params)
    }

    /// Same as [`generate_report`](Self::generate_report) with an explicit
    /// clock anchoring the ranking engine's "current period" window
    pub fn generate_report_at(
        &self,
        now: NaiveDateTime,
        bookings: &[Value],
        reviews: &[Value],
        combos: &[Value],
        host_id: i64,
        params: ReportParams,
    ) -> Result<RevenueReport> {
        params.validate()?;

        info!(
            "Generating revenue report: host={}, view={}, period={:?}, sort={}",
            host_id, params.view, params.period, params.sort
        );

        let combos = self.normalizer.normalize_combos(combos);
        let host_combos: Vec<_> = combos
            .into_iter()
            .filter(|c| c.host_id == Some(host_id))
            .collect();
        let combo_ids: std::collections::HashSet<i64> =
            host_combos.iter().map(|c| c.id).collect();

        // Bookings must resolve through an offering owned by this host;
        // anything else in the snapshot is out of scope.
        let bookings: Vec<_> = self
            .normalizer
            .normalize_bookings(bookings)
            .into_iter()
            .filter(|b| b.combo_id.is_some_and(|id| combo_ids.contains(&id)))
            .collect();
        let reviews = self.normalizer.normalize_reviews(reviews);

        let payments = self.synthesizer.successful_payments(&bookings);
        let chart = self.bucketer.bucket(&payments, params.view, params.period)?;

        let ranker = ComboRanker::new(self.options.top_n);
        let top_combos = ranker.rank(
            &host_combos,
            &bookings,
            &reviews,
            params.view,
            now.date(),
            params.sort,
        );

        let report = RevenueReport::new(chart, top_combos);

        if report.is_empty() {
            warn!(
                "Empty revenue report generated for host {} and period {:?}",
                host_id, params.period
            );
        } else {
            info!(
                "Revenue report generated: total={}, {} ranked combos",
                report.chart.total,
                report.top_combos.len()
            );
        }

        Ok(report)
    }
}

impl Default for ReportService {
    fn default() -> Self {
        Self::new(ReportOptions::default())
    }
}
