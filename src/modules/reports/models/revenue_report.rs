use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One labeled time slot in the revenue chart series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// `d/M` in by-day mode, the month ordinal in by-month mode
    pub label: String,
    /// Sum of successful payment amounts in this slot
    pub amount: Decimal,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// Chronologically ordered chart series for the selected period
///
/// Always full-length for the period (28-31 points by-day, exactly 12
/// by-month), even when every bucket is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueSeries {
    pub points: Vec<SeriesPoint>,
    /// Sum of all bucket amounts for the selected period
    pub total: Decimal,
}

impl RevenueSeries {
    pub fn new(points: Vec<SeriesPoint>) -> Self {
        let total = points.iter().map(|p| p.amount).sum();
        Self { points, total }
    }

    pub fn is_zero(&self) -> bool {
        self.total == Decimal::ZERO
    }
}

/// One entry of the top-combo list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCombo {
    pub combo_id: i64,
    pub name: String,
    pub image: Option<String>,
    pub average_rating: f64,
    pub review_count: usize,
    /// Revenue for the current month/year, not the displayed chart period
    pub period_revenue: Decimal,
    /// 1-based position for presentation (medal styling)
    pub rank: u8,
}

/// The finished per-host revenue report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueReport {
    pub chart: RevenueSeries,
    pub top_combos: Vec<RankedCombo>,
}

impl RevenueReport {
    pub fn new(chart: RevenueSeries, top_combos: Vec<RankedCombo>) -> Self {
        Self { chart, top_combos }
    }

    /// Check if the report carries no revenue and no ranked combos
    pub fn is_empty(&self) -> bool {
        self.chart.is_zero() && self.top_combos.is_empty()
    }
}
