use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::period::{Period, ViewMode};
use crate::modules::reports::models::{Booking, Combo, RankedCombo, Review};

/// Which metric orders the top-combo list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortCriterion {
    /// Average rating descending, review count breaks ties
    ByRating,
    /// Current-period revenue descending, average rating breaks ties
    ByRevenue,
}

impl std::fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortCriterion::ByRating => write!(f, "by_rating"),
            SortCriterion::ByRevenue => write!(f, "by_revenue"),
        }
    }
}

/// Per-combo aggregates before eligibility filtering and ranking
#[derive(Debug, Clone)]
struct ComboStats {
    combo: Combo,
    average_rating: f64,
    review_count: usize,
    period_revenue: Decimal,
}

/// Cross-references reviews, bookings and combos into the top-combo list
///
/// Revenue here is always scoped to the current calendar month (by-day
/// view) or year (by-month view) relative to the supplied date, not to the
/// period the chart is displaying. The two filters are structurally
/// identical but intentionally independent.
pub struct ComboRanker {
    top_n: usize,
}

impl ComboRanker {
    pub const DEFAULT_TOP_N: usize = 3;

    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }

    /// Rank the host's combos under the given criterion
    ///
    /// `today` anchors the "current period" revenue window; the facade
    /// passes the real clock, tests pin it.
    pub fn rank(
        &self,
        combos: &[Combo],
        bookings: &[Booking],
        reviews: &[Review],
        view: ViewMode,
        today: NaiveDate,
        sort: SortCriterion,
    ) -> Vec<RankedCombo> {
        let current_period = match view {
            ViewMode::ByDay => Period::YearMonth {
                year: today.year(),
                month: today.month(),
            },
            ViewMode::ByMonth => Period::Year { year: today.year() },
        };

        let bookings_by_id: HashMap<i64, &Booking> =
            bookings.iter().map(|b| (b.id, b)).collect();

        // Review sums per combo. A 0 rating counts in both numerator and
        // denominator; only an absent rating is excluded. Reviews that
        // resolve to no known combo are dropped.
        let mut rating_sums: HashMap<i64, (f64, usize)> = HashMap::new();
        for review in reviews {
            let Some(rating) = review.rating else { continue };
            let combo_id = review
                .booking_id
                .and_then(|id| bookings_by_id.get(&id))
                .and_then(|b| b.combo_id)
                .or(review.combo_id);
            if let Some(combo_id) = combo_id {
                let entry = rating_sums.entry(combo_id).or_insert((0.0, 0));
                entry.0 += rating;
                entry.1 += 1;
            }
        }

        // Current-period revenue per combo. Explicit success payments win;
        // a paid booking without payment rows contributes its total amount
        // directly (no re-synthesis, ranking only needs a scalar).
        let mut revenue: HashMap<i64, Decimal> = HashMap::new();
        for booking in bookings {
            let Some(combo_id) = booking.combo_id else { continue };
            if !booking.status.counts_as_paid() {
                continue;
            }
            let Some(date) = booking.revenue_date() else { continue };
            if !current_period.contains(date) {
                continue;
            }
            let amount = if booking.payments.is_empty() {
                booking.total_amount
            } else {
                booking
                    .payments
                    .iter()
                    .filter(|p| p.is_success())
                    .map(|p| p.amount)
                    .sum()
            };
            *revenue.entry(combo_id).or_insert(Decimal::ZERO) += amount;
        }

        let mut stats: Vec<ComboStats> = combos
            .iter()
            .map(|combo| {
                let (sum, count) = rating_sums.get(&combo.id).copied().unwrap_or((0.0, 0));
                ComboStats {
                    combo: combo.clone(),
                    average_rating: if count > 0 { sum / count as f64 } else { 0.0 },
                    review_count: count,
                    period_revenue: revenue.get(&combo.id).copied().unwrap_or(Decimal::ZERO),
                }
            })
            .filter(|s| match sort {
                SortCriterion::ByRating => s.review_count > 0,
                SortCriterion::ByRevenue => {
                    s.period_revenue > Decimal::ZERO || s.review_count > 0
                }
            })
            .collect();

        match sort {
            SortCriterion::ByRating => stats.sort_by(|a, b| {
                b.average_rating
                    .total_cmp(&a.average_rating)
                    .then(b.review_count.cmp(&a.review_count))
            }),
            SortCriterion::ByRevenue => stats.sort_by(|a, b| {
                b.period_revenue
                    .cmp(&a.period_revenue)
                    .then(b.average_rating.total_cmp(&a.average_rating))
            }),
        }

        stats
            .into_iter()
            .take(self.top_n)
            .enumerate()
            .map(|(i, s)| RankedCombo {
                combo_id: s.combo.id,
                name: s.combo.name,
                image: s.combo.image,
                average_rating: s.average_rating,
                review_count: s.review_count,
                period_revenue: s.period_revenue,
                rank: i as u8 + 1,
            })
            .collect()
    }
}

impl Default for ComboRanker {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TOP_N)
    }
}
