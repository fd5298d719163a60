pub mod models;
pub mod services;

pub use models::{RankedCombo, RevenueReport, RevenueSeries, SeriesPoint};
pub use services::{ReportParams, ReportService, SortCriterion};
