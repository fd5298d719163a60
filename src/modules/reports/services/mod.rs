pub mod bucketing;
pub mod normalizer;
pub mod ranking;
pub mod report_service;
pub mod synthesizer;

pub use bucketing::RevenueBucketer;
pub use normalizer::EntityNormalizer;
pub use ranking::{ComboRanker, SortCriterion};
pub use report_service::{ReportOptions, ReportParams, ReportService};
pub use synthesizer::PaymentSynthesizer;
