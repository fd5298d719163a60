pub mod entities;
pub mod raw;
pub mod revenue_report;

pub use entities::{Booking, BookingStatus, Combo, Payment, PaymentStatus, Review};
pub use revenue_report::{RankedCombo, RevenueReport, RevenueSeries, SeriesPoint};
