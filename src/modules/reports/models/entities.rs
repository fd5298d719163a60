// Canonical, normalized entities consumed by the aggregation engines.
//
// All of these are read-only inputs derived from the backend snapshot; the
// engines never mutate them, only derive transient aggregates.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Booking lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Awaiting host confirmation, no revenue yet
    Pending,

    /// Host confirmed, counts as paid
    Confirmed,

    /// Service in progress
    Processing,

    /// Service delivered, counts as paid
    Completed,

    /// Cancelled before delivery
    Cancelled,
}

impl BookingStatus {
    /// Whether this lifecycle state represents money actually received
    pub fn counts_as_paid(&self) -> bool {
        matches!(self, BookingStatus::Confirmed | BookingStatus::Completed)
    }
}

impl Default for BookingStatus {
    fn default() -> Self {
        BookingStatus::Pending
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingStatus::Pending => write!(f, "pending"),
            BookingStatus::Confirmed => write!(f, "confirmed"),
            BookingStatus::Processing => write!(f, "processing"),
            BookingStatus::Completed => write!(f, "completed"),
            BookingStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "processing" => Ok(BookingStatus::Processing),
            "completed" => Ok(BookingStatus::Completed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            _ => Err(format!("Invalid booking status: {}", s)),
        }
    }
}

/// Payment status; only `Success` counts toward revenue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Success,
    Other,
}

impl std::str::FromStr for PaymentStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("success") {
            Ok(PaymentStatus::Success)
        } else {
            Ok(PaymentStatus::Other)
        }
    }
}

/// A payment row, either explicit from the backend or synthesized from a
/// paid booking that carried no payment records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Backend row id; synthesized payments have none
    pub id: Option<i64>,
    pub booking_id: Option<i64>,
    pub amount: Decimal,
    /// Unknown timestamps exclude the payment from bucketing, they are
    /// never defaulted to "now"
    pub paid_at: Option<NaiveDateTime>,
    pub status: PaymentStatus,
    pub synthesized: bool,
}

impl Payment {
    pub fn is_success(&self) -> bool {
        self.status == PaymentStatus::Success
    }
}

/// A normalized booking with its explicit payments, if the backend
/// materialized any
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub combo_id: Option<i64>,
    pub status: BookingStatus,
    pub total_amount: Decimal,
    pub created_at: Option<NaiveDateTime>,
    pub confirmed_at: Option<NaiveDateTime>,
    pub booked_at: Option<NaiveDateTime>,
    pub payments: Vec<Payment>,
}

impl Booking {
    /// The date revenue for this booking is attributed to: confirmation
    /// first, then creation, then the booking date
    pub fn revenue_date(&self) -> Option<NaiveDateTime> {
        self.confirmed_at.or(self.created_at).or(self.booked_at)
    }
}

/// A normalized review; 0 is a valid, countable rating, `None` means the
/// rating was absent upstream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub rating: Option<f64>,
    pub booking_id: Option<i64>,
    /// Combo reference carried by the review itself (direct FK or nested
    /// booking reference), used when the booking row is not in the snapshot
    pub combo_id: Option<i64>,
    pub reply: Option<String>,
}

/// A bookable service combo owned by one host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combo {
    pub id: i64,
    pub host_id: Option<i64>,
    pub name: String,
    pub image: Option<String>,
}
