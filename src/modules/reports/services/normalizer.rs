use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use tracing::debug;

use crate::core::money::Amount;
use crate::core::period::parse_datetime;
use crate::modules::reports::models::raw;
use crate::modules::reports::models::{
    Booking, BookingStatus, Combo, Payment, PaymentStatus, Review,
};

/// Translates raw backend records into canonical entities
///
/// Field names are resolved exclusively through the alias tables in
/// `models::raw`, so the two upstream casing conventions never leak past
/// this boundary. Missing optional fields become `None` (amount-like fields
/// become zero); a record without a primary identifier is skipped.
pub struct EntityNormalizer;

impl EntityNormalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize_bookings(&self, records: &[Value]) -> Vec<Booking> {
        records
            .iter()
            .filter_map(|v| self.booking_from_value(v))
            .collect()
    }

    pub fn normalize_reviews(&self, records: &[Value]) -> Vec<Review> {
        records
            .iter()
            .filter_map(|v| self.review_from_value(v))
            .collect()
    }

    pub fn normalize_combos(&self, records: &[Value]) -> Vec<Combo> {
        records
            .iter()
            .filter_map(|v| self.combo_from_value(v))
            .collect()
    }

    fn booking_from_value(&self, value: &Value) -> Option<Booking> {
        let obj = value.as_object()?;
        let Some(id) = pick_id(obj, &raw::booking::ID) else {
            debug!("skipping booking record without an id");
            return None;
        };

        let payments = raw::booking::PAYMENTS
            .pick(obj)
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|p| self.payment_from_value(p))
                    .collect()
            })
            .unwrap_or_default();

        Some(Booking {
            id,
            combo_id: pick_id(obj, &raw::booking::COMBO_ID),
            status: pick_status(obj, &raw::booking::STATUS),
            total_amount: pick_amount(obj, &raw::booking::TOTAL_AMOUNT),
            created_at: pick_datetime(obj, &raw::booking::CREATED_DATE),
            confirmed_at: pick_datetime(obj, &raw::booking::CONFIRMED_DATE),
            booked_at: pick_datetime(obj, &raw::booking::BOOKING_DATE),
            payments,
        })
    }

    fn payment_from_value(&self, value: &Value) -> Option<Payment> {
        let obj = value.as_object()?;
        let Some(id) = pick_id(obj, &raw::payment::ID) else {
            debug!("skipping payment record without an id");
            return None;
        };

        let status = raw::payment::STATUS
            .pick(obj)
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
            .unwrap_or(PaymentStatus::Other);

        Some(Payment {
            id: Some(id),
            booking_id: pick_id(obj, &raw::payment::BOOKING_ID),
            amount: pick_amount(obj, &raw::payment::AMOUNT),
            paid_at: pick_datetime(obj, &raw::payment::PAYMENT_DATE),
            status,
            synthesized: false,
        })
    }

    fn review_from_value(&self, value: &Value) -> Option<Review> {
        let obj = value.as_object()?;
        let Some(id) = pick_id(obj, &raw::review::ID) else {
            debug!("skipping review record without an id");
            return None;
        };

        // Combo reference carried by the review itself: direct FK first,
        // then the nested booking reference.
        let combo_id = pick_id(obj, &raw::review::COMBO_ID).or_else(|| {
            raw::review::BOOKING
                .pick(obj)
                .and_then(Value::as_object)
                .and_then(|b| pick_id(b, &raw::booking::COMBO_ID))
        });

        Some(Review {
            id,
            rating: pick_rating(obj, &raw::review::RATING),
            booking_id: pick_id(obj, &raw::review::BOOKING_ID),
            combo_id,
            reply: raw::review::REPLY
                .pick(obj)
                .and_then(Value::as_str)
                .map(str::to_owned),
        })
    }

    fn combo_from_value(&self, value: &Value) -> Option<Combo> {
        let obj = value.as_object()?;
        let Some(id) = pick_id(obj, &raw::combo::ID) else {
            debug!("skipping combo record without an id");
            return None;
        };

        Some(Combo {
            id,
            host_id: pick_id(obj, &raw::combo::HOST_ID),
            name: raw::combo::NAME
                .pick(obj)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_owned(),
            image: raw::combo::IMAGE
                .pick(obj)
                .and_then(Value::as_str)
                .map(str::to_owned),
        })
    }
}

impl Default for EntityNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

fn pick_id(obj: &Map<String, Value>, field: &raw::FieldAliases) -> Option<i64> {
    match field.pick(obj)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn pick_amount(obj: &Map<String, Value>, field: &raw::FieldAliases) -> Decimal {
    Amount::from_value_or_zero(field.pick(obj))
}

fn pick_datetime(obj: &Map<String, Value>, field: &raw::FieldAliases) -> Option<NaiveDateTime> {
    field.pick(obj).and_then(Value::as_str).and_then(parse_datetime)
}

fn pick_rating(obj: &Map<String, Value>, field: &raw::FieldAliases) -> Option<f64> {
    match field.pick(obj)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn pick_status(obj: &Map<String, Value>, field: &raw::FieldAliases) -> BookingStatus {
    field
        .pick(obj)
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok())
        .unwrap_or_default()
}
