use crate::modules::reports::models::{Booking, Payment, PaymentStatus};

/// Produces the uniform payment stream the downstream engines aggregate
///
/// The upstream API does not always materialize the payments navigation
/// property, so a booking in a paid lifecycle state without explicit
/// payment rows gets exactly one synthetic success payment fabricated from
/// its own fields. Bookings that already carry payments are passed through
/// verbatim, so nothing is ever double-counted.
pub struct PaymentSynthesizer;

impl PaymentSynthesizer {
    pub fn new() -> Self {
        Self
    }

    /// Payments for one booking: explicit rows verbatim, else zero or one
    /// synthesized payment
    pub fn payments_for(&self, booking: &Booking) -> Vec<Payment> {
        if !booking.payments.is_empty() {
            return booking.payments.clone();
        }

        if !booking.status.counts_as_paid() {
            return Vec::new();
        }

        vec![Payment {
            id: None,
            booking_id: Some(booking.id),
            amount: booking.total_amount,
            // First non-null of confirmation, creation, booking date; a
            // booking with none stays timestampless and is excluded from
            // bucketing rather than dated "now".
            paid_at: booking.revenue_date(),
            status: PaymentStatus::Success,
            synthesized: true,
        }]
    }

    /// The flattened payment stream for a booking snapshot, filtered to
    /// successful payments as the bucketing engine expects
    pub fn successful_payments(&self, bookings: &[Booking]) -> Vec<Payment> {
        bookings
            .iter()
            .flat_map(|b| self.payments_for(b))
            .filter(Payment::is_success)
            .collect()
    }
}

impl Default for PaymentSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}
