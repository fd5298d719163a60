// Raw records arrive from two backend generations that disagree on field
// casing: the older endpoints serialize PascalCase, the newer ones
// camelCase. Rather than scattering per-field fallback chains through the
// consuming code, each logical field is declared once here as an alias
// list; the normalizer resolves fields exclusively through these tables.

use serde_json::{Map, Value};

/// Alias list for one logical field across the known upstream schemas
///
/// Order matters: the first present, non-null name wins, so the PascalCase
/// spelling is listed first per the preference policy.
#[derive(Debug, Clone, Copy)]
pub struct FieldAliases {
    names: &'static [&'static str],
}

impl FieldAliases {
    pub const fn new(names: &'static [&'static str]) -> Self {
        Self { names }
    }

    /// Resolve this field on a raw JSON object
    ///
    /// `null` counts as absent so a later alias can still supply the value.
    pub fn pick<'a>(&self, obj: &'a Map<String, Value>) -> Option<&'a Value> {
        self.names
            .iter()
            .filter_map(|name| obj.get(*name))
            .find(|v| !v.is_null())
    }
}

/// Booking record fields
pub mod booking {
    use super::FieldAliases;

    pub const ID: FieldAliases = FieldAliases::new(&["Id", "id"]);
    pub const COMBO_ID: FieldAliases = FieldAliases::new(&["ServiceComboId", "serviceComboId"]);
    pub const STATUS: FieldAliases = FieldAliases::new(&["Status", "status"]);
    pub const TOTAL_AMOUNT: FieldAliases = FieldAliases::new(&["TotalAmount", "totalAmount"]);
    pub const CREATED_DATE: FieldAliases = FieldAliases::new(&["CreatedDate", "createdDate"]);
    pub const CONFIRMED_DATE: FieldAliases =
        FieldAliases::new(&["ConfirmedDate", "confirmedDate"]);
    pub const BOOKING_DATE: FieldAliases = FieldAliases::new(&["BookingDate", "bookingDate"]);
    pub const PAYMENTS: FieldAliases = FieldAliases::new(&["Payments", "payments"]);
}

/// Payment record fields
pub mod payment {
    use super::FieldAliases;

    pub const ID: FieldAliases = FieldAliases::new(&["Id", "id"]);
    pub const BOOKING_ID: FieldAliases = FieldAliases::new(&["BookingId", "bookingId"]);
    pub const AMOUNT: FieldAliases = FieldAliases::new(&["Amount", "amount"]);
    pub const PAYMENT_DATE: FieldAliases = FieldAliases::new(&["PaymentDate", "paymentDate"]);
    pub const STATUS: FieldAliases = FieldAliases::new(&["Status", "status"]);
}

/// Review record fields
pub mod review {
    use super::FieldAliases;

    pub const ID: FieldAliases = FieldAliases::new(&["Id", "id"]);
    pub const RATING: FieldAliases = FieldAliases::new(&["Rating", "rating"]);
    pub const BOOKING_ID: FieldAliases = FieldAliases::new(&["BookingId", "bookingId"]);
    pub const BOOKING: FieldAliases = FieldAliases::new(&["Booking", "booking"]);
    pub const COMBO_ID: FieldAliases = FieldAliases::new(&["ServiceComboId", "serviceComboId"]);
    pub const REPLY: FieldAliases = FieldAliases::new(&["Reply", "reply"]);
}

/// Service-combo record fields
pub mod combo {
    use super::FieldAliases;

    pub const ID: FieldAliases = FieldAliases::new(&["Id", "id"]);
    pub const HOST_ID: FieldAliases = FieldAliases::new(&["HostId", "hostId"]);
    pub const NAME: FieldAliases = FieldAliases::new(&["Name", "name"]);
    pub const IMAGE: FieldAliases = FieldAliases::new(&["Image", "image"]);
}
