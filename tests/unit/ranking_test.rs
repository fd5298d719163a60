// Combo Ranking Engine tests: review resolution through the booking chain,
// 0-rating accounting, current-period revenue windows, eligibility rules
// and both tie-break orders.

use chrono::NaiveDate;
use hostfolio::core::period::{parse_datetime, ViewMode};
use hostfolio::reports::models::{Booking, BookingStatus, Combo, Payment, PaymentStatus, Review};
use hostfolio::reports::services::{ComboRanker, SortCriterion};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const TODAY: &str = "2024-03-15";

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

fn combo(id: i64, name: &str) -> Combo {
    Combo {
        id,
        host_id: Some(42),
        name: name.to_string(),
        image: None,
    }
}

fn booking(id: i64, combo_id: i64, status: BookingStatus, total: Decimal, date: &str) -> Booking {
    Booking {
        id,
        combo_id: Some(combo_id),
        status,
        total_amount: total,
        created_at: parse_datetime(date),
        confirmed_at: None,
        booked_at: None,
        payments: vec![],
    }
}

fn review(id: i64, booking_id: i64, rating: f64) -> Review {
    Review {
        id,
        rating: Some(rating),
        booking_id: Some(booking_id),
        combo_id: None,
        reply: None,
    }
}

#[test]
fn test_zero_rating_counts_in_average() {
    // One 0-rated and one 4-rated review must average 2.0, not 4.0.
    let combos = vec![combo(1, "O1")];
    let bookings = vec![
        booking(10, 1, BookingStatus::Completed, dec!(100), TODAY),
        booking(11, 1, BookingStatus::Completed, dec!(100), TODAY),
    ];
    let reviews = vec![review(100, 10, 0.0), review(101, 11, 4.0)];

    let ranked = ComboRanker::default().rank(
        &combos,
        &bookings,
        &reviews,
        ViewMode::ByDay,
        today(),
        SortCriterion::ByRating,
    );

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].average_rating, 2.0);
    assert_eq!(ranked[0].review_count, 2);
}

#[test]
fn test_missing_rating_is_excluded_from_average() {
    let combos = vec![combo(1, "O1")];
    let bookings = vec![booking(10, 1, BookingStatus::Completed, dec!(100), TODAY)];
    let reviews = vec![
        review(100, 10, 4.0),
        Review {
            id: 101,
            rating: None,
            booking_id: Some(10),
            combo_id: None,
            reply: None,
        },
    ];

    let ranked = ComboRanker::default().rank(
        &combos,
        &bookings,
        &reviews,
        ViewMode::ByDay,
        today(),
        SortCriterion::ByRating,
    );

    assert_eq!(ranked[0].review_count, 1);
    assert_eq!(ranked[0].average_rating, 4.0);
}

#[test]
fn test_rating_tie_breaks_on_review_count() {
    // O1 and O2 both average 4.5; O2 has more reviews and must rank first.
    let combos = vec![combo(1, "O1"), combo(2, "O2")];
    let mut bookings = Vec::new();
    let mut reviews = Vec::new();
    let mut next_id = 0i64;
    for (combo_id, count) in [(1i64, 2usize), (2, 4)] {
        for i in 0..count {
            next_id += 1;
            bookings.push(booking(next_id, combo_id, BookingStatus::Completed, dec!(100), TODAY));
            let rating = if i % 2 == 0 { 4.0 } else { 5.0 };
            reviews.push(review(1000 + next_id, next_id, rating));
        }
    }

    let ranked = ComboRanker::default().rank(
        &combos,
        &bookings,
        &reviews,
        ViewMode::ByDay,
        today(),
        SortCriterion::ByRating,
    );

    assert_eq!(ranked[0].combo_id, 2);
    assert_eq!(ranked[0].rank, 1);
    assert_eq!(ranked[1].combo_id, 1);
    assert_eq!(ranked[1].rank, 2);
    assert_eq!(ranked[0].average_rating, ranked[1].average_rating);
}

#[test]
fn test_revenue_tie_breaks_on_rating() {
    let combos = vec![combo(1, "O1"), combo(2, "O2")];
    let bookings = vec![
        booking(10, 1, BookingStatus::Completed, dec!(500), TODAY),
        booking(11, 2, BookingStatus::Completed, dec!(500), TODAY),
    ];
    let reviews = vec![review(100, 10, 3.0), review(101, 11, 5.0)];

    let ranked = ComboRanker::default().rank(
        &combos,
        &bookings,
        &reviews,
        ViewMode::ByDay,
        today(),
        SortCriterion::ByRevenue,
    );

    assert_eq!(ranked[0].combo_id, 2);
    assert_eq!(ranked[0].period_revenue, ranked[1].period_revenue);
}

#[test]
fn test_reviewed_combo_with_no_revenue_qualifies_under_revenue_sort() {
    let combos = vec![combo(1, "no revenue"), combo(2, "earning")];
    let bookings = vec![
        // Old booking: review chain resolves, revenue falls outside the
        // current month.
        booking(10, 1, BookingStatus::Completed, dec!(900), "2023-01-10"),
        booking(11, 2, BookingStatus::Completed, dec!(100), TODAY),
    ];
    let reviews = vec![
        review(100, 10, 5.0),
        review(101, 10, 4.0),
        review(102, 10, 5.0),
    ];

    let ranked = ComboRanker::default().rank(
        &combos,
        &bookings,
        &reviews,
        ViewMode::ByDay,
        today(),
        SortCriterion::ByRevenue,
    );

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].combo_id, 2, "positive revenue outranks zero");
    assert_eq!(ranked[1].combo_id, 1);
    assert_eq!(ranked[1].period_revenue, dec!(0));
    assert_eq!(ranked[1].review_count, 3);
}

#[test]
fn test_unreviewed_combo_is_ineligible_under_rating_sort() {
    let combos = vec![combo(1, "reviewed"), combo(2, "silent")];
    let bookings = vec![
        booking(10, 1, BookingStatus::Completed, dec!(100), TODAY),
        booking(11, 2, BookingStatus::Completed, dec!(100), TODAY),
    ];
    let reviews = vec![review(100, 10, 4.0)];

    let ranked = ComboRanker::default().rank(
        &combos,
        &bookings,
        &reviews,
        ViewMode::ByDay,
        today(),
        SortCriterion::ByRating,
    );

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].combo_id, 1);
}

#[test]
fn test_top_list_is_capped_at_three_with_ranks() {
    let combos: Vec<Combo> = (1..=5).map(|i| combo(i, &format!("O{}", i))).collect();
    let bookings: Vec<Booking> = (1..=5)
        .map(|i| booking(i, i, BookingStatus::Completed, Decimal::from(i * 100), TODAY))
        .collect();
    let reviews: Vec<Review> = (1..=5).map(|i| review(100 + i, i, 4.0)).collect();

    let ranked = ComboRanker::default().rank(
        &combos,
        &bookings,
        &reviews,
        ViewMode::ByDay,
        today(),
        SortCriterion::ByRevenue,
    );

    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0].combo_id, 5);
    assert_eq!(ranked[1].combo_id, 4);
    assert_eq!(ranked[2].combo_id, 3);
    assert_eq!(
        ranked.iter().map(|r| r.rank).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}

#[test]
fn test_revenue_window_is_current_month_in_by_day_mode() {
    let combos = vec![combo(1, "O1")];
    let bookings = vec![
        booking(10, 1, BookingStatus::Completed, dec!(100), "2024-03-01"),
        booking(11, 1, BookingStatus::Completed, dec!(200), "2024-02-29"),
        booking(12, 1, BookingStatus::Pending, dec!(400), TODAY),
    ];
    let reviews = vec![review(100, 10, 4.0)];

    let ranked = ComboRanker::default().rank(
        &combos,
        &bookings,
        &reviews,
        ViewMode::ByDay,
        today(),
        SortCriterion::ByRevenue,
    );

    // Only the confirmed/completed March booking counts this month.
    assert_eq!(ranked[0].period_revenue, dec!(100));
}

#[test]
fn test_revenue_window_is_current_year_in_by_month_mode() {
    let combos = vec![combo(1, "O1")];
    let bookings = vec![
        booking(10, 1, BookingStatus::Completed, dec!(100), "2024-01-15"),
        booking(11, 1, BookingStatus::Completed, dec!(200), "2024-11-20"),
        booking(12, 1, BookingStatus::Completed, dec!(400), "2023-12-31"),
    ];
    let reviews = vec![review(100, 10, 4.0)];

    let ranked = ComboRanker::default().rank(
        &combos,
        &bookings,
        &reviews,
        ViewMode::ByMonth,
        today(),
        SortCriterion::ByRevenue,
    );

    assert_eq!(ranked[0].period_revenue, dec!(300));
}

#[test]
fn test_explicit_success_payments_override_booking_total() {
    let combos = vec![combo(1, "O1")];
    let mut b = booking(10, 1, BookingStatus::Completed, dec!(999), TODAY);
    b.payments = vec![
        Payment {
            id: Some(1),
            booking_id: Some(10),
            amount: dec!(300),
            paid_at: parse_datetime(TODAY),
            status: PaymentStatus::Success,
            synthesized: false,
        },
        Payment {
            id: Some(2),
            booking_id: Some(10),
            amount: dec!(700),
            paid_at: parse_datetime(TODAY),
            status: PaymentStatus::Other,
            synthesized: false,
        },
    ];
    let reviews = vec![review(100, 10, 4.0)];

    let ranked = ComboRanker::default().rank(
        &combos,
        &[b],
        &reviews,
        ViewMode::ByDay,
        today(),
        SortCriterion::ByRevenue,
    );

    // Only the successful explicit payment counts, never the 999 total.
    assert_eq!(ranked[0].period_revenue, dec!(300));
}

#[test]
fn test_review_resolves_via_direct_combo_when_booking_is_missing() {
    let combos = vec![combo(1, "O1")];
    let reviews = vec![Review {
        id: 100,
        rating: Some(5.0),
        booking_id: Some(999), // not in the snapshot
        combo_id: Some(1),
        reply: None,
    }];

    let ranked = ComboRanker::default().rank(
        &combos,
        &[],
        &reviews,
        ViewMode::ByDay,
        today(),
        SortCriterion::ByRating,
    );

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].average_rating, 5.0);
}

#[test]
fn test_unresolvable_review_is_excluded() {
    let combos = vec![combo(1, "O1")];
    let bookings = vec![booking(10, 1, BookingStatus::Completed, dec!(100), TODAY)];
    let reviews = vec![
        review(100, 10, 4.0),
        Review {
            id: 101,
            rating: Some(1.0),
            booking_id: None,
            combo_id: None,
            reply: None,
        },
    ];

    let ranked = ComboRanker::default().rank(
        &combos,
        &bookings,
        &reviews,
        ViewMode::ByDay,
        today(),
        SortCriterion::ByRating,
    );

    assert_eq!(ranked[0].review_count, 1);
    assert_eq!(ranked[0].average_rating, 4.0);
}
