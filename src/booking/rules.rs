//! The catalog of booking constraints.

use super::context::{BOOKING_ID, CHECK_IN, CHECK_OUT, DAYS_UNTIL_CHECKIN, GUESTS, PAYMENT_VERIFIED};
use super::operation::Operation;
use super::policy::BookingPolicy;
use crate::enforcement::{RuleSet, RuleSetBuilder};

fn day_count(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}

/// Rules for `book_hotel`: dates in order, party size, advance notice.
pub fn booking_rules(policy: &BookingPolicy) -> RuleSet {
    let max_guests = policy.max_guests;
    let min_advance = policy.min_advance_days;

    RuleSetBuilder::new()
        .rule(
            "valid_dates",
            |ctx| matches!((ctx.date(CHECK_IN), ctx.date(CHECK_OUT)), (Some(ci), Some(co)) if ci < co),
            "Check-in must be before check-out",
        )
        .rule(
            "max_guests",
            move |ctx| ctx.integer(GUESTS).is_some_and(|g| g <= max_guests),
            format!("Maximum {max_guests} guests per booking"),
        )
        .rule(
            "advance_booking",
            move |ctx| ctx.integer(DAYS_UNTIL_CHECKIN).is_some_and(|d| d >= min_advance),
            format!("Must book at least {} in advance", day_count(min_advance)),
        )
        .build()
}

/// Rules for `confirm_booking`.
pub fn confirmation_rules(_policy: &BookingPolicy) -> RuleSet {
    RuleSetBuilder::new()
        .rule(
            "payment_before_confirm",
            |ctx| ctx.flag(PAYMENT_VERIFIED).unwrap_or(false),
            "Payment must be verified before confirmation",
        )
        .build()
}

/// Rules for `cancel_booking`.
pub fn cancellation_rules(policy: &BookingPolicy) -> RuleSet {
    let window = policy.cancellation_window_days;

    RuleSetBuilder::new()
        .rule(
            "cancellation_window",
            move |ctx| ctx.integer(DAYS_UNTIL_CHECKIN).is_some_and(|d| d >= window),
            format!(
                "Cannot cancel within {} hours of check-in",
                policy.cancellation_window_hours()
            ),
        )
        .rule(
            "booking_exists",
            |ctx| ctx.is_present(BOOKING_ID),
            "No booking found to cancel",
        )
        .build()
}

/// Rule set guarding `operation`, or `None` if it runs unchecked.
pub fn rules_for(operation: Operation, policy: &BookingPolicy) -> Option<RuleSet> {
    match operation {
        Operation::BookHotel => Some(booking_rules(policy)),
        Operation::ConfirmBooking => Some(confirmation_rules(policy)),
        Operation::CancelBooking => Some(cancellation_rules(policy)),
        Operation::ProcessPayment => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Context;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn valid_booking() -> Context {
        Context::new()
            .with(CHECK_IN, date(2026, 3, 20))
            .with(CHECK_OUT, date(2026, 3, 25))
            .with(GUESTS, 2i64)
            .with(DAYS_UNTIL_CHECKIN, 46i64)
    }

    #[test]
    fn rule_names_follow_catalog_order() {
        let policy = BookingPolicy::default();
        assert_eq!(
            booking_rules(&policy).rule_names().collect::<Vec<_>>(),
            vec!["valid_dates", "max_guests", "advance_booking"]
        );
        assert_eq!(
            cancellation_rules(&policy).rule_names().collect::<Vec<_>>(),
            vec!["cancellation_window", "booking_exists"]
        );
    }

    #[test]
    fn valid_booking_passes() {
        let verdict = booking_rules(&BookingPolicy::default()).validate(&valid_booking());
        assert!(verdict.passed());
    }

    #[test]
    fn reversed_dates_fail() {
        let ctx = valid_booking()
            .with(CHECK_IN, date(2026, 3, 25))
            .with(CHECK_OUT, date(2026, 3, 20));
        let verdict = booking_rules(&BookingPolicy::default()).validate(&ctx);
        assert_eq!(verdict.violations(), ["Check-in must be before check-out"]);
    }

    #[test]
    fn same_day_checkout_fails() {
        let ctx = valid_booking().with(CHECK_OUT, date(2026, 3, 20));
        assert!(!booking_rules(&BookingPolicy::default()).validate(&ctx).passed());
    }

    #[test]
    fn empty_context_fails_every_booking_rule() {
        let verdict = booking_rules(&BookingPolicy::default()).validate(&Context::new());
        assert_eq!(
            verdict.violations(),
            [
                "Check-in must be before check-out",
                "Maximum 10 guests per booking",
                "Must book at least 1 day in advance",
            ]
        );
    }

    #[test]
    fn messages_follow_policy() {
        let policy = BookingPolicy {
            max_guests: 4,
            min_advance_days: 3,
            cancellation_window_days: 1,
            ..BookingPolicy::default()
        };

        let ctx = valid_booking()
            .with(GUESTS, 5i64)
            .with(DAYS_UNTIL_CHECKIN, 2i64);
        assert_eq!(
            booking_rules(&policy).validate(&ctx).violations(),
            ["Maximum 4 guests per booking", "Must book at least 3 days in advance"]
        );

        let cancel = Context::new().with(BOOKING_ID, "BK001").with(DAYS_UNTIL_CHECKIN, 0i64);
        assert_eq!(
            cancellation_rules(&policy).validate(&cancel).violations(),
            ["Cannot cancel within 24 hours of check-in"]
        );
    }

    #[test]
    fn day_counts_are_inclusive_minimums() {
        let policy = BookingPolicy::default();

        let booking = booking_rules(&policy);
        assert!(booking.validate(&valid_booking().with(DAYS_UNTIL_CHECKIN, 1i64)).passed());
        assert_eq!(
            booking.validate(&valid_booking().with(DAYS_UNTIL_CHECKIN, 0i64)).violations(),
            ["Must book at least 1 day in advance"]
        );

        let cancellation = cancellation_rules(&policy);
        let cancel = |days: i64| Context::new().with(BOOKING_ID, "BK001").with(DAYS_UNTIL_CHECKIN, days);
        assert!(cancellation.validate(&cancel(2)).passed());
        assert_eq!(
            cancellation.validate(&cancel(1)).violations(),
            ["Cannot cancel within 48 hours of check-in"]
        );
    }

    #[test]
    fn confirmation_requires_payment() {
        let rules = confirmation_rules(&BookingPolicy::default());
        assert!(rules.validate(&Context::new().with(PAYMENT_VERIFIED, true)).passed());
        assert_eq!(
            rules.validate(&Context::new()).violations(),
            ["Payment must be verified before confirmation"]
        );
    }

    #[test]
    fn unknown_booking_fails_both_cancellation_rules() {
        let ctx = Context::new().with_null(BOOKING_ID);
        assert_eq!(
            cancellation_rules(&BookingPolicy::default()).validate(&ctx).violations(),
            ["Cannot cancel within 48 hours of check-in", "No booking found to cancel"]
        );
    }

    #[test]
    fn payments_are_unguarded() {
        assert!(rules_for(Operation::ProcessPayment, &BookingPolicy::default()).is_none());
        assert!(rules_for(Operation::BookHotel, &BookingPolicy::default()).is_some());
    }
}
