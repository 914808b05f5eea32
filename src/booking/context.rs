//! Context builders for the guarded booking operations.
//!
//! Each builder turns raw tool parameters plus read-only store access into
//! the facts its rule set reads. Builders never fail: anything they cannot
//! resolve is stored as `Null` so the dependent rules fail closed.

use super::operation::Operation;
use super::store::BookingLookup;
use crate::core::{Context, Value};
use crate::gate::Params;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

pub const CHECK_IN: &str = "check_in";
pub const CHECK_OUT: &str = "check_out";
pub const GUESTS: &str = "guests";
pub const DAYS_UNTIL_CHECKIN: &str = "days_until_checkin";
pub const PAYMENT_VERIFIED: &str = "payment_verified";
pub const BOOKING_ID: &str = "booking_id";

const DATE_FORMAT: &str = "%Y-%m-%d";
const SECONDS_PER_DAY: i64 = 86_400;

/// Whole days from `now` until midnight of `check_in`, rounded down.
///
/// Check-in later today counts as 0; check-in yesterday counts as -1.
pub fn days_until(check_in: NaiveDate, now: NaiveDateTime) -> i64 {
    let midnight = check_in.and_time(NaiveTime::MIN);
    (midnight - now).num_seconds().div_euclid(SECONDS_PER_DAY)
}

fn text_param<'a>(params: &'a Params, key: &str) -> Option<&'a str> {
    params.get(key).and_then(|v| v.as_str())
}

fn date_param(params: &Params, key: &str) -> Option<NaiveDate> {
    text_param(params, key).and_then(|raw| NaiveDate::parse_from_str(raw, DATE_FORMAT).ok())
}

/// Context for `book_hotel`.
///
/// `guests` defaults to 1 when omitted. Any other non-integer value, such as
/// `2.0` or `"2"`, is `Null`, so the call is rejected by the max-guests rule.
/// If either date fails to parse, both dates and `days_until_checkin` are
/// `Null`.
pub fn booking_context(params: &Params, now: NaiveDateTime) -> Context {
    let guests = match params.get(GUESTS) {
        None | Some(serde_json::Value::Null) => Value::Integer(1),
        Some(raw) => raw.as_i64().map_or(Value::Null, Value::Integer),
    };
    let context = Context::new().with(GUESTS, guests);

    match (date_param(params, CHECK_IN), date_param(params, CHECK_OUT)) {
        (Some(check_in), Some(check_out)) => context
            .with(CHECK_IN, check_in)
            .with(CHECK_OUT, check_out)
            .with(DAYS_UNTIL_CHECKIN, days_until(check_in, now)),
        _ => {
            tracing::debug!(
                check_in = ?params.get(CHECK_IN),
                check_out = ?params.get(CHECK_OUT),
                "Booking dates unresolved, date rules will fail"
            );
            context
                .with_null(CHECK_IN)
                .with_null(CHECK_OUT)
                .with_null(DAYS_UNTIL_CHECKIN)
        }
    }
}

/// Context for `confirm_booking`: whether a payment exists for the booking.
pub fn confirmation_context<L: BookingLookup + ?Sized>(params: &Params, lookup: &L) -> Context {
    let verified = text_param(params, BOOKING_ID).is_some_and(|id| lookup.payment(id).is_some());
    Context::new().with(PAYMENT_VERIFIED, verified)
}

/// Context for `cancel_booking`.
///
/// An unknown booking yields `booking_id = Null` and no day count.
pub fn cancellation_context<L: BookingLookup + ?Sized>(
    params: &Params,
    lookup: &L,
    now: NaiveDateTime,
) -> Context {
    let found = text_param(params, BOOKING_ID)
        .and_then(|id| lookup.booking(id).map(|booking| (id, booking)));

    match found {
        Some((id, booking)) => Context::new()
            .with(BOOKING_ID, id)
            .with(DAYS_UNTIL_CHECKIN, days_until(booking.check_in, now)),
        None => Context::new().with_null(BOOKING_ID),
    }
}

/// Build the context for any operation name.
/// Names without a builder get an empty context.
pub fn build_context<L: BookingLookup + ?Sized>(
    operation: &str,
    params: &Params,
    lookup: &L,
    now: NaiveDateTime,
) -> Context {
    match operation.parse::<Operation>() {
        Ok(Operation::BookHotel) => booking_context(params, now),
        Ok(Operation::ConfirmBooking) => confirmation_context(params, lookup),
        Ok(Operation::CancelBooking) => cancellation_context(params, lookup, now),
        Ok(Operation::ProcessPayment) | Err(_) => Context::new(),
    }
}
