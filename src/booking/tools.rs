//! Tool operations exposed to the agent.
//!
//! These contain no business-rule checks; the gate decides whether they run.
//! They only decode their input and apply the effect to the store.

use super::operation::Operation;
use super::store::{Booking, BookingLookup, BookingStore};
use crate::gate::Params;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

/// Failures inside a tool operation, as opposed to rule violations
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool '{0}'")]
    UnknownTool(String),

    #[error("Invalid input for {tool}: {source}")]
    InvalidInput {
        tool: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid {field} date '{value}', expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },

    #[error("Booking not found")]
    BookingNotFound { booking_id: String },
}

fn one_guest() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
pub struct BookHotelInput {
    pub hotel: String,
    pub check_in: String,
    pub check_out: String,
    #[serde(default = "one_guest")]
    pub guests: u32,
}

#[derive(Debug, Deserialize)]
pub struct BookingRefInput {
    pub booking_id: String,
}

#[derive(Debug, Deserialize)]
pub struct PaymentInput {
    pub amount: f64,
    pub booking_id: String,
}

fn decode<T: DeserializeOwned>(operation: Operation, params: &Params) -> Result<T, ToolError> {
    serde_json::from_value(serde_json::Value::Object(params.clone())).map_err(|source| {
        ToolError::InvalidInput {
            tool: operation.as_str(),
            source,
        }
    })
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ToolError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ToolError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Book a hotel room.
pub fn book_hotel(store: &mut BookingStore, params: &Params) -> Result<String, ToolError> {
    let input: BookHotelInput = decode(Operation::BookHotel, params)?;
    let check_in = parse_date("check_in", &input.check_in)?;
    let check_out = parse_date("check_out", &input.check_out)?;

    let booking_id = store.next_booking_id();
    store.insert_booking(
        booking_id.clone(),
        Booking {
            hotel: input.hotel.clone(),
            check_in,
            check_out: Some(check_out),
            guests: input.guests,
            confirmed: false,
        },
    );

    Ok(format!(
        "SUCCESS: Booked {} for {} guests, {} to {} (booking {booking_id})",
        input.hotel, input.guests, input.check_in, input.check_out
    ))
}

/// Cancel an existing booking.
pub fn cancel_booking(store: &mut BookingStore, params: &Params) -> Result<String, ToolError> {
    let input: BookingRefInput = decode(Operation::CancelBooking, params)?;
    store
        .remove_booking(&input.booking_id)
        .ok_or_else(|| ToolError::BookingNotFound {
            booking_id: input.booking_id.clone(),
        })?;
    Ok(format!("SUCCESS: Cancelled booking {}", input.booking_id))
}

/// Record a payment against a booking.
pub fn process_payment(store: &mut BookingStore, params: &Params) -> Result<String, ToolError> {
    let input: PaymentInput = decode(Operation::ProcessPayment, params)?;
    if store.booking(&input.booking_id).is_none() {
        return Err(ToolError::BookingNotFound {
            booking_id: input.booking_id,
        });
    }
    store.record_payment(input.booking_id.clone(), input.amount);
    Ok(format!(
        "SUCCESS: Processed ${:.2} for {}",
        input.amount, input.booking_id
    ))
}

/// Confirm a booking.
pub fn confirm_booking(store: &mut BookingStore, params: &Params) -> Result<String, ToolError> {
    let input: BookingRefInput = decode(Operation::ConfirmBooking, params)?;
    if !store.confirm(&input.booking_id) {
        return Err(ToolError::BookingNotFound {
            booking_id: input.booking_id,
        });
    }
    Ok(format!("SUCCESS: Confirmed {}", input.booking_id))
}

/// Run the tool behind `operation`.
pub fn run(operation: Operation, store: &mut BookingStore, params: &Params) -> Result<String, ToolError> {
    match operation {
        Operation::BookHotel => book_hotel(store, params),
        Operation::ConfirmBooking => confirm_booking(store, params),
        Operation::CancelBooking => cancel_booking(store, params),
        Operation::ProcessPayment => process_payment(store, params),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: serde_json::Value) -> Params {
        match value {
            serde_json::Value::Object(map) => map,
            _ => Params::new(),
        }
    }

    fn seeded() -> BookingStore {
        BookingStore::new().with_booking(
            "BK001",
            Booking {
                hotel: "Grand Hotel".to_string(),
                check_in: NaiveDate::from_ymd_opt(2026, 2, 15).unwrap(),
                check_out: None,
                guests: 2,
                confirmed: false,
            },
        )
    }

    #[test]
    fn book_hotel_records_booking() {
        let mut store = seeded();
        let out = book_hotel(
            &mut store,
            &params(json!({
                "hotel": "Grand Hotel",
                "check_in": "2026-03-20",
                "check_out": "2026-03-25",
                "guests": 2
            })),
        )
        .unwrap();

        assert_eq!(
            out,
            "SUCCESS: Booked Grand Hotel for 2 guests, 2026-03-20 to 2026-03-25 (booking BK002)"
        );
        assert_eq!(store.booking("BK002").map(|b| b.guests), Some(2));
    }

    #[test]
    fn book_hotel_rejects_missing_fields() {
        let mut store = seeded();
        let err = book_hotel(&mut store, &params(json!({ "hotel": "Grand Hotel" }))).unwrap_err();
        assert!(matches!(err, ToolError::InvalidInput { tool: "book_hotel", .. }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn book_hotel_rejects_bad_dates() {
        let mut store = seeded();
        let err = book_hotel(
            &mut store,
            &params(json!({ "hotel": "Inn", "check_in": "soon", "check_out": "2026-03-25" })),
        )
        .unwrap_err();
        assert!(matches!(err, ToolError::InvalidDate { field: "check_in", .. }));
    }

    #[test]
    fn payment_requires_booking() {
        let mut store = seeded();
        let err = process_payment(&mut store, &params(json!({ "amount": 10.0, "booking_id": "BK404" })))
            .unwrap_err();
        assert_eq!(err.to_string(), "Booking not found");

        let out = process_payment(&mut store, &params(json!({ "amount": 200, "booking_id": "BK001" })))
            .unwrap();
        assert_eq!(out, "SUCCESS: Processed $200.00 for BK001");
        assert_eq!(store.payment("BK001"), Some(200.0));
    }

    #[test]
    fn confirm_and_cancel() {
        let mut store = seeded();
        let booking = params(json!({ "booking_id": "BK001" }));

        assert_eq!(confirm_booking(&mut store, &booking).unwrap(), "SUCCESS: Confirmed BK001");
        assert!(store.booking("BK001").unwrap().confirmed);

        assert_eq!(
            run(Operation::CancelBooking, &mut store, &booking).unwrap(),
            "SUCCESS: Cancelled booking BK001"
        );
        assert!(store.is_empty());
        assert!(cancel_booking(&mut store, &booking).is_err());
    }
}
