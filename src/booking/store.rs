//! In-memory bookings and payments.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub hotel: String,
    pub check_in: NaiveDate,
    #[serde(default)]
    pub check_out: Option<NaiveDate>,
    pub guests: u32,
    #[serde(default)]
    pub confirmed: bool,
}

/// Read-only view of persistent booking state.
///
/// Context builders only ever see this trait, never the mutable store.
pub trait BookingLookup {
    fn booking(&self, booking_id: &str) -> Option<&Booking>;

    /// Amount paid for a booking, if any payment was recorded.
    fn payment(&self, booking_id: &str) -> Option<f64>;
}

/// Bookings by id and payments by booking id.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingStore {
    bookings: BTreeMap<String, Booking>,
    payments: BTreeMap<String, f64>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a booking while constructing a store.
    pub fn with_booking(mut self, booking_id: impl Into<String>, booking: Booking) -> Self {
        self.bookings.insert(booking_id.into(), booking);
        self
    }

    /// Seed a payment while constructing a store.
    pub fn with_payment(mut self, booking_id: impl Into<String>, amount: f64) -> Self {
        self.payments.insert(booking_id.into(), amount);
        self
    }

    /// First free id of the form `BK001`, `BK002`, ...
    pub fn next_booking_id(&self) -> String {
        (self.bookings.len() + 1..)
            .map(|n| format!("BK{n:03}"))
            .find(|id| !self.bookings.contains_key(id))
            .unwrap_or_default()
    }

    pub fn insert_booking(&mut self, booking_id: impl Into<String>, booking: Booking) {
        self.bookings.insert(booking_id.into(), booking);
    }

    /// Remove a booking along with any payment recorded for it.
    pub fn remove_booking(&mut self, booking_id: &str) -> Option<Booking> {
        self.payments.remove(booking_id);
        self.bookings.remove(booking_id)
    }

    pub fn record_payment(&mut self, booking_id: impl Into<String>, amount: f64) {
        self.payments.insert(booking_id.into(), amount);
    }

    /// Mark a booking confirmed. Returns false if it does not exist.
    pub fn confirm(&mut self, booking_id: &str) -> bool {
        match self.bookings.get_mut(booking_id) {
            Some(booking) => {
                booking.confirmed = true;
                true
            }
            None => false,
        }
    }

    pub fn bookings(&self) -> impl Iterator<Item = (&str, &Booking)> {
        self.bookings.iter().map(|(id, b)| (id.as_str(), b))
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

impl BookingLookup for BookingStore {
    fn booking(&self, booking_id: &str) -> Option<&Booking> {
        self.bookings.get(booking_id)
    }

    fn payment(&self, booking_id: &str) -> Option<f64> {
        self.payments.get(booking_id).copied()
    }
}
