//! Guarded Travel Desk
//!
//! Replays the kind of tool calls an LLM agent makes against a booking
//! backend and shows which ones the rule gate lets through.
//!
//! Key concepts:
//! - Tools stay clean; all validation happens at the gate
//! - Every violated rule is reported, not just the first
//! - Operations without rules pass straight through
//!
//! Run with: cargo run --example travel_desk
//! Policy override: cargo run --example travel_desk -- policy.json

use chrono::{Days, Local};
use rulegate::booking::{Booking, BookingPolicy, BookingStore, SystemClock, TravelDesk};
use rulegate::gate::{Rejection, ToolCall};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rulegate=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let policy = match std::env::args().nth(1) {
        Some(path) => BookingPolicy::from_path(path)?,
        None => BookingPolicy::default(),
    };

    let today = Local::now().date_naive();
    let day = |offset: u64| today.checked_add_days(Days::new(offset)).ok_or("date out of range");
    let (check_in, check_out) = (day(30)?, day(35)?);

    let store = BookingStore::new().with_booking(
        "BK001",
        Booking {
            hotel: "Grand Hotel".to_string(),
            check_in: day(14)?,
            check_out: None,
            guests: 2,
            confirmed: false,
        },
    );

    let mut desk = TravelDesk::new(policy, store, SystemClock)?;

    let calls = [
        (
            "Confirm booking BK001".to_string(),
            "Should block - no payment",
            ToolCall::new("confirm_booking", json!({ "booking_id": "BK001" })),
        ),
        (
            format!("Book Grand Hotel for 15 people from {check_in} to {check_out}"),
            "Should block - max 10 guests",
            ToolCall::new(
                "book_hotel",
                json!({ "hotel": "Grand Hotel", "check_in": check_in.to_string(), "check_out": check_out.to_string(), "guests": 15 }),
            ),
        ),
        (
            format!("Book Grand Hotel for 2 guests from {check_in} to {check_out}"),
            "Should succeed",
            ToolCall::new(
                "book_hotel",
                json!({ "hotel": "Grand Hotel", "check_in": check_in.to_string(), "check_out": check_out.to_string(), "guests": 2 }),
            ),
        ),
        (
            "Pay $200 for BK001".to_string(),
            "Payment is unguarded",
            ToolCall::new("process_payment", json!({ "amount": 200.0, "booking_id": "BK001" })),
        ),
        (
            "Confirm booking BK001".to_string(),
            "Should succeed - payment recorded",
            ToolCall::new("confirm_booking", json!({ "booking_id": "BK001" })),
        ),
    ];

    println!("=== Rule-Gated Tool Execution ===\n");

    for (request, expected, call) in &calls {
        println!("Request:  {request}");
        println!("Expected: {expected}");

        let reply = desk.respond(call);
        let verdict = if Rejection::is_rejection(&reply) {
            "blocked by rules"
        } else if reply.starts_with("SUCCESS") {
            "executed"
        } else {
            "tool error"
        };
        println!("Result:   {reply} ({verdict})\n");
    }

    println!("Bookings on file: {}", desk.store().len());
    println!("\n=== Example Complete ===");
    Ok(())
}
