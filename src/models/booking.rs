use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::{Customer, SeatType, Show};

/// Service fee applied on top of the ticket subtotal.
pub const SERVICE_FEE_RATE: f64 = 0.02;
/// GST applied on top of the ticket subtotal.
pub const TAX_RATE: f64 = 0.18;

/// Snapshot of a seat at booking time. The live status stays in the
/// theater grid; the booking keeps stable coordinates plus the pricing
/// facts that never change after seat creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookedSeat {
    pub id: String,
    pub row: usize,
    pub col: usize,
    pub seat_type: SeatType,
    pub price: f64,
}

/// Full charge breakdown for a booking. Computed once when the booking is
/// committed, so statistics and receipts always agree on the total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Charges {
    pub subtotal: f64,
    pub service_fee: f64,
    pub tax: f64,
    pub total: f64,
}

impl Charges {
    pub fn from_subtotal(subtotal: f64) -> Self {
        let service_fee = subtotal * SERVICE_FEE_RATE;
        let tax = subtotal * TAX_RATE;
        Self {
            subtotal,
            service_fee,
            tax,
            total: subtotal + service_fee + tax,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: u32,
    pub customer: Customer,
    pub show: Show,
    pub seats: Vec<BookedSeat>,
    pub charges: Charges,
    pub booked_at: DateTime<Local>,
}

impl Booking {
    pub fn new(id: u32, customer: Customer, show: Show, seats: Vec<BookedSeat>) -> Self {
        let subtotal = seats.iter().map(|s| s.price).sum();
        Self {
            id,
            customer,
            show,
            seats,
            charges: Charges::from_subtotal(subtotal),
            booked_at: Local::now(),
        }
    }

    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Movie;
    use chrono::{NaiveDate, NaiveTime};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn sample_show() -> Show {
        Show::new(
            101,
            Movie::new("Joker", "Crime/Drama", 122, "8.5"),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        )
    }

    #[test]
    fn charges_apply_fee_and_tax_to_subtotal() {
        let charges = Charges::from_subtotal(300.0);
        assert!(approx(charges.subtotal, 300.0));
        assert!(approx(charges.service_fee, 6.0));
        assert!(approx(charges.tax, 54.0));
        assert!(approx(charges.total, 360.0));
    }

    #[test]
    fn booking_total_is_sum_of_seat_prices_plus_charges() {
        let seats = vec![
            BookedSeat {
                id: "A1".to_string(),
                row: 0,
                col: 0,
                seat_type: SeatType::Vip,
                price: 300.0,
            },
            BookedSeat {
                id: "C4".to_string(),
                row: 2,
                col: 3,
                seat_type: SeatType::Premium,
                price: 200.0,
            },
        ];
        let customer = Customer::new("Alice", "555-0199", "alice@example.com", 4242);
        let booking = Booking::new(1001, customer, sample_show(), seats);

        assert_eq!(booking.id, 1001);
        assert_eq!(booking.seat_count(), 2);
        assert!(approx(booking.charges.subtotal, 500.0));
        assert!(approx(booking.charges.total, 500.0 * 1.20));
    }
}
