//! theater.rs
//!
//! Seat inventory and booking bookkeeping for a single theater.
//!
//! The theater owns the full seat grid, the show list and every booking
//! made during the run. Bookings keep seat snapshots (id, coordinates,
//! price); the live seat status only ever lives in the grid here.

use std::collections::HashSet;

use serde::Serialize;
use tracing::info;

use crate::error::BookingError;
use crate::models::{BookedSeat, Booking, Customer, Seat, SeatStatus, SeatType, Show};

/// First booking id handed out; only successful bookings advance the counter.
const FIRST_BOOKING_ID: u32 = 1001;

/// Row-band pricing policy: first 2 rows VIP, next 3 Premium, rest Regular.
fn band_for_row(row: usize) -> (SeatType, f64) {
    if row < 2 {
        (SeatType::Vip, 300.0)
    } else if row < 5 {
        (SeatType::Premium, 200.0)
    } else {
        (SeatType::Regular, 150.0)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TheaterStats {
    pub total_seats: usize,
    pub booked_seats: usize,
    pub available_seats: usize,
    pub occupancy_rate: f64,
    pub total_revenue: f64,
    pub total_bookings: usize,
}

pub struct Theater {
    name: String,
    rows: usize,
    cols: usize,
    seats: Vec<Vec<Seat>>,
    shows: Vec<Show>,
    bookings: Vec<Booking>,
    next_booking_id: u32,
}

impl Theater {
    pub fn new(name: impl Into<String>, rows: usize, cols: usize) -> Self {
        assert!((1..=26).contains(&rows), "rows must be between 1 and 26");
        assert!(cols >= 1, "cols must be at least 1");

        let seats = (0..rows)
            .map(|row| {
                (0..cols)
                    .map(|col| {
                        let (seat_type, price) = band_for_row(row);
                        Seat::new(row, col, seat_type, price)
                    })
                    .collect()
            })
            .collect();

        Self {
            name: name.into(),
            rows,
            cols,
            seats,
            shows: Vec::new(),
            bookings: Vec::new(),
            next_booking_id: FIRST_BOOKING_ID,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn seat_rows(&self) -> &[Vec<Seat>] {
        &self.seats
    }

    pub fn add_show(&mut self, show: Show) {
        self.shows.push(show);
    }

    pub fn shows(&self) -> &[Show] {
        &self.shows
    }

    pub fn show_count(&self) -> usize {
        self.shows.len()
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Resolves a seat id of the form `<letter><number>` (e.g. "A1").
    /// Malformed ids, non-numeric suffixes and out-of-grid coordinates all
    /// come back as None, never a panic.
    pub fn find_seat(&self, seat_id: &str) -> Option<&Seat> {
        let (row, col) = self.parse_seat_id(seat_id)?;
        Some(&self.seats[row][col])
    }

    fn parse_seat_id(&self, seat_id: &str) -> Option<(usize, usize)> {
        let mut chars = seat_id.chars();
        let row_ch = chars.next()?;
        if !row_ch.is_ascii_uppercase() {
            return None;
        }
        let row = (row_ch as usize) - ('A' as usize);
        let col: usize = chars.as_str().parse().ok()?;
        if row >= self.rows || col < 1 || col > self.cols {
            return None;
        }
        Some((row, col - 1))
    }

    /// Books a set of seats for one show, all-or-nothing.
    ///
    /// Every precondition is checked before any seat is touched: the show
    /// index must be valid, every id must resolve, every seat must be
    /// available and no id may repeat. On any failure nothing changes and
    /// the violated precondition is returned.
    pub fn book_seats(
        &mut self,
        show_index: usize,
        seat_ids: &[String],
        customer: Customer,
    ) -> Result<&Booking, BookingError> {
        if seat_ids.is_empty() {
            return Err(BookingError::NoSeats);
        }
        let show = self
            .shows
            .get(show_index)
            .cloned()
            .ok_or(BookingError::InvalidShow {
                show_count: self.shows.len(),
            })?;

        // Сначала валидируем все места, потом бронируем
        let mut coords = Vec::with_capacity(seat_ids.len());
        let mut seen = HashSet::new();
        for seat_id in seat_ids {
            let (row, col) = self
                .parse_seat_id(seat_id)
                .ok_or_else(|| BookingError::UnknownSeat(seat_id.clone()))?;
            let seat = &self.seats[row][col];
            if !seat.is_available() {
                return Err(BookingError::SeatUnavailable(seat.id()));
            }
            if !seen.insert((row, col)) {
                return Err(BookingError::DuplicateSeat(seat.id()));
            }
            coords.push((row, col));
        }

        // Commit: flip seat statuses and snapshot them for the booking.
        let mut booked = Vec::with_capacity(coords.len());
        for (row, col) in coords {
            let seat = &mut self.seats[row][col];
            seat.status = SeatStatus::Booked;
            booked.push(BookedSeat {
                id: seat.id(),
                row,
                col,
                seat_type: seat.seat_type,
                price: seat.price,
            });
        }

        let booking = Booking::new(self.next_booking_id, customer, show, booked);
        self.next_booking_id += 1;
        info!(
            booking_id = booking.id,
            show_id = booking.show.id,
            seats = booking.seat_count(),
            total = booking.charges.total,
            "🎫 booking confirmed"
        );

        let idx = self.bookings.len();
        self.bookings.push(booking);
        Ok(&self.bookings[idx])
    }

    /// Linear scan; booking ids are unique so the first hit is the only one.
    pub fn booking_by_id(&self, booking_id: u32) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == booking_id)
    }

    pub fn stats(&self) -> TheaterStats {
        let total_seats = self.rows * self.cols;
        let booked_seats = self
            .seats
            .iter()
            .flatten()
            .filter(|s| s.status == SeatStatus::Booked)
            .count();
        let total_revenue = self.bookings.iter().map(|b| b.charges.total).sum();

        TheaterStats {
            total_seats,
            booked_seats,
            available_seats: total_seats - booked_seats,
            occupancy_rate: booked_seats as f64 / total_seats as f64 * 100.0,
            total_revenue,
            total_bookings: self.bookings.len(),
        }
    }
}
