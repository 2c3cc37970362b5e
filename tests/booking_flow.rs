//! End-to-end booking flow against the public API: seed the sample
//! catalog, book seats, render the receipt, check the statistics.

use cine_reserve::catalog::seed_sample_shows;
use cine_reserve::console::display;
use cine_reserve::error::BookingError;
use cine_reserve::models::{Customer, SeatStatus};
use cine_reserve::theater::Theater;

fn seeded_theater() -> Theater {
    let mut theater = Theater::new("Cineplex Theater", 8, 10);
    seed_sample_shows(&mut theater);
    theater
}

fn customer() -> Customer {
    Customer::new("Dana Mirzoyan", "555-0142", "dana@example.com", Customer::random_id())
}

#[test]
fn full_booking_session() {
    let mut theater = seeded_theater();
    assert_eq!(theater.show_count(), 4);

    // book two VIP seats for the evening Joker show
    let seat_ids = vec!["A1".to_string(), "A2".to_string()];
    let booking_id = {
        let booking = theater.book_seats(3, &seat_ids, customer()).unwrap();
        assert_eq!(booking.id, 1001);
        assert_eq!(booking.show.movie.title, "Joker");
        assert!((booking.charges.subtotal - 600.0).abs() < 1e-9);
        booking.id
    };

    // grid reflects the committed seats
    for seat_id in ["A1", "A2"] {
        assert_eq!(
            theater.find_seat(seat_id).unwrap().status,
            SeatStatus::Booked
        );
    }

    // receipt is a pure read: render twice, totals identical both times
    let found = theater.booking_by_id(booking_id).unwrap();
    let first = display::render_receipt(found, theater.name());
    let second = display::render_receipt(found, theater.name());
    assert_eq!(first, second);
    assert!(first.contains("Subtotal         : Rs.600.00"));
    assert!(first.contains("TOTAL AMOUNT     : Rs.720.00"));

    // statistics agree with the receipt regardless of rendering order
    let stats = theater.stats();
    assert_eq!(stats.booked_seats, 2);
    assert!((stats.total_revenue - 720.0).abs() < 1e-6);

    // a second customer cannot take the same seats
    let err = theater
        .book_seats(3, &seat_ids, customer())
        .unwrap_err();
    assert_eq!(err, BookingError::SeatUnavailable("A1".to_string()));
    assert_eq!(theater.bookings().len(), 1);
}

#[test]
fn failed_bookings_never_leak_state() {
    let mut theater = seeded_theater();

    for bad_request in [
        vec!["A1".to_string(), "ZZ".to_string()],
        vec!["A1".to_string(), "A1".to_string()],
        vec![],
    ] {
        assert!(theater.book_seats(0, &bad_request, customer()).is_err());
    }
    assert!(theater.book_seats(99, &["A1".to_string()], customer()).is_err());

    assert!(theater.bookings().is_empty());
    assert_eq!(theater.stats().booked_seats, 0);
    // next successful booking still gets the first id
    let booking = theater
        .book_seats(0, &["A1".to_string()], customer())
        .unwrap();
    assert_eq!(booking.id, 1001);
}
