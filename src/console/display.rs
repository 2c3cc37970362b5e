//! display.rs
//!
//! Pure text renderers for the console UI: show listings, the seating
//! grid, booking confirmations, receipts and the statistics banner.
//! Nothing in here mutates theater or booking state; everything returns a
//! formatted String for the menu loop to print.

use std::fmt::Write as _;

use crate::models::{Booking, Show};
use crate::theater::{Theater, TheaterStats};

pub fn render_show(show: &Show) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Show ID: {}", show.id);
    let _ = writeln!(
        out,
        "Date: {} | Time: {}",
        show.date.format("%Y-%m-%d"),
        show.time.format("%I:%M %p")
    );
    let _ = writeln!(out, "Title: {}", show.movie.title);
    let _ = writeln!(out, "Genre: {}", show.movie.genre);
    let _ = writeln!(out, "Duration: {} minutes", show.movie.duration_minutes);
    let _ = writeln!(out, "Rating: {}", show.movie.rating);
    out
}

pub fn render_shows(shows: &[Show]) -> String {
    let mut out = String::from("\n=== AVAILABLE SHOWS ===\n");
    for (i, show) in shows.iter().enumerate() {
        let _ = writeln!(out, "\n{}. {}------------------------", i + 1, render_show(show));
    }
    out
}

pub fn render_seating_grid(theater: &Theater) -> String {
    let mut out = String::from("\n=== SEATING ARRANGEMENT ===\n");
    out.push_str("Legend: O = Available, R = Reserved, X = Booked\n");
    out.push_str("VIP (Rs.300) | Premium (Rs.200) | Regular (Rs.150)\n\n    ");

    for col in 0..theater.cols() {
        let _ = write!(out, "{:>3}", col + 1);
    }
    out.push('\n');

    for row_seats in theater.seat_rows() {
        let first = &row_seats[0];
        let _ = write!(out, "{}   ", (b'A' + first.row as u8) as char);
        for seat in row_seats {
            let _ = write!(out, "{:>3}", seat.display_char());
        }
        let _ = writeln!(out, "  ({})", first.seat_type.label());
    }

    out.push_str("\n        SCREEN\n=========================\n");
    out
}

pub fn render_booking_details(booking: &Booking) -> String {
    let mut out = String::from("\n=== BOOKING CONFIRMATION ===\n");
    let _ = writeln!(out, "Booking ID: {}", booking.id);
    let _ = writeln!(
        out,
        "Booking Time: {}",
        booking.booked_at.format("%a %b %e %H:%M:%S %Y")
    );
    let _ = writeln!(out, "\nCustomer Details:");
    let _ = writeln!(out, "Customer: {}", booking.customer.name);
    let _ = writeln!(out, "Phone: {}", booking.customer.phone);
    let _ = writeln!(out, "Email: {}", booking.customer.email);
    let _ = writeln!(out, "\nShow Details:");
    out.push_str(&render_show(&booking.show));
    let _ = writeln!(out, "\nBooked Seats:");
    for seat in &booking.seats {
        let _ = writeln!(
            out,
            "Seat {} ({}) - Rs.{:.2}",
            seat.id,
            seat.seat_type.label(),
            seat.price
        );
    }
    let _ = writeln!(out, "\nTotal Amount: Rs.{:.2}", booking.charges.total);
    out.push_str("=============================\n");
    out
}

pub fn render_receipt(booking: &Booking, theater_name: &str) -> String {
    let mut out = String::new();
    out.push_str("\n************************************************\n");
    out.push_str("*                                              *\n");
    let _ = writeln!(out, "*{:^46}*", theater_name.to_uppercase());
    let _ = writeln!(out, "*{:^46}*", "TICKET RECEIPT");
    out.push_str("*                                              *\n");
    out.push_str("************************************************\n\n");

    let _ = writeln!(out, "Receipt No: {}", booking.id);
    let _ = writeln!(
        out,
        "Date & Time: {}",
        booking.booked_at.format("%a %b %e %H:%M:%S %Y")
    );
    out.push_str("________________________________________________\n\n");

    let _ = writeln!(out, "CUSTOMER DETAILS:");
    let _ = writeln!(out, "Name        : {}", booking.customer.name);
    let _ = writeln!(out, "Phone       : {}", booking.customer.phone);
    let _ = writeln!(out, "Email       : {}", booking.customer.email);
    let _ = writeln!(out, "Customer ID : {}", booking.customer.id);
    out.push_str("________________________________________________\n\n");

    let _ = writeln!(out, "SHOW DETAILS:");
    let _ = writeln!(out, "Movie       : {}", booking.show.movie.title);
    let _ = writeln!(out, "Genre       : {}", booking.show.movie.genre);
    let _ = writeln!(out, "Duration    : {} mins", booking.show.movie.duration_minutes);
    let _ = writeln!(out, "Rating      : {}", booking.show.movie.rating);
    let _ = writeln!(out, "Show Date   : {}", booking.show.date.format("%Y-%m-%d"));
    let _ = writeln!(out, "Show Time   : {}", booking.show.time.format("%I:%M %p"));
    let _ = writeln!(out, "Show ID     : {}", booking.show.id);
    out.push_str("________________________________________________\n\n");

    let _ = writeln!(out, "TICKET DETAILS:");
    let _ = writeln!(out, "{:<8}{:<12}{:<10}", "Seat", "Type", "Price");
    out.push_str("--------------------------------\n");
    for seat in &booking.seats {
        let _ = writeln!(
            out,
            "{:<8}{:<12}Rs.{:<7.2}",
            seat.id,
            seat.seat_type.label(),
            seat.price
        );
    }
    out.push_str("--------------------------------\n");

    let charges = &booking.charges;
    let _ = writeln!(out, "Number of Tickets: {}", booking.seat_count());
    let _ = writeln!(out, "Subtotal         : Rs.{:.2}", charges.subtotal);
    let _ = writeln!(out, "Service Fee (2%) : Rs.{:.2}", charges.service_fee);
    let _ = writeln!(out, "GST (18%)        : Rs.{:.2}", charges.tax);
    out.push_str("--------------------------------\n");
    let _ = writeln!(out, "TOTAL AMOUNT     : Rs.{:.2}", charges.total);
    out.push_str("================================\n\n");

    out.push_str("IMPORTANT INFORMATION:\n");
    out.push_str("• Please arrive 15 minutes before show time\n");
    out.push_str("• Carry a valid ID proof\n");
    out.push_str("• Outside food & beverages not allowed\n");
    out.push_str("• No refunds or exchanges\n");
    out.push_str("• Keep this receipt for entry\n\n");

    out.push_str("************************************************\n");
    let _ = writeln!(out, "*{:^46}*", format!("Thank you for choosing {}!", theater_name));
    let _ = writeln!(out, "*{:^46}*", "Have a great movie experience!");
    out.push_str("************************************************\n");
    out
}

pub fn render_stats(stats: &TheaterStats, theater_name: &str) -> String {
    let mut out = String::from("\n=== THEATER STATISTICS ===\n");
    let _ = writeln!(out, "Theater: {}", theater_name);
    let _ = writeln!(out, "Total Seats: {}", stats.total_seats);
    let _ = writeln!(out, "Booked Seats: {}", stats.booked_seats);
    let _ = writeln!(out, "Available Seats: {}", stats.available_seats);
    let _ = writeln!(out, "Occupancy Rate: {:.1}%", stats.occupancy_rate);
    let _ = writeln!(out, "Total Revenue: Rs.{:.2}", stats.total_revenue);
    let _ = writeln!(out, "Total Bookings: {}", stats.total_bookings);
    out.push_str("=========================\n");
    out
}
