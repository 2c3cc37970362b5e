//! Interactive menu loop driving the theater.
//!
//! All stateful work happens in [`Theater`]; this module only reads user
//! choices, calls into it and prints the rendered results. Every input is
//! re-prompted on bad data; EOF on stdin ends the program cleanly.

pub mod display;

use std::io::{self, BufRead, Write};

use tracing::warn;
use validator::Validate;

use crate::models::Customer;
use crate::theater::Theater;

const MAX_SEATS_PER_BOOKING: u32 = 10;

pub struct BookingApp {
    theater: Theater,
}

impl BookingApp {
    pub fn new(theater: Theater) -> Self {
        Self { theater }
    }

    pub fn run(&mut self) {
        let stdin = io::stdin();
        let mut input = stdin.lock();

        println!("Welcome to CINE RESERVE!");

        loop {
            print_menu();
            let Some(choice) = read_number_in_range(&mut input, 1, 7) else {
                break;
            };

            match choice {
                1 => println!("{}", display::render_shows(self.theater.shows())),
                2 => println!("{}", display::render_seating_grid(&self.theater)),
                3 => {
                    if self.booking_flow(&mut input).is_none() {
                        break;
                    }
                }
                4 => self.list_bookings(),
                5 => {
                    if self.search_flow(&mut input).is_none() {
                        break;
                    }
                }
                6 => println!(
                    "{}",
                    display::render_stats(&self.theater.stats(), self.theater.name())
                ),
                _ => {
                    println!("Thank you for using Movie Booking System!");
                    break;
                }
            }
        }
    }

    /// Full interactive booking: pick a show, pick seats, enter customer
    /// details, commit. Returns None only on EOF.
    fn booking_flow<R: BufRead>(&mut self, input: &mut R) -> Option<()> {
        if self.theater.show_count() == 0 {
            println!("No shows scheduled.");
            return Some(());
        }

        println!("{}", display::render_shows(self.theater.shows()));
        let show_count = self.theater.show_count() as u32;
        print!("\nSelect show number (1-{show_count}): ");
        flush_stdout();
        let show_choice = read_number_in_range(input, 1, show_count)?;

        println!("{}", display::render_seating_grid(&self.theater));

        print!("\nHow many seats do you want to book? ");
        flush_stdout();
        let num_seats = read_number_in_range(input, 1, MAX_SEATS_PER_BOOKING)?;

        println!("Enter seat IDs (e.g., A1, B5):");
        let mut seat_ids = Vec::with_capacity(num_seats as usize);
        while seat_ids.len() < num_seats as usize {
            let line = prompt_line(input, "> ")?;
            for token in line.split_whitespace() {
                if seat_ids.len() < num_seats as usize {
                    seat_ids.push(token.to_uppercase());
                }
            }
        }

        let customer = self.customer_details(input)?;
        let theater_name = self.theater.name().to_string();

        match self
            .theater
            .book_seats(show_choice as usize - 1, &seat_ids, customer)
        {
            Ok(booking) => {
                println!("\n🎫 PRINTING RECEIPT... 🎫");
                println!("{}", display::render_receipt(booking, &theater_name));

                let answer = prompt_line(input, "Would you like to save this receipt? (y/n): ")?;
                if answer.eq_ignore_ascii_case("y") {
                    println!("Receipt saved! (In a real system, this would save to file)");
                }
            }
            Err(err) => {
                warn!(%err, "booking rejected");
                println!("❌ Booking failed: {err}");
            }
        }
        Some(())
    }

    fn list_bookings(&self) {
        println!("\n=== ALL BOOKINGS ===");
        if self.theater.bookings().is_empty() {
            println!("No bookings found.");
            return;
        }
        for (i, booking) in self.theater.bookings().iter().enumerate() {
            print!("\n{}. {}", i + 1, display::render_booking_details(booking));
        }
    }

    fn search_flow<R: BufRead>(&self, input: &mut R) -> Option<()> {
        print!("Enter booking ID: ");
        flush_stdout();
        let booking_id = read_number_in_range(input, 1000, 9999)?;

        match self.theater.booking_by_id(booking_id) {
            Some(booking) => {
                println!("\n📋 Booking Found!");
                println!("{}", display::render_booking_details(booking));

                let answer =
                    prompt_line(input, "\nWould you like to print the receipt? (y/n): ")?;
                if answer.eq_ignore_ascii_case("y") {
                    println!("\n🎫 PRINTING RECEIPT... 🎫");
                    println!(
                        "{}",
                        display::render_receipt(booking, self.theater.name())
                    );
                }
            }
            None => println!("❌ Booking not found!"),
        }
        Some(())
    }

    fn customer_details<R: BufRead>(&self, input: &mut R) -> Option<Customer> {
        println!("\nEnter customer details:");
        loop {
            let name = prompt_line(input, "Name: ")?;
            let phone = prompt_line(input, "Phone: ")?;
            let email = prompt_line(input, "Email: ")?;

            let customer = Customer::new(name, phone, email, Customer::random_id());
            match customer.validate() {
                Ok(()) => return Some(customer),
                Err(err) => {
                    let reason = err
                        .field_errors()
                        .values()
                        .flat_map(|errors| errors.iter())
                        .filter_map(|e| e.message.as_deref())
                        .next()
                        .unwrap_or("invalid customer details");
                    println!("❌ {reason}, please try again.");
                }
            }
        }
    }
}

fn print_menu() {
    println!("\n===== MOVIE BOOKING SYSTEM =====");
    println!("1. View Shows");
    println!("2. View Seating Arrangement");
    println!("3. Book Tickets");
    println!("4. View All Bookings");
    println!("5. Search Booking & Print Receipt");
    println!("6. Theater Statistics");
    println!("7. Exit");
    println!("=================================");
    print!("Enter your choice: ");
    flush_stdout();
}

fn flush_stdout() {
    let _ = io::stdout().flush();
}

/// Reads one trimmed line, printing `prompt` first. None on EOF or a
/// broken stream.
fn prompt_line<R: BufRead>(input: &mut R, prompt: &str) -> Option<String> {
    print!("{prompt}");
    flush_stdout();
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

/// Keeps prompting until the user enters a number within [min, max].
/// Non-numeric and out-of-range input is rejected with a message, never a
/// crash. None on EOF.
fn read_number_in_range<R: BufRead>(input: &mut R, min: u32, max: u32) -> Option<u32> {
    loop {
        let line = prompt_line(input, "")?;
        match line.parse::<u32>() {
            Ok(n) if (min..=max).contains(&n) => return Some(n),
            Ok(_) => {
                print!("Please enter a number between {min} and {max}: ");
                flush_stdout();
            }
            Err(_) => {
                print!("Invalid input! Please enter a number: ");
                flush_stdout();
            }
        }
    }
}
