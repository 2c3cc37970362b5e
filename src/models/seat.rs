use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatType {
    Regular,
    Premium,
    Vip,
}

impl SeatType {
    pub fn label(&self) -> &'static str {
        match self {
            SeatType::Regular => "Regular",
            SeatType::Premium => "Premium",
            SeatType::Vip => "VIP",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatStatus {
    Available,
    Reserved,
    Booked,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seat {
    pub row: usize,
    pub col: usize,
    pub seat_type: SeatType,
    pub status: SeatStatus,
    pub price: f64,
}

impl Seat {
    pub fn new(row: usize, col: usize, seat_type: SeatType, price: f64) -> Self {
        Self {
            row,
            col,
            seat_type,
            status: SeatStatus::Available,
            price,
        }
    }

    /// Seat identifier: row letter plus 1-based column, e.g. row 0 / col 0 -> "A1".
    pub fn id(&self) -> String {
        format!("{}{}", (b'A' + self.row as u8) as char, self.col + 1)
    }

    pub fn is_available(&self) -> bool {
        self.status == SeatStatus::Available
    }

    /// Glyph used in the seating grid: O = Available, R = Reserved, X = Booked.
    pub fn display_char(&self) -> char {
        match self.status {
            SeatStatus::Available => 'O',
            SeatStatus::Reserved => 'R',
            SeatStatus::Booked => 'X',
        }
    }
}
