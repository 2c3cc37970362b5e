use thiserror::Error;

/// Everything that can go wrong while committing a booking. All variants
/// are reported to the user and leave the theater untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("invalid show selection, available shows: 1-{show_count}")]
    InvalidShow { show_count: usize },

    #[error("invalid seat: {0}")]
    UnknownSeat(String),

    #[error("seat {0} is not available")]
    SeatUnavailable(String),

    #[error("seat {0} appears more than once in the request")]
    DuplicateSeat(String),

    #[error("no seats requested")]
    NoSeats,
}
