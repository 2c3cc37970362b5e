use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::Movie;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Show {
    pub id: u32,
    pub movie: Movie,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl Show {
    pub fn new(id: u32, movie: Movie, date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            id,
            movie,
            date,
            time,
        }
    }
}
