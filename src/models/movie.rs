use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub genre: String,
    pub duration_minutes: u32,
    pub rating: String,
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        genre: impl Into<String>,
        duration_minutes: u32,
        rating: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            genre: genre.into(),
            duration_minutes,
            rating: rating.into(),
        }
    }
}
