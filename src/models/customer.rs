use rand::Rng;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Customer {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 4, message = "phone number is too short"))]
    pub phone: String,
    #[validate(email(message = "email address is not valid"))]
    pub email: String,
    pub id: u32,
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        id: u32,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            id,
        }
    }

    /// Customer ids are not deduplicated across bookings; each interaction
    /// gets a fresh four-digit id.
    pub fn random_id() -> u32 {
        rand::thread_rng().gen_range(1000..=9999)
    }
}
