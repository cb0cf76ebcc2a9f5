//! Record builders: a complete record from the one or two fields a
//! scenario cares about. Enumerated fields are not checked here.

use crate::ids::unique_id;
use crate::models::{Category, Order, OrderStatus, Pet, PetStatus, Tag, User};
use chrono::SecondsFormat;

pub const PHOTO_URL: &str = "https://example.com/photo1";
pub const DEFAULT_PASSWORD: &str = "password123";
pub const DEFAULT_PHONE: &str = "+1234567890";

/// Pet in the `dogs` category carrying a single tag.
pub fn pet(id: i64, status: impl Into<PetStatus>, tag_name: impl Into<String>) -> Pet {
    Pet {
        id,
        name: format!("doggie_{id}"),
        status: status.into(),
        photo_urls: vec![PHOTO_URL.to_string()],
        category: Some(Category {
            id: 1,
            name: "dogs".to_string(),
        }),
        tags: vec![Tag {
            id: 1,
            name: tag_name.into(),
        }],
    }
}

/// Bare available pet that an order can refer to.
pub fn order_pet(id: i64) -> Pet {
    Pet {
        id,
        name: format!("order_pet_{id}"),
        status: PetStatus::Available,
        photo_urls: vec![PHOTO_URL.to_string()],
        category: None,
        tags: Vec::new(),
    }
}

/// Single-item placed order shipping now. Takes a fresh order id.
pub fn order(pet_id: i64) -> Order {
    Order {
        id: unique_id(),
        pet_id,
        quantity: 1,
        status: OrderStatus::Placed,
        complete: false,
        ship_date: chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

/// User whose other fields derive from the username. Takes a fresh user id.
pub fn user(username: &str) -> User {
    User {
        id: unique_id(),
        username: username.to_string(),
        first_name: format!("First_{username}"),
        last_name: format!("Last_{username}"),
        email: format!("{username}@example.com"),
        password: DEFAULT_PASSWORD.to_string(),
        phone: DEFAULT_PHONE.to_string(),
        user_status: 1,
    }
}
