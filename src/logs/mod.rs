mod dto;
pub mod queries;
mod store;

pub use dto::{FoodLogEntry, MealPeriod};
pub use store::{InMemoryLogStore, LogStore};
