//! Domain models for the JanSetu identity service.
//!
//! This module contains the core domain types representing account
//! categories, counters, JanIDs, user profiles, and API contracts.

pub mod category;
pub mod counter;
pub mod dto;
pub mod jan_id;
pub mod user;

pub use category::UserCategory;
pub use counter::CounterState;
pub use dto::{
    ApiResponse, SeedResponse, SeededAccount, SignupRequest, SignupResponse, UserResponse,
};
pub use jan_id::{JanId, SUPER_ADMIN_YEAR};
pub use user::UserProfile;
