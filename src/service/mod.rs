//! Service layer module.
//!
//! Contains business logic for JanID allocation, signup, seeding, and
//! authentication.

pub mod allocator;
pub mod seed;
pub mod signup;
pub mod token;

pub use allocator::JanIdAllocator;
pub use seed::SeedService;
pub use signup::SignupService;
pub use token::{SessionInfo, TokenService, TokenType};
