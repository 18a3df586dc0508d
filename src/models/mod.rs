pub mod credits;
pub mod error;
pub mod exam;
pub mod session;
pub mod stats;
pub mod user;
