//! API Routes

pub mod health;
pub mod auth;
pub mod builder;
pub mod booking;
pub mod dashboard;
