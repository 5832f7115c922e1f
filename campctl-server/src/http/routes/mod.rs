//! Route handlers organized by resource

pub mod health;
pub mod activities;
pub mod campers;
pub mod signups;
