//! API functions called from the frontend's server functions.

pub mod auth;
pub mod catalogue;
