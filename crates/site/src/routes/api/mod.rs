//! JSON API handlers.
//!
//! Every response uses the uniform envelope: successes carry
//! `{"success": true, ...}` with the entity under its own key, failures
//! carry `{"success": false, "message": "..."}` (rendered by `AppError`).

pub mod admin;
pub mod contact;
pub mod inquiries;
pub mod products;
