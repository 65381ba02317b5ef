//! Doctor Module
//!
//! Doctors are registered by an administrator and never change afterwards.

pub mod db;
pub mod handlers;

pub use handlers::{doctors_by_admin, register_doctor};
