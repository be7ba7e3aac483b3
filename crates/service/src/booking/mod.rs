//! Booking ledger: repository plus service. Bookings reference plots by
//! number only and carry no domain type of their own beyond the entity.

pub mod repository;
pub mod service;

pub use service::BookingLedger;
