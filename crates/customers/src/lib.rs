//! Customers domain module.
//!
//! Customer records as the backend stores them, plus local validation run
//! before anything is sent.

pub mod customer;

pub use customer::{Address, Customer};
