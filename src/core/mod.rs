//! Core types shared by every layer of arrdb.
//!
//! - [`Category`] - which part of the rule database a document belongs to
//! - [`ArrdbError`] / [`ErrorContext`] - environment faults and their CLI rendering

mod category;
pub mod error;

pub use category::Category;
pub use error::{ArrdbError, ErrorContext, user_friendly_error};
