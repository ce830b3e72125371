//! Bus schedule server.
//!
//! A web application that answers: "When is the last bus from this stand,
//! and where does it go?" Schedules are loaded per stand, then filtered,
//! sorted and formatted in Tamil or English.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod preferences;
pub mod query;
pub mod schedules;
pub mod web;
