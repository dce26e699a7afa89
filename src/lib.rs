//! Nicky Saturn API Library
//!
//! This library provides the core functionality for the Nicky Saturn
//! mailing-list signup API, including domain logic, repositories, and
//! infrastructure components.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod state;
