//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls and the table engine into use-case APIs.
//! - Keep UI layers decoupled from storage details.

pub mod employee_service;
