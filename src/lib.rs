//! Hostboard - a property listing onboarding wizard
//!
//! This library provides the core functionality for the hostboard CLI, including:
//! - Schema definitions for the property draft, actions and configuration
//! - Domain logic for pages, forms, steps and input validation
//! - The wizard state machine and its async runtime
//! - A simulated backend standing in for the listing service
//! - A ratatui front-end

pub mod backend;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fs;
pub mod schemas;
pub mod tui;
pub mod wizard;

// Re-export commonly used types
pub use errors::{HostboardError, Result};
pub use schemas::{Config, PropertyDraft};
pub use wizard::{Wizard, WizardEvent, WizardRuntime};
