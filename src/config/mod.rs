//! Configuration module for Agora Books
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence (partner profiles, display preferences)

pub mod paths;
pub mod settings;

pub use paths::AgoraPaths;
pub use settings::{PartnerProfile, PartnerProfiles, Settings};
