//! Agora Books - bookkeeping core for a two-partner media company
//!
//! This library tracks personal and company projects, fixed and personal
//! expenses and expense reports (boletins), and computes each partner's
//! balance (saldo) with the company: positive when the company owes the
//! partner, negative when the partner owes the company.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, partners, projects, expenses, boletins)
//! - `storage`: JSON file storage layer and the balance aggregate queries
//! - `services`: Balance calculator, record management, verification
//! - `audit`: Audit logging system
//! - `reports`: Partner balance and balance history reports
//! - `export`: CSV, JSON and YAML export
//! - `display`: Table formatting for the CLI
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use agora::config::{paths::AgoraPaths, settings::Settings};
//! use agora::models::Partner;
//! use agora::services::{BalanceQuery, BalanceService};
//! use agora::storage::Storage;
//!
//! let paths = AgoraPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//!
//! let service = BalanceService::new(&storage, settings.initial_investments());
//! let breakdown = service.compute_balance(Partner::A, &BalanceQuery::all_time())?;
//! println!("Saldo: {}", breakdown.balance);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{AgoraError, AgoraResult};
