//! Audit logging for Agora Books
//!
//! Every create, update and delete performed through the services is recorded
//! in an append-only JSONL log with before/after snapshots, so changes to the
//! figures behind a partner's balance can be traced afterwards.
//!
//! - `AuditEntry`: one operation on one record, with optional snapshots.
//! - `AuditLogger`: appends entries to `audit.log` and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
