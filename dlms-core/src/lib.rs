//! Core types for the DLMS/COSEM enumeration catalog
//!
//! This crate provides the error type shared by every crate in the
//! workspace.

pub mod error;

pub use error::{DlmsError, DlmsResult, ErrorKind};
