//! # remol Core Library
//!
//! A small library for batch-loading molecular structure files (PDB and
//! mmCIF, optionally gzip-compressed) into an already-running PyMOL session
//! over its RPC interface.
//!
//! The library is split into two layers:
//!
//! - **[`session`]: The Remote Surface.** A narrow capability trait over the
//!   running PyMOL process (reinitialize, run a command, query object names,
//!   load a structure from a text buffer) plus the XML-RPC implementation of
//!   it. Keeping the surface this small makes the loader testable against a
//!   mock session without a real remote process.
//!
//! - **[`load`]: The Loader.** File discovery, format inference from
//!   filename suffixes, transparent gzip decompression, object-name
//!   sanitization and collision-free assignment, and the orchestration that
//!   hands each buffer to the session.

pub mod error;
pub mod load;
pub mod session;

pub use error::LoadError;
pub use load::{LoadOptions, LoadedStructure, load_structures};
pub use session::{PymolSession, RpcSession, SessionError, reset};
