//! Provides access to a running PyMOL process through a narrow capability set.
//!
//! The loader never talks to PyMOL directly; it goes through the
//! [`PymolSession`] trait, which exposes exactly the four remote operations
//! the loader needs. [`RpcSession`] is the production implementation over
//! PyMOL's XML-RPC server; tests substitute an in-memory mock.

mod rpc;

pub use rpc::RpcSession;

use thiserror::Error;
use tracing::info;

use crate::load::format::StructureFormat;

/// Errors from the remote session collaborator.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("RPC call '{method}' failed: {source}")]
    Rpc {
        method: &'static str,
        #[source]
        source: xmlrpc::Error,
    },

    #[error("unexpected response from '{method}': {detail}")]
    Response {
        method: &'static str,
        detail: String,
    },
}

/// The capability surface of a running PyMOL session.
///
/// Deliberately narrow: reinitialize, run a command string, list existing
/// object names, and materialize a structure from an in-memory text buffer.
pub trait PymolSession {
    /// Wipes the remote visualization state.
    fn reinitialize(&self) -> Result<(), SessionError>;

    /// Executes a single PyMOL command string.
    fn run(&self, command: &str) -> Result<(), SessionError>;

    /// Returns the names of all objects currently loaded in the session.
    fn object_names(&self) -> Result<Vec<String>, SessionError>;

    /// Loads a structure into the session from a text buffer.
    fn load_buffer(
        &self,
        contents: &str,
        format: StructureFormat,
        object: &str,
    ) -> Result<(), SessionError>;
}

/// Reinitializes the session and replays the user's run-control script.
///
/// The `@~/.pymolrc` reference is expanded by PyMOL on the remote side, so
/// a missing script is harmless there.
pub fn reset(session: &impl PymolSession) -> Result<(), SessionError> {
    session.reinitialize()?;
    session.run("@~/.pymolrc")?;
    info!("Reinitialized the session.");
    Ok(())
}
