use tracing::debug;
use xmlrpc::{Request, Value};

use super::{PymolSession, SessionError};
use crate::load::format::StructureFormat;

/// A PyMOL session reached over its XML-RPC server.
///
/// Construction only records the endpoint; reachability is checked on the
/// first call.
#[derive(Debug, Clone)]
pub struct RpcSession {
    endpoint: String,
}

impl RpcSession {
    /// Creates a handle for the RPC server at `host:port`.
    pub fn open(host: &str, port: u16) -> Self {
        RpcSession {
            endpoint: format!("http://{host}:{port}/RPC2"),
        }
    }

    /// The URL this session talks to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn call(&self, method: &'static str, request: Request<'_>) -> Result<Value, SessionError> {
        debug!("Calling remote method '{}' on {}", method, self.endpoint);
        request
            .call_url(&self.endpoint)
            .map_err(|source| SessionError::Rpc { method, source })
    }
}

impl PymolSession for RpcSession {
    fn reinitialize(&self) -> Result<(), SessionError> {
        self.call("reinitialize", Request::new("reinitialize"))?;
        Ok(())
    }

    fn run(&self, command: &str) -> Result<(), SessionError> {
        self.call("do", Request::new("do").arg(command))?;
        Ok(())
    }

    fn object_names(&self) -> Result<Vec<String>, SessionError> {
        let value = self.call("get_names", Request::new("get_names").arg("objects"))?;
        match value {
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(name) => Ok(name),
                    other => Err(SessionError::Response {
                        method: "get_names",
                        detail: format!("expected a string entry, got {other:?}"),
                    }),
                })
                .collect(),
            // An empty session may report nil instead of an empty list.
            Value::Nil => Ok(Vec::new()),
            other => Err(SessionError::Response {
                method: "get_names",
                detail: format!("expected an array, got {other:?}"),
            }),
        }
    }

    fn load_buffer(
        &self,
        contents: &str,
        format: StructureFormat,
        object: &str,
    ) -> Result<(), SessionError> {
        self.call(
            "set_state",
            Request::new("set_state")
                .arg(contents)
                .arg(format.as_str())
                .arg(object),
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_builds_endpoint_without_connecting() {
        let session = RpcSession::open("127.0.0.1", 9123);
        assert_eq!(session.endpoint(), "http://127.0.0.1:9123/RPC2");
    }

    #[test]
    fn open_accepts_remote_hosts() {
        let session = RpcSession::open("workstation.lab", 8000);
        assert_eq!(session.endpoint(), "http://workstation.lab:8000/RPC2");
    }
}
