//! Dispatch-endpoint adapter used by the client-side form controller.

pub mod http_gateway;

pub use http_gateway::HttpSubmissionGateway;
