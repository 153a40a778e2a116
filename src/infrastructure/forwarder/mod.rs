//! Mirror forwarder - best-effort replication of API calls to an external
//! endpoint

pub mod service;

pub use reqwest::Method;
pub use service::{Forwarder, HttpForwarder, MirrorOutcome, NoopForwarder};
