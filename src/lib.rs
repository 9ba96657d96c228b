//! Client library for the netcup CCP DNS webservice.
//!
//! The CCP API is a JSON-over-POST action protocol: every call sends an
//! `{"action": ..., "param": ...}` envelope to a single endpoint and decodes
//! a shared response envelope. This crate wraps that protocol in a typed
//! client with session handling and record-level CRUD operations.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use netcup_ccp_dns::{CcpClient, NewDnsRecord};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CcpClient::login("123456", "api-key", "api-password").await?;
//!
//!     let zone = client.get_dns_zone("example.com").await?;
//!     println!("zone {} serial {}", zone.name, zone.serial);
//!
//!     let record = client
//!         .create_dns_record(
//!             "example.com",
//!             &NewDnsRecord {
//!                 hostname: "www".to_string(),
//!                 record_type: "A".to_string(),
//!                 priority: None,
//!                 destination: "192.0.2.1".to_string(),
//!             },
//!         )
//!         .await?;
//!     println!("created record {:?}", record.id);
//!
//!     client.delete_dns_record("example.com", &record).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! Every operation returns [`Result<T>`](Result) with [`CcpError`] covering
//! transport failures, non-200 responses, decode failures and the
//! record-level reconciliation errors ([`CcpError::RecordNotFound`],
//! [`CcpError::ReconciliationFailed`], [`CcpError::DeleteFailed`]). Errors
//! are serializable for structured reporting.
//!
//! # TLS Backends
//!
//! The `native-tls` feature (default) uses the platform TLS stack; enable
//! `rustls` instead for a pure-Rust build:
//!
//! ```toml
//! netcup-ccp-dns = { version = "0.1", default-features = false, features = ["rustls"] }
//! ```

mod client;
mod error;
mod http;
mod types;

pub use client::{CcpClient, ClientConfig, DEFAULT_ENDPOINT};
pub use error::{CcpError, Result};
pub use types::{ApiResponse, DnsRecord, DnsZone, NewDnsRecord};
