//! Record source module
//!
//! Where a page of records comes from.
//!
//! # Features
//!
//! - **Local**: `RecordSource` slices an ordered in-memory collection
//! - **Remote**: `Transport` sends one request per page and returns the raw envelope
//! - **HTTP**: `HttpTransport` implements `Transport` over reqwest, with an
//!   optional governor token bucket (`Throttle`)
//! - **Envelope**: `Envelope` normalises local slices and remote responses

mod envelope;
mod http;
mod local;
mod rate_limit;
mod transport;

pub use envelope::Envelope;
pub use http::{HttpTransport, HttpTransportConfig};
pub use local::{load_records, RecordSource};
pub use rate_limit::{RequestRate, Throttle};
pub use transport::{Transport, TransportRequest};
