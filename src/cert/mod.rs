pub mod fetch;
pub mod revocation;
pub mod serial;

pub use fetch::{fetch_ca, fetch_cert_by_serial, fetch_crl, CertCategory, CA_KEY, CRL_KEY};
pub use revocation::{revoke_cert, RevocationEntry};
pub use serial::{normalize_serial, SerialNumber, SerialNumberParseError};
