//! Enumerations for certificate management.
//!
//! Contains the artifact kinds persisted by the store, the state machine
//! states of the certificate manager and the error taxonomy.

/// The four PEM artifacts making up a certificate bundle.
pub mod artifact_kind;

/// The two file pairs (CA and host) tracked by the store.
pub mod certificate_pair;

/// Verification states reported by the certificate manager:
/// - `Unverified` - Nothing checked yet
/// - `Valid` - Bundle present and not nearing expiry
/// - `Missing` - At least one required artifact is absent
/// - `Expiring` - Host or CA certificate is inside the rotation threshold
/// - `Corrupt` - Material present but unreadable or inconsistent
pub mod certificate_state;

/// Error taxonomy for store, generator, fetcher and TLS bootstrap.
pub mod certificate_error;
