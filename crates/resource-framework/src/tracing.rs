//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the `tracing-subscriber` fmt layer for the whole
//! process. Log levels come from `RUST_LOG`; module paths are hidden
//! (`with_target(false)`) since every engine event already carries `entity_type`.
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle: Created / Updated / Deleted
//! RUST_LOG=debug cargo run    # plus payloads, lookups and list filters
//! ```
//!
//! With `RUST_LOG=debug`, deleting an owner that still has agreements reads like:
//!
//! ```text
//! DEBUG Delete entity_type="Owner" id=1
//! DEBUG Referencing entity_type="Agreement" parent=1 include_inactive=true count=1
//!  WARN Delete failed entity_type="Owner" id=1 error=Owner 1 is referenced by agreements and can not be deleted.
//! ```

/// Initialize the global subscriber. Call once, at process start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
