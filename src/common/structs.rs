/// Error type for startup plumbing.
pub mod custom_error;
