//! # Remote Procedure Calls
//!
//! Every route ends up here: a procedure name plus a JSON argument bundle goes
//! through `api.call`, and a [`ResultEnvelope`] comes back.

// region: --- Modules
pub mod envelope;
pub mod invoker;
pub mod operation;
// endregion: --- Modules

// region: --- Re-exports
pub use envelope::ResultEnvelope;
pub use invoker::Invoker;
pub use operation::Operation;
// endregion: --- Re-exports
