//! Service layer providing the plot catalog and booking ledger on top of models.
//! - Separates business logic from data access (repository traits).
//! - Reuses validation and entity definitions in `models` crate.
//! - Owns the asset store used for plot images.

pub mod errors;
pub mod runtime;
pub mod assets;
pub mod plot;
pub mod booking;
#[cfg(test)]
pub mod test_support;
