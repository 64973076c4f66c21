pub mod models;

#[cfg(feature = "bn254")]
pub mod bn254;
