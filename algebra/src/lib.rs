//! Pairing precomputation for zero-knowledge proof acceleration.
//!
//! The crate currently provides the Miller loop line coefficients of the optimal Ate pairing
//! over BN curves ("prepared" G2 points), generic over a per-curve parameter trait and
//! instantiated for BN254 behind the `bn254` feature.

#![deny(unused_import_braces, trivial_casts, bare_trait_objects)]
#![deny(non_shorthand_field_patterns, unused_attributes)]
#![deny(unused_comparisons, unused_must_use)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate derivative;

pub mod curves;
pub use self::curves::models::bn::{
    check_parameters, ell_coeffs_len, BnParameters, EllCoeff, G2Affine, G2HomProjective,
    G2Prepared, TwistType,
};

mod error;
pub use self::error::*;
