//! Curve family models, generic over the parameters of a concrete curve.

pub mod bn;
