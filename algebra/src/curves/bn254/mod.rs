//! [BN254](https://eprint.iacr.org/2010/354.pdf) (also known as alt_bn128), the pairing
//! friendly curve precompiled on Ethereum.
//! Its base field size is 254 bits, and BN parameter x = 4965661367192848881.
//!
//! Field arithmetic and the twist constants are taken from `ark-bn254`. The conversions at the
//! bottom of this module let arkworks points be prepared here, and prepared points be consumed
//! by the arkworks Miller loop.

use crate::curves::models::bn::{
    BnParameters, G2Affine as BnG2Affine, G2HomProjective as BnG2HomProjective,
    G2Prepared as BnG2Prepared, TwistType,
};
use ark_bn254::{Fq, Fq2, Fq2Config};
use ark_ec::{bn::BnConfig, short_weierstrass::SWCurveConfig};


pub struct Bn254Parameters;

impl BnParameters for Bn254Parameters {
    /// NAF of 6x + 2 = 29793968203157093288, least significant digit first
    const ATE_LOOP_COUNT: &'static [i8] = &[
        0, 0, 0, 1, 0, 1, 0, -1, 0, 0, 1, -1, 0, 0, 1, 0, 0, 1, 1, 0, -1, 0, 0, 1, 0, -1, 0, 0, 0,
        0, 1, 1, 1, 0, 0, -1, 0, 0, 1, 0, 0, 0, 0, 0, -1, 0, 0, 1, 1, 0, 0, -1, 0, 0, 0, 1, 1, 0,
        -1, 0, 0, 1, 0, 1, 1,
    ];
    /// `x` is positive.
    const X_IS_NEGATIVE: bool = false;
    const TWIST_TYPE: TwistType = TwistType::D;
    /// b' = 3/(9 + u)
    const TWIST_COEFF_B: Fq2 = <ark_bn254::g2::Config as SWCurveConfig>::COEFF_B;
    /// (9 + u)^((p - 1)/3)
    const TWIST_MUL_BY_Q_X: Fq2 = <ark_bn254::Config as BnConfig>::TWIST_MUL_BY_Q_X;
    /// (9 + u)^((p - 1)/2)
    const TWIST_MUL_BY_Q_Y: Fq2 = <ark_bn254::Config as BnConfig>::TWIST_MUL_BY_Q_Y;
    type Fp = Fq;
    type Fp2Config = Fq2Config;
}

pub type G2Affine = BnG2Affine<Bn254Parameters>;
pub type G2HomProjective = BnG2HomProjective<Bn254Parameters>;
pub type G2Prepared = BnG2Prepared<Bn254Parameters>;

impl From<ark_bn254::G2Affine> for G2Affine {
    fn from(q: ark_bn254::G2Affine) -> Self {
        if q.infinity {
            Self::zero()
        } else {
            Self::new(q.x, q.y)
        }
    }
}

impl From<G2Prepared> for ark_ec::bn::G2Prepared<ark_bn254::Config> {
    fn from(prepared: G2Prepared) -> Self {
        let infinity = prepared.is_zero();
        Self {
            ell_coeffs: prepared.ell_coeffs,
            infinity,
        }
    }
}
