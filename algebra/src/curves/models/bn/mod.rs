//! Model for BN curves and the line coefficients of their optimal Ate pairing.
//!
//! Supports the following standard efficiency measures for pairings:
//!
//! - G2 is represented by a sextic twist over a quadratic extension of the base field,
//! - the Miller loop runs over a signed-digit (NAF) representation of 6x+2, and its tail is
//!   replaced by two additions of Frobenius images of Q,
//! - we do pre-computations of the line coefficients of the Miller loop, see `G2Prepared`.

use crate::{ParametersError, ParametersResult};
use ark_ff::{
    fields::{Fp2, Fp2Config},
    PrimeField,
};
use log::debug;

pub mod g2;
pub use self::g2::{EllCoeff, G2Affine, G2HomProjective, G2Prepared};


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TwistType {
    M, // E': y^2 = x^3 + b*xi, the line is sparse in the 0th, 1st and 4th slot
    D, // E': y^2 = x^3 + b/xi, the line is sparse in the 0th, 3rd and 4th slot
}

/// Parameters of a BN curve E: y^2 = x^3 + b mod p as needed by the optimal Ate pairing.
///
/// G2 is represented by a subgroup of the sextic twist E' over F2 = Fp[u]/(u^2 - beta).
/// The Miller loop iterates over the signed digits of 6x+2, where x is the BN parameter
/// defining p(x) = 36x^4 + 36x^3 + 24x^2 + 6x + 1, and is completed by two additions with
///
/// ```text
/// Q1 = pi(Q),  Q2 = -pi^2(Q),
/// ```
///
/// where pi is the p-power Frobenius endomorphism, transported to the twist by the constants
/// `TWIST_MUL_BY_Q_X` and `TWIST_MUL_BY_Q_Y`.
pub trait BnParameters: 'static {
    /// Signed digits in {-1, 0, 1} of |6x + 2|, least significant digit first.
    /// The last entry is the leading digit and must be 1.
    const ATE_LOOP_COUNT: &'static [i8];
    /// Sign of the BN parameter x.
    const X_IS_NEGATIVE: bool;
    /// Type of the sextic twist.
    const TWIST_TYPE: TwistType;
    /// The coefficient b' of the twist E': y^2 = x^3 + b'.
    const TWIST_COEFF_B: Fp2<Self::Fp2Config>;
    /// Scales the Frobenius image of the x-coordinate of a twist point.
    const TWIST_MUL_BY_Q_X: Fp2<Self::Fp2Config>;
    /// Scales the Frobenius image of the y-coordinate of a twist point.
    const TWIST_MUL_BY_Q_Y: Fp2<Self::Fp2Config>;
    // Base field
    type Fp: PrimeField;
    // quadratic extension over which the twist is defined
    type Fp2Config: Fp2Config<Fp = Self::Fp>;
}

/// Checks that the Ate loop count of `P` can drive the Miller loop: non-empty, every digit
/// in {-1, 0, 1}, and a leading digit of 1.
///
/// Meant to be run once when a curve definition is introduced; `G2Prepared::from_affine`
/// trusts its parameters.
pub fn check_parameters<P: BnParameters>() -> ParametersResult<()> {
    let digits = P::ATE_LOOP_COUNT;

    let leading = match digits.last() {
        Some(&digit) => digit,
        None => {
            debug!("rejecting BN parameters: empty Ate loop count");
            return Err(ParametersError::EmptyLoopCount);
        },
    };

    if let Some((position, &digit)) = digits
        .iter()
        .enumerate()
        .find(|(_, digit)| !(-1..=1).contains(*digit))
    {
        debug!("rejecting BN parameters: digit {} at position {}", digit, position);
        return Err(ParametersError::InvalidDigit { position, digit });
    }

    if leading != 1 {
        debug!("rejecting BN parameters: leading digit {}", leading);
        return Err(ParametersError::LeadingDigitNotOne(leading));
    }

    Ok(())
}

/// The exact number of line coefficients in the preparation of a non-zero point:
/// one doubling per non-leading digit, one addition per non-zero non-leading digit, and the
/// two closing additions with the Frobenius images.
pub fn ell_coeffs_len<P: BnParameters>() -> usize {
    match P::ATE_LOOP_COUNT.split_last() {
        Some((_, rest)) => rest.len() + rest.iter().filter(|&&digit| digit != 0).count() + 2,
        None => 2,
    }
}
