use crate::curves::models::bn::{BnParameters, TwistType};
use ark_ff::{
    fields::{Field, Fp2},
    One, Zero,
};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use log::{debug, trace};
use std::ops::Neg;

/// The coefficients (c0, c1, c2) of a single Miller loop line, in the layout selected by
/// `BnParameters::TWIST_TYPE`.
pub type EllCoeff<P> = (
    Fp2<<P as BnParameters>::Fp2Config>,
    Fp2<<P as BnParameters>::Fp2Config>,
    Fp2<<P as BnParameters>::Fp2Config>,
);

/// A point of the sextic twist E'(F2) in affine coordinates.
#[derive(Derivative)]
#[derivative(
    Copy(bound = "P: BnParameters"),
    Clone(bound = "P: BnParameters"),
    PartialEq(bound = "P: BnParameters"),
    Eq(bound = "P: BnParameters"),
    Debug(bound = "P: BnParameters"),
    Hash(bound = "P: BnParameters")
)]
pub struct G2Affine<P: BnParameters> {
    pub x: Fp2<P::Fp2Config>,
    pub y: Fp2<P::Fp2Config>,
    pub infinity: bool,
}

impl<P: BnParameters> G2Affine<P> {
    pub fn new(x: Fp2<P::Fp2Config>, y: Fp2<P::Fp2Config>) -> Self {
        Self {
            x,
            y,
            infinity: false,
        }
    }

    /// The point at infinity. Its coordinates are zero and carry no meaning.
    pub fn zero() -> Self {
        Self {
            x: Fp2::zero(),
            y: Fp2::zero(),
            infinity: true,
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.infinity
    }
}

impl<P: BnParameters> Neg for G2Affine<P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        if self.is_zero() {
            self
        } else {
            Self::new(self.x, -self.y)
        }
    }
}

/// The Miller loop accumulator R in homogeneous projective coordinates (X : Y : Z),
/// representing the affine point (X/Z, Y/Z) of E'.
#[derive(Derivative)]
#[derivative(
    Copy(bound = "P: BnParameters"),
    Clone(bound = "P: BnParameters"),
    PartialEq(bound = "P: BnParameters"),
    Eq(bound = "P: BnParameters"),
    Debug(bound = "P: BnParameters")
)]
pub struct G2HomProjective<P: BnParameters> {
    pub x: Fp2<P::Fp2Config>,
    pub y: Fp2<P::Fp2Config>,
    pub z: Fp2<P::Fp2Config>,
}

impl<P: BnParameters> G2HomProjective<P> {
    /// Lifts a non-zero affine point to (x : y : 1).
    pub fn from_affine(q: &G2Affine<P>) -> Self {
        debug_assert!(!q.is_zero());
        Self {
            x: q.x,
            y: q.y,
            z: Fp2::one(),
        }
    }

    /// Sets R = 2R and returns the coefficients of the tangent line at (the old) R.
    ///
    /// Uses the formulas of [CLN 2010](https://eprint.iacr.org/2009/615.pdf), as adapted to
    /// both twist types in [ABLR 2013](https://eprint.iacr.org/2013/722.pdf).
    /// `two_inv` is the inverse of 2 in the base field.
    pub fn double_in_place(&mut self, two_inv: &P::Fp) -> EllCoeff<P> {
        // A = X*Y/2
        let mut a = self.x * &self.y;
        a.mul_assign_by_fp(two_inv);
        let b = self.y.square();
        let c = self.z.square();
        // E = 3*b'*Z^2
        let e = P::TWIST_COEFF_B * &(c.double() + &c);
        let f = e.double() + &e;
        // G = (B + F)/2
        let mut g = b + &f;
        g.mul_assign_by_fp(two_inv);
        // H = 2*Y*Z
        let h = (self.y + &self.z).square() - &(b + &c);
        let i = e - &b;
        let j = self.x.square();
        let e_square = e.square();

        self.x = a * &(b - &f);
        self.y = g.square() - &(e_square.double() + &e_square);
        self.z = b * &h;

        match P::TWIST_TYPE {
            TwistType::M => (i, j.double() + &j, -h),
            TwistType::D => (-h, j.double() + &j, i),
        }
    }

    /// Sets R = R + Q and returns the coefficients of the line through R and Q.
    pub fn add_in_place(&mut self, q: &G2Affine<P>) -> EllCoeff<P> {
        let theta = self.y - &(q.y * &self.z);
        let lambda = self.x - &(q.x * &self.z);
        let c = theta.square();
        let d = lambda.square();
        let e = lambda * &d;
        let f = self.z * &c;
        let g = self.x * &d;
        let h = e + &f - &g.double();

        self.x = lambda * &h;
        self.y = theta * &(g - &h) - &(e * &self.y);
        self.z *= &e;

        let j = theta * &q.x - &(lambda * &q.y);

        match P::TWIST_TYPE {
            TwistType::M => (j, -theta, lambda),
            TwistType::D => (lambda, -theta, j),
        }
    }

    /// Sets R = -R.
    #[inline]
    pub fn negate_in_place(&mut self) {
        self.y = -self.y;
    }
}

/// A G2 point prepared for the Miller loop: the line coefficients of every doubling and
/// addition step, in the order the Miller loop consumes them.
///
/// The prepared point at infinity has no coefficients, as pairing with it contributes
/// nothing to the Miller loop.
///
/// The coefficients are read through `ell_coeffs()` and cannot be changed once prepared:
///
/// ```compile_fail
/// use zkaccel_algebra::curves::bn254::{G2Affine, G2Prepared};
///
/// let mut prepared = G2Prepared::from_affine(G2Affine::zero());
/// prepared.ell_coeffs.clear();
/// ```
#[derive(Derivative, CanonicalSerialize, CanonicalDeserialize)]
#[derivative(
    Clone(bound = "P: BnParameters"),
    Debug(bound = "P: BnParameters"),
    PartialEq(bound = "P: BnParameters"),
    Eq(bound = "P: BnParameters"),
    Default(bound = "P: BnParameters")
)]
pub struct G2Prepared<P: BnParameters> {
    pub(crate) ell_coeffs: Vec<EllCoeff<P>>,
}

impl<P: BnParameters> G2Prepared<P> {
    /// Precomputes the line coefficients of the optimal Ate Miller loop for `q`.
    pub fn from_affine(q: G2Affine<P>) -> Self {
        // The digits are expected to be spread uniformly over {-1, 0, 1}: one doubling
        // per digit plus an addition for two thirds of them.
        let size = P::ATE_LOOP_COUNT.len();
        Self::from_affine_with_capacity(q, size + size * 2 / 3)
    }

    pub(crate) fn from_affine_with_capacity(q: G2Affine<P>, capacity: usize) -> Self {
        if q.is_zero() {
            return Self::default();
        }

        let two_inv = P::Fp::from(2u64)
            .inverse()
            .expect("the base field of a BN curve has odd characteristic");

        let mut r = G2HomProjective::<P>::from_affine(&q);
        let neg_q = -q;
        let mut ell_coeffs = Vec::with_capacity(capacity);

        // The leading digit is accounted for by starting from R = Q.
        for digit in P::ATE_LOOP_COUNT.iter().rev().skip(1) {
            ell_coeffs.push(r.double_in_place(&two_inv));

            match *digit {
                1 => ell_coeffs.push(r.add_in_place(&q)),
                -1 => ell_coeffs.push(r.add_in_place(&neg_q)),
                _ => {},
            }
        }

        let q1 = mul_by_char(&q);
        let mut q2 = mul_by_char(&q1);
        q2.y = -q2.y;

        // The loop ran over |6x + 2|.
        if P::X_IS_NEGATIVE {
            r.negate_in_place();
        }

        ell_coeffs.push(r.add_in_place(&q1));
        ell_coeffs.push(r.add_in_place(&q2));

        if ell_coeffs.len() > capacity {
            debug!(
                "reserved {} line coefficients, needed {}",
                capacity,
                ell_coeffs.len()
            );
        }
        trace!("prepared G2 point with {} line coefficients", ell_coeffs.len());

        Self { ell_coeffs }
    }

    /// Returns true for the prepared point at infinity.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.ell_coeffs.is_empty()
    }

    #[inline]
    pub fn ell_coeffs(&self) -> &[EllCoeff<P>] {
        &self.ell_coeffs
    }
}

impl<P: BnParameters> From<G2Affine<P>> for G2Prepared<P> {
    fn from(q: G2Affine<P>) -> Self {
        Self::from_affine(q)
    }
}

// Image of r under the p-power Frobenius endomorphism of E, computed on the twist.
fn mul_by_char<P: BnParameters>(r: &G2Affine<P>) -> G2Affine<P> {
    let mut x = r.x;
    x.frobenius_map_in_place(1);
    x *= &P::TWIST_MUL_BY_Q_X;

    let mut y = r.y;
    y.frobenius_map_in_place(1);
    y *= &P::TWIST_MUL_BY_Q_Y;

    G2Affine::new(x, y)
}
