//! Discrete compounding factors.
//!
//! Names read as "X given Y": [`f_given_p`] is the future worth of a present
//! amount of 1 (the F/P factor), [`a_given_f`] the uniform series that
//! accumulates to a future amount of 1 (A/F), and so on. `i` is the interest
//! rate per period and `n` the number of periods; `n` need not be integral.

use num_traits::Float;

/// F/P: `(1 + i)^n`.
#[inline]
pub fn f_given_p<F: Float>(i: F, n: F) -> F {
    (F::one() + i).powf(n)
}

/// P/F: the reciprocal of [`f_given_p`].
#[inline]
pub fn p_given_f<F: Float>(i: F, n: F) -> F {
    f_given_p(i, n).recip()
}

/// F/A: the reciprocal of [`a_given_f`].
#[inline]
pub fn f_given_a<F: Float>(i: F, n: F) -> F {
    a_given_f(i, n).recip()
}

/// A/F: `(A/P)(P/F)`.
#[inline]
pub fn a_given_f<F: Float>(i: F, n: F) -> F {
    a_given_p(i, n) * p_given_f(i, n)
}

/// P/A: `((1 + i)^n - 1) / (i (1 + i)^n)`.
pub fn p_given_a<F: Float>(i: F, n: F) -> F {
    let growth = f_given_p(i, n);
    (growth - F::one()) / (i * growth)
}

/// A/P: the reciprocal of [`p_given_a`].
#[inline]
pub fn a_given_p<F: Float>(i: F, n: F) -> F {
    p_given_a(i, n).recip()
}

/// P/G, present worth of an arithmetic gradient:
/// `(1 - (1 + i n) / (1 + i)^n) / i^2`.
pub fn p_given_g<F: Float>(i: F, n: F) -> F {
    (F::one() - (F::one() + i * n) / f_given_p(i, n)) / i.powi(2)
}

/// Present worth of a geometric gradient growing at `g` per period.
///
/// Evaluated as P/A at the growth-adjusted rate `(1 + i) / (1 + g) - 1`,
/// discounted by one period of growth. When `g == i` the adjusted rate is
/// zero and the result is NaN.
pub fn p_given_geometric<F: Float>(i: F, g: F, n: F) -> F {
    let adjusted = (F::one() + i) / (F::one() + g) - F::one();
    p_given_a(adjusted, n) / (F::one() + g)
}

/// Present worth of a perpetuity of 1 per period: `1 / i`.
#[inline]
pub fn p_given_perpetuity<F: Float>(i: F) -> F {
    i.recip()
}
