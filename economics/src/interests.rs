//! Interest-rate conversions and growth factors.
//!
//! Rates come in three flavours:
//!
//! - a *subperiod* rate `r` applied `n` times per period,
//! - a *nominal* rate `r` split evenly over `n` subperiods (`r / n` each),
//! - a *continuous* rate `r` compounded continuously.
//!
//! The `*_to_effective` functions convert each to the equivalent effective
//! rate per period; the `*_interest` functions return the growth factor of
//! 1 over `t` periods at that effective rate.

use num_traits::Float;

use crate::factors::f_given_p;

/// Effective rate of a subperiod rate `r` compounded `n` times: `(1 + r)^n - 1`.
#[inline]
pub fn subperiod_to_effective<F: Float>(r: F, n: F) -> F {
    f_given_p(r, n) - F::one()
}

/// Effective rate of a nominal rate `r` compounded `n` times.
#[inline]
pub fn nominal_to_effective<F: Float>(r: F, n: F) -> F {
    subperiod_to_effective(r / n, n)
}

/// Effective rate of a continuously compounded rate `r`: `e^r - 1`.
#[inline]
pub fn continuous_to_effective<F: Float>(r: F) -> F {
    r.exp_m1()
}

/// Simple interest over `t` periods: `(1 + r) t`.
#[inline]
pub fn simple_interest<F: Float>(r: F, t: F) -> F {
    (F::one() + r) * t
}

/// Compound growth over `t` periods at effective rate `r`: `(1 + r)^t`.
#[inline]
pub fn effective_interest<F: Float>(r: F, t: F) -> F {
    f_given_p(r, t)
}

pub fn subperiod_interest<F: Float>(r: F, n: F, t: F) -> F {
    effective_interest(subperiod_to_effective(r, n), t)
}

pub fn nominal_interest<F: Float>(r: F, n: F, t: F) -> F {
    effective_interest(nominal_to_effective(r, n), t)
}

pub fn continuous_interest<F: Float>(r: F, t: F) -> F {
    effective_interest(continuous_to_effective(r), t)
}
