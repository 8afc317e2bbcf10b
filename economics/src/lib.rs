#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

//! Engineering-economics factors and interest-rate conversions.
//!
//! Every function is generic over [`num_traits::Float`] and follows IEEE
//! semantics: a zero rate where one is divided by produces an infinity or NaN
//! rather than an error.
//!
//! ```
//! use auxiliary_economics::{factors, interests};
//!
//! // Future worth of 1 after 10 periods at 5%.
//! let f = factors::f_given_p(0.05_f64, 10.0);
//! assert!((f - 1.628_894_626_777_442).abs() < 1e-12);
//!
//! // 12% nominal compounded monthly, as an effective annual rate.
//! let effective = interests::nominal_to_effective(0.12_f64, 12.0);
//! assert!((effective - 0.126_825_030_131_969_7).abs() < 1e-12);
//! ```

pub mod factors;
pub mod interests;

pub use factors::{
    a_given_f, a_given_p, f_given_a, f_given_p, p_given_a, p_given_f, p_given_g,
    p_given_geometric, p_given_perpetuity,
};
pub use interests::{
    continuous_interest, continuous_to_effective, effective_interest, nominal_interest,
    nominal_to_effective, simple_interest, subperiod_interest, subperiod_to_effective,
};
