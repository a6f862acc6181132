//! Analytics Domain
//!
//! Read-only queries over a loaded [`Dataset`](domain_claims::Dataset).
//!
//! Every query on [`QueryEngine`] is a pure function of the dataset and its
//! own arguments. Results that can be absent are `Option`s; `None` always
//! means "nothing matched" and is never used for a numeric zero.
//!
//! # Rounding
//!
//! Money results are rounded half-up to 2 decimal places, densities to 3.
//! Sums are exact until that final rounding step.
//!
//! # Tie-breaks
//!
//! | Query                         | Tie-break                      |
//! |-------------------------------|--------------------------------|
//! | state with most/least disasters | ascending state name         |
//! | most spoken agent language    | ascending language name        |
//! | top months by claim cost      | chronological (earlier first)  |

pub mod engine;
pub mod counts;
pub mod costs;
pub mod rankings;
pub mod open_claims;
pub mod density;

pub use engine::QueryEngine;
pub use open_claims::OpenClaimCount;
pub use rankings::Extreme;
