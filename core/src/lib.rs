pub mod aggregate;
pub mod catalog;
pub mod explain;
pub mod factors;
pub mod model;
pub mod normalize;
pub mod rank;
pub mod validate;

pub use aggregate::{aggregate, Weights, WEIGHTS};
pub use explain::{explain_match, MatchExplanation};
pub use factors::LocationFit;
pub use model::*;
pub use rank::{rank_matches, score_posting};
pub use validate::{validate_postings, InputError};
