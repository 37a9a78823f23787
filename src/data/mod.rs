//! Data access layer: the user record, the repository seam, and the
//! fixture-backed implementation used by the sample.

mod repository;
mod user;

pub use repository::{
    sample_users, FailureMode, FetchError, FixtureRepository, UserRepository, DEFAULT_FETCH_ERROR,
};
pub use user::User;
