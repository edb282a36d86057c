//! Application pages module
//!
//! - Edition page (`/:edition`)
//! - Not found page

mod edition;
mod not_found;

pub use edition::EditionPage;
pub use not_found::NotFoundPage;
