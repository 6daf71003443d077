//! Route Pages

mod doc;
mod home;
mod not_found;

pub use doc::DocPage;
pub use home::HomePage;
pub use not_found::{NotFound, NotFoundPage};
