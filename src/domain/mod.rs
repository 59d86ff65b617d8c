pub mod catalog;
pub mod criteria;
pub mod interpret;
pub mod listing;
pub mod rank;

pub use catalog::Catalog;
pub use criteria::SearchCriteria;
pub use interpret::interpret;
pub use listing::{Listing, ScoredListing};
pub use rank::rank;
