pub mod extraction;
pub mod providers;
pub mod recommender;

pub use recommender::Recommender;
