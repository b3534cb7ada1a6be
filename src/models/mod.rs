pub mod feedback;
pub mod movie;
pub mod settings;

pub use feedback::{FeedbackEntry, FeedbackLabel};
pub use movie::{MatchScore, MatchTier, Movie, MovieCard, MovieYear, PosterChain, PosterSource};
pub use settings::AppSettings;
