pub mod cards;
pub mod feedback;
pub mod links;
pub mod posters;
pub mod settings;

pub use feedback::FeedbackStore;
pub use links::PlaceholderImages;
pub use posters::{OmdbProvider, PosterProvider};
pub use settings::SettingsStore;
