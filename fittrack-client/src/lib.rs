pub mod auth;
pub mod config;
pub mod exercise;

pub use auth::{sign_in, sign_up, AuthError, MockUserStore, UserStore};
pub use config::ExerciseDbConfig;
pub use exercise::{create, search_exercises, Error, ExerciseClient, MockExerciseClient};
