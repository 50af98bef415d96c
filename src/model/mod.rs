pub mod form;
pub mod movie;
pub mod movie_details;

pub use form::MovieForm;
pub use movie::{Movie, ValidationError};
pub use movie_details::MovieDetails;
