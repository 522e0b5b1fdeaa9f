//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod film_location_repo;
pub mod image_repo;
pub mod user_comment_repo;
pub mod user_repo;

pub use film_location_repo::FilmLocationRepo;
pub use image_repo::ImageRepo;
pub use user_comment_repo::UserCommentRepo;
pub use user_repo::UserRepo;
