//! Reviews domain - Google Places proxy for testimonials.

pub mod google;

pub use google::{BusinessRating, GoogleReviewsService, Review, ReviewsPage};
