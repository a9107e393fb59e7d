//! Google Places reviews client with an in-process cache.
//!
//! The Places Details API rate-limits aggressively and reviews change
//! slowly, so responses are cached for an hour. Only 4+ star reviews are
//! surfaced, wedding-related ones first.

use std::time::{Duration, Instant};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::common::ApiError;

const PLACES_DETAILS_URL: &str = "https://maps.googleapis.com/maps/api/place/details/json";
const CACHE_TTL: Duration = Duration::from_secs(3600);

const WEDDING_KEYWORDS: &[&str] = &[
    "wedding",
    "marriage",
    "bride",
    "groom",
    "ceremony",
    "reception",
    "celebration",
    "special day",
    "forever",
    "matrimony",
    "nuptials",
    "engagement",
];

/// A review formatted for the frontend.
#[derive(Debug, Clone, Serialize)]
pub struct Review {
    pub id: i64,
    pub name: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: Option<String>,
    pub relative_time: String,
    pub is_wedding_related: bool,
    pub source: &'static str,
}

/// One page of reviews plus the total count.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewsPage {
    pub reviews: Vec<Review>,
    pub total: usize,
}

/// Aggregate business rating.
#[derive(Debug, Clone, Serialize)]
pub struct BusinessRating {
    pub rating: f64,
    pub total_reviews: i64,
    pub name: Option<String>,
    pub source: &'static str,
}

#[derive(Debug, Deserialize)]
struct PlaceDetailsResponse {
    status: String,
    result: Option<PlaceResult>,
}

#[derive(Debug, Deserialize)]
struct PlaceResult {
    #[serde(default)]
    reviews: Vec<GoogleReview>,
    rating: Option<f64>,
    user_ratings_total: Option<i64>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GoogleReview {
    #[serde(default)]
    author_name: String,
    rating: i32,
    #[serde(default)]
    text: String,
    time: i64,
    #[serde(default)]
    relative_time_description: Option<String>,
}

struct CachedPlace {
    reviews: Vec<Review>,
    rating: BusinessRating,
    fetched_at: Instant,
}

impl CachedPlace {
    fn is_stale(&self) -> bool {
        self.fetched_at.elapsed() >= CACHE_TTL
    }
}

/// Google Places client for business reviews.
pub struct GoogleReviewsService {
    api_key: Option<String>,
    place_id: Option<String>,
    client: reqwest::Client,
    cache: RwLock<Option<CachedPlace>>,
}

impl GoogleReviewsService {
    pub fn new(api_key: Option<String>, place_id: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self {
            api_key,
            place_id,
            client,
            cache: RwLock::new(None),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some() && self.place_id.is_some()
    }

    /// Paginated reviews, best first.
    pub async fn recent_reviews(&self, page: usize, limit: usize) -> Result<ReviewsPage, ApiError> {
        let (reviews, _) = self.cached_place().await?;
        Ok(paginate(reviews, page, limit))
    }

    /// Aggregate rating of the business.
    pub async fn business_rating(&self) -> Result<BusinessRating, ApiError> {
        let (_, rating) = self.cached_place().await?;
        Ok(rating)
    }

    async fn cached_place(&self) -> Result<(Vec<Review>, BusinessRating), ApiError> {
        {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.as_ref() {
                if !cached.is_stale() {
                    return Ok((cached.reviews.clone(), cached.rating.clone()));
                }
            }
        }

        let fetched = self.fetch_place().await?;
        let result = (fetched.reviews.clone(), fetched.rating.clone());
        *self.cache.write().await = Some(fetched);
        Ok(result)
    }

    async fn fetch_place(&self) -> Result<CachedPlace, ApiError> {
        let (api_key, place_id) = match (&self.api_key, &self.place_id) {
            (Some(api_key), Some(place_id)) => (api_key, place_id),
            _ => return Err(ApiError::ReviewsUnavailable),
        };

        let response = self
            .client
            .get(PLACES_DETAILS_URL)
            .query(&[
                ("place_id", place_id.as_str()),
                ("fields", "reviews,rating,user_ratings_total,name"),
                ("key", api_key.as_str()),
                ("language", "en"),
            ])
            .send()
            .await
            .context("Google Places request failed")?
            .error_for_status()
            .context("Google Places returned an error status")?;

        let details = response
            .json::<PlaceDetailsResponse>()
            .await
            .context("Failed to parse Google Places response")?;

        if details.status != "OK" {
            return Err(anyhow::anyhow!("Google Places status: {}", details.status).into());
        }

        let result = details.result.unwrap_or(PlaceResult {
            reviews: Vec::new(),
            rating: None,
            user_ratings_total: None,
            name: None,
        });

        let rating = BusinessRating {
            rating: result.rating.unwrap_or(0.0),
            total_reviews: result.user_ratings_total.unwrap_or(0),
            name: result.name,
            source: "google_places",
        };

        Ok(CachedPlace {
            reviews: format_reviews(result.reviews),
            rating,
            fetched_at: Instant::now(),
        })
    }
}

/// Keep high-quality reviews and order wedding-related ones first.
fn format_reviews(reviews: Vec<GoogleReview>) -> Vec<Review> {
    let mut formatted: Vec<Review> = reviews
        .into_iter()
        .filter(|review| review.rating >= 4)
        .filter_map(|review| {
            let is_wedding_related = is_wedding_related(&review.text);
            if !is_wedding_related && review.rating < 5 {
                return None;
            }

            Some(Review {
                id: review.time,
                name: review.author_name,
                rating: review.rating,
                comment: review.text,
                created_at: chrono::DateTime::from_timestamp(review.time, 0)
                    .map(|t| t.to_rfc3339()),
                relative_time: review
                    .relative_time_description
                    .unwrap_or_else(|| "Recently".to_string()),
                is_wedding_related,
                source: "google_reviews",
            })
        })
        .collect();

    formatted.sort_by(|a, b| {
        (b.is_wedding_related, b.rating).cmp(&(a.is_wedding_related, a.rating))
    });
    formatted
}

fn is_wedding_related(text: &str) -> bool {
    let lowered = text.to_lowercase();
    WEDDING_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}

fn paginate(reviews: Vec<Review>, page: usize, limit: usize) -> ReviewsPage {
    let total = reviews.len();
    let start = page.saturating_sub(1) * limit;

    let reviews = reviews.into_iter().skip(start).take(limit).collect();
    ReviewsPage { reviews, total }
}
