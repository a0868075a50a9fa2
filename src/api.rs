#[cfg(feature = "ssr")]
use actix_web::{web, HttpResponse};
#[cfg(feature = "ssr")]
use leptos::logging::{error, log};
#[cfg(feature = "ssr")]
use serde_json::json;

#[cfg(feature = "ssr")]
use crate::places::{PlacesClient, PlacesError};

/// Handler for `GET /api/reviews`: fetches the configured place's reviews
/// from the upstream API and returns them in the normalized wire shape.
/// Every call re-hits the upstream; nothing is cached.
#[cfg(feature = "ssr")]
pub async fn get_reviews(places: web::Data<PlacesClient>) -> HttpResponse {
    log!("[SERVER] Received request for reviews");

    match places.fetch_reviews().await {
        Ok(reviews) => {
            log!("[SERVER] Returning {} reviews", reviews.len());
            HttpResponse::Ok().json(reviews)
        }
        Err(PlacesError::Status(status)) => {
            error!("[SERVER] Upstream rejected the request: {status}");
            HttpResponse::InternalServerError().json(json!({
                "error": "Failed to fetch reviews",
                "details": status,
            }))
        }
        Err(err) => {
            error!("[SERVER] Failed to retrieve reviews: {err:?}");
            HttpResponse::InternalServerError().json(json!({
                "error": "Server error retrieving reviews",
            }))
        }
    }
}
