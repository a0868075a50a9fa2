#[cfg(feature = "ssr")]
mod places_impl {
    use serde::Deserialize;
    use thiserror::Error;

    use crate::config::Config;
    use crate::models::review::{iso8601_from_epoch, Review};

    // Fake-upstream helpers, shared with the handler tests in api.rs.
    #[cfg(test)]
    pub(crate) mod test_support {
        use actix_web::{web, App, HttpResponse, HttpServer};

        use super::PlacesClient;
        use crate::config::Config;

        // Serves `payload` on the details route from an OS-assigned port and
        // returns the full endpoint URL.
        pub(crate) async fn spawn_upstream(payload: serde_json::Value) -> String {
            let payload = web::Data::new(payload);
            let server = HttpServer::new(move || {
                App::new().app_data(payload.clone()).route(
                    "/maps/api/place/details/json",
                    web::get().to(|data: web::Data<serde_json::Value>| async move {
                        HttpResponse::Ok().json(data.get_ref())
                    }),
                )
            })
            .workers(1)
            .disable_signals()
            .bind(("127.0.0.1", 0))
            .unwrap();
            let port = server.addrs()[0].port();
            actix_web::rt::spawn(server.run());
            format!("http://127.0.0.1:{port}/maps/api/place/details/json")
        }

        // Client with fixed test credentials, aimed at `endpoint`.
        pub(crate) fn test_client(endpoint: String) -> PlacesClient {
            let config = Config {
                place_id: "test-place".into(),
                api_key: "test-key".into(),
                port: 0,
            };
            PlacesClient::new(reqwest::Client::new(), &config).with_endpoint(endpoint)
        }
    }


    /// Production place-details endpoint.
    const PLACE_DETAILS_URL: &str = "https://maps.googleapis.com/maps/api/place/details/json";

    // Upstream payload, limited to the fields the widget consumes.
    #[derive(Debug, Deserialize)]
    struct PlaceDetailsResponse {
        status: String,
        result: Option<PlaceResult>,
    }

    #[derive(Debug, Deserialize)]
    struct PlaceResult {
        #[serde(default)]
        reviews: Vec<PlaceReview>,
    }

    #[derive(Debug, Deserialize)]
    struct PlaceReview {
        author_name: String,
        rating: u8,
        #[serde(default)]
        text: String,
        time: i64,
        profile_photo_url: Option<String>,
    }

    impl From<PlaceReview> for Review {
        fn from(r: PlaceReview) -> Self {
            Review {
                author: r.author_name,
                rating: r.rating,
                text: r.text,
                time: iso8601_from_epoch(r.time),
                photo_url: r.profile_photo_url,
            }
        }
    }

    #[derive(Debug, Error)]
    pub enum PlacesError {
        /// The places API answered but reported a non-OK status.
        #[error("places API returned status {0}")]
        Status(String),

        /// The request failed in transport or the payload did not decode.
        #[error(transparent)]
        Http(#[from] reqwest::Error),
    }

    /// Client for the place-details endpoint. Holds the shared HTTP client
    /// and the credentials; stateless across requests.
    #[derive(Debug, Clone)]
    pub struct PlacesClient {
        http: reqwest::Client,
        endpoint: String,
        place_id: String,
        api_key: String,
    }

    impl PlacesClient {
        pub fn new(http: reqwest::Client, config: &Config) -> Self {
            PlacesClient {
                http,
                endpoint: PLACE_DETAILS_URL.to_string(),
                place_id: config.place_id.clone(),
                api_key: config.api_key.clone(),
            }
        }

        /// Points the client at a different details endpoint. Tests aim this
        /// at a local fake server.
        pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
            self.endpoint = endpoint.into();
            self
        }

        /// Fetches the review list for the configured place and reshapes it
        /// to the served wire format, in upstream order.
        pub async fn fetch_reviews(&self) -> Result<Vec<Review>, PlacesError> {
            let url = format!(
                "{}?place_id={}&fields=reviews&key={}",
                self.endpoint,
                urlencoding::encode(&self.place_id),
                urlencoding::encode(&self.api_key),
            );

            let data: PlaceDetailsResponse = self.http.get(&url).send().await?.json().await?;

            if data.status != "OK" {
                return Err(PlacesError::Status(data.status));
            }

            let raw = data.result.map(|r| r.reviews).unwrap_or_default();
            Ok(raw.into_iter().map(Review::from).collect())
        }
    }
}

#[cfg(feature = "ssr")]
pub use places_impl::{PlacesClient, PlacesError};

#[cfg(all(feature = "ssr", test))]
pub(crate) use places_impl::test_support;
