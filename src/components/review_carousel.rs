use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use gloo_timers::callback::Interval;
use leptos::logging::{error, log};
use leptos::*;

use crate::components::review_card::ReviewCard;
use crate::models::review::Review;

/// Backend route the widget fetches from. The server renders and hydrates
/// the page on the same origin, so a relative path is enough.
const REVIEWS_ENDPOINT: &str = "/api/reviews";

/// Reviews shown per carousel slide.
pub const GROUP_SIZE: usize = 4;

/// How the carousel obtains its review list. The default loader fetches
/// [`REVIEWS_ENDPOINT`]; tests substitute canned data here.
pub type ReviewLoader = Rc<dyn Fn() -> LocalBoxFuture<'static, Result<Vec<Review>, String>>>;

/// Splits reviews into display groups of [`GROUP_SIZE`], preserving order.
/// The last group may hold fewer reviews.
pub fn chunk_reviews(reviews: &[Review]) -> Vec<Vec<Review>> {
    reviews
        .chunks(GROUP_SIZE)
        .map(|group| group.to_vec())
        .collect()
}

async fn load_reviews(endpoint: &str) -> Result<Vec<Review>, String> {
    let response = Request::get(endpoint)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {} from {}", response.status(), endpoint));
    }
    response.json::<Vec<Review>>().await.map_err(|e| e.to_string())
}

fn default_loader() -> ReviewLoader {
    Rc::new(|| load_reviews(REVIEWS_ENDPOINT).boxed_local())
}

/// Rotating review display: fetches the review list once, groups it into
/// slides of [`GROUP_SIZE`], and advances the visible slide on a fixed
/// interval. Shows a loading placeholder until at least one group exists.
#[component]
pub fn ReviewCarousel(
    /// Replaces the backend fetch, so tests can inject canned reviews.
    #[prop(optional, into)]
    loader: Option<ReviewLoader>,
    /// Milliseconds between slide advances.
    #[prop(default = 20_000)]
    rotate_ms: u32,
) -> impl IntoView {
    let (reviews, set_reviews) = create_signal(Vec::<Review>::new());
    let (chunks, set_chunks) = create_signal(Vec::<Vec<Review>>::new());
    let (current_idx, set_current_idx) = create_signal(0usize);
    // Owned by this component's reactive scope; dropping the handle clears
    // the underlying interval.
    let rotation = store_value(None::<Interval>);

    let loader = loader.unwrap_or_else(default_loader);

    // 1. Fetch reviews once on mount. Effects only run in the browser, so
    //    server rendering never issues the request.
    create_effect(move |_| {
        let loader = loader.clone();
        spawn_local(async move {
            match loader().await {
                Ok(list) => {
                    log!("[CAROUSEL] loaded {} reviews", list.len());
                    set_reviews.set(list);
                }
                Err(err) => error!("[CAROUSEL] failed to load reviews: {err}"),
            }
        });
    });

    // 2. Whenever `reviews` becomes non-empty, recompute the groups and jump
    //    back to the first slide.
    create_effect(move |_| {
        let list = reviews.get();
        if !list.is_empty() {
            set_chunks.set(chunk_reviews(&list));
            set_current_idx.set(0);
        }
    });

    // 3. Restart the rotation whenever the groups change. The previous timer
    //    is always cancelled first; a single group needs no rotation.
    create_effect(move |_| {
        let count = chunks.get().len();
        rotation.update_value(|slot| {
            slot.take();
        });
        if count < 2 {
            return;
        }
        rotation.set_value(Some(Interval::new(rotate_ms, move || {
            set_current_idx.update(|idx| *idx = (*idx + 1) % count);
        })));
    });

    on_cleanup(move || {
        rotation.update_value(|slot| {
            slot.take();
        });
    });

    move || {
        let groups = chunks.get();
        if groups.is_empty() {
            return view! { <div>{ "Loading reviews…" }</div> }.into_view();
        }

        let count = groups.len();
        let offset = current_idx.get() as f64 * (100.0 / count as f64);

        view! {
            <div class="carousel-container">
                <div
                    class="slides-wrapper"
                    style=format!(
                        "width: {}%; transform: translateX(-{}%);",
                        count * 100,
                        offset,
                    )
                >
                    {groups.into_iter().map(|group| view! {
                        <div class="slide">
                            {group.into_iter().map(|review| view! {
                                <ReviewCard review/>
                            }).collect::<Vec<_>>()}
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        }
        .into_view()
    }
}
