use leptos::*;
use crate::models::review::Review;

/// One review inside a carousel slide: author photo (when present), the
/// quoted text, the author name and the rating line.
#[component]
pub fn ReviewCard(review: Review) -> impl IntoView {
    let alt = review.author.clone();

    view! {
        <div class="review-card">
            {review.photo_url.map(|url| view! {
                <img src=url class="author-photo" alt=alt/>
            })}
            <div class="review-content">
                <p class="review-text">{ format!("“{}”", review.text) }</p>
                <p class="review-author">{ format!("— {}", review.author) }</p>
                <p class="review-rating">{ format!("Rating: {} / 5", review.rating) }</p>
            </div>
        </div>
    }
}
