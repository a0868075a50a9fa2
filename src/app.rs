/// Main application entry point for the review widget.
/// Hosts the carousel on a single routed page.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::review_carousel::ReviewCarousel;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/review-widget.css"/>
        <Title text="Customer Reviews"/>
        <Router>
            <main>
                <Routes>
                    <Route path="" view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="review-page">
            <h1>{ "What our customers say" }</h1>
            // Fetches, groups and rotates the reviews on its own.
            <ReviewCarousel/>
        </div>
    }
}
