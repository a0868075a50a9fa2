pub mod review_card;
pub mod review_carousel;
