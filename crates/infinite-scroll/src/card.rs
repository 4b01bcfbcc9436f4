//! Card Model
//!
//! Display strings for one product card. Pure: no state, no I/O.

use crate::product::Product;

/// `price` reduced by `discount_percentage` percent.
pub fn discounted_price(price: f64, discount_percentage: f64) -> f64 {
    price - price * discount_percentage / 100.0
}

/// Round to `decimals` places with ties going up, so `10.125` becomes
/// `10.13` rather than the `{:.2}` round-half-even `10.12`.
pub fn round_half_up(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Two decimal places, e.g. `15.00`.
pub fn format_price(value: f64) -> String {
    format!("{:.2}", round_half_up(value, 2))
}

/// One decimal place, e.g. `4.3 / 5`.
pub fn format_rating(rating: f64) -> String {
    format!("{:.1} / 5", round_half_up(rating, 1))
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSummary {
    pub comment: String,
    pub reviewer: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardModel {
    pub title: String,
    pub thumbnail: String,
    /// `by {brand}`; absent when the brand is missing or empty
    pub brand_line: Option<String>,
    pub rating: String,
    /// Undiscounted price as the catalog sent it (shown struck through)
    pub original_price: String,
    pub discounted_price: String,
    pub discount: String,
    pub availability: String,
    pub stock: u32,
    pub tags: Vec<String>,
    pub dimensions: String,
    pub description: String,
    /// First review only
    pub review: Option<ReviewSummary>,
}

impl From<&Product> for CardModel {
    fn from(product: &Product) -> Self {
        let brand_line = product
            .brand
            .as_deref()
            .filter(|brand| !brand.is_empty())
            .map(|brand| format!("by {}", brand));

        let dims = &product.dimensions;

        Self {
            title: product.title.clone(),
            thumbnail: product.thumbnail.clone(),
            brand_line,
            rating: format_rating(product.rating),
            original_price: format!("${}", product.price),
            discounted_price: format!(
                "${}",
                format_price(discounted_price(product.price, product.discount_percentage))
            ),
            discount: format!("({}% off)", product.discount_percentage),
            availability: product.availability_status.clone(),
            stock: product.stock,
            tags: product.tags.clone(),
            dimensions: format!(
                "{}\"W × {}\"H × {}\"D",
                dims.width, dims.height, dims.depth
            ),
            description: product.description.clone(),
            review: product.reviews.first().map(|review| ReviewSummary {
                comment: review.comment.clone(),
                reviewer: review.reviewer_name.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{Dimensions, Review};
    use crate::testing::make_product;

    fn review(name: &str, comment: &str) -> Review {
        Review {
            rating: Some(5.0),
            comment: comment.to_string(),
            date: None,
            reviewer_name: name.to_string(),
            reviewer_email: None,
        }
    }

    #[test]
    fn test_discounted_price_two_decimals() {
        assert_eq!(format_price(discounted_price(20.0, 25.0)), "15.00");
        assert_eq!(format_price(discounted_price(9.99, 0.0)), "9.99");
        assert_eq!(format_price(discounted_price(100.0, 12.5)), "87.50");
    }

    #[test]
    fn test_ties_round_up() {
        let mut product = make_product(1);
        product.price = 20.25;
        product.discount_percentage = 50.0;
        product.rating = 4.25;

        let card = CardModel::from(&product);
        assert_eq!(card.discounted_price, "$10.13");
        assert_eq!(card.rating, "4.3 / 5");
        assert_eq!(format_price(0.125), "0.13");
        assert_eq!(format_rating(3.75), "3.8 / 5");
    }

    #[test]
    fn test_card_prices_and_rating() {
        let mut product = make_product(1);
        product.price = 20.0;
        product.discount_percentage = 25.0;
        product.rating = 4.94;

        let card = CardModel::from(&product);
        assert_eq!(card.discounted_price, "$15.00");
        assert_eq!(card.original_price, "$20");
        assert_eq!(card.discount, "(25% off)");
        assert_eq!(card.rating, "4.9 / 5");
    }

    #[test]
    fn test_brand_line_only_when_present() {
        let mut product = make_product(1);
        assert!(CardModel::from(&product).brand_line.is_none());

        product.brand = Some(String::new());
        assert!(CardModel::from(&product).brand_line.is_none());

        product.brand = Some("Essence".to_string());
        assert_eq!(CardModel::from(&product).brand_line.as_deref(), Some("by Essence"));
    }

    #[test]
    fn test_dimensions_line() {
        let mut product = make_product(1);
        product.dimensions = Dimensions { width: 23.17, height: 14.43, depth: 28.01 };

        assert_eq!(CardModel::from(&product).dimensions, "23.17\"W × 14.43\"H × 28.01\"D");
    }

    #[test]
    fn test_only_first_review_is_summarized() {
        let mut product = make_product(1);
        assert!(CardModel::from(&product).review.is_none());

        product.reviews = vec![review("Ada", "Great"), review("Linus", "Meh")];
        let summary = CardModel::from(&product).review.expect("review missing");
        assert_eq!(summary.reviewer, "Ada");
        assert_eq!(summary.comment, "Great");
    }

    #[test]
    fn test_tags_keep_order() {
        let mut product = make_product(1);
        product.tags = vec!["beauty".to_string(), "mascara".to_string()];
        assert_eq!(CardModel::from(&product).tags, vec!["beauty", "mascara"]);
    }
}
