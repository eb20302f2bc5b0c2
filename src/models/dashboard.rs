use crate::core::classifier::AnomalyTally;
use crate::models::Product;
use serde::Serialize;

/// Headline figures for one product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub product: Product,
    pub man_day_average: f64,
    pub mean_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub cards: Vec<ProductCard>,
    pub total_orders: usize,
    pub anomalies: AnomalyTally,
}
