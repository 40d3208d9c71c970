//! Static product catalog

/// A catalog entry. Prices are derived from the weight and the current quote.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    /// Stable machine-readable id, also used as the list row id
    pub id: &'static str,
    pub name: &'static str,
    /// Gold weight of one piece, in grams
    pub weight_grams: f64,
}

impl Product {
    /// Total cost of `quantity` pieces at `price_per_gram`
    pub fn total_cost(&self, quantity: u32, price_per_gram: f64) -> f64 {
        f64::from(quantity) * self.weight_grams * price_per_gram
    }
}

pub const PRODUCTS: &[Product] = &[
    Product {
        id: "necklace",
        name: "Necklace",
        weight_grams: 50.0,
    },
    Product {
        id: "ring",
        name: "Ring",
        weight_grams: 8.0,
    },
    Product {
        id: "bangle",
        name: "Bangle",
        weight_grams: 20.0,
    },
    Product {
        id: "earrings",
        name: "Earrings",
        weight_grams: 6.0,
    },
    Product {
        id: "chain",
        name: "Chain",
        weight_grams: 15.0,
    },
];

/// Look up a product by id
pub fn find_product(id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}
