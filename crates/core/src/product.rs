use serde::{Deserialize, Serialize};

/// Product identifier (opaque string assigned by the catalog backend).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A catalog entry.
///
/// `image` is a reference relative to the asset host; the gateway resolves
/// it against its configured base prefix before handing products out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: String,
    /// Price in the smallest currency unit. `None` means the product is
    /// priceless: it can sit in a basket but is never orderable.
    pub price: Option<u64>,
}

impl Product {
    pub fn is_priceless(&self) -> bool {
        self.price.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: Option<u64>) -> Product {
        Product {
            id: ProductId::from(id),
            title: "Widget".to_string(),
            description: String::new(),
            image: "/widget.svg".to_string(),
            category: "other".to_string(),
            price,
        }
    }

    #[test]
    fn priceless_means_no_price() {
        assert!(product("a", None).is_priceless());
        assert!(!product("b", Some(100)).is_priceless());
    }

    #[test]
    fn product_id_round_trips_through_serde_as_plain_string() {
        let id = ProductId::from("abc-123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc-123\"");
    }
}
