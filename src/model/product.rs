//! Product record shapes: stored row, create payload, partial update.

use serde::{Deserialize, Deserializer, Serialize};

/// Stored product row, also the API wire shape. `description` serializes as
/// an explicit `null` when unset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub in_stock: bool,
}

/// Creation payload. `id` is never accepted; it is assigned on insert.
#[derive(Clone, Debug, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

fn default_in_stock() -> bool {
    true
}

/// Partial update. A missing field leaves the column unchanged; a present
/// field sets it. `description` is the one nullable column, so it needs the
/// extra level: `Some(None)` means "set to null", `None` means "not sent".
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProductUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present_or_null")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub in_stock: Option<bool>,
}

/// Only invoked when the field appears in the payload, so an explicit `null`
/// arrives here as `Ok(None)` and is wrapped to `Some(None)` instead of
/// collapsing into the absent case.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl Product {
    /// Merge the fields present in `update` onto this row, leaving the rest
    /// untouched.
    pub fn apply(&mut self, update: ProductUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(in_stock) = update.in_stock {
            self.in_stock = in_stock;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn widget() -> Product {
        Product {
            id: 1,
            name: "Widget".into(),
            description: Some("A widget".into()),
            price: 9.99,
            in_stock: true,
        }
    }

    #[test]
    fn create_defaults_description_and_in_stock() {
        let p: ProductCreate =
            serde_json::from_value(json!({"name": "Widget", "price": 9.99})).unwrap();
        assert_eq!(p.name, "Widget");
        assert_eq!(p.description, None);
        assert!(p.in_stock);
    }

    #[test]
    fn create_rejects_wrong_types() {
        let r = serde_json::from_value::<ProductCreate>(json!({"name": "Widget", "price": "cheap"}));
        assert!(r.is_err());
    }

    #[test]
    fn create_rejects_missing_required_fields() {
        let r = serde_json::from_value::<ProductCreate>(json!({"price": 1.0}));
        assert!(r.is_err());
    }

    #[test]
    fn product_serializes_explicit_null_description() {
        let mut p = widget();
        p.description = None;
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(
            v,
            json!({"id": 1, "name": "Widget", "description": null, "price": 9.99, "in_stock": true})
        );
    }

    #[test]
    fn update_absent_fields_are_none() {
        let u: ProductUpdate = serde_json::from_value(json!({})).unwrap();
        assert!(u.name.is_none());
        assert!(u.description.is_none());
        assert!(u.price.is_none());
        assert!(u.in_stock.is_none());
    }

    #[test]
    fn update_null_description_is_distinct_from_absent() {
        let u: ProductUpdate = serde_json::from_value(json!({"description": null})).unwrap();
        assert_eq!(u.description, Some(None));

        let u: ProductUpdate = serde_json::from_value(json!({"description": "new"})).unwrap();
        assert_eq!(u.description, Some(Some("new".into())));
    }

    #[test]
    fn apply_changes_exactly_the_present_fields() {
        let mut p = widget();
        p.apply(ProductUpdate {
            price: Some(5.0),
            ..Default::default()
        });
        assert_eq!(p.price, 5.0);
        assert_eq!(p.name, "Widget");
        assert_eq!(p.description, Some("A widget".into()));
        assert!(p.in_stock);
    }

    #[test]
    fn apply_sets_description_to_null_when_sent_as_null() {
        let mut p = widget();
        p.apply(ProductUpdate {
            description: Some(None),
            ..Default::default()
        });
        assert_eq!(p.description, None);
    }

    #[test]
    fn apply_with_empty_update_is_a_no_op() {
        let mut p = widget();
        p.apply(ProductUpdate::default());
        assert_eq!(p, widget());
    }
}
