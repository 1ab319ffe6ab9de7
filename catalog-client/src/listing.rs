//! Item list view-model
//!
//! Maps canonical items into the rows the listing screen renders. The
//! only derived state is availability: a product with tracked stock at
//! zero is out of stock and cannot be purchased; services and untracked
//! products are always available.

use shared::{CatalogItem, ItemCategory, ItemStatus};

/// Purchase availability derived from category and stock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    OutOfStock,
    /// Services and products without a stock count
    NotTracked,
}

impl Availability {
    pub fn from_item(item: &CatalogItem) -> Self {
        if item.category != ItemCategory::Product {
            return Availability::NotTracked;
        }
        match item.stock {
            Some(stock) if stock <= 0 => Availability::OutOfStock,
            Some(_) => Availability::Available,
            None => Availability::NotTracked,
        }
    }

    pub fn blocks_purchase(&self) -> bool {
        matches!(self, Availability::OutOfStock)
    }
}

/// One row of the catalog listing
#[derive(Debug, Clone)]
pub struct ItemRow {
    pub id: String,
    pub name: String,
    pub category: ItemCategory,
    pub price: f64,
    pub status: ItemStatus,
    pub availability: Availability,
    /// First image URI, if any
    pub thumbnail: Option<String>,
    /// Stock label for products, e.g. "12 piece" or "Out of stock"
    pub quantity_label: Option<String>,
}

impl ItemRow {
    pub fn from_item(item: &CatalogItem) -> Self {
        let availability = Availability::from_item(item);
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            category: item.category,
            price: item.price,
            status: item.status,
            availability,
            thumbnail: item.images.first().cloned(),
            quantity_label: quantity_label(item, availability),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ItemStatus::Active
    }
}

fn quantity_label(item: &CatalogItem, availability: Availability) -> Option<String> {
    match availability {
        Availability::OutOfStock => Some("Out of stock".to_string()),
        Availability::Available => {
            let stock = item.stock?;
            match &item.uom {
                Some(uom) => Some(format!("{} {}", stock, shared::vocab::humanize_tag(uom))),
                None => Some(stock.to_string()),
            }
        }
        Availability::NotTracked => None,
    }
}

/// Build listing rows from a server response, in server order.
pub fn build_rows(items: &[CatalogItem]) -> Vec<ItemRow> {
    items.iter().map(ItemRow::from_item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::ItemStatus;

    fn product(stock: Option<i64>) -> CatalogItem {
        CatalogItem {
            id: "item-1".to_string(),
            provider_id: "prov-1".to_string(),
            category: ItemCategory::Product,
            name: "Brake Pads".to_string(),
            price: 80.0,
            status: ItemStatus::Active,
            images: vec!["/api/image/a.jpg".to_string()],
            description: None,
            duration: None,
            service_types: Vec::new(),
            other_service_name: None,
            sub_category: Some("spare_parts".to_string()),
            stock,
            sku: None,
            company: None,
            uom: Some("piece".to_string()),
            purchase_price: None,
            tax_percentage: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_zero_stock_is_out_of_stock() {
        // A product created with stock "0" must block purchase and show
        // the indicator instead of a quantity.
        let row = ItemRow::from_item(&product(Some(0)));
        assert_eq!(row.availability, Availability::OutOfStock);
        assert!(row.availability.blocks_purchase());
        assert_eq!(row.quantity_label.as_deref(), Some("Out of stock"));
    }

    #[test]
    fn test_tracked_stock_shows_quantity_with_uom() {
        let row = ItemRow::from_item(&product(Some(12)));
        assert_eq!(row.availability, Availability::Available);
        assert!(!row.availability.blocks_purchase());
        assert_eq!(row.quantity_label.as_deref(), Some("12 Piece"));
    }

    #[test]
    fn test_service_is_not_tracked() {
        let mut item = product(Some(0));
        item.category = ItemCategory::Service;
        let row = ItemRow::from_item(&item);
        assert_eq!(row.availability, Availability::NotTracked);
        assert!(row.quantity_label.is_none());
    }

    #[test]
    fn test_thumbnail_is_first_image() {
        let row = ItemRow::from_item(&product(Some(5)));
        assert_eq!(row.thumbnail.as_deref(), Some("/api/image/a.jpg"));
    }
}
