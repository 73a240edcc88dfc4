//! Rows for the orders table, with expandable detail.

use chrono::Locale;

use cbc_core::{CustomerInfo, Order, OrderId, OrderStatus, Price};

use super::expansion::Expansion;

/// French label for an order status, as the table shows it.
#[must_use]
pub const fn status_label(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "En attente",
        OrderStatus::Processing => "En traitement",
        OrderStatus::Shipped => "Expédiée",
        OrderStatus::Delivered => "Livrée",
        OrderStatus::Cancelled => "Annulée",
    }
}

/// One line of an expanded order.
#[derive(Debug, Clone)]
pub struct OrderLineRow {
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: Price,
    pub line_total: Price,
}

/// Detail shown when an order row is expanded.
#[derive(Debug, Clone)]
pub struct OrderDetails {
    pub customer: CustomerInfo,
    pub lines: Vec<OrderLineRow>,
    pub total: Price,
}

/// One row of the orders table.
#[derive(Debug, Clone)]
pub struct OrderRow {
    pub id: OrderId,
    /// Short reference shown to the administrator, e.g. "3f2b8a1c".
    pub reference: String,
    /// Order date, rendered in French.
    pub placed_on: String,
    pub customer_name: String,
    pub article_count: u32,
    pub total: String,
    pub status: OrderStatus,
    pub status_label: &'static str,
    /// Populated only while the row is expanded.
    pub details: Option<OrderDetails>,
}

/// Map orders to table rows, expanding the ones the administrator opened.
#[must_use]
pub fn order_rows(orders: &[Order], expansion: &Expansion<OrderId>) -> Vec<OrderRow> {
    orders
        .iter()
        .map(|order| {
            let details = expansion.is_expanded(&order.id).then(|| OrderDetails {
                customer: order.customer.clone(),
                lines: order
                    .items
                    .iter()
                    .map(|item| OrderLineRow {
                        product_name: item.product.name.clone(),
                        quantity: item.quantity,
                        unit_price: item.unit_price,
                        line_total: item.line_total(),
                    })
                    .collect(),
                total: order.total,
            });

            OrderRow {
                id: order.id,
                reference: short_reference(order.id),
                placed_on: order
                    .placed_at
                    .format_localized("%e %B %Y", Locale::fr_FR)
                    .to_string()
                    .trim_start()
                    .to_string(),
                customer_name: order.customer.name.clone(),
                article_count: order.article_count(),
                total: order.total.to_string(),
                status: order.status,
                status_label: status_label(order.status),
                details,
            }
        })
        .collect()
}

/// First eight hex characters of the order id.
fn short_reference(id: OrderId) -> String {
    let mut reference = id.as_uuid().simple().to_string();
    reference.truncate(8);
    reference
}

#[cfg(test)]
mod tests {
    use super::*;
    use cbc_core::{OrderItem, ProductDraft};

    fn order() -> Order {
        let product = ProductDraft {
            name: "Imprimante laser".to_string(),
            description: String::new(),
            price: Price::fcfa(85_000),
            old_price: None,
            image: "https://example.com/imprimante.jpg".to_string(),
            category: "Accessoires".to_string(),
            featured: false,
            stock: 2,
        }
        .into_product();

        Order::new(
            vec![OrderItem::new(product, 2)],
            CustomerInfo {
                name: "Ama K.".to_string(),
                email: "ama@example.com".to_string(),
                phone: "+228 93 00 00 00".to_string(),
                address: "Adidogomé, Lomé".to_string(),
            },
        )
    }

    #[test]
    fn test_collapsed_rows_have_no_details() {
        let orders = vec![order()];
        let rows = order_rows(&orders, &Expansion::new());

        let row = rows.first().expect("row");
        assert!(row.details.is_none());
        assert_eq!(row.reference.len(), 8);
        assert_eq!(row.article_count, 2);
        assert_eq!(row.status_label, "En attente");
        assert_eq!(row.total, "170 000 FCFA");
    }

    #[test]
    fn test_expanded_row_carries_lines_and_customer() {
        let orders = vec![order()];
        let mut expansion = Expansion::new();
        expansion.toggle(orders.first().expect("order").id);

        let rows = order_rows(&orders, &expansion);
        let details = rows
            .first()
            .expect("row")
            .details
            .as_ref()
            .expect("expanded");

        assert_eq!(details.customer.name, "Ama K.");
        let line = details.lines.first().expect("line");
        assert_eq!(line.product_name, "Imprimante laser");
        assert_eq!(line.line_total, Price::fcfa(170_000));
    }

    #[test]
    fn test_every_status_has_a_french_label() {
        for status in OrderStatus::ALL {
            assert!(!status_label(status).is_empty());
        }
    }
}
