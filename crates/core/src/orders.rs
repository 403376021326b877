//! Partitioning an encounter's heterogeneous order list by department.

use clinic_types::{Order, OrderStatus, OrderType};

/// One encounter's orders split by type.
///
/// Buckets borrow from the input slice; the partition is a view, not a
/// copy. Orders of unrecognised types appear in no bucket.
#[derive(Debug, Default)]
pub struct OrderBuckets<'a> {
    /// Lab test orders, excluding cancelled ones. A voided test has no
    /// clinical meaning and must not count toward pending/completed
    /// tallies or appear in result lists.
    pub lab: Vec<&'a Order>,
    pub xray: Vec<&'a Order>,
    pub ultrasound: Vec<&'a Order>,
    pub consultation: Vec<&'a Order>,
    pub pharmacy: Vec<&'a Order>,
}

/// Partition a flat order list by type, single pass.
pub fn partition_orders(orders: &[Order]) -> OrderBuckets<'_> {
    let mut buckets = OrderBuckets::default();

    for order in orders {
        match order.order_type {
            OrderType::Lab => {
                if order.status != OrderStatus::Cancelled {
                    buckets.lab.push(order);
                }
            }
            OrderType::Xray => buckets.xray.push(order),
            OrderType::Ultrasound => buckets.ultrasound.push(order),
            OrderType::Consultation => buckets.consultation.push(order),
            OrderType::Pharmacy => buckets.pharmacy.push(order),
            OrderType::Other => {}
        }
    }

    buckets
}

/// Whether any consultation order exists, regardless of status.
///
/// This is an idempotency signal for the auto-add flow, not a billing
/// view: even a cancelled consultation order means "already attempted"
/// and must block a second automatic insertion.
pub fn has_consultation_order(orders: &[Order]) -> bool {
    orders
        .iter()
        .any(|o| o.order_type == OrderType::Consultation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str, order_type: OrderType, status: OrderStatus) -> Order {
        Order {
            id: id.to_string(),
            encounter_id: "enc-1".into(),
            order_type,
            status,
            quantity: 1,
            unit_price: 500.0,
            total_price: 500.0,
            is_paid: false,
            description: String::new(),
        }
    }

    #[test]
    fn partitions_every_known_type() {
        let orders = vec![
            order("a", OrderType::Lab, OrderStatus::Pending),
            order("b", OrderType::Xray, OrderStatus::Completed),
            order("c", OrderType::Ultrasound, OrderStatus::Pending),
            order("d", OrderType::Consultation, OrderStatus::Completed),
            order("e", OrderType::Pharmacy, OrderStatus::Pending),
        ];

        let buckets = partition_orders(&orders);
        assert_eq!(buckets.lab.len(), 1);
        assert_eq!(buckets.xray.len(), 1);
        assert_eq!(buckets.ultrasound.len(), 1);
        assert_eq!(buckets.consultation.len(), 1);
        assert_eq!(buckets.pharmacy.len(), 1);
    }

    #[test]
    fn partition_covers_input_exactly_once() {
        let orders = vec![
            order("a", OrderType::Lab, OrderStatus::Pending),
            order("b", OrderType::Xray, OrderStatus::Pending),
            order("c", OrderType::Pharmacy, OrderStatus::Completed),
        ];

        let buckets = partition_orders(&orders);
        let mut seen: Vec<&str> = buckets
            .lab
            .iter()
            .chain(&buckets.xray)
            .chain(&buckets.ultrasound)
            .chain(&buckets.consultation)
            .chain(&buckets.pharmacy)
            .map(|o| o.id.as_str())
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, vec!["a", "b", "c"]);
    }

    #[test]
    fn unknown_types_are_dropped_silently() {
        let orders = vec![order("a", OrderType::Other, OrderStatus::Pending)];
        let buckets = partition_orders(&orders);
        assert!(buckets.lab.is_empty());
        assert!(buckets.xray.is_empty());
        assert!(buckets.ultrasound.is_empty());
        assert!(buckets.consultation.is_empty());
        assert!(buckets.pharmacy.is_empty());
    }

    #[test]
    fn cancelled_lab_orders_never_reach_the_lab_bucket() {
        let orders = vec![
            order("a", OrderType::Lab, OrderStatus::Cancelled),
            order("b", OrderType::Lab, OrderStatus::Pending),
        ];

        let buckets = partition_orders(&orders);
        assert_eq!(buckets.lab.len(), 1);
        assert_eq!(buckets.lab[0].id, "b");
    }

    #[test]
    fn cancelled_orders_stay_in_non_lab_buckets() {
        let orders = vec![order("a", OrderType::Xray, OrderStatus::Cancelled)];
        let buckets = partition_orders(&orders);
        assert_eq!(buckets.xray.len(), 1);
    }

    #[test]
    fn consultation_signal_ignores_status() {
        let cancelled = vec![order("a", OrderType::Consultation, OrderStatus::Cancelled)];
        assert!(has_consultation_order(&cancelled));

        let none = vec![order("b", OrderType::Lab, OrderStatus::Pending)];
        assert!(!has_consultation_order(&none));
    }
}
