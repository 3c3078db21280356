//! Orders list filtering and sorting.
//!
//! Pure functions over the fetched order list: a delivery-window filter
//! (upcoming vs. past) and a two-key sort with a direction toggle. The
//! defaults match the dashboard's first render: all orders, by date,
//! newest first.

use chrono::NaiveDate;

use safecart_core::{Order, OrderStatus};

/// Which orders to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderFilter {
    /// Everything.
    #[default]
    All,
    /// Deliveries still ahead: dated today or later and not yet delivered.
    Upcoming,
    /// Dated before today, or already delivered.
    Past,
}

/// Sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// By purchase date.
    #[default]
    Date,
    /// By status label.
    Status,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Smallest first.
    Asc,
    /// Largest first.
    #[default]
    Desc,
}

/// The orders list's view controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrdersView {
    /// Active filter.
    pub filter: OrderFilter,
    /// Active sort key.
    pub sort_by: SortBy,
    /// Active sort direction.
    pub sort_order: SortOrder,
}

impl OrdersView {
    /// Flip the sort direction.
    #[must_use]
    pub const fn toggle_sort_order(mut self) -> Self {
        self.sort_order = match self.sort_order {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        };
        self
    }

    /// Apply the filter and sort to `orders`, comparing delivery windows
    /// against `today` at local-day granularity.
    #[must_use]
    pub fn apply<'a>(&self, orders: &'a [Order], today: NaiveDate) -> Vec<&'a Order> {
        let mut selected: Vec<&Order> = orders
            .iter()
            .filter(|order| match self.filter {
                OrderFilter::All => true,
                OrderFilter::Past => is_past(order, today),
                OrderFilter::Upcoming => !is_past(order, today),
            })
            .collect();

        selected.sort_by(|a, b| {
            let ordering = match self.sort_by {
                SortBy::Date => a.purchase_date.cmp(&b.purchase_date),
                SortBy::Status => a.status.as_str().cmp(b.status.as_str()),
            };
            match self.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        selected
    }
}

/// Whether an order belongs in the "past" bucket: its delivery date has
/// gone by, or it has already been delivered.
#[must_use]
pub fn is_past(order: &Order, today: NaiveDate) -> bool {
    order.purchase_date < today || order.status == OrderStatus::Delivered
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;

    use safecart_core::{DeliverySlot, OrderId, UserId};

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 3).unwrap()
    }

    fn order(id: i32, date: &str, status: OrderStatus) -> Order {
        Order {
            id: OrderId::new(id),
            user_id: UserId::new(1),
            username: "jane".to_owned(),
            purchase_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            delivery_time: DeliverySlot::TenAm,
            delivery_location: "Colombo".to_owned(),
            product_name: "Laptop".to_owned(),
            quantity: 1,
            message: None,
            status,
            created_at: Utc::now(),
        }
    }

    fn fixtures() -> Vec<Order> {
        vec![
            order(1, "2026-08-01", OrderStatus::Shipped),   // past by date
            order(2, "2026-08-03", OrderStatus::Pending),   // today, upcoming
            order(3, "2026-08-10", OrderStatus::Delivered), // future but delivered
            order(4, "2026-09-01", OrderStatus::Processing), // upcoming
        ]
    }

    fn ids(selected: &[&Order]) -> Vec<i32> {
        selected.iter().map(|o| o.id.as_i32()).collect()
    }

    #[test]
    fn test_default_view_shows_all_newest_date_first() {
        let orders = fixtures();
        let view = OrdersView::default();
        assert_eq!(ids(&view.apply(&orders, today())), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_upcoming_excludes_past_dates_and_delivered() {
        let orders = fixtures();
        let view = OrdersView {
            filter: OrderFilter::Upcoming,
            sort_by: SortBy::Date,
            sort_order: SortOrder::Asc,
        };
        assert_eq!(ids(&view.apply(&orders, today())), vec![2, 4]);
    }

    #[test]
    fn test_past_includes_delivered_future_order() {
        let orders = fixtures();
        let view = OrdersView {
            filter: OrderFilter::Past,
            sort_by: SortBy::Date,
            sort_order: SortOrder::Asc,
        };
        assert_eq!(ids(&view.apply(&orders, today())), vec![1, 3]);
    }

    #[test]
    fn test_status_sort_is_alphabetical() {
        let orders = fixtures();
        let view = OrdersView {
            filter: OrderFilter::All,
            sort_by: SortBy::Status,
            sort_order: SortOrder::Asc,
        };
        // delivered < pending < processing < shipped
        assert_eq!(ids(&view.apply(&orders, today())), vec![3, 2, 4, 1]);
    }

    #[test]
    fn test_toggle_sort_order_round_trips() {
        let view = OrdersView::default();
        let toggled = view.toggle_sort_order();
        assert_eq!(toggled.sort_order, SortOrder::Asc);
        assert_eq!(toggled.toggle_sort_order().sort_order, SortOrder::Desc);
    }

    #[test]
    fn test_empty_list_stays_empty() {
        let view = OrdersView::default();
        assert!(view.apply(&[], today()).is_empty());
    }
}
