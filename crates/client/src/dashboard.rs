//! Dashboard view-model.
//!
//! The dashboard is a small state machine: it starts in `Loading`, the
//! three bootstrap fetches (profile, orders, options) are joined, and the
//! outcome moves it to `Ready` or `Failed`. Failure blocks rendering
//! entirely and offers a retry that starts the bootstrap over - there is
//! no partial-data rendering and no automatic retry.

use safecart_core::{Order, User};

use crate::api::DashboardPayload;

/// Which dashboard pane is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// The order submission form.
    NewOrder,
    /// The caller's orders.
    #[default]
    Orders,
    /// The profile editor.
    Profile,
}

/// The dashboard state machine.
#[derive(Debug, Clone)]
pub enum DashboardState {
    /// Bootstrap fetches in flight.
    Loading,
    /// All three fetches landed.
    Ready(Ready),
    /// At least one fetch failed; rendering is blocked.
    Failed {
        /// What the user is told next to the retry control.
        message: String,
    },
}

/// The loaded dashboard.
#[derive(Debug, Clone)]
pub struct Ready {
    /// The caller's profile.
    pub profile: User,
    /// The caller's orders, newest first.
    pub orders: Vec<Order>,
    /// The static catalog driving the form's selects.
    pub options: crate::api::OptionsCatalog,
    /// Active pane.
    pub active_tab: Tab,
}

/// User- and network-driven dashboard events.
#[derive(Debug, Clone)]
pub enum DashboardEvent {
    /// Bootstrap completed.
    BootstrapSucceeded(DashboardPayload),
    /// Bootstrap failed with a displayable message.
    BootstrapFailed(String),
    /// The user clicked the retry control.
    RetryRequested,
    /// The user switched panes.
    TabSelected(Tab),
    /// An order submission succeeded.
    OrderCreated(Order),
    /// A profile edit succeeded.
    ProfileUpdated(User),
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::Loading
    }
}

impl DashboardState {
    /// Apply an event, producing the next state.
    ///
    /// Events that make no sense in the current state (e.g. a tab switch
    /// while loading) leave the state unchanged.
    #[must_use]
    pub fn apply(self, event: DashboardEvent) -> Self {
        match (self, event) {
            (Self::Loading, DashboardEvent::BootstrapSucceeded(payload)) => Self::Ready(Ready {
                profile: payload.profile,
                orders: payload.orders,
                options: payload.options,
                active_tab: Tab::default(),
            }),
            (Self::Loading, DashboardEvent::BootstrapFailed(message)) => Self::Failed { message },
            (Self::Failed { .. }, DashboardEvent::RetryRequested) => Self::Loading,
            (Self::Ready(ready), event) => Self::Ready(ready.apply(event)),
            (state, _) => state,
        }
    }
}

impl Ready {
    fn apply(mut self, event: DashboardEvent) -> Self {
        match event {
            DashboardEvent::TabSelected(tab) => {
                self.active_tab = tab;
            }
            DashboardEvent::OrderCreated(order) => {
                // Newest first, then show the list.
                self.orders.insert(0, order);
                self.active_tab = Tab::Orders;
            }
            DashboardEvent::ProfileUpdated(user) => {
                self.profile = user;
            }
            _ => {}
        }
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{NaiveDate, Utc};

    use safecart_core::{DeliverySlot, OrderId, OrderStatus, SubjectId, UserId};

    use super::*;
    use crate::api::OptionsCatalog;

    fn user() -> User {
        User {
            id: UserId::new(1),
            subject: SubjectId::parse("auth0|abc").unwrap(),
            username: "jane".to_owned(),
            name: "Jane Doe".to_owned(),
            email: "jane@example.com".to_owned(),
            contact_number: None,
            country: None,
            created_at: Utc::now(),
            last_login: Utc::now(),
        }
    }

    fn order(id: i32) -> Order {
        Order {
            id: OrderId::new(id),
            user_id: UserId::new(1),
            username: "jane".to_owned(),
            purchase_date: NaiveDate::from_ymd_opt(2099, 1, 5).unwrap(),
            delivery_time: DeliverySlot::TenAm,
            delivery_location: "Colombo".to_owned(),
            product_name: "Laptop".to_owned(),
            quantity: 1,
            message: None,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        }
    }

    fn payload() -> DashboardPayload {
        DashboardPayload {
            profile: user(),
            orders: vec![order(1)],
            options: OptionsCatalog {
                delivery_times: vec!["10 AM".to_owned()],
                locations: vec!["Colombo".to_owned()],
                products: vec!["Laptop".to_owned()],
            },
        }
    }

    fn ready_state() -> DashboardState {
        DashboardState::Loading.apply(DashboardEvent::BootstrapSucceeded(payload()))
    }

    #[test]
    fn test_bootstrap_success_lands_on_orders_tab() {
        let state = ready_state();
        match state {
            DashboardState::Ready(ready) => {
                assert_eq!(ready.active_tab, Tab::Orders);
                assert_eq!(ready.orders.len(), 1);
            }
            other => panic!("expected ready, got {other:?}"),
        }
    }

    #[test]
    fn test_bootstrap_failure_blocks_rendering() {
        let state =
            DashboardState::Loading.apply(DashboardEvent::BootstrapFailed("boom".to_owned()));
        assert!(matches!(state, DashboardState::Failed { ref message } if message == "boom"));
    }

    #[test]
    fn test_retry_restarts_bootstrap() {
        let state = DashboardState::Failed {
            message: "boom".to_owned(),
        }
        .apply(DashboardEvent::RetryRequested);
        assert!(matches!(state, DashboardState::Loading));
    }

    #[test]
    fn test_retry_ignored_while_loading() {
        let state = DashboardState::Loading.apply(DashboardEvent::RetryRequested);
        assert!(matches!(state, DashboardState::Loading));
    }

    #[test]
    fn test_order_created_prepends_and_switches_tab() {
        let state = ready_state()
            .apply(DashboardEvent::TabSelected(Tab::NewOrder))
            .apply(DashboardEvent::OrderCreated(order(2)));

        match state {
            DashboardState::Ready(ready) => {
                assert_eq!(ready.active_tab, Tab::Orders);
                assert_eq!(ready.orders.first().unwrap().id, OrderId::new(2));
                assert_eq!(ready.orders.len(), 2);
            }
            other => panic!("expected ready, got {other:?}"),
        }
    }

    #[test]
    fn test_profile_update_replaces_profile() {
        let mut updated = user();
        updated.country = Some("Sri Lanka".to_owned());
        let state = ready_state().apply(DashboardEvent::ProfileUpdated(updated));

        match state {
            DashboardState::Ready(ready) => {
                assert_eq!(ready.profile.country.as_deref(), Some("Sri Lanka"));
            }
            other => panic!("expected ready, got {other:?}"),
        }
    }

    #[test]
    fn test_tab_switch_ignored_while_loading() {
        let state = DashboardState::Loading.apply(DashboardEvent::TabSelected(Tab::Profile));
        assert!(matches!(state, DashboardState::Loading));
    }
}
