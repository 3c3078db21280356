//! SafeCart client library.
//!
//! The form-driven single-page client, expressed as a library: an API
//! client that speaks the SafeCart wire format, a credential store for
//! session bootstrap, and pure view-model state machines for the dashboard,
//! the order form, and the orders list. Rendering is out of scope - every
//! state here is an explicit immutable value transformed by user actions,
//! so the whole surface is testable without a browser.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod dashboard;
pub mod form;
pub mod orders_view;
pub mod session;

pub use api::{ApiClient, ClientError, DashboardPayload, FieldIssue, OptionsCatalog};
pub use dashboard::{DashboardEvent, DashboardState, Ready, Tab};
pub use form::{FormAction, OrderFormState};
pub use orders_view::{OrderFilter, OrdersView, SortBy, SortOrder};
pub use session::{CredentialStore, MemoryCredentialStore, Session};
