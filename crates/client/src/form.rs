//! Order form view-model.
//!
//! Field edits and submission outcomes are actions over an immutable state
//! value. The pre-submit check mirrors the server's date rules purely as a
//! UX convenience - the server re-validates authoritatively, and a server
//! rejection lands in `error` without losing any entered data.

use chrono::{Datelike, NaiveDate, Weekday};

use safecart_core::OrderPayload;

/// Message length budget mirrored from the server's default policy, used
/// only for the remaining-characters hint.
const MESSAGE_BUDGET: usize = 500;

/// The order form's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderFormState {
    /// Requested delivery date, `YYYY-MM-DD` (as typed).
    pub purchase_date: String,
    /// Selected delivery slot label.
    pub delivery_time: String,
    /// Selected delivery location.
    pub delivery_location: String,
    /// Selected product.
    pub product_name: String,
    /// Quantity, kept numeric; unparseable input snaps back to 1.
    pub quantity: u32,
    /// Optional message.
    pub message: String,
    /// Inline error shown above the form, if any.
    pub error: Option<String>,
    /// Success banner, if the last submission landed.
    pub success: Option<String>,
}

impl Default for OrderFormState {
    fn default() -> Self {
        Self {
            purchase_date: String::new(),
            delivery_time: String::new(),
            delivery_location: String::new(),
            product_name: String::new(),
            quantity: 1,
            message: String::new(),
            error: None,
            success: None,
        }
    }
}

/// User actions and submission outcomes on the form.
#[derive(Debug, Clone)]
pub enum FormAction {
    /// The date input changed.
    PurchaseDateChanged(String),
    /// The slot select changed.
    DeliveryTimeChanged(String),
    /// The location select changed.
    LocationChanged(String),
    /// The product select changed.
    ProductChanged(String),
    /// The quantity input changed (raw text).
    QuantityChanged(String),
    /// The message textarea changed.
    MessageChanged(String),
    /// The server accepted the order.
    SubmitSucceeded,
    /// The server (or the pre-check) rejected the order.
    SubmitFailed(String),
}

impl OrderFormState {
    /// Apply an action, producing the next state.
    #[must_use]
    pub fn apply(mut self, action: FormAction) -> Self {
        match action {
            FormAction::PurchaseDateChanged(value) => self.purchase_date = value,
            FormAction::DeliveryTimeChanged(value) => self.delivery_time = value,
            FormAction::LocationChanged(value) => self.delivery_location = value,
            FormAction::ProductChanged(value) => self.product_name = value,
            FormAction::QuantityChanged(raw) => {
                self.quantity = raw.trim().parse().unwrap_or(1);
            }
            FormAction::MessageChanged(value) => self.message = value,
            FormAction::SubmitSucceeded => {
                // Reset to a pristine form with only the success banner kept.
                return Self {
                    success: Some("Order created successfully!".to_owned()),
                    ..Self::default()
                };
            }
            FormAction::SubmitFailed(message) => {
                self.error = Some(message);
                self.success = None;
            }
        }
        self
    }

    /// Client-side date pre-check, run before submitting.
    ///
    /// Returns the message to show inline, or `None` to proceed. The server
    /// applies the same rules authoritatively; this only spares a round
    /// trip for the two most common mistakes.
    #[must_use]
    pub fn precheck(&self, today: NaiveDate) -> Option<String> {
        let Ok(date) = NaiveDate::parse_from_str(self.purchase_date.trim(), "%Y-%m-%d") else {
            // Unparseable input falls through to the server's report.
            return None;
        };

        if date.weekday() == Weekday::Sun {
            return Some(
                "Delivery is not available on Sundays. Please select another date.".to_owned(),
            );
        }

        if date < today {
            return Some("Purchase date cannot be in the past.".to_owned());
        }

        None
    }

    /// The submission payload for the current fields.
    #[must_use]
    pub fn to_payload(&self) -> OrderPayload {
        OrderPayload {
            purchase_date: Some(self.purchase_date.clone()),
            delivery_time: Some(self.delivery_time.clone()),
            delivery_location: Some(self.delivery_location.clone()),
            product_name: Some(self.product_name.clone()),
            quantity: serde_json::Value::from(self.quantity),
            message: if self.message.trim().is_empty() {
                None
            } else {
                Some(self.message.clone())
            },
        }
    }

    /// Characters left in the message budget, for the form hint.
    #[must_use]
    pub fn message_chars_left(&self) -> usize {
        MESSAGE_BUDGET.saturating_sub(self.message.chars().count())
    }
}
