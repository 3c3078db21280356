//! Submission-time validation for orders and profile edits.
//!
//! Validation is authoritative here regardless of any client-side pre-check.
//! Each field runs its rule chain in order and stops at the first failure for
//! that field; failures across fields are collected and returned together so
//! the client can highlight every offending field at once.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use safecart_core::sanitize::clean_text;
use safecart_core::{DeliverySlot, OrderPayload, ProfileUpdate};

use crate::config::OrderPolicy;

/// Contact numbers must carry this many digits (inclusive bounds).
const CONTACT_DIGITS: (usize, usize) = (7, 15);

/// Country length bounds after trimming (inclusive).
const COUNTRY_LEN: (usize, usize) = (2, 50);

/// A single field-level validation failure.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    /// Wire name of the offending field.
    pub field: String,
    /// Human-readable reason.
    pub message: String,
}

impl FieldError {
    /// Create a field error.
    #[must_use]
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_owned(),
            message: message.into(),
        }
    }
}

/// An order submission that passed every rule, with untrusted text already
/// sanitized. This is the only shape the order store accepts.
#[derive(Debug, Clone)]
pub struct ValidOrder {
    pub purchase_date: NaiveDate,
    pub delivery_time: DeliverySlot,
    pub delivery_location: String,
    pub product_name: String,
    pub quantity: i32,
    pub message: Option<String>,
}

/// Validate a candidate order against `policy`, comparing dates at
/// local-day granularity against `today`.
///
/// # Errors
///
/// Returns every field failure collected, in rule order.
pub fn validate_order(
    payload: &OrderPayload,
    today: NaiveDate,
    policy: &OrderPolicy,
) -> Result<ValidOrder, Vec<FieldError>> {
    let mut errors = Vec::new();

    let purchase_date = match validate_purchase_date(
        payload.purchase_date.as_deref(),
        today,
        policy.non_delivery_day,
    ) {
        Ok(date) => Some(date),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    let delivery_time = match validate_slot(payload.delivery_time.as_deref()) {
        Ok(slot) => Some(slot),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    let delivery_location = match validate_text_field(
        "deliveryLocation",
        "Delivery location",
        payload.delivery_location.as_deref(),
        policy.location_len,
    ) {
        Ok(text) => Some(text),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    let product_name = match validate_text_field(
        "productName",
        "Product name",
        payload.product_name.as_deref(),
        policy.product_len,
    ) {
        Ok(text) => Some(text),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    let quantity = match validate_quantity(&payload.quantity, policy) {
        Ok(quantity) => Some(quantity),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    let message = match validate_message(payload.message.as_deref(), policy.max_message_chars) {
        Ok(message) => message,
        Err(e) => {
            errors.push(e);
            None
        }
    };

    // Every None pushed an error above, so the full tuple is Some exactly
    // when no errors were collected.
    match (
        purchase_date,
        delivery_time,
        delivery_location,
        product_name,
        quantity,
    ) {
        (
            Some(purchase_date),
            Some(delivery_time),
            Some(delivery_location),
            Some(product_name),
            Some(quantity),
        ) if errors.is_empty() => Ok(ValidOrder {
            purchase_date,
            delivery_time,
            delivery_location,
            product_name,
            quantity,
            message,
        }),
        _ => Err(errors),
    }
}

/// Validate a profile edit, returning a cleaned copy.
///
/// # Errors
///
/// Returns every field failure collected.
pub fn validate_profile_update(update: &ProfileUpdate) -> Result<ProfileUpdate, Vec<FieldError>> {
    let mut errors = Vec::new();

    let contact_number = match update.contact_number.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => {
            if looks_like_phone_number(raw) {
                Some(raw.to_owned())
            } else {
                errors.push(FieldError::new(
                    "contactNumber",
                    "Contact number must be a valid phone number",
                ));
                None
            }
        }
    };

    let country = match update.country.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => {
            let len = raw.chars().count();
            if (COUNTRY_LEN.0..=COUNTRY_LEN.1).contains(&len) {
                Some(clean_text(raw))
            } else {
                errors.push(FieldError::new(
                    "country",
                    format!(
                        "Country must be {}-{} characters",
                        COUNTRY_LEN.0, COUNTRY_LEN.1
                    ),
                ));
                None
            }
        }
    };

    if errors.is_empty() {
        Ok(ProfileUpdate {
            contact_number,
            country,
        })
    } else {
        Err(errors)
    }
}

// =============================================================================
// Per-field rule chains
// =============================================================================

fn validate_purchase_date(
    raw: Option<&str>,
    today: NaiveDate,
    non_delivery_day: Weekday,
) -> Result<NaiveDate, FieldError> {
    let invalid = || FieldError::new("purchaseDate", "Purchase date must be a valid date");

    let raw = raw.map(str::trim).filter(|s| !s.is_empty()).ok_or_else(invalid)?;
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| invalid())?;

    if date < today {
        return Err(FieldError::new(
            "purchaseDate",
            "Purchase date cannot be in the past",
        ));
    }

    if date.weekday() == non_delivery_day {
        return Err(FieldError::new(
            "purchaseDate",
            format!("Delivery not available on {}s", day_name(non_delivery_day)),
        ));
    }

    Ok(date)
}

fn validate_slot(raw: Option<&str>) -> Result<DeliverySlot, FieldError> {
    raw.unwrap_or_default()
        .parse::<DeliverySlot>()
        .map_err(|_| FieldError::new("deliveryTime", "Invalid delivery time"))
}

fn validate_text_field(
    field: &str,
    label: &str,
    raw: Option<&str>,
    (min, max): (usize, usize),
) -> Result<String, FieldError> {
    let trimmed = raw.unwrap_or_default().trim();
    let len = trimmed.chars().count();
    if (min..=max).contains(&len) {
        Ok(clean_text(trimmed))
    } else {
        Err(FieldError::new(
            field,
            format!("{label} must be {min}-{max} characters"),
        ))
    }
}

fn validate_quantity(raw: &serde_json::Value, policy: &OrderPolicy) -> Result<i32, FieldError> {
    let out_of_bounds = || {
        FieldError::new(
            "quantity",
            format!(
                "Quantity must be an integer between {} and {}",
                policy.min_quantity, policy.max_quantity
            ),
        )
    };

    // Accept JSON integers and string-encoded integers; anything fractional
    // or non-numeric fails.
    let quantity = match raw {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
    .ok_or_else(out_of_bounds)?;

    if (policy.min_quantity..=policy.max_quantity).contains(&quantity) {
        i32::try_from(quantity).map_err(|_| out_of_bounds())
    } else {
        Err(out_of_bounds())
    }
}

fn validate_message(raw: Option<&str>, max_chars: usize) -> Result<Option<String>, FieldError> {
    let Some(trimmed) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    if trimmed.chars().count() > max_chars {
        return Err(FieldError::new(
            "message",
            format!("Message must be at most {max_chars} characters"),
        ));
    }

    Ok(Some(clean_text(trimmed)))
}

/// Whether a trimmed string plausibly denotes a phone number: an optional
/// leading `+`, digits, and common separators, with a sane digit count.
fn looks_like_phone_number(raw: &str) -> bool {
    let mut digits = 0usize;
    for (i, c) in raw.chars().enumerate() {
        match c {
            '0'..='9' => digits += 1,
            '+' if i == 0 => {}
            ' ' | '-' | '(' | ')' | '.' => {}
            _ => return false,
        }
    }
    (CONTACT_DIGITS.0..=CONTACT_DIGITS.1).contains(&digits)
}

fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
