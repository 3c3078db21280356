//! Static options catalog.
//!
//! The enumerations the client uses to populate its selection widgets. The
//! slot list is also the authoritative membership set for submission-time
//! validation; locations and products are advisory only - submissions are
//! free text bounded by length.

use serde::Serialize;

use safecart_core::DeliverySlot;

/// Delivery locations offered by the service (Sri Lankan districts).
pub const LOCATIONS: [&str; 25] = [
    "Colombo",
    "Gampaha",
    "Kalutara",
    "Kandy",
    "Matale",
    "Nuwara Eliya",
    "Galle",
    "Matara",
    "Hambantota",
    "Jaffna",
    "Kilinochchi",
    "Mannar",
    "Vavuniya",
    "Mullaitivu",
    "Batticaloa",
    "Ampara",
    "Trincomalee",
    "Kurunegala",
    "Puttalam",
    "Anuradhapura",
    "Polonnaruwa",
    "Badulla",
    "Moneragala",
    "Ratnapura",
    "Kegalle",
];

/// Products offered by the service.
pub const PRODUCTS: [&str; 10] = [
    "Laptop",
    "Smartphone",
    "Tablet",
    "Headphones",
    "Smart Watch",
    "Gaming Console",
    "Camera",
    "Monitor",
    "Keyboard",
    "Mouse",
];

/// The `/options` response body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// Delivery slot labels, in catalog order.
    pub delivery_times: Vec<&'static str>,
    /// Delivery locations.
    pub locations: Vec<&'static str>,
    /// Product names.
    pub products: Vec<&'static str>,
}

/// Build the catalog response.
#[must_use]
pub fn options() -> Options {
    Options {
        delivery_times: DeliverySlot::labels(),
        locations: LOCATIONS.to_vec(),
        products: PRODUCTS.to_vec(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let opts = options();
        assert_eq!(opts.delivery_times, vec!["10 AM", "11 AM", "12 PM"]);
        assert_eq!(opts.locations.len(), 25);
        assert_eq!(opts.products.len(), 10);
        assert_eq!(opts.locations.first(), Some(&"Colombo"));
        assert_eq!(opts.products.first(), Some(&"Laptop"));
    }

    #[test]
    fn test_catalog_serializes_camel_case() {
        let json = serde_json::to_value(options()).unwrap();
        assert!(json.get("deliveryTimes").is_some());
        assert!(json.get("locations").is_some());
        assert!(json.get("products").is_some());
    }

    #[test]
    fn test_every_advertised_slot_is_submittable() {
        for label in options().delivery_times {
            assert!(label.parse::<DeliverySlot>().is_ok());
        }
    }
}
