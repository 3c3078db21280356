//! Delivery time slot enumeration.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a string is not a recognized delivery slot.
#[derive(thiserror::Error, Debug, Clone)]
#[error("invalid delivery time: {0}")]
pub struct SlotError(pub String);

/// One of the fixed delivery time windows.
///
/// The wire format uses the human-readable labels the original catalog exposes
/// (`"10 AM"`, `"11 AM"`, `"12 PM"`). Membership in this set is the
/// authoritative check for order submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliverySlot {
    /// 10 AM - 11 AM window.
    #[serde(rename = "10 AM")]
    TenAm,
    /// 11 AM - 12 PM window.
    #[serde(rename = "11 AM")]
    ElevenAm,
    /// 12 PM - 1 PM window.
    #[serde(rename = "12 PM")]
    TwelvePm,
}

impl DeliverySlot {
    /// All slots, in catalog order.
    pub const ALL: [Self; 3] = [Self::TenAm, Self::ElevenAm, Self::TwelvePm];

    /// The catalog label for this slot.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TenAm => "10 AM",
            Self::ElevenAm => "11 AM",
            Self::TwelvePm => "12 PM",
        }
    }

    /// The catalog labels for every slot, in order.
    #[must_use]
    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(Self::as_str).collect()
    }
}

impl fmt::Display for DeliverySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DeliverySlot {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "10 AM" => Ok(Self::TenAm),
            "11 AM" => Ok(Self::ElevenAm),
            "12 PM" => Ok(Self::TwelvePm),
            other => Err(SlotError(other.to_owned())),
        }
    }
}

// SQLx support (with postgres feature): stored as TEXT using the catalog label.
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for DeliverySlot {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for DeliverySlot {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(s.parse()?)
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for DeliverySlot {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_every_label_parses_back() {
        for slot in DeliverySlot::ALL {
            let parsed: DeliverySlot = slot.as_str().parse().unwrap();
            assert_eq!(parsed, slot);
        }
    }

    #[test]
    fn test_unknown_label_rejected() {
        assert!("9 AM".parse::<DeliverySlot>().is_err());
        assert!("10 am".parse::<DeliverySlot>().is_err());
        assert!("".parse::<DeliverySlot>().is_err());
    }

    #[test]
    fn test_serde_uses_catalog_labels() {
        let json = serde_json::to_string(&DeliverySlot::TenAm).unwrap();
        assert_eq!(json, "\"10 AM\"");

        let parsed: DeliverySlot = serde_json::from_str("\"12 PM\"").unwrap();
        assert_eq!(parsed, DeliverySlot::TwelvePm);
    }

    #[test]
    fn test_labels_in_catalog_order() {
        assert_eq!(DeliverySlot::labels(), vec!["10 AM", "11 AM", "12 PM"]);
    }
}
