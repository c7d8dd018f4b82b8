//! Shared wire DTOs for the client/API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the JSON the MediLocate API returns so serde decoding
//! stays lossless. Fields the server may omit are `Option` with
//! `#[serde(default)]`; nothing here is patched client-side after decoding.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::error::RoleError;

/// Dashboard discriminator carried by every account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Pharmacy operator; manages inventory.
    Pharmacy,
    /// Individual user; searches for medicine.
    Individual,
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "pharmacy" => Ok(Self::Pharmacy),
            "individual" => Ok(Self::Individual),
            other => Err(RoleError::Unrecognized(other.to_owned())),
        }
    }
}

/// Account profile as returned by `GET /api/profile` and `POST /login`.
///
/// A snapshot: the session replaces it wholesale on every successful fetch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Server-assigned account id.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    /// Full name, or pharmacy name for operators.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Explicit role string, when the server sends one.
    #[serde(default)]
    pub role: Option<String>,
    /// Legacy role flag; `role` wins when both are present.
    #[serde(default)]
    pub is_pharmacy: Option<bool>,
    /// Geocoded registration address.
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    /// ISO 8601 creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl UserProfile {
    /// Resolve the account role.
    ///
    /// An explicit `role` string wins over `is_pharmacy`.
    ///
    /// # Errors
    ///
    /// Returns [`RoleError`] when the role string is unknown or when the
    /// profile carries neither field.
    pub fn role(&self) -> Result<Role, RoleError> {
        match (self.role.as_deref(), self.is_pharmacy) {
            (Some(raw), _) => raw.parse(),
            (None, Some(true)) => Ok(Role::Pharmacy),
            (None, Some(false)) => Ok(Role::Individual),
            (None, None) => Err(RoleError::Missing),
        }
    }
}

/// Body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful `POST /login` response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    /// Bearer credential. The backend may name it `access_token`.
    #[serde(alias = "access_token")]
    pub token: String,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// Body of `POST /api/register`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub is_pharmacy: bool,
    pub address_line: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

/// Generic `{ "message": ... }` success body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `POST /api/search_medicine`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub address: String,
    pub medicine_name: String,
}

/// One pharmacy match, already sorted by distance server-side.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SearchResult {
    pub details: PharmacyDetails,
    #[serde(default)]
    pub medicines: Vec<FoundMedicine>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PharmacyDetails {
    pub pharmacy_name: String,
    pub pharmacy_address: String,
    pub distance_km: f64,
}

/// Aggregated stock for one medicine at one pharmacy.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FoundMedicine {
    pub medicine_name: String,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub stock: i64,
    /// Lowest batch price.
    pub price: f64,
    /// Earliest batch expiry, `YYYY-MM-DD`.
    pub expiry_date: String,
}

/// `{ "results": [...] }` envelope used by both search endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResultsEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        serde_json::Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("expected integer string, got {text:?}"))),
        _ => Err(D::Error::custom("expected number")),
    }
}
