use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Which services an altar server is available for.
/// Flags the client never sent stay absent on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    #[serde(rename = "sabado", skip_serializing_if = "Option::is_none")]
    pub saturday: Option<bool>,
    #[serde(rename = "domingo", skip_serializing_if = "Option::is_none")]
    pub sunday: Option<bool>,
    #[serde(rename = "quartaFeira", skip_serializing_if = "Option::is_none")]
    pub wednesday: Option<bool>,
    #[serde(rename = "primeiraSextaFeira", skip_serializing_if = "Option::is_none")]
    pub first_friday: Option<bool>,
}

/// A stored roster record as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coroinha {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "nomeCompleto")]
    pub full_name: Option<String>,
    #[serde(rename = "nomeResponsavel")]
    pub guardian_name: Option<String>,
    #[serde(rename = "contatoResponsavel")]
    pub guardian_contact: Option<String>,
    /// Serialized as `YYYY-MM-DD`
    #[serde(rename = "dataNascimento")]
    pub date_of_birth: NaiveDate,
    #[serde(rename = "disponibilidade")]
    pub availability: Availability,
}

/// Body of `POST /coroinhas` and `PUT /coroinhas/:id`.
///
/// Every field is optional on the wire and keeps three states: absent
/// (`None`), explicit `null` (`Some(None)`) and a value. On update only the
/// fields present replace the stored values, `null` included.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoroinhaRequest {
    #[serde(
        rename = "nomeCompleto",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub full_name: Option<Option<String>>,
    #[serde(
        rename = "nomeResponsavel",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub guardian_name: Option<Option<String>>,
    #[serde(
        rename = "contatoResponsavel",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub guardian_contact: Option<Option<String>>,
    /// Birth date in `DD/MM/YY` form
    #[serde(
        rename = "dataNascimento",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_of_birth: Option<Option<String>>,
    #[serde(
        rename = "disponibilidade",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub availability: Option<Option<Availability>>,
}

/// Wraps whatever is on the wire, `null` included, in `Some`.
/// Paired with `#[serde(default)]` an absent field stays `None`.
fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Body used for confirmations and every error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
