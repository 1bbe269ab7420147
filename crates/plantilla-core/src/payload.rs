//! Home and "about" payloads, plus the [`NullData`] sentinel that replaces
//! them whenever the downloaded body is absent or malformed.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fallback content shown when the gateway payload cannot be used.
pub struct NullData;

impl NullData {
    pub const MENSAJE: &'static str = "Datos Descargados No válidos";
    pub const AUTOR: &'static str = "";
    pub const EMAIL: &'static str = "";
    pub const FECHA: &'static str = "";
}

/// Body of `GET /plantilla/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomePayload {
    pub mensaje: String,
}

impl HomePayload {
    #[must_use]
    pub fn null() -> Self {
        Self {
            mensaje: NullData::MENSAJE.to_string(),
        }
    }

    /// Validate a raw body. Anything that is not an object carrying
    /// `mensaje` collapses to [`HomePayload::null`].
    #[must_use]
    pub fn from_value(value: Option<&Value>) -> Self {
        let Some(map) = value.and_then(Value::as_object) else {
            return Self::null();
        };
        match map.get("mensaje") {
            Some(mensaje) => Self {
                mensaje: text_of(mensaje),
            },
            None => Self::null(),
        }
    }
}

/// Body of `GET /plantilla/acercade`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutPayload {
    pub mensaje: String,
    pub autor: String,
    pub email: String,
    pub fecha: String,
}

impl AboutPayload {
    #[must_use]
    pub fn null() -> Self {
        Self {
            mensaje: NullData::MENSAJE.to_string(),
            autor: NullData::AUTOR.to_string(),
            email: NullData::EMAIL.to_string(),
            fecha: NullData::FECHA.to_string(),
        }
    }

    /// All four keys must be present; otherwise the whole payload is
    /// replaced by [`AboutPayload::null`].
    #[must_use]
    pub fn from_value(value: Option<&Value>) -> Self {
        value
            .and_then(Value::as_object)
            .and_then(Self::from_map)
            .unwrap_or_else(Self::null)
    }

    fn from_map(map: &Map<String, Value>) -> Option<Self> {
        Some(Self {
            mensaje: text_of(map.get("mensaje")?),
            autor: text_of(map.get("autor")?),
            email: text_of(map.get("email")?),
            fecha: text_of(map.get("fecha")?),
        })
    }
}

/// Strings are shown verbatim; any other JSON value by its JSON text.
fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
