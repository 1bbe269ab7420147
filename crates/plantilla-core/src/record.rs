//! Player records as served by `GET /plantilla/getTodas` and `getPorId`.
//!
//! Wire shape:
//!
//! ```text
//! { "ref": { "@ref": { "id": "..." } },
//!   "data": { "nombre", "fecha", "direccion", "participacion_mundial",
//!             "numero_participaciones_jo", "lateralidad" } }
//! ```
//!
//! Every payload field is optional on the wire. Missing or `null` fields take
//! their `Default` value, so renderers always have something to interpolate.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Deserialize `null` as `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// One player: an opaque reference plus its data payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "ref", default, deserialize_with = "null_as_default")]
    pub reference: RecordRef,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: PlayerData,
}

impl Record {
    #[must_use]
    pub fn new(id: impl Into<String>, data: PlayerData) -> Self {
        Self {
            reference: RecordRef::new(id),
            data,
        }
    }

    /// The backend reference identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.reference.target.id
    }
}

/// `{ "@ref": { "id": ... } }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordRef {
    #[serde(rename = "@ref", default, deserialize_with = "null_as_default")]
    pub target: RefTarget,
}

impl RecordRef {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            target: RefTarget { id: id.into() },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefTarget {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerData {
    #[serde(deserialize_with = "null_as_default")]
    pub nombre: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fecha: Fecha,
    #[serde(deserialize_with = "null_as_default")]
    pub direccion: Direccion,
    /// World cup years, in the order the backend stores them.
    #[serde(deserialize_with = "null_as_default")]
    pub participacion_mundial: Vec<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub numero_participaciones_jo: u32,
    /// Dominant side, e.g. `diestro` or `zurdo`.
    #[serde(deserialize_with = "null_as_default")]
    pub lateralidad: String,
}

impl PlayerData {
    /// Participation years joined with `,` (`2014,2018,2022`).
    #[must_use]
    pub fn participation_years(&self) -> String {
        self.participacion_mundial
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Birth date as three integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fecha {
    #[serde(deserialize_with = "null_as_default")]
    pub dia: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub mes: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub anio: u32,
}

impl fmt::Display for Fecha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.dia, self.mes, self.anio)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Direccion {
    #[serde(deserialize_with = "null_as_default")]
    pub calle: String,
    #[serde(deserialize_with = "null_as_default")]
    pub localidad: String,
    #[serde(deserialize_with = "null_as_default")]
    pub provincia: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pais: String,
}

impl fmt::Display for Direccion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.calle, self.localidad, self.provincia, self.pais
        )
    }
}
