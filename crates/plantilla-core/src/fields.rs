//! Typed accessors for the player payload fields that can drive a sort.
//!
//! Field names arrive as strings (CLI arguments, UI events). Parsing them
//! into these enums up front means an unknown name fails with a
//! [`CoreError`] instead of comparing missing values.

use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;
use crate::record::{Direccion, Fecha, PlayerData};

// ---------------------------------------------------------------------------
// TextField
// ---------------------------------------------------------------------------

/// String-valued top-level fields of [`PlayerData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Nombre,
    Lateralidad,
}

impl TextField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nombre => "nombre",
            Self::Lateralidad => "lateralidad",
        }
    }

    #[must_use]
    pub fn get(self, data: &PlayerData) -> &str {
        match self {
            Self::Nombre => &data.nombre,
            Self::Lateralidad => &data.lateralidad,
        }
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nombre" => Ok(Self::Nombre),
            "lateralidad" => Ok(Self::Lateralidad),
            _ => Err(CoreError::UnknownField {
                field: s.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// NumericField
// ---------------------------------------------------------------------------

/// Number-valued top-level fields of [`PlayerData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    NumeroParticipacionesJo,
}

impl NumericField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NumeroParticipacionesJo => "numero_participaciones_jo",
        }
    }

    #[must_use]
    pub fn get(self, data: &PlayerData) -> f64 {
        match self {
            Self::NumeroParticipacionesJo => f64::from(data.numero_participaciones_jo),
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NumericField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "numero_participaciones_jo" => Ok(Self::NumeroParticipacionesJo),
            _ => Err(CoreError::UnknownField {
                field: s.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// CompositeField
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePart {
    Dia,
    Mes,
    Anio,
}

impl DatePart {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dia => "dia",
            Self::Mes => "mes",
            Self::Anio => "anio",
        }
    }

    #[must_use]
    pub const fn get(self, fecha: &Fecha) -> u32 {
        match self {
            Self::Dia => fecha.dia,
            Self::Mes => fecha.mes,
            Self::Anio => fecha.anio,
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "dia" => Some(Self::Dia),
            "mes" => Some(Self::Mes),
            "anio" => Some(Self::Anio),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressPart {
    Calle,
    Localidad,
    Provincia,
    Pais,
}

impl AddressPart {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calle => "calle",
            Self::Localidad => "localidad",
            Self::Provincia => "provincia",
            Self::Pais => "pais",
        }
    }

    #[must_use]
    pub fn get(self, direccion: &Direccion) -> &str {
        match self {
            Self::Calle => &direccion.calle,
            Self::Localidad => &direccion.localidad,
            Self::Provincia => &direccion.provincia,
            Self::Pais => &direccion.pais,
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "calle" => Some(Self::Calle),
            "localidad" => Some(Self::Localidad),
            "provincia" => Some(Self::Provincia),
            "pais" => Some(Self::Pais),
            _ => None,
        }
    }
}

/// A nested field: `fecha.<part>` or `direccion.<part>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompositeField {
    Fecha(DatePart),
    Direccion(AddressPart),
}

impl CompositeField {
    /// Resolve a `(field, subfield)` pair such as `("direccion", "localidad")`.
    ///
    /// # Errors
    ///
    /// [`CoreError::UnknownField`] when `field` is not a nested field,
    /// [`CoreError::UnknownSubfield`] when it has no such `subfield`.
    pub fn parse(field: &str, subfield: &str) -> Result<Self, CoreError> {
        let unknown_subfield = || CoreError::UnknownSubfield {
            field: field.to_string(),
            subfield: subfield.to_string(),
        };
        match field {
            "fecha" => DatePart::parse(subfield)
                .map(Self::Fecha)
                .ok_or_else(unknown_subfield),
            "direccion" => AddressPart::parse(subfield)
                .map(Self::Direccion)
                .ok_or_else(unknown_subfield),
            _ => Err(CoreError::UnknownField {
                field: field.to_string(),
            }),
        }
    }
}

impl fmt::Display for CompositeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fecha(part) => write!(f, "fecha.{}", part.as_str()),
            Self::Direccion(part) => write!(f, "direccion.{}", part.as_str()),
        }
    }
}
