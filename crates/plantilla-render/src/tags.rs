//! `### TAG ###` templates.
//!
//! A template is free-form HTML with placeholders such as `### NOMBRE ###`.
//! Every occurrence of every placeholder is replaced with the matching value
//! of a record; unknown `###` markers are left alone.

use plantilla_core::Record;

/// A placeholder understood by [`substitute_tags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateTag {
    Id,
    Nombre,
    Fecha,
    Dia,
    Mes,
    Anio,
    Direccion,
    Calle,
    Localidad,
    Provincia,
    Pais,
    ParticipacionMundial,
    NumeroParticipacionesJjoo,
    Lateralidad,
}

impl TemplateTag {
    pub const ALL: [Self; 14] = [
        Self::Id,
        Self::Nombre,
        Self::Fecha,
        Self::Dia,
        Self::Mes,
        Self::Anio,
        Self::Direccion,
        Self::Calle,
        Self::Localidad,
        Self::Provincia,
        Self::Pais,
        Self::ParticipacionMundial,
        Self::NumeroParticipacionesJjoo,
        Self::Lateralidad,
    ];

    /// The literal marker as written in templates.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Id => "### ID ###",
            Self::Nombre => "### NOMBRE ###",
            Self::Fecha => "### FECHA ###",
            Self::Dia => "### DIA ###",
            Self::Mes => "### MES ###",
            Self::Anio => "### ANIO ###",
            Self::Direccion => "### DIRECCION ###",
            Self::Calle => "### CALLE ###",
            Self::Localidad => "### LOCALIDAD ###",
            Self::Provincia => "### PROVINCIA ###",
            Self::Pais => "### PAIS ###",
            Self::ParticipacionMundial => "### PARTICIPACION MUNDIAL ###",
            Self::NumeroParticipacionesJjoo => "### NUMERO_PARTICIPACIONES_JJOO ###",
            Self::Lateralidad => "### LATERALIDAD ###",
        }
    }

    #[must_use]
    pub fn value(self, record: &Record) -> String {
        let data = &record.data;
        match self {
            Self::Id => record.id().to_string(),
            Self::Nombre => data.nombre.clone(),
            Self::Fecha => data.fecha.to_string(),
            Self::Dia => data.fecha.dia.to_string(),
            Self::Mes => data.fecha.mes.to_string(),
            Self::Anio => data.fecha.anio.to_string(),
            Self::Direccion => data.direccion.to_string(),
            Self::Calle => data.direccion.calle.clone(),
            Self::Localidad => data.direccion.localidad.clone(),
            Self::Provincia => data.direccion.provincia.clone(),
            Self::Pais => data.direccion.pais.clone(),
            Self::ParticipacionMundial => data.participation_years(),
            Self::NumeroParticipacionesJjoo => data.numero_participaciones_jo.to_string(),
            Self::Lateralidad => data.lateralidad.clone(),
        }
    }
}

/// Replace every known placeholder in `template` with values from `record`.
#[must_use]
pub fn substitute_tags(template: &str, record: &Record) -> String {
    TemplateTag::ALL
        .iter()
        .fold(template.to_string(), |acc, tag| {
            acc.replace(tag.placeholder(), &tag.value(record))
        })
}

/// A reusable template body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerTemplate {
    body: String,
}

impl PlayerTemplate {
    #[must_use]
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn render(&self, record: &Record) -> String {
        substitute_tags(&self.body, record)
    }

    /// Render each record in order and concatenate the results.
    #[must_use]
    pub fn render_all(&self, records: &[Record]) -> String {
        records.iter().map(|record| self.render(record)).collect()
    }
}
