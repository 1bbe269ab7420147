//! Table fragments for player listings.
//!
//! Values are interpolated verbatim; the gateway is trusted to serve
//! display-ready text.

use plantilla_core::Record;

const TABLE_OPEN: &str = r#"<table class="listado-plantilla">"#;
const FOOTER: &str = "</tbody></table>";

/// Opening of the full six-column player table.
#[must_use]
pub fn header() -> String {
    format!(
        "{TABLE_OPEN}<thead><th>Nombre</th><th>Fecha</th><th>Direccion</th>\
         <th>Años participacion mundial</th><th>Numero de participaciones</th>\
         <th>Lateralidad</th></thead><tbody>"
    )
}

/// Opening of the single-column name table.
#[must_use]
pub fn header_names() -> String {
    format!("{TABLE_OPEN}<thead><th>Nombre</th></thead><tbody>")
}

/// One `<tr>` with every column of [`header`]. The row title carries the
/// record id.
#[must_use]
pub fn row(record: &Record) -> String {
    let data = &record.data;
    format!(
        r#"<tr title="{id}"><td>{nombre}</td><td>{fecha}</td><td>{direccion}</td><td>{mundial}</td><td>{jo}</td><td>{lateralidad}</td></tr>"#,
        id = record.id(),
        nombre = data.nombre,
        fecha = data.fecha,
        direccion = data.direccion,
        mundial = data.participation_years(),
        jo = data.numero_participaciones_jo,
        lateralidad = data.lateralidad,
    )
}

/// One `<tr>` with just the player name.
#[must_use]
pub fn row_names(record: &Record) -> String {
    format!(
        r#"<tr title="{}"><td>{}</td></tr>"#,
        record.id(),
        record.data.nombre
    )
}

#[must_use]
pub fn footer() -> String {
    FOOTER.to_string()
}
