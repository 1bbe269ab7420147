//! Views: compose table fragments or payload text and publish them into an
//! [`Article`] under a fixed title.

use plantilla_core::{AboutPayload, HomePayload, Record};
use serde_json::Value;

use crate::article::Article;
use crate::table::{footer, header, header_names, row, row_names};

pub const TITLE_HOME: &str = "Plantilla Home";
pub const TITLE_ABOUT: &str = "Plantilla Acerca de";
pub const TITLE_LIST_ALL: &str = "Listado de jugadores";
pub const TITLE_LIST_NAMES: &str = "Listado de jugadores por nombre";
pub const TITLE_SHOW_ONE: &str = "Jugador mostrado";

/// Full table of `records`.
pub fn list_all(article: &mut impl Article, records: &[Record]) {
    let mut msj = header();
    for record in records {
        msj.push_str(&row(record));
    }
    msj.push_str(&footer());
    tracing::debug!(rows = records.len(), "rendered player table");
    article.update(TITLE_LIST_ALL, &msj);
}

/// Name-only table of `records`.
pub fn list_names(article: &mut impl Article, records: &[Record]) {
    let mut msj = header_names();
    for record in records {
        msj.push_str(&row_names(record));
    }
    msj.push_str(&footer());
    tracing::debug!(rows = records.len(), "rendered name table");
    article.update(TITLE_LIST_NAMES, &msj);
}

/// Full table with a single row.
pub fn show_one(article: &mut impl Article, record: &Record) {
    let msj = format!("{}{}{}", header(), row(record), footer());
    article.update(TITLE_SHOW_ONE, &msj);
}

/// Show the home message, or the null-data message if `payload` is unusable.
pub fn show_home(article: &mut impl Article, payload: Option<&Value>) {
    let home = HomePayload::from_value(payload);
    article.update(TITLE_HOME, &home.mensaje);
}

/// Show the about block: message plus author, e-mail, and date.
pub fn show_about(article: &mut impl Article, payload: Option<&Value>) {
    let about = AboutPayload::from_value(payload);
    let msj = format!(
        "<div>\n<p>{}</p>\n<ul>\n<li><b>Autor/a</b>: {}</li>\n<li><b>E-mail</b>: {}</li>\n<li><b>Fecha</b>: {}</li>\n</ul>\n</div>\n",
        about.mensaje, about.autor, about.email, about.fecha
    );
    article.update(TITLE_ABOUT, &msj);
}
