//! Terminal stand-ins for the page: the article goes to stdout, alerts to
//! stderr.

use plantilla_render::Article;
use plantilla_view::Alert;
use serde::Serialize;

use crate::cli::OutputFormat;

#[derive(Debug, Serialize)]
struct ArticleResponse<'a> {
    title: &'a str,
    body: &'a str,
}

/// Render one article update in the requested format.
pub fn render(title: &str, body: &str, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Raw => Ok(format!("{title}\n\n{body}")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&ArticleResponse { title, body })?),
    }
}

/// Prints each update to stdout.
pub struct StdoutArticle {
    format: OutputFormat,
}

impl StdoutArticle {
    pub const fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl Article for StdoutArticle {
    fn update(&mut self, title: &str, html_body: &str) {
        match render(title, html_body, self.format) {
            Ok(rendered) => println!("{rendered}"),
            Err(error) => tracing::error!(%error, "failed to render article"),
        }
    }
}

/// Prints alerts to stderr.
pub struct StderrAlert;

impl Alert for StderrAlert {
    fn alert(&mut self, message: &str) {
        eprintln!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn raw_puts_title_above_body() {
        let out = render("Plantilla Home", "<p>hola</p>", OutputFormat::Raw).unwrap();
        assert_eq!(out, "Plantilla Home\n\n<p>hola</p>");
    }

    #[test]
    fn json_has_title_and_body() {
        let out = render("Jugador mostrado", "<table></table>", OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["title"], "Jugador mostrado");
        assert_eq!(value["body"], "<table></table>");
    }
}
