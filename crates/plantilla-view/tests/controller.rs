//! Controller flows against an in-process `tiny_http` gateway.

use plantilla_config::GatewayConfig;
use plantilla_core::{Combinator, CompositeField, MultiFieldFilter, NumericField, TextField};
use plantilla_gateway::{GatewayClient, GatewayError};
use plantilla_render::{
    PlayerTemplate, RecordingArticle, TITLE_ABOUT, TITLE_HOME, TITLE_LIST_ALL, TITLE_LIST_NAMES,
    TITLE_SHOW_ONE,
};
use plantilla_view::{GATEWAY_ALERT, PlantillaView, RecordingAlert};
use pretty_assertions::assert_eq;

const TODAS: &str = r#"{ "data": [
    {
        "ref": { "@ref": { "id": "ref persona 1" } },
        "data": {
            "nombre": "Lorena",
            "fecha": { "dia": 23, "mes": 12, "anio": 2000 },
            "direccion": { "calle": "Yabal", "localidad": "Jamilena", "provincia": "Jaen", "pais": "España" },
            "participacion_mundial": [2014, 2018, 2022],
            "numero_participaciones_jo": 3,
            "lateralidad": "diestro"
        }
    },
    {
        "ref": { "@ref": { "id": "ref persona 2" } },
        "data": {
            "nombre": "Jaime",
            "fecha": { "dia": 16, "mes": 4, "anio": 1990 },
            "direccion": { "calle": "Alamos", "localidad": "Jaen", "provincia": "Jaen", "pais": "España" },
            "participacion_mundial": [2010, 2014, 2018],
            "numero_participaciones_jo": 1,
            "lateralidad": "zurdo"
        }
    }
] }"#;

const LORENA: &str = r#"{
    "ref": { "@ref": { "id": "ref persona 1" } },
    "data": { "nombre": "Lorena" }
}"#;

fn serve(routes: Vec<(&'static str, &'static str)>) -> String {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind test gateway");
    let port = server
        .server_addr()
        .to_ip()
        .map(|addr| addr.port())
        .expect("ip listener");

    std::thread::spawn(move || {
        for request in server.incoming_requests() {
            let response = match routes.iter().find(|(path, _)| *path == request.url()) {
                Some((_, body)) => tiny_http::Response::from_string(*body),
                None => tiny_http::Response::from_string("not found").with_status_code(404),
            };
            let _ = request.respond(response);
        }
    });

    format!("http://127.0.0.1:{port}")
}

fn view(base_url: String) -> PlantillaView<RecordingArticle, RecordingAlert> {
    let gateway = GatewayClient::new(&GatewayConfig {
        base_url,
        ..Default::default()
    })
    .unwrap();
    PlantillaView::new(gateway, RecordingArticle::new(), RecordingAlert::default())
}

fn unreachable_base() -> String {
    let port = {
        let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
        server.server_addr().to_ip().unwrap().port()
    };
    format!("http://127.0.0.1:{port}")
}

/// Row titles in display order.
fn row_ids(body: &str) -> Vec<&str> {
    body.split(r#"<tr title=""#)
        .skip(1)
        .filter_map(|chunk| chunk.split('"').next())
        .collect()
}

#[tokio::test]
async fn home_shows_downloaded_message() {
    let mut view = view(serve(vec![("/plantilla/", r#"{"mensaje":"Hola"}"#)]));
    view.process_home().await.unwrap();
    assert_eq!(view.article().last(), Some((TITLE_HOME, "Hola")));
    assert!(view.alerts().messages.is_empty());
}

#[tokio::test]
async fn about_shows_author_block() {
    let mut view = view(serve(vec![(
        "/plantilla/acercade",
        r#"{"mensaje":"m","autor":"Ana","email":"ana@ujaen.es","fecha":"01/01/2023"}"#,
    )]));
    view.process_about().await.unwrap();
    let (title, body) = view.article().last().unwrap();
    assert_eq!(title, TITLE_ABOUT);
    assert!(body.contains("ana@ujaen.es"));
}

#[tokio::test]
async fn list_all_shows_every_row() {
    let mut view = view(serve(vec![("/plantilla/getTodas", TODAS)]));
    view.show_all_players().await.unwrap();
    let (title, body) = view.article().last().unwrap();
    assert_eq!(title, TITLE_LIST_ALL);
    assert_eq!(row_ids(body), ["ref persona 1", "ref persona 2"]);
}

#[tokio::test]
async fn names_only_uses_name_table() {
    let mut view = view(serve(vec![("/plantilla/getTodas", TODAS)]));
    view.show_names_only().await.unwrap();
    let (title, body) = view.article().last().unwrap();
    assert_eq!(title, TITLE_LIST_NAMES);
    assert!(!body.contains("Jamilena"));
}

#[tokio::test]
async fn alphabetical_puts_jaime_first() {
    let mut view = view(serve(vec![("/plantilla/getTodas", TODAS)]));
    view.show_alphabetically().await.unwrap();
    let (title, body) = view.article().last().unwrap();
    assert_eq!(title, TITLE_LIST_NAMES);
    assert_eq!(row_ids(body), ["ref persona 2", "ref persona 1"]);
}

#[tokio::test]
async fn sorts_by_each_field_kind() {
    let mut view = view(serve(vec![("/plantilla/getTodas", TODAS)]));

    view.show_by_field(TextField::Lateralidad).await.unwrap();
    assert_eq!(
        row_ids(view.article().last().unwrap().1),
        ["ref persona 1", "ref persona 2"]
    );

    let field = CompositeField::parse("fecha", "anio").unwrap();
    view.show_by_composite_field(field).await.unwrap();
    assert_eq!(
        row_ids(view.article().last().unwrap().1),
        ["ref persona 2", "ref persona 1"]
    );

    view.show_by_numeric_field(NumericField::NumeroParticipacionesJo)
        .await
        .unwrap();
    assert_eq!(
        row_ids(view.article().last().unwrap().1),
        ["ref persona 2", "ref persona 1"]
    );
}

#[tokio::test]
async fn show_one_fetches_by_id() {
    let mut view = view(serve(vec![("/plantilla/getPorId/ref%20persona%201", LORENA)]));
    view.show_one_player("ref persona 1").await.unwrap();
    let (title, body) = view.article().last().unwrap();
    assert_eq!(title, TITLE_SHOW_ONE);
    assert_eq!(row_ids(body), ["ref persona 1"]);
}

#[tokio::test]
async fn filters_by_name_and_by_multiple_fields() {
    let mut view = view(serve(vec![("/plantilla/getTodas", TODAS)]));

    view.show_by_name("Jaime").await.unwrap();
    assert_eq!(row_ids(view.article().last().unwrap().1), ["ref persona 2"]);

    let filter = MultiFieldFilter {
        nombre: "Lorena".into(),
        localidad: "Jaen".into(),
        participaciones: "7".into(),
        lateralidad: "ninguno".into(),
    };
    view.show_by_multiple(&filter, Combinator::All).await.unwrap();
    assert!(row_ids(view.article().last().unwrap().1).is_empty());

    view.show_by_multiple(&filter, Combinator::Any).await.unwrap();
    assert_eq!(
        row_ids(view.article().last().unwrap().1),
        ["ref persona 1", "ref persona 2"]
    );
}

#[tokio::test]
async fn template_renders_each_player() {
    let mut view = view(serve(vec![("/plantilla/getTodas", TODAS)]));
    let template = PlayerTemplate::new("<li>### NOMBRE ### (### LOCALIDAD ###)</li>");
    view.show_with_template(&template).await.unwrap();
    assert_eq!(
        view.article().last(),
        Some((TITLE_LIST_ALL, "<li>Lorena (Jamilena)</li><li>Jaime (Jaen)</li>"))
    );
}

#[tokio::test]
async fn unreachable_gateway_alerts_once_and_skips_render() {
    let mut view = view(unreachable_base());
    let err = view.show_all_players().await.unwrap_err();
    assert!(matches!(err, GatewayError::Http(_)));
    assert_eq!(view.alerts().messages, [GATEWAY_ALERT]);
    assert!(view.article().last().is_none());
}

#[tokio::test]
async fn error_status_alerts_and_skips_render() {
    let mut view = view(serve(vec![]));
    assert!(view.process_home().await.is_err());
    assert_eq!(view.alerts().messages.len(), 1);
    assert!(view.article().updates.is_empty());
}

#[tokio::test]
async fn error_status_with_json_body_still_alerts() {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind test gateway");
    let port = server.server_addr().to_ip().expect("ip listener").port();
    std::thread::spawn(move || {
        for request in server.incoming_requests() {
            let response = tiny_http::Response::from_string(r#"{"mensaje":"fallo interno"}"#)
                .with_status_code(500);
            let _ = request.respond(response);
        }
    });

    let mut view = view(format!("http://127.0.0.1:{port}"));
    let err = view.process_home().await.unwrap_err();
    assert!(matches!(err, GatewayError::Api { status: 500, .. }));
    assert_eq!(view.alerts().messages, [GATEWAY_ALERT]);
    assert!(view.article().last().is_none());
}
