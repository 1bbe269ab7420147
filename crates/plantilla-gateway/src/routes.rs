//! Routes served by the Plantilla microservice behind the gateway.

pub const HOME: &str = "/plantilla/";
pub const ABOUT: &str = "/plantilla/acercade";
pub const GET_ALL: &str = "/plantilla/getTodas";
const GET_BY_ID: &str = "/plantilla/getPorId/";

/// Route for a single record; `id` is percent-encoded.
#[must_use]
pub fn get_by_id(id: &str) -> String {
    format!("{GET_BY_ID}{}", urlencoding::encode(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_by_id_encodes_reference() {
        assert_eq!(get_by_id("359"), "/plantilla/getPorId/359");
        assert_eq!(
            get_by_id("ref persona 1"),
            "/plantilla/getPorId/ref%20persona%201"
        );
    }
}
