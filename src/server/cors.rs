//! CORS headers.

use crate::server::response::HttpResponse;

/// Allow every origin to call the `GET`/`POST` API.
///
/// Note that browsers refuse credentialed requests when the allowed origin
/// is the `*` wildcard.
pub fn set_cors_headers(response: &mut HttpResponse) {
    response.set_header("Access-Control-Allow-Origin", "*");
    response.set_header("Access-Control-Allow-Methods", "GET, POST");
    response.set_header("Access-Control-Allow-Headers", "X-Requested-With,content-type");
    response.set_header("Access-Control-Allow-Credentials", "true");
}
