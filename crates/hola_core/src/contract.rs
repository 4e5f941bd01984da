use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const HOLA_STATUS_CODE: u16 = 200;
pub const CORS_ALLOW_ORIGIN_HEADER: &str = "Access-Control-Allow-Origin";
pub const CORS_ALLOW_ORIGIN_ANY: &str = "*";
pub const HOLA_BODY: &str = "¡Hola! from the lambda function.";

/// API Gateway proxy response shape.
///
/// Field order matches the wire order: `statusCode`, `headers`, `body`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

/// Builds the fixed greeting response with a permissive CORS origin.
pub fn hola_response() -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code: HOLA_STATUS_CODE,
        headers: BTreeMap::from([(
            CORS_ALLOW_ORIGIN_HEADER.to_string(),
            CORS_ALLOW_ORIGIN_ANY.to_string(),
        )]),
        body: HOLA_BODY.to_string(),
    }
}
