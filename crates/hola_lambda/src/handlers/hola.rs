use hola_core::contract::{hola_response, ApiGatewayResponse};
use lambda_runtime::{Context, Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

pub const HANDLER_LOG_LINE: &str = "In lambda handler.";

/// Answers any invocation with the fixed greeting.
///
/// Neither the event nor the context is inspected, so every input (including
/// `null`) produces the same response.
pub fn handle_hola_event(_event: &Value, _context: &Context) -> ApiGatewayResponse {
    info!("{HANDLER_LOG_LINE}");
    hola_response()
}

pub async fn handle_request(event: LambdaEvent<Value>) -> Result<ApiGatewayResponse, Error> {
    let (payload, context) = event.into_parts();
    Ok(handle_hola_event(&payload, &context))
}
