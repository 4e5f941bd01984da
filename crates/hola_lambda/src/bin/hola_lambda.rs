use hola_lambda::config::LambdaConfig;
use hola_lambda::handlers::hola::handle_request;
use hola_lambda::telemetry::init_tracing;
use lambda_runtime::{service_fn, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = LambdaConfig::from_env().map_err(Error::from)?;
    init_tracing(config.log_format)?;

    lambda_runtime::run(service_fn(handle_request)).await
}
