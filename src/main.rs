// Trigger entrypoint for the announcement relay.

use lambda_runtime::{Error, run, service_fn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // One-time process-wide setup before the trigger registers
    announce_relay::setup_logging();

    run(service_fn(announce_relay::relay::handler::function_handler)).await
}
