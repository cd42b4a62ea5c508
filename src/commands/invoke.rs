use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::InvokeArgs;
use crate::config::Config;
use crate::grpc::{Completion, Transport};
use crate::view::App;

/// Transport: flag, then config file, then gRPC-Web.
pub fn resolve_transport(args: &InvokeArgs, config: Option<&Config>) -> Transport {
    args.transport
        .or(config.map(|cfg| cfg.client.transport))
        .unwrap_or_default()
}

/// Mount the view, print what it rendered, then keep the runtime alive until
/// the call settles. The exit status does not depend on the outcome.
pub async fn handle_invoke(args: &InvokeArgs, config: Option<&Config>) -> Result<Completion> {
    let hostname = Config::resolve_hostname(config, args.hostname.as_deref());
    let transport = resolve_transport(args, config);

    debug!("Invoking test request on {} over {}", hostname, transport);

    let app = App::new(&hostname, transport)
        .with_context(|| format!("Invalid hostname '{}'", hostname))?;
    let rendered = app.render();

    if !rendered.output.is_empty() {
        println!("{}", rendered.output);
    }

    let completion = rendered
        .pending
        .await
        .context("Request task panicked")?;
    debug!("Request settled: {:?}", completion);

    Ok(completion)
}
