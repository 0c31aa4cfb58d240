use crate::api::ApiHandler;
use crate::conf::GstscopeConfig;
use crate::ingest::IngestionPipeline;
use crate::parser::GstDebugParser;
use crate::server::gateway::ApiGateway;
use crate::server::pid::PidFile;
use crate::session::MemorySessionStore;
use anyhow::{Result, anyhow};
use pingora::prelude::*;
use pingora::server::Server;
use pingora::server::configuration::ServerConf;
use std::sync::Arc;

/// Run the Pingora server with the given configuration.
pub fn run(config: GstscopeConfig) -> Result<()> {
    // Attempt to write pid file (best-effort)
    let pid_file = config
        .server
        .pid_file
        .as_deref()
        .and_then(|path| match PidFile::write(path) {
            Ok(pid_file) => {
                tracing::info!(pid_file = %path.display(), "pid file written");
                Some(pid_file)
            }
            Err(e) => {
                tracing::warn!(error = %e, pid_file = %path.display(), "failed to write pid file; continuing");
                None
            }
        });

    let handler = Arc::new(build_api_handler(&config));
    let server = build_pingora_server(&config, handler)?;

    // Ensure pid file cleanup on shutdown
    if let Some(pid_file) = pid_file {
        ctrlc::set_handler(move || {
            tracing::info!(pid_file = %pid_file.path().display(), "shutdown requested, removing pid file");
            pid_file.remove();
            std::process::exit(0);
        })?;
    }

    tracing::info!(listen = %config.server.listen, "gstscope listening");
    server.run_forever();
}

/// The API handler with an empty in-memory session store.
pub fn build_api_handler(config: &GstscopeConfig) -> ApiHandler {
    let pipeline = IngestionPipeline::new(
        Arc::new(MemorySessionStore::new()),
        Arc::new(GstDebugParser::new()),
    );
    ApiHandler::new(pipeline, config.api_limits())
}

/// Build the Pingora server.
pub fn build_pingora_server(config: &GstscopeConfig, handler: Arc<ApiHandler>) -> Result<Server> {
    let mut server = if let Some(threads) = config.server.threads {
        tracing::debug!(
            threads,
            "Creating Pingora server with overridden worker threads"
        );
        let mut conf = ServerConf::new()
            .ok_or_else(|| anyhow!("could not construct pingora server configuration"))?;
        conf.threads = threads;
        Server::new_with_opt_and_conf(None, conf)
    } else {
        // "None" is required here to truly tell Pingora to use its default settings.
        Server::new(None)?
    };

    server.bootstrap();

    let gateway = ApiGateway::new(handler);
    let mut svc = http_proxy_service(&server.configuration, gateway);
    svc.add_tcp(&config.server.listen);

    server.add_service(svc);

    Ok(server)
}
