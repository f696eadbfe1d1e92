use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use thiserror::Error;
use tiny_http::{Header, Request, Response, Server};

use crate::config::{self, Config, ConfigError, PORT_ENV};
use crate::core_service::CoreService;
use crate::logging;
use crate::search;
use crate::transport::{self, HttpReply, CORS_HEADERS};

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}: {reason}")]
    Bind { addr: String, reason: String },
    #[error("failed to initialize logging: {0}")]
    Logging(#[source] std::io::Error),
}

/// Personal command-snippet manager.
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(name = "snipkeep", version, about)]
pub struct CliOptions {
    /// Path to the TOML config file.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Interface to listen on.
    #[arg(long)]
    pub host: Option<String>,
    /// Port to listen on. Overrides the PORT environment variable.
    #[arg(long)]
    pub port: Option<u16>,
    /// Directory holding snippets.json and settings.json.
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
    /// Print the snippets matching this query and exit.
    #[arg(long)]
    pub query: Option<String>,
    /// Log at debug level.
    #[arg(long)]
    pub verbose: bool,
}

pub fn parse_cli_args(args: &[String]) -> Result<CliOptions, String> {
    let argv = std::iter::once("snipkeep".to_string()).chain(args.iter().cloned());
    CliOptions::try_parse_from(argv).map_err(|error| error.to_string())
}

pub fn resolve_config(options: &CliOptions) -> Result<Config, ConfigError> {
    let mut config = config::load(options.config.as_deref())?;
    config::apply_port_env(&mut config, std::env::var(PORT_ENV).ok())?;
    if let Some(host) = &options.host {
        config.host = host.clone();
    }
    if let Some(port) = options.port {
        config.port = port;
    }
    if let Some(data_dir) = &options.data_dir {
        config.data_dir = data_dir.clone();
    }
    config::validate(&config)?;
    Ok(config)
}

pub fn run_with_options(options: CliOptions) -> Result<(), RuntimeError> {
    let config = resolve_config(&options)?;
    let service = CoreService::new(&config);

    if let Some(query) = &options.query {
        for line in query_lines(&service, query) {
            println!("{line}");
        }
        return Ok(());
    }

    let level = if options.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let log_path = logging::init(&config.log_dir, level).map_err(RuntimeError::Logging)?;

    let addr = config.bind_addr();
    let server = Server::http(&addr).map_err(|error| RuntimeError::Bind {
        addr: addr.clone(),
        reason: error.to_string(),
    })?;
    log::info!(
        "startup addr=http://{addr} data_dir={} config_path={} log_path={}",
        config.data_dir.display(),
        config.config_path.display(),
        log_path.display(),
    );

    serve(&server, &service);
    Ok(())
}

/// Answers requests one at a time until the server is unblocked.
pub fn serve(server: &Server, service: &CoreService) {
    for request in server.incoming_requests() {
        handle_one(service, request);
    }
}

fn handle_one(service: &CoreService, mut request: Request) {
    let method = request.method().to_string();
    let url = request.url().to_string();

    let mut body = Vec::new();
    let reply = match request.as_reader().read_to_end(&mut body) {
        Ok(_) => dispatch_body(service, &method, &url, body),
        Err(error) => {
            log::warn!("failed to read request body {method} {url}: {error}");
            HttpReply::unreadable_body(format!("Request body could not be read: {error}"))
        }
    };

    log::info!("{method} {url} -> {}", reply.status);
    if let Err(error) = request.respond(to_response(reply)) {
        log::warn!("failed to send response for {method} {url}: {error}");
    }
}

fn dispatch_body(service: &CoreService, method: &str, url: &str, body: Vec<u8>) -> HttpReply {
    match String::from_utf8(body) {
        Ok(body) => transport::handle_http(service, method, url, &body),
        Err(error) => {
            log::warn!("rejecting non UTF-8 body {method} {url}: {error}");
            HttpReply::unreadable_body(format!(
                "Request body is not valid UTF-8: {}",
                error.utf8_error()
            ))
        }
    }
}

fn to_response(reply: HttpReply) -> Response<std::io::Cursor<Vec<u8>>> {
    let mut response = Response::from_data(reply.body).with_status_code(reply.status);
    let headers = CORS_HEADERS
        .iter()
        .copied()
        .chain(std::iter::once(("Content-Type", reply.content_type)));
    for (name, value) in headers {
        if let Ok(header) = Header::from_bytes(name.as_bytes(), value.as_bytes()) {
            response.add_header(header);
        }
    }
    response
}

fn query_lines(service: &CoreService, query: &str) -> Vec<String> {
    search::filter(&service.list_snippets(), query)
        .into_iter()
        .map(|snippet| {
            if snippet.description.is_empty() {
                snippet.command
            } else {
                format!("{}  # {}", snippet.command, snippet.description)
            }
        })
        .collect()
}
