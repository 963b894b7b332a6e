use std::collections::HashMap;
use std::net::SocketAddr;
use std::process;
use std::sync::{Arc, Mutex};

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use tilde::api;
use tilde::config::{self, DEFAULT_HOST, DEFAULT_PORT};
use tilde::models::AppState;
use tilde::routes::build_app;

fn build_state_from_env(env_file: Option<&str>) -> AppState {
    config::load_env_file(env_file);

    let client = reqwest::Client::builder()
        .user_agent(format!("Tilde/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client");

    AppState {
        sessions: Arc::new(Mutex::new(HashMap::new())),
        flash_store: Arc::new(Mutex::new(HashMap::new())),
        backend_base_url: config::get_backend_base_url(),
        public_base_url: config::get_public_base_url(),
        client,
        custom_css: None,
    }
}

async fn start_server(mut state: AppState, host: &str, port: u16, stylesheet: Option<String>) {
    if let Some(path) = stylesheet {
        match std::fs::read_to_string(&path) {
            Ok(css) => {
                state.custom_css = Some(css);
                tracing::info!("Loaded custom stylesheet from {}", path);
            }
            Err(e) => {
                tracing::error!(%e, "Failed to read custom stylesheet");
                eprintln!("{} {}: {}", yansi::Paint::red("Failed to read custom stylesheet at"), path, e);
                process::exit(1);
            }
        }
    }

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };
    let app = build_app(state.clone());
    tracing::info!(%addr, "Starting Tilde dashboard server");
    println!(
        "{} {}",
        yansi::Paint::new("Dashboard running on").green(),
        yansi::Paint::new(format!("http://{}", addr)).cyan()
    );
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!(
                "{}: {}\n{}",
                yansi::Paint::new(format!("Failed to bind to {}", addr)).red(),
                e,
                yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow()
            );
            process::exit(1);
        }
    }
}

fn deployment_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w - 4);
    }
    table
}

#[derive(Parser)]
#[command(
    name = "tilde",
    author,
    version,
    about = "Tilde deployment dashboard",
    long_about = r#"Tilde — a self-hosted dashboard for the cloud deployment broker.

Runs the web dashboard (login, deployment form, deployment list) and offers
a few terminal shortcuts for the same backend actions. Configure the broker
backend with the BACKEND_BASE_URL environment variable or an --env-file.

Examples:
  1) Build & run (dev):
      cargo run -- serve --host 127.0.0.1 --port 3000
  2) List a user's deployments:
      tilde deployments list --email dev@example.com
  3) Tear one down:
      tilde undeploy 42 my-project --email dev@example.com
"#,
    after_help = "Use `tilde <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response logging
    #[arg(long, global = true)]
    silent: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web dashboard
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
    },
    /// Validate configuration (env vars / backend connectivity)
    #[command(
        about = "Validate configuration and ensure backend connectivity.",
        long_about = "Validate the environment variables required for the dashboard, then probe the configured backend's deployments endpoint to confirm it answers."
    )]
    CheckConfig { env_file: Option<String> },
    /// Inspect deployments via the configured backend
    Deployments {
        #[command(subcommand)]
        sub: DeploymentCommands,
    },
    /// Tear down a deployment
    #[command(
        about = "Tear down a previously created deployment",
        long_about = "Request teardown of a deployment by project id and name. This destroys the provisioned infrastructure; the record stays visible until the backend finishes."
    )]
    Undeploy {
        project_id: String,
        project_name: String,
        /// Email of the deployment's owner
        #[arg(long)]
        email: String,
    },
}

#[derive(Subcommand)]
enum DeploymentCommands {
    /// List deployments for a user
    #[command(
        about = "List deployments",
        long_about = "List the deployment records the backend holds for one user email, in the same order the web dashboard shows them."
    )]
    List {
        /// Email whose deployments to list
        #[arg(long)]
        email: String,
    },
    /// Show the aggregate deployment stats
    #[command(about = "Show deployment stats", long_about = "Show the aggregate counters the dashboard tiles display (total, active, in progress, failed).")]
    Stats,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // CLI parsing
    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.silent {
        tilde::api::client::set_silent(true);
    }

    // Dispatch CLI commands. If no command provided, serve the dashboard by
    // default.
    if cli.command.is_none() {
        let state = build_state_from_env(None);
        start_server(state, DEFAULT_HOST, DEFAULT_PORT, None).await;
        return;
    }
    match cli.command.unwrap() {
        Commands::Serve { host, port, env_file, stylesheet } => {
            let state = build_state_from_env(env_file.as_deref());
            start_server(state, &host, port, stylesheet).await;
        }
        Commands::CheckConfig { env_file } => {
            let state = build_state_from_env(env_file.as_deref());
            if state.backend_base_url.trim().is_empty() {
                eprintln!("{}", yansi::Paint::new("BACKEND_BASE_URL is not configured").red());
                process::exit(1);
            }
            match api::load_stats(&state.client, &state.backend_base_url, None).await {
                Ok(_) => {
                    println!(
                        "{}",
                        yansi::Paint::new("Configuration looks valid (backend answered)").green()
                    );
                }
                Err(e) => {
                    eprintln!(
                        "{}: {}",
                        yansi::Paint::new("Configuration appears invalid").red(),
                        e
                    );
                    process::exit(1);
                }
            }
        }
        Commands::Deployments { sub } => {
            let state = build_state_from_env(None);
            match sub {
                DeploymentCommands::List { email } => {
                    match api::load_deployments(&state.client, &state.backend_base_url, None, &email).await {
                        Ok(deployments) => {
                            let mut table = deployment_table();
                            table.set_header(vec!["ID", "Name", "Provider", "Region", "Status", "Created", "Progress"]);
                            for d in &deployments {
                                table.add_row(vec![
                                    &d.id,
                                    &d.name,
                                    &d.provider,
                                    &d.region,
                                    &d.status_label,
                                    &d.created_display,
                                    &d.progress_display,
                                ]);
                            }
                            println!("\n{table}\n");
                        }
                        Err(e) => {
                            eprintln!("{}: {}", yansi::Paint::new("Failed to list deployments").red(), e);
                            process::exit(1);
                        }
                    }
                }
                DeploymentCommands::Stats => {
                    match api::load_stats(&state.client, &state.backend_base_url, None).await {
                        Ok(stats) => {
                            let mut table = deployment_table();
                            table.set_header(vec!["Total", "Active", "In Progress", "Failed"]);
                            table.add_row(vec![
                                stats.total.to_string(),
                                stats.active.to_string(),
                                stats.in_progress.to_string(),
                                stats.failed.to_string(),
                            ]);
                            println!("\n{table}\n");
                        }
                        Err(e) => {
                            eprintln!("{}: {}", yansi::Paint::new("Failed to load stats").red(), e);
                            process::exit(1);
                        }
                    }
                }
            }
        }
        Commands::Undeploy { project_id, project_name, email } => {
            let state = build_state_from_env(None);
            match api::undeploy(&state.client, &state.backend_base_url, None, &email, &project_id, &project_name).await {
                Ok(response) => {
                    println!("{}", yansi::Paint::new(response.message).green());
                }
                Err(e) => {
                    eprintln!("{}: {}", yansi::Paint::new("Teardown failed").red(), e);
                    process::exit(1);
                }
            }
        }
    }
}
