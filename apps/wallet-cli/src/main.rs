use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::prelude::*;
use wallet_cli::CliConfig;
use wallet_cli::command::{self, ProofInput};
use wallet_core::config::core_config::AppConfig;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    config: Option<Vec<PathBuf>>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the JWK of a PEM public key
    Jwk {
        #[arg(long, value_name = "FILE")]
        public_key: PathBuf,
    },
    /// Print a signed OpenID4VCI proof JWT
    Proof(ProofArgs),
    /// Print the credential endpoint request body
    RequestBody(ProofArgs),
    /// Print the OIDC authorization configuration of an issuer
    AuthorizationConfig {
        #[arg(long, value_name = "FILE")]
        issuer: PathBuf,
    },
    /// Print the stored form and metadata of a downloaded credential
    CredentialInfo {
        #[arg(long, value_name = "FILE")]
        issuer: PathBuf,
        #[arg(long, value_name = "FILE")]
        credential: PathBuf,
        #[arg(long, default_value = "en")]
        language: String,
    },
    /// Print the credential download timeout in milliseconds
    DownloadTimeout,
}

#[derive(Args, Debug)]
struct ProofArgs {
    #[arg(long, value_name = "FILE")]
    public_key: PathBuf,
    #[arg(long, value_name = "FILE")]
    private_key: PathBuf,
    #[arg(long, value_name = "FILE")]
    token_response: PathBuf,
    #[arg(long, value_name = "FILE")]
    issuer: PathBuf,
}

impl ProofArgs {
    fn input(&self) -> ProofInput<'_> {
        ProofInput {
            public_key: &self.public_key,
            private_key: &self.private_key,
            token_response: &self.token_response,
            issuer: &self.issuer,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config_files = cli.config.unwrap_or_default();
    config_files.insert(0, "config/config.yml".into());

    let app_config: AppConfig<CliConfig> = AppConfig::from_files(&config_files)?;

    initialize_tracing(&app_config.app)?;

    let core = app_config.core;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            match cli.command {
                Command::Jwk { public_key } => {
                    println!("{}", command::jwk(&core, &public_key)?);
                }
                Command::Proof(args) => {
                    println!("{}", command::proof(&core, &args.input()).await?);
                }
                Command::RequestBody(args) => {
                    let body = command::request_body(&core, &args.input()).await?;
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                Command::AuthorizationConfig { issuer } => {
                    let configuration = command::authorization_config(&issuer)?;
                    println!("{}", serde_json::to_string_pretty(&configuration)?);
                }
                Command::CredentialInfo {
                    issuer,
                    credential,
                    language,
                } => {
                    let info = command::credential_info(&issuer, &credential, &language)?;
                    println!("{}", serde_json::to_string_pretty(&info)?);
                }
                Command::DownloadTimeout => {
                    println!("{}", command::download_timeout(&core).await?.as_millis());
                }
            }

            Ok::<(), anyhow::Error>(())
        })
}

fn initialize_tracing(config: &CliConfig) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().or_else(|_| {
        tracing_subscriber::EnvFilter::try_new(config.trace_level.as_deref().unwrap_or("info"))
    })?;

    let tracing_layer = tracing_subscriber::registry().with(filter);

    // stdout carries command output
    let writer = std::io::stderr;

    if config.trace_json.unwrap_or_default() {
        tracing_layer
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_writer(writer),
            )
            .init();
    } else {
        tracing_layer
            .with(tracing_subscriber::fmt::layer().with_writer(writer))
            .init();
    };

    Ok(())
}
