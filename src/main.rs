use std::sync::Arc;

use clap::{Parser, Subcommand};
use openrouter_agent::{
    ClientConfig, FailurePolicy, OpenRouterClient, RunnerConfig, TaskRunner,
    compare::{DEFAULT_MODELS, DEFAULT_PROMPT, compare_models, parse_model_spec},
    config::DEFAULT_MODEL,
    connectivity::{DEFAULT_CHECK_MODEL, check_connection},
    error::Result,
};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const COMPARE_SITE_NAME: &str = "Model Comparison Demo";

const DEFAULT_QUERY: &str = "Research and suggest three possible vacation destinations for a family with young children, considering budget-friendly options.";

/// Talk to OpenRouter: check connectivity, compare models, or solve a task in steps.
#[derive(Parser, Debug)]
#[command(name = "openrouter-agent")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Send one greeting to verify the API key and endpoint
    Check {
        #[arg(long, default_value = DEFAULT_CHECK_MODEL)]
        model: String,
    },

    /// Send the same prompt to several models
    Compare {
        #[arg(long, default_value = DEFAULT_PROMPT)]
        prompt: String,

        /// `NAME=MODEL_ID` pairs; repeatable. Defaults to a built-in table
        #[arg(long = "model")]
        models: Vec<String>,
    },

    /// Plan, execute and compile a multi-step answer
    Solve {
        query: Option<String>,

        #[arg(long, default_value = DEFAULT_MODEL)]
        model: String,

        /// Pause between steps
        #[arg(long, default_value_t = 1000)]
        step_delay_ms: u64,

        /// Upper bound on each completion call [default: OPENROUTER_TIMEOUT_SECS or 120]
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        timeout_secs: Option<u64>,

        /// Stop at the first failing step instead of carrying on
        #[arg(long)]
        abort_on_error: bool,

        /// Print the whole outcome as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "openrouter_agent=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { model } => {
            let client = OpenRouterClient::new(&ClientConfig::from_env()?)?;
            let reply = check_connection(&client, &model).await?;
            println!("Successfully connected to OpenRouter API!");
            println!("Model response: {}", reply);
        }

        Commands::Compare { prompt, models } => {
            let config = ClientConfig::from_env_with_site_name(COMPARE_SITE_NAME)?;
            let client = OpenRouterClient::new(&config)?;
            let models = if models.is_empty() {
                DEFAULT_MODELS.clone()
            } else {
                models.iter().map(|m| parse_model_spec(m)).collect()
            };

            println!("Prompt: {}\n", prompt);
            println!("{}", "-".repeat(50));
            for reply in compare_models(&client, &prompt, &models).await {
                println!("\n{} ({}):", reply.name, reply.model);
                match reply.reply {
                    Ok(text) => println!("Response: {}\n", text),
                    Err(e) => println!("Error with {}: {}", reply.name, e),
                }
                println!("{}", "-".repeat(50));
            }
        }

        Commands::Solve {
            query,
            model,
            step_delay_ms,
            timeout_secs,
            abort_on_error,
            json,
        } => {
            let client_config = ClientConfig::from_env()?;
            let client = Arc::new(OpenRouterClient::new(&client_config)?);
            let config = RunnerConfig {
                model,
                step_delay_ms,
                call_timeout_secs: timeout_secs.unwrap_or(client_config.timeout_secs),
                failure_policy: if abort_on_error {
                    FailurePolicy::Abort
                } else {
                    FailurePolicy::Degrade
                },
            };
            let runner = TaskRunner::new(client, config);

            let cancel = CancellationToken::new();
            let on_ctrl_c = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    warn!("interrupt received, stopping after the current step");
                    on_ctrl_c.cancel();
                }
            });

            let query = query.unwrap_or_else(|| DEFAULT_QUERY.to_string());
            let outcome = runner.solve_with_cancel(&query, &cancel).await;
            info!(status = %outcome.status, "task finished");

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("\n{}", "=".repeat(50));
                println!("FINAL RESPONSE:");
                println!("{}", "=".repeat(50));
                match (&outcome.final_response, &outcome.error) {
                    (Some(response), _) => println!("{}", response),
                    (None, Some(error)) => println!("Error: {}", error),
                    (None, None) => println!("None"),
                }
            }
        }
    }

    Ok(())
}
