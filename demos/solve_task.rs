use std::sync::Arc;

use openrouter_agent::{ClientConfig, OpenRouterClient, RunnerConfig, TaskRunner};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    let client = Arc::new(OpenRouterClient::new(&ClientConfig::from_env()?)?);
    let runner = TaskRunner::new(client, RunnerConfig::default());

    let outcome = runner
        .solve("Research and suggest three possible vacation destinations for a family with young children, considering budget-friendly options.")
        .await;

    println!("📋 {} steps, status: {}", outcome.steps.len(), outcome.status);
    for (i, (step, result)) in outcome.steps.iter().zip(&outcome.step_results).enumerate() {
        let icon = if result.is_some() { "✅" } else { "❌" };
        println!("  {} Step {}: {}", icon, i + 1, step.description);
    }
    for (n, error) in outcome.step_failures() {
        println!("     step {} error: {}", n, error);
    }

    println!("\n{}", "=".repeat(50));
    println!("FINAL RESPONSE:");
    println!("{}", "=".repeat(50));
    println!("{}", outcome.final_response.as_deref().unwrap_or("None"));
    Ok(())
}
