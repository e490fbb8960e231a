use std::time::Duration;

use async_trait::async_trait;

/// Decides how long to wait between consecutive step executions.
#[async_trait]
pub trait Pacing: Send + Sync {
    async fn pause(&self);
}

/// Sleeps a fixed amount between steps.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

#[async_trait]
impl Pacing for FixedDelay {
    async fn pause(&self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacing;

#[async_trait]
impl Pacing for NoPacing {
    async fn pause(&self) {}
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    #[tokio::test]
    async fn fixed_delay_waits_at_least_the_delay() {
        let start = Instant::now();
        FixedDelay(Duration::from_millis(20)).pause().await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
