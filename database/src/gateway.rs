use std::time::Duration;

use tokio::time::sleep;

/// The kinds of call a service makes; each has its own simulated latency.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

/// Per-operation delays for one service.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LatencyProfile {
    pub list: Duration,
    pub get: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
}

impl LatencyProfile {
    /// Games and blog posts.
    pub const HEAVY: LatencyProfile = LatencyProfile {
        list: Duration::from_millis(300),
        get: Duration::from_millis(200),
        create: Duration::from_millis(400),
        update: Duration::from_millis(350),
        delete: Duration::from_millis(300),
    };

    /// Categories, ad zones and comments.
    pub const STANDARD: LatencyProfile = LatencyProfile {
        list: Duration::from_millis(250),
        get: Duration::from_millis(200),
        create: Duration::from_millis(350),
        update: Duration::from_millis(300),
        delete: Duration::from_millis(250),
    };

    pub const INSTANT: LatencyProfile = LatencyProfile {
        list: Duration::ZERO,
        get: Duration::ZERO,
        create: Duration::ZERO,
        update: Duration::ZERO,
        delete: Duration::ZERO,
    };

    pub fn delay_for(&self, operation: Operation) -> Duration {
        match operation {
            Operation::List => self.list,
            Operation::Get => self.get,
            Operation::Create => self.create,
            Operation::Update => self.update,
            Operation::Delete => self.delete,
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        LatencyProfile::STANDARD
    }
}

/// Runs `work` once `delay` has elapsed and resolves to its result.
///
/// There is no cancellation or timeout and the delay itself never fails;
/// only `work` can produce an error.
pub async fn defer<T, F>(delay: Duration, work: F) -> T
where
    F: FnOnce() -> T,
{
    if !delay.is_zero() {
        sleep(delay).await;
    }
    work()
}

/// Stands in for the network between the portal and a backend that does not
/// exist yet. Every store call goes through [`MockGateway::run`].
#[derive(Copy, Clone, Debug, Default)]
pub struct MockGateway {
    latency: LatencyProfile,
}

impl MockGateway {
    pub fn new(latency: LatencyProfile) -> Self {
        Self { latency }
    }

    pub fn instant() -> Self {
        Self::new(LatencyProfile::INSTANT)
    }

    pub fn latency(&self) -> LatencyProfile {
        self.latency
    }

    /// The store is touched only after the delay, so whatever `work` reads or
    /// assigns reflects the state at completion time, not at call time.
    pub async fn run<T, F>(&self, operation: Operation, work: F) -> T
    where
        F: FnOnce() -> T,
    {
        let delay = self.latency.delay_for(operation);
        tracing::trace!("{operation:?} completes after {delay:?}");
        defer(delay, work).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_profiles_match_observed_delays() {
        assert_eq!(
            LatencyProfile::HEAVY.delay_for(Operation::Create),
            Duration::from_millis(400)
        );
        assert_eq!(
            LatencyProfile::STANDARD.delay_for(Operation::List),
            Duration::from_millis(250)
        );
        assert_eq!(
            LatencyProfile::INSTANT.delay_for(Operation::Delete),
            Duration::ZERO
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_work_runs_only_after_delay() {
        let ran = Arc::new(AtomicBool::new(false));
        let gateway = MockGateway::new(LatencyProfile::HEAVY);
        let flag = ran.clone();
        let handle = tokio::spawn(async move {
            gateway
                .run(Operation::Create, move || flag.store(true, Ordering::SeqCst))
                .await
        });

        tokio::time::sleep(Duration::from_millis(399)).await;
        assert!(!ran.load(Ordering::SeqCst));

        tokio::time::sleep(Duration::from_millis(2)).await;
        handle.await.unwrap();
        assert!(ran.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_defer_returns_work_result() {
        let value = defer(Duration::ZERO, || 42).await;
        assert_eq!(value, 42);
    }
}
