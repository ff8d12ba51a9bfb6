use std::sync::atomic::{AtomicU64, Ordering};

use crate::widgets::WidgetOutcome;
use crate::AppError;

#[derive(Debug, Default)]
pub struct Metrics {
    rendered: AtomicU64,
    empty: AtomicU64,
    failed: AtomicU64,
    missing_containers: AtomicU64,
}

impl Metrics {
    pub fn record(&self, result: &Result<WidgetOutcome, AppError>) {
        let counter = match result {
            Ok(WidgetOutcome::Rendered) => &self.rendered,
            Ok(WidgetOutcome::Empty) => &self.empty,
            Ok(WidgetOutcome::Failed) => &self.failed,
            Err(AppError::MissingContainer(_)) => &self.missing_containers,
            Err(AppError::Internal(_)) => &self.failed,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn rendered(&self) -> u64 {
        self.rendered.load(Ordering::Relaxed)
    }

    pub fn empty(&self) -> u64 {
        self.empty.load(Ordering::Relaxed)
    }

    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    pub fn missing_containers(&self) -> u64 {
        self.missing_containers.load(Ordering::Relaxed)
    }

    pub fn summary(&self) -> String {
        format!(
            "rendered={} empty={} failed={} missing_containers={}",
            self.rendered(),
            self.empty(),
            self.failed(),
            self.missing_containers()
        )
    }
}
