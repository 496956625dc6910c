use crate::reporter::{Measurement, Reporter};
use common::MetricKind;
use std::collections::HashMap;
use std::sync::Arc;

type Handler = Arc<dyn Fn(&Measurement) + Send + Sync>;

/// Registry of "measurement available" callbacks, keyed by metric kind.
///
/// Instrumentation calls [`VitalsObserver::emit`] whenever a value becomes
/// available; every handler registered for that kind runs in registration
/// order. Measurements whose name is not one of the five vitals are ignored.
#[derive(Clone, Default)]
pub struct VitalsObserver {
    handlers: HashMap<MetricKind, Vec<Handler>>,
}

impl VitalsObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on<F>(&mut self, kind: MetricKind, handler: F)
    where
        F: Fn(&Measurement) + Send + Sync + 'static,
    {
        self.handlers.entry(kind).or_default().push(Arc::new(handler));
    }

    /// Registers one handler for every vital.
    pub fn observe_all<F>(&mut self, handler: F)
    where
        F: Fn(&Measurement) + Send + Sync + 'static,
    {
        let handler: Handler = Arc::new(handler);
        for kind in MetricKind::ALL {
            self.handlers.entry(kind).or_default().push(handler.clone());
        }
    }

    /// Wires every vital to `reporter`. Each report runs as its own task and
    /// a failed report is logged and dropped.
    pub fn forward_to(&mut self, reporter: Arc<Reporter>) {
        self.observe_all(move |measurement| {
            let Ok(runtime) = tokio::runtime::Handle::try_current() else {
                tracing::warn!(
                    metric = %measurement.name,
                    "No async runtime; measurement dropped"
                );
                return;
            };
            let reporter = reporter.clone();
            let measurement = measurement.clone();
            runtime.spawn(async move {
                if let Err(e) = reporter.report(&measurement).await {
                    tracing::warn!(
                        metric = %measurement.name,
                        error = %e,
                        "Failed to report measurement"
                    );
                }
            });
        });
    }

    /// Dispatches a measurement. Returns how many handlers ran.
    pub fn emit(&self, measurement: &Measurement) -> usize {
        let Ok(kind) = measurement.name.parse::<MetricKind>() else {
            tracing::debug!(metric = %measurement.name, "Ignoring unrecognised metric");
            return 0;
        };
        let Some(handlers) = self.handlers.get(&kind) else {
            return 0;
        };
        for handler in handlers {
            handler(measurement);
        }
        handlers.len()
    }
}
