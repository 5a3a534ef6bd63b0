//! Shared test utilities and recording doubles.

#![allow(dead_code, unused_imports)]

use parking_lot::Mutex;
use propwire::{ComponentMeta, Connector, ConnectorConfig, MatchResult, Presentational, Props};
use serde_json::Value;
use std::sync::Arc;

pub type RenderLog = Arc<Mutex<Vec<Props>>>;

/// Presentational double that records every render request.
pub struct RecordingComponent {
    name: String,
    meta: Option<ComponentMeta>,
    log: RenderLog,
}

impl RecordingComponent {
    pub fn new(name: &str) -> (Self, RenderLog) {
        let log: RenderLog = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                name: name.to_string(),
                meta: None,
                log: Arc::clone(&log),
            },
            log,
        )
    }

    pub fn with_meta(mut self, meta: ComponentMeta) -> Self {
        self.meta = Some(meta);
        self
    }
}

impl Presentational for RecordingComponent {
    fn name(&self) -> &str {
        &self.name
    }

    fn meta(&self) -> Option<&ComponentMeta> {
        self.meta.as_ref()
    }

    fn render(&self, props: &Props) {
        self.log.lock().push(props.clone());
    }
}

/// Minimal counter state used across the integration tests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Counter {
    pub count: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CounterAction {
    Inc,
    Dec,
    Rename(String),
}

impl propwire::Action for CounterAction {
    fn name(&self) -> &str {
        match self {
            CounterAction::Inc => "INC",
            CounterAction::Dec => "DEC",
            CounterAction::Rename(_) => "RENAME",
        }
    }
}

pub type CounterConnector = Connector<Counter, CounterAction>;

pub fn counter_reducer(state: &Counter, action: &CounterAction) -> Counter {
    match action {
        CounterAction::Inc => Counter {
            count: state.count + 1,
        },
        CounterAction::Dec => Counter {
            count: state.count - 1,
        },
        CounterAction::Rename(_) => state.clone(),
    }
}

pub fn count_selector(state: &Counter, _: &(), _: &Props, _: &[Value]) -> Props {
    Props::new().with("count", state.count)
}

/// Connector with a `counter` selector and a matcher routing `Inc`/`Dec`
/// to the `counter` subscription.
pub fn counter_connector() -> CounterConnector {
    let connector = CounterConnector::new(Counter::default());
    connector.configure(
        ConnectorConfig::<Counter, CounterAction>::new()
            .selector("counter", count_selector)
            .matcher(|t| match t.action {
                CounterAction::Inc | CounterAction::Dec => MatchResult::name("counter"),
                CounterAction::Rename(_) => MatchResult::NoMatch,
            }),
    );
    connector
}

/// Count of renders whose props carry `key == value`.
pub fn renders_with(log: &RenderLog, key: &str, value: Value) -> usize {
    log.lock()
        .iter()
        .filter(|p| p.get(key) == Some(&value))
        .count()
}
