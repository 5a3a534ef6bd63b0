use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde_json::{Map, Value};

use propwire::{Connector, ConnectorConfig, Presentational, Props, Reducer, Settings};

/// Dispatch a sequence of actions against a tally state and print which
/// subscriptions re-render.
#[derive(Parser, Debug)]
#[command(name = "propwire", version)]
struct Cli {
    /// Settings file with [render] and [routes] tables.
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Mount a component under this subscription (repeatable). Every route
    /// target is mounted as well.
    #[arg(short, long = "mount")]
    mounts: Vec<String>,

    /// Action names to dispatch, in order.
    actions: Vec<String>,
}

/// Number of times each action was dispatched.
#[derive(Clone, Default)]
struct Tally {
    counts: BTreeMap<String, u64>,
}

struct Printer {
    name: String,
}

impl Presentational for Printer {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, props: &Props) {
        println!("  render {:<16} {}", self.name, props.clone().into_value());
    }
}

fn tally_props(state: &Tally, _: &(), _: &Props, _: &[Value]) -> Props {
    let counts: Map<String, Value> = state
        .counts
        .iter()
        .map(|(action, n)| (action.clone(), Value::from(*n)))
        .collect();
    Props::new().with("tally", Value::Object(counts))
}

fn count_action(state: &Tally, action: &String) -> Tally {
    let mut next = state.clone();
    *next.counts.entry(action.clone()).or_default() += 1;
    next
}

fn main() -> anyhow::Result<()> {
    propwire::logging::init_tracing();
    let cli = Cli::parse();

    let settings = match &cli.settings {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };

    let connector: Connector<Tally, String> = Connector::new(Tally::default());
    connector.configure(ConnectorConfig::from_settings(&settings));

    let mut subscriptions: BTreeSet<String> = settings
        .routes
        .iter()
        .flat_map(|(_, names)| names.iter().cloned())
        .collect();
    subscriptions.extend(cli.mounts);

    println!("mount");
    let instances: Vec<_> = subscriptions
        .into_iter()
        .map(|name| {
            let bound = connector
                .bind_selector(tally_props)
                .named(name.clone())
                .wrap(Printer { name });
            let instance = bound.instantiate(Props::new());
            instance.mount();
            instance
        })
        .collect();

    let reducer = connector.wrap_reducer(count_action);
    let mut state = Tally::clone(&connector.state());
    for action in &cli.actions {
        println!("dispatch {}", action);
        state = reducer.reduce(&state, action);
    }

    for instance in &instances {
        instance.unmount();
    }
    Ok(())
}
