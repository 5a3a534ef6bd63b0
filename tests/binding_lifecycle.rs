mod common;

use common::{counter_connector, Counter, CounterAction, RecordingComponent};
use propwire::{
    ComponentHandle, ComponentMeta, ConnectorConfig, Phase, Presentational, PropKind, PropType, Props,
    UpdatePolicy,
};
use serde_json::{json, Value};

#[test]
fn mount_renders_then_registers() {
    let connector = counter_connector();
    let (component, log) = RecordingComponent::new("counter");
    let instance = connector.bind("counter").wrap(component).instantiate(Props::new());

    assert_eq!(instance.phase(), Phase::Unmounted);
    assert!(log.lock().is_empty());

    instance.mount();

    assert_eq!(instance.phase(), Phase::Mounted);
    assert_eq!(log.lock().len(), 1);
    assert!(connector.components().contains("counter", instance.id()));
}

#[test]
fn mount_twice_renders_once() {
    let connector = counter_connector();
    let (component, log) = RecordingComponent::new("counter");
    let instance = connector.bind("counter").wrap(component).instantiate(Props::new());

    instance.mount();
    instance.mount();

    assert_eq!(log.lock().len(), 1);
    assert_eq!(connector.components().len("counter"), 1);
}

#[test]
fn default_subscription_is_the_component_name() {
    let connector = counter_connector();
    let (component, _) = RecordingComponent::new("counter");
    let bound = connector.bind_default().wrap(component);

    assert_eq!(bound.subscription(), "counter");
    let instance = bound.instantiate(Props::new());
    instance.mount();
    assert_eq!(instance.rendered_props().unwrap().get("count"), Some(&json!(0)));
}

#[test]
fn computed_props_win_over_own_props() {
    let connector = counter_connector();
    let (component, log) = RecordingComponent::new("counter");
    let own = Props::new().with("count", "from-parent").with("title", "Clicks");
    let instance = connector.bind("counter").wrap(component).instantiate(own);

    instance.mount();

    let rendered = log.lock()[0].clone();
    assert_eq!(rendered.get("count"), Some(&json!(0)));
    assert_eq!(rendered.get("title"), Some(&json!("Clicks")));
}

#[test]
fn extra_args_reach_the_selector() {
    let connector = counter_connector();
    connector.configure(ConnectorConfig::<Counter, CounterAction>::new().selector(
        "scaled",
        |s: &Counter, _: &(), _: &Props, extra: &[Value]| {
            let factor = extra.first().and_then(Value::as_i64).unwrap_or(1);
            Props::new().with("scaled", s.count * factor)
        },
    ));
    connector.publish(Counter { count: 4 }, &CounterAction::Rename("x".into()));

    let (component, log) = RecordingComponent::new("scaled");
    let bound = connector.bind("scaled").arg(10).wrap(component);
    assert_eq!(bound.extra_args(), [json!(10)]);
    bound.instantiate(Props::new()).mount();

    assert_eq!(log.lock()[0].get("scaled"), Some(&json!(40)));
}

#[test]
fn inline_selector_uses_component_name_as_subscription() {
    let connector = counter_connector();
    let (component, log) = RecordingComponent::new("doubled");
    let bound = connector
        .bind_selector(|s: &Counter, _: &(), _: &Props, _: &[Value]| {
            Props::new().with("doubled", s.count * 2)
        })
        .wrap(component);
    let instance = bound.instantiate(Props::new());
    instance.mount();

    connector.publish(Counter { count: 3 }, &CounterAction::Inc);
    connector.invalidate(&propwire::MatchResult::name("doubled"));

    assert_eq!(bound.subscription(), "doubled");
    assert_eq!(log.lock().last().unwrap().get("doubled"), Some(&json!(6)));
}

#[test]
fn refresh_after_unmount_is_skipped() {
    let connector = counter_connector();
    let (component, log) = RecordingComponent::new("counter");
    let instance = connector.bind("counter").wrap(component).instantiate(Props::new());
    instance.mount();
    instance.unmount();

    instance.refresh();
    instance.patch(Props::new().with("x", 1));

    assert_eq!(log.lock().len(), 1);
    assert_eq!(instance.phase(), Phase::Unmounted);
}

#[test]
fn remount_registers_again() {
    let connector = counter_connector();
    let (component, _) = RecordingComponent::new("counter");
    let instance = connector.bind("counter").wrap(component).instantiate(Props::new());

    instance.mount();
    instance.unmount();
    instance.mount();

    assert!(connector.components().contains("counter", instance.id()));
    assert_eq!(instance.render_count(), 2);
}

#[test]
fn parent_render_with_same_props_is_suppressed_by_default() {
    let connector = counter_connector();
    assert_eq!(connector.policy(), UpdatePolicy::PropsChanged);
    let (component, log) = RecordingComponent::new("counter");
    let own = Props::new().with("title", "a");
    let instance = connector.bind("counter").wrap(component).instantiate(own.clone());
    instance.mount();

    assert!(!instance.receive_props(own));
    assert!(instance.receive_props(Props::new().with("title", "b")));

    assert_eq!(log.lock().len(), 2);
    assert_eq!(log.lock()[1].get("title"), Some(&json!("b")));
}

#[test]
fn always_policy_renders_on_every_parent_render() {
    let connector = counter_connector();
    connector.configure(ConnectorConfig::<Counter, CounterAction>::new().policy(UpdatePolicy::Always));
    let (component, log) = RecordingComponent::new("counter");
    let instance = connector.bind("counter").wrap(component).instantiate(Props::new());
    instance.mount();

    assert!(instance.receive_props(Props::new()));
    assert_eq!(log.lock().len(), 2);
}

#[test]
fn never_policy_stores_props_for_the_next_refresh() {
    let connector = counter_connector();
    connector.configure(ConnectorConfig::<Counter, CounterAction>::new().policy(UpdatePolicy::Never));
    let (component, log) = RecordingComponent::new("counter");
    let instance = connector.bind("counter").wrap(component).instantiate(Props::new());
    instance.mount();

    assert!(!instance.receive_props(Props::new().with("title", "late")));
    assert_eq!(log.lock().len(), 1);

    instance.refresh();
    assert_eq!(log.lock()[1].get("title"), Some(&json!("late")));
}

#[test]
fn receive_props_before_mount_never_renders() {
    let connector = counter_connector();
    let (component, log) = RecordingComponent::new("counter");
    let instance = connector.bind("counter").wrap(component).instantiate(Props::new());

    assert!(!instance.receive_props(Props::new().with("title", "x")));
    assert!(log.lock().is_empty());
    assert_eq!(instance.own_props().get("title"), Some(&json!("x")));
}

#[test]
fn metadata_is_read_from_the_wrapped_component() {
    let connector = counter_connector();
    let meta = ComponentMeta::new()
        .default_prop("title", "Untitled")
        .default_prop("count", -1)
        .prop_type("count", PropType::required(PropKind::Number));
    let (component, log) = RecordingComponent::new("counter");
    let bound = connector
        .bind("counter")
        .wrap(component.with_meta(meta.clone()));

    assert_eq!(bound.meta(), Some(&meta));
    assert_eq!(bound.inner().meta(), Some(&meta));
    assert_eq!(bound.display_name(), "Bound(counter)");

    bound.instantiate(Props::new()).mount();

    let rendered = log.lock()[0].clone();
    assert_eq!(rendered.get("title"), Some(&json!("Untitled")));
    // Default props sit beneath injected props.
    assert_eq!(rendered.get("count"), Some(&json!(0)));
}

#[test]
fn prop_type_violations_do_not_block_rendering() {
    let connector = counter_connector();
    let meta = ComponentMeta::new().prop_type("missing", PropType::required(PropKind::String));
    let (component, log) = RecordingComponent::new("counter");
    connector
        .bind("counter")
        .wrap(component.with_meta(meta))
        .instantiate(Props::new())
        .mount();

    assert_eq!(log.lock().len(), 1);
}
