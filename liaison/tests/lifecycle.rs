//! Awake/destroyed choreography.

use liaison::{
    HostId, MediationBinder, MediationDispatcher, MediationError, MediationEvent, SceneGraph,
    SceneTree, TypeKey,
    testing::{Journal, RecordingInjector, RecordingMediator},
};

mod common;
use common::{Dialog, DialogMediator, Panel, Toolbar, init_tracing, is_registered, panel_scene};

struct First;
struct Second;

type FirstMediator = RecordingMediator<First>;
type SecondMediator = RecordingMediator<Second>;

#[test]
fn test_unbound_view_injects_children_but_creates_no_mediator() {
    init_tracing();
    let injector = RecordingInjector::new();
    let dispatcher = MediationDispatcher::new(MediationBinder::new(injector.clone()));
    let mut fixture = panel_scene();

    dispatcher
        .trigger(&mut fixture.scene, MediationEvent::Awake, fixture.panel)
        .unwrap();

    assert!(is_registered::<Dialog>(&fixture.scene, fixture.dialog));
    assert_eq!(injector.injected_count::<Dialog>(), 1);
    assert_eq!(fixture.scene.mediator_count(fixture.panel), 0);
    assert_eq!(fixture.scene.mediator_count(fixture.dialog), 0);
}

#[test]
fn test_nested_views_injected_without_binding_enforcement() {
    let injector = RecordingInjector::new();
    let mut binder = MediationBinder::new(injector.clone());
    binder.bind::<Panel>();
    let dispatcher = MediationDispatcher::new(binder);
    let mut fixture = panel_scene();

    dispatcher
        .trigger(&mut fixture.scene, MediationEvent::Awake, fixture.panel)
        .unwrap();

    let records = injector.injected();
    assert_eq!(records.len(), 1, "only the nested view is injected");
    assert!(records[0].target.is::<Dialog>());
    assert!(!records[0].enforce_binding_required);
}

#[test]
fn test_mediators_start_in_order_without_interleaving() {
    Journal::clear();
    let mut binder = MediationBinder::new(RecordingInjector::new());
    binder
        .bind::<Dialog>()
        .to::<FirstMediator>()
        .to::<SecondMediator>();
    let dispatcher = MediationDispatcher::new(binder);
    let mut fixture = panel_scene();

    dispatcher
        .trigger(&mut fixture.scene, MediationEvent::Awake, fixture.dialog)
        .unwrap();

    assert_eq!(
        Journal::take(),
        vec![
            "First set_view_component",
            "First pre_register",
            "inject RecordingMediator",
            "First on_register",
            "Second set_view_component",
            "Second pre_register",
            "inject RecordingMediator",
            "Second on_register",
        ]
    );
    assert_eq!(fixture.scene.mediators_of::<FirstMediator>(fixture.dialog).count(), 1);
    assert_eq!(fixture.scene.mediators_of::<SecondMediator>(fixture.dialog).count(), 1);
    assert_eq!(fixture.scene.mediator_count(fixture.dialog), 2);
}

#[test]
fn test_mediator_linked_to_its_view() {
    let mut binder = MediationBinder::new(RecordingInjector::new());
    binder.bind::<Dialog>().to::<DialogMediator>();
    let dispatcher = MediationDispatcher::new(binder);
    let mut fixture = panel_scene();

    dispatcher
        .trigger(&mut fixture.scene, MediationEvent::Awake, fixture.dialog)
        .unwrap();

    let mediator = fixture
        .scene
        .mediator::<DialogMediator>(fixture.dialog)
        .unwrap();
    let link = mediator.view.unwrap();
    assert_eq!(link.host, fixture.dialog);
    assert_eq!(link.view_type, TypeKey::of::<Dialog>());
}

#[test]
fn test_destroyed_removes_each_mediator_once() {
    Journal::clear();
    let mut binder = MediationBinder::new(RecordingInjector::new());
    binder
        .bind::<Dialog>()
        .to::<FirstMediator>()
        .to::<SecondMediator>();
    let dispatcher = MediationDispatcher::new(binder);
    let mut fixture = panel_scene();

    dispatcher
        .trigger(&mut fixture.scene, MediationEvent::Awake, fixture.dialog)
        .unwrap();
    Journal::clear();

    dispatcher
        .trigger(&mut fixture.scene, MediationEvent::Destroyed, fixture.dialog)
        .unwrap();

    assert_eq!(Journal::take(), vec!["First on_remove", "Second on_remove"]);
}

#[test]
fn test_destroyed_skips_missing_mediators() {
    Journal::clear();
    let mut binder = MediationBinder::new(RecordingInjector::new());
    binder
        .bind::<Dialog>()
        .to::<FirstMediator>()
        .to::<SecondMediator>();
    let dispatcher = MediationDispatcher::new(binder);
    let mut fixture = panel_scene();

    // Only the second mediator was ever attached.
    fixture
        .scene
        .add_mediator(fixture.dialog, Box::new(SecondMediator::default()))
        .unwrap();

    dispatcher
        .trigger(&mut fixture.scene, MediationEvent::Destroyed, fixture.dialog)
        .unwrap();

    assert_eq!(Journal::take(), vec!["Second on_remove"]);
}

#[test]
fn test_destroyed_on_never_woken_view_is_noop() {
    Journal::clear();
    let mut binder = MediationBinder::new(RecordingInjector::new());
    binder.bind::<Dialog>().to::<DialogMediator>();
    let dispatcher = MediationDispatcher::new(binder);
    let mut fixture = panel_scene();

    dispatcher
        .trigger(&mut fixture.scene, MediationEvent::Destroyed, fixture.dialog)
        .unwrap();

    assert!(Journal::take().is_empty());
    assert!(!is_registered::<Dialog>(&fixture.scene, fixture.dialog));
}

#[test]
fn test_duplicate_awake_attaches_second_instance() {
    let mut binder = MediationBinder::new(RecordingInjector::new());
    binder.bind::<Dialog>().to::<DialogMediator>();
    let dispatcher = MediationDispatcher::new(binder);
    let mut fixture = panel_scene();

    for _ in 0..2 {
        dispatcher
            .trigger(&mut fixture.scene, MediationEvent::Awake, fixture.dialog)
            .unwrap();
    }

    assert_eq!(
        fixture
            .scene
            .mediators_of::<DialogMediator>(fixture.dialog)
            .count(),
        2
    );
}

#[test]
fn test_reserved_events_do_nothing() {
    Journal::clear();
    let injector = RecordingInjector::new();
    let mut binder = MediationBinder::new(injector.clone());
    binder.bind::<Panel>().to::<DialogMediator>();
    let dispatcher = MediationDispatcher::new(binder);
    let mut fixture = panel_scene();

    for event in [MediationEvent::Enabled, MediationEvent::Disabled] {
        dispatcher
            .trigger(&mut fixture.scene, event, fixture.panel)
            .unwrap();
    }

    assert_eq!(fixture.scene.mediator_count(fixture.panel), 0);
    assert!(injector.injected().is_empty());
    assert!(!is_registered::<Panel>(&fixture.scene, fixture.panel));
    assert!(!is_registered::<Dialog>(&fixture.scene, fixture.dialog));
    assert!(Journal::take().is_empty());
}

#[test]
fn test_trigger_on_host_without_view() {
    let dispatcher = MediationDispatcher::new(MediationBinder::new(RecordingInjector::new()));
    let mut fixture = panel_scene();

    let err = dispatcher
        .trigger(&mut fixture.scene, MediationEvent::Awake, fixture.frame)
        .unwrap_err();
    assert!(matches!(err, MediationError::UnknownView(host) if host == fixture.frame));

    let err = dispatcher
        .trigger(&mut fixture.scene, MediationEvent::Destroyed, HostId(999))
        .unwrap_err();
    assert!(matches!(err, MediationError::UnknownView(HostId(999))));
}

#[test]
fn test_inactive_children_follow_options() {
    let injector = RecordingInjector::new();
    let dispatcher = MediationDispatcher::builder(MediationBinder::new(injector.clone()))
        .include_inactive(false)
        .build();

    let mut scene = SceneTree::new();
    let panel = scene.spawn_root();
    let shown = scene.spawn_child(panel).unwrap();
    let hidden = scene.spawn_child(panel).unwrap();
    scene.attach_view(panel, Panel::default()).unwrap();
    scene.attach_view(shown, Toolbar::default()).unwrap();
    scene.attach_view(hidden, Dialog::default()).unwrap();
    scene.set_active(hidden, false).unwrap();

    dispatcher
        .trigger(&mut scene, MediationEvent::Awake, panel)
        .unwrap();

    assert!(is_registered::<Toolbar>(&scene, shown));
    assert!(!is_registered::<Dialog>(&scene, hidden));
    assert_eq!(injector.injected_count::<Dialog>(), 0);

    // Default options reach inactive descendants.
    let injector = RecordingInjector::new();
    let dispatcher = MediationDispatcher::new(MediationBinder::new(injector.clone()));
    dispatcher
        .trigger(&mut scene, MediationEvent::Awake, panel)
        .unwrap();
    assert!(is_registered::<Dialog>(&scene, hidden));
    assert_eq!(injector.injected_count::<Dialog>(), 1);
}

/// Journal entries each event leaves behind on a dialog that is already awake.
fn expected_after_awake(event: MediationEvent) -> Vec<&'static str> {
    match event {
        MediationEvent::Awake => vec![
            "First set_view_component",
            "First pre_register",
            "inject RecordingMediator",
            "First on_register",
        ],
        MediationEvent::Destroyed => vec!["First on_remove"],
        MediationEvent::Enabled | MediationEvent::Disabled => Vec::new(),
    }
}

#[test]
fn test_every_event_variant_dispatches() {
    let mut binder = MediationBinder::new(RecordingInjector::new());
    binder.bind::<Dialog>().to::<FirstMediator>();
    let dispatcher = MediationDispatcher::new(binder);
    let mut fixture = panel_scene();

    dispatcher
        .trigger(&mut fixture.scene, MediationEvent::Awake, fixture.dialog)
        .unwrap();

    for event in [
        MediationEvent::Enabled,
        MediationEvent::Disabled,
        MediationEvent::Destroyed,
        MediationEvent::Awake,
    ] {
        Journal::clear();
        dispatcher
            .trigger(&mut fixture.scene, event, fixture.dialog)
            .unwrap();
        assert_eq!(Journal::take(), expected_after_awake(event), "{event}");
    }
    assert_eq!(fixture.scene.mediator_count(fixture.dialog), 2);
}

#[test]
fn test_root_view_is_marked_but_not_injected() {
    let injector = RecordingInjector::new();
    let dispatcher = MediationDispatcher::new(MediationBinder::new(injector.clone()));
    let mut fixture = panel_scene();

    dispatcher
        .trigger(&mut fixture.scene, MediationEvent::Awake, fixture.panel)
        .unwrap();

    assert!(is_registered::<Panel>(&fixture.scene, fixture.panel));
    assert_eq!(injector.injected_count::<Panel>(), 0);
    assert_eq!(injector.injected_count::<Dialog>(), 1);
}
