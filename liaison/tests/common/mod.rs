#![allow(dead_code)]

use liaison::{
    BoxError, HostId, Injectable, Mediator, Resolver, SceneTree, View, ViewLink,
    testing::Journal,
};

// ============================================================================
// Test Views
// ============================================================================

macro_rules! flag_view {
    ($name:ident) => {
        #[derive(Default, Debug)]
        pub struct $name {
            pub registered: bool,
        }

        impl Injectable for $name {}

        impl View for $name {
            fn registered_with_context(&self) -> bool {
                self.registered
            }

            fn set_registered_with_context(&mut self, registered: bool) {
                self.registered = registered;
            }
        }
    };
}

flag_view!(Panel);
flag_view!(Dialog);
flag_view!(Toolbar);

/// Wraps a `Dialog`; the closest Rust gets to a subclass.
#[derive(Default, Debug)]
pub struct FancyDialog {
    pub base: Dialog,
}

impl Injectable for FancyDialog {}

impl View for FancyDialog {
    fn registered_with_context(&self) -> bool {
        self.base.registered
    }

    fn set_registered_with_context(&mut self, registered: bool) {
        self.base.registered = registered;
    }
}

/// Session value provided through the container.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user: &'static str,
}

/// A view that needs a `Session` injected.
#[derive(Default, Debug)]
pub struct Avatar {
    pub registered: bool,
    pub session: Option<Session>,
}

impl Injectable for Avatar {
    fn inject_fields(&mut self, resolver: &dyn Resolver) -> Result<(), BoxError> {
        self.session = Some(resolver.require::<Session>(self.type_key())?);
        Ok(())
    }
}

impl View for Avatar {
    fn registered_with_context(&self) -> bool {
        self.registered
    }

    fn set_registered_with_context(&mut self, registered: bool) {
        self.registered = registered;
    }
}

// ============================================================================
// Test Mediators
// ============================================================================

/// Records the view link it was given and whether it saw its session.
#[derive(Default, Debug)]
pub struct DialogMediator {
    pub view: Option<ViewLink>,
    pub session: Option<Session>,
    pub removed: usize,
}

impl Injectable for DialogMediator {
    fn inject_fields(&mut self, resolver: &dyn Resolver) -> Result<(), BoxError> {
        self.session = resolver.resolve::<Session>().cloned();
        Ok(())
    }
}

impl Mediator for DialogMediator {
    fn set_view_component(&mut self, view: ViewLink) {
        self.view = Some(view);
    }

    fn on_register(&mut self) -> Result<(), BoxError> {
        Journal::record("DialogMediator on_register");
        Ok(())
    }

    fn on_remove(&mut self) -> Result<(), BoxError> {
        self.removed += 1;
        Journal::record("DialogMediator on_remove");
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("refusing to register")]
pub struct Refusal;

/// Fails in `on_register`.
#[derive(Default, Debug)]
pub struct StubbornMediator;

impl Injectable for StubbornMediator {}

impl Mediator for StubbornMediator {
    fn set_view_component(&mut self, _view: ViewLink) {}

    fn on_register(&mut self) -> Result<(), BoxError> {
        Err(Box::new(Refusal))
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// Panel(view) -> frame(no view) -> Dialog(view).
pub struct PanelScene {
    pub scene: SceneTree,
    pub panel: HostId,
    pub frame: HostId,
    pub dialog: HostId,
}

pub fn panel_scene() -> PanelScene {
    let mut scene = SceneTree::new();
    let panel = scene.spawn_root();
    let frame = scene.spawn_child(panel).unwrap();
    let dialog = scene.spawn_child(frame).unwrap();
    scene.attach_view(panel, Panel::default()).unwrap();
    scene.attach_view(dialog, Dialog::default()).unwrap();
    PanelScene {
        scene,
        panel,
        frame,
        dialog,
    }
}

pub fn is_registered<V: View>(scene: &SceneTree, host: HostId) -> bool {
    scene.view::<V>(host).unwrap().registered_with_context()
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
        .with_test_writer()
        .try_init();
}
