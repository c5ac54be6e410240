#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! End-to-end onboarding against an on-disk store: events go through the
//! router, commands through the dispatcher, results land in the JSON file.

use binip_app::Store;
use binip_core::{router, Command, Dispatcher, Event, OnboardingSubState, PrimaryState};
use binip_core::{OperationalMode, StateMachine};

async fn drain(machine: &mut StateMachine, dispatcher: &mut Dispatcher, commands: Vec<Command>) {
    dispatcher.schedule_all(commands);
    while let Some(event) = dispatcher.next().await {
        let commands = router::handle(machine, event);
        dispatcher.schedule_all(commands);
    }
}

#[tokio::test]
async fn confirmed_prefix_is_read_back_from_disk() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let path = tmp.path().join("binip.json");
    let store = Store::open(&path).await.unwrap();

    let mut machine = StateMachine::new(Some(store.handle()));
    let mut dispatcher = Dispatcher::current();
    let start = machine.start();
    drain(&mut machine, &mut dispatcher, start).await;

    for event in [
        Event::PrefixChosen {
            prefix: "Custom Prefix".into(),
            is_custom: true,
        },
        Event::CustomPrefixEntered {
            prefix: "100.64.0.0/10".into(),
            valid: true,
        },
        Event::PrefixConfirmed {
            confirmed: true,
            prefix: "100.64.0.0/10".into(),
        },
    ] {
        dispatcher.post(event);
        drain(&mut machine, &mut dispatcher, Vec::new()).await;
    }

    assert_eq!(machine.primary(), PrimaryState::Operational);
    assert_eq!(machine.mode(), Some(OperationalMode::List));
    assert_eq!(machine.onboarding(), None);
    drop(machine);
    drop(store);

    let reopened = Store::open(&path).await.unwrap();
    assert_eq!(
        reopened.network_prefix().await.as_deref(),
        Some("100.64.0.0/10")
    );
}

#[tokio::test]
async fn declined_prefix_is_never_written() {
    let store = Store::in_memory().await.unwrap();
    let mut machine = StateMachine::new(Some(store.handle()));
    let mut dispatcher = Dispatcher::current();

    dispatcher.post(Event::PrefixChosen {
        prefix: "10.0.0.0/8".into(),
        is_custom: false,
    });
    dispatcher.post(Event::PrefixConfirmed {
        confirmed: false,
        prefix: "10.0.0.0/8".into(),
    });
    drain(&mut machine, &mut dispatcher, Vec::new()).await;

    assert_eq!(machine.onboarding(), Some(OnboardingSubState::SelectingPrefix));
    assert_eq!(store.network_prefix().await, None);
}
