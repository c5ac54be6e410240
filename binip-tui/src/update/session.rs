//! 会话事件处理

use std::sync::{Arc, Mutex};

use binip_app::Store;
use binip_core::{router, Command, Event};

use crate::model::{App, Form};

/// 处理一条调度器事件，返回需要调度的命令
pub fn apply(app: &mut App, event: Event) -> Vec<Command> {
    // 观察者：表单归属于请求它时的子状态 / 模式
    if let Event::PromptRequested(prompt) = &event {
        if let Some(owner) = app.form_owner() {
            app.form = Some(Form::from_prompt(prompt.clone(), owner));
        }
    }
    let refresh = matches!(event, Event::RecordsLoaded { .. });

    let mut commands = router::handle(&mut app.machine, event);

    app.drop_stale_form();
    app.clamp_cursor();

    if refresh {
        commands.push(refresh_dump(Arc::clone(&app.store), Arc::clone(&app.dump)));
    }
    commands
}

/// 重新渲染存储内容供列表视图显示
fn refresh_dump(store: Arc<Store>, slot: Arc<Mutex<String>>) -> Command {
    Command::task("render store dump", async move {
        let text = store.render_dump().await;
        match slot.lock() {
            Ok(mut dump) => *dump = text,
            Err(e) => log::error!("store dump slot poisoned: {e}"),
        }
        None
    })
}

#[cfg(test)]
mod tests {
    use binip_core::{Dispatcher, OnboardingSubState, OperationalMode, PrimaryState, Prompt};

    use super::*;
    use crate::message::{AppMessage, FormMessage};
    use crate::model::{FormKind, FormOwner};
    use crate::update::update;

    async fn new_app() -> App {
        App::new(Arc::new(Store::in_memory().await.unwrap()), false)
    }

    async fn drain(app: &mut App, dispatcher: &mut Dispatcher) {
        while let Some(event) = dispatcher.next().await {
            let commands = apply(app, event);
            dispatcher.schedule_all(commands);
        }
    }

    async fn send(app: &mut App, dispatcher: &mut Dispatcher, msg: AppMessage) {
        if let Some(event) = update(app, msg) {
            dispatcher.post(event);
        }
        drain(app, dispatcher).await;
    }

    #[tokio::test]
    async fn start_installs_selection_form() {
        let mut app = new_app().await;
        let mut dispatcher = Dispatcher::current();
        dispatcher.schedule_all(app.machine.start());
        drain(&mut app, &mut dispatcher).await;

        let form = app.form.as_ref().unwrap();
        assert_eq!(
            form.owner,
            FormOwner::Onboarding(OnboardingSubState::SelectingPrefix)
        );
        assert!(matches!(&form.kind, FormKind::Select { options, .. } if options.len() == 4));
    }

    #[tokio::test]
    async fn full_onboarding_through_forms() {
        let mut app = new_app().await;
        let mut dispatcher = Dispatcher::current();
        dispatcher.schedule_all(app.machine.start());
        drain(&mut app, &mut dispatcher).await;

        // 第二项 172.16.0.0/12
        send(&mut app, &mut dispatcher, AppMessage::Form(FormMessage::Next)).await;
        send(&mut app, &mut dispatcher, AppMessage::Form(FormMessage::Submit)).await;
        assert_eq!(app.machine.pending_prefix(), Some("172.16.0.0/12"));
        assert_eq!(
            app.form.as_ref().map(|f| f.owner),
            Some(FormOwner::Onboarding(OnboardingSubState::ConfirmingPrefix))
        );

        send(&mut app, &mut dispatcher, AppMessage::Form(FormMessage::Answer(true))).await;

        assert_eq!(app.machine.primary(), PrimaryState::Operational);
        assert_eq!(app.machine.mode(), Some(OperationalMode::List));
        assert!(app.form.is_none());
        assert_eq!(app.store.network_prefix().await.as_deref(), Some("172.16.0.0/12"));
        assert!(app.dump_text().contains("network_prefix | 172.16.0.0/12"));
    }

    #[tokio::test]
    async fn form_is_dropped_when_its_state_is_left() {
        let mut app = new_app().await;
        let mut dispatcher = Dispatcher::current();
        let commands = app
            .machine
            .request_transition(PrimaryState::Operational)
            .unwrap();
        dispatcher.schedule_all(commands);
        drain(&mut app, &mut dispatcher).await;

        send(
            &mut app,
            &mut dispatcher,
            AppMessage::Operational(crate::message::OperationalMessage::Create),
        )
        .await;
        assert_eq!(
            app.form.as_ref().map(|f| f.owner),
            Some(FormOwner::Operational(OperationalMode::Create))
        );

        send(&mut app, &mut dispatcher, AppMessage::Form(FormMessage::Submit)).await;
        assert_eq!(app.machine.status(), "Record created successfully");
        assert_eq!(app.machine.mode(), Some(OperationalMode::List));
        assert!(app.form.is_none());
    }

    #[tokio::test]
    async fn prompt_for_left_state_is_not_installed_after_quit() {
        let mut app = new_app().await;
        app.machine.request_transition(PrimaryState::Quitting).unwrap();
        apply(&mut app, Event::PromptRequested(Prompt::CustomPrefix));
        assert!(app.form.is_none());
        assert!(app.should_quit());
    }
}
