use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{Clock, ProgressService, TopicCatalog};
use storage::repository::{Storage, UserTopicRepository};
use trail_core::model::{Status, TopicId, UserId};
use trail_core::time::fixed_now;

use crate::context::{UiApp, build_app_context};
use crate::views::TopicsView;
use crate::views::topics::components::TopicModal;
use crate::vm::markdown_to_html;

#[derive(Clone)]
struct TestApp {
    user_id: UserId,
    catalog: Arc<TopicCatalog>,
    progress: Arc<ProgressService>,
}

impl UiApp for TestApp {
    fn current_user_id(&self) -> UserId {
        self.user_id.clone()
    }

    fn catalog(&self) -> Arc<TopicCatalog> {
        Arc::clone(&self.catalog)
    }

    fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    rsx! { TopicsView {} }
}

#[derive(Props, Clone)]
struct ModalHarnessProps {
    app: Arc<TestApp>,
    is_open: bool,
    body_markdown: String,
}

impl PartialEq for ModalHarnessProps {
    fn eq(&self, other: &Self) -> bool {
        self.is_open == other.is_open && self.body_markdown == other.body_markdown
    }
}

#[component]
fn ModalHarness(props: ModalHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let on_toggle = use_callback(move |()| {});
    let on_saved = use_callback(move |_: Status| {});
    let body_html = markdown_to_html(&props.body_markdown);
    rsx! {
        TopicModal {
            is_open: props.is_open,
            on_toggle,
            topic_id: TopicId::new("a").unwrap(),
            progress: Status::Pending,
            on_saved,
            div { class: "topic-body", dangerous_inner_html: "{body_html}" }
        }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub progress: Arc<ProgressService>,
    pub user_id: UserId,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

fn test_app(fixture_json: &str, user_topics: Arc<dyn UserTopicRepository>) -> Arc<TestApp> {
    let clock = Clock::fixed(fixed_now());
    let progress = Arc::new(ProgressService::new(clock, user_topics));
    let catalog = Arc::new(TopicCatalog::from_json_str(fixture_json).expect("parse fixture"));
    let user_id = UserId::new("test-user").expect("user id");

    Arc::new(TestApp {
        user_id,
        catalog,
        progress,
    })
}

pub async fn setup_view_harness(fixture_json: &str) -> ViewHarness {
    let storage = Storage::in_memory();
    setup_view_harness_with_repo(fixture_json, Arc::clone(&storage.user_topics)).await
}

pub async fn setup_view_harness_with_repo(
    fixture_json: &str,
    user_topics: Arc<dyn UserTopicRepository>,
) -> ViewHarness {
    let app = test_app(fixture_json, user_topics);
    let progress = app.progress();
    let user_id = app.current_user_id();

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app });

    ViewHarness {
        dom,
        progress,
        user_id,
    }
}

pub async fn setup_modal_harness(is_open: bool, body_markdown: &str) -> ViewHarness {
    let storage = Storage::in_memory();
    let app = test_app(
        r#"{ "data": [ { "id": "a", "title": "T1", "body": "**b**" } ] }"#,
        Arc::clone(&storage.user_topics),
    );
    let progress = app.progress();
    let user_id = app.current_user_id();

    let dom = VirtualDom::new_with_props(
        ModalHarness,
        ModalHarnessProps {
            app,
            is_open,
            body_markdown: body_markdown.to_string(),
        },
    );

    ViewHarness {
        dom,
        progress,
        user_id,
    }
}
