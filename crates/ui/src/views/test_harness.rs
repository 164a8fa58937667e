use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::QuizConfig;

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;
use crate::views::quiz::QuizTestHandles;
use crate::vm::{QuizIntent, QuizScreenVm};

#[derive(Clone)]
struct TestApp {
    config: QuizConfig,
}

impl UiApp for TestApp {
    fn quiz_config(&self) -> QuizConfig {
        self.config
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn QuizHarness(props: ViewHarnessProps) -> Element {
    use_context_provider(|| build_app_context(props.app.as_ref()));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn dispatch(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn screen(&self) -> QuizScreenVm {
        let vm = self.handles.vm();
        self.dom.in_runtime(|| vm.read().screen())
    }

    /// Current question's product, as the player would type it.
    pub fn correct_answer(&self) -> String {
        let vm = self.handles.vm();
        self.dom.in_runtime(|| {
            vm.read()
                .session()
                .current_question()
                .map(|question| question.answer().to_string())
                .expect("question shown")
        })
    }

    pub fn answer(&mut self, text: &str) {
        self.dispatch(QuizIntent::EditAnswer(text.to_string()));
        self.dispatch(QuizIntent::Submit);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
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

pub fn setup_view_harness(config: QuizConfig) -> ViewHarness {
    let handles = QuizTestHandles::default();
    let app = Arc::new(TestApp { config });
    let dom = VirtualDom::new_with_props(
        QuizHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );
    let mut harness = ViewHarness { dom, handles };
    harness.rebuild();
    harness
}
