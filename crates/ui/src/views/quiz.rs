use dioxus::prelude::*;
use dioxus::core::Task;
use quiz_core::model::{AnswerFeedback, QuestionCount};
use tracing::debug;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{QuizEffect, QuizIntent, QuizVm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let feedback_delay = ctx.feedback_delay();

    let vm = use_signal(|| QuizVm::new(ctx.new_session()));
    let error = use_signal(|| None::<ViewError>);
    let feedback_task = use_signal(|| None::<Task>);

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        let mut error = error;
        let mut feedback_task = feedback_task;

        debug!(?intent, "quiz intent");
        let result = vm.write().apply(intent);
        match result {
            Ok(effect) => {
                error.set(None);
                match effect {
                    QuizEffect::None => {}
                    QuizEffect::CancelFeedbackReset => {
                        if let Some(task) = feedback_task.take() {
                            task.cancel();
                        }
                    }
                    QuizEffect::ScheduleFeedbackReset(ticket) => {
                        if let Some(task) = feedback_task.take() {
                            task.cancel();
                        }
                        let task = spawn(async move {
                            tokio::time::sleep(feedback_delay).await;
                            let mut vm = vm;
                            // Stale tickets are ignored by the session.
                            let _ = vm.write().apply(QuizIntent::FeedbackExpired(ticket));
                        });
                        feedback_task.set(Some(task));
                    }
                }
            }
            Err(err) => {
                error.set(Some(err));
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let on_key = use_callback(move |evt: KeyboardEvent| {
        if evt.data.key() == Key::Enter {
            evt.prevent_default();
            dispatch_intent.call(QuizIntent::Submit);
        }
    });

    let screen = vm.read().screen();
    let current_count = screen.question_count;

    rsx! {
        div { class: "page quiz-page",
            h1 { class: "quiz-title", "Edutainment" }

            section { class: "quiz-section",
                h2 { class: "quiz-section__title", "Settings" }
                div { class: "quiz-stepper",
                    span { class: "quiz-stepper__label", "{screen.tables_label}" }
                    button {
                        class: "quiz-stepper__btn",
                        id: "tables-decrement",
                        r#type: "button",
                        disabled: !screen.can_decrement_tables,
                        onclick: move |_| dispatch_intent.call(QuizIntent::DecrementTables),
                        "-"
                    }
                    button {
                        class: "quiz-stepper__btn",
                        id: "tables-increment",
                        r#type: "button",
                        disabled: !screen.can_increment_tables,
                        onclick: move |_| dispatch_intent.call(QuizIntent::IncrementTables),
                        "+"
                    }
                }
                label { class: "quiz-picker",
                    span { "How many questions" }
                    select {
                        class: "quiz-picker__select",
                        id: "question-count",
                        disabled: screen.settings_locked,
                        value: "{current_count}",
                        onchange: move |evt| {
                            if let Ok(value) = evt.value().parse::<u32>() {
                                dispatch_intent
                                    .call(QuizIntent::SetQuestionCount(QuestionCount::nearest(value)));
                            }
                        },
                        for count in QuestionCount::ALL {
                            option {
                                value: "{count}",
                                selected: count == current_count,
                                "{count}"
                            }
                        }
                    }
                }
                button {
                    class: "btn btn-primary",
                    id: "quiz-start",
                    r#type: "button",
                    onclick: move |_| dispatch_intent.call(QuizIntent::Start),
                    "Let's go!"
                }
            }

            if let Some(err) = *error.read() {
                p { class: "quiz-error", "{err.message()}" }
            }

            if let Some(question) = screen.question.as_deref() {
                section { class: "quiz-section",
                    h2 { class: "quiz-section__title quiz-question", "{question}" }
                    div { class: "quiz-answer",
                        input {
                            class: "quiz-answer__input",
                            id: "quiz-answer",
                            r#type: "text",
                            placeholder: "Enter the answer",
                            value: "{screen.pending_answer}",
                            oninput: move |evt| dispatch_intent.call(QuizIntent::EditAnswer(evt.value())),
                            onkeydown: on_key,
                        }
                        FeedbackMark { feedback: screen.feedback }
                    }
                    button {
                        class: "btn btn-secondary",
                        id: "quiz-check",
                        r#type: "button",
                        onclick: move |_| dispatch_intent.call(QuizIntent::Submit),
                        "Check"
                    }
                }

                section { class: "quiz-section",
                    h2 { class: "quiz-section__title", "{screen.remaining_label}" }
                    p { class: "quiz-score", "{screen.score_label}" }
                }
            }

            if let Some(dialog) = screen.summary.as_ref() {
                div { class: "quiz-overlay",
                    div {
                        class: "quiz-dialog",
                        role: "dialog",
                        aria_modal: "true",
                        aria_labelledby: "quiz-dialog-title",
                        h3 { class: "quiz-dialog__title", id: "quiz-dialog-title", "{dialog.title}" }
                        p { class: "quiz-dialog__message", "{dialog.message}" }
                        div { class: "quiz-dialog__actions",
                            button {
                                class: "btn btn-danger",
                                id: "quiz-start-again",
                                r#type: "button",
                                onclick: move |_| dispatch_intent.call(QuizIntent::StartNewRound),
                                "Start again"
                            }
                            button {
                                class: "btn btn-secondary",
                                id: "quiz-change-settings",
                                r#type: "button",
                                onclick: move |_| dispatch_intent.call(QuizIntent::ChangeSettings),
                                "Change settings"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FeedbackMark(feedback: AnswerFeedback) -> Element {
    match feedback {
        AnswerFeedback::Correct => rsx! {
            span { class: "quiz-feedback quiz-feedback--correct", "✓" }
        },
        AnswerFeedback::Incorrect => rsx! {
            span { class: "quiz-feedback quiz-feedback--incorrect", "✗" }
        },
        AnswerFeedback::Unknown => rsx! {},
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    vm: Rc<RefCell<Option<Signal<QuizVm>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, vm: Signal<QuizVm>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<QuizVm> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }
}
