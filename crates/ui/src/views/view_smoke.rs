use std::time::Duration;

use quiz_core::model::{AnswerFeedback, QuestionCount};
use services::QuizConfig;

use super::test_harness::{ViewHarness, setup_view_harness};
use crate::vm::QuizIntent;

fn seeded() -> ViewHarness {
    setup_view_harness(QuizConfig::default().with_seed(17))
}

#[tokio::test(flavor = "current_thread")]
async fn idle_view_renders_settings_only() {
    let harness = seeded();
    let html = harness.render();
    assert!(html.contains("Settings"), "missing settings in {html}");
    assert!(html.contains("Up to 2 multiplication tables"), "missing stepper in {html}");
    assert!(html.contains("How many questions"), "missing picker in {html}");
    assert!(html.contains("quiz-start"), "missing start button in {html}");
    assert!(!html.contains("Check"), "question section shown while idle: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn start_renders_first_question_and_score() {
    let mut harness = seeded();
    harness.dispatch(QuizIntent::IncrementTables);
    harness.dispatch(QuizIntent::Start);

    let screen = harness.screen();
    let question = screen.question.expect("question shown");
    let html = harness.render();
    assert!(html.contains(&question), "missing {question} in {html}");
    assert!(html.contains("Up to 3 multiplication tables"), "stepper not updated: {html}");
    assert!(html.contains("Score (5 questions left)"), "missing remaining in {html}");
    assert!(html.contains("0/5"), "missing score in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn wrong_answer_shows_incorrect_mark() {
    let mut harness = seeded();
    harness.dispatch(QuizIntent::Start);
    let wrong = format!("{}0", harness.correct_answer());
    harness.answer(&wrong);

    assert_eq!(harness.screen().feedback, AnswerFeedback::Incorrect);
    let html = harness.render();
    assert!(html.contains("quiz-feedback--incorrect"), "missing mark in {html}");
    assert!(html.contains("Score (4 questions left)"), "did not advance: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn feedback_mark_clears_after_delay() {
    let config = QuizConfig::default()
        .with_seed(17)
        .with_feedback_delay(Duration::from_millis(1));
    let mut harness = setup_view_harness(config);
    harness.dispatch(QuizIntent::Start);
    let answer = harness.correct_answer();
    harness.answer(&answer);
    assert_eq!(harness.screen().feedback, AnswerFeedback::Correct);

    for _ in 0..10 {
        if harness.screen().feedback == AnswerFeedback::Unknown {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
        harness.drive_async().await;
    }
    assert_eq!(harness.screen().feedback, AnswerFeedback::Unknown);
    assert!(!harness.render().contains("quiz-feedback--correct"));
}

#[tokio::test(flavor = "current_thread")]
async fn perfect_round_then_change_settings() {
    let mut harness = seeded();
    harness.dispatch(QuizIntent::Start);
    for _ in 0..5 {
        let answer = harness.correct_answer();
        harness.answer(&answer);
    }

    let html = harness.render();
    assert!(html.contains("Congratulations!"), "missing dialog in {html}");
    assert!(html.contains("5 out of 5"), "missing tally in {html}");
    assert!(html.contains("Start again"), "missing replay in {html}");

    harness.dispatch(QuizIntent::ChangeSettings);
    let html = harness.render();
    assert!(!html.contains("Congratulations!"), "dialog still open: {html}");
    assert!(!html.contains("Check"), "question still shown: {html}");
    assert!(html.contains("Up to 2 multiplication tables"));
}

#[tokio::test(flavor = "current_thread")]
async fn start_again_keeps_settings() {
    let mut harness = seeded();
    for _ in 0..4 {
        harness.dispatch(QuizIntent::IncrementTables);
    }
    harness.dispatch(QuizIntent::SetQuestionCount(QuestionCount::Ten));
    harness.dispatch(QuizIntent::Start);
    for _ in 0..10 {
        harness.answer("nope");
    }
    assert!(harness.render().contains("0 out of 10"));

    harness.dispatch(QuizIntent::StartNewRound);
    let screen = harness.screen();
    assert_eq!(screen.tables, 6);
    assert!(screen.summary.is_none());
    assert!(harness.render().contains("Score (10 questions left)"));
}

#[tokio::test(flavor = "current_thread")]
async fn settings_change_mid_round_shows_error() {
    let mut harness = seeded();
    harness.dispatch(QuizIntent::Start);
    harness.dispatch(QuizIntent::IncrementTables);
    let html = harness.render();
    assert!(
        html.contains("Finish the current round before changing settings."),
        "missing error in {html}"
    );
    assert_eq!(harness.screen().tables, 2);
}
