mod quiz_vm;

pub use quiz_vm::{QuizEffect, QuizIntent, QuizScreenVm, QuizVm, SummaryDialogVm};
