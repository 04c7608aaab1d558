mod question;

pub use question::{QuestionKind, QuestionSpec, Questionnaire};
