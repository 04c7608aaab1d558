pub mod cli;
pub mod compat;
pub mod input;
pub mod models;
pub mod stats;
pub mod utils;

// Re-export commonly used items
pub use input::{
    create_default_input_handler, Answer, InputHandler, InputRequest, InvalidArgument,
    MultipleChoiceInputRequest,
};
pub use models::{QuestionSpec, Questionnaire};
