mod base;
mod prompt;
mod request;

pub use base::{InputRequest, InvalidArgument};
pub use prompt::{Answer, ConsolePrompt, InputHandler};
pub use request::{
    FreeTextInputRequest, MultipleChoiceInputRequest, NumericRangeInputRequest, YesNoInputRequest,
    NO, YES,
};

/// Default handler reading from the interactive terminal
pub fn create_default_input_handler() -> impl InputHandler {
    ConsolePrompt::new()
}
