use super::base::{InputRequest, InvalidArgument};

pub const YES: &str = "yes";
pub const NO: &str = "no";

/// A question whose valid answers come from a fixed set of choices.
///
/// The choice set is owned by the request and cannot change after
/// construction. Order is preserved for display only; duplicates are
/// legal but meaningless.
#[derive(Debug, Clone)]
pub struct MultipleChoiceInputRequest {
    prompt: String,
    choices: Vec<String>,
}

impl MultipleChoiceInputRequest {
    /// The prompt must contain non-whitespace text and at least two
    /// choices must be provided. Both are kept verbatim.
    pub fn new(prompt: impl Into<String>, choices: Vec<String>) -> Result<Self, InvalidArgument> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(InvalidArgument::new(
                "prompt must not be empty or whitespace",
            ));
        }
        if choices.len() < 2 {
            return Err(InvalidArgument::new(
                "at least two choices need to be provided",
            ));
        }
        Ok(Self { prompt, choices })
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }
}

impl InputRequest for MultipleChoiceInputRequest {
    fn prompt(&self) -> String {
        format!("{} [{}]", self.prompt, self.choices.join(", "))
    }

    // Exact membership only. Answers are not trimmed or case-folded.
    fn is_valid(&self, answer: &str) -> bool {
        self.choices.iter().any(|choice| choice == answer)
    }
}

/// A yes/no confirmation question.
#[derive(Debug, Clone)]
pub struct YesNoInputRequest {
    prompt: String,
}

impl YesNoInputRequest {
    pub fn new(prompt: impl Into<String>) -> Result<Self, InvalidArgument> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(InvalidArgument::new(
                "prompt must not be empty or whitespace",
            ));
        }
        Ok(Self { prompt })
    }
}

impl InputRequest for YesNoInputRequest {
    fn prompt(&self) -> String {
        format!("{} [{}, {}]", self.prompt, YES, NO)
    }

    fn is_valid(&self, answer: &str) -> bool {
        answer == YES || answer == NO
    }
}

/// A question accepting any non-empty line of text.
#[derive(Debug, Clone)]
pub struct FreeTextInputRequest {
    prompt: String,
}

impl FreeTextInputRequest {
    pub fn new(prompt: impl Into<String>) -> Result<Self, InvalidArgument> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(InvalidArgument::new(
                "prompt must not be empty or whitespace",
            ));
        }
        Ok(Self { prompt })
    }
}

impl InputRequest for FreeTextInputRequest {
    fn prompt(&self) -> String {
        self.prompt.clone()
    }

    fn is_valid(&self, answer: &str) -> bool {
        !answer.is_empty()
    }
}

/// A question expecting an integer inside an inclusive range.
#[derive(Debug, Clone)]
pub struct NumericRangeInputRequest {
    prompt: String,
    min: i64,
    max: i64,
}

impl NumericRangeInputRequest {
    pub fn new(prompt: impl Into<String>, min: i64, max: i64) -> Result<Self, InvalidArgument> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(InvalidArgument::new(
                "prompt must not be empty or whitespace",
            ));
        }
        if min > max {
            return Err(InvalidArgument::with_details(
                "range lower bound exceeds upper bound",
                format!("{}..{}", min, max),
            ));
        }
        Ok(Self { prompt, min, max })
    }
}

impl InputRequest for NumericRangeInputRequest {
    fn prompt(&self) -> String {
        format!("{} [{}..{}]", self.prompt, self.min, self.max)
    }

    fn is_valid(&self, answer: &str) -> bool {
        answer
            .parse::<i64>()
            .map(|value| value >= self.min && value <= self.max)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_multiple_choice_prompt_format() {
        let request = MultipleChoiceInputRequest::new("Pick one", choices(&["yes", "no"])).unwrap();
        assert_eq!(request.prompt(), "Pick one [yes, no]");

        let request =
            MultipleChoiceInputRequest::new("Select env", choices(&["dev", "qa", "prod"])).unwrap();
        assert_eq!(request.prompt(), "Select env [dev, qa, prod]");
    }

    #[test]
    fn test_multiple_choice_exact_match() {
        let request = MultipleChoiceInputRequest::new("Pick one", choices(&["yes", "no"])).unwrap();
        assert!(request.is_valid("yes"));
        assert!(!request.is_valid("Yes"));
        assert!(!request.is_valid("maybe"));
        assert!(!request.is_valid(" yes"));
        assert!(!request.is_valid("yes "));
        assert!(!request.is_valid(""));
    }

    #[test]
    fn test_multiple_choice_blank_prompt_rejected() {
        assert!(MultipleChoiceInputRequest::new("", choices(&["a", "b"])).is_err());
        assert!(MultipleChoiceInputRequest::new("   ", choices(&["a", "b"])).is_err());
        assert!(MultipleChoiceInputRequest::new("\t\n", choices(&["a", "b"])).is_err());
    }

    #[test]
    fn test_multiple_choice_too_few_choices_rejected() {
        assert!(MultipleChoiceInputRequest::new("Choose", choices(&["only"])).is_err());
        assert!(MultipleChoiceInputRequest::new("Choose", Vec::new()).is_err());
    }

    #[test]
    fn test_multiple_choice_keeps_inputs_verbatim() {
        // No trimming or normalization of prompt or choices.
        let request =
            MultipleChoiceInputRequest::new("  Spaced  ", choices(&[" a ", "b, c"])).unwrap();
        assert_eq!(request.prompt(), "  Spaced   [ a , b, c]");
        assert!(request.is_valid(" a "));
        assert!(!request.is_valid("a"));
    }

    #[test]
    fn test_multiple_choice_duplicates_are_legal() {
        let request = MultipleChoiceInputRequest::new("Pick", choices(&["a", "a"])).unwrap();
        assert_eq!(request.prompt(), "Pick [a, a]");
        assert!(request.is_valid("a"));
    }

    #[test]
    fn test_repeated_calls_return_identical_results() {
        let request =
            MultipleChoiceInputRequest::new("Select env", choices(&["dev", "qa", "prod"])).unwrap();
        let first = request.prompt();
        for _ in 0..3 {
            assert_eq!(request.prompt(), first);
            assert!(request.is_valid("prod"));
            assert!(!request.is_valid("staging"));
        }
    }

    #[test]
    fn test_yes_no_request() {
        let request = YesNoInputRequest::new("Deploy now?").unwrap();
        assert_eq!(request.prompt(), "Deploy now? [yes, no]");
        assert!(request.is_valid("yes"));
        assert!(request.is_valid("no"));
        assert!(!request.is_valid("Yes"));
        assert!(!request.is_valid(" yes"));
        assert!(!request.is_valid(""));
        assert!(YesNoInputRequest::new(" ").is_err());
    }

    #[test]
    fn test_free_text_request() {
        let request = FreeTextInputRequest::new("Reason for deploy").unwrap();
        assert_eq!(request.prompt(), "Reason for deploy");
        assert!(request.is_valid("hotfix for prod"));
        assert!(request.is_valid(" "));
        assert!(!request.is_valid(""));
        assert!(FreeTextInputRequest::new("").is_err());
    }

    #[test]
    fn test_numeric_range_request() {
        let request = NumericRangeInputRequest::new("Worker count", 1, 64).unwrap();
        assert_eq!(request.prompt(), "Worker count [1..64]");
        assert!(request.is_valid("1"));
        assert!(request.is_valid("64"));
        assert!(request.is_valid("32"));
        assert!(!request.is_valid("0"));
        assert!(!request.is_valid("65"));
        assert!(!request.is_valid("ten"));
        assert!(!request.is_valid(""));
        assert!(!request.is_valid("3.5"));
    }

    #[test]
    fn test_numeric_range_inverted_bounds_rejected() {
        let err = NumericRangeInputRequest::new("Count", 5, 1).unwrap_err();
        assert!(err.to_string().contains("lower bound"));
    }
}
