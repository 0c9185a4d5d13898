use thiserror::Error;

use super::models::AskRequest;

pub const TEXT_MIN_LENGTH: usize = 20;
pub const QUESTION_MIN_LENGTH: usize = 3;
pub const TEXT_MAX_LENGTH: usize = 5000;
pub const QUESTION_MAX_LENGTH: usize = 300;

/// First failing check of an `/ask` body. The display text is shown to the user.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please provide lecture text.")]
    MissingText,
    #[error("Please enter a question.")]
    MissingQuestion,
    #[error("Lecture text is too short. Please provide more content.")]
    TextTooShort,
    #[error("Question is too short. Please be more specific.")]
    QuestionTooShort,
    #[error(
        "Lecture text exceeds maximum length ({} characters). Please shorten it.",
        TEXT_MAX_LENGTH
    )]
    TextTooLong,
    #[error(
        "Question exceeds maximum length ({} characters). Please shorten it.",
        QUESTION_MAX_LENGTH
    )]
    QuestionTooLong,
}

/// Trimmed inputs that passed every check.
#[derive(Debug, PartialEq, Eq)]
pub struct Question<'a> {
    pub text: &'a str,
    pub question: &'a str,
}

pub fn validate(req: &AskRequest) -> Result<Question<'_>, ValidationError> {
    let text = req.text.as_deref().unwrap_or_default().trim();
    let question = req.question.as_deref().unwrap_or_default().trim();

    // Lengths are in characters, not bytes.
    let text_len = text.chars().count();
    let question_len = question.chars().count();

    if text_len == 0 {
        return Err(ValidationError::MissingText);
    }
    if question_len == 0 {
        return Err(ValidationError::MissingQuestion);
    }
    if text_len < TEXT_MIN_LENGTH {
        return Err(ValidationError::TextTooShort);
    }
    if question_len < QUESTION_MIN_LENGTH {
        return Err(ValidationError::QuestionTooShort);
    }
    if text_len > TEXT_MAX_LENGTH {
        return Err(ValidationError::TextTooLong);
    }
    if question_len > QUESTION_MAX_LENGTH {
        return Err(ValidationError::QuestionTooLong);
    }

    Ok(Question { text, question })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "This is a valid lecture with enough content.";

    fn request(text: Option<&str>, question: Option<&str>) -> AskRequest {
        AskRequest {
            text: text.map(str::to_string),
            question: question.map(str::to_string),
        }
    }

    fn check(text: &str, question: &str) -> Result<(), ValidationError> {
        validate(&request(Some(text), Some(question))).map(|_| ())
    }

    #[test]
    fn accepts_valid_input_and_returns_trimmed_values() {
        let req = request(
            Some("  This is valid content with spaces.  "),
            Some("  What is this?  "),
        );
        let q = validate(&req).unwrap();
        assert_eq!(q.text, "This is valid content with spaces.");
        assert_eq!(q.question, "What is this?");
    }

    #[test]
    fn missing_and_null_fields_count_as_empty() {
        assert_eq!(validate(&request(None, None)), Err(ValidationError::MissingText));
        assert_eq!(
            validate(&request(Some(TEXT), None)),
            Err(ValidationError::MissingQuestion)
        );
        assert_eq!(validate(&AskRequest::default()), Err(ValidationError::MissingText));
    }

    #[test]
    fn whitespace_only_is_empty() {
        assert_eq!(check(" \n\t ", "What?"), Err(ValidationError::MissingText));
        assert_eq!(check(TEXT, "   "), Err(ValidationError::MissingQuestion));
    }

    #[test]
    fn checks_run_in_order() {
        // Empty text wins over an empty question.
        assert_eq!(check("", ""), Err(ValidationError::MissingText));
        // An empty question wins over short text.
        assert_eq!(check("Short", ""), Err(ValidationError::MissingQuestion));
        // Short text wins over a short question.
        assert_eq!(check("Short", "OK"), Err(ValidationError::TextTooShort));
        // A short question wins over long text.
        let long_text = "a".repeat(TEXT_MAX_LENGTH + 1);
        assert_eq!(check(&long_text, "OK"), Err(ValidationError::QuestionTooShort));
        // Long text wins over a long question.
        let long_question = "q".repeat(QUESTION_MAX_LENGTH + 1);
        assert_eq!(
            check(&long_text, &long_question),
            Err(ValidationError::TextTooLong)
        );
        assert_eq!(check(TEXT, &long_question), Err(ValidationError::QuestionTooLong));
    }

    #[test]
    fn bounds_are_inclusive() {
        let min_text = "x".repeat(TEXT_MIN_LENGTH);
        let max_text = "x".repeat(TEXT_MAX_LENGTH);
        let min_question = "y".repeat(QUESTION_MIN_LENGTH);
        let max_question = "y".repeat(QUESTION_MAX_LENGTH);

        assert!(check(&min_text, &min_question).is_ok());
        assert!(check(&max_text, &max_question).is_ok());
        assert_eq!(
            check(&"x".repeat(TEXT_MIN_LENGTH - 1), &min_question),
            Err(ValidationError::TextTooShort)
        );
        assert_eq!(
            check(&min_text, &"y".repeat(QUESTION_MIN_LENGTH - 1)),
            Err(ValidationError::QuestionTooShort)
        );
    }

    #[test]
    fn padding_does_not_count_towards_length() {
        let padded = format!("   {}   ", "x".repeat(TEXT_MAX_LENGTH));
        assert!(check(&padded, "  hi?  ").is_ok());
        assert_eq!(check(TEXT, "  hi  "), Err(ValidationError::QuestionTooShort));
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 5000 four-byte characters are within the limit.
        let emoji_text = "🎓".repeat(TEXT_MAX_LENGTH);
        assert!(check(&emoji_text, "Why?").is_ok());
        assert_eq!(
            check(&"🎓".repeat(TEXT_MAX_LENGTH + 1), "Why?"),
            Err(ValidationError::TextTooLong)
        );
        // Three two-byte characters make a long-enough question.
        assert!(check(TEXT, "åäö").is_ok());
    }

    #[test]
    fn max_length_messages_name_the_limit() {
        assert!(ValidationError::TextTooLong.to_string().contains("5000"));
        assert!(ValidationError::QuestionTooLong.to_string().contains("300"));
        assert!(ValidationError::TextTooShort
            .to_string()
            .to_lowercase()
            .contains("too short"));
    }
}
