//! Prompt construction for card extraction

use cardsmith_llm::ChatMessage;

/// Fewest cards the model is asked for
pub const MIN_CARDS: usize = 10;

/// Most cards the model is asked for
pub const MAX_CARDS: usize = 20;

/// Builds the fixed two-message extraction prompt
///
/// The instruction text and requested count range are constants; only the
/// (already truncated) content varies.
pub struct PromptBuilder<'a> {
    content: &'a str,
}

impl<'a> PromptBuilder<'a> {
    /// Create a prompt builder for `content`
    pub fn new(content: &'a str) -> Self {
        Self { content }
    }

    /// System instruction
    pub fn system_instruction() -> String {
        format!(
            "You are a helpful assistant that creates flashcards from educational content.\n\
             Extract key concepts and create question-answer pairs that would be useful for \
             studying.\n\
             Focus on important facts, definitions, and concepts.\n\
             Create between {}-{} flashcards depending on the content length.\n\
             {}",
            MIN_CARDS, MAX_CARDS, OUTPUT_FORMAT
        )
    }

    /// Build the system and user messages
    pub fn build(&self) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(Self::system_instruction()),
            ChatMessage::user(format!(
                "Create flashcards from the following content:\n\n{}",
                self.content
            )),
        ]
    }
}

const OUTPUT_FORMAT: &str = "Format your response as a valid JSON object with a \"flashcards\" \
    array containing objects with \"question\" and \"answer\" properties, for example:\n\
    {\"flashcards\": [{\"question\": \"...\", \"answer\": \"...\"}]}\n\
    Return ONLY valid JSON, no explanations.";
