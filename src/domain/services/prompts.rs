#[cfg(test)]
#[path = "prompts_test.rs"]
mod tests;

use anyhow::Result;

use crate::domain::models::Message;

/// Instruction suffix for conversational replies.
pub const CHAT_PROMPT: &str = r#"You are an AI assistant experienced in React development.
GUIDELINES:
- Tell the user what you are building.
- Keep the response under 15 lines.
- Skip code examples and commentary."#;

/// Instruction suffix for structured project generation.
pub const CODE_GEN_PROMPT: &str = r#"Generate a complete React project based on the conversation above.
Respond with a single JSON object of the shape:
{"projectTitle": string, "explanation": string, "files": {"/path": {"code": string}}, "generatedFiles": [string]}
GUIDELINES:
- Organize components into separate files under project-relative paths.
- Use Tailwind CSS classes for styling.
- Every path listed in generatedFiles must appear in files.
- Return only the JSON object, with no surrounding prose."#;

/// Composes the prompt sent to a completion endpoint: the full serialized
/// conversation followed by a fixed instruction suffix.
pub fn compose_prompt(messages: &[Message], instruction: &str) -> Result<String> {
    let serialized = serde_json::to_string(messages)?;
    return Ok(format!("{serialized}{instruction}"));
}
