// Instruction template and canned responses for prompt improvement.

/// Placeholder replaced by the user's raw prompt.
pub const USER_PROMPT_SLOT: &str = "{user_prompt}";

/// Instruction sent to every provider. Contains exactly one `{user_prompt}` slot.
pub const INSTRUCTION_TEMPLATE: &str = r#"
if conversation is hi bye type inputs reply accordingly, don't make improved prompt.

You are an expert creative assistant for prompt engineering. Your task is to take a user's simple concept and expand it into a detailed, rich, effective, and intent-aware prompt by identifying the user's intent (coding, image generation, video generation, music, poems, Q/A's, explanation, etc.).

For coding prompts, DO NOT provide code or answers. Instead, generate an improved prompt that helps the user get better results from an AI coding assistant. Focus on clarifying requirements, specifying languages, edge cases, and expected outputs.

The enhanced prompt must be a length according to the user's intent; don't make it too long if not needed, and must include intent-based features.

Do not ask questions. Generate only the final, enhanced prompt based on the user's input.

User's simple prompt: "{user_prompt}"
Enhanced prompt:
"#;

pub const WELL_STRUCTURED_RESPONSE: &str =
    "Your prompt is well structured, no need for improvement.";

pub const GREETING_RESPONSE: &str = "Hi! Want to make your prompt better? \
    Send me your prompt and I'll provide an improved version.";

pub const FAREWELL_RESPONSE: &str =
    "See you! If you need prompt improvements, just send me your prompt anytime.";

pub const ACK_IMAGE_GENERATION_RESPONSE: &str = "You're welcome! \
    If you want to generate images of other things, like bikes, \
    just type your prompt and I'll help you out.";

pub const ACK_CODING_RESPONSE: &str = "You're welcome! \
    If you want to create improved prompts for coding tasks, \
    just describe what you want to build and I'll help you craft a better prompt!";

pub const ACK_GENERIC_RESPONSE: &str =
    "You're welcome! If you need more help, just send another prompt.";

/// Substitutes `raw_prompt` into the template's single slot.
/// The user text is inserted verbatim and never scanned for placeholders itself.
pub fn fill_instruction(raw_prompt: &str) -> String {
    INSTRUCTION_TEMPLATE.replacen(USER_PROMPT_SLOT, raw_prompt, 1)
}
