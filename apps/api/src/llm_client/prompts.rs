// Shared prompt fragments appended to persona prompts.
// Persona-specific text lives in narrative::templates.

/// Appended to every insight prompt.
pub const INSIGHT_VOICE_INSTRUCTION: &str = "\
IMPORTANT: Respond exactly as this person would in real life, using their natural speech \
patterns, vocabulary and personality. Mixing Hindi and English the way Indian families do \
is welcome. Do not sound like an AI or a therapy bot.

Do not repeat intensity numbers or phrases from this prompt. Do not mention ratings or levels.

Do not use any markdown formatting like **bold**, *italic* or asterisks. Write plain, \
conversational text.";

/// Appended to every suggestion prompt.
pub const SUGGESTION_VOICE_INSTRUCTION: &str = "\
IMPORTANT: Give advice the way this person naturally would, not in a formal or clinical voice. \
Do not repeat intensity numbers or mention ratings. Do not use markdown formatting or asterisks.

Return exactly 4-6 practical suggestions, each on a new line starting with a dash (-).";
