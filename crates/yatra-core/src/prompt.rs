use yatra_translator::RemoteRequest;
use yatra_types::LanguagePair;

use crate::language::language_name;

const SYSTEM_PROMPT: &str = "You translate for travellers. Render the text naturally and \
faithfully in the requested language. Reply with the translation alone: no notes, no \
explanations, no surrounding quotes.";

/// Build the prompt pair sent to the hosted provider
pub fn build_request(text: &str, pair: &LanguagePair) -> RemoteRequest {
    let source_name = language_name(&pair.source);
    let target_name = language_name(&pair.target);

    let user_prompt = format!(
        "Translate from {source_name} to {target_name}:\n\n\"{text}\"\n\nReply with the {target_name} text only."
    );

    RemoteRequest {
        text: text.to_string(),
        from: pair.source.clone(),
        to: pair.target.clone(),
        target_name,
        system_prompt: SYSTEM_PROMPT.to_string(),
        user_prompt,
    }
}

/// Trim a reply and drop one pair of enclosing quotes
pub fn strip_quotes(reply: &str) -> &str {
    let trimmed = reply.trim();
    for quote in ['"', '\''] {
        if trimmed.len() >= 2 && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
            return &trimmed[1..trimmed.len() - 1];
        }
    }
    trimmed
}
