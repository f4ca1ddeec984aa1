const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Completion text after repair, with a record of what was changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedCompletion {
    pub text: String,
    pub appended_brace: bool,
    pub stripped_fences: bool,
}

impl NormalizedCompletion {
    pub fn was_repaired(&self) -> bool {
        self.appended_brace || self.stripped_fences
    }
}

/// Repair raw completion text before it is parsed.
///
/// The stop sequence cuts generation at a `}` without emitting it, so a
/// single closing brace is restored first. Markdown fences are then removed.
/// Only one brace is ever added: output truncated deeper inside the object
/// stays invalid and is rejected by the parser.
pub fn normalize(raw: &str) -> NormalizedCompletion {
    let mut text = raw.to_string();

    let appended_brace = !text.ends_with('}');
    if appended_brace {
        text.push('}');
    }

    let stripped_fences = text.contains(FENCE);
    if stripped_fences {
        text = text.replace(JSON_FENCE, "").replace(FENCE, "");
    }

    let completion = NormalizedCompletion {
        text,
        appended_brace,
        stripped_fences,
    };
    if completion.was_repaired() {
        log::debug!(
            "Normalized completion (appended_brace={}, stripped_fences={})",
            appended_brace,
            stripped_fences
        );
    }
    completion
}
