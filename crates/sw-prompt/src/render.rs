//! The two prompt renderers.
//!
//! Section headings are stable text: downstream tooling and the tests match
//! on them.

use std::collections::BTreeMap;
use std::fmt::Write;

use sw_contract::ResponseSchema;
use sw_core::{AgentMemory, AgentTraits, Phase, Stimulus};

use crate::PriorReaction;

/// Chars of the stimulus message quoted in later-phase prompts.
pub const MESSAGE_PREVIEW_CHARS: usize = 200;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// First `max_chars` chars of `text`, with `...` appended only when something
/// was cut.  Counts chars, never splits a code point.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_owned(),
    }
}

/// `positive` above 0.6, `negative` below 0.4, `neutral` otherwise.
pub fn sentiment_label(score: f64) -> &'static str {
    if score > 0.6 {
        "positive"
    } else if score < 0.4 {
        "negative"
    } else {
        "neutral"
    }
}

/// One `- topic: label (0.7)` line per attitude, in topic order.
pub fn format_attitudes(attitudes: &BTreeMap<String, f64>) -> String {
    if attitudes.is_empty() {
        return "- No specific attitudes recorded".to_owned();
    }
    attitudes
        .iter()
        .map(|(topic, &score)| format!("- {topic}: {} ({score:.1})", sentiment_label(score)))
        .collect::<Vec<_>>()
        .join("\n")
}

// ── D1 ────────────────────────────────────────────────────────────────────────

/// First-impression prompt.
pub fn build_initial_prompt(traits: &AgentTraits, stimulus: &Stimulus) -> String {
    let style = &traits.style;
    let mut p = String::with_capacity(2048);

    p.push_str("You are simulating the response of a specific person to a message/announcement.\n\n");

    p.push_str("## PERSON PROFILE\n");
    let _ = writeln!(p, "- Age: {}", traits.age);
    let _ = writeln!(p, "- Gender: {}", traits.gender);
    let _ = writeln!(p, "- Location: {}", traits.location);
    let _ = writeln!(p, "- Education: {}", traits.education);
    let _ = writeln!(p, "- Income level: {}", traits.income_level);

    p.push_str("\nPersonality traits (0-1 scale):\n");
    let _ = writeln!(p, "- Openness to new ideas: {}", traits.openness);
    let _ = writeln!(p, "- Skepticism toward marketing: {}", traits.skepticism);
    let _ = writeln!(p, "- Traditionalism: {}", traits.traditionalism);
    let _ = writeln!(p, "- Tech savviness: {}", traits.tech_savviness);

    p.push_str("\nAttitudes toward relevant topics:\n");
    p.push_str(&format_attitudes(&traits.attitudes));
    p.push('\n');

    p.push_str("\nCommunication style:\n");
    let _ = writeln!(p, "- Formality: {}", style.formality);
    let _ = writeln!(p, "- Emoji usage: {}", style.emoji_usage);
    let _ = writeln!(p, "- Dialect preference: {}", style.dialect);

    p.push_str("\n## THE MESSAGE THEY ARE SEEING\n");
    let _ = writeln!(p, "Channel: {}", stimulus.channel);
    let _ = writeln!(p, "Scenario: {}", stimulus.scenario_tag);
    let _ = writeln!(p, "Sender: {}", stimulus.sender);
    let _ = writeln!(p, "\nContext: {}", stimulus.context);
    let _ = writeln!(p, "\nMessage:\n\"\"\"{}\"\"\"", stimulus.message);

    p.push_str("\n## YOUR TASK\n");
    p.push_str(
        "Respond AS this person, showing their genuine Day 1 reaction (first impression) to this message.\n\
         Consider:\n\
         - Their demographics and values\n\
         - Their personality traits\n\
         - Their likely prior experience with similar messages\n\
         - Cultural context of their region\n\n",
    );
    p.push_str(&ResponseSchema::instructions());
    p.push('\n');
    p
}

// ── Later phases ──────────────────────────────────────────────────────────────

/// Prompt for any phase after D1.
///
/// `memory` is the agent's log as of the start of this phase; the section is
/// left out when the log is empty.
pub fn build_followup_prompt(
    phase:          Phase,
    traits:         &AgentTraits,
    stimulus:       &Stimulus,
    prior:          &PriorReaction,
    social_summary: &str,
    memory:         &AgentMemory,
) -> String {
    let elapsed = phase.elapsed_phrase();
    let mut p = String::with_capacity(2048);

    let _ = writeln!(
        p,
        "You are simulating how a specific person's opinion has evolved {} after seeing a message.\n",
        elapsed.to_uppercase(),
    );

    p.push_str("## PERSON PROFILE\n");
    let _ = writeln!(p, "- Age: {}", traits.age);
    let _ = writeln!(p, "- Gender: {}", traits.gender);
    let _ = writeln!(p, "- Location: {}", traits.location);
    let _ = writeln!(
        p,
        "- Personality: Openness {}, Skepticism {}",
        traits.openness, traits.skepticism,
    );

    let _ = writeln!(p, "\n## THE ORIGINAL MESSAGE (from {} days ago)", phase.days());
    let _ = writeln!(p, "Channel: {}", stimulus.channel);
    let _ = writeln!(
        p,
        "Message summary: {}",
        preview(&stimulus.message, MESSAGE_PREVIEW_CHARS),
    );

    p.push_str("\n## THEIR INITIAL REACTION (Day 1)\n");
    let _ = writeln!(p, "Approval: {}/10", prior.approval);
    let _ = writeln!(p, "Initial feeling: {}", prior.verbatim);
    let _ = writeln!(p, "Initial intent: {}", prior.intent);

    if !memory.is_empty() {
        p.push_str("\n## WHAT THEY REMEMBER\n");
        p.push_str(memory.as_str());
        p.push('\n');
    }

    let _ = writeln!(p, "\n## WHAT HAPPENED SINCE ({elapsed})");
    p.push_str("Social media discussion and reactions from others:\n");
    p.push_str(social_summary.trim_end());
    p.push('\n');

    p.push_str("\n## YOUR TASK\n");
    p.push_str(
        "Show how this person's opinion has evolved after:\n\
         - Seeing others' reactions\n\
         - Having time to think about it\n\
         - Possibly discussing with friends/family\n\
         - Seeing any follow-up news or responses\n\n\
         Their opinion may have:\n\
         - Strengthened (if they saw support for their view)\n\
         - Softened (if they saw good counter-arguments)\n\
         - Stayed the same (if nothing changed their mind)\n\
         - Reversed (if new information was compelling)\n\n",
    );
    p.push_str(&ResponseSchema::instructions());
    p.push('\n');
    p
}
