//! Unit tests for sw-prompt.

#[cfg(test)]
mod fixtures {
    use std::collections::BTreeMap;

    use sw_contract::Intent;
    use sw_core::{AgentTraits, Stimulus};

    use crate::PriorReaction;

    pub fn stimulus() -> Stimulus {
        Stimulus {
            channel:      "social media".into(),
            scenario_tag: "fare increase".into(),
            sender:       "City Transit".into(),
            context:      "Announced on a Sunday evening.".into(),
            message:      "Metro fares rise by 10% from next month.".into(),
        }
    }

    pub fn traits() -> AgentTraits {
        let mut attitudes = BTreeMap::new();
        attitudes.insert("public transport".to_owned(), 0.8);
        attitudes.insert("government".to_owned(), 0.2);
        attitudes.insert("pricing".to_owned(), 0.4);
        AgentTraits { age: 41, location: "Amman".into(), attitudes, ..AgentTraits::default() }
    }

    pub fn reaction(approval: u8, intent: Intent, verbatim: &str) -> PriorReaction {
        PriorReaction { approval, intent, verbatim: verbatim.to_owned() }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod helper_tests {
    use std::collections::BTreeMap;

    use crate::{format_attitudes, preview, sentiment_label};

    #[test]
    fn preview_marks_truncation_only() {
        assert_eq!(preview("short", 10), "short");
        assert_eq!(preview("exactly", 7), "exactly");
        assert_eq!(preview("abcdefgh", 3), "abc...");
    }

    #[test]
    fn preview_counts_chars_not_bytes() {
        assert_eq!(preview("مرحبا بالعالم", 5), "مرحبا...");
    }

    #[test]
    fn sentiment_thresholds() {
        assert_eq!(sentiment_label(0.61), "positive");
        assert_eq!(sentiment_label(0.6), "neutral");
        assert_eq!(sentiment_label(0.4), "neutral");
        assert_eq!(sentiment_label(0.39), "negative");
    }

    #[test]
    fn attitudes_render_in_topic_order() {
        let mut a = BTreeMap::new();
        a.insert("tech".to_owned(), 0.76);
        a.insert("brands".to_owned(), 0.1);
        assert_eq!(format_attitudes(&a), "- brands: negative (0.1)\n- tech: positive (0.8)");
        assert_eq!(format_attitudes(&BTreeMap::new()), "- No specific attitudes recorded");
    }
}

// ── Social summary ────────────────────────────────────────────────────────────

#[cfg(test)]
mod summary_tests {
    use sw_contract::Intent;

    use super::fixtures::reaction;
    use crate::build_social_summary;
    use crate::summary::{NO_DISCUSSION, overall_label};

    #[test]
    fn empty_input_reports_limited_discussion() {
        assert_eq!(build_social_summary(&[]), NO_DISCUSSION);
    }

    #[test]
    fn buckets_by_average() {
        assert_eq!(overall_label(6.0), "Positive");
        assert_eq!(overall_label(5.99), "Mixed");
        assert_eq!(overall_label(4.0), "Mixed");
        assert_eq!(overall_label(3.9), "Negative");
    }

    #[test]
    fn counts_intents_and_reports_average() {
        let rs = [
            reaction(8, Intent::SharePositive, "great"),
            reaction(9, Intent::SharePositive, "love it"),
            reaction(2, Intent::OpposeActively, "no way"),
        ];
        let s = build_social_summary(&rs);
        assert!(s.starts_with("Overall public reaction: Positive (average approval: 6.3/10"));
        assert!(s.contains("- 2 people shared it positively"));
        assert!(s.contains("- 1 people actively opposed it"));
        assert!(s.contains("- 0 people scrolled past it"));
    }

    #[test]
    fn quotes_at_most_two_per_side_in_input_order() {
        let rs = [
            reaction(7, Intent::EngageSupportive, "first"),
            reaction(10, Intent::EngageSupportive, "second"),
            reaction(9, Intent::EngageSupportive, "third"),
            reaction(5, Intent::Ignore, "middle"),
        ];
        let s = build_social_summary(&rs);
        assert!(s.contains("- \"first\""));
        assert!(s.contains("- \"second\""));
        assert!(!s.contains("third"));
        assert!(!s.contains("middle"));
        assert!(s.contains("- (few critical comments)"));
    }

    #[test]
    fn long_quotes_are_previewed() {
        let long = "x".repeat(150);
        let s = build_social_summary(&[reaction(1, Intent::ShareNegative, &long)]);
        let expected = format!("- \"{}...\"", "x".repeat(100));
        assert!(s.contains(&expected));
        assert!(s.contains("- (few supportive comments)"));
    }
}

// ── Renderers ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod render_tests {
    use sw_contract::{Intent, ResponseSchema};
    use sw_core::{AgentMemory, Phase};

    use super::fixtures::{reaction, stimulus, traits};
    use crate::{PriorReaction, build_followup_prompt, build_initial_prompt};

    #[test]
    fn initial_prompt_embeds_profile_stimulus_and_contract() {
        let p = build_initial_prompt(&traits(), &stimulus());
        assert!(p.contains("## PERSON PROFILE"));
        assert!(p.contains("- Age: 41"));
        assert!(p.contains("- Location: Amman"));
        assert!(p.contains("- government: negative (0.2)"));
        assert!(p.contains("- pricing: neutral (0.4)"));
        assert!(p.contains("- public transport: positive (0.8)"));
        assert!(p.contains("- Dialect preference: Modern Standard Arabic/English mix"));
        assert!(p.contains("Scenario: fare increase"));
        assert!(p.contains("\"\"\"Metro fares rise by 10% from next month.\"\"\""));
        assert!(p.contains(&ResponseSchema::instructions()));
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(
            build_initial_prompt(&traits(), &stimulus()),
            build_initial_prompt(&traits(), &stimulus()),
        );
    }

    #[test]
    fn followup_prompt_carries_prior_and_summary() {
        let prior = reaction(3, Intent::EngageCritical, "Too expensive already.");
        let p = build_followup_prompt(
            Phase::D30,
            &traits(),
            &stimulus(),
            &prior,
            "SUMMARY-MARKER",
            &AgentMemory::new(),
        );
        assert!(p.contains("evolved ONE MONTH after"));
        assert!(p.contains("(from 30 days ago)"));
        assert!(p.contains("Approval: 3/10"));
        assert!(p.contains("Initial feeling: Too expensive already."));
        assert!(p.contains("Initial intent: engage_critical"));
        assert!(p.contains("SUMMARY-MARKER"));
        assert!(!p.contains("## WHAT THEY REMEMBER"));
    }

    #[test]
    fn followup_prompt_includes_memory_when_present() {
        let mut memory = AgentMemory::new();
        memory.append("[D1] Saw message about fare increase. Reaction: ignore (approval: 5/10)");
        let p = build_followup_prompt(
            Phase::D7,
            &traits(),
            &stimulus(),
            &PriorReaction::neutral(),
            "",
            &memory,
        );
        assert!(p.contains("## WHAT THEY REMEMBER\n[D1] Saw message about fare increase."));
    }

    #[test]
    fn long_message_is_previewed() {
        let mut s = stimulus();
        s.message = "m".repeat(250);
        let p = build_followup_prompt(
            Phase::D7,
            &traits(),
            &s,
            &PriorReaction::neutral(),
            "",
            &AgentMemory::new(),
        );
        assert!(p.contains(&format!("Message summary: {}...\n", "m".repeat(200))));
    }
}

// ── PhaseContext ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod context_tests {
    use serde_json::json;
    use sw_contract::{Intent, validate};
    use sw_core::{Agent, AgentId, Phase};

    use super::fixtures::{reaction, stimulus, traits};
    use crate::{PhaseContext, PriorReaction};

    #[test]
    fn initial_context_renders_first_impression() {
        let s = stimulus();
        let ctx = PhaseContext::initial(&s);
        let agent = Agent::new(AgentId(1), "Rana", traits());
        assert!(ctx.render(&agent).contains("genuine Day 1 reaction"));
        assert!(ctx.social_summary.is_empty());
    }

    #[test]
    fn missing_d1_reaction_falls_back_to_neutral() {
        let s = stimulus();
        let ctx = PhaseContext::followup(Phase::D7, &s, Vec::new());
        let agent = Agent::new(AgentId(4), "Omar", traits());
        let p = ctx.render(&agent);
        assert_eq!(ctx.prior_for(AgentId(4)), PriorReaction::neutral());
        assert!(p.contains("Approval: 5/10"));
        assert!(p.contains("Initial feeling: No initial response"));
        assert!(p.contains("Limited public discussion was observed."));
    }

    #[test]
    fn prior_reaction_from_validated_response() {
        let r = validate(&json!({
            "approval": 9,
            "emotions": {
                "joy": 0.8, "trust": 0.6, "fear": 0.0, "surprise": 0.2,
                "sadness": 0.0, "disgust": 0.0, "anger": 0.0, "anticipation": 0.5
            },
            "intent": "purchase_intent",
            "intent_confidence": 0.7,
            "verbatim": "Sign me up."
        }))
        .unwrap();
        assert_eq!(PriorReaction::from(&r), reaction(9, Intent::PurchaseIntent, "Sign me up."));
    }

    #[test]
    fn followup_context_uses_each_agents_own_reaction() {
        let s = stimulus();
        let ctx = PhaseContext::followup(
            Phase::D7,
            &s,
            vec![
                (AgentId(1), reaction(9, Intent::SharePositive, "Yes!")),
                (AgentId(2), reaction(2, Intent::ShareNegative, "No.")),
            ],
        );
        let p = ctx.render(&Agent::new(AgentId(2), "Lina", traits()));
        assert!(p.contains("Approval: 2/10"));
        assert!(p.contains("Initial feeling: No."));
        assert!(p.contains("average approval: 5.5/10"));
    }
}
