//! Unit tests for sw-core.

// ── Ids ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod id_tests {
    use std::collections::HashSet;

    use crate::{AgentId, RunId};

    #[test]
    fn display_names_the_type() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
        assert_eq!(RunId(3).to_string(), "RunId(3)");
    }

    #[test]
    fn ids_hash_and_order() {
        let set: HashSet<AgentId> = [AgentId(1), AgentId(1), AgentId(2)].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(AgentId(1) < AgentId(2));
    }

    #[test]
    fn from_raw() {
        assert_eq!(AgentId::from(9).get(), 9);
    }
}

// ── Phase ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod phase_tests {
    use crate::{CoreError, Phase};

    #[test]
    fn parses_known_tags() {
        for phase in Phase::ALL {
            assert_eq!(phase.as_str().parse::<Phase>().unwrap(), phase);
        }
    }

    #[test]
    fn rejects_unknown_and_case_variants() {
        assert_eq!("d1".parse::<Phase>(), Err(CoreError::UnknownPhase("d1".into())));
        assert!("D2".parse::<Phase>().is_err());
        assert!("".parse::<Phase>().is_err());
    }

    #[test]
    fn chronological_order() {
        let days: Vec<u32> = Phase::ALL.iter().map(|p| p.days()).collect();
        assert_eq!(days, [1, 7, 30, 90]);
        assert!(Phase::D1 < Phase::D90);
    }

    #[test]
    fn only_d1_is_initial() {
        assert!(Phase::D1.is_initial());
        assert!(!Phase::D7.is_initial());
        assert!(!Phase::D90.is_initial());
    }

    #[test]
    fn display_matches_tag() {
        assert_eq!(Phase::D30.to_string(), "D30");
    }
}

// ── AgentMemory ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod memory_tests {
    use crate::AgentMemory;

    #[test]
    fn starts_empty() {
        let m = AgentMemory::new();
        assert!(m.is_empty());
        assert_eq!(m.len(), 0);
    }

    #[test]
    fn appends_one_line_each() {
        let mut m = AgentMemory::new();
        m.append("[D1] first");
        m.append("[D7] second");
        assert_eq!(m.as_str(), "[D1] first\n[D7] second");
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn embedded_newlines_flattened() {
        let mut m = AgentMemory::new();
        m.append("a\nb");
        assert_eq!(m.len(), 1);
        assert_eq!(m.as_str(), "a b");
    }

    #[test]
    fn blank_lines_ignored() {
        let mut m = AgentMemory::from_text("existing");
        m.append("   ");
        assert_eq!(m.as_str(), "existing");
    }

    #[test]
    fn from_text_trims() {
        let m = AgentMemory::from_text("\n[D1] x\n");
        assert_eq!(m.as_str(), "[D1] x");
    }
}

// ── Traits ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod traits_tests {
    use crate::{AgentTraits, CoreError};

    #[test]
    fn defaults_are_midpoint() {
        let t = AgentTraits::default();
        assert_eq!(t.age, 30);
        assert!(t.personality().iter().all(|&(_, v)| v == 0.5));
        assert!(t.check().is_ok());
    }

    #[test]
    fn out_of_range_personality_rejected() {
        let t = AgentTraits { skepticism: 1.5, ..AgentTraits::default() };
        match t.check() {
            Err(CoreError::TraitOutOfRange { name, .. }) => assert_eq!(name, "skepticism"),
            other => panic!("expected TraitOutOfRange, got {other:?}"),
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_fills_defaults() {
        let t: AgentTraits = serde_json::from_str(r#"{"age": 41, "attitudes": {"banks": 0.2}}"#).unwrap();
        assert_eq!(t.age, 41);
        assert_eq!(t.location, "MENA region");
        assert_eq!(t.attitudes["banks"], 0.2);
        assert_eq!(t.style.formality, "moderate");
    }
}

// ── Timestamp ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod time_tests {
    use crate::Timestamp;

    #[test]
    fn now_is_after_epoch() {
        assert!(Timestamp::now() > Timestamp::EPOCH);
    }

    #[test]
    fn millis_since_saturates() {
        assert_eq!(Timestamp(1_500).millis_since(Timestamp(1_000)), 500);
        assert_eq!(Timestamp(1_000).millis_since(Timestamp(1_500)), 0);
    }
}
