//! Unit tests for sw-contract.

use serde_json::{Value, json};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn valid_payload() -> Value {
    json!({
        "approval": 7,
        "emotions": {
            "joy": 0.6, "trust": 0.5, "fear": 0.1, "surprise": 0.3,
            "sadness": 0.0, "disgust": 0.05, "anger": 0.1, "anticipation": 0.4
        },
        "intent": "share_positive",
        "intent_confidence": 0.8,
        "verbatim": "Finally some good news from them."
    })
}

fn with(field: &str, value: Value) -> Value {
    let mut p = valid_payload();
    p[field] = value;
    p
}

fn without(field: &str) -> Value {
    let mut p = valid_payload();
    p.as_object_mut().unwrap().remove(field);
    p
}

// ── Accepting ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod accept_tests {
    use super::*;
    use crate::{Emotion, Intent, validate};

    #[test]
    fn valid_payload_normalizes() {
        let r = validate(&valid_payload()).unwrap();
        assert_eq!(r.approval(), 7);
        assert_eq!(r.intent(), Intent::SharePositive);
        assert_eq!(r.intent_confidence(), 0.8);
        assert_eq!(r.emotions().get(Emotion::Joy), 0.6);
        assert_eq!(r.verbatim(), "Finally some good news from them.");
    }

    #[test]
    fn validation_is_idempotent() {
        let first = validate(&valid_payload()).unwrap();
        let second = validate(&first.to_json()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.to_json(), second.to_json());
    }

    #[test]
    fn integral_float_approval_coerced() {
        let r = validate(&with("approval", json!(7.0))).unwrap();
        assert_eq!(r.approval(), 7);
    }

    #[test]
    fn integer_scores_coerced_to_float() {
        let mut p = with("intent_confidence", json!(1));
        p["emotions"]["joy"] = json!(0);
        let r = validate(&p).unwrap();
        assert_eq!(r.intent_confidence(), 1.0);
        assert_eq!(r.emotions().get(Emotion::Joy), 0.0);
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(validate(&with("approval", json!(1))).is_ok());
        assert!(validate(&with("approval", json!(10))).is_ok());
        assert!(validate(&with("intent_confidence", json!(0.0))).is_ok());
        assert!(validate(&with("verbatim", json!("x".repeat(500)))).is_ok());
    }

    #[test]
    fn verbatim_length_counts_chars_not_bytes() {
        // 500 two-byte chars: 1000 bytes, still within the bound.
        assert!(validate(&with("verbatim", json!("é".repeat(500)))).is_ok());
    }

    #[test]
    fn extra_emotion_keys_dropped() {
        let mut p = valid_payload();
        p["emotions"]["boredom"] = json!(0.9);
        let r = validate(&p).unwrap();
        assert!(r.to_json()["emotions"].get("boredom").is_none());
        assert_eq!(r.emotions().iter().count(), 8);
    }

    #[test]
    fn every_intent_label_accepted() {
        for intent in Intent::ALL {
            let r = validate(&with("intent", json!(intent.as_str()))).unwrap();
            assert_eq!(r.intent(), intent);
        }
    }
}

// ── Rejecting ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod reject_tests {
    use super::*;
    use crate::{Emotion, validate};

    #[test]
    fn approval_out_of_range() {
        for bad in [json!(0), json!(11), json!(-3)] {
            let err = validate(&with("approval", bad)).unwrap_err();
            assert!(err.mentions("approval"), "{err}");
        }
    }

    #[test]
    fn approval_must_be_integer() {
        for bad in [json!(7.5), json!("7"), json!(true)] {
            let err = validate(&with("approval", bad)).unwrap_err();
            assert!(err.mentions("approval"), "{err}");
        }
    }

    #[test]
    fn each_missing_emotion_fails() {
        for emotion in Emotion::ALL {
            let mut p = valid_payload();
            p["emotions"].as_object_mut().unwrap().remove(emotion.as_str());
            let err = validate(&p).unwrap_err();
            let path = format!("emotions.{emotion}");
            assert!(err.mentions(&path), "missing {emotion} not reported: {err}");
        }
    }

    #[test]
    fn emotion_out_of_range() {
        let mut p = valid_payload();
        p["emotions"]["anger"] = json!(1.2);
        let err = validate(&p).unwrap_err();
        assert!(err.mentions("emotions.anger"));
    }

    #[test]
    fn emotions_must_be_object() {
        let err = validate(&with("emotions", json!([0.1, 0.2]))).unwrap_err();
        assert!(err.mentions("emotions"));
    }

    #[test]
    fn intent_outside_closed_set() {
        for bad in ["Share_Positive", "SHARE_POSITIVE", "share", "like", " ignore", ""] {
            let err = validate(&with("intent", json!(bad))).unwrap_err();
            assert!(err.mentions("intent"), "{bad:?} accepted");
        }
    }

    #[test]
    fn intent_confidence_out_of_range() {
        let err = validate(&with("intent_confidence", json!(1.01))).unwrap_err();
        assert!(err.mentions("intent_confidence"));
    }

    #[test]
    fn overlong_verbatim_is_rejected_not_truncated() {
        let err = validate(&with("verbatim", json!("x".repeat(501)))).unwrap_err();
        assert!(err.mentions("verbatim"));
        assert!(err.to_string().contains("501"));
    }

    #[test]
    fn missing_and_null_fields() {
        assert!(validate(&without("verbatim")).unwrap_err().mentions("verbatim"));
        assert!(validate(&with("intent", Value::Null)).unwrap_err().mentions("intent"));
    }

    #[test]
    fn non_object_payload() {
        let err = validate(&json!([1, 2, 3])).unwrap_err();
        assert!(err.mentions("response"));
    }

    #[test]
    fn all_offending_fields_named_in_message() {
        let mut p = with("approval", json!(42));
        p["intent"] = json!("maybe");
        p["emotions"].as_object_mut().unwrap().remove("fear");
        let err = validate(&p).unwrap_err();
        assert_eq!(err.issues.len(), 3);
        let msg = err.to_string();
        assert!(msg.contains("approval"));
        assert!(msg.contains("intent"));
        assert!(msg.contains("emotions.fear: missing"));
    }
}

// ── Schema ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod schema_tests {
    use crate::{Emotion, Intent, ResponseSchema};

    #[test]
    fn instructions_list_every_label_and_bound() {
        let text = ResponseSchema::instructions();
        for emotion in Emotion::ALL {
            assert!(text.contains(&format!("\"{emotion}\"")), "missing {emotion}");
        }
        for intent in Intent::ALL {
            assert!(text.contains(&format!("\"{intent}\"")), "missing {intent}");
        }
        assert!(text.contains("integer 1-10"));
        assert!(text.contains("max 500 chars"));
        assert!(text.contains("<float 0-1>"));
    }

    #[test]
    fn describe_matches_closed_sets() {
        let d = ResponseSchema::describe();
        let fields = d["fields"].as_array().unwrap();
        let names: Vec<&str> = fields.iter().map(|f| f["name"].as_str().unwrap()).collect();
        assert_eq!(names, ["approval", "emotions", "intent", "intent_confidence", "verbatim"]);
        assert_eq!(fields[1]["required_keys"].as_array().unwrap().len(), 8);
        assert_eq!(fields[2]["one_of"].as_array().unwrap().len(), 8);
        assert_eq!(fields[0]["max"], 10);
        assert_eq!(fields[4]["max_chars"], 500);
    }

    #[test]
    fn intent_serde_uses_wire_label() {
        let v = serde_json::to_value(Intent::SeekMoreInfo).unwrap();
        assert_eq!(v, "seek_more_info");
        let back: Intent = serde_json::from_value(v).unwrap();
        assert_eq!(back, Intent::SeekMoreInfo);
    }
}
