//! Contract check for a raw model payload.
//!
//! Each field is checked independently and every failure is collected, so a
//! single corrective re-prompt can name all of them at once.

use serde_json::{Map, Value};

use crate::schema::{
    APPROVAL_MAX, APPROVAL_MIN, FIELD_APPROVAL, FIELD_EMOTIONS, FIELD_INTENT,
    FIELD_INTENT_CONFIDENCE, FIELD_VERBATIM, SCORE_MAX, SCORE_MIN, VERBATIM_MAX_CHARS,
};
use crate::{Emotion, Emotions, FieldIssue, Intent, ValidatedAgentResponse, ValidationError};

/// Validate `raw` against the response contract.
///
/// On success returns a normalized copy: integral approval, `f64` scores,
/// a typed [`Intent`], and only the eight contract emotions (extra keys are
/// dropped).  Missing emotion keys fail; they are never defaulted.
pub fn validate(raw: &Value) -> Result<ValidatedAgentResponse, ValidationError> {
    let Some(obj) = raw.as_object() else {
        return Err(ValidationError::single(
            "response",
            format!("must be a JSON object (got {})", kind_of(raw)),
        ));
    };

    let mut issues = Vec::new();

    let approval   = check_approval(obj, &mut issues);
    let emotions   = check_emotions(obj, &mut issues);
    let intent     = check_intent(obj, &mut issues);
    let confidence = check_score(obj, FIELD_INTENT_CONFIDENCE, &mut issues);
    let verbatim   = check_verbatim(obj, &mut issues);

    match (approval, emotions, intent, confidence, verbatim) {
        (Some(a), Some(e), Some(i), Some(c), Some(v)) if issues.is_empty() => {
            Ok(ValidatedAgentResponse::new(a, e, i, c, v))
        }
        _ => Err(ValidationError { issues }),
    }
}

// ── Field checks ──────────────────────────────────────────────────────────────

fn check_approval(obj: &Map<String, Value>, issues: &mut Vec<FieldIssue>) -> Option<u8> {
    let v = require(obj, FIELD_APPROVAL, issues)?;
    let bounds = i64::from(APPROVAL_MIN)..=i64::from(APPROVAL_MAX);
    match integral(v) {
        Some(n) if bounds.contains(&n) => Some(n as u8),
        _ => {
            issues.push(FieldIssue::new(
                FIELD_APPROVAL,
                format!("must be an integer from {APPROVAL_MIN} to {APPROVAL_MAX} (got {v})"),
            ));
            None
        }
    }
}

fn check_emotions(obj: &Map<String, Value>, issues: &mut Vec<FieldIssue>) -> Option<Emotions> {
    let v = require(obj, FIELD_EMOTIONS, issues)?;
    let Some(map) = v.as_object() else {
        issues.push(FieldIssue::new(
            FIELD_EMOTIONS,
            format!("must be an object with keys {} (got {})", emotion_keys(), kind_of(v)),
        ));
        return None;
    };

    let before = issues.len();
    let mut scores = [0.0; 8];
    for emotion in Emotion::ALL {
        let path = format!("{FIELD_EMOTIONS}.{emotion}");
        match map.get(emotion.as_str()) {
            None => issues.push(FieldIssue::new(path, "missing")),
            Some(score) => match unit_score(score) {
                Some(s) => scores[emotion.index()] = s,
                None => issues.push(FieldIssue::new(
                    path,
                    format!("must be a number from {SCORE_MIN} to {SCORE_MAX} (got {score})"),
                )),
            },
        }
    }

    (issues.len() == before).then(|| Emotions::from_scores(scores))
}

fn check_intent(obj: &Map<String, Value>, issues: &mut Vec<FieldIssue>) -> Option<Intent> {
    let v = require(obj, FIELD_INTENT, issues)?;
    let Some(label) = v.as_str() else {
        issues.push(FieldIssue::new(FIELD_INTENT, format!("must be a string (got {})", kind_of(v))));
        return None;
    };
    match label.parse::<Intent>() {
        Ok(intent) => Some(intent),
        Err(e) => {
            issues.extend(e.issues);
            None
        }
    }
}

fn check_score(obj: &Map<String, Value>, field: &str, issues: &mut Vec<FieldIssue>) -> Option<f64> {
    let v = require(obj, field, issues)?;
    let score = unit_score(v);
    if score.is_none() {
        issues.push(FieldIssue::new(
            field,
            format!("must be a number from {SCORE_MIN} to {SCORE_MAX} (got {v})"),
        ));
    }
    score
}

fn check_verbatim(obj: &Map<String, Value>, issues: &mut Vec<FieldIssue>) -> Option<String> {
    let v = require(obj, FIELD_VERBATIM, issues)?;
    let Some(text) = v.as_str() else {
        issues.push(FieldIssue::new(FIELD_VERBATIM, format!("must be a string (got {})", kind_of(v))));
        return None;
    };
    let chars = text.chars().count();
    if chars > VERBATIM_MAX_CHARS {
        issues.push(FieldIssue::new(
            FIELD_VERBATIM,
            format!("must be at most {VERBATIM_MAX_CHARS} characters (got {chars})"),
        ));
        return None;
    }
    Some(text.to_owned())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn require<'a>(
    obj:    &'a Map<String, Value>,
    field:  &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<&'a Value> {
    match obj.get(field) {
        Some(Value::Null) | None => {
            issues.push(FieldIssue::new(field, "missing"));
            None
        }
        Some(v) => Some(v),
    }
}

/// JSON integers, and floats with no fractional part (`7.0`).
fn integral(v: &Value) -> Option<i64> {
    if let Some(n) = v.as_i64() {
        return Some(n);
    }
    let f = v.as_f64()?;
    (f.fract() == 0.0 && f.is_finite()).then_some(f as i64)
}

fn unit_score(v: &Value) -> Option<f64> {
    v.as_f64().filter(|s| (SCORE_MIN..=SCORE_MAX).contains(s))
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null      => "null",
        Value::Bool(_)   => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_)  => "an array",
        Value::Object(_) => "an object",
    }
}

fn emotion_keys() -> String {
    Emotion::ALL.iter().map(|e| e.as_str()).collect::<Vec<_>>().join(", ")
}
