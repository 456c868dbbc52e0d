use super::{Judgment, JudgmentMapping, ReviewSession};

fn fresh_session() -> ReviewSession {
    ReviewSession::from_parts("d1", "s1", 0, JudgmentMapping::new(), false)
}

#[test]
fn judgment_string_identifiers_roundtrip() {
    for judgment in Judgment::ALL {
        let parsed: Judgment = judgment.as_str().parse().expect("parse own identifier");
        assert_eq!(parsed, judgment);
    }
    assert_eq!(Judgment::Yes.as_str(), "yes");
    assert_eq!(Judgment::No.as_str(), "no");
    assert_eq!(Judgment::Maybe.as_str(), "maybe");
}

#[test]
fn judgment_parse_rejects_unknown_values() {
    assert!("blank".parse::<Judgment>().is_err());
    assert!("".parse::<Judgment>().is_err());
    assert!("YES".parse::<Judgment>().is_ok());
}

#[test]
fn judgment_serde_uses_snake_case_identifiers() {
    let json = serde_json::to_string(&Judgment::Maybe).expect("serialize judgment");
    assert_eq!(json, "\"maybe\"");
    let back: Judgment = serde_json::from_str("\"no\"").expect("parse judgment");
    assert_eq!(back, Judgment::No);
}

#[test]
fn record_keeps_keys_unique_and_last_write_wins() {
    let mut session = fresh_session();
    session.record("a_paragraph_1", Judgment::Yes);
    session.record("a_paragraph_2", Judgment::No);
    session.record("a_paragraph_1", Judgment::Maybe);

    assert_eq!(session.judgments().len(), 2);
    assert_eq!(session.judgment("a_paragraph_1"), Some(Judgment::Maybe));
    assert_eq!(session.judgment("a_paragraph_2"), Some(Judgment::No));
    assert_eq!(session.judgment("a_paragraph_3"), None);
}

#[test]
fn commit_latch_is_one_way() {
    let mut session = fresh_session();
    assert!(!session.is_committed());
    assert!(session.commit());
    assert!(session.is_committed());

    // A second commit reports that the latch was already set and changes
    // nothing.
    assert!(!session.commit());
    assert!(session.is_committed());
}

#[test]
fn from_parts_restores_controller_state() {
    let mut mapping = JudgmentMapping::new();
    mapping.insert("s2".to_string(), Judgment::Yes);
    let session = ReviewSession::from_parts("d1", "s1", 40, mapping, true);

    assert_eq!(session.from, 40);
    assert_eq!(session.judgment("s2"), Some(Judgment::Yes));
    assert!(session.is_committed());
    assert!(!session.clone().commit());
}
