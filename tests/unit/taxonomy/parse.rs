use super::*;
use crate::taxonomy::{
    axes::{InteractionHook, KbeAxis, TimeContext},
    form::Form,
    mechanism::Mechanism,
    signature::SignatureKey,
};

#[test]
fn canonical_names_round_trip() {
    for sig in SignatureKey::ALL {
        assert_eq!(parse_closed::<SignatureKey>(sig.as_str()).unwrap(), sig);
        assert_eq!(sig.to_string(), sig.as_str());
    }
    for form in Form::ALL {
        assert_eq!(form.as_str().parse::<Form>().unwrap(), form);
    }
    for hook in InteractionHook::ALL {
        assert_eq!(hook.as_str().parse::<InteractionHook>().unwrap(), hook);
    }
    for chrono in TimeContext::ALL {
        assert_eq!(chrono.as_str().parse::<TimeContext>().unwrap(), chrono);
    }
}

#[test]
fn parsing_is_case_and_separator_insensitive() {
    assert_eq!("Practice".parse::<Form>().unwrap(), Form::Practice);
    assert_eq!(
        " Sacred-Ordinary ".parse::<SignatureKey>().unwrap(),
        SignatureKey::SacredOrdinary
    );
    assert_eq!(
        "science x soul".parse::<SignatureKey>().unwrap(),
        SignatureKey::ScienceXSoul
    );
}

#[test]
fn kbe_short_aliases() {
    assert_eq!("k".parse::<KbeAxis>().unwrap(), KbeAxis::Knowing);
    assert_eq!("B".parse::<KbeAxis>().unwrap(), KbeAxis::Believing);
    assert_eq!("e".parse::<KbeAxis>().unwrap(), KbeAxis::Embodying);
}

#[test]
fn unknown_labels_fail_loudly() {
    let err = "volcano".parse::<Form>().unwrap_err();
    assert!(matches!(
        err,
        crate::NaviCueError::UnknownVariant { axis: "form", .. }
    ));
    assert!(err.to_string().contains("stillness"));

    assert!("".parse::<InteractionHook>().is_err());
    assert!("x".parse::<KbeAxis>().is_err());
}

#[test]
fn serde_rejects_unknown_and_accepts_aliases() {
    let sig: SignatureKey = serde_json::from_str("\"koan_paradox\"").unwrap();
    assert_eq!(sig, SignatureKey::KoanParadox);
    let kbe: KbeAxis = serde_json::from_str("\"e\"").unwrap();
    assert_eq!(kbe, KbeAxis::Embodying);
    assert_eq!(
        serde_json::to_string(&SignatureKey::ScienceXSoul).unwrap(),
        "\"science_x_soul\""
    );

    let err = serde_json::from_str::<TimeContext>("\"teatime\"").unwrap_err();
    assert!(err.to_string().contains("unknown chrono 'teatime'"));
}

#[test]
fn every_signature_has_a_distinct_mood() {
    let mut moods: Vec<_> = SignatureKey::ALL
        .iter()
        .map(|s| format!("{:?}", s.hue_family().mood))
        .collect();
    moods.sort();
    moods.dedup();
    assert_eq!(moods.len(), SignatureKey::ALL.len());
}

#[test]
fn mechanism_hash_is_exact_bytes() {
    let a = Mechanism::new("Metacognition");
    assert_eq!(a.stable_hash(), Mechanism::from("Metacognition").stable_hash());
    assert_ne!(a.stable_hash(), Mechanism::new("metacognition").stable_hash());
    assert_eq!(
        Mechanism::default().stable_hash(),
        crate::foundation::math::Fnv1a64::OFFSET_BASIS
    );
}
