use super::*;
use crate::{
    compositor::{compose::compose_navicue, input::CompositorInput},
    taxonomy::{
        axes::{InteractionHook, KbeAxis, TimeContext},
        form::Form,
        signature::SignatureKey,
    },
};

fn bundle(seed: i64) -> NaviCueBundle {
    compose_navicue(&CompositorInput::new(
        SignatureKey::PatternGlitch,
        Form::Circuit,
        TimeContext::Night,
        KbeAxis::Knowing,
        InteractionHook::Swipe,
        seed,
    ))
    .unwrap()
}

#[test]
fn empty_and_single_sets_have_no_collisions() {
    let empty: Vec<NaviCueBundle> = Vec::new();
    let r = VarietyReport::from_bundles(&empty);
    assert_eq!(r.specimens, 0);
    assert_eq!(r.distinct_triples, 0);
    assert_eq!(r.largest_bucket, 0);
    assert_eq!(r.collision_ratio, 0.0);

    let one = [bundle(5)];
    let r = VarietyReport::from_bundles(&one);
    assert_eq!(r.specimens, 1);
    assert_eq!(r.distinct_triples, 1);
    assert_eq!(r.colliding_pairs, 0);
}

#[test]
fn identical_bundles_collide_pairwise() {
    let b = bundle(42);
    let same = vec![b.clone(), b.clone(), b];
    let r = VarietyReport::from_bundles(&same);
    assert_eq!(r.distinct_triples, 1);
    assert_eq!(r.largest_bucket, 3);
    assert_eq!(r.colliding_pairs, 3);
    assert_eq!(r.collision_ratio, 1.0);
}

#[test]
fn pair_count_matches_buckets() {
    let bundles: Vec<NaviCueBundle> = (1..=60).map(bundle).collect();
    let r = VarietyReport::from_bundles(&bundles);

    let mut brute = 0u64;
    for i in 0..bundles.len() {
        for j in (i + 1)..bundles.len() {
            if bundles[i].variety_key() == bundles[j].variety_key() {
                brute += 1;
            }
        }
    }
    assert_eq!(r.colliding_pairs, brute);
    assert_eq!(r.specimens, 60);
    assert!(r.collision_ratio < 0.1, "{r:?}");
}
