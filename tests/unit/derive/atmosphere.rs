use super::*;
use crate::{
    derive::palette::derive_palette,
    taxonomy::{axes::KbeAxis, mechanism::Mechanism},
};

fn palette(sig: SignatureKey) -> Palette {
    derive_palette(sig, &Mechanism::new("Metacognition"), KbeAxis::Believing)
}

#[test]
fn atmosphere_is_pure() {
    let p = palette(SignatureKey::ScienceXSoul);
    let a = derive_atmosphere(&p, SignatureKey::ScienceXSoul, Form::Cosmos);
    let b = derive_atmosphere(&p, SignatureKey::ScienceXSoul, Form::Cosmos);
    assert_eq!(a, b);
}

#[test]
fn every_form_and_signature_stays_in_archetype_range() {
    for sig in SignatureKey::ALL {
        let p = palette(sig);
        for form in Form::ALL {
            let a = derive_atmosphere(&p, sig, form);
            let r = ranges(a.archetype);
            assert_eq!(a.archetype, archetype_for(form));
            assert!((r.count.0..=r.count.1).contains(&a.particle_count));
            assert!(a.particle_speed >= r.speed.0 && a.particle_speed <= r.speed.1);
            assert!(a.stroke_width_px >= crate::safety::clamps::MIN_STROKE_PX);
            assert!((0.0..=1.0).contains(&a.base_opacity));
            assert!(a.breath.min_opacity <= a.breath.max_opacity);
            assert!(a.breath.cycle_ms >= 2000);
            assert_eq!(a.particle_color, p.primary_glow);
        }
    }
}

#[test]
fn energetic_signatures_breathe_faster_and_denser() {
    let glitch = derive_atmosphere(
        &palette(SignatureKey::PatternGlitch),
        SignatureKey::PatternGlitch,
        Form::Storm,
    );
    let ghost = derive_atmosphere(
        &palette(SignatureKey::RelationalGhost),
        SignatureKey::RelationalGhost,
        Form::Storm,
    );
    assert!(glitch.breath.cycle_ms < ghost.breath.cycle_ms);
    assert!(glitch.particle_count > ghost.particle_count);
    assert!(glitch.particle_speed > ghost.particle_speed);
}

#[test]
fn glow_archetypes_have_no_particles() {
    let p = palette(SignatureKey::WitnessRitual);
    for form in [Form::Practice, Form::Mirror, Form::Stillness] {
        let a = derive_atmosphere(&p, SignatureKey::WitnessRitual, form);
        assert_eq!(a.particle_count, 0);
    }
}

#[test]
fn breath_progress_cycles_between_zero_and_one() {
    let breath = BreathConfig {
        cycle_ms: 4000,
        inhale_ratio: 0.5,
        ease: Ease::Linear,
        min_opacity: 0.2,
        max_opacity: 0.6,
    };
    assert_eq!(breath.progress_at(0.0), 0.0);
    assert!((breath.progress_at(1000.0) - 0.5).abs() < 1e-12);
    assert!((breath.progress_at(2000.0) - 1.0).abs() < 1e-12);
    assert!((breath.progress_at(3000.0) - 0.5).abs() < 1e-12);
    assert_eq!(breath.progress_at(4000.0), 0.0);
    assert_eq!(breath.progress_at(-1000.0), breath.progress_at(3000.0));
    assert_eq!(breath.progress_at(f64::NAN), 0.0);
    assert!((breath.opacity_at(2000.0) - 0.6).abs() < 1e-12);
    assert!((breath.opacity_at(0.0) - 0.2).abs() < 1e-12);
}
