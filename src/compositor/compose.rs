use crate::{
    compositor::candidates::{
        atmosphere_modes_for, base_type_scale, clashes, color_temperatures_for,
        entry_patterns_for, interaction_shapes_for, scenes_for, sealed_tail,
        transition_styles_for, typography_moods_for,
    },
    compositor::input::{Composition, CompositorInput, NaviCueBundle, TypeScale},
    derive::{
        atmosphere::{AtmosphereConfig, derive_atmosphere},
        motion::derive_motion,
        palette::derive_palette,
    },
    foundation::error::{NaviCueError, NaviCueResult},
    foundation::math::quantize,
    prng::seed::Seed,
    safety::clamps::{ClampContext, MIN_FONT_PX},
};

const UNSEALED_INTENSITY: (f64, f64) = (0.35, 0.85);
const TYPE_JITTER: (f64, f64) = (0.94, 1.06);
const SEALED_DISPLAY_BOOST: f64 = 1.08;

/// Pick from `list`, or from its resolved tail when `sealed`.
fn choose<T: Copy>(seed: Seed, list: &[T], sealed: bool, field: &str) -> NaviCueResult<(T, Seed)> {
    let pool = if sealed { sealed_tail(list) } else { list };
    seed.pick(pool)
        .map(|(v, s)| (*v, s))
        .ok_or_else(|| NaviCueError::validation(format!("no {field} candidates")))
}

/// Parity-stratified pick: index `2r + parity` over an even-length pool, so seeds `n` and `n + 1`
/// always land on different entries.
fn choose_stratified<T: Copy>(
    seed: Seed,
    list: &[T],
    sealed: bool,
    parity: usize,
    field: &str,
) -> NaviCueResult<(T, Seed)> {
    let pool = if sealed { sealed_tail(list) } else { list };
    if pool.len() % 2 != 0 {
        return choose(seed, pool, false, field);
    }
    let (r, next) = seed
        .pick_index(pool.len() / 2)
        .ok_or_else(|| NaviCueError::validation(format!("no {field} candidates")))?;
    Ok((pool[2 * r + parity], next))
}

/// Derive the full bundle for `input`.
///
/// Deterministic: the same input returns a bit-identical bundle on every call, in every
/// process. Clamp adjustments are logged through a throwaway [`ClampContext`]; use
/// [`compose_navicue_with`] to keep them.
pub fn compose_navicue(input: &CompositorInput) -> NaviCueResult<NaviCueBundle> {
    let mut ctx = ClampContext::new();
    compose_navicue_with(input, &mut ctx)
}

/// [`compose_navicue`] with a caller-owned clamp log.
#[tracing::instrument(
    skip(input, ctx),
    fields(
        signature = %input.signature,
        form = %input.form,
        seed = input.specimen_seed,
        sealed = input.is_seal
    )
)]
pub fn compose_navicue_with(
    input: &CompositorInput,
    ctx: &mut ClampContext,
) -> NaviCueResult<NaviCueBundle> {
    let palette = derive_palette(input.signature, &input.mechanism, input.kbe);
    let atmosphere = derive_atmosphere(&palette, input.signature, input.form);
    let motion = derive_motion(input.signature);

    let sealed = input.is_seal;
    let parity = input.specimen_seed.rem_euclid(2) as usize;
    let seed = Seed::from_i64(input.specimen_seed);

    let (scene, seed) = choose(seed, scenes_for(input.form), sealed, "scene")?;
    let (entry_pattern, seed) = choose_stratified(
        seed,
        entry_patterns_for(input.form),
        sealed,
        parity,
        "entry pattern",
    )?;
    let (interaction_shape, seed) = choose(
        seed,
        interaction_shapes_for(input.hook),
        sealed,
        "interaction shape",
    )?;
    let (atmosphere_mode, seed) = choose(
        seed,
        atmosphere_modes_for(atmosphere.archetype),
        sealed,
        "atmosphere mode",
    )?;
    let (color_temperature, seed) = choose(
        seed,
        color_temperatures_for(input.chrono),
        sealed,
        "color temperature",
    )?;
    let (typography_mood, seed) =
        choose(seed, typography_moods_for(input.kbe), sealed, "typography mood")?;

    let transitions = transition_styles_for(input.form);
    let (mut transition_style, seed) = choose(seed, transitions, sealed, "transition style")?;
    if clashes(entry_pattern, transition_style) {
        let pool = if sealed {
            sealed_tail(transitions)
        } else {
            transitions
        };
        let start = pool
            .iter()
            .position(|&t| t == transition_style)
            .unwrap_or(0);
        let resolved = (1..pool.len())
            .map(|i| pool[(start + i) % pool.len()])
            .find(|&t| !clashes(entry_pattern, t));
        if let Some(t) = resolved {
            tracing::debug!(
                entry = ?entry_pattern,
                from = ?transition_style,
                to = ?t,
                "rotated clashing transition"
            );
            transition_style = t;
        }
    }

    let (raw_intensity, seed) = seed.range_f64(UNSEALED_INTENSITY.0, UNSEALED_INTENSITY.1);
    let intensity = if sealed { 1.0 } else { quantize(raw_intensity) };

    let (jitter, _) = seed.range_f64(TYPE_JITTER.0, TYPE_JITTER.1);
    let (display, body, caption) = base_type_scale(typography_mood);
    let display_boost = if sealed { SEALED_DISPLAY_BOOST } else { 1.0 };
    let type_scale = TypeScale {
        display_px: ctx.font_px(
            "composition.type_scale.display_px",
            quantize(display * jitter * display_boost),
        ),
        body_px: ctx.font_px("composition.type_scale.body_px", quantize(body * jitter)),
        caption_px: ctx.font_px(
            "composition.type_scale.caption_px",
            quantize(caption * jitter),
        ),
    };

    let atmosphere = clamp_atmosphere(atmosphere, ctx);

    let bundle = NaviCueBundle {
        palette,
        atmosphere,
        motion,
        composition: Composition {
            scene,
            atmosphere_mode,
            entry_pattern,
            interaction_shape,
            color_temperature,
            typography_mood,
            transition_style,
            type_scale,
            intensity,
            sealed,
        },
    };
    validate_bundle(input, &bundle)?;
    Ok(bundle)
}

fn clamp_atmosphere(mut a: AtmosphereConfig, ctx: &mut ClampContext) -> AtmosphereConfig {
    a.base_opacity = ctx.opacity("atmosphere.base_opacity", a.base_opacity);
    a.stroke_width_px = ctx.stroke_px("atmosphere.stroke_width_px", a.stroke_width_px);
    a.breath.min_opacity = ctx.opacity("atmosphere.breath.min_opacity", a.breath.min_opacity);
    a.breath.max_opacity = ctx.opacity("atmosphere.breath.max_opacity", a.breath.max_opacity);
    a.particle_color.a = ctx.opacity("atmosphere.particle_color.a", a.particle_color.a);
    a.secondary_color.a = ctx.opacity("atmosphere.secondary_color.a", a.secondary_color.a);
    a
}

/// Reject bundles that break a global invariant. Reaching an error here is a table bug.
fn validate_bundle(input: &CompositorInput, bundle: &NaviCueBundle) -> NaviCueResult<()> {
    bundle.palette.validate()?;

    let c = &bundle.composition;
    if c.interaction_shape.hook() != input.hook {
        return Err(NaviCueError::validation(format!(
            "interaction shape {:?} does not serve hook '{}'",
            c.interaction_shape, input.hook
        )));
    }
    if clashes(c.entry_pattern, c.transition_style) {
        return Err(NaviCueError::validation(format!(
            "entry {:?} clashes with transition {:?}",
            c.entry_pattern, c.transition_style
        )));
    }
    for (name, v) in [
        ("display_px", c.type_scale.display_px),
        ("body_px", c.type_scale.body_px),
        ("caption_px", c.type_scale.caption_px),
    ] {
        if !v.is_finite() || v < MIN_FONT_PX {
            return Err(NaviCueError::validation(format!(
                "type_scale.{name} must be finite and >= {MIN_FONT_PX}"
            )));
        }
    }
    let a = &bundle.atmosphere;
    for (name, v) in [
        ("particle_speed", a.particle_speed),
        ("particle_size_px", a.particle_size_px),
        ("glow_radius_px", a.glow_radius_px),
        ("intensity", c.intensity),
    ] {
        if !v.is_finite() || v < 0.0 {
            return Err(NaviCueError::validation(format!(
                "{name} must be finite and >= 0"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/compositor/compose.rs"]
mod tests;
