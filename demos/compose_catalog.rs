//! Compose a small catalog and print a one-line summary per specimen.
//!
//! `cargo run --example compose_catalog`. Clamp warnings go to the fmt subscriber.

use navicue::{Catalog, ClampContext, VarietyReport};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let catalog: Catalog = serde_json::from_str(
        r#"{"series": [
            {"name": "evening_ledger", "signature": "witness_ritual", "form": "threshold",
             "chrono": "dusk", "kbe": "e", "hook": "hold", "mechanism": "Exposure",
             "seeds": [2001, 2012], "seal": 2012},
            {"name": "tide_count", "signature": "science_x_soul", "form": "ocean",
             "chrono": "midday", "kbe": "k", "hook": "breathe", "seeds": [2013, 2020]}
        ]}"#,
    )?;

    let mut ctx = ClampContext::new();
    let composed = catalog.compose_all(&mut ctx)?;
    for (input, bundle) in &composed {
        let c = &bundle.composition;
        println!(
            "{:>5} {:<9} {:?}/{:?}/{:?} accent={} intensity={:.2}",
            input.specimen_seed,
            if c.sealed { "sealed" } else { "" },
            c.scene,
            c.entry_pattern,
            c.interaction_shape,
            bundle.palette.accent.to_hex(),
            c.intensity,
        );
    }

    let report = VarietyReport::from_bundles(composed.iter().map(|(_, b)| b));
    println!(
        "{} specimens, {} distinct triples, collision ratio {:.3}, {} clamp event(s)",
        report.specimens,
        report.distinct_triples,
        report.collision_ratio,
        ctx.events().len()
    );
    Ok(())
}
