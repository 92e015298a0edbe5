use std::{
    io::{BufWriter, Write as _},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use navicue::{
    Catalog, ClampContext, CompositorInput, Form, InteractionHook, KbeAxis, NaviCueBundle,
    SignatureKey, TimeContext, VarietyReport,
};
use sha2::{Digest as _, Sha256};

#[derive(Parser, Debug)]
#[command(name = "navicue", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose one specimen and print its bundle as JSON.
    Compose(ComposeArgs),
    /// Compose every specimen of a catalog.
    Catalog(CatalogArgs),
    /// Print the variety report of a catalog.
    Variety(VarietyArgs),
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Signature key (e.g. `sacred_ordinary`).
    #[arg(long)]
    signature: SignatureKey,

    /// Narrative form (e.g. `practice`).
    #[arg(long)]
    form: Form,

    /// Time of day (`morning`, `midday`, `evening`, `night`).
    #[arg(long)]
    chrono: TimeContext,

    /// KBE axis (`knowing`/`k`, `believing`/`b`, `embodying`/`e`).
    #[arg(long)]
    kbe: KbeAxis,

    /// Interaction hook (e.g. `tap`).
    #[arg(long)]
    hook: InteractionHook,

    /// Specimen seed.
    #[arg(long, allow_negative_numbers = true)]
    seed: i64,

    /// Compose as the sealed capstone of its series.
    #[arg(long, default_value_t = false)]
    seal: bool,

    /// Mechanism label.
    #[arg(long, default_value = "")]
    mechanism: String,
}

#[derive(Parser, Debug)]
struct CatalogArgs {
    /// Input catalog JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Print only the SHA-256 of all bundles instead of one JSON line per specimen.
    #[arg(long, default_value_t = false)]
    digest: bool,
}

#[derive(Parser, Debug)]
struct VarietyArgs {
    /// Input catalog JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(serde::Serialize)]
struct SpecimenLine<'a> {
    input: &'a CompositorInput,
    bundle: &'a NaviCueBundle,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Compose(args) => cmd_compose(args),
        Command::Catalog(args) => cmd_catalog(args),
        Command::Variety(args) => cmd_variety(args),
    }
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let input = CompositorInput::new(
        args.signature,
        args.form,
        args.chrono,
        args.kbe,
        args.hook,
        args.seed,
    )
    .sealed(args.seal)
    .with_mechanism(args.mechanism.as_str());

    let mut ctx = ClampContext::new();
    let bundle = navicue::compose_navicue_with(&input, &mut ctx)
        .with_context(|| format!("compose specimen {}", input.specimen_seed))?;

    let json = serde_json::to_string_pretty(&bundle).context("serialize bundle")?;
    println!("{json}");
    if !ctx.events().is_empty() {
        eprintln!("{} value(s) clamped", ctx.events().len());
    }
    Ok(())
}

fn load_and_compose(
    path: &std::path::Path,
) -> anyhow::Result<Vec<(CompositorInput, NaviCueBundle)>> {
    let catalog = Catalog::from_path(path)
        .with_context(|| format!("load catalog '{}'", path.display()))?;
    let mut ctx = ClampContext::new();
    let out = catalog
        .compose_all(&mut ctx)
        .with_context(|| format!("compose catalog '{}'", path.display()))?;
    Ok(out)
}

fn cmd_catalog(args: CatalogArgs) -> anyhow::Result<()> {
    let specimens = load_and_compose(&args.in_path)?;

    if args.digest {
        let mut hasher = Sha256::new();
        for (_, bundle) in &specimens {
            let bytes = serde_json::to_vec(bundle).context("serialize bundle")?;
            hasher.update(&bytes);
            hasher.update(b"\n");
        }
        println!("{:x}", hasher.finalize());
        eprintln!("hashed {} specimen(s)", specimens.len());
        return Ok(());
    }

    let stdout = std::io::stdout();
    let mut w = BufWriter::new(stdout.lock());
    for (input, bundle) in &specimens {
        serde_json::to_writer(&mut w, &SpecimenLine { input, bundle })
            .context("write specimen line")?;
        w.write_all(b"\n").context("write specimen line")?;
    }
    w.flush().context("flush stdout")?;
    Ok(())
}

fn cmd_variety(args: VarietyArgs) -> anyhow::Result<()> {
    let specimens = load_and_compose(&args.in_path)?;
    let report = VarietyReport::from_bundles(specimens.iter().map(|(_, b)| b));
    let json = serde_json::to_string_pretty(&report).context("serialize variety report")?;
    println!("{json}");
    Ok(())
}
