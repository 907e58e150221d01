//! Entry point: load an OBJ file and report what was parsed.
//! Flags: --obj=<path> (or a bare path), --strict, --indexed, --log=<filter>.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use asset::IndexedMesh;

#[derive(Debug, Default)]
struct Args {
    obj: Option<PathBuf>,
    strict: bool,
    indexed: bool,
    log_filter: Option<String>,
    unknown: Vec<String>,
}

fn is_on(val: &str) -> bool {
    matches!(
        val.to_ascii_lowercase().as_str(),
        "1" | "true" | "on" | "yes"
    )
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Args {
    let mut out = Args::default();

    for arg in args {
        if let Some(val) = arg.strip_prefix("--obj=") {
            out.obj = Some(PathBuf::from(val));
        } else if arg == "--strict" {
            out.strict = true;
        } else if let Some(val) = arg.strip_prefix("--strict=") {
            out.strict = is_on(val);
        } else if arg == "--indexed" {
            out.indexed = true;
        } else if let Some(val) = arg.strip_prefix("--indexed=") {
            out.indexed = is_on(val);
        } else if let Some(val) = arg.strip_prefix("--log=") {
            out.log_filter = Some(val.to_owned());
        } else if !arg.starts_with("--") && out.obj.is_none() {
            out.obj = Some(PathBuf::from(arg));
        } else {
            out.unknown.push(arg);
        }
    }
    out
}

fn init_logging(filter: Option<&str>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(filter) = filter {
        builder.parse_filters(filter);
    }
    builder.init();
}

fn main() -> Result<()> {
    let args = parse_args(std::env::args().skip(1));
    init_logging(args.log_filter.as_deref());
    for arg in &args.unknown {
        log::warn!("Ignoring unknown argument '{}'.", arg);
    }

    let Some(path) = args.obj else {
        bail!("usage: app --obj=<path> [--strict] [--indexed] [--log=<filter>]");
    };
    log::info!(
        "Loading {} (strict={}, indexed={})",
        path.display(),
        args.strict,
        args.indexed
    );

    let (mesh, notes) = asset::load_mesh_data_from_obj_with_notes(&path)
        .with_context(|| format!("Failed to load OBJ {}", path.display()))?;

    if args.strict && !notes.is_empty() {
        bail!(
            "{} quality note(s) in {} (first: {})",
            notes.len(),
            path.display(),
            notes[0]
        );
    }

    if args.indexed {
        let indexed = IndexedMesh::from_mesh_data(&mesh)
            .with_context(|| format!("Invalid face indices in {}", path.display()))?;
        log::info!(
            "Indexed mesh: {} vertices ({} bytes), {} triangles ({} bytes)",
            indexed.vertices.len(),
            indexed.vertex_bytes().len(),
            indexed.triangle_count(),
            indexed.index_bytes().len()
        );
    }

    log::info!("Done.");
    Ok(())
}
