//! Execution of parsed `env-overlay` commands.
//!
//! Commands write their primary output to the supplied writer so tests can
//! capture it; diagnostics go through `tracing`.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use env_overlay::codec::{self, DocumentFormat};
use env_overlay::comparison::ComparisonTable;
use env_overlay::{DocumentSession, OverlaySettings, merge, output};
use tracing::info;

use crate::cli::{Args, Command, CompareArgs, FilesArgs, GenerateArgs, MergeArgs};
use crate::error::Result;

/// Run the command described by `args`, writing results to `out`.
///
/// # Errors
///
/// Returns a [`crate::error::CliError`] when settings, documents or output
/// cannot be processed.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    match &args.command {
        Command::Environments(files) => list_environments(args, files, out),
        Command::Generate(generate) => generate_environment(args, generate, out),
        Command::Merge(pair) => merge_pair(pair, out),
        Command::Compare(compare) => compare_documents(args, compare, out),
    }
}

fn load_settings(args: &Args, output_dir: Option<Utf8PathBuf>) -> Result<OverlaySettings> {
    let overrides = args.naming.overrides(output_dir);
    Ok(OverlaySettings::load(args.config.as_deref(), &overrides)?)
}

fn load_session(settings: &OverlaySettings, files: &[Utf8PathBuf]) -> Result<DocumentSession> {
    let mut session = DocumentSession::new(settings.naming());
    let loaded = session.load_files(files)?;
    info!(loaded, "loaded documents");
    Ok(session)
}

fn list_environments<W: Write>(args: &Args, files: &FilesArgs, out: &mut W) -> Result<()> {
    let settings = load_settings(args, None)?;
    let session = load_session(&settings, &files.files)?;
    for environment in session.environments() {
        writeln!(out, "{environment}")?;
    }
    Ok(())
}

fn generate_environment<W: Write>(args: &Args, generate: &GenerateArgs, out: &mut W) -> Result<()> {
    let settings = load_settings(args, generate.output_dir.clone())?;
    let session = load_session(&settings, &generate.files)?;
    if generate.should_print {
        let merged = session.merge_for(&generate.environment)?;
        let name = session.naming().output_name(&generate.environment);
        let format = DocumentFormat::from_path(Utf8Path::new(&name))?;
        out.write_all(codec::encode(format, &merged)?.as_bytes())?;
    } else {
        let path = output::generate(&session, &generate.environment, &settings.output_dir)?;
        writeln!(out, "{path}")?;
    }
    Ok(())
}

fn merge_pair<W: Write>(pair: &MergeArgs, out: &mut W) -> Result<()> {
    let mut session = DocumentSession::default();
    let base = session.load_file(&pair.base)?.value().clone();
    let overlay = session.load_file(&pair.overlay)?.value().clone();
    let format = pair
        .format
        .map_or_else(|| DocumentFormat::from_path(&pair.base), |chosen| Ok(chosen.into()))?;
    let merged = merge(base, overlay);
    out.write_all(codec::encode(format, &merged)?.as_bytes())?;
    Ok(())
}

fn compare_documents<W: Write>(args: &Args, compare: &CompareArgs, out: &mut W) -> Result<()> {
    let settings = load_settings(args, None)?;
    let session = load_session(&settings, &compare.files)?;
    let table = ComparisonTable::build(&session);
    out.write_all(table.render_text(compare.format.into())?.as_bytes())?;
    Ok(())
}
