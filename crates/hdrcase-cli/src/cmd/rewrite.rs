use anyhow::Context;
use hdrcase_core::normalize_file;
use tracing::info;

use super::TargetArgs;

pub fn run(args: TargetArgs) -> anyhow::Result<()> {
    let normalizer = args.normalizer();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let rep = normalize_file(&args.path, &normalizer, &mut out)
        .with_context(|| format!("normalize {}", args.path.display()))?;

    info!(
        path = %args.path.display(),
        mode = %normalizer.mode,
        lines = rep.lines,
        changed = rep.changed,
        "normalize ok"
    );
    Ok(())
}
