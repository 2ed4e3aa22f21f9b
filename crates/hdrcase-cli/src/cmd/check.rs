use anyhow::{bail, Context};
use hdrcase_core::check_file;
use tracing::{info, warn};

use super::TargetArgs;

pub fn run(args: TargetArgs) -> anyhow::Result<()> {
    let normalizer = args.normalizer();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let rep = check_file(&args.path, &normalizer, &mut out)
        .with_context(|| format!("check {}", args.path.display()))?;

    if rep.changed > 0 {
        warn!(path = %args.path.display(), changed = rep.changed, "file is not normalized");
        bail!(
            "{} of {} lines in {} would change",
            rep.changed,
            rep.lines,
            args.path.display()
        );
    }

    info!(path = %args.path.display(), lines = rep.lines, "already normalized");
    Ok(())
}
