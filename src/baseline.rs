use crate::config::{BaselineConfig, CiEnvironment};
use crate::git::Repository;
use tracing::debug;

/// Pick the reference to compare against.
///
/// An explicit target branch from the CI environment wins and is qualified
/// with the remote (`origin/<branch>`) without being verified. Otherwise the
/// configured candidates are tried in order and the first existing one is
/// returned. `None` is a valid outcome: there is simply nothing to compare to.
pub fn resolve_baseline<R: Repository>(
    repo: &R,
    env: &CiEnvironment,
    config: &BaselineConfig,
) -> Option<String> {
    if let Some(base_ref) = &env.base_ref {
        let qualified = format!("{}/{}", config.remote, base_ref);
        debug!(baseline = %qualified, "using target branch from environment");
        return Some(qualified);
    }

    let found = config
        .candidates
        .iter()
        .find(|candidate| repo.ref_exists(candidate))
        .cloned();
    debug!(baseline = ?found, "checked fallback baselines");
    found
}
