use crate::reference::FileReference;
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Hosts that get the bearer token attached. Anything else is fetched
/// anonymously so the token never leaks to arbitrary servers.
fn wants_auth(url: &str) -> bool {
    url.contains("github.com") || url.contains("githubusercontent.com")
}

/// Materialize one reference at `dest`: HTTP download for remote
/// references, filesystem copy (relative to `root`) for local ones.
///
/// Sequential and fire-once; retry policy belongs to the caller's build
/// pipeline, not here.
pub fn materialize(
    reference: &FileReference,
    root: &Path,
    dest: &Path,
    auth_token: Option<&str>,
) -> Result<()> {
    if reference.is_remote() {
        download(&reference.resolved, dest, auth_token)
            .with_context(|| format!("failed to download {}", reference.original))
    } else {
        let src = root.join(&reference.resolved);
        copy_local(&src, dest)
            .with_context(|| format!("failed to copy {}", reference.original))
    }
}

fn download(url: &str, dest: &Path, auth_token: Option<&str>) -> Result<()> {
    let mut request = ureq::get(url);
    if let Some(token) = auth_token {
        if wants_auth(url) {
            request = request.header("Authorization", format!("Bearer {token}"));
        }
    }

    // Non-2xx statuses come back as Err from call().
    let mut response = request.call()?;
    let mut file = fs::File::create(dest)
        .with_context(|| format!("failed to create {}", dest.display()))?;
    io::copy(&mut response.body_mut().as_reader(), &mut file)
        .with_context(|| format!("failed to write {}", dest.display()))?;
    Ok(())
}

fn copy_local(src: &Path, dest: &Path) -> Result<()> {
    fs::copy(src, dest).with_context(|| {
        format!("{} -> {}", src.display(), dest.display())
    })?;
    Ok(())
}
