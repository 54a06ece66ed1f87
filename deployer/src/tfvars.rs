use crate::provider::{ProviderResult, SerializationSnafu, WriteSnafu};
use log::{debug, info};
use serde::Serialize;
use snafu::ResultExt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Terraform loads every `*.auto.tfvars.json` file in its working directory without being told to.
pub const TFVARS_SUFFIX: &str = ".auto.tfvars.json";

/// The name of the tfvars file written for provider `name`, e.g. `vpc.auto.tfvars.json`.
pub fn tfvars_filename(name: &str) -> String {
    format!("{}{}", name, TFVARS_SUFFIX)
}

/// Serialize `vars` as JSON indented by two spaces and write it to `<dir>/<name>.auto.tfvars.json`,
/// replacing any existing file.
///
/// The document is written to a temporary file in `dir` first and then renamed over the target, so
/// the target is never observed half-written. If anything fails the target is left as it was and
/// the temporary file is removed.
pub fn write_tfvars<T>(dir: &Path, name: &str, vars: &T) -> ProviderResult<PathBuf>
where
    T: Serialize + ?Sized,
{
    let path = dir.join(tfvars_filename(name));
    let json = serde_json::to_vec_pretty(vars).context(SerializationSnafu { provider: name })?;

    debug!(
        "Writing {} bytes of '{}' tfvars to '{}'",
        json.len(),
        name,
        path.display()
    );
    let mut file = NamedTempFile::new_in(dir).context(WriteSnafu { path: &path })?;
    file.write_all(&json).context(WriteSnafu { path: &path })?;
    file.as_file().sync_all().context(WriteSnafu { path: &path })?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(file.path(), fs::Permissions::from_mode(0o644))
            .context(WriteSnafu { path: &path })?;
    }
    file.persist(&path)
        .map_err(|e| e.error)
        .context(WriteSnafu { path: &path })?;

    info!("Wrote '{}' tfvars to '{}'", name, path.display());
    Ok(path)
}
