use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const APP_QUALIFIER: &str = "dev";
const APP_ORGANIZATION: &str = "modelcfg";
const APP_NAME: &str = "modelcfg";
const AGENT_DIRNAME: &str = "agent";

/// Environment variable that points at a non-default agent directory.
pub const AGENT_DIR_ENV: &str = "MODELCFG_AGENT_DIR";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not resolve user data directory")]
    MissingUserDataDir,
}

pub type Result<T> = std::result::Result<T, Error>;

/// App-local user data directory (for durable application state).
pub fn user_data_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
        .ok_or(Error::MissingUserDataDir)?;
    Ok(dirs.data_local_dir().to_path_buf())
}

/// Default per-agent working directory, holding the provider profile.
pub fn default_agent_dir() -> Result<PathBuf> {
    Ok(user_data_dir()?.join(AGENT_DIRNAME))
}

/// An explicitly chosen directory wins over the default location.
pub fn agent_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(dir) => Ok(dir.to_path_buf()),
        None => default_agent_dir(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_agent_dir_is_used_verbatim() {
        let dir = agent_dir(Some(Path::new("/tmp/some-agent"))).expect("agent dir");
        assert_eq!(dir, PathBuf::from("/tmp/some-agent"));
    }
}
