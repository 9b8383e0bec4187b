//! Environment-derived well-known locations.
//!
//! Every function here is a one-shot OS or environment lookup that resolves
//! to a native-syntax path. Lookup failures are system errors and are
//! surfaced as-is; they are never retried.

use std::env;
use std::fs::File;

use log::debug;

use crate::{Absolute, Error, NativeDirectoryPath, NativeFilePath, Result};

/// The current working directory.
pub fn working_directory() -> Result<NativeDirectoryPath> {
    let cwd = env::current_dir()?;
    NativeDirectoryPath::from_absolute(&cwd.to_string_lossy())
}

/// The directory user configuration lives under: `XDG_CONFIG_HOME` when set,
/// otherwise the user's home directory.
pub fn user_config_dir() -> Result<NativeDirectoryPath> {
    if let Ok(dir) = env::var("XDG_CONFIG_HOME") {
        if !dir.is_empty() {
            return NativeDirectoryPath::from_absolute(&dir);
        }
    }

    let home = home::home_dir().ok_or(Error::HomeNotFound)?;
    NativeDirectoryPath::from_absolute(&home.to_string_lossy())
}

/// The directory machine-wide configuration lives under: `/etc`, or the
/// `ProgramData` folder on Windows.
#[cfg(not(windows))]
pub fn global_config_dir() -> Result<NativeDirectoryPath> {
    NativeDirectoryPath::from_absolute("/etc")
}

/// The directory machine-wide configuration lives under: `/etc`, or the
/// `ProgramData` folder on Windows.
#[cfg(windows)]
pub fn global_config_dir() -> Result<NativeDirectoryPath> {
    let dir = env::var("ProgramData").map_err(|_| Error::UndefinedVariable("ProgramData"))?;
    NativeDirectoryPath::from_absolute(&dir)
}

/// The user's document directory: the home directory, with `Documents`
/// appended on Windows.
pub fn document_dir() -> Result<NativeDirectoryPath> {
    let home = home::home_dir().ok_or(Error::HomeNotFound)?;
    let mut dir = NativeDirectoryPath::from_absolute(&home.to_string_lossy())?;
    if cfg!(windows) {
        dir.enter("Documents");
    }
    Ok(dir)
}

/// A project's own document directory beneath [`document_dir`].
pub fn document_dir_for(project: &str) -> Result<NativeDirectoryPath> {
    let mut dir = document_dir()?;
    dir.enter(project);
    Ok(dir)
}

/// A configuration file directly beneath [`user_config_dir`].
pub fn user_config_file(file: &str) -> Result<NativeFilePath> {
    Ok(user_config_dir()?.select(file))
}

/// A project's configuration file beneath [`user_config_dir`].
pub fn user_config_file_in(project: &str, file: &str) -> Result<NativeFilePath> {
    let mut dir = user_config_dir()?;
    dir.enter(project);
    Ok(dir.select(file))
}

/// A configuration file directly beneath [`global_config_dir`].
pub fn global_config_file(file: &str) -> Result<NativeFilePath> {
    Ok(global_config_dir()?.select(file))
}

/// A project's configuration file beneath [`global_config_dir`].
pub fn global_config_file_in(project: &str, file: &str) -> Result<NativeFilePath> {
    let mut dir = global_config_dir()?;
    dir.enter(project);
    Ok(dir.select(file))
}

/// The directory temporary files live under.
pub fn temporary_directory() -> Result<NativeDirectoryPath> {
    NativeDirectoryPath::from_absolute(&env::temp_dir().to_string_lossy())
}

/// Creates a uniquely-named file inside `directory`, returning its path and
/// the open handle. The file is not removed automatically.
pub fn temporary_file(directory: &NativeDirectoryPath) -> Result<(NativeFilePath, File)> {
    let (file, path) = tempfile::NamedTempFile::new_in(directory.as_absolute_string())?
        .keep()
        .map_err(|err| Error::Io(err.error))?;

    let path = NativeFilePath::from_absolute(&path.to_string_lossy())?;
    debug!("created temporary file `{path}`");
    Ok((path, file))
}
