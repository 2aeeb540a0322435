use std::env;
use std::path::PathBuf;

/// `$HOME/.config/varlist`, or `$XDG_CONFIG_HOME/varlist` when HOME is unset.
fn config_base() -> Option<PathBuf> {
    env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(|h| PathBuf::from(h).join(".config"))
        .or_else(|| {
            env::var_os("XDG_CONFIG_HOME")
                .filter(|x| !x.is_empty())
                .map(PathBuf::from)
        })
        .map(|base| base.join("varlist"))
}

/// Settings file path, when one exists.
pub(crate) fn resolve_settings_config_path() -> Option<PathBuf> {
    config_base()
        .map(|dir| dir.join("settings.conf"))
        .filter(|p| p.is_file())
}

/// Config directory for varlist (ensured to exist); the working directory as a last resort.
pub fn config_dir() -> PathBuf {
    let dir = config_base().unwrap_or_else(|| PathBuf::from(".varlist"));
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: "$HOME/.config/varlist/logs" (ensured to exist)
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}
