use crate::parser::{read_keybinds, ConfigError, KeyBind};
use log::info;
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Location of the LeftWM config, relative to the home directory
pub const CONFIG_RELATIVE_PATH: &str = ".config/leftwm/config.ron";

/// Build the config path from a home directory value.
///
/// The value is used as-is; an empty home yields `/.config/leftwm/config.ron`.
pub fn config_path_from(home: OsString) -> PathBuf {
    let mut path = home;
    path.push("/");
    path.push(CONFIG_RELATIVE_PATH);
    PathBuf::from(path)
}

/// `$HOME/.config/leftwm/config.ron`
pub fn config_path() -> PathBuf {
    config_path_from(env::var_os("HOME").unwrap_or_default())
}

/// Read every keybinding from the user's LeftWM config.
pub fn load_keybinds() -> Result<Vec<KeyBind>, ConfigError> {
    let path = config_path();
    info!("Reading keybinds from {:?}", path);
    read_keybinds(&path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_from_home() {
        assert_eq!(
            config_path_from(OsString::from("/home/alice")),
            PathBuf::from("/home/alice/.config/leftwm/config.ron")
        );
    }

    #[test]
    fn test_config_path_without_home() {
        assert_eq!(
            config_path_from(OsString::new()),
            PathBuf::from("/.config/leftwm/config.ron")
        );
    }
}
