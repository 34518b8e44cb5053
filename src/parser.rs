//! Line-level extraction of keybindings from a LeftWM `config.ron`.
//!
//! The file is not parsed as RON. Each line is matched against a single
//! pattern and everything that does not match is ignored.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// `(command: WORD, value: "STRING", modifier: [LIST], key: "STRING")`
static KEYBIND_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"\(command: ([A-Za-z0-9_]+), value: "(.*?)", modifier: \[([^\]]*)\], key: "(.*?)"\)"#,
    )
    .expect("keybind pattern is a valid regex")
});

/// One keybinding as written in the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBind {
    pub command: String,
    pub value: String,
    pub modifier: Vec<String>,
    pub key: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot open {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("read failed while scanning {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Extract a keybinding from a single line, if the line holds one.
pub fn parse_line(line: &str) -> Option<KeyBind> {
    let caps = KEYBIND_LINE.captures(line)?;

    Some(KeyBind {
        command: caps[1].to_string(),
        value: caps[2].to_string(),
        modifier: parse_modifiers(&caps[3]),
        key: caps[4].to_string(),
    })
}

/// Split the bracketed modifier list into names.
///
/// An empty list gives `[""]`, not `[]`.
pub fn parse_modifiers(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|m| m.replace('"', "").trim().to_string())
        .collect()
}

/// Scan a whole reader top to bottom, keeping file order and duplicates.
///
/// Bytes that are not valid UTF-8 are replaced rather than treated as a read
/// failure. Only real I/O errors abort the scan.
pub fn scan<R: BufRead>(mut reader: R) -> io::Result<Vec<KeyBind>> {
    let mut keybinds = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches('\n').trim_end_matches('\r');

        if let Some(kb) = parse_line(line) {
            keybinds.push(kb);
        }
    }

    debug!("Extracted {} keybinds", keybinds.len());
    Ok(keybinds)
}

/// Same as [`scan`], tagging any failure with `path`.
pub fn parse_keybinds<R: BufRead>(reader: R, path: &Path) -> Result<Vec<KeyBind>, ConfigError> {
    scan(reader).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Open `path`, scan it and close it again.
pub fn read_keybinds<P: AsRef<Path>>(path: P) -> Result<Vec<KeyBind>, ConfigError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ConfigError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    parse_keybinds(BufReader::new(file), path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    fn kb(command: &str, value: &str, modifier: &[&str], key: &str) -> KeyBind {
        KeyBind {
            command: command.to_string(),
            value: value.to_string(),
            modifier: modifier.iter().map(|m| m.to_string()).collect(),
            key: key.to_string(),
        }
    }

    #[test]
    fn test_execute_line() {
        let line = r#"    (command: Execute, value: "rofi -show drun", modifier: ["modkey"], key: "space"),"#;
        assert_eq!(
            parse_line(line),
            Some(kb("Execute", "rofi -show drun", &["modkey"], "space"))
        );
    }

    #[test]
    fn test_multiple_modifiers() {
        let line = r#"(command: GotoTag, value: "1", modifier: ["modkey","Shift"], key: "1")"#;
        let parsed = parse_line(line).unwrap();
        assert_eq!(parsed.modifier, vec!["modkey", "Shift"]);
        assert_eq!(parsed.modifier.join(", "), "modkey, Shift");
    }

    #[test]
    fn test_modifiers_spacing_and_bare_tokens() {
        assert_eq!(
            parse_modifiers(r#" "modkey" , Shift ,"Control""#),
            vec!["modkey", "Shift", "Control"]
        );
    }

    #[test]
    fn test_empty_modifier_list_keeps_single_empty_entry() {
        let line = r#"(command: UnknownCmd, value: "", modifier: [], key: "x")"#;
        assert_eq!(parse_line(line), Some(kb("UnknownCmd", "", &[""], "x")));
    }

    #[test]
    fn test_non_matching_lines() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("modkey: \"Mod4\","), None);
        assert_eq!(parse_line("keybind: ["), None);
        // missing closing paren
        assert_eq!(
            parse_line(r#"(command: CloseWindow, value: "", modifier: ["modkey"], key: "q""#),
            None
        );
        // missing value field
        assert_eq!(
            parse_line(r#"(command: CloseWindow, modifier: ["modkey"], key: "q")"#),
            None
        );
        // non-word command
        assert_eq!(
            parse_line(r#"(command: Close-Window, value: "", modifier: [], key: "q")"#),
            None
        );
    }

    const SAMPLE: &str = r#"#![enable(implicit_some)]
(
    modkey: "Mod4",
    mousekey: "Mod4",
    keybind: [
        (command: Execute, value: "rofi -show drun", modifier: ["modkey"], key: "space"),
        (command: CloseWindow, value: "", modifier: ["modkey", "Shift"], key: "q"
        (command: ToggleFullScreen, value: "", modifier: ["modkey"], key: "f"),
        (command: GotoTag, value: "1", modifier: ["modkey"], key: "1"),
        (command: GotoTag, value: "1", modifier: ["modkey"], key: "1"),
        (command: UnknownCmd, value: "", modifier: [], key: "x"),
    ],
)
"#;

    #[test]
    fn test_scan_keeps_order_and_duplicates() {
        let keybinds = scan(Cursor::new(SAMPLE)).unwrap();
        let commands: Vec<&str> = keybinds.iter().map(|k| k.command.as_str()).collect();
        assert_eq!(
            commands,
            vec!["Execute", "ToggleFullScreen", "GotoTag", "GotoTag", "UnknownCmd"]
        );
        assert_eq!(keybinds[2], keybinds[3]);
    }

    #[test]
    fn test_scan_is_repeatable() {
        let first = scan(Cursor::new(SAMPLE)).unwrap();
        let second = scan(Cursor::new(SAMPLE)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_scan_crlf_and_invalid_utf8() {
        let mut input = b"(command: SoftReload, value: \"\", modifier: [\"modkey\"], key: \"r\")\r\n".to_vec();
        input.extend_from_slice(b"\xff\xfe garbage\n");
        input.extend_from_slice(b"(command: HardReload, value: \"\", modifier: [\"modkey\"], key: \"R\")");

        let keybinds = scan(Cursor::new(input)).unwrap();
        assert_eq!(keybinds.len(), 2);
        assert_eq!(keybinds[0].key, "r");
        assert_eq!(keybinds[1].command, "HardReload");
    }

    struct FailingReader {
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::new(io::ErrorKind::Other, "disk gone"));
            }
            self.served = true;
            let line = b"(command: SoftReload, value: \"\", modifier: [], key: \"r\")\n";
            let n = line.len().min(buf.len());
            buf[..n].copy_from_slice(&line[..n]);
            Ok(n)
        }
    }

    #[test]
    fn test_read_error_is_fatal() {
        let reader = BufReader::new(FailingReader { served: false });
        let err = parse_keybinds(reader, Path::new("config.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = read_keybinds("/nonexistent/lunacy/config.ron").unwrap_err();
        match err {
            ConfigError::Open { path, source } => {
                assert_eq!(path, PathBuf::from("/nonexistent/lunacy/config.ron"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
