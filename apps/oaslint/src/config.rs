//! Configuration discovery and effective settings resolution.
//!
//! oaslint reads `oaslint.toml|yaml|yml` from the repository root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `output`: `text`
//! - `strict`: false
//! - `rules.skip`: empty
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::checks::find_rule;
use crate::output::OutputFormat;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILES: [&str; 3] = ["oaslint.toml", "oaslint.yaml", "oaslint.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `oaslint.toml|yaml`.
pub struct LintConfig {
    pub output: Option<String>,
    pub strict: Option<bool>,
    #[serde(default)]
    pub rules: Option<RulesCfg>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// `[rules]` section.
pub struct RulesCfg {
    /// Rule ids that are not run.
    #[serde(default)]
    pub skip: Vec<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub output: OutputFormat,
    pub strict: bool,
    pub skip: Vec<String>,
    /// Problems found while resolving, reported as notes by the caller.
    pub notes: Vec<String>,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when an `oaslint.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_FILES.iter().any(|f| cur.join(f).exists()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `LintConfig` from `oaslint.toml` or `oaslint.yaml|yml` if present.
///
/// An unreadable or unparsable file is logged and treated as absent.
pub fn load_config(root: &Path) -> Option<LintConfig> {
    let toml_path = root.join("oaslint.toml");
    if toml_path.exists() {
        let s = read_config(&toml_path)?;
        return match toml::from_str(&s) {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                tracing::warn!(path = %toml_path.display(), error = %e, "ignoring invalid config");
                None
            }
        };
    }
    for yml in ["oaslint.yaml", "oaslint.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = read_config(&p)?;
            return match serde_yaml::from_str(&s) {
                Ok(cfg) => Some(cfg),
                Err(e) => {
                    tracing::warn!(path = %p.display(), error = %e, "ignoring invalid config");
                    None
                }
            };
        }
    }
    None
}

fn read_config(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(s) => Some(s),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config");
            None
        }
    }
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
///
/// `cli_strict` is `None` when the flag was not passed.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_output: Option<&str>,
    cli_strict: Option<bool>,
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root).unwrap_or_default();
    let mut notes = Vec::new();

    let output = match cli_output.map(str::to_string).or(cfg.output) {
        Some(name) => OutputFormat::parse(&name).unwrap_or_else(|| {
            notes.push(format!("Unknown output mode '{name}'; using text."));
            OutputFormat::Text
        }),
        None => OutputFormat::default(),
    };

    let strict = cli_strict.or(cfg.strict).unwrap_or(false);

    let skip: Vec<String> = cfg.rules.map(|r| r.skip).unwrap_or_default();
    for id in &skip {
        if find_rule(id).is_none() {
            notes.push(format!("Unknown rule id in [rules].skip: '{id}'"));
        }
    }

    Effective {
        repo_root,
        output,
        strict,
        skip,
        notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_config() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        let eff = resolve_effective(dir.path().to_str(), None, None);
        assert_eq!(eff.output, OutputFormat::Text);
        assert!(!eff.strict);
        assert!(eff.skip.is_empty());
        assert!(eff.notes.is_empty());
    }

    #[test]
    fn test_detect_and_load_toml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("oaslint.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
output = "json"
strict = true
[rules]
skip = ["path-naming"]
    "#
        )
        .unwrap();

        // Resolve using explicit repo_root to avoid global CWD races
        let eff = resolve_effective(root.to_str(), None, None);
        assert_eq!(eff.output, OutputFormat::Json);
        assert!(eff.strict);
        assert_eq!(eff.skip, vec!["path-naming".to_string()]);
        assert!(eff.notes.is_empty());
    }

    #[test]
    fn test_load_yaml_from_ancestor() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("oaslint.yaml"), "output: json\nstrict: false\n").unwrap();
        let nested = root.join("api/specs");
        fs::create_dir_all(&nested).unwrap();

        let eff = resolve_effective(nested.to_str(), None, None);
        assert_eq!(eff.repo_root, root.to_path_buf());
        assert_eq!(eff.output, OutputFormat::Json);
        assert!(!eff.strict);
    }

    #[test]
    fn test_cli_overrides_config() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("oaslint.toml"), "output = \"json\"\nstrict = true\n").unwrap();
        let eff = resolve_effective(root.to_str(), Some("text"), Some(false));
        assert_eq!(eff.output, OutputFormat::Text);
        assert!(!eff.strict);
    }

    #[test]
    fn test_unknown_values_become_notes() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(
            root.join("oaslint.toml"),
            "output = \"xml\"\n[rules]\nskip = [\"no-such-rule\"]\n",
        )
        .unwrap();
        let eff = resolve_effective(root.to_str(), None, None);
        assert_eq!(eff.output, OutputFormat::Text);
        assert_eq!(eff.notes.len(), 2);
    }

    #[test]
    fn test_invalid_config_is_ignored() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("oaslint.toml"), "strict = [").unwrap();
        assert!(load_config(root).is_none());
        let eff = resolve_effective(root.to_str(), None, None);
        assert!(!eff.strict);
    }

    #[test]
    fn test_unreadable_config_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        // A directory at the config path exists but cannot be read as a file
        fs::create_dir(root.join("oaslint.toml")).unwrap();
        assert!(read_config(&root.join("oaslint.toml")).is_none());
        assert!(load_config(root).is_none());
        let eff = resolve_effective(root.to_str(), None, None);
        assert_eq!(eff.repo_root, root.to_path_buf());
        assert!(!eff.strict);
        assert_eq!(eff.output, OutputFormat::Text);
    }
}
