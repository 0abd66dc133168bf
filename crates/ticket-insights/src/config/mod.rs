use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use anyhow::{Result, bail};

pub const DATASET_ENV_VAR: &str = "TICKET_INSIGHTS_DATASET";
pub const DEFAULT_DATASET_FILE: &str = "Support_Metrics.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimePaths {
    pub home_dir: PathBuf,
    pub cwd: PathBuf,
    pub dataset_path: PathBuf,
}

/// Resolves where the ticket dataset lives.
///
/// Precedence: explicit override, then the `TICKET_INSIGHTS_DATASET` value
/// passed as `env_override`, then `Support_Metrics.csv` under `cwd`.
pub fn resolve_runtime_paths(
    home_dir: &Path,
    cwd: &Path,
    dataset_override: Option<&Path>,
    env_override: Option<OsString>,
) -> Result<RuntimePaths> {
    if !home_dir.is_absolute() {
        bail!("home_dir must be absolute: {}", home_dir.display());
    }
    if !cwd.is_absolute() {
        bail!("cwd must be absolute: {}", cwd.display());
    }

    let home_dir = normalize_lexical(home_dir);
    let cwd = normalize_lexical(cwd);
    let env_path = env_override
        .filter(|value| !value.is_empty())
        .map(PathBuf::from);

    let dataset_path = match dataset_override.or(env_path.as_deref()) {
        Some(path) => resolve_user_path(path, &home_dir, &cwd)?,
        None => cwd.join(DEFAULT_DATASET_FILE),
    };

    Ok(RuntimePaths {
        home_dir,
        cwd,
        dataset_path: normalize_lexical(&dataset_path),
    })
}

fn resolve_user_path(path: &Path, home_dir: &Path, cwd: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path, home_dir)?;
    let resolved = if expanded.is_absolute() {
        expanded
    } else {
        cwd.join(expanded)
    };

    Ok(normalize_lexical(&resolved))
}

fn expand_tilde(path: &Path, home_dir: &Path) -> Result<PathBuf> {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => {
            let mut expanded = home_dir.to_path_buf();
            for component in components {
                expanded.push(component.as_os_str());
            }
            Ok(expanded)
        }
        Some(Component::Normal(first))
            if first
                .to_str()
                .is_some_and(|segment| segment.starts_with('~')) =>
        {
            bail!(
                "unsupported home expansion syntax (only `~` and `~/...` are supported): {}",
                path.display()
            )
        }
        _ => Ok(path.to_path_buf()),
    }
}

fn normalize_lexical(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component.as_os_str());
                }
            }
            _ => normalized.push(component.as_os_str()),
        }
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::resolve_runtime_paths;
    use std::ffi::OsString;
    use std::path::Path;

    #[test]
    fn defaults_dataset_to_support_metrics_in_cwd() {
        let paths = resolve_runtime_paths(
            Path::new("/home/tester"),
            Path::new("/work/support"),
            None,
            None,
        )
        .expect("paths should resolve");

        assert_eq!(paths.home_dir, Path::new("/home/tester"));
        assert_eq!(paths.cwd, Path::new("/work/support"));
        assert_eq!(
            paths.dataset_path,
            Path::new("/work/support/Support_Metrics.csv")
        );
    }

    #[test]
    fn explicit_override_beats_environment() {
        let paths = resolve_runtime_paths(
            Path::new("/home/tester"),
            Path::new("/work/support"),
            Some(Path::new("/data/tickets.csv")),
            Some(OsString::from("/env/tickets.csv")),
        )
        .expect("override should resolve");

        assert_eq!(paths.dataset_path, Path::new("/data/tickets.csv"));
    }

    #[test]
    fn environment_value_is_used_without_override() {
        let paths = resolve_runtime_paths(
            Path::new("/home/tester"),
            Path::new("/work/support"),
            None,
            Some(OsString::from("fixtures/../data/tickets.csv")),
        )
        .expect("env value should resolve");

        assert_eq!(paths.dataset_path, Path::new("/work/support/data/tickets.csv"));
    }

    #[test]
    fn empty_environment_value_falls_back_to_default() {
        let paths = resolve_runtime_paths(
            Path::new("/home/tester"),
            Path::new("/work/support"),
            None,
            Some(OsString::new()),
        )
        .expect("empty env should fall back");

        assert_eq!(
            paths.dataset_path,
            Path::new("/work/support/Support_Metrics.csv")
        );
    }

    #[test]
    fn expands_tilde_override_against_home_dir() {
        let paths = resolve_runtime_paths(
            Path::new("/home/tester"),
            Path::new("/work/support"),
            Some(Path::new("~/exports/tickets.csv")),
            None,
        )
        .expect("tilde override should resolve");

        assert_eq!(
            paths.dataset_path,
            Path::new("/home/tester/exports/tickets.csv")
        );
    }

    #[test]
    fn rejects_non_absolute_cwd() {
        let err = resolve_runtime_paths(
            Path::new("/home/tester"),
            Path::new("work/support"),
            None,
            None,
        )
        .expect_err("relative cwd must fail");

        assert!(
            err.to_string().contains("cwd must be absolute"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn rejects_tilde_username_syntax() {
        let err = resolve_runtime_paths(
            Path::new("/home/tester"),
            Path::new("/work/support"),
            Some(Path::new("~someone/tickets.csv")),
            None,
        )
        .expect_err("~username syntax must fail");

        assert!(
            err.to_string()
                .contains("unsupported home expansion syntax"),
            "unexpected error: {err}"
        );
    }
}
