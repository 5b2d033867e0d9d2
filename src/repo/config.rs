use camino::Utf8Path;
use ini::{Ini, ParseOption, Properties};

use crate::error::RepoError;

/// The only repository format this crate reads and writes.
pub const FORMAT_VERSION: u32 = 0;

/// The parts of `.git/config` this crate looks at. Other sections and keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub core: CoreConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub repositoryformatversion: u32,
    pub filemode: bool,
    pub bare: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            core: CoreConfig {
                repositoryformatversion: FORMAT_VERSION,
                filemode: false,
                bare: false,
            },
        }
    }
}

impl Config {
    pub fn load(path: &Utf8Path) -> Result<Self, RepoError> {
        if !path.is_file() {
            return Err(RepoError::MissingConfig(path.to_owned()));
        }
        let contents = std::fs::read_to_string(path)?;
        Self::parse(path, &contents)
    }

    fn parse(path: &Utf8Path, contents: &str) -> Result<Self, RepoError> {
        // Backslashes in git values (e.g. Windows paths) are kept as written.
        let opt = ParseOption {
            enabled_escape: false,
            ..ParseOption::default()
        };
        let ini = Ini::load_from_str_opt(contents, opt).map_err(|source| {
            RepoError::InvalidConfig {
                path: path.to_owned(),
                source,
            }
        })?;

        let core = ini
            .section(Some("core"))
            .ok_or_else(|| RepoError::MissingConfigValue {
                path: path.to_owned(),
                key: "core.repositoryformatversion",
            })?;

        let repositoryformatversion = match core.get("repositoryformatversion") {
            Some(v) => v.parse().map_err(|_| RepoError::BadConfigValue {
                path: path.to_owned(),
                key: "core.repositoryformatversion",
                value: v.to_owned(),
            })?,
            None => {
                return Err(RepoError::MissingConfigValue {
                    path: path.to_owned(),
                    key: "core.repositoryformatversion",
                })
            }
        };

        Ok(Self {
            core: CoreConfig {
                repositoryformatversion,
                filemode: get_bool(path, core, "filemode")?,
                bare: get_bool(path, core, "bare")?,
            },
        })
    }

    /// Render the config in git's own format.
    pub fn to_ini(&self) -> Ini {
        let mut ini = Ini::new();
        ini.with_section(Some("core"))
            .set(
                "repositoryformatversion",
                self.core.repositoryformatversion.to_string(),
            )
            .set("filemode", self.core.filemode.to_string())
            .set("bare", self.core.bare.to_string());
        ini
    }

    pub fn write(&self, path: &Utf8Path) -> Result<(), RepoError> {
        let mut buf = Vec::new();
        self.to_ini().write_to(&mut buf)?;
        std::fs::write(path, buf)?;
        Ok(())
    }

    /// Check the repository format is one this crate understands.
    pub fn validate(&self) -> Result<(), RepoError> {
        match self.core.repositoryformatversion {
            FORMAT_VERSION => Ok(()),
            other => Err(RepoError::UnsupportedFormatVersion(other)),
        }
    }
}

/// A `core` boolean, spelled any of the ways git accepts. Absent means `false`.
fn get_bool(path: &Utf8Path, core: &Properties, key: &'static str) -> Result<bool, RepoError> {
    let Some(value) = core.get(key) else {
        return Ok(false);
    };
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" | "" => Ok(false),
        _ => Err(RepoError::BadConfigValue {
            path: path.to_owned(),
            key,
            value: value.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(text: &str) -> Result<Config, RepoError> {
        Config::parse(Utf8Path::new("config"), text)
    }

    #[test]
    fn default_round_trips() {
        let config = Config::default();
        let mut buf = Vec::new();
        config.to_ini().write_to(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("[core]"));
        assert!(text.contains("repositoryformatversion=0"));
        assert_eq!(parse(&text).unwrap(), config);
    }

    #[test]
    fn git_written_config() {
        // As written by `git init`.
        let text = "[core]\n\
                    \trepositoryformatversion = 0\n\
                    \tfilemode = true\n\
                    \tbare = false\n\
                    \tlogallrefupdates = true\n";
        let config = parse(text).unwrap();
        assert!(config.core.filemode);
        assert!(!config.core.bare);
        config.validate().unwrap();
    }

    #[test]
    fn cloned_repo_config() {
        // `.git/config` of a fresh `git clone`, with subsection headers and URLs.
        let text = "[core]\n\
                    \trepositoryformatversion = 0\n\
                    \tfilemode = true\n\
                    \tbare = false\n\
                    \tlogallrefupdates = true\n\
                    [remote \"origin\"]\n\
                    \turl = https://github.com/Sciencentistguy/rit.git\n\
                    \tfetch = +refs/heads/*:refs/remotes/origin/*\n\
                    [branch \"master\"]\n\
                    \tremote = origin\n\
                    \tmerge = refs/heads/master\n";
        let config = parse(text).unwrap();
        assert_eq!(config.core.repositoryformatversion, 0);
        assert!(config.core.filemode);
        config.validate().unwrap();
    }

    #[test]
    fn comments_and_yes_no_booleans() {
        let text = "# written by hand\n\
                    [core]\n\
                    ; version first\n\
                    \trepositoryformatversion = 0\n\
                    \tbare = yes\n\
                    \tfilemode = off\n";
        let config = parse(text).unwrap();
        assert!(config.core.bare);
        assert!(!config.core.filemode);
    }

    #[test]
    fn rejects_other_versions() {
        let config = parse("[core]\nrepositoryformatversion = 1\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(RepoError::UnsupportedFormatVersion(1))
        ));
    }

    #[test]
    fn rejects_missing_version() {
        assert!(matches!(
            parse("[core]\nbare = false\n"),
            Err(RepoError::MissingConfigValue { .. })
        ));
        assert!(matches!(
            parse("[user]\nname = someone\n"),
            Err(RepoError::MissingConfigValue { .. })
        ));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            parse("[core]\nrepositoryformatversion = zero\n"),
            Err(RepoError::BadConfigValue { .. })
        ));
        assert!(matches!(
            parse("[core]\nrepositoryformatversion = 0\nbare = maybe\n"),
            Err(RepoError::BadConfigValue { key: "bare", .. })
        ));
    }

    #[test]
    fn rejects_unterminated_section() {
        assert!(matches!(
            parse("[core\nrepositoryformatversion = 0\n"),
            Err(RepoError::InvalidConfig { .. })
        ));
    }
}
