use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn flipped(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

/// Durable state. The theme is the only thing that survives a restart;
/// `None` means the visitor never chose one.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Prefs {
    pub theme: Option<ThemeMode>,
}

/// Saved choice wins, then the OS preference, then light.
pub fn initial_theme(saved: Option<ThemeMode>, system_dark: Option<bool>) -> ThemeMode {
    saved.unwrap_or_else(|| {
        if system_dark.unwrap_or(false) {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    })
}

pub fn load_or_default() -> Prefs {
    load_from(&prefs_path())
}

pub fn save(p: &Prefs) -> std::io::Result<()> {
    save_to(&prefs_path(), p)
}

fn load_from(path: &Path) -> Prefs {
    if let Ok(bytes) = fs::read(path) {
        serde_json::from_slice::<Prefs>(&bytes).unwrap_or_default()
    } else {
        Prefs::default()
    }
}

fn save_to(path: &Path, p: &Prefs) -> std::io::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, serde_json::to_vec_pretty(p)?)
}

fn prefs_path() -> PathBuf {
    let proj = ProjectDirs::from("com", "yourname", "MockTube").expect("no project dirs");
    proj.config_dir().join("prefs.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_choice_wins_over_system_preference() {
        assert_eq!(
            initial_theme(Some(ThemeMode::Light), Some(true)),
            ThemeMode::Light
        );
    }

    #[test]
    fn dark_system_preference_applies_without_a_saved_choice() {
        assert_eq!(initial_theme(None, Some(true)), ThemeMode::Dark);
        assert_eq!(initial_theme(None, Some(false)), ThemeMode::Light);
        assert_eq!(initial_theme(None, None), ThemeMode::Light);
    }

    #[test]
    fn toggling_twice_returns_to_the_original() {
        let mode = ThemeMode::Dark;
        assert_eq!(mode.flipped().flipped(), mode);
    }

    #[test]
    fn prefs_round_trip_through_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("prefs.json");
        let prefs = Prefs {
            theme: Some(ThemeMode::Dark),
        };
        save_to(&path, &prefs).expect("save");
        assert_eq!(load_from(&path), prefs);
    }

    #[test]
    fn unreadable_prefs_degrade_to_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("prefs.json");
        fs::write(&path, b"{ not json").expect("write");
        assert_eq!(load_from(&path), Prefs::default());
        assert_eq!(load_from(&dir.path().join("absent.json")), Prefs::default());
    }

    #[test]
    fn theme_serializes_lowercase() {
        let json = serde_json::to_string(&Prefs {
            theme: Some(ThemeMode::Dark),
        })
        .expect("serialize");
        assert_eq!(json, r#"{"theme":"dark"}"#);
    }
}
