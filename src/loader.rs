use anyhow::{Context, Result, bail};

use crate::listfile;

pub const TITLES_PATH: &str = "data/titles.yaml";
pub const CHANNELS_PATH: &str = "data/channels.yaml";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListKind {
    Titles,
    Channels,
}

impl ListKind {
    pub fn path(self) -> &'static str {
        match self {
            ListKind::Titles => TITLES_PATH,
            ListKind::Channels => CHANNELS_PATH,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ListKind::Titles => "titles",
            ListKind::Channels => "channel names",
        }
    }
}

/// Result of one background list load, sent back to the UI thread.
pub struct ListMessage {
    pub kind: ListKind,
    pub result: Result<Vec<String>>,
}

/// Fetches and parses one list resource. `http(s)://` paths go over the
/// network; anything else is read from disk. An empty parse is an error so
/// the caller falls back to its built-in default.
pub async fn load(path: &str) -> Result<Vec<String>> {
    let body = if path.starts_with("http://") || path.starts_with("https://") {
        reqwest::Client::new()
            .get(path)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?
    } else {
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading {path}"))?
    };

    let entries = listfile::parse_list(&body);
    if entries.is_empty() {
        bail!("no list items in {path}");
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn loads_entries_from_a_list_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "- \"Eerste\"\n- Tweede\n\nstray text").expect("write");
        let path = file.path().to_string_lossy().into_owned();

        let entries = load(&path).await.expect("load");
        assert_eq!(entries, vec!["Eerste", "Tweede"]);
    }

    #[tokio::test]
    async fn missing_resource_is_an_error() {
        assert!(load("data/does-not-exist.yaml").await.is_err());
    }

    #[tokio::test]
    async fn file_with_no_items_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "just prose, no list items").expect("write");
        let path = file.path().to_string_lossy().into_owned();

        assert!(load(&path).await.is_err());
    }
}
