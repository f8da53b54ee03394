use serde::{Deserialize, Deserializer, Serialize};

/// A saved link as returned by the remote store.
///
/// `title`, `description` and `image_url` are filled in server-side after the
/// record is created, so they may be missing or `null` on fresh records.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Bookmark {
    pub id: i64,
    pub url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Bookmark {
    /// Title for display; falls back to the url until metadata arrives
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            &self.url
        } else {
            &self.title
        }
    }
}

/// Create request body
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NewBookmark {
    pub url: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
