//! Link extraction from the fully expanded page.

use serde::Deserialize;

/// Raw attribute pair read off one item element, before any validation.
#[derive(Debug, Clone, Default)]
pub struct RawItem {
    /// Value of the link attribute, if the element carried one.
    pub link: Option<String>,
    /// Value of the JSON-encoded metadata attribute, if present.
    pub metadata: Option<String>,
}

/// One downloadable episode: a URL plus the title pulled from its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    /// Download URL for the audio file.
    pub url: String,
    /// Episode title, absent when the metadata payload lacked one.
    pub title: Option<String>,
}

/// Schema of the metadata attribute payload. Only the title is of interest;
/// everything else in the payload is ignored.
#[derive(Debug, Deserialize)]
struct ItemMetadata {
    title: Option<String>,
}

/// Pulls the title out of a metadata payload.
///
/// An absent or unparseable payload yields `None`, never an error. Empty
/// titles are treated as absent.
fn title_from_metadata(metadata: Option<&str>) -> Option<String> {
    let payload = metadata?;
    let parsed: ItemMetadata = serde_json::from_str(payload).ok()?;
    parsed.title.filter(|t| !t.trim().is_empty())
}

/// Converts raw attribute pairs into episodes, keeping only entries where
/// both the link and the title are present and non-empty.
///
/// Output order matches input (DOM) order. No deduplication happens here;
/// the destination-folder check later keys on the sanitized filename.
#[must_use]
pub fn collect_episodes(raw: Vec<RawItem>) -> Vec<Episode> {
    raw.into_iter()
        .filter_map(|item| {
            let url = item.link.filter(|l| !l.is_empty())?;
            let title = title_from_metadata(item.metadata.as_deref())?;
            Some(Episode {
                url,
                title: Some(title),
            })
        })
        .collect()
}
