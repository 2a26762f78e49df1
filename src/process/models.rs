use crate::api_client::Album;
use crate::process::DateKey;

/// Where an entry's date key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSource {
    /// Read from the album title.
    Title,
    /// Derived from the album's release date, padded with sentinel nines.
    ReleaseDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiveEntry {
    pub key: DateKey,
    pub album: Album,
    pub source: DateSource,
}

/// Live albums of one artist, drained in ascending key order.
///
/// Entries with equal keys keep the order they were pushed in.
#[derive(Debug, Default)]
pub struct LiveAlbums {
    entries: Vec<LiveEntry>,
}

impl LiveAlbums {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: LiveEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_sorted(mut self) -> Vec<LiveEntry> {
        self.entries.sort_by(|a, b| a.key.cmp(&b.key));
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_client::ExternalUrls;

    fn entry(key: &str, name: &str) -> LiveEntry {
        LiveEntry {
            key: DateKey::new(key),
            album: Album {
                id: name.to_lowercase(),
                name: name.to_string(),
                external_urls: ExternalUrls::default(),
                images: Vec::new(),
                release_date: None,
            },
            source: DateSource::Title,
        }
    }

    #[test]
    fn test_into_sorted_orders_by_key() {
        let mut live = LiveAlbums::new();
        live.push(entry("19770508", "Cornell"));
        live.push(entry("19700502", "Fillmore"));
        live.push(entry("19781231", "Winterland"));
        assert_eq!(live.len(), 3);

        let names: Vec<_> = live
            .into_sorted()
            .into_iter()
            .map(|e| e.album.name)
            .collect();
        assert_eq!(names, vec!["Fillmore", "Cornell", "Winterland"]);
    }

    #[test]
    fn test_equal_keys_keep_insertion_order() {
        let mut live = LiveAlbums::new();
        live.push(entry("19720507", "Night One"));
        live.push(entry("19700101", "Earlier"));
        live.push(entry("19720507", "Night One Encore"));

        let names: Vec<_> = live
            .into_sorted()
            .into_iter()
            .map(|e| e.album.name)
            .collect();
        assert_eq!(names, vec!["Earlier", "Night One", "Night One Encore"]);
    }

    #[test]
    fn test_empty_collection() {
        let live = LiveAlbums::new();
        assert!(live.is_empty());
        assert!(live.into_sorted().is_empty());
    }
}
