//! Year-grouped view of an artist's live albums, independent of any output format.

use crate::process::{DateKey, DateSource, LiveAlbums, LiveEntry};

/// Cover art is shown at a quarter of its catalog size.
const COVER_SCALE: u32 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearBucket {
    pub year: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cover {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumRow {
    pub key: DateKey,
    pub title: String,
    pub link: String,
    pub cover: Option<Cover>,
}

impl From<&LiveEntry> for AlbumRow {
    fn from(entry: &LiveEntry) -> Self {
        let cover = entry.album.images.first().map(|image| Cover {
            url: image.url.clone(),
            width: image.width.unwrap_or(0) / COVER_SCALE,
            height: image.height.unwrap_or(0) / COVER_SCALE,
        });
        AlbumRow {
            key: entry.key.clone(),
            title: entry.album.name.clone(),
            link: entry.album.external_url().to_string(),
            cover,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearSection {
    pub year: String,
    pub albums: Vec<AlbumRow>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Chronology {
    pub sections: Vec<YearSection>,
    /// One bucket per section, in the same order.
    pub years: Vec<YearBucket>,
    /// Release-date keyed albums, filled only when they are listed separately.
    pub undated: Vec<AlbumRow>,
    /// True when the collection had no albums at all.
    pub empty: bool,
}

impl Chronology {
    /// Drains `live_albums` in key order and groups consecutive entries by year.
    ///
    /// A year of `9999` ends the listing: it and everything after it is dropped.
    /// With `separate_undated`, entries keyed on a release date are moved into
    /// [`Chronology::undated`] instead of being listed under their year.
    pub fn build(live_albums: LiveAlbums, separate_undated: bool) -> Self {
        let entries = live_albums.into_sorted();
        let mut chronology = Chronology {
            empty: entries.is_empty(),
            ..Default::default()
        };
        let mut current: Option<YearSection> = None;

        for entry in &entries {
            if separate_undated && entry.source == DateSource::ReleaseDate {
                chronology.undated.push(AlbumRow::from(entry));
                continue;
            }

            let year = entry.key.year();
            let same_year = current.as_ref().is_some_and(|s| s.year == year);
            if !same_year {
                if let Some(section) = current.take() {
                    chronology.push_section(section);
                }
                if entry.key.is_sentinel_year() {
                    break;
                }
                current = Some(YearSection {
                    year: year.to_string(),
                    albums: Vec::new(),
                });
            }
            if let Some(section) = current.as_mut() {
                section.albums.push(AlbumRow::from(entry));
            }
        }
        if let Some(section) = current.take() {
            chronology.push_section(section);
        }

        chronology
    }

    fn push_section(&mut self, section: YearSection) {
        self.years.push(YearBucket {
            year: section.year.clone(),
            count: section.albums.len(),
        });
        self.sections.push(section);
    }

    /// Rows in listing order, undated section last.
    pub fn rows(&self) -> impl Iterator<Item = &AlbumRow> {
        self.sections
            .iter()
            .flat_map(|s| s.albums.iter())
            .chain(self.undated.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_client::{Album, ExternalUrls, Image};

    fn entry(key: &str, name: &str, source: DateSource) -> LiveEntry {
        LiveEntry {
            key: DateKey::new(key),
            album: Album {
                id: name.to_lowercase(),
                name: name.to_string(),
                external_urls: ExternalUrls {
                    spotify: Some(format!("https://open.spotify.com/album/{}", name)),
                },
                images: vec![Image {
                    url: format!("https://i.scdn.co/image/{}", name),
                    width: Some(640),
                    height: Some(638),
                }],
                release_date: None,
            },
            source,
        }
    }

    fn live(entries: Vec<LiveEntry>) -> LiveAlbums {
        let mut live = LiveAlbums::new();
        for e in entries {
            live.push(e);
        }
        live
    }

    #[test]
    fn test_groups_by_year_in_order() {
        let chronology = Chronology::build(
            live(vec![
                entry("19770508", "Cornell", DateSource::Title),
                entry("19700502", "Fillmore", DateSource::Title),
                entry("19770507", "Boston", DateSource::Title),
                entry("19781231", "Winterland", DateSource::Title),
            ]),
            false,
        );

        assert!(!chronology.empty);
        assert_eq!(
            chronology.years,
            vec![
                YearBucket { year: "1970".to_string(), count: 1 },
                YearBucket { year: "1977".to_string(), count: 2 },
                YearBucket { year: "1978".to_string(), count: 1 },
            ]
        );
        let keys: Vec<_> = chronology.rows().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["19700502", "19770507", "19770508", "19781231"]);
    }

    #[test]
    fn test_sentinel_year_stops_listing() {
        let chronology = Chronology::build(
            live(vec![
                entry("99990101", "Placeholder", DateSource::ReleaseDate),
                entry("19720507", "Bickershaw", DateSource::Title),
                entry("99999999", "Another", DateSource::ReleaseDate),
            ]),
            false,
        );

        assert_eq!(chronology.years.len(), 1);
        assert_eq!(chronology.years[0].year, "1972");
        assert_eq!(chronology.rows().count(), 1);
        assert!(!chronology.empty);
    }

    #[test]
    fn test_release_date_entries_sort_last_in_their_year() {
        let chronology = Chronology::build(
            live(vec![
                entry("19779999", "Live at the Palladium", DateSource::ReleaseDate),
                entry("19770508", "Cornell", DateSource::Title),
            ]),
            false,
        );

        assert_eq!(chronology.years.len(), 1);
        assert_eq!(chronology.years[0].count, 2);
        let titles: Vec<_> = chronology.rows().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Cornell", "Live at the Palladium"]);
    }

    #[test]
    fn test_separate_undated_section() {
        let chronology = Chronology::build(
            live(vec![
                entry("19779999", "Live at the Palladium", DateSource::ReleaseDate),
                entry("19770508", "Cornell", DateSource::Title),
                entry("19810599", "Live From Radio City", DateSource::ReleaseDate),
            ]),
            true,
        );

        assert_eq!(chronology.years.len(), 1);
        assert_eq!(chronology.years[0].count, 1);
        let undated: Vec<_> = chronology.undated.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(undated, vec!["Live at the Palladium", "Live From Radio City"]);
    }

    #[test]
    fn test_empty_collection() {
        let chronology = Chronology::build(LiveAlbums::new(), false);
        assert!(chronology.empty);
        assert!(chronology.years.is_empty());
        assert!(chronology.sections.is_empty());
    }

    #[test]
    fn test_cover_is_scaled_down() {
        let row = AlbumRow::from(&entry("19700502", "Fillmore", DateSource::Title));
        let cover = row.cover.unwrap();
        assert_eq!(cover.width, 160);
        assert_eq!(cover.height, 159);
        assert_eq!(row.link, "https://open.spotify.com/album/Fillmore");
    }

    #[test]
    fn test_album_without_images_has_no_cover() {
        let mut e = entry("19700502", "Fillmore", DateSource::Title);
        e.album.images.clear();
        assert!(AlbumRow::from(&e).cover.is_none());
    }
}
