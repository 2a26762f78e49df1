//! Depth-first exploration of the related-artist graph.
//!
//! Every visited artist is scored by the number of live albums the collector finds
//! for it. The walk is bounded by a hop budget and never visits an artist twice,
//! so cycles in the graph are harmless. Total visits still grow with the branching
//! factor raised to the hop count.

use crate::api_client::{ApiError, Artist, CatalogApi};
use crate::process::collect_live_albums;
use indicatif::ProgressBar;
use log::debug;
use std::collections::{BinaryHeap, HashSet};
use std::fmt;
use std::time::{Duration, Instant};

/// Live album count of one artist. Orders by count, then id, then name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ArtistScore {
    pub live_albums: usize,
    pub artist_id: String,
    pub artist_name: String,
}

impl fmt::Display for ArtistScore {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:<3}- {:30} - {}",
            self.live_albums, self.artist_name, self.artist_id
        )
    }
}

/// State owned by a single exploration run.
#[derive(Debug, Default)]
pub struct ExplorationState {
    pub visited: HashSet<String>,
    pub ranking: BinaryHeap<ArtistScore>,
}

impl ExplorationState {
    /// Marks an artist as visited; false if it already was.
    fn visit(&mut self, artist_id: &str) -> bool {
        self.visited.insert(artist_id.to_string())
    }
}

#[derive(Debug)]
pub struct ExplorationReport {
    pub seed_name: String,
    pub recursion_limit: u32,
    pub visited: usize,
    /// Highest scores first.
    pub top: Vec<ArtistScore>,
    pub elapsed: Duration,
}

struct PendingVisit {
    artist_id: String,
    artist_name: String,
    remaining_hops: u32,
}

pub struct ArtistGraphExplorer<'a> {
    api: &'a dyn CatalogApi,
    include_no_date: bool,
    progress: ProgressBar,
}

impl<'a> ArtistGraphExplorer<'a> {
    pub fn new(api: &'a dyn CatalogApi, include_no_date: bool) -> Self {
        Self {
            api,
            include_no_date,
            progress: ProgressBar::hidden(),
        }
    }

    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Explores outwards from the seed and returns the `top` best scoring artists.
    pub async fn explore(
        &self,
        seed: &Artist,
        recursion_limit: u32,
        top: usize,
    ) -> Result<ExplorationReport, ApiError> {
        let start = Instant::now();
        let mut state = ExplorationState::default();
        self.walk(seed, recursion_limit, &mut state).await?;
        let elapsed = start.elapsed();

        let visited = state.visited.len();
        let mut ranking = state.ranking;
        let top = std::iter::from_fn(|| ranking.pop()).take(top).collect();

        Ok(ExplorationReport {
            seed_name: seed.name.clone(),
            recursion_limit,
            visited,
            top,
            elapsed,
        })
    }

    /// Walks the graph with an explicit stack, reproducing recursive preorder:
    /// related artists are pushed in reverse so the first one is explored first,
    /// and the visited check happens when an artist is popped.
    pub async fn walk(
        &self,
        seed: &Artist,
        recursion_limit: u32,
        state: &mut ExplorationState,
    ) -> Result<(), ApiError> {
        let mut stack = vec![PendingVisit {
            artist_id: seed.id.clone(),
            artist_name: seed.name.clone(),
            remaining_hops: recursion_limit,
        }];

        while let Some(pending) = stack.pop() {
            if !state.visit(&pending.artist_id) {
                continue;
            }
            debug!(
                "Exploring {} with {} hops remaining",
                pending.artist_name, pending.remaining_hops
            );
            self.progress.set_message(pending.artist_name.clone());

            let live_albums =
                collect_live_albums(self.api, &pending.artist_id, self.include_no_date).await?;
            self.progress.inc(1);
            state.ranking.push(ArtistScore {
                live_albums: live_albums.len(),
                artist_id: pending.artist_id.clone(),
                artist_name: pending.artist_name,
            });

            if pending.remaining_hops == 0 {
                continue;
            }

            let related = self.api.get_related_artists(&pending.artist_id).await?;
            for artist in related.into_iter().rev() {
                if !state.visited.contains(&artist.id) {
                    stack.push(PendingVisit {
                        artist_id: artist.id,
                        artist_name: artist.name,
                        remaining_hops: pending.remaining_hops - 1,
                    });
                }
            }
        }

        Ok(())
    }
}
