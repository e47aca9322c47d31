//! Screen state that outlives a single screen.
//!
//! Both values are provided as `Signal<_>` via context by the app root:
//! - [`SiteSelection`] holds the sites picked on the BowFactory tab. It survives
//!   round-trips to the picker screen and is never persisted.
//! - [`PostFeed`] holds the last fetched post list, so the detail screen can show a
//!   post without fetching again.

use dioxus::prelude::*;
use store::{BoardType, Post};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SiteSelection {
    pub sites: Vec<String>,
    /// Site whose weather the Home tab shows.
    pub active: Option<String>,
}

impl SiteSelection {
    /// Add `name` to the selection and make it the active site.
    /// Re-selecting a site moves it to the end instead of listing it twice.
    pub fn select(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        self.sites.retain(|s| s != name);
        self.sites.push(name.to_string());
        self.active = Some(name.to_string());
    }

    pub fn remove(&mut self, name: &str) {
        self.sites.retain(|s| s != name);
        if self.active.as_deref() == Some(name) {
            self.active = self.sites.last().cloned();
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PostFeed {
    pub posts: Vec<Post>,
}

impl PostFeed {
    pub fn get(&self, index: usize) -> Option<&Post> {
        self.posts.get(index)
    }

    /// Posts on `board` (or every post for `None`), paired with their feed index.
    pub fn filtered(&self, board: Option<&BoardType>) -> Vec<(usize, &Post)> {
        self.posts
            .iter()
            .enumerate()
            .filter(|(_, post)| board.map_or(true, |b| &post.board_type == b))
            .collect()
    }
}

pub fn use_site_selection() -> Signal<SiteSelection> {
    use_context::<Signal<SiteSelection>>()
}

pub fn use_post_feed() -> Signal<PostFeed> {
    use_context::<Signal<PostFeed>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(board: BoardType, title: &str) -> Post {
        Post {
            board_type: board,
            title: title.to_string(),
            location: None,
            content: String::new(),
            images: Vec::new(),
        }
    }

    #[test]
    fn test_selection_accumulates_and_tracks_active() {
        let mut selection = SiteSelection::default();
        selection.select("각산이륙장");
        selection.select("문경활공랜드");
        assert_eq!(selection.sites, ["각산이륙장", "문경활공랜드"]);
        assert_eq!(selection.active.as_deref(), Some("문경활공랜드"));

        selection.select("각산이륙장");
        assert_eq!(selection.sites, ["문경활공랜드", "각산이륙장"]);

        selection.select("  ");
        assert_eq!(selection.sites.len(), 2);
    }

    #[test]
    fn test_removing_active_site_falls_back_to_last() {
        let mut selection = SiteSelection::default();
        selection.select("a");
        selection.select("b");
        selection.remove("b");
        assert_eq!(selection.active.as_deref(), Some("a"));
        selection.remove("a");
        assert!(selection.active.is_none());
    }

    #[test]
    fn test_feed_filter_keeps_indices() {
        let feed = PostFeed {
            posts: vec![
                post(BoardType::Free, "자유1"),
                post(BoardType::Meetup, "모임1"),
                post(BoardType::Free, "자유2"),
            ],
        };
        let free: Vec<usize> = feed
            .filtered(Some(&BoardType::Free))
            .into_iter()
            .map(|(i, _)| i)
            .collect();
        assert_eq!(free, [0, 2]);
        assert_eq!(feed.filtered(None).len(), 3);
        assert_eq!(feed.get(1).unwrap().title, "모임1");
        assert!(feed.get(3).is_none());
    }
}
