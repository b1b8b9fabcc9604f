use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::{Story, User};

pub const DEFAULT_FEED_PATH: &str = "config/feed.json";

/// Snapshot handed to the UI. The stores that own users and stories live
/// outside this process, so the app only ever reads a pre-filtered dump.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feed {
    pub current_user: User,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub stories: Vec<Story>,
}

pub fn load_feed(path: &str) -> Feed {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<Feed>(&content) {
            Ok(feed) => feed,
            Err(err) => {
                log::warn!("Failed to parse feed file {}: {err}", path.display());
                Feed::sample()
            }
        },
        Err(err) => {
            log::info!(
                "Feed file {} not found ({err}); using sample feed",
                path.display()
            );
            Feed::sample()
        }
    }
}

impl Feed {
    /// Built-in snapshot so the app runs without any feed file on disk.
    pub fn sample() -> Self {
        let current_user = User {
            id: "u0".to_string(),
            display_name: "Sam Rivers".to_string(),
            first_name: "Sam".to_string(),
            avatar: "avatars/sam.png".to_string(),
            is_online: true,
        };

        let users = vec![
            current_user.clone(),
            sample_user("u1", "Alice Nguyen", "Alice", true),
            sample_user("u2", "Bob Okafor", "Bob", false),
            sample_user("u3", "Chloe Martin", "Chloe", true),
            sample_user("u4", "Diego Fuentes", "Diego", true),
        ];

        let stories = vec![
            sample_story("s1", "u1", "Sunrise over the bridge", 1_756_480_000),
            sample_story("s2", "u3", "Back in the studio", 1_756_483_600),
            sample_story("s3", "u1", "Coffee round two", 1_756_487_200),
            sample_story("s4", "u2", "Weekend ride", 1_756_490_800),
            // u9 has no matching user; the rail skips this entry.
            sample_story("s5", "u9", "Orphaned story", 1_756_494_400),
        ];

        Self {
            current_user,
            users,
            stories,
        }
    }
}

fn sample_user(id: &str, display_name: &str, first_name: &str, is_online: bool) -> User {
    User {
        id: id.to_string(),
        display_name: display_name.to_string(),
        first_name: first_name.to_string(),
        avatar: format!("avatars/{id}.png"),
        is_online,
    }
}

fn sample_story(id: &str, user_id: &str, content: &str, timestamp: i64) -> Story {
    Story {
        id: id.to_string(),
        user_id: user_id.to_string(),
        content: content.to_string(),
        timestamp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_feed_file_falls_back_to_sample() {
        let feed = load_feed("definitely/not/here.json");
        assert_eq!(feed.current_user.id, Feed::sample().current_user.id);
        assert!(!feed.users.is_empty());
    }

    #[test]
    fn corrupt_feed_file_falls_back_to_sample() {
        let path = std::env::temp_dir().join(format!(
            "stories_rail_corrupt_feed_{}.json",
            uuid::Uuid::new_v4()
        ));
        fs::write(&path, "{ not json").unwrap();

        let feed = load_feed(path.to_str().unwrap());
        assert_eq!(feed.users.len(), Feed::sample().users.len());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn feed_snapshot_round_trips() {
        let feed = Feed::sample();
        let json = serde_json::to_string_pretty(&feed).unwrap();
        let parsed: Feed = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.current_user.id, feed.current_user.id);
        assert_eq!(parsed.users.len(), feed.users.len());
        assert_eq!(parsed.stories.len(), feed.stories.len());
    }
}
