use crate::common::{Story, User};
use crate::feed::Feed;

/// UI-local state. The feed snapshot is read-only input for the rail;
/// `composer` and `viewing` belong to host flows the rail knows nothing
/// about.
pub struct AppState {
    pub current_user: User,
    pub users: Vec<User>,
    pub stories: Vec<Story>,
    pub composer: Option<String>,
    pub viewing: Option<User>,
}

impl AppState {
    pub fn new(feed: Feed) -> Self {
        Self {
            current_user: feed.current_user,
            users: feed.users,
            stories: feed.stories,
            composer: None,
            viewing: None,
        }
    }

    /// Appends a story authored by the current user. Stand-in for the
    /// real story-creation flow.
    pub fn add_story(&mut self, content: String) {
        self.stories.push(Story {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: self.current_user.id.clone(),
            content,
            timestamp: chrono::Utc::now().timestamp(),
        });
    }

    pub fn stories_by<'a>(&'a self, user_id: &'a str) -> impl Iterator<Item = &'a Story> {
        self.stories
            .iter()
            .filter(move |story| story.user_id == user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::stories_bar::has_current_user_story;

    fn empty_feed() -> Feed {
        let current_user = User {
            id: "u0".to_string(),
            display_name: "Sam Rivers".to_string(),
            first_name: "Sam".to_string(),
            avatar: "avatars/sam.png".to_string(),
            is_online: true,
        };
        Feed {
            users: vec![current_user.clone()],
            current_user,
            stories: Vec::new(),
        }
    }

    #[test]
    fn add_story_is_authored_by_current_user() {
        let mut state = AppState::new(empty_feed());
        assert!(!has_current_user_story(&state.stories, &state.current_user));

        state.add_story("first!".to_string());

        assert_eq!(state.stories.len(), 1);
        assert_eq!(state.stories[0].user_id, state.current_user.id);
        assert!(has_current_user_story(&state.stories, &state.current_user));
    }

    #[test]
    fn stories_by_filters_on_owner() {
        let mut state = AppState::new(empty_feed());
        state.add_story("one".to_string());
        state.add_story("two".to_string());

        assert_eq!(state.stories_by("u0").count(), 2);
        assert_eq!(state.stories_by("u1").count(), 0);
    }
}
