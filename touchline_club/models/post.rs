use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use touchline_types::{errors::ClubError, posts::PostCategory};

use super::non_blank;

/// A news item, either club-wide (`team_id` is `None`) or for one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub club_id: Uuid,
    pub team_id: Option<Uuid>,
    pub author_id: Uuid,
    pub title: Option<String>,
    pub content: String,
    pub category: PostCategory,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct PostContent {
    pub title: Option<String>,
    pub content: String,
    pub category: PostCategory,
}

impl Post {
    pub fn new(
        id: Uuid,
        club_id: Uuid,
        team_id: Option<Uuid>,
        author_id: Uuid,
        content: PostContent,
    ) -> Result<Self, ClubError> {
        let mut post = Self {
            id,
            club_id,
            team_id,
            author_id,
            title: None,
            content: String::new(),
            category: content.category,
            created_at: Utc::now(),
        };
        post.edit(author_id, content)?;
        Ok(post)
    }

    pub fn edit(&mut self, editor_id: Uuid, content: PostContent) -> Result<(), ClubError> {
        self.ensure_author(editor_id)?;
        if content.content.trim().is_empty() {
            return Err(ClubError::MissingField("post content"));
        }

        self.title = non_blank(content.title);
        self.content = content.content;
        self.category = content.category;
        Ok(())
    }

    pub fn ensure_author(&self, user_id: Uuid) -> Result<(), ClubError> {
        if self.author_id == user_id {
            Ok(())
        } else {
            Err(ClubError::NotPostAuthor(self.id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(text: &str) -> PostContent {
        PostContent {
            title: Some(" ".to_string()),
            content: text.to_string(),
            category: PostCategory::MatchResult,
        }
    }

    #[test]
    fn test_post_requires_content() {
        let result = Post::new(Uuid::new_v4(), Uuid::new_v4(), None, Uuid::new_v4(), content(" "));
        assert!(matches!(result, Err(ClubError::MissingField("post content"))));
    }

    #[test]
    fn test_only_author_can_edit() {
        let author = Uuid::new_v4();
        let mut post =
            Post::new(Uuid::new_v4(), Uuid::new_v4(), None, author, content("Won 24-10")).unwrap();
        assert_eq!(post.title, None);

        let result = post.edit(Uuid::new_v4(), content("Lost"));
        assert!(matches!(result, Err(ClubError::NotPostAuthor(_))));
        assert_eq!(post.content, "Won 24-10");

        post.edit(author, content("Won 24-12")).unwrap();
        assert_eq!(post.content, "Won 24-12");
    }
}
