use chrono::{DateTime, Utc};

use crate::auth::application::domain::entities::{User, UserId};

/// State of the edge after a relation update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowOutcome {
    Followed,
    Unfollowed,
}

impl FollowOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            FollowOutcome::Followed => "User followed",
            FollowOutcome::Unfollowed => "User Unfollowed",
        }
    }
}

/// Both sides of a user's follow relation, read from the same snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FollowLists {
    pub followers: Vec<UserId>,
    pub following: Vec<UserId>,
}

/// Full record of a user together with both sides of its follow relation.
/// Holds the password hash; only the owner's own requests see this type.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub user: User,
    pub followers: Vec<UserId>,
    pub following: Vec<UserId>,
}

/// Profile as shown to anyone. There is no password field to leak.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub followers: Vec<UserId>,
    pub following: Vec<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserProfile> for PublicProfile {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.user.id,
            name: profile.user.name,
            email: profile.user.email,
            followers: profile.followers,
            following: profile.following,
            created_at: profile.user.created_at,
            updated_at: profile.user.updated_at,
        }
    }
}
