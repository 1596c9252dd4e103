use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::social::application::domain::entities::{PublicProfile, UserProfile};

/// Profile JSON shared by `/api/users/me` and `/api/users/{id}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: Uuid,

    #[schema(example = "Ann")]
    pub name: String,

    #[schema(example = "a@x.com")]
    pub email: String,

    pub followers: Vec<Uuid>,

    pub following: Vec<Uuid>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

fn ids<I: Into<Uuid>>(ids: Vec<I>) -> Vec<Uuid> {
    ids.into_iter().map(Into::into).collect()
}

impl From<PublicProfile> for ProfileResponse {
    fn from(p: PublicProfile) -> Self {
        Self {
            id: p.id.into(),
            name: p.name,
            email: p.email,
            followers: ids(p.followers),
            following: ids(p.following),
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

// The owner's view drops the hash the same way the public one does.
impl From<UserProfile> for ProfileResponse {
    fn from(p: UserProfile) -> Self {
        PublicProfile::from(p).into()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FollowResponse {
    #[schema(example = "User followed")]
    pub message: String,
}
