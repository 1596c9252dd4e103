mod get_own_profile_service;
mod get_profile_service;
mod toggle_follow_service;

pub use get_own_profile_service::GetOwnProfileService;
pub use get_profile_service::GetProfileService;
pub use toggle_follow_service::ToggleFollowService;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::modules::social::application::domain::entities::UserProfile;
use crate::modules::social::application::ports::outgoing::FollowGraph;

/// Reads a user and both sides of its follow relation. `Ok(None)` when the
/// user does not exist. A toggle only touches edges, so the user row and the
/// edge snapshot never disagree.
pub(crate) async fn load_profile<Q, G>(
    query: &Q,
    graph: &G,
    user_id: UserId,
) -> Result<Option<UserProfile>, String>
where
    Q: UserQuery + ?Sized,
    G: FollowGraph + ?Sized,
{
    let user = match query.find_by_id(user_id).await.map_err(|e| e.to_string())? {
        Some(user) => user,
        None => return Ok(None),
    };

    let lists = graph
        .relations_of(user_id)
        .await
        .map_err(|e| e.to_string())?;

    Ok(Some(UserProfile {
        user,
        followers: lists.followers,
        following: lists.following,
    }))
}
