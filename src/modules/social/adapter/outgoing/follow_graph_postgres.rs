use async_trait::async_trait;
use sea_orm::{
    AccessMode, ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr,
    EntityTrait, IsolationLevel, QueryFilter, QueryOrder, Statement, TransactionTrait,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::social::adapter::outgoing::sea_orm_entity::user_follows::{
    Column as FollowColumn, Entity as FollowEntity, Model as FollowModel,
};
use crate::modules::social::application::domain::entities::{FollowLists, FollowOutcome};
use crate::modules::social::application::ports::outgoing::{FollowGraph, FollowGraphError};

#[derive(Clone)]
pub struct FollowGraphPostgres {
    db: Arc<DatabaseConnection>,
}

impl FollowGraphPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // =====================================================
    // SQL builders
    // =====================================================

    /// Guarded, idempotent insert:
    /// - both users must exist
    /// - follower and followee must differ
    /// - on conflict (follower_id, followee_id) do nothing
    fn guarded_insert_stmt(follower: Uuid, followee: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            INSERT INTO user_follows (follower_id, followee_id)
            SELECT f.id, t.id
            FROM users f
            JOIN users t
              ON t.id = $2
            WHERE f.id = $1
              AND f.id <> t.id
            ON CONFLICT (follower_id, followee_id) DO NOTHING
            "#,
            vec![follower.into(), followee.into()],
        )
    }

    fn delete_stmt(follower: Uuid, followee: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            DELETE FROM user_follows
            WHERE follower_id = $1
              AND followee_id = $2
            "#,
            vec![follower.into(), followee.into()],
        )
    }

    /// Probe used when the guarded insert touched no row:
    /// - follower_ok: follower exists
    /// - followee_ok: followee exists
    /// - link_exists: edge is already there
    fn probe_stmt(follower: Uuid, followee: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
              EXISTS (SELECT 1 FROM users WHERE id = $1) AS follower_ok,
              EXISTS (SELECT 1 FROM users WHERE id = $2) AS followee_ok,
              EXISTS (
                SELECT 1
                FROM user_follows uf
                WHERE uf.follower_id = $1
                  AND uf.followee_id = $2
              ) AS link_exists
            "#,
            vec![follower.into(), followee.into()],
        )
    }

    fn map_db_err(e: DbErr) -> FollowGraphError {
        FollowGraphError::DatabaseError(e.to_string())
    }

    /// Resolve why the guarded insert affected 0 rows.
    /// Priority: follower missing, followee missing, edge present, self edge.
    async fn resolve_insert_failure<C>(
        conn: &C,
        follower: Uuid,
        followee: Uuid,
    ) -> Result<FollowOutcome, FollowGraphError>
    where
        C: ConnectionTrait,
    {
        let row = conn
            .query_one(Self::probe_stmt(follower, followee))
            .await
            .map_err(Self::map_db_err)?
            .ok_or_else(|| {
                FollowGraphError::DatabaseError("Probe query returned no rows".to_string())
            })?;

        let follower_ok: bool = row.try_get("", "follower_ok").map_err(Self::map_db_err)?;
        let followee_ok: bool = row.try_get("", "followee_ok").map_err(Self::map_db_err)?;
        let link_exists: bool = row.try_get("", "link_exists").map_err(Self::map_db_err)?;

        if !follower_ok {
            return Err(FollowGraphError::FollowerNotFound);
        }
        if !followee_ok {
            return Err(FollowGraphError::FolloweeNotFound);
        }
        if link_exists {
            // a concurrent request created the edge first
            return Ok(FollowOutcome::Followed);
        }

        Err(FollowGraphError::SelfRelation)
    }

    /// Delete first: a removed row means the edge existed. Otherwise run the
    /// guarded insert and fall back to the probe when it touched nothing.
    async fn toggle<C>(
        conn: &C,
        follower: Uuid,
        followee: Uuid,
    ) -> Result<FollowOutcome, FollowGraphError>
    where
        C: ConnectionTrait,
    {
        let deleted = conn
            .execute(Self::delete_stmt(follower, followee))
            .await
            .map_err(Self::map_db_err)?;

        if deleted.rows_affected() == 1 {
            return Ok(FollowOutcome::Unfollowed);
        }

        let inserted = conn
            .execute(Self::guarded_insert_stmt(follower, followee))
            .await
            .map_err(Self::map_db_err)?;

        if inserted.rows_affected() == 1 {
            return Ok(FollowOutcome::Followed);
        }

        Self::resolve_insert_failure(conn, follower, followee).await
    }

    async fn edge_ids<C>(
        conn: &C,
        filter: FollowColumn,
        user: Uuid,
        pick: fn(FollowModel) -> Uuid,
    ) -> Result<Vec<UserId>, FollowGraphError>
    where
        C: ConnectionTrait,
    {
        let edges = FollowEntity::find()
            .filter(filter.eq(user))
            .order_by_asc(FollowColumn::CreatedAt)
            .all(conn)
            .await
            .map_err(Self::map_db_err)?;

        Ok(edges.into_iter().map(|e| UserId::from(pick(e))).collect())
    }
}

#[async_trait]
impl FollowGraph for FollowGraphPostgres {
    async fn toggle_relation(
        &self,
        follower: UserId,
        followee: UserId,
    ) -> Result<FollowOutcome, FollowGraphError> {
        let follower_uuid: Uuid = follower.into();
        let followee_uuid: Uuid = followee.into();

        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        match Self::toggle(&txn, follower_uuid, followee_uuid).await {
            Ok(outcome) => {
                txn.commit().await.map_err(Self::map_db_err)?;
                debug!(
                    follower_id = %follower,
                    followee_id = %followee,
                    outcome = ?outcome,
                    "Follow edge toggled"
                );
                Ok(outcome)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }

    async fn relations_of(&self, user: UserId) -> Result<FollowLists, FollowGraphError> {
        let user_uuid: Uuid = user.into();

        // Repeatable read: both selects see the same snapshot
        let txn = self
            .db
            .begin_with_config(
                Some(IsolationLevel::RepeatableRead),
                Some(AccessMode::ReadOnly),
            )
            .await
            .map_err(Self::map_db_err)?;

        let lists = async {
            let followers =
                Self::edge_ids(&txn, FollowColumn::FolloweeId, user_uuid, |e| e.follower_id)
                    .await?;
            let following =
                Self::edge_ids(&txn, FollowColumn::FollowerId, user_uuid, |e| e.followee_id)
                    .await?;
            Ok::<_, FollowGraphError>(FollowLists {
                followers,
                following,
            })
        }
        .await;

        match lists {
            Ok(lists) => {
                txn.commit().await.map_err(Self::map_db_err)?;
                Ok(lists)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }
}
