use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create user_follows edge table
        // One row = follower_id follows followee_id. The row is both
        // the follower's "following" entry and the followee's "followers" entry.
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(UserFollows::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UserFollows::FollowerId).uuid().not_null())
                    .col(ColumnDef::new(UserFollows::FolloweeId).uuid().not_null())
                    .col(
                        ColumnDef::new(UserFollows::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // Composite primary key
                    .primary_key(
                        Index::create()
                            .col(UserFollows::FollowerId)
                            .col(UserFollows::FolloweeId),
                    )
                    // FK → users (follower)
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_follows_follower_id")
                            .from(UserFollows::Table, UserFollows::FollowerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    // FK → users (followee)
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_follows_followee_id")
                            .from(UserFollows::Table, UserFollows::FolloweeId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A user never follows itself
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE user_follows
                ADD CONSTRAINT chk_user_follows_not_self
                CHECK (follower_id <> followee_id);
                "#,
            )
            .await?;

        // Fast lookup: all followers of a user
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_user_follows_followee_id
                ON user_follows (followee_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_user_follows_followee_id")
            .await?;

        manager
            .drop_table(Table::drop().table(UserFollows::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserFollows {
    Table,
    FollowerId,
    FolloweeId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
