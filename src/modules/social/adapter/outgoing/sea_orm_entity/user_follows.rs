use crate::auth::adapter::outgoing::sea_orm_entity::users;
use sea_orm::entity::prelude::*;

/// One row is one directed edge: `follower_id` follows `followee_id`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_follows")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub follower_id: Uuid,

    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub followee_id: Uuid,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "users::Entity",
        from = "Column::FollowerId",
        to = "users::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Follower,

    #[sea_orm(
        belongs_to = "users::Entity",
        from = "Column::FolloweeId",
        to = "users::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Followee,
}

impl ActiveModelBehavior for ActiveModel {}
