mod follow_graph_postgres;
pub mod sea_orm_entity;

pub use follow_graph_postgres::FollowGraphPostgres;
