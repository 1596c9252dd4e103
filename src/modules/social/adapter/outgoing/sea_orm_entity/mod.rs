pub mod user_follows;
