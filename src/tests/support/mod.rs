pub mod app_state_builder;
pub mod in_memory;
pub mod stubs;

pub fn load_test_env() {
    dotenvy::from_filename(".env.test").ok();
}
