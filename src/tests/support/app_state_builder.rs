use crate::auth::adapter::incoming::web::session_cookie::SessionCookieConfig;
use crate::auth::application::use_cases::{
    login_user::ILoginUserUseCase, logout_user::ILogoutUseCase,
    register_user::IRegisterUserUseCase,
};
use crate::modules::social::application::ports::incoming::use_cases::{
    GetOwnProfileUseCase, GetProfileUseCase, ToggleFollowUseCase,
};
use crate::modules::social::application::social_use_cases::SocialUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    register_user: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    logout_user: Arc<dyn ILogoutUseCase + Send + Sync>,
    social: SocialUseCases,
    session_cookie: SessionCookieConfig,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Arc::new(StubRegisterUserUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            logout_user: Arc::new(StubLogoutUserUseCase),
            social: SocialUseCases {
                get_own_profile: Arc::new(StubGetOwnProfileUseCase),
                get_profile: Arc::new(StubGetProfileUseCase),
                toggle_follow: Arc::new(StubToggleFollowUseCase),
            },
            session_cookie: SessionCookieConfig::new(false, 3600),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(
        mut self,
        uc: impl IRegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_user = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_logout_user(mut self, uc: impl ILogoutUseCase + Send + Sync + 'static) -> Self {
        self.logout_user = Arc::new(uc);
        self
    }

    pub fn with_get_own_profile(
        mut self,
        uc: impl GetOwnProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.social.get_own_profile = Arc::new(uc);
        self
    }

    pub fn with_get_profile(mut self, uc: impl GetProfileUseCase + Send + Sync + 'static) -> Self {
        self.social.get_profile = Arc::new(uc);
        self
    }

    pub fn with_toggle_follow(
        mut self,
        uc: impl ToggleFollowUseCase + Send + Sync + 'static,
    ) -> Self {
        self.social.toggle_follow = Arc::new(uc);
        self
    }

    pub fn with_social(mut self, social: SocialUseCases) -> Self {
        self.social = social;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self.register_user,
            login_user_use_case: self.login_user,
            logout_user_use_case: self.logout_user,
            social: self.social,
            session_cookie: self.session_cookie,
        })
    }
}
