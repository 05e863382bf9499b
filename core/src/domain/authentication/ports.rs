use crate::domain::{
    authentication::value_objects::{AuthorizeRequestInput, Identity, LoginInput},
    common::entities::app_errors::CoreError,
    jwt::entities::AccessToken,
};

pub trait AuthService: Send + Sync {
    /// Exchanges email and password for a bearer access token.
    fn login(&self, input: LoginInput)
    -> impl Future<Output = Result<AccessToken, CoreError>> + Send;

    /// Resolves a bearer token to the active user it was issued for.
    fn authorize_request(
        &self,
        input: AuthorizeRequestInput,
    ) -> impl Future<Output = Result<Identity, CoreError>> + Send;
}
