use crate::logger;
use crate::models::client_requests::{LoginRequest, RegisterRequest};
use crate::models::user::StoredUser;
use crate::utils::errors::{AppError, ValidationError};
use crate::views::{AppContext, ViewStatus};

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Registration and login forms.
#[derive(Debug, Default)]
pub struct AuthView {
    pub status: ViewStatus,
    pub user: Option<StoredUser>,
}

impl AuthView {
    pub async fn register(&mut self, ctx: &mut AppContext, name: &str, email: &str, password: &str) {
        self.status.clear();
        match AuthView::try_register(ctx, name, email, password).await {
            Ok(user) => {
                logger!(INFO, "[AUTH] Registered `{}`", user.email);
                self.status.succeed(&format!("Welcome, {}!", user.name));
                self.user = Some(user);
            }
            Err(error) => self.status.fail(error),
        }
    }

    pub async fn login(&mut self, ctx: &mut AppContext, email: &str, password: &str) {
        self.status.clear();
        match AuthView::try_login(ctx, email, password).await {
            Ok(user) => {
                logger!(INFO, "[AUTH] Logged in as `{}`", user.email);
                self.status.succeed(&format!("Welcome back, {}!", user.name));
                self.user = Some(user);
            }
            Err(error) => self.status.fail(error),
        }
    }

    pub fn logout(&mut self, ctx: &mut AppContext) {
        self.status.clear();
        self.user = None;
        match ctx.sign_out() {
            Ok(()) => self.status.succeed("Logged out."),
            Err(error) => self.status.fail(error),
        }
    }

    async fn try_register(
        ctx: &mut AppContext,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<StoredUser, AppError> {
        let request = RegisterRequest {
            name: required("Name", name)?.trim().to_string(),
            email: valid_email(email)?,
            password: required("Password", password)?.to_string(),
        };
        if request.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH).into());
        }

        let auth = ctx.api.register(&request).await?;
        ctx.sign_in(&auth)?;
        Ok(auth.stored_user())
    }

    async fn try_login(
        ctx: &mut AppContext,
        email: &str,
        password: &str,
    ) -> Result<StoredUser, AppError> {
        let request = LoginRequest {
            email: valid_email(email)?,
            password: required("Password", password)?.to_string(),
        };

        let auth = ctx.api.login(&request).await?;
        ctx.sign_in(&auth)?;
        Ok(auth.stored_user())
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(value)
}

fn valid_email(value: &str) -> Result<String, ValidationError> {
    let email = required("Email", value)?.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email.to_string()),
        _ => Err(ValidationError::InvalidEmail),
    }
}
