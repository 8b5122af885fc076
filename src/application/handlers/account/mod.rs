//! Account operations: signup, signin, password reset, user administration.

mod list_users;
mod request_reset;
mod reset_password;
mod signin;
mod signup;
mod update_permissions;

pub use list_users::ListUsersHandler;
pub use request_reset::{RequestResetCommand, RequestResetHandler, RequestResetResult};
pub use reset_password::{ResetPasswordCommand, ResetPasswordHandler};
pub use signin::{SigninCommand, SigninHandler};
pub use signup::{SignupCommand, SignupHandler};
pub use update_permissions::{UpdatePermissionsCommand, UpdatePermissionsHandler};
