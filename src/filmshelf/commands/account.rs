use crate::auth::CredentialStore;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FilmshelfError, Result};
use crate::store::AccountStore;

pub fn register<S: AccountStore>(
    creds: &mut CredentialStore<S>,
    username: &str,
    password: &str,
) -> Result<CmdResult> {
    if username.trim().is_empty() {
        return Err(FilmshelfError::Api("Username cannot be empty".into()));
    }
    // Usernames name the catalog file
    if username.contains(['/', '\\', '\0']) {
        return Err(FilmshelfError::Api(
            "Username cannot contain path separators".into(),
        ));
    }

    let mut result = CmdResult::default();
    if creds.register(username, password)? {
        result.add_message(CmdMessage::success(format!("Account created: {}", username)));
    } else {
        result.add_message(CmdMessage::error(format!(
            "Username already taken: {}",
            username
        )));
    }
    Ok(result)
}
