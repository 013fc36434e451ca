// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use cliclack::{input, intro, outro, password};

/// Asks for the merchant account credentials. A username passed on the
/// command line skips its prompt; the password is always typed in.
pub fn prompt_login(
    username: Option<String>,
) -> Result<(String, String), Box<dyn std::error::Error>> {
    intro("Merchant sign in")?;

    let username: String = match username {
        Some(username) => username,
        None => input("Email or username:")
            .placeholder("studio@example.com")
            .interact()?,
    };
    let password: String = password("Password:").mask('▪').interact()?;

    outro("Signing in...")?;
    Ok((username, password))
}

/// Asks for a new guest-site password.
pub fn prompt_new_password() -> Result<String, Box<dyn std::error::Error>> {
    intro("Reset guest password")?;
    let password: String = password("New password:").mask('▪').interact()?;
    outro("Updating...")?;
    Ok(password)
}
