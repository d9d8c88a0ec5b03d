// ABOUTME: Account commands for runfuel-cli
// ABOUTME: Handles login, register, logout, and whoami
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use runfuel_client::ApiClient;
use runfuel_core::errors::AppResult;
use runfuel_core::models::LoginRequest;
use runfuel_core::validation::RegisterForm;
use tracing::info;

use crate::helpers::display::display_user;

/// Sign in and save the session
pub async fn login(client: &ApiClient, email: String, password: String) -> AppResult<()> {
    let user = client
        .account()
        .sign_in(LoginRequest { email, password })
        .await?;
    info!(user_id = %user.id, "signed in");
    println!("Signed in as {}", user.email);
    if !user.has_profile {
        println!("Your profile is not set up yet; finish onboarding to get a daily target.");
    }
    Ok(())
}

/// Create an account and sign in
pub async fn register(
    client: &ApiClient,
    email: String,
    password: String,
    confirm_password: String,
) -> AppResult<()> {
    let form = RegisterForm {
        email,
        password,
        confirm_password,
    };
    let user = client.account().sign_up(form).await?;
    println!("Account created for {}", user.email);
    Ok(())
}

/// Sign out
pub async fn logout(client: &ApiClient) -> AppResult<()> {
    if !client.session().is_authenticated().await {
        println!("Not signed in.");
        return Ok(());
    }
    client.account().sign_out().await;
    println!("Signed out.");
    Ok(())
}

/// Show the signed-in user, reloading it from the backend
pub async fn whoami(client: &ApiClient) -> AppResult<()> {
    if !client.session().is_authenticated().await {
        println!("Not signed in.");
        return Ok(());
    }
    let user = client.account().refresh_user().await?;
    display_user(&user);
    Ok(())
}
