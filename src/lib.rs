// ABOUTME: Main library entry point for the RunFuel client SDK
// ABOUTME: Typed API bindings, token refresh, session persistence, and client-side state stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # RunFuel Client
//!
//! Client side of the RunFuel nutrition and running-training product.
//!
//! ## Features
//!
//! - **Typed API**: one binding module per backend resource, every response
//!   decoded into an explicit DTO
//! - **Token refresh**: bearer tokens on every request with a single-flight
//!   refresh-and-retry when the backend answers 401
//! - **Session persistence**: refresh token and user kept across runs
//! - **State stores**: AI analysis review buffer and today's calorie dashboard
//!
//! ## Example
//!
//! ```rust,no_run
//! use runfuel_client::config::environment::ClientConfig;
//! use runfuel_client::{ApiClient, SessionStore};
//! use runfuel_core::models::LoginRequest;
//!
//! # async fn example() -> runfuel_core::errors::AppResult<()> {
//! let config = ClientConfig::from_env()?;
//! let client = ApiClient::new(&config, SessionStore::in_memory())?;
//! let user = client
//!     .account()
//!     .sign_in(LoginRequest {
//!         email: "runner@example.com".into(),
//!         password: "correct horse battery".into(),
//!     })
//!     .await?;
//! println!("signed in as {}", user.email);
//! # Ok(())
//! # }
//! ```

/// Sign-up, sign-in, onboarding, and password flows
pub mod account;

/// Typed bindings for each backend resource
pub mod api;

/// Access-token refresh coordination
pub mod auth;

/// HTTP client with bearer injection and 401 recovery
pub mod client;

/// Environment-based configuration
pub mod config;

/// Tracing subscriber setup
pub mod logging;

/// Authenticated session state and its persistence
pub mod session;

/// Client-side state containers for views
pub mod store;

pub use client::ApiClient;
pub use session::SessionStore;
