// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for runfuel-cli
// ABOUTME: Provides account, food, progress, training, and target preview commands

pub mod account;
pub mod food;
pub mod progress;
pub mod targets;
pub mod training;
