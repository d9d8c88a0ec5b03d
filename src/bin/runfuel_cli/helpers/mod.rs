// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports helper modules for runfuel-cli
// ABOUTME: Provides terminal display formatting

pub mod display;
