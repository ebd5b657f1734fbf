// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness
// ABOUTME: Re-exports command modules for moreta-cli
// ABOUTME: Provides account administration and demo seeding commands

pub mod seed;
pub mod user;
