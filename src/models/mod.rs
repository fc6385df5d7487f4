// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Core data model: positions, viewport, markers and the session that owns them.

pub mod annotation;
pub mod position;
pub mod session;
pub mod viewport;
