// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Executive Partners

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct VersionResponse {
    pub agent: String,
    pub version: String,
}
