// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! MCP server surface.
//!
//! Exposes the chart and the external add/reposition signals as tools over
//! stdio or streamable HTTP, sharing one engine with the TUI.

pub mod server;
pub mod types;

pub use server::TritonMcp;
