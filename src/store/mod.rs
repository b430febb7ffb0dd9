// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Durable persistence for chart snapshots.
//!
//! One JSON record per session directory; writes are atomic
//! (temp-file-and-rename) and optionally fsynced.

pub mod snapshot_file;

pub use snapshot_file::{SnapshotFile, StoreError, WriteDurability};
