// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Linear undo/redo history over chart snapshots.

use crate::model::Chart;

/// Interaction phase of the editing engine.
///
/// `Dragging` suppresses commits for the intermediate events of one
/// continuous gesture; `Replaying` suppresses re-recording the mutation that
/// installs a snapshot during undo/redo. Exactly one phase is active at a
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditPhase {
    #[default]
    Idle,
    Dragging,
    Replaying,
}

/// Strictly ordered snapshot stack with a cursor.
///
/// The stack is never empty: it is constructed from the initial (loaded or
/// seeded) chart, so the seed state is addressable but never an undoable
/// action of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    entries: Vec<Chart>,
    index: usize,
}

impl History {
    pub fn new(initial: Chart) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &Chart {
        &self.entries[self.index]
    }

    /// Appends `snapshot` after discarding any redo tail.
    pub fn commit(&mut self, snapshot: Chart) {
        self.entries.truncate(self.index + 1);
        self.entries.push(snapshot);
        self.index += 1;
    }

    /// Moves the cursor back one entry; `None` at the oldest entry. Never
    /// appends.
    pub fn undo(&mut self) -> Option<&Chart> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(&self.entries[self.index])
    }

    /// Moves the cursor forward one entry; `None` at the newest entry. Never
    /// appends.
    pub fn redo(&mut self) -> Option<&Chart> {
        if self.index + 1 == self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(&self.entries[self.index])
    }
}
