// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Placement of new nodes and the child-column reflow.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::Position;

/// Horizontal offset of a child column from its parent.
pub const CHILD_COLUMN_X_OFFSET: f64 = 200.0;
/// Vertical spacing between siblings in a child column.
pub const CHILD_ROW_SPACING: f64 = 100.0;

const NEW_NODE_MAX_X: f64 = 500.0;
const NEW_NODE_MAX_Y: f64 = 300.0;

/// Chooses where a freshly created node lands on the canvas.
///
/// The engine takes this as a boxed trait object so tests can substitute a
/// deterministic placement.
pub trait PlacementStrategy {
    fn place_new_node(&mut self) -> Position;
}

/// Default placement: a random spot within the initial viewport.
#[derive(Debug)]
pub struct RandomPlacement {
    rng: StdRng,
}

impl Default for RandomPlacement {
    fn default() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl PlacementStrategy for RandomPlacement {
    fn place_new_node(&mut self) -> Position {
        Position::new(
            self.rng.gen_range(0.0..NEW_NODE_MAX_X),
            self.rng.gen_range(0.0..NEW_NODE_MAX_Y),
        )
    }
}

/// Places every new node at one fixed position.
#[derive(Debug, Clone, Copy)]
pub struct FixedPlacement {
    position: Position,
}

impl FixedPlacement {
    pub fn new(position: Position) -> Self {
        Self { position }
    }
}

impl PlacementStrategy for FixedPlacement {
    fn place_new_node(&mut self) -> Position {
        self.position
    }
}

/// Evenly spaced positions for a parent's child column, centered on the
/// parent. `count` includes the child about to be added, so callers reflow
/// the existing children to `positions[..count - 1]` and place the new one at
/// `positions[count - 1]`.
pub fn child_column_positions(parent: Position, count: usize) -> Vec<Position> {
    let total_height = CHILD_ROW_SPACING * count as f64;
    let start_y = parent.y - total_height / 2.0;

    (0..count)
        .map(|row| {
            Position::new(
                parent.x + CHILD_COLUMN_X_OFFSET,
                start_y + row as f64 * CHILD_ROW_SPACING,
            )
        })
        .collect()
}
