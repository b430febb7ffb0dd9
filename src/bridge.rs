// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Externally raised signals and the global undo/redo key chords.
//!
//! The bridge carries no business logic: it unpacks a signal and forwards it
//! to the matching engine call.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::engine::{ChartEngine, EngineError};
use crate::model::{Node, NodeId, Position};

/// A mutation raised outside the renderer (MCP tools, scripted flows).
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// Insert a fully formed node; auto-edges from its `source_node_id`.
    AddNode(Node),
    /// Direct position overwrite with a single history commit.
    RepositionNode { node_id: NodeId, position: Position },
}

pub fn dispatch(engine: &mut ChartEngine, signal: Signal) -> Result<(), EngineError> {
    match signal {
        Signal::AddNode(node) => engine.add_node(node),
        Signal::RepositionNode { node_id, position } => {
            engine.reposition_node(&node_id, position)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChordAction {
    Undo,
    Redo,
}

/// Maps the global key chords: Ctrl+Z is undo, Ctrl+Shift+Z and Ctrl+Y are
/// redo. Everything else falls through to the regular key handling.
pub fn chord_action(key: &KeyEvent) -> Option<ChordAction> {
    if !key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Char('z') | KeyCode::Char('Z') => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                Some(ChordAction::Redo)
            } else {
                Some(ChordAction::Undo)
            }
        }
        KeyCode::Char('y') | KeyCode::Char('Y') => Some(ChordAction::Redo),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::{chord_action, dispatch, ChordAction, Signal};
    use crate::engine::ChartEngine;
    use crate::model::{seed_chart, Node, NodeId, Position};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn chords_map_to_undo_and_redo() {
        assert_eq!(
            chord_action(&key(KeyCode::Char('z'), KeyModifiers::CONTROL)),
            Some(ChordAction::Undo)
        );
        assert_eq!(
            chord_action(&key(
                KeyCode::Char('Z'),
                KeyModifiers::CONTROL | KeyModifiers::SHIFT
            )),
            Some(ChordAction::Redo)
        );
        assert_eq!(
            chord_action(&key(KeyCode::Char('y'), KeyModifiers::CONTROL)),
            Some(ChordAction::Redo)
        );
    }

    #[test]
    fn keys_without_ctrl_are_not_chords() {
        assert_eq!(chord_action(&key(KeyCode::Char('z'), KeyModifiers::NONE)), None);
        assert_eq!(chord_action(&key(KeyCode::Char('z'), KeyModifiers::SHIFT)), None);
        assert_eq!(chord_action(&key(KeyCode::Char('x'), KeyModifiers::CONTROL)), None);
    }

    #[test]
    fn dispatch_forwards_add_node() {
        let mut engine = ChartEngine::new(seed_chart());
        let node_id = NodeId::new("node-42").expect("node id");
        let mut node = Node::department(node_id.clone(), Position::new(600.0, 150.0), "新規部署");
        node.set_source_node_id(Some(NodeId::new("president").expect("node id")));

        dispatch(&mut engine, Signal::AddNode(node)).expect("dispatch");

        assert!(engine.nodes().contains_key(&node_id));
        assert!(engine
            .edges()
            .values()
            .any(|edge| edge.target_node_id() == &node_id));
    }

    #[test]
    fn dispatch_forwards_reposition() {
        let mut engine = ChartEngine::new(seed_chart());
        let node_id = NodeId::new("sales").expect("node id");

        dispatch(
            &mut engine,
            Signal::RepositionNode {
                node_id: node_id.clone(),
                position: Position::new(420.0, 90.0),
            },
        )
        .expect("dispatch");

        assert_eq!(
            engine.nodes().get(&node_id).expect("node").position(),
            Position::new(420.0, 90.0)
        );
        assert_eq!(engine.history_index(), 1);
    }
}
