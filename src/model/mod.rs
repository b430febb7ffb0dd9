// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core chart data model.
//!
//! A chart holds department/person nodes, reporting edges, the department name
//! registry, and the people directory.

pub mod chart;
pub mod edge;
pub mod ids;
pub mod node;
pub mod person;
pub mod seed;

pub use chart::Chart;
pub use edge::{Edge, EdgeStyle};
pub use ids::{EdgeId, Id, IdError, NodeId, PersonId};
pub use node::{DepartmentBody, Node, NodeBody, NodeKind, PersonBody, Position};
pub use person::Person;
pub use seed::seed_chart;
