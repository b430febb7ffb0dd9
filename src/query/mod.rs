// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over the chart used by the side panel and tools.

use std::collections::BTreeSet;

use crate::model::{Chart, Node, NodeId, Person, PersonId};

/// Case-insensitive substring filter over the department registry. An empty
/// or whitespace query passes everything through in registry order.
pub fn filter_departments<'a>(names: &'a [String], query: &str) -> Vec<&'a str> {
    let query = query.trim().to_lowercase();
    names
        .iter()
        .filter(|name| query.is_empty() || name.to_lowercase().contains(&query))
        .map(String::as_str)
        .collect()
}

/// Fuzzy ranking over the department registry, best match first.
///
/// Entries scoring below the cutoff are dropped entirely so a garbage query
/// yields an empty list instead of a shuffled one.
pub fn fuzzy_rank_departments<'a>(names: &'a [String], query: &str) -> Vec<&'a str> {
    const FUZZY_CUTOFF: f64 = 40.0;

    let query = query.trim();
    if query.is_empty() {
        return names.iter().map(String::as_str).collect();
    }

    let mut scored: Vec<(i64, &str)> = names
        .iter()
        .filter_map(|name| {
            let ratio = rapidfuzz::fuzz::ratio(query.chars(), name.chars());
            if ratio < FUZZY_CUTOFF {
                return None;
            }
            let mut score = (ratio * 1000.0).round() as i64;
            if name.contains(query) {
                score += 2000;
            }
            Some((score, name.as_str()))
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored.into_iter().map(|(_, name)| name).collect()
}

/// Person ids already shown somewhere on the chart.
pub fn assigned_person_ids(chart: &Chart) -> BTreeSet<PersonId> {
    chart
        .nodes()
        .values()
        .filter_map(|node| node.as_person())
        .map(|body| body.person_id().clone())
        .collect()
}

/// People not yet on the chart whose name or title matches the query
/// (case-insensitive substring; empty query passes all).
pub fn filter_unassigned_people<'a>(chart: &'a Chart, query: &str) -> Vec<&'a Person> {
    let assigned = assigned_person_ids(chart);
    let query = query.trim().to_lowercase();

    chart
        .people()
        .values()
        .filter(|person| !assigned.contains(person.person_id()))
        .filter(|person| {
            query.is_empty()
                || person.name().to_lowercase().contains(&query)
                || person
                    .title()
                    .is_some_and(|title| title.to_lowercase().contains(&query))
        })
        .collect()
}

/// Nodes that report to `parent`, sorted top to bottom (then by id for equal
/// heights). This is the column the child reflow respaces.
pub fn children_of<'a>(chart: &'a Chart, parent: &NodeId) -> Vec<&'a Node> {
    let mut children: Vec<&Node> = chart
        .edges()
        .values()
        .filter(|edge| edge.source_node_id() == parent)
        .filter_map(|edge| chart.nodes().get(edge.target_node_id()))
        .collect();

    children.sort_by(|a, b| {
        a.position()
            .y
            .partial_cmp(&b.position().y)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.node_id().cmp(b.node_id()))
    });
    children.dedup_by(|a, b| a.node_id() == b.node_id());
    children
}
