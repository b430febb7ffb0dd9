// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use ratatui::style::{Color, Modifier, Style};

/// One entry of the fixed department palette.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DepartmentColor {
    pub(crate) key: &'static str,
    pub(crate) name: &'static str,
    pub(crate) color: Color,
}

/// The department palette, in picker order.
pub(crate) const DEPARTMENT_COLORS: [DepartmentColor; 8] = [
    DepartmentColor { key: "blue", name: "ブルー", color: Color::Blue },
    DepartmentColor { key: "amber", name: "アンバー", color: Color::Yellow },
    DepartmentColor { key: "emerald", name: "エメラルド", color: Color::LightGreen },
    DepartmentColor { key: "orange", name: "オレンジ", color: Color::LightRed },
    DepartmentColor { key: "green", name: "グリーン", color: Color::Green },
    DepartmentColor { key: "purple", name: "パープル", color: Color::Magenta },
    DepartmentColor { key: "rose", name: "ローズ", color: Color::LightMagenta },
    DepartmentColor { key: "gray", name: "グレー", color: Color::Gray },
];

pub(crate) fn lookup(color_key: &str) -> Option<DepartmentColor> {
    DEPARTMENT_COLORS
        .iter()
        .copied()
        .find(|entry| entry.key == color_key)
}

/// Style of a department node box. Unknown or missing keys render gray.
pub(crate) fn department_style(color_key: Option<&str>, selected: bool) -> Style {
    let color = color_key
        .and_then(lookup)
        .map(|entry| entry.color)
        .unwrap_or(Color::Gray);

    let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    if selected {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

/// Person nodes are always the same muted style, only selection varies.
pub(crate) fn person_style(selected: bool) -> Style {
    let style = Style::default().fg(Color::DarkGray);
    if selected {
        style.add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        style
    }
}

/// The palette key after `current`, wrapping at the end. Unknown keys restart
/// at the front.
pub(crate) fn next_color_key(current: Option<&str>) -> &'static str {
    let index = current
        .and_then(|key| DEPARTMENT_COLORS.iter().position(|entry| entry.key == key));

    match index {
        Some(index) => DEPARTMENT_COLORS[(index + 1) % DEPARTMENT_COLORS.len()].key,
        None => DEPARTMENT_COLORS[0].key,
    }
}
