// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::PersonId;

/// A person known to the chart, independent of whether any node shows them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    person_id: PersonId,
    name: String,
    title: Option<String>,
    avatar: Option<String>,
}

impl Person {
    pub fn new(person_id: PersonId, name: impl Into<String>) -> Self {
        Self {
            person_id,
            name: name.into(),
            title: None,
            avatar: None,
        }
    }

    pub fn new_with(
        person_id: PersonId,
        name: impl Into<String>,
        title: Option<String>,
        avatar: Option<String>,
    ) -> Self {
        Self {
            person_id,
            name: name.into(),
            title,
            avatar,
        }
    }

    pub fn person_id(&self) -> &PersonId {
        &self.person_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title<T: Into<String>>(&mut self, title: Option<T>) {
        self.title = title.map(Into::into);
    }

    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    pub fn set_avatar<T: Into<String>>(&mut self, avatar: Option<T>) {
        self.avatar = avatar.map(Into::into);
    }
}
