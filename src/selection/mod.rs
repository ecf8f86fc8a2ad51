// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Click gating for result links.
//!
//! A result link is a real `<a href>`. Plain left clicks become in-app
//! navigation via a `resultSelected` notification; everything else (middle
//! click, ctrl/cmd click) is left alone so the browser can open a new tab or
//! window the way users expect.
//!
//! | button | ctrl  | meta  | selected? |
//! |--------|-------|-------|-----------|
//! | 0      | false | false | yes       |
//! | 0      | true  | *     | no        |
//! | 0      | *     | true  | no        |
//! | != 0   | *     | *     | no        |

mod notifier;

pub use notifier::{ResultLink, SelectionNotifier, SubscriptionId};

use serde::{Deserialize, Serialize};

/// `MouseEvent.button` value of the primary button.
pub const PRIMARY_BUTTON: i16 = 0;

/// Whether a pointer activation should emit `resultSelected`.
#[inline]
pub fn should_select(button: i16, ctrl_pressed: bool, meta_pressed: bool) -> bool {
    button == PRIMARY_BUTTON && !ctrl_pressed && !meta_pressed
}

/// The parts of a DOM `MouseEvent` the gate looks at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerActivation {
    pub button: i16,
    #[serde(default)]
    pub ctrl_key: bool,
    #[serde(default)]
    pub meta_key: bool,
}

impl PointerActivation {
    pub fn new(button: i16, ctrl_key: bool, meta_key: bool) -> Self {
        Self {
            button,
            ctrl_key,
            meta_key,
        }
    }

    #[inline]
    pub fn should_select(&self) -> bool {
        should_select(self.button, self.ctrl_key, self.meta_key)
    }
}
