// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the folio CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The detection tries
//! the config file's `theme` first, then `FOLIO_THEME`, then `COLORFGBG` (set
//! by some terminals), then macOS system appearance, then defaults to dark.
//! Respects `NO_COLOR` and non-TTY detection for pipelines.
//!
//! # Theme detection order
//!
//! 1. `theme` in folio.toml
//! 2. `FOLIO_THEME` env var ("dark" or "light")
//! 3. `COLORFGBG` env var (terminal background hint)
//! 4. macOS appearance (via defaults read)
//! 5. Default to dark theme

use folio::config::ThemeChoice;
use folio::{ResultsState, SearchArea, SearchResult};
use std::sync::OnceLock;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

/// Pin the theme from config. Must run before anything is printed.
pub fn init_theme(choice: Option<ThemeChoice>) {
    if let Some(choice) = choice {
        let theme = match choice {
            ThemeChoice::Dark => Theme::Dark,
            ThemeChoice::Light => Theme::Light,
        };
        let _ = THEME.set(theme);
    }
}

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("FOLIO_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG (format: "fg;bg" where bg > 6 typically means light)
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            // "Dark" means dark mode; absence or error means light mode
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.contains("Dark") && output.status.success() {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

/// True color escape sequence helper
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

/// OneDark palette
mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

/// One Light palette
mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Truncate plain text to `max_len` characters, ending in `…` when cut
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = GRAY();
    let len = visible_len(content);
    let pad = BOX_WIDTH.saturating_sub(len);
    println!(
        "{}│{}{}{}{}│{}",
        border,
        RESET,
        content,
        " ".repeat(pad),
        border,
        RESET
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = GRAY();
    let label_part = format!("─ {} ", label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        RESET,
        label_part,
        border,
        "─".repeat(remaining),
        RESET
    );
}

/// Print section divider: ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let border = GRAY();
    let label_part = format!("─ {} ", label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}├{}{}{}{}┤{}",
        border,
        RESET,
        label_part,
        border,
        "─".repeat(remaining),
        RESET
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let border = GRAY();
    println!("{}└{}┘{}", border, "─".repeat(BOX_WIDTH), RESET);
}

/// Print double-line header: ╔══════════════════╗
pub fn double_header() {
    let border = BLUE();
    println!("{}╔{}╗{}", border, "═".repeat(BOX_WIDTH), RESET);
}

/// Print double-line footer: ╚══════════════════╝
pub fn double_footer() {
    let border = BLUE();
    println!("{}╚{}╝{}", border, "═".repeat(BOX_WIDTH), RESET);
}

/// Print centered title with bold
pub fn title(text: &str) {
    let border = BLUE();
    let colored = themed(BRIGHT_CYAN, &[BOLD], text);
    let len = visible_len(&colored);
    let total_pad = BOX_WIDTH.saturating_sub(len);
    let left_pad = total_pad / 2;
    let right_pad = total_pad - left_pad;
    println!(
        "{}║{}{}{}{}{}║{}",
        border,
        RESET,
        " ".repeat(left_pad),
        colored,
        " ".repeat(right_pad),
        border,
        RESET
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Area heading label: `guide (13)`
pub fn area_label(area: &SearchArea) -> String {
    format!(
        "{} {}",
        themed(CYAN, &[BOLD], &area.name),
        themed(GRAY, &[], &format!("({})", area.count()))
    )
}

/// One page row. Priority pages get a marker, overflow pages are indented.
pub fn page_line(page: &SearchResult, priority: bool) -> String {
    const TITLE_WIDTH: usize = 40;
    let marker = if priority {
        themed(YELLOW, &[], "★")
    } else {
        " ".to_string()
    };
    let title = truncate(page.display_title().unwrap_or_default(), TITLE_WIDTH);
    let path = truncate(&page.path, BOX_WIDTH - TITLE_WIDTH - 6);
    format!(
        " {} {} {}",
        marker,
        pad_right(&title, TITLE_WIDTH),
        themed(GRAY, &[DIM], &path)
    )
}

/// Pass/fail badge
pub fn status_badge(ok: bool) -> String {
    if ok {
        themed(GREEN, &[BOLD], "PASS")
    } else {
        themed(RED, &[BOLD], "FAIL")
    }
}

/// Print the whole view as boxed sections, one per area.
pub fn print_state(state: &ResultsState) {
    match state {
        ResultsState::NotSearched => {
            println!("{}", themed(GRAY, &[], "No query."));
        }
        ResultsState::NoResults { query } => {
            section_top(&themed(CYAN, &[BOLD], &format!("\"{}\"", query)));
            row(&format!(" {}", themed(YELLOW, &[], folio::NOT_FOUND_MESSAGE)));
            section_bot();
        }
        ResultsState::Grouped { query, areas } => {
            let total: usize = areas.iter().map(SearchArea::count).sum();
            double_header();
            title(&format!(
                "{} results in {} areas for \"{}\"",
                total,
                areas.len(),
                query
            ));
            double_footer();

            for (i, area) in areas.iter().enumerate() {
                if i == 0 {
                    section_top(&area_label(area));
                } else {
                    section_mid(&area_label(area));
                }
                for page in &area.priority_pages {
                    row(&page_line(page, true));
                }
                for page in &area.pages {
                    row(&page_line(page, false));
                }
            }
            if !areas.is_empty() {
                section_bot();
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
