//! Output helpers for one-shot CLI paths that print and exit.

use anyhow::{Context, Result};
use readterm::{StyleOption, StyleSlot, DEFAULT_ARTICLE_STYLE};
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Debug, Serialize)]
struct SlotListing {
    slot: StyleSlot,
    title: &'static str,
    variable: &'static str,
    default: &'static str,
    options: &'static [StyleOption],
}

fn listings() -> Vec<SlotListing> {
    StyleSlot::ALL
        .into_iter()
        .map(|slot| SlotListing {
            slot,
            title: slot.title(),
            variable: slot.variable(),
            default: DEFAULT_ARTICLE_STYLE.get(slot).value,
            options: slot.options(),
        })
        .collect()
}

/// Render the option registry as text, or as pretty JSON when `json` is set.
pub(crate) fn format_option_listing(json: bool) -> Result<String> {
    if json {
        let mut out =
            serde_json::to_string_pretty(&listings()).context("failed to encode option listing")?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = String::new();
    for listing in listings() {
        let _ = writeln!(out, "{} ({})", listing.title, listing.variable);
        for option in listing.options {
            let marker = if option.value == listing.default { '*' } else { ' ' };
            if option.label == option.value {
                let _ = writeln!(out, "  {marker} {}", option.value);
            } else {
                let _ = writeln!(out, "  {marker} {:<12} {}", option.value, option.label);
            }
        }
    }
    Ok(out)
}
