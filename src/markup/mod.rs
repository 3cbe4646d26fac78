//! Rewrites elements that hold timestamps into relative-time labels.
//!
//! Elements whose timestamp yields no label are left untouched.

pub mod element;

pub use element::{DateElement, TextElement};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::pretty::{self, FormatOptions};

/// Replace the text of each element whose title holds a recent timestamp.
/// Returns how many elements were rewritten.
pub fn prettify_titles<E: DateElement>(
    elements: &mut [E],
    now: DateTime<Utc>,
    options: &FormatOptions,
) -> usize {
    let mut replaced = 0;
    for element in elements.iter_mut() {
        let Some(title) = element.title() else {
            continue;
        };
        match pretty::classify(title, now, options) {
            Ok(label) => {
                element.set_text(label.to_string());
                replaced += 1;
            }
            Err(skip) => debug!(title = title, reason = %skip, "Leaving element unchanged"),
        }
    }
    replaced
}

/// Replace the text of each element that displays a recent timestamp, moving
/// the original text into its title. Returns how many elements were rewritten.
pub fn prettify_tags<E: DateElement>(
    elements: &mut [E],
    now: DateTime<Utc>,
    options: &FormatOptions,
) -> usize {
    let mut replaced = 0;
    for element in elements.iter_mut() {
        match pretty::classify(element.text(), now, options) {
            Ok(label) => {
                let original = element.text().to_string();
                element.set_title(original);
                element.set_text(label.to_string());
                replaced += 1;
            }
            Err(skip) => debug!(text = element.text(), reason = %skip, "Leaving element unchanged"),
        }
    }
    replaced
}
