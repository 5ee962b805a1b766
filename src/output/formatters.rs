//! Formatting utilities for terminal output

/// Format a word with its hooks on either side, e.g. `bc AT es`
#[must_use]
pub fn hooked_word(front: &str, word: &str, back: &str) -> String {
    format!("{front:>8} {word} {back}")
}

/// Lay words out in rows of equal-width columns
#[must_use]
pub fn columns<S: AsRef<str>>(words: &[S], line_width: usize) -> Vec<String> {
    let cell = words.iter().map(|w| w.as_ref().len()).max().unwrap_or(0) + 2;
    let per_row = (line_width / cell).max(1);

    words
        .chunks(per_row)
        .map(|row| {
            row.iter()
                .map(|w| format!("{:<cell$}", w.as_ref()))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Human-readable byte count
#[must_use]
pub fn format_bytes(bytes: usize) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}
