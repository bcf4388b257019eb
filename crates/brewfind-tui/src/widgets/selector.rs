//! Single-line option selector with an "all" sentinel.
//!
//! The selected value `""` stands for the sentinel. Cycling walks
//! sentinel → options in order → back to the sentinel.

use ratatui::text::{Line, Span};

use crate::theme;

/// The option after `current`, wrapping through the sentinel.
pub fn next(options: &[String], current: &str) -> String {
    let len = options.len() + 1;
    value_at(options, (position(options, current) + 1) % len)
}

/// The option before `current`, wrapping through the sentinel.
pub fn prev(options: &[String], current: &str) -> String {
    let len = options.len() + 1;
    value_at(options, (position(options, current) + len - 1) % len)
}

/// Slot of `current`: 0 for the sentinel (or an unknown value), else 1-based.
fn position(options: &[String], current: &str) -> usize {
    if current.is_empty() {
        return 0;
    }
    options
        .iter()
        .position(|o| o == current)
        .map_or(0, |i| i + 1)
}

fn value_at(options: &[String], slot: usize) -> String {
    match slot {
        0 => String::new(),
        n => options.get(n - 1).cloned().unwrap_or_default(),
    }
}

/// Render `◂ value ▸`. The arrows only light up when focused; a disabled
/// selector shows the sentinel dimmed.
pub fn selector_line(
    sentinel: &str,
    current: &str,
    option_count: usize,
    focused: bool,
    enabled: bool,
) -> Line<'static> {
    if !enabled {
        return Line::from(Span::styled(
            format!("  {sentinel}"),
            theme::selector_disabled(),
        ));
    }

    let arrow_style = if focused {
        theme::key_hint_key()
    } else {
        theme::key_hint()
    };
    let value = if current.is_empty() {
        sentinel.to_owned()
    } else {
        current.to_owned()
    };
    let value_style = if focused {
        theme::selector_active()
    } else {
        theme::table_row()
    };

    Line::from(vec![
        Span::styled("◂ ", arrow_style),
        Span::styled(value, value_style),
        Span::styled(" ▸", arrow_style),
        Span::styled(format!("  ({option_count})"), theme::key_hint()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn opts() -> Vec<String> {
        vec!["Texas".into(), "Colorado".into(), "Oregon".into()]
    }

    #[test]
    fn next_walks_from_sentinel_and_wraps() {
        let o = opts();
        assert_eq!(next(&o, ""), "Texas");
        assert_eq!(next(&o, "Texas"), "Colorado");
        assert_eq!(next(&o, "Oregon"), "");
    }

    #[test]
    fn prev_wraps_to_last() {
        let o = opts();
        assert_eq!(prev(&o, ""), "Oregon");
        assert_eq!(prev(&o, "Texas"), "");
        assert_eq!(prev(&o, "Colorado"), "Texas");
    }

    #[test]
    fn no_options_stays_on_sentinel() {
        assert_eq!(next(&[], ""), "");
        assert_eq!(prev(&[], ""), "");
    }

    #[test]
    fn unknown_value_is_treated_as_sentinel() {
        assert_eq!(next(&opts(), "Utah"), "Texas");
    }

    #[test]
    fn line_shows_sentinel_when_empty() {
        let line = selector_line("All States", "", 3, true, true);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "◂ All States ▸  (3)");
    }
}
