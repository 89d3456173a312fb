//! Pure rendering helpers - same input state, same output widgets

use ratatui::{prelude::*, widgets::*};

use crate::constants::{NO_DATA_MESSAGE, SPINNER_FRAMES};
use crate::models::FetchState;

/// Current frame of the indefinite loading spinner
pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

/// Render the live-data card: the one three-way branch in the page.
///
/// `tick` only advances the spinner; it has no effect once the fetch has
/// reached a terminal state.
pub fn data_card_lines(fetch: &FetchState, tick: usize) -> Vec<Line<'static>> {
    match fetch {
        FetchState::Loading => vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {}  Loading...", spinner_frame(tick)),
                Style::default().fg(Color::Cyan),
            )),
        ],
        FetchState::Succeeded(payload) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    payload.message.clone(),
                    Style::default().fg(Color::White).bold(),
                )),
                Line::from(""),
            ];
            let pretty = serde_json::to_string_pretty(&payload.data)
                .unwrap_or_else(|_| String::from("[]"));
            lines.extend(highlight_json(&pretty));
            lines
        }
        FetchState::Failed => vec![
            Line::from(""),
            Line::from(Span::styled(
                NO_DATA_MESSAGE,
                Style::default().fg(Color::DarkGray),
            )),
        ],
    }
}

/// Render one feature card as a bordered paragraph
pub fn feature_card(icon: &str, title: &str, description: &str) -> Paragraph<'static> {
    let lines = vec![
        Line::from(Span::styled(
            format!("  {}", icon),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::styled(
            format!("  {}", title),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", description),
            Style::default().fg(Color::Gray),
        )),
    ];
    Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: false })
}

/// Simple JSON syntax highlighting
pub fn highlight_json(text: &str) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for line in text.lines() {
        let mut spans = Vec::new();
        let mut current = String::new();
        let mut in_string = false;

        let flush = |buf: &mut String, spans: &mut Vec<Span<'static>>| {
            if buf.is_empty() {
                return;
            }
            let style = if buf.chars().all(|c| c.is_ascii_digit() || c == '-' || c == '.') {
                Style::default().fg(Color::Yellow)
            } else if matches!(buf.trim(), "true" | "false" | "null") {
                Style::default().fg(Color::Magenta)
            } else {
                Style::default()
            };
            spans.push(Span::styled(std::mem::take(buf), style));
        };

        for c in line.chars() {
            match c {
                '"' => {
                    if in_string {
                        current.push(c);
                        // Keys are followed by a colon on the same line
                        let rest_is_key = line
                            .split_once(current.as_str())
                            .map(|(_, rest)| rest.trim_start().starts_with(':'))
                            .unwrap_or(false);
                        let color = if rest_is_key { Color::Cyan } else { Color::Green };
                        spans.push(Span::styled(
                            std::mem::take(&mut current),
                            Style::default().fg(color),
                        ));
                        in_string = false;
                    } else {
                        flush(&mut current, &mut spans);
                        in_string = true;
                        current.push(c);
                    }
                }
                '{' | '}' | '[' | ']' if !in_string => {
                    flush(&mut current, &mut spans);
                    spans.push(Span::styled(
                        c.to_string(),
                        Style::default().fg(Color::Yellow),
                    ));
                }
                ':' | ',' if !in_string => {
                    flush(&mut current, &mut spans);
                    spans.push(Span::raw(c.to_string()));
                }
                _ => current.push(c),
            }
        }
        flush(&mut current, &mut spans);

        lines.push(Line::from(spans));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ApiPayload;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn card_text(fetch: &FetchState, tick: usize) -> String {
        data_card_lines(fetch, tick)
            .iter()
            .map(line_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_loading_shows_spinner() {
        let text = card_text(&FetchState::Loading, 0);
        assert!(text.contains("Loading..."));
        assert!(text.contains(spinner_frame(0)));
        // The spinner advances frame to frame
        assert_ne!(spinner_frame(0), spinner_frame(1));
    }

    #[test]
    fn test_succeeded_shows_message_and_data() {
        let fetch = FetchState::Succeeded(ApiPayload {
            message: String::from("Hello"),
            data: vec![
                serde_json::json!(1),
                serde_json::json!(2),
                serde_json::json!(3),
            ],
        });
        let text = card_text(&fetch, 0);
        assert!(text.contains("Hello"));
        assert!(text.contains("[\n  1,\n  2,\n  3\n]"));
    }

    #[test]
    fn test_succeeded_with_empty_data() {
        let fetch = FetchState::Succeeded(ApiPayload {
            message: String::from("Empty"),
            data: Vec::new(),
        });
        let text = card_text(&fetch, 0);
        assert!(text.contains("Empty"));
        assert!(text.contains("[]"));
    }

    #[test]
    fn test_failed_shows_fallback() {
        let text = card_text(&FetchState::Failed, 0);
        assert!(text.contains("No data available from API"));
        assert!(!text.contains("Loading"));
    }

    #[test]
    fn test_render_is_pure() {
        let fetch = FetchState::Succeeded(ApiPayload {
            message: String::from("Hello"),
            data: vec![serde_json::json!({"id": 1, "ok": true})],
        });
        assert_eq!(card_text(&fetch, 0), card_text(&fetch, 0));
        // Terminal states ignore the spinner tick entirely
        assert_eq!(card_text(&fetch, 0), card_text(&fetch, 7));
        assert_eq!(card_text(&FetchState::Failed, 0), card_text(&FetchState::Failed, 3));
    }

    #[test]
    fn test_highlight_json_preserves_text() {
        let pretty = serde_json::to_string_pretty(&serde_json::json!({
            "name": "east end",
            "count": 3,
            "live": true,
            "tags": [null, -1.5]
        }))
        .unwrap();
        let rebuilt = highlight_json(&pretty)
            .iter()
            .map(line_text)
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(rebuilt, pretty);
    }
}
