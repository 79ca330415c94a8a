//! Result cards
//!
//! Maps the last response to a list of cards. The conditional pieces
//! (similarity badge, body text, link affordance) live in small helpers so
//! the mode rules are testable without a renderer.

use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length, Padding};

use crate::backend::types::{SearchMode, SearchResult};
use crate::ui::theme;

const NO_EXPLANATION: &str = "No explanation available.";
const NO_PROFILE: &str = "No profile information available.";

/// Scrollable list with one card per result, in backend order.
pub fn view<'a, Message: Clone + 'a>(
    results: &'a [SearchResult],
    mode: SearchMode,
    on_open: fn(String) -> Message,
) -> Element<'a, Message> {
    let cards = results
        .iter()
        .map(|result| card(result, mode, on_open))
        .collect::<Vec<_>>();

    scrollable(column(cards).spacing(12))
        .height(Length::Fill)
        .into()
}

/// Notice card shown when a search came back empty.
pub fn no_results<'a, Message: 'a>() -> Element<'a, Message> {
    container(
        text("No results found for your search query.")
            .size(15)
            .color(theme::TEXT_MUTED),
    )
    .center_x(Length::Fill)
    .padding(24)
    .style(theme::card)
    .into()
}

fn card<'a, Message: Clone + 'a>(
    result: &'a SearchResult,
    mode: SearchMode,
    on_open: fn(String) -> Message,
) -> Element<'a, Message> {
    let heading = column![
        text(&result.name).size(17).color(theme::TEXT),
        text(format!("{} • {}", result.category, result.label))
            .size(13)
            .color(theme::TEXT_MUTED),
    ]
    .spacing(2)
    .width(Length::Fill);

    let mut header = row![heading].spacing(12).align_y(Alignment::Center);

    if let Some(label) = similarity_badge(result, mode) {
        header = header.push(
            container(text(label).size(13))
                .padding(Padding::from([4.0, 8.0]))
                .style(theme::badge),
        );
    }

    if let Some(url) = external_url(result) {
        header = header.push(
            button(text("↗").size(18))
                .style(theme::link_button)
                .on_press(on_open(url.to_string())),
        );
    }

    let body = text(body_text(result, mode)).size(14).color(theme::TEXT);

    container(column![header, body].spacing(10))
        .padding(16)
        .width(Length::Fill)
        .style(theme::card)
        .into()
}

/// Badge text, only in vector mode and only when the backend scored the hit.
fn similarity_badge(result: &SearchResult, mode: SearchMode) -> Option<String> {
    match mode {
        SearchMode::Vector => result.similarity.map(similarity_label),
        SearchMode::Traditional => None,
    }
}

/// `0.873` formats as `87.3% Match`. Out-of-range scores pass through
/// unclamped; the backend already clamps vector scores to [0, 1].
fn similarity_label(similarity: f64) -> String {
    format!("{:.1}% Match", similarity * 100.0)
}

/// Card body for the active mode, with the portal's fixed placeholders.
fn body_text(result: &SearchResult, mode: SearchMode) -> &str {
    match mode {
        SearchMode::Vector => text_or(&result.explanation, NO_EXPLANATION),
        SearchMode::Traditional => text_or(&result.profile_chunk, NO_PROFILE),
    }
}

/// Treat empty strings like missing fields; the backend emits both.
fn text_or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    match value.as_deref() {
        Some(value) if !value.is_empty() => value,
        _ => fallback,
    }
}

/// Link target, if the result carries one.
fn external_url(result: &SearchResult) -> Option<&str> {
    result.url.as_deref().filter(|url| !url.is_empty())
}
