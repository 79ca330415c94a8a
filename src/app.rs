//! Core application state and Iced implementation
//!
//! One state struct, one message enum, `update` as the only mutation path,
//! `view` as a pure render. The single async suspension point is the search
//! request, bridged back into the loop as a settlement message.

use iced::widget::{button, column, container, pick_list, row, text, text_input, Space};
use iced::{Alignment, Background, Border, Element, Length, Padding, Task, Theme};

use crate::backend::api::BackendClient;
use crate::backend::types::{HealthResponse, SearchMode, SearchResult};
use crate::config::Config;
use crate::native;
use crate::ui::{results, theme};

// ============================================================================
// UI State Types
// ============================================================================

/// What the area below the search card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsPane {
    /// Nothing: no query typed yet, or a first search still in flight.
    Hidden,
    /// The last search came back empty.
    NoMatches,
    /// One card per result.
    Matches,
}

// ============================================================================
// Application State
// ============================================================================

pub struct Portal {
    query: String,
    mode: SearchMode,
    results: Vec<SearchResult>,
    loading: bool,
    backend: BackendClient,
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    ModeSelected(SearchMode),
    SearchSubmitted,
    SearchCompleted(Vec<SearchResult>),
    SearchFailed(String),
    LinkPressed(String),
    BackendProbed(Result<HealthResponse, String>),
}

impl Default for Portal {
    fn default() -> Self {
        let config = Config::from_env();
        Self {
            query: String::new(),
            mode: SearchMode::default(),
            results: Vec::new(),
            loading: false,
            backend: BackendClient::new(&config.origin),
        }
    }
}

impl Portal {
    /// Initial state plus a one-shot backend health probe.
    pub fn boot() -> (Self, Task<Message>) {
        let portal = Self::default();
        let backend = portal.backend.clone();
        let probe = Task::perform(
            async move { backend.health().await.map_err(|e| e.to_string()) },
            Message::BackendProbed,
        );
        (portal, probe)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(query) => {
                self.query = query;
                Task::none()
            }

            // Mode only changes how results are interpreted; it neither
            // clears them nor re-dispatches. Stale cards re-render under the
            // new mode's field selection.
            Message::ModeSelected(mode) => {
                self.mode = mode;
                Task::none()
            }

            Message::SearchSubmitted => self.dispatch(),

            Message::SearchCompleted(results) => {
                tracing::info!(hits = results.len(), "search completed");
                self.results = results;
                self.loading = false;
                Task::none()
            }

            Message::SearchFailed(error) => {
                // Stale results stay put; the user only sees the loading
                // indicator clear.
                tracing::error!("Search failed: {}", error);
                self.loading = false;
                Task::none()
            }

            Message::LinkPressed(url) => {
                if let Err(error) = native::open_url(&url) {
                    tracing::warn!("{}", error);
                }
                Task::none()
            }

            Message::BackendProbed(Ok(health)) => {
                tracing::info!(status = %health.status, "backend reachable");
                Task::none()
            }

            Message::BackendProbed(Err(error)) => {
                tracing::warn!("Backend health check failed: {}", error);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = column![
            text("Expert Search Portal").size(26).color(theme::TEXT),
            text("Search through our database of experts using natural language")
                .size(14)
                .color(theme::TEXT_MUTED),
        ]
        .spacing(4);

        let mode_select = pick_list(SearchMode::ALL, Some(self.mode), Message::ModeSelected)
            .placeholder("Select Search Mode")
            .padding(Padding::from([10.0, 12.0]))
            .width(190);

        let query_input = text_input("Enter your search query...", &self.query)
            .on_input(Message::QueryChanged)
            .on_submit(Message::SearchSubmitted)
            .padding(Padding::from([10.0, 12.0]))
            .size(15)
            .style(|_theme, _status| text_input::Style {
                background: Background::Color(theme::BACKGROUND),
                border: Border {
                    color: theme::BORDER,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                icon: theme::TEXT_MUTED,
                placeholder: theme::TEXT_PLACEHOLDER,
                value: theme::TEXT,
                selection: theme::PRIMARY,
            });

        // The trigger doubles as the loading indicator: the label swaps and
        // presses are ignored while a request is in flight. Enter in the
        // input stays live.
        let search_button = button(
            text(if self.loading { "Searching…" } else { "Search" }).size(15),
        )
        .style(theme::primary_button)
        .padding(Padding::from([10.0, 18.0]))
        .on_press_maybe((!self.loading).then_some(Message::SearchSubmitted));

        let controls = row![mode_select, query_input, search_button]
            .spacing(12)
            .align_y(Alignment::Center);

        let search_card = container(column![header, Space::with_height(16), controls])
            .padding(20)
            .width(Length::Fill)
            .style(theme::card);

        let results_pane: Element<'_, Message> = match self.results_pane() {
            ResultsPane::Matches => results::view(&self.results, self.mode, Message::LinkPressed),
            ResultsPane::NoMatches => results::no_results(),
            ResultsPane::Hidden => Space::with_height(0).into(),
        };

        let content = column![search_card, Space::with_height(16), results_pane];

        container(
            container(content)
                .max_width(840)
                .padding(24)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .center_x(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(theme::BACKGROUND)),
            ..Default::default()
        })
        .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    // ========================================================================
    // Business Logic
    // ========================================================================

    /// Fire one search for the current query and mode.
    fn dispatch(&mut self) -> Task<Message> {
        if self.query.trim().is_empty() {
            return Task::none();
        }

        self.loading = true;

        let backend = self.backend.clone();
        let mode = self.mode;
        let query = self.query.clone();
        tracing::info!(query = %query, mode = ?mode, "dispatching search");

        Task::perform(
            async move { backend.search(mode, &query).await },
            |outcome| match outcome {
                Ok(results) => Message::SearchCompleted(results),
                Err(error) => Message::SearchFailed(error.to_string()),
            },
        )
    }

    /// Display state of the area below the search card.
    fn results_pane(&self) -> ResultsPane {
        if !self.results.is_empty() {
            ResultsPane::Matches
        } else if !self.query.is_empty() && !self.loading {
            ResultsPane::NoMatches
        } else {
            ResultsPane::Hidden
        }
    }
}
