//! # WeatherView Component
//!
//! ```text
//! ┌ Weather ─────────────────────────────────────────────┐
//! │ City: Da Nang▏                                       │
//! └──────────────────────────── Enter search · Ctrl+L ───┘
//! ┌──────────────────────────────────┐┌ Favorites ───────┐
//! │ ☀ Da Nang, VN                    ││ Hanoi            │
//! │ 31.2°C  feels like 35°C          │└──────────────────┘
//! │ ...                              │┌ Diagnostics ─────┐
//! ├ 5-day forecast ──────────────────┤│ key  1a2b3c4d... │
//! │ Mon ☀ 30°  Tue ☁ 28° ...         ││ ...              │
//! └──────────────────────────────────┘└──────────────────┘
//! ```
//!
//! The diagnostics panel only appears while the last lookup failed. Demo
//! data is always labelled as such, with the reason it is being shown.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap};

use crate::core::pages::WeatherPage;
use crate::core::pages::weather::{PROBE_CITY, TemperatureBand, WeatherFocus};
use crate::providers::types::{ForecastEntry, WeatherReport};
use crate::tui::component::Component;
use crate::tui::components::FetchStatus;
use crate::tui::components::fetch_status::spinner;
use crate::tui::theme::Theme;

/// Single-column glyph for an OpenWeatherMap icon code like "10d".
pub fn icon_glyph(icon: &str) -> &'static str {
    match icon.get(..2) {
        Some("01") => "☀",
        Some("02") | Some("03") | Some("04") => "☁",
        Some("09") | Some("10") => "☂",
        Some("11") => "↯",
        Some("13") => "❄",
        Some("50") => "≋",
        _ => "?",
    }
}

pub struct WeatherView<'a> {
    page: &'a WeatherPage,
    spinner_frame: usize,
    theme: Theme,
}

impl<'a> WeatherView<'a> {
    pub fn new(page: &'a WeatherPage, spinner_frame: usize, theme: Theme) -> Self {
        Self {
            page,
            spinner_frame,
            theme,
        }
    }

    fn render_search(&self, frame: &mut Frame, area: Rect) {
        let focused = self.page.focus == WeatherFocus::Search;
        let border_style = if focused {
            self.theme.border().fg(self.theme.accent)
        } else {
            self.theme.border()
        };
        let cursor = if focused { "▏" } else { "" };
        let mut spans = vec![
            Span::styled("City: ", self.theme.muted()),
            Span::styled(format!("{}{cursor}", self.page.input), self.theme.text()),
        ];
        if self.page.locating.is_some() {
            spans.push(Span::styled(
                format!("   {} Finding your location...", spinner(self.spinner_frame)),
                self.theme.accent(),
            ));
        } else if let Some(error) = &self.page.location_error {
            spans.push(Span::styled(
                format!("   {error}"),
                self.theme.text().fg(self.theme.error),
            ));
        }

        let search = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(" Weather ")
                .title_bottom(
                    Line::from(Span::styled(
                        " Enter search · Ctrl+L my location ",
                        self.theme.muted(),
                    ))
                    .right_aligned(),
                ),
        );
        frame.render_widget(search, area);
    }

    fn current_lines(&self, report: &WeatherReport) -> Vec<Line<'static>> {
        let current = &report.current;
        let mut lines = Vec::new();
        if report.is_demo {
            lines.push(Line::from(Span::styled(
                " DEMO DATA ",
                self.theme.selected().fg(self.theme.warning),
            )));
            if let Some(reason) = self.page.view.notice() {
                lines.push(Line::from(Span::styled(
                    reason.to_string(),
                    self.theme.text().fg(self.theme.warning),
                )));
            }
            lines.push(Line::default());
        }

        let place = match &current.country {
            Some(country) => format!("{}, {}", current.name, country),
            None => current.name.clone(),
        };
        let favorite = if self.page.view.current_is_favorite() {
            "  ♥"
        } else {
            ""
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", icon_glyph(&current.icon)), self.theme.accent()),
            Span::styled(place, self.theme.accent().add_modifier(Modifier::UNDERLINED)),
            Span::styled(favorite, self.theme.text().fg(self.theme.error)),
        ]));
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:.1}°C", current.temp),
                self.theme.temperature(TemperatureBand::from_celsius(current.temp)),
            ),
            Span::styled(
                format!("  feels like {:.0}°C", current.feels_like),
                self.theme.muted(),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            current.description.clone(),
            self.theme.text(),
        )));
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("Humidity ", self.theme.muted()),
            Span::styled(format!("{}%", current.humidity), self.theme.text()),
            Span::styled("   Pressure ", self.theme.muted()),
            Span::styled(format!("{} hPa", current.pressure), self.theme.text()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Wind ", self.theme.muted()),
            Span::styled(format!("{:.1} m/s", current.wind_speed), self.theme.text()),
            Span::styled("   Visibility ", self.theme.muted()),
            Span::styled(
                format!("{:.1} km", f64::from(current.visibility) / 1000.0),
                self.theme.text(),
            ),
        ]));
        lines
    }

    fn forecast_cell(&self, entry: &ForecastEntry) -> Vec<Span<'static>> {
        vec![
            Span::styled(format!("{} ", entry.dt.format("%a")), self.theme.muted()),
            Span::styled(format!("{} ", icon_glyph(&entry.icon)), self.theme.accent()),
            Span::styled(
                format!("{:.0}°", entry.temp),
                self.theme.temperature(TemperatureBand::from_celsius(entry.temp)),
            ),
            Span::raw("   "),
        ]
    }

    fn render_report(&self, frame: &mut Frame, area: Rect) {
        if let Some(mut status) =
            FetchStatus::for_state(self.page.view.state(), "weather", self.spinner_frame, self.theme)
        {
            status.render(frame, area);
            return;
        }
        let Some(report) = self.page.view.current() else {
            return;
        };

        let [current_area, forecast_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(area);

        let current = Paragraph::new(self.current_lines(report))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.border())
                    .padding(Padding::horizontal(1)),
            );
        frame.render_widget(current, current_area);

        let cells: Vec<Span> = report
            .forecast
            .iter()
            .flat_map(|entry| self.forecast_cell(entry))
            .collect();
        let forecast = Paragraph::new(Line::from(cells)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.border())
                .title(" 5-day forecast ")
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(forecast, forecast_area);
    }

    fn render_favorites(&self, frame: &mut Frame, area: Rect) {
        let focused = self.page.focus == WeatherFocus::Favorites;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if focused {
                self.theme.border().fg(self.theme.accent)
            } else {
                self.theme.border()
            })
            .title(" Favorites ")
            .padding(Padding::horizontal(1));

        let favorites = self.page.view.favorites();
        if favorites.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled("Ctrl+F saves the current city", self.theme.muted()))
                    .wrap(Wrap { trim: true })
                    .block(block),
                area,
            );
            return;
        }

        let items: Vec<ListItem> = favorites
            .items()
            .iter()
            .map(|report| {
                ListItem::new(Line::from(vec![
                    Span::styled(report.current.name.clone(), self.theme.text()),
                    Span::styled(format!("  {:.0}°C", report.current.temp), self.theme.muted()),
                ]))
            })
            .collect();
        let mut list = List::new(items).block(block);
        if focused {
            list = list.highlight_style(self.theme.selected());
        }
        let mut state = ListState::default().with_selected(Some(self.page.favorite_selected));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_diagnostics(&self, frame: &mut Frame, area: Rect) {
        let Some(diagnostics) = self.page.diagnostics() else {
            return;
        };
        let mut lines = vec![
            Line::from(vec![
                Span::styled("API key  ", self.theme.muted()),
                Span::styled(diagnostics.masked_key.to_string(), self.theme.text()),
            ]),
            Line::from(vec![
                Span::styled("City     ", self.theme.muted()),
                Span::styled(diagnostics.city, self.theme.text()),
            ]),
            Line::from(vec![
                Span::styled("Error    ", self.theme.muted()),
                Span::styled(
                    diagnostics.error.to_string(),
                    self.theme.text().fg(self.theme.error),
                ),
            ]),
            Line::default(),
        ];
        if self.page.probing.is_some() {
            lines.push(Line::from(Span::styled(
                format!("{} Testing with {PROBE_CITY}...", spinner(self.spinner_frame)),
                self.theme.accent(),
            )));
        } else {
            lines.push(Line::from(Span::styled("Ctrl+R retest", self.theme.muted())));
            lines.push(Line::from(Span::styled(
                format!("Ctrl+T test with {PROBE_CITY}"),
                self.theme.muted(),
            )));
        }

        let panel = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.border().fg(self.theme.error))
                .title(" Diagnostics ")
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(panel, area);
    }
}

impl Component for WeatherView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [search_area, body_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
        self.render_search(frame, search_area);

        let [report_area, side_area] =
            Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)])
                .areas(body_area);
        self.render_report(frame, report_area);

        if self.page.diagnostics().is_some() {
            let [favorites_area, diagnostics_area] =
                Layout::vertical([Constraint::Percentage(40), Constraint::Percentage(60)])
                    .areas(side_area);
            self.render_favorites(frame, favorites_area);
            self.render_diagnostics(frame, diagnostics_area);
        } else {
            self.render_favorites(frame, side_area);
        }
    }
}
