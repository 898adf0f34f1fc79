//! Popup presenter
//!
//! One modal at a time, driven by an explicit state machine: opening a popup
//! replaces whatever was on screen, closing returns to `Closed`. Dismissal
//! paths are the header close control, the footer Close button on the match
//! summary, a click on the backdrop, and Escape.

use eframe::egui::{self, Color32, RichText};

use super::feed::source_badge;
use crate::core::matcher::SourceMatches;

const NO_QUOTES_TITLE: &str = "No Quotes Found";
const NO_QUOTES_MESSAGE: &str = "This post doesn't contain any text in single quotes.";
const NO_MATCHES_TITLE: &str = "No Matches Found";
const NO_MATCHES_MESSAGE: &str = "The quoted text doesn't match any verified sources.";
const RESULTS_TITLE: &str = "Quote Verification Results";

const POPUP_WIDTH: f32 = 440.0;

/// Popup flavor, mapped to the title accent color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupKind {
    Info,
    Warning,
    Success,
}

impl PopupKind {
    fn accent(self) -> Color32 {
        match self {
            PopupKind::Info => Color32::from_rgb(96, 165, 250),
            PopupKind::Warning => Color32::from_rgb(245, 158, 11),
            PopupKind::Success => Color32::from_rgb(74, 222, 128),
        }
    }
}

/// Body content of a popup
#[derive(Debug, Clone)]
pub enum PopupBody {
    /// Plain status message
    Message(String),
    /// Match summary, one block per source title
    Matches(Vec<SourceMatches>),
}

/// A popup ready to render
#[derive(Debug, Clone)]
pub struct Popup {
    pub title: String,
    pub kind: PopupKind,
    pub body: PopupBody,
}

impl Popup {
    /// Generic message popup
    pub fn message(title: &str, text: &str, kind: PopupKind) -> Self {
        Self {
            title: title.to_string(),
            kind,
            body: PopupBody::Message(text.to_string()),
        }
    }

    /// Info popup for posts without any quoted text
    pub fn no_quotes() -> Self {
        Self::message(NO_QUOTES_TITLE, NO_QUOTES_MESSAGE, PopupKind::Info)
    }

    /// Warning popup for quotes that match no verified source
    pub fn no_matches() -> Self {
        Self::message(NO_MATCHES_TITLE, NO_MATCHES_MESSAGE, PopupKind::Warning)
    }

    /// Success popup summarizing grouped matches
    pub fn match_summary(groups: Vec<SourceMatches>) -> Self {
        Self {
            title: RESULTS_TITLE.to_string(),
            kind: PopupKind::Success,
            body: PopupBody::Matches(groups),
        }
    }
}

/// Popup visibility state.
///
/// The enum guarantees at most one popup exists: opening a new one replaces
/// the current one wholesale.
#[derive(Debug, Clone, Default)]
pub enum PopupState {
    #[default]
    Closed,
    Open(Popup),
}

impl PopupState {
    /// Replace any current popup with `popup`
    pub fn open(&mut self, popup: Popup) {
        *self = PopupState::Open(popup);
    }

    /// Dismiss the current popup, if any
    pub fn close(&mut self) {
        *self = PopupState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, PopupState::Open(_))
    }
}

/// Modal renderer for the active popup
pub struct PopupOverlay;

impl PopupOverlay {
    /// Render the active popup, if any, and apply its dismissal paths
    pub fn show(ctx: &egui::Context, state: &mut PopupState) {
        let PopupState::Open(popup) = state.clone() else {
            return;
        };

        let mut close_clicked = false;
        let modal = egui::Modal::new(egui::Id::new("veriquote_popup")).show(ctx, |ui| {
            ui.set_width(POPUP_WIDTH);

            close_clicked |= Self::show_header(ui, &popup);
            ui.separator();
            ui.add_space(4.0);

            match &popup.body {
                PopupBody::Message(text) => {
                    ui.label(text.as_str());
                    ui.add_space(4.0);
                }
                PopupBody::Matches(groups) => {
                    close_clicked |= Self::show_matches(ui, groups);
                }
            }
        });

        // Backdrop click or Escape also dismisses.
        if close_clicked || modal.should_close() {
            state.close();
        }
    }

    /// Title row with the kind accent and the close control. Returns true
    /// when the close control was clicked.
    fn show_header(ui: &mut egui::Ui, popup: &Popup) -> bool {
        let mut close = false;
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(&popup.title)
                    .size(18.0)
                    .color(popup.kind.accent())
                    .strong(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("\u{2715}").on_hover_text("Close").clicked() {
                    close = true;
                }
            });
        });
        close
    }

    /// Match-summary body: count line, one block per source title, footer
    /// Close button. Returns true when Close was clicked.
    fn show_matches(ui: &mut egui::Ui, groups: &[SourceMatches]) -> bool {
        let total: usize = groups.iter().map(|group| group.quotes.len()).sum();
        ui.label(RichText::new(match_count_line(total, groups.len())).strong());
        ui.add_space(8.0);

        egui::ScrollArea::vertical()
            .id_salt("popup_matches_scroll")
            .max_height(320.0)
            .show(ui, |ui| {
                for group in groups {
                    Self::show_group(ui, group);
                }
            });

        ui.add_space(8.0);
        ui.vertical_centered(|ui| ui.button("Close").clicked()).inner
    }

    /// One block of source metadata plus the quotes attributed to it
    fn show_group(ui: &mut egui::Ui, group: &SourceMatches) {
        egui::Frame::new()
            .fill(Color32::from_rgb(35, 35, 40))
            .stroke(egui::Stroke::new(1.0, Color32::from_rgb(60, 60, 60)))
            .inner_margin(egui::Margin::same(8))
            .outer_margin(egui::Margin::symmetric(0, 4))
            .corner_radius(egui::CornerRadius::same(4))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.label(RichText::new(&group.source.title).size(16.0).strong());
                ui.horizontal(|ui| {
                    source_badge(ui, &group.source.source);
                    ui.label(
                        RichText::new(&group.source.created_date)
                            .color(Color32::from_rgb(128, 128, 128)),
                    );
                });

                ui.add_space(4.0);
                ui.label(RichText::new("Quotes found:").strong());
                for quote in &group.quotes {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(format!("\u{2022} \"{}\"", quote));
                    });
                }
            });
    }
}

/// Count line of the match summary; the `s` suffix is appended exactly when
/// the count exceeds 1
fn match_count_line(quotes: usize, sources: usize) -> String {
    format!(
        "Found {} quote{} in {} verified source{}:",
        quotes,
        plural_s(quotes),
        sources,
        plural_s(sources)
    )
}

fn plural_s(n: usize) -> &'static str {
    if n > 1 {
        "s"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::source::SourceDocument;

    fn group(title: &str, quotes: &[&str]) -> SourceMatches {
        SourceMatches {
            source: SourceDocument {
                title: title.to_string(),
                source: "Outlet".to_string(),
                created_date: "2024-01-01".to_string(),
                content: String::new(),
                verified: true,
            },
            quotes: quotes.iter().map(|q| q.to_string()).collect(),
        }
    }

    #[test]
    fn test_default_state_is_closed() {
        assert!(!PopupState::default().is_open());
    }

    #[test]
    fn test_opening_twice_leaves_only_the_second() {
        let mut state = PopupState::default();
        state.open(Popup::no_quotes());
        state.open(Popup::no_matches());

        let PopupState::Open(popup) = &state else {
            panic!("expected an open popup");
        };
        assert_eq!(popup.title, NO_MATCHES_TITLE);
        assert_eq!(popup.kind, PopupKind::Warning);
    }

    #[test]
    fn test_close_dismisses_and_is_idempotent() {
        let mut state = PopupState::default();
        state.open(Popup::no_quotes());
        state.close();
        assert!(!state.is_open());

        state.close();
        assert!(!state.is_open());
    }

    #[test]
    fn test_no_quotes_popup_shape() {
        let popup = Popup::no_quotes();
        assert_eq!(popup.title, "No Quotes Found");
        assert_eq!(popup.kind, PopupKind::Info);

        let PopupBody::Message(text) = &popup.body else {
            panic!("expected a message body");
        };
        assert_eq!(text, "This post doesn't contain any text in single quotes.");
    }

    #[test]
    fn test_no_matches_popup_shape() {
        let popup = Popup::no_matches();
        assert_eq!(popup.title, "No Matches Found");
        assert_eq!(popup.kind, PopupKind::Warning);

        let PopupBody::Message(text) = &popup.body else {
            panic!("expected a message body");
        };
        assert_eq!(text, "The quoted text doesn't match any verified sources.");
    }

    #[test]
    fn test_match_summary_popup_shape() {
        let popup = Popup::match_summary(vec![group("T", &["q"])]);
        assert_eq!(popup.title, "Quote Verification Results");
        assert_eq!(popup.kind, PopupKind::Success);
        assert!(matches!(popup.body, PopupBody::Matches(ref groups) if groups.len() == 1));
    }

    #[test]
    fn test_count_line_pluralization() {
        assert_eq!(match_count_line(1, 1), "Found 1 quote in 1 verified source:");
        assert_eq!(
            match_count_line(2, 1),
            "Found 2 quotes in 1 verified source:"
        );
        assert_eq!(
            match_count_line(3, 2),
            "Found 3 quotes in 2 verified sources:"
        );
    }
}
