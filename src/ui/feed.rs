//! Feed panel: post cards, search, and scroll-driven behavior

use eframe::egui::{self, Color32, CursorIcon, RichText, Sense};

use super::reveal::RevealEffect;
use crate::app::VeriquoteApp;
use crate::core::post::Post;

/// Scroll distance from the bottom, in points, inside which the load-more
/// stub fires
const LOAD_MORE_MARGIN: f32 = 1000.0;
/// Minimum seconds between load-more triggers
const LOAD_MORE_DEBOUNCE: f64 = 1.0;

/// Debounce state for the load-more stub
#[derive(Debug, Default)]
pub struct LoadMoreProbe {
    last_trigger: Option<f64>,
}

impl LoadMoreProbe {
    /// True at most once per debounce window while `near_bottom` holds
    pub fn should_trigger(&mut self, near_bottom: bool, now: f64) -> bool {
        if !near_bottom {
            return false;
        }
        match self.last_trigger {
            Some(t) if now - t < LOAD_MORE_DEBOUNCE => false,
            _ => {
                self.last_trigger = Some(now);
                true
            }
        }
    }
}

/// The post feed panel
pub struct FeedPanel;

impl FeedPanel {
    /// Show the feed panel
    pub fn show(ui: &mut egui::Ui, app: &mut VeriquoteApp) {
        ui.vertical(|ui| {
            Self::show_header(ui, app);
            ui.separator();
            Self::show_posts(ui, app);
        });
    }

    /// Header row: title, search field, reload button
    fn show_header(ui: &mut egui::Ui, app: &mut VeriquoteApp) {
        ui.horizontal(|ui| {
            ui.heading("Feed");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("\u{21BB}").on_hover_text("Reload feed").clicked() {
                    app.reload_feed();
                }

                let response = ui.add(
                    egui::TextEdit::singleline(&mut app.search_query)
                        .hint_text("Search posts")
                        .desired_width(220.0),
                );
                if response.changed() {
                    app.apply_search();
                }
            });
        });
    }

    /// The scrollable post list
    fn show_posts(ui: &mut egui::Ui, app: &mut VeriquoteApp) {
        let posts = app.visible_posts.clone();
        let animate = app.config.ui.animate_posts;
        let feed_width = app.config.ui.feed_width;
        let now = ui.input(|i| i.time);

        let mut clicked: Option<String> = None;

        let output = egui::ScrollArea::vertical()
            .id_salt("feed_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if posts.is_empty() {
                    Self::show_empty(ui);
                    return;
                }

                ui.vertical_centered(|ui| {
                    ui.set_max_width(feed_width);

                    for post in &posts {
                        let effect = if animate {
                            app.reveal.effect(post.id, now)
                        } else {
                            RevealEffect::REST
                        };

                        ui.add_space(effect.offset);
                        let scope = ui.scope(|ui| {
                            ui.multiply_opacity(effect.opacity);
                            Self::show_card(ui, post)
                        });

                        if let Some(content) = scope.inner {
                            clicked = Some(content);
                        }

                        // Visibility is observed a frame in arrears.
                        if animate {
                            let fraction =
                                visible_fraction(scope.response.rect, ui.clip_rect());
                            app.reveal.observe(post.id, fraction, now);
                        }
                    }
                });
            });

        if let Some(content) = clicked {
            app.check_post(&content);
        }

        // The stub only fires while the feed overflows its viewport and the
        // scroll offset sits near the bottom.
        let near_bottom = output.content_size.y > output.inner_rect.height()
            && output.state.offset.y + output.inner_rect.height()
                >= output.content_size.y - LOAD_MORE_MARGIN;
        if app.load_more.should_trigger(near_bottom, now) {
            app.load_more_posts();
        }

        if animate && app.reveal.is_animating(now) {
            ui.ctx().request_repaint();
        }
    }

    /// One post card. Returns the post content when its content region was
    /// clicked.
    fn show_card(ui: &mut egui::Ui, post: &Post) -> Option<String> {
        let mut clicked = None;

        egui::Frame::new()
            .fill(Color32::from_rgb(30, 30, 34))
            .stroke(egui::Stroke::new(1.0, Color32::from_rgb(55, 55, 60)))
            .inner_margin(egui::Margin::same(12))
            .outer_margin(egui::Margin::symmetric(0, 6))
            .corner_radius(egui::CornerRadius::same(6))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                source_badge(ui, &post.source);
                ui.add_space(6.0);

                let response = ui
                    .add(
                        egui::Label::new(RichText::new(&post.content).size(15.0))
                            .wrap()
                            .sense(Sense::click()),
                    )
                    .on_hover_cursor(CursorIcon::PointingHand)
                    .on_hover_text("Check quotes against verified sources");

                if response.clicked() {
                    clicked = Some(post.content.clone());
                }
            });

        clicked
    }

    /// Placeholder for an empty (or fully filtered) feed
    fn show_empty(ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(RichText::new("No posts to show").color(Color32::from_rgb(128, 128, 128)));
        });
    }
}

/// Small rounded label used for post authors and source outlets
pub fn source_badge(ui: &mut egui::Ui, text: &str) {
    egui::Frame::new()
        .fill(Color32::from_rgb(45, 55, 75))
        .inner_margin(egui::Margin::symmetric(6, 2))
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.label(
                RichText::new(text)
                    .size(12.0)
                    .color(Color32::from_rgb(170, 200, 255)),
            );
        });
}

/// Fraction of `rect`'s height currently inside `clip`
fn visible_fraction(rect: egui::Rect, clip: egui::Rect) -> f32 {
    if rect.height() <= 0.0 {
        return 0.0;
    }
    let overlap = (rect.bottom().min(clip.bottom()) - rect.top().max(clip.top())).max(0.0);
    overlap / rect.height()
}
