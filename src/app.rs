//! Main application state and UI coordination

use eframe::egui;

use crate::core::config::AppConfig;
use crate::core::matcher::{self, MatchOutcome};
use crate::core::post::{self, Post};
use crate::core::source::SourceLibrary;
use crate::ui::feed::{FeedPanel, LoadMoreProbe};
use crate::ui::popup::{Popup, PopupOverlay, PopupState};
use crate::ui::reveal::RevealAnimator;

/// Main application state
pub struct VeriquoteApp {
    /// Application configuration
    pub config: AppConfig,
    /// Verified source documents, loaded once at startup
    pub sources: SourceLibrary,
    /// The full feed
    pub posts: Vec<Post>,
    /// Posts currently rendered, after any search filtering
    pub visible_posts: Vec<Post>,
    /// Current search query
    pub search_query: String,
    /// The popup, at most one at a time
    pub popup: PopupState,
    /// Reveal-on-scroll animation state
    pub reveal: RevealAnimator,
    /// Debounce state for the load-more stub
    pub load_more: LoadMoreProbe,
}

impl VeriquoteApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self::configure_style(&cc.egui_ctx);

        // Load config or use defaults
        let config = AppConfig::load().unwrap_or_default();

        // Sources load before the first frame, so a click can never
        // observe a partially loaded library.
        let sources = SourceLibrary::load_or_empty(&config.sources_dir);

        Self::with_sources(config, sources)
    }

    /// Build the application state from already-loaded sources
    fn with_sources(config: AppConfig, sources: SourceLibrary) -> Self {
        let mut app = Self {
            config,
            sources,
            posts: post::sample_posts(),
            visible_posts: Vec::new(),
            search_query: String::new(),
            popup: PopupState::default(),
            reveal: RevealAnimator::new(),
            load_more: LoadMoreProbe::default(),
        };
        app.reload_feed();
        app
    }

    fn configure_style(ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        });
    }

    /// Rebuild the full feed, clearing any active search
    pub fn reload_feed(&mut self) {
        self.search_query.clear();
        self.visible_posts = self.posts.clone();
        self.reveal.reset();
        tracing::debug!("Feed rebuilt with {} posts", self.visible_posts.len());
    }

    /// Set the search query and re-render the feed
    pub fn search(&mut self, query: &str) {
        self.search_query = query.to_string();
        self.apply_search();
    }

    /// Re-render the feed for the current search query
    pub fn apply_search(&mut self) {
        self.visible_posts = post::filter_posts(&self.posts, &self.search_query);
        self.reveal.reset();
    }

    /// Check a post's quoted text against the sources and show the outcome
    pub fn check_post(&mut self, content: &str) {
        let popup = match matcher::check_quotes(content, self.sources.documents()) {
            MatchOutcome::NoQuotes => Popup::no_quotes(),
            MatchOutcome::NoMatches => Popup::no_matches(),
            MatchOutcome::Matches(matches) => {
                tracing::info!("Found {} quote match(es) in verified sources", matches.len());
                Popup::match_summary(matcher::group_by_source(&matches))
            }
        };
        self.popup.open(popup);
    }

    /// Dismiss the popup if one is showing
    pub fn close_popup(&mut self) {
        self.popup.close();
    }

    /// Pagination stub; the demo feed has nothing more to fetch
    pub fn load_more_posts(&mut self) {
        tracing::info!("Loading more posts...");
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Feed", |ui| {
                    if ui.button("Reload Feed").clicked() {
                        self.reload_feed();
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    let toggled = ui
                        .checkbox(&mut self.config.ui.animate_posts, "Animate Posts")
                        .changed();
                    if toggled {
                        if let Err(e) = self.config.save() {
                            tracing::error!("Failed to save config: {}", e);
                        }
                        ui.close();
                    }
                });
            });
        });
    }
}

impl eframe::App for VeriquoteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle keyboard shortcuts
        ctx.input(|i| {
            if i.modifiers.ctrl && i.key_pressed(egui::Key::R) {
                self.reload_feed();
            }
            if i.key_pressed(egui::Key::Escape) {
                self.close_popup();
            }
        });

        // Render menu bar
        self.render_menu_bar(ctx);

        // Render the feed
        egui::CentralPanel::default().show(ctx, |ui| {
            FeedPanel::show(ui, self);
        });

        // Rendered last so it sits above the feed
        PopupOverlay::show(ctx, &mut self.popup);
    }
}
