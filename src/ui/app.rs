use eframe::egui;

use crate::feed::Feed;

use super::components::stories_bar::{self, StoriesAction};
use super::state::AppState;

pub struct StoriesApp {
    state: AppState,
}

impl StoriesApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, feed: Feed) -> Self {
        Self {
            state: AppState::new(feed),
        }
    }

    fn handle_action(&mut self, action: StoriesAction) {
        match action {
            StoriesAction::CreateStory => {
                log::info!("Opening story composer");
                self.state.composer.get_or_insert_with(String::new);
            }
            StoriesAction::OpenUser(user) => {
                log::info!("Opening stories from {}", user.display_name);
                self.state.viewing = Some(user);
            }
        }
    }

    /// Viewer stand-in: lists the selected user's captions. Playback lives
    /// in a collaborator this app does not implement.
    fn show_viewer(&mut self, ui: &mut egui::Ui) {
        let Some(user) = self.state.viewing.clone() else {
            return;
        };

        ui.separator();
        ui.horizontal(|ui| {
            ui.heading(format!("{}'s stories", user.display_name));
            if ui.button("Close").clicked() {
                self.state.viewing = None;
            }
        });
        for story in self.state.stories_by(&user.id) {
            ui.label(&story.content);
        }
    }

    fn show_composer(&mut self, ctx: &egui::Context) {
        let Some(draft) = self.state.composer.as_mut() else {
            return;
        };

        let mut post = false;
        let mut open = true;
        let mut cancelled = false;
        egui::Window::new("New Story")
            .collapsible(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.text_edit_multiline(draft);
                ui.horizontal(|ui| {
                    if ui.button("Post").clicked() && !draft.is_empty() {
                        post = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                });
            });
        open &= !cancelled;

        if post {
            let content = self.state.composer.take().unwrap_or_default();
            self.state.add_story(content);
        } else if !open {
            self.state.composer = None;
        }
    }
}

impl eframe::App for StoriesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let action = stories_bar::render(
                ui,
                &self.state.stories,
                &self.state.users,
                &self.state.current_user,
            );
            if let Some(action) = action {
                self.handle_action(action);
            }

            self.show_viewer(ui);
        });

        self.show_composer(ctx);
    }
}
