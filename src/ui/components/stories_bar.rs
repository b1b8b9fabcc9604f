use egui::{
    Align2, Color32, CursorIcon, FontId, Pos2, RichText, Sense, Stroke, Vec2, WidgetInfo,
    WidgetType,
};

use crate::common::{Story, User};

const AVATAR_RADIUS: f32 = 28.0;
const ENTRY_SIZE: Vec2 = Vec2::new(68.0, 92.0);
const LABEL_MAX_CHARS: usize = 9;

/// A click on the rail resolves to exactly one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum StoriesAction {
    /// The viewer wants to create a story. The self control always maps
    /// here, even when the viewer already has one.
    CreateStory,
    /// The viewer tapped another user's avatar.
    OpenUser(User),
}

enum Ring {
    /// Current user who already has a story.
    Highlight,
    /// Current user without one; drawn with the add badge.
    Neutral,
    /// Any other story owner. The gradient look of the source design is
    /// approximated by a solid accent stroke.
    Accent,
}

/// Renders the stories rail from a read-only snapshot. Empty `stories`
/// selects the call-to-action variant, anything else the populated rail.
pub fn render(
    ui: &mut egui::Ui,
    stories: &[Story],
    users: &[User],
    current_user: &User,
) -> Option<StoriesAction> {
    if stories.is_empty() {
        return render_empty(ui);
    }

    let mut action = None;

    ui.horizontal(|ui| {
        ui.heading("Stories");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(format!("{} active", stories.len())).weak());
        });
    });
    ui.add_space(4.0);

    let has_own_story = has_current_user_story(stories, current_user);
    egui::ScrollArea::horizontal()
        .id_salt("stories_rail")
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let ring = if has_own_story {
                    Ring::Highlight
                } else {
                    Ring::Neutral
                };
                // Always a create affordance, never a viewer.
                if avatar_entry(ui, current_user, ring, self_label(has_own_story)).clicked() {
                    action = Some(StoriesAction::CreateStory);
                }

                for user in rail_users(stories, users, current_user) {
                    if avatar_entry(ui, user, Ring::Accent, &user.first_name).clicked() {
                        action = Some(StoriesAction::OpenUser(user.clone()));
                    }
                }
            });
        });

    action
}

fn render_empty(ui: &mut egui::Ui) -> Option<StoriesAction> {
    let mut action = None;
    ui.vertical_centered(|ui| {
        ui.add_space(8.0);
        ui.label(RichText::new("📸").size(28.0));
        ui.label(RichText::new("No Stories Yet").strong());
        ui.label(RichText::new("Be the first to share your story!").weak());
        ui.add_space(4.0);
        if ui.button("Create Story").clicked() {
            action = Some(StoriesAction::CreateStory);
        }
        ui.add_space(8.0);
    });
    action
}

/// Deduplicated story owners, ordered by each owner's first story in
/// `stories`. A story whose `user_id` has no matching user is skipped.
pub fn story_users<'a>(stories: &[Story], users: &'a [User]) -> Vec<&'a User> {
    let mut owners: Vec<&User> = Vec::new();
    for story in stories {
        let Some(user) = users.iter().find(|user| user.id == story.user_id) else {
            continue;
        };
        if !owners.iter().any(|seen| seen.id == user.id) {
            owners.push(user);
        }
    }
    owners
}

/// True iff any story belongs to `current_user`, whether or not that id
/// resolves against `users`.
pub fn has_current_user_story(stories: &[Story], current_user: &User) -> bool {
    stories.iter().any(|story| story.user_id == current_user.id)
}

fn rail_users<'a>(stories: &[Story], users: &'a [User], current_user: &User) -> Vec<&'a User> {
    story_users(stories, users)
        .into_iter()
        .filter(|user| user.id != current_user.id)
        .collect()
}

fn self_label(has_story: bool) -> &'static str {
    if has_story { "Your Story" } else { "Add Story" }
}

fn avatar_entry(ui: &mut egui::Ui, user: &User, ring: Ring, label: &str) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(ENTRY_SIZE, Sense::click());
    let response = response.on_hover_cursor(CursorIcon::PointingHand);
    response.widget_info(|| WidgetInfo::labeled(WidgetType::Button, ui.is_enabled(), label));

    if !ui.is_rect_visible(rect) {
        return response;
    }

    // Hover/press scaling is cosmetic; nothing survives the frame.
    let grow = ui.ctx().animate_bool(response.id, response.hovered());
    let pressed = if response.is_pointer_button_down_on() {
        3.0
    } else {
        0.0
    };
    let radius = AVATAR_RADIUS + 2.0 * grow - pressed;

    let center = Pos2::new(rect.center().x, rect.top() + AVATAR_RADIUS + 6.0);
    let painter = ui.painter();

    painter.circle_stroke(center, radius + 3.0, Stroke::new(2.5, ring_color(&ring)));
    painter.circle_filled(center, radius, avatar_fill(user));
    painter.text(
        center,
        Align2::CENTER_CENTER,
        initials(user),
        FontId::proportional(18.0),
        Color32::WHITE,
    );

    match ring {
        Ring::Neutral => {
            let badge = center + Vec2::splat(radius * 0.75);
            painter.circle(
                badge,
                8.0,
                Color32::from_rgb(37, 99, 235),
                Stroke::new(2.0, Color32::WHITE),
            );
            painter.text(
                badge,
                Align2::CENTER_CENTER,
                "+",
                FontId::proportional(12.0),
                Color32::WHITE,
            );
        }
        Ring::Accent if user.is_online => {
            let dot = center + Vec2::splat(radius * 0.8);
            painter.circle(
                dot,
                5.0,
                Color32::from_rgb(16, 185, 129),
                Stroke::new(2.0, Color32::WHITE),
            );
        }
        _ => {}
    }

    painter.text(
        Pos2::new(rect.center().x, rect.bottom() - 10.0),
        Align2::CENTER_CENTER,
        truncate_label(label),
        FontId::proportional(12.0),
        ui.visuals().text_color(),
    );

    response
}

fn ring_color(ring: &Ring) -> Color32 {
    match ring {
        Ring::Highlight => Color32::from_rgb(168, 85, 247),
        Ring::Neutral => Color32::from_rgb(203, 213, 225),
        Ring::Accent => Color32::from_rgb(219, 39, 119),
    }
}

/// Avatar images are opaque references owned by an external pipeline; the
/// rail paints an initials disc keyed on the user id instead.
fn avatar_fill(user: &User) -> Color32 {
    const PALETTE: [Color32; 5] = [
        Color32::from_rgb(99, 102, 241),
        Color32::from_rgb(14, 165, 233),
        Color32::from_rgb(249, 115, 22),
        Color32::from_rgb(20, 184, 166),
        Color32::from_rgb(217, 70, 139),
    ];
    let sum: usize = user.id.bytes().map(usize::from).sum();
    PALETTE[sum % PALETTE.len()]
}

fn initials(user: &User) -> String {
    user.display_name
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .collect()
}

fn truncate_label(label: &str) -> String {
    if label.chars().count() <= LABEL_MAX_CHARS {
        return label.to_string();
    }
    let mut short: String = label.chars().take(LABEL_MAX_CHARS - 1).collect();
    short.push('…');
    short
}
