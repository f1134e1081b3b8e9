//! Text rendering of the controller state.

use chrono::{DateTime, Utc};

use quill_core::PostListController;
use quill_core::domain::Post;
use quill_core::ports::PostsApi;

pub const LOADING: &str = "Loading...";

fn format_time(time: &DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

fn render_post(post: &Post, lines: &mut Vec<String>) {
    lines.push(format!("#{} {}", post.id, post.title));
    for line in post.content.lines() {
        lines.push(format!("    {}", line));
    }
    lines.push(format!("    Created: {}", format_time(&post.created_at)));
    if let Some(updated_at) = &post.updated_at {
        lines.push(format!("    Updated: {}", format_time(updated_at)));
    }
}

/// Render the whole screen: heading, error banner, form and post list.
pub fn render<A: PostsApi>(controller: &PostListController<A>) -> String {
    if controller.is_loading() {
        return LOADING.to_string();
    }

    let mut lines = vec!["Blog Posts".to_string(), "==========".to_string()];

    if let Some(error) = controller.error() {
        lines.push(format!("! {}", error));
    }

    let draft = controller.draft();
    if let Some(target) = controller.editing() {
        lines.push(format!("Editing post #{}", target.id));
    }
    lines.push(format!("Title:   {}", draft.title));
    lines.push(format!("Content: {}", draft.content));
    lines.push(format!("[ {} ]", controller.submit_label()));

    for post in controller.posts() {
        lines.push(String::new());
        render_post(post, &mut lines);
    }

    lines.join("\n")
}
