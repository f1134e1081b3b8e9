//! Line commands typed by the user and their effect on the controller.

use thiserror::Error;

use quill_core::PostListController;
use quill_core::domain::PostId;
use quill_core::ports::PostsApi;

pub const USAGE: &str = "\
Commands:
  title <text>     set the draft title
  content <text>   set the draft content
  submit           add the draft, or save the post being edited
  edit <id>        edit a post
  cancel           stop editing and clear the form
  delete <id>      delete a post
  reload           fetch the list again
  help             show this message
  quit             exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Title(String),
    Content(String),
    Submit,
    Edit(PostId),
    Cancel,
    Delete(PostId),
    Reload,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    #[error("Not a post id: {0}")]
    InvalidId(String),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "title" => Ok(Command::Title(rest.to_string())),
            "content" => Ok(Command::Content(rest.to_string())),
            "submit" => Ok(Command::Submit),
            "edit" => parse_id("edit", rest).map(Command::Edit),
            "cancel" => Ok(Command::Cancel),
            "delete" => parse_id("delete", rest).map(Command::Delete),
            "reload" => Ok(Command::Reload),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(verb.to_string())),
        }
    }
}

fn parse_id(verb: &'static str, raw: &str) -> Result<PostId, CommandError> {
    if raw.is_empty() {
        return Err(CommandError::MissingArgument(verb));
    }
    raw.parse()
        .map_err(|_| CommandError::InvalidId(raw.to_string()))
}

/// What the loop should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Render,
    Usage,
    Quit,
}

pub async fn apply<A: PostsApi>(controller: &mut PostListController<A>, command: Command) -> Flow {
    match command {
        Command::Title(title) => controller.set_title(title),
        Command::Content(content) => controller.set_content(content),
        Command::Submit => controller.submit().await,
        Command::Edit(id) => controller.begin_edit(id),
        Command::Cancel => controller.cancel_edit(),
        Command::Delete(id) => controller.delete(id).await,
        Command::Reload => controller.load().await,
        Command::Help => return Flow::Usage,
        Command::Quit => return Flow::Quit,
    }
    Flow::Render
}

#[cfg(test)]
mod tests {
    use quill_infra::HttpPostsApi;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[test]
    fn test_parse_text_commands_keep_inner_spaces() {
        assert_eq!(
            Command::parse("title   Hello   world "),
            Ok(Command::Title("Hello   world".to_string()))
        );
        assert_eq!(Command::parse("content"), Ok(Command::Content(String::new())));
    }

    #[test]
    fn test_parse_id_commands() {
        assert_eq!(Command::parse("edit 3"), Ok(Command::Edit(PostId(3))));
        assert_eq!(Command::parse("DELETE 12"), Ok(Command::Delete(PostId(12))));
        assert_eq!(
            Command::parse("delete"),
            Err(CommandError::MissingArgument("delete"))
        );
        assert_eq!(
            Command::parse("edit x"),
            Err(CommandError::InvalidId("x".to_string()))
        );
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("submit"), Ok(Command::Submit));
        assert_eq!(Command::parse(" reload "), Ok(Command::Reload));
        assert_eq!(Command::parse("exit"), Ok(Command::Quit));
        assert_eq!(
            Command::parse("publish"),
            Err(CommandError::Unknown("publish".to_string()))
        );
    }

    #[tokio::test]
    async fn test_apply_form_flow_creates_post() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/posts"))
            .and(body_json(json!({ "title": "T", "content": "C" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "message": "Post created",
                "post": {
                    "id": 1,
                    "title": "T",
                    "content": "C",
                    "created_at": "2024-05-01T10:20:30Z",
                    "updated_at": "2024-05-01T10:20:30Z"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut controller = PostListController::new(HttpPostsApi::new(server.uri()));
        for line in ["title T", "content C", "submit"] {
            let command = Command::parse(line).unwrap();
            assert_eq!(apply(&mut controller, command).await, Flow::Render);
        }

        assert_eq!(controller.posts().len(), 1);
        assert_eq!(controller.posts()[0].title, "T");
        assert!(controller.draft().title.is_empty());
        assert!(controller.error().is_none());
    }

    #[tokio::test]
    async fn test_apply_help_and_quit_leave_state_alone() {
        let mut controller = PostListController::new(HttpPostsApi::new("http://127.0.0.1:9"));

        assert_eq!(apply(&mut controller, Command::Help).await, Flow::Usage);
        assert_eq!(apply(&mut controller, Command::Quit).await, Flow::Quit);
        assert!(controller.posts().is_empty());
        assert!(controller.error().is_none());
    }
}
