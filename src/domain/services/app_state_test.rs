use anyhow::anyhow;
use test_utils::fake_png_bytes;
use test_utils::notes_txt_path;
use test_utils::pixel_png_path;

use super::AppState;
use super::SEND_FAILED_ALERT;
use crate::domain::models::Attachment;
use crate::domain::models::Message;
use crate::domain::models::MessageContent;
use crate::domain::models::Sender;

fn app_state(text: &str) -> AppState {
    let mut app_state = AppState {
        last_known_width: 100,
        last_known_height: 300,
        ..AppState::default()
    };
    app_state.set_pending_text(text);
    return app_state;
}

fn screenshot() -> Attachment {
    return Attachment::new("shot.png", "image/png", fake_png_bytes());
}

mod can_send {
    use super::*;

    #[test]
    fn it_is_disabled_for_empty_text() {
        assert!(!app_state("").can_send());
    }

    #[test]
    fn it_is_disabled_for_whitespace_text() {
        assert!(!app_state(" \t ").can_send());
    }

    #[test]
    fn it_is_disabled_while_in_flight() {
        let mut app_state = app_state("status?");
        app_state.in_flight = true;
        assert!(!app_state.can_send());
    }

    #[test]
    fn it_is_enabled_otherwise() {
        assert!(app_state("status?").can_send());
    }
}

mod begin_send {
    use super::*;

    #[test]
    fn it_ignores_blank_input() {
        let mut app_state = app_state("   ");

        assert!(app_state.begin_send().is_none());
        assert!(!app_state.in_flight);
        assert!(app_state.messages.is_empty());
    }

    #[test]
    fn it_marks_in_flight_and_builds_the_request() {
        let mut app_state = app_state("status?");

        let request = app_state.begin_send().unwrap();

        assert!(app_state.in_flight);
        assert!(!app_state.accepts_input());
        assert_eq!(request.prompt, "status?");
        assert!(request.attachment.is_none());
        assert!(app_state.messages.is_empty());
    }

    #[test]
    fn it_includes_the_pending_attachment() {
        let mut app_state = app_state("check this");
        app_state.set_pending_attachment(screenshot());

        let request = app_state.begin_send().unwrap();
        let attachment = request.attachment.unwrap();

        assert!(attachment.shares_content_with(app_state.pending_attachment.as_ref().unwrap()));
    }
}

mod complete_send {
    use super::*;

    #[test]
    fn it_appends_user_and_bot_messages() {
        let mut app_state = app_state("status?");
        app_state.begin_send();
        app_state.complete_send(Ok("all green".to_string()));

        assert_eq!(
            app_state.messages,
            vec![
                Message::text(Sender::User, "status?"),
                Message::text(Sender::Bot, "all green"),
            ]
        );
        assert!(!app_state.in_flight);
        assert!(app_state.alert.is_none());
        assert_eq!(app_state.pending_text, "");
        assert!(app_state.pending_attachment.is_none());
    }

    #[test]
    fn it_appends_the_image_between_user_and_bot_messages() {
        let mut app_state = app_state("check this");
        let attachment = screenshot();
        app_state.set_pending_attachment(attachment.clone());

        app_state.begin_send();
        app_state.complete_send(Ok("disk is almost full".to_string()));

        assert_eq!(app_state.messages.len(), 3);
        assert_eq!(
            app_state.messages[0],
            Message::text(Sender::User, "check this")
        );
        assert_eq!(app_state.messages[1].sender, Sender::User);
        assert!(app_state.messages[1].is_image());
        match &app_state.messages[1].content {
            MessageContent::Image(image) => assert!(image.shares_content_with(&attachment)),
            MessageContent::Text(_) => panic!("expected an image message"),
        }
        assert_eq!(
            app_state.messages[2],
            Message::text(Sender::Bot, "disk is almost full")
        );

        assert_eq!(app_state.pending_text, "");
        assert!(app_state.pending_attachment.is_none());
    }

    #[test]
    fn it_records_the_prompt_that_was_sent() {
        let mut app_state = app_state("status?");
        let sent = screenshot();
        app_state.set_pending_attachment(sent.clone());

        app_state.begin_send();
        app_state.set_pending_text("edited while waiting");
        app_state.set_pending_attachment(Attachment::new("other.png", "image/png", fake_png_bytes()));
        app_state.complete_send(Ok("all green".to_string()));

        assert_eq!(app_state.messages[0], Message::text(Sender::User, "status?"));
        match &app_state.messages[1].content {
            MessageContent::Image(image) => assert!(image.shares_content_with(&sent)),
            MessageContent::Text(_) => panic!("expected an image message"),
        }
    }

    #[test]
    fn it_records_tabs_as_typed() {
        let mut app_state = app_state("col1\tcol2");
        app_state.begin_send();
        app_state.complete_send(Ok("ok".to_string()));

        assert_eq!(app_state.messages[0], Message::text(Sender::User, "col1\tcol2"));
    }

    #[test]
    fn it_keeps_the_draft_on_failure() {
        let mut app_state = app_state("status?");
        app_state.set_pending_attachment(screenshot());

        app_state.begin_send();
        assert!(app_state.in_flight);
        app_state.complete_send(Err(anyhow!("HTTP status server error (500)")));

        assert!(!app_state.in_flight);
        assert!(app_state.messages.is_empty());
        assert_eq!(app_state.pending_text, "status?");
        assert!(app_state.pending_attachment.is_some());
        assert_eq!(app_state.alert, Some(SEND_FAILED_ALERT.to_string()));
        assert!(!app_state.accepts_input());
        assert!(app_state.can_send());
    }

    #[test]
    fn it_keeps_earlier_history_on_failure() {
        let mut app_state = app_state("status?");
        app_state.begin_send();
        app_state.complete_send(Ok("all green".to_string()));

        app_state.set_pending_text("and now?");
        app_state.begin_send();
        app_state.complete_send(Err(anyhow!("connection refused")));

        assert_eq!(app_state.messages.len(), 2);
        assert_eq!(app_state.pending_text, "and now?");
    }

    #[test]
    fn it_grows_the_rendered_transcript() {
        let mut app_state = app_state("status?");
        assert!(app_state.bubble_list.is_empty());

        app_state.begin_send();
        app_state.complete_send(Ok("all green".to_string()));

        assert_eq!(app_state.bubble_list.len(), 6);
    }
}

mod handle_slash_commands {
    use super::*;

    #[tokio::test]
    async fn it_breaks_on_quit() {
        let mut app_state = app_state("/q");
        let (should_break, handled) = app_state.handle_slash_commands("/q").await;

        assert!(should_break);
        assert!(handled);
        assert!(!app_state.in_flight);
    }

    #[tokio::test]
    async fn it_attaches_images() {
        let mut app_state = app_state("");
        let (should_break, handled) = app_state
            .handle_slash_commands(&format!("/attach {}", pixel_png_path()))
            .await;

        assert!(!should_break);
        assert!(handled);
        assert_eq!(
            app_state.pending_attachment.as_ref().unwrap().file_name,
            "pixel.png"
        );
        assert!(app_state.alert.is_none());
    }

    #[tokio::test]
    async fn it_replaces_the_pending_attachment() {
        let mut app_state = app_state("");
        app_state.set_pending_attachment(screenshot());

        app_state
            .handle_slash_commands(&format!("/a {}", pixel_png_path()))
            .await;

        assert_eq!(
            app_state.pending_attachment.as_ref().unwrap().file_name,
            "pixel.png"
        );
    }

    #[tokio::test]
    async fn it_alerts_when_attaching_non_images() {
        let mut app_state = app_state("");
        app_state.set_pending_attachment(screenshot());

        let (_, handled) = app_state
            .handle_slash_commands(&format!("/attach {}", notes_txt_path()))
            .await;

        assert!(handled);
        assert_eq!(
            app_state.pending_attachment.as_ref().unwrap().file_name,
            "shot.png"
        );
        assert!(app_state
            .alert
            .as_ref()
            .unwrap()
            .starts_with("Unable to attach image."));
    }

    #[tokio::test]
    async fn it_alerts_when_attaching_without_a_path() {
        let mut app_state = app_state("");
        app_state.handle_slash_commands("/attach").await;

        insta::assert_snapshot!(app_state.alert.unwrap(), @"Provide a path to an image, for example `/attach ./dashboard.png`.");
    }

    #[tokio::test]
    async fn it_detaches() {
        let mut app_state = app_state("");
        app_state.set_pending_attachment(screenshot());

        let (should_break, handled) = app_state.handle_slash_commands("/detach").await;

        assert!(!should_break);
        assert!(handled);
        assert!(app_state.pending_attachment.is_none());
    }

    #[tokio::test]
    async fn it_shows_help_as_an_alert() {
        let mut app_state = app_state("");
        app_state.handle_slash_commands("/help").await;

        assert!(app_state.alert.unwrap().starts_with("COMMANDS:"));
    }

    #[tokio::test]
    async fn it_sends_prompts_that_start_with_a_command_word() {
        for prompt in ["/help me read this stack trace", "/q why is the queue stuck"] {
            let mut app_state = app_state(prompt);
            let (should_break, handled) = app_state.handle_slash_commands(prompt).await;

            assert!(!should_break);
            assert!(!handled);
            assert_eq!(app_state.begin_send().unwrap().prompt, prompt);
        }
    }

    #[tokio::test]
    async fn it_leaves_prompts_alone() {
        let mut app_state = app_state("status?");
        let (should_break, handled) = app_state.handle_slash_commands("status?").await;

        assert!(!should_break);
        assert!(!handled);
        assert!(app_state.alert.is_none());
    }
}

#[test]
fn it_dismisses_alerts() {
    let mut app_state = app_state("");
    app_state.show_alert(SEND_FAILED_ALERT);
    assert!(!app_state.accepts_input());

    app_state.dismiss_alert();
    assert!(app_state.alert.is_none());
    assert!(app_state.accepts_input());
}
