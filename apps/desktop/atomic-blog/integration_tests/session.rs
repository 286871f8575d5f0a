use atomic_blog::app::{BlogApp, Flow};
use atomic_blog::console::{UiEvent, run};
use atomic_blog::theme::FakeDarkMode;

use blog_core::archive::Archive;
use blog_core::config::AppConfig;
use blog_core::state::BlogState;

use models::Post;

use tokio::io::BufReader;

fn small_app() -> BlogApp {
    let archive = Archive::with_posts(
        (1..=3)
            .map(|i| Post::new(format!("Archived {i}"), format!("body {i}")))
            .collect(),
        false,
    );
    BlogApp::new(
        BlogState::with_posts(vec![Post::new("Hyper", "Loop")]),
        archive,
        FakeDarkMode::default(),
        2,
    )
}

async fn run_script(app: &mut BlogApp, script: &str) -> String {
    let mut output = Vec::new();
    run(app, BufReader::new(script.as_bytes()), &mut output)
        .await
        .unwrap();
    String::from_utf8(output).unwrap()
}

/// **VALUE**: The title/body separator is a single space.
///
/// **WHY THIS MATTERS**: A query may span the end of the title and the start of the body.
///
/// **BUG THIS CATCHES**: Would catch concatenating title and body without a separator.
#[tokio::test]
async fn given_hyper_loop_when_searching_across_separator_then_space_matters() {
    let mut app = small_app();

    app.handle_event(UiEvent::Search(String::from("er lo")))
        .await
        .unwrap();
    assert_eq!(app.view().count(), 1);

    app.handle_event(UiEvent::Search(String::from("erlo")))
        .await
        .unwrap();
    assert_eq!(app.view().count(), 0);
}

/// **VALUE**: The config drives the generated post counts and the archive toggle.
///
/// **WHY THIS MATTERS**: Startup wiring is otherwise only exercised by the binary.
///
/// **BUG THIS CATCHES**: Would catch the archive size or initial count being ignored,
/// or a seed not reproducing the same posts.
#[tokio::test]
async fn given_seeded_config_when_building_app_then_sizes_and_posts_match() {
    // GIVEN: A small seeded config
    let mut config = AppConfig::default();
    config.generator.seed = Some(7);
    config.archive.size = 50;

    // WHEN: Building two apps from it
    let first = BlogApp::from_config(&config);
    let second = BlogApp::from_config(&config);

    // THEN: Sizes follow the config and the posts are reproducible
    assert_eq!(first.view().count(), config.blog.initial_post_count);
    assert_eq!(first.archive().len(), 50);
    assert!(!first.archive().is_visible());
    assert_eq!(first.state().posts().await, second.state().posts().await);
    assert_eq!(first.archive().posts(), second.archive().posts());
}

/// **VALUE**: Archive pages can only be browsed while shown, and only within range.
///
/// **WHY THIS MATTERS**: Page numbers come straight from user input.
///
/// **BUG THIS CATCHES**: Would catch a panic on page 0 or past the last page.
#[tokio::test]
async fn given_archive_when_browsing_pages_then_bounds_are_checked() {
    let mut app = small_app();

    assert!(app.handle_event(UiEvent::ArchivePage(1)).await.is_err());

    app.handle_event(UiEvent::ToggleArchive).await.unwrap();
    let Flow::Continue(page) = app.handle_event(UiEvent::ArchivePage(2)).await.unwrap() else {
        panic!("browsing should not quit");
    };
    assert!(page.contains("3. Archived 3: body 3"));

    assert!(app.handle_event(UiEvent::ArchivePage(0)).await.is_err());
    assert!(app.handle_event(UiEvent::ArchivePage(3)).await.is_err());
    assert!(app.handle_event(UiEvent::CopyArchivePost(0)).await.is_err());
}

/// **VALUE**: Drives the console loop end to end with a scripted session.
///
/// **WHY THIS MATTERS**: This is exactly what the binary does with stdin and stdout.
///
/// **BUG THIS CATCHES**: Would catch an error ending the loop instead of being reported,
/// or lines after `quit` still being processed.
#[tokio::test]
async fn given_scripted_session_when_running_console_then_events_are_applied_in_order() {
    // GIVEN: A blog with one post and a hidden three post archive
    let mut app = small_app();
    let script = "\
add Hello | World
add Missing body
bogus
archive
archive add 2
dark
quit
clear
";

    // WHEN: Running the script
    let output = run_script(&mut app, script).await;

    // THEN: Invalid line reported, loop kept going
    assert!(output.contains("Unknown command `bogus`"));

    // AND: Posts are newest-first, the empty-body submission was discarded
    assert_eq!(
        app.state().posts().await,
        vec![
            Post::new("Archived 2", "body 2"),
            Post::new("Hello", "World"),
            Post::new("Hyper", "Loop"),
        ]
    );

    // AND: Dark mode toggled, nothing after quit ran
    assert!(app.dark_mode().is_enabled());
    assert!(output.contains("🚀 3 atomic posts found"));
}

/// **VALUE**: End of input stops the loop like `quit`.
///
/// **WHY THIS MATTERS**: Piped input ends without an explicit quit.
///
/// **BUG THIS CATCHES**: Would catch the loop erroring or spinning on EOF.
#[tokio::test]
async fn given_input_without_quit_when_input_ends_then_run_returns_ok() {
    let mut app = small_app();

    let output = run_script(&mut app, "clear\n").await;

    assert!(output.contains("🚀 0 atomic posts found"));
    assert!(app.state().posts().await.is_empty());
}
