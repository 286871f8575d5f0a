//! Text rendering of the blog page and the archive panel.

use crate::theme::FakeDarkMode;

use blog_core::archive::Archive;
use blog_core::state::VisiblePosts;

use std::fmt::Write;

const TITLE: &str = "⚛️ The Atomic Blog";
const FOOTER: &str = "© by The Atomic Blog ✌️";
const RULE: &str = "────────────────────────────────────────";

pub const HELP: &str = "\
Commands:
  search <text>          filter posts (search with no text shows all)
  add <title> | <body>   add a post (both fields required)
  clear                  clear all posts
  list                   show the post list
  archive                show/hide the post archive
  archive page <n>       show archive page n
  archive add <n>        add archive post n as a new post
  dark                   toggle fake dark mode
  help                   show this help
  quit                   exit";

/// `"🚀 {n} atomic posts found"` for the visible count.
pub fn results_line(visible: &VisiblePosts) -> String {
    format!("🚀 {} atomic posts found", visible.count())
}

pub fn render_header(visible: &VisiblePosts, dark_mode: &FakeDarkMode) -> String {
    let mut out = String::new();
    match dark_mode.css_class() {
        Some(class) => {
            let _ = writeln!(out, "[{}] {}", dark_mode.icon(), class);
        }
        None => {
            let _ = writeln!(out, "[{}]", dark_mode.icon());
        }
    }
    let _ = writeln!(out, "{TITLE}");
    let _ = write!(out, "{}", results_line(visible));
    if visible.is_filtered() {
        let _ = write!(out, " for \"{}\" ({} total)", visible.query, visible.total);
    }
    out
}

pub fn render_posts(visible: &VisiblePosts) -> String {
    let mut out = String::new();
    for (i, post) in visible.posts.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {}", i + 1, post.title);
        let _ = writeln!(out, "     {}", post.body);
    }
    out
}

/// Header, post list and footer.
pub fn render_page(visible: &VisiblePosts, dark_mode: &FakeDarkMode) -> String {
    format!(
        "{}\n{RULE}\n{}{RULE}\n{FOOTER}",
        render_header(visible, dark_mode),
        render_posts(visible)
    )
}

/// One zero-based page of the archive, numbered by archive position (1-based).
pub fn render_archive_page(archive: &Archive, page: usize, page_size: usize) -> String {
    let mut out = String::new();
    let page_count = archive.page_count(page_size);
    let _ = writeln!(
        out,
        "📚 Post archive: page {} of {} ({} posts)",
        page.saturating_add(1),
        page_count,
        archive.len()
    );

    let first = page.saturating_mul(page_size);
    for (offset, post) in archive.page(page, page_size).iter().enumerate() {
        let _ = writeln!(out, "{:>5}. {}: {}", first + offset + 1, post.title, post.body);
    }

    let _ = write!(
        out,
        "Type `archive add <n>` to add a post, `archive page <n>` to browse, `archive` to hide."
    );
    out
}

pub fn render_archive_hidden() -> String {
    String::from("Post archive hidden. Type `archive` to show archive posts.")
}
