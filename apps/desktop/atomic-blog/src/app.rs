//! Application root: owns the blog state, the archive panel and the dark mode toggle.

use crate::commands::{archive, posts};
use crate::console::UiEvent;
use crate::error::AtomicBlogError;
use crate::theme::FakeDarkMode;
use crate::view;

use blog_core::archive::Archive;
use blog_core::config::AppConfig;
use blog_core::generate::{create_random_posts, rng_from_seed};
use blog_core::state::{BlogState, BlogView};

use log::{debug, info};

/// What the console loop should do after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Print this text and read the next line
    Continue(String),

    Quit,
}

pub struct BlogApp {
    state: BlogState,
    view: BlogView,
    archive: Archive,
    dark_mode: FakeDarkMode,
    archive_page_size: usize,
}

impl BlogApp {
    pub fn new(
        state: BlogState,
        archive: Archive,
        dark_mode: FakeDarkMode,
        archive_page_size: usize,
    ) -> Self {
        let view = state.view();
        Self {
            state,
            view,
            archive,
            dark_mode,
            archive_page_size,
        }
    }

    /// Generate the initial posts and the archive from `config`.
    ///
    /// Both come from one RNG so a configured seed reproduces the whole session.
    pub fn from_config(config: &AppConfig) -> Self {
        let mut rng = rng_from_seed(config.generator.seed);

        let initial = create_random_posts(config.blog.initial_post_count, &mut rng);
        info!("Generated {} initial posts", initial.len());

        let archive = Archive::generate(config.archive.size, config.archive.show_on_start, &mut rng);

        Self::new(
            BlogState::with_posts(initial),
            archive,
            FakeDarkMode::new(config.ui.fake_dark_mode),
            config.ui.archive_page_size,
        )
    }

    pub fn state(&self) -> &BlogState {
        &self.state
    }

    pub fn view(&self) -> &BlogView {
        &self.view
    }

    pub fn archive(&self) -> &Archive {
        &self.archive
    }

    pub fn dark_mode(&self) -> FakeDarkMode {
        self.dark_mode
    }

    /// Header, visible posts and footer from the latest snapshot.
    pub fn render_page(&self) -> String {
        view::render_page(&self.view.visible_posts(), &self.dark_mode)
    }

    /// Apply one UI event.
    ///
    /// # Errors
    ///
    /// * [`AtomicBlogError::InvalidInput`] - archive action that cannot be carried out
    /// * [`AtomicBlogError::Core`] - state actor failure
    pub async fn handle_event(&mut self, event: UiEvent) -> Result<Flow, AtomicBlogError> {
        debug!("Handling {:?}", event);

        let text = match event {
            UiEvent::Search(query) => {
                posts::set_query(&self.state, query).await?;
                self.render_page()
            }
            UiEvent::SubmitPost { title, body } => {
                match posts::submit_post(&self.state, &title, &body).await? {
                    Some(_) => self.render_page(),
                    // Incomplete form: nothing changes, the list is shown as it was.
                    None => view::results_line(&self.view.visible_posts()),
                }
            }
            UiEvent::ClearPosts => {
                posts::clear_posts(&self.state).await?;
                self.render_page()
            }
            UiEvent::ToggleArchive => {
                if archive::toggle_archive(&mut self.archive) {
                    view::render_archive_page(&self.archive, 0, self.archive_page_size)
                } else {
                    view::render_archive_hidden()
                }
            }
            UiEvent::ArchivePage(page) => {
                if !self.archive.is_visible() {
                    return Err(AtomicBlogError::invalid_input(
                        "Archive is hidden. Type `archive` to show it first.",
                    ));
                }

                let page_count = self.archive.page_count(self.archive_page_size);
                if page == 0 || page > page_count {
                    return Err(AtomicBlogError::invalid_input(format!(
                        "No archive page {page} (archive has {page_count} pages)"
                    )));
                }

                view::render_archive_page(&self.archive, page - 1, self.archive_page_size)
            }
            UiEvent::CopyArchivePost(number) => {
                let index = number.checked_sub(1).ok_or_else(|| {
                    AtomicBlogError::invalid_input("Archive posts are numbered from 1")
                })?;
                archive::add_archive_post(&self.state, &self.archive, index).await?;
                self.render_page()
            }
            UiEvent::ToggleDarkMode => {
                self.dark_mode.toggle();
                self.render_page()
            }
            UiEvent::List => self.render_page(),
            UiEvent::Help => view::HELP.to_string(),
            UiEvent::Quit => return Ok(Flow::Quit),
        };

        Ok(Flow::Continue(text))
    }
}
