use std::sync::Arc;

use crate::backend::IdeaBackend;
use crate::models::Idea;
use crate::service::chat_bridge::ChatBridge;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Ideas,
    Detail,
}

/// Explicit view state owned by the view controller: the visible page, the
/// currently displayed idea list, and at most one follow-up chat session.
/// Mutation happens only through the transition methods below; each
/// successful generation replaces the idea list wholesale, never merges.
pub struct AppState {
    backend: Arc<dyn IdeaBackend>,
    current_page: Page,
    active_ideas: Vec<Idea>,
    chat: Option<ChatBridge>,
}

impl AppState {
    pub fn new(backend: Arc<dyn IdeaBackend>) -> Self {
        Self {
            backend,
            current_page: Page::Home,
            active_ideas: Vec::new(),
            chat: None,
        }
    }

    pub fn current_page(&self) -> Page {
        self.current_page
    }

    pub fn ideas(&self) -> &[Idea] {
        &self.active_ideas
    }

    pub fn chat(&self) -> Option<&ChatBridge> {
        self.chat.as_ref()
    }

    pub fn chat_mut(&mut self) -> Option<&mut ChatBridge> {
        self.chat.as_mut()
    }

    pub fn show_home(&mut self) {
        self.current_page = Page::Home;
    }

    /// Replaces the displayed idea list with a fresh acquisition result and
    /// navigates to the ideas page.
    pub fn show_ideas(&mut self, ideas: Vec<Idea>) {
        self.active_ideas = ideas;
        self.current_page = Page::Ideas;
    }

    /// Opens the detail view for one idea. The chat session survives
    /// reopening the same idea; opening a different idea's detail view
    /// discards it and starts a fresh one.
    pub fn open_detail(&mut self, idea: Idea) {
        let same_idea = self
            .chat
            .as_ref()
            .is_some_and(|chat| chat.idea().id == idea.id);
        if !same_idea {
            self.chat = Some(ChatBridge::new(self.backend.clone(), idea));
        }
        self.current_page = Page::Detail;
    }

    pub fn back_to_ideas(&mut self) {
        self.current_page = Page::Ideas;
    }
}
