//! Application Context
//!
//! Shared state provided via Leptos Context API: route, session, snackbar,
//! configuration and messages.

use leptos::prelude::*;

use crate::api::HttpApi;
use crate::config::AppConfig;
use crate::i18n::Language;
use crate::route::{current_route, Route, Visit};
use crate::session::{BrowserStorage, Session};
use crate::store::{store_insert_post, store_replace_posts, store_set_challenge, AppStore, AppStateStoreFields};
use crate::views::Reaction;

/// Snackbar message; `id` changes on every notification
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub message: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub visit: ReadSignal<Visit>,
    /// Current page - write
    set_visit: WriteSignal<Visit>,
    /// Visitor credentials - read
    pub session: ReadSignal<Session>,
    /// Visitor credentials - write
    set_session: WriteSignal<Session>,
    /// Latest notification - read
    pub notice: ReadSignal<Option<Notice>>,
    /// Latest notification - write
    set_notice: WriteSignal<Option<Notice>>,
    config: StoredValue<AppConfig>,
    language: StoredValue<Language>,
}

impl AppContext {
    pub fn new(config: AppConfig, language: Language, session: Session) -> Self {
        let (visit, set_visit) = signal(Visit::first(current_route()));
        let (session, set_session) = signal(session);
        let (notice, set_notice) = signal(None::<Notice>);
        Self {
            visit,
            set_visit,
            session,
            set_session,
            notice,
            set_notice,
            config: StoredValue::new(config),
            language: StoredValue::new(language),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn api(&self) -> HttpApi {
        self.config.with_value(AppConfig::api)
    }

    pub fn language(&self) -> Language {
        self.language.get_value()
    }

    /// Display text for a message key
    pub fn text(&self, key: &str) -> String {
        self.language.with_value(|lang| lang.text(key))
    }

    /// Show a snackbar message
    pub fn notify(&self, message: String) {
        self.set_notice.update(|notice| {
            let id = notice.as_ref().map_or(0, |n| n.id.wrapping_add(1));
            *notice = Some(Notice { id, message });
        });
    }

    pub fn dismiss_notice(&self, id: u32) {
        self.set_notice.update(|notice| {
            if notice.as_ref().is_some_and(|n| n.id == id) {
                *notice = None;
            }
        });
    }

    pub fn navigate(&self, route: Route) {
        if let Err(e) = window().location().set_hash(&route.href()) {
            log::warn!("[ROUTE] could not update location: {:?}", e);
        }
        self.set_visit.update(|visit| *visit = visit.next(route));
    }

    /// Follow the address bar after a `hashchange`
    pub fn sync_route(&self) {
        let route = current_route();
        if self.visit.get_untracked().route != route {
            self.set_visit.update(|visit| *visit = visit.next(route));
        }
    }

    /// The page being shown; capture it when starting a request
    pub fn current_visit(&self) -> Visit {
        self.visit.get_untracked()
    }

    /// Late answers for a visit the visitor already left are dropped
    pub fn is_current(&self, visit: Visit) -> bool {
        self.visit.get_untracked() == visit
    }

    pub fn set_document_title(&self, title: &str) {
        document().set_title(title);
    }

    /// Set `"<name> - <site title>"` as document title
    pub fn set_page_title(&self, name: &str) {
        let title = self.config.with_value(|config| config.page_title(name));
        self.set_document_title(&title);
    }

    /// Apply the UI effects requested by an action started on `origin`.
    /// Page data is only written while `origin` is still the current page.
    pub fn apply(&self, origin: Visit, store: &AppStore, reactions: Vec<Reaction>) {
        let on_origin = self.is_current(origin);
        for reaction in reactions {
            match reaction {
                Reaction::Notify(message) => self.notify(message),
                Reaction::Renamed(username) => self.set_session.update(|session| {
                    if let Err(e) = session.rename(&BrowserStorage, &username) {
                        log::warn!("[SESSION] could not cache username: {}", e);
                    }
                }),
                _ if !on_origin => log::debug!("[APP] dropping {:?} for {:?}", reaction, origin),
                Reaction::Navigate(route) => self.navigate(route),
                Reaction::ReplacePosts(posts) => store_replace_posts(store, posts),
                Reaction::InsertPost(post) => store_insert_post(store, post),
                Reaction::NewChallenge(challenge) => store_set_challenge(store, challenge),
                Reaction::ClearDraft => store.draft().set(String::new()),
            }
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
