use wordlist::model::session::SessionContext;

/// Browser session shared through context by the layout and every page
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub session: SessionContext,
    /// Whether `document.cookie` has been read yet
    pub fetched: bool,
}

impl SessionState {
    pub fn loaded(session: SessionContext) -> Self {
        Self {
            session,
            fetched: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }
}
