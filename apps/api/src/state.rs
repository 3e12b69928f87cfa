use ledgerline_application::AccessResolver;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub access_resolver: AccessResolver,
}
