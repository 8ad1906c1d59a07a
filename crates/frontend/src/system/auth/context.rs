use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Try to restore session from localStorage on mount
    Effect::new(move |_| {
        spawn_local(async move {
            if let Some(access_token) = storage::get_access_token() {
                // Validate token by fetching current user
                match api::get_current_user(&access_token).await {
                    Ok(user_info) => {
                        set_auth_state.set(AuthState {
                            access_token: Some(access_token),
                            user_info: Some(user_info),
                        });
                    }
                    Err(e) => {
                        // Token invalid or expired
                        log::error!("Session restore failed: {}", e);
                        storage::clear_token();
                    }
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: Perform logout
///
/// Сигнал передаётся снаружи: обработчики DOM-событий не могут
/// рассчитывать на доступный reactive owner для `use_context`.
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_token();
    reset_auth(set_auth_state);
}

fn reset_auth(set_auth_state: WriteSignal<AuthState>) {
    set_auth_state.set(AuthState::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_auth_clears_session() {
        let (auth_state, set_auth_state) = signal(AuthState {
            access_token: Some("token".to_string()),
            user_info: None,
        });

        reset_auth(set_auth_state);

        let cleared = auth_state.get_untracked();
        assert!(cleared.access_token.is_none());
        assert!(cleared.user_info.is_none());
    }
}
