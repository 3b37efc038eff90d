//! Session DTOs (Data Transfer Objects)

use serde::Serialize;

use crate::application::session_store::SessionSnapshot;

/// Session state view for the UI layer
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub authenticated: bool,
    pub email: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl From<&SessionSnapshot> for SessionView {
    fn from(snapshot: &SessionSnapshot) -> Self {
        Self {
            authenticated: snapshot.is_authenticated(),
            email: snapshot
                .principal
                .as_ref()
                .map(|principal| principal.email.to_string()),
            loading: snapshot.loading,
            error: snapshot.error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::principal::Principal;
    use kernel::email::Email;

    #[test]
    fn test_view_of_initial_snapshot() {
        let view = SessionView::from(&SessionSnapshot::initial());
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["authenticated"], false);
        assert_eq!(json["loading"], true);
        assert!(json["email"].is_null());
        assert!(json["error"].is_null());
    }

    #[test]
    fn test_view_of_signed_in_snapshot() {
        let snapshot = SessionSnapshot {
            principal: Some(Principal::new(Email::new("view@example.com").unwrap())),
            loading: false,
            error: None,
        };
        let view = SessionView::from(&snapshot);
        assert!(view.authenticated);
        assert_eq!(view.email.as_deref(), Some("view@example.com"));
    }
}
