//! One module per screen.

pub mod auth;
pub mod browser;
pub mod dashboard;
pub mod help;
pub mod home;

use dnsimple_provider::Identity;
use ratatui::text::Line;

use crate::view::layout::field;
use crate::view::theme::Styles;

/// Whoami summary shown on Home and after setup.
pub fn identity_lines(identity: Option<&Identity>) -> Vec<Line<'static>> {
    let Some(identity) = identity else {
        return vec![Line::styled("No identity details available yet.", Styles::subtitle())];
    };
    let mut lines = Vec::new();
    if let Some(account) = &identity.account {
        lines.push(field("Type", "Account token"));
        lines.push(field("Email", account.email.clone()));
        lines.push(field("ID", account.id.to_string()));
        lines.push(field(
            "Plan",
            account.plan_identifier.clone().unwrap_or_else(|| "n/a".into()),
        ));
    }
    if let Some(user) = &identity.user {
        if identity.account.is_none() {
            lines.push(field("Type", "User token"));
        }
        lines.push(field("User", user.email.clone()));
        lines.push(field("User ID", user.id.to_string()));
    }
    if lines.is_empty() {
        lines.push(Line::styled(
            "Whoami returned no account or user details.",
            Styles::subtitle(),
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use dnsimple_provider::{Account, User};

    use super::*;

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn account_token_summary() {
        let identity = Identity {
            account: Some(Account {
                id: 42,
                email: "ops@acme.dev".into(),
                ..Account::default()
            }),
            user: None,
        };
        assert_eq!(
            text(&identity_lines(Some(&identity))),
            vec![
                "Type: Account token",
                "Email: ops@acme.dev",
                "ID: 42",
                "Plan: n/a"
            ]
        );
    }

    #[test]
    fn user_token_summary() {
        let identity = Identity {
            account: None,
            user: Some(User {
                id: 7,
                email: "me@acme.dev".into(),
            }),
        };
        assert_eq!(
            text(&identity_lines(Some(&identity))),
            vec!["Type: User token", "User: me@acme.dev", "User ID: 7"]
        );
        assert_eq!(
            text(&identity_lines(Some(&Identity::default()))),
            vec!["Whoami returned no account or user details."]
        );
    }
}
