//! Users screen and its edit modal.

use super::layout::{attr, page, Nav};
use super::status_body;
use super::table::{Cell, Table};
use crate::models::{FitnessLevel, Record, Team, User};
use crate::services::editor::AVATAR_MAX_CHARS;
use crate::services::{EditSession, UsersScreen};
use html_escape::encode_text;
use serde_json::Value;

pub fn users_table(records: &[Value]) -> Table {
    let mut table = Table::new(&["Name", "Email", "Team", "Fitness Level", "Avatar", "Actions"]);
    for (index, record) in records.iter().enumerate() {
        let user = User::from_value(record);
        let actions = match user.id() {
            Some(id) => Cell::Markup(format!(
                r#"<a class="btn btn-sm btn-primary" href="/users?edit={}">Edit</a>"#,
                attr(&urlencoding::encode(&id.to_string()))
            )),
            None => Cell::text(""),
        };
        table.push(
            user.row_key(index),
            vec![
                Cell::text(&user.name),
                Cell::text(&user.email),
                Cell::or_dash(user.team_name.as_deref()),
                Cell::text(&user.fitness_level),
                Cell::text(&user.avatar),
                actions,
            ],
        );
    }
    table
}

/// Users screen, with the edit modal open when a session is given.
///
/// The modal survives a failed list load so a save error is never lost.
pub fn users_page(screen: &UsersScreen, session: Option<&EditSession>) -> String {
    let mut body = status_body(Nav::Users.label(), &screen.users, users_table);
    if let Some(session) = session {
        body.push_str(&edit_modal(session, &screen.teams));
    }
    page(Nav::Users.label(), Some(Nav::Users), &body)
}

/// The edit modal as an overlay form posting back to the dashboard.
pub fn edit_modal(session: &EditSession, teams: &[Value]) -> String {
    let draft = &session.draft;

    let error = session
        .error
        .as_deref()
        .map(|message| {
            format!(
                r#"<div class="alert alert-danger" role="alert">{}</div>"#,
                encode_text(message)
            )
        })
        .unwrap_or_default();

    let mut team_options = format!(
        r#"<option value=""{}>— No team —</option>"#,
        selected(!draft.has_team())
    );
    for record in teams {
        let team = Team::from_value(record);
        let Some(id) = team.id() else { continue };
        let id = id.to_string();
        team_options.push_str(&format!(
            r#"<option value="{}"{}>{}</option>"#,
            attr(&id),
            selected(id == draft.team),
            encode_text(&team.name)
        ));
    }

    let mut level_options = String::new();
    for level in FitnessLevel::ALL {
        level_options.push_str(&format!(
            r#"<option value="{}"{}>{}</option>"#,
            level.as_str(),
            selected(level == draft.fitness_level),
            level.label()
        ));
    }

    let (cancel, submit) = if session.saving {
        (
            r#"<button type="button" class="btn btn-secondary" disabled>Cancel</button>"#,
            r#"<button type="submit" class="btn btn-primary" disabled>Saving…</button>"#,
        )
    } else {
        (
            r#"<a class="btn btn-secondary" href="/users">Cancel</a>"#,
            r#"<button type="submit" class="btn btn-primary">Save changes</button>"#,
        )
    };

    format!(
        r#"<div class="modal show d-block" tabindex="-1"><div class="modal-dialog"><div class="modal-content">
<form method="post" action="/users/{action}/edit">
<div class="modal-header"><h5 class="modal-title">Edit User: {title}</h5><a class="btn-close" href="/users" aria-label="Close"></a></div>
<div class="modal-body">
{error}<div class="mb-3"><label class="form-label" for="name">Name</label><input type="text" class="form-control" id="name" name="name" value="{name}" required></div>
<div class="mb-3"><label class="form-label" for="email">Email</label><input type="email" class="form-control" id="email" name="email" value="{email}" required></div>
<div class="mb-3"><label class="form-label" for="team">Team</label><select class="form-select" id="team" name="team">{team_options}</select></div>
<div class="mb-3"><label class="form-label" for="fitness_level">Fitness Level</label><select class="form-select" id="fitness_level" name="fitness_level">{level_options}</select></div>
<div class="mb-3"><label class="form-label" for="avatar">Avatar (emoji or initials)</label><input type="text" class="form-control" id="avatar" name="avatar" value="{avatar}" maxlength="{avatar_max}"></div>
</div>
<div class="modal-footer">{cancel}{submit}</div>
</form>
</div></div></div>"#,
        action = attr(&urlencoding::encode(&session.user_id)),
        title = encode_text(&session.title),
        error = error,
        name = attr(&draft.name),
        email = attr(&draft.email),
        team_options = team_options,
        level_options = level_options,
        avatar = attr(&draft.avatar),
        avatar_max = AVATAR_MAX_CHARS,
        cancel = cancel,
        submit = submit,
    )
}

fn selected(is_selected: bool) -> &'static str {
    if is_selected {
        " selected"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::LoadStatus;
    use serde_json::json;

    fn alice() -> Value {
        json!({"id": 1, "name": "Alice", "email": "a@x.com"})
    }

    #[test]
    fn test_sparse_user_row() {
        let html = users_table(&[alice()]).render();
        assert!(html.contains(
            r#"<td>Alice</td><td>a@x.com</td><td><span class="text-muted">—</span></td><td></td><td></td>"#
        ));
        assert!(html.contains(r#"href="/users?edit=1""#));
    }

    #[test]
    fn test_modal_selects_no_team() {
        let session = EditSession::open(&User::from_value(&alice())).unwrap();
        let teams = vec![json!({"id": 2, "name": "Team DC"})];
        let html = edit_modal(&session, &teams);

        assert!(html.contains(r#"<option value="" selected>— No team —</option>"#));
        assert!(html.contains(r#"<option value="2">Team DC</option>"#));
        assert!(html.contains(r#"<option value="beginner" selected>Beginner</option>"#));
        assert!(html.contains(r#"action="/users/1/edit""#));
        assert!(html.contains("Edit User: Alice"));
    }

    #[test]
    fn test_modal_while_saving_disables_controls() {
        let mut session = EditSession::open(&User::from_value(&alice())).unwrap();
        session.begin_save();
        let html = edit_modal(&session, &[]);

        assert!(html.contains(
            r#"<button type="submit" class="btn btn-primary" disabled>Saving…</button>"#
        ));
    }

    #[test]
    fn test_modal_shows_inline_error() {
        let mut session = EditSession::open(&User::from_value(&alice())).unwrap();
        session.fail("HTTP 400: invalid email");
        let html = edit_modal(&session, &[]);

        assert!(html.contains("HTTP 400: invalid email"));
        assert!(html.contains(
            r#"<button type="submit" class="btn btn-primary">Save changes</button>"#
        ));
    }

    #[test]
    fn test_save_error_kept_when_list_failed() {
        let screen = UsersScreen {
            users: LoadStatus::Error("HTTP error! status: 503".to_string()),
            teams: vec![],
        };
        let mut session = EditSession::open(&User::from_value(&alice())).unwrap();
        session.fail("HTTP 400: invalid email");
        let html = users_page(&screen, Some(&session));

        assert!(html.contains("HTTP error! status: 503"));
        assert!(html.contains("modal-dialog"));
        assert!(html.contains("HTTP 400: invalid email"));
        assert!(html.contains(r#"<option value="" selected>— No team —</option>"#));
    }

    #[test]
    fn test_no_modal_without_session() {
        let screen = UsersScreen {
            users: LoadStatus::Ready(vec![alice()]),
            teams: vec![],
        };
        assert!(!users_page(&screen, None).contains("modal-dialog"));
    }
}
