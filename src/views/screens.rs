//! List screens: activities, teams, workouts and the leaderboard.

use super::layout::{page, Nav};
use super::status_body;
use super::table::{Cell, Table};
use crate::models::{Activity, LeaderboardEntry, Record, Team, Workout};
use crate::services::LoadStatus;
use serde_json::Value;

/// Render a complete list screen page.
pub fn list_page(nav: Nav, status: &LoadStatus) -> String {
    let body = match nav {
        Nav::Activities => status_body(nav.label(), status, activities_table),
        Nav::Teams => status_body(nav.label(), status, teams_table),
        Nav::Workouts => status_body(nav.label(), status, workouts_table),
        Nav::Leaderboard => status_body(nav.label(), status, leaderboard_table),
        Nav::Users => status_body(nav.label(), status, super::users::users_table),
    };
    page(nav.label(), Some(nav), &body)
}

pub fn activities_table(records: &[Value]) -> Table {
    let mut table = Table::new(&["User", "Activity Type", "Duration (min)", "Date"]);
    for (index, record) in records.iter().enumerate() {
        let activity = Activity::from_value(record);
        let user = activity
            .user_name
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| activity.user.clone());
        table.push(
            activity.row_key(index),
            vec![
                Cell::text(user),
                Cell::text(&activity.activity_type),
                Cell::text(&activity.duration),
                Cell::text(&activity.date),
            ],
        );
    }
    table
}

pub fn teams_table(records: &[Value]) -> Table {
    let mut table = Table::new(&["Team Name", "Members"]);
    for (index, record) in records.iter().enumerate() {
        let team = Team::from_value(record);
        table.push(
            team.row_key(index),
            vec![Cell::text(&team.name), Cell::text(&team.members)],
        );
    }
    table
}

pub fn workouts_table(records: &[Value]) -> Table {
    let mut table = Table::new(&["Name", "Description"]);
    for (index, record) in records.iter().enumerate() {
        let workout = Workout::from_value(record);
        table.push(
            workout.row_key(index),
            vec![Cell::text(&workout.name), Cell::text(&workout.description)],
        );
    }
    table
}

pub fn leaderboard_table(records: &[Value]) -> Table {
    let mut table = Table::new(&["Rank", "User", "Team", "Score"]);
    for (index, record) in records.iter().enumerate() {
        let entry = LeaderboardEntry::from_value(record);
        table.push(
            entry.row_key(index),
            vec![
                Cell::text(&entry.rank),
                Cell::text(entry.display_user()),
                Cell::or_dash(entry.team_name.as_deref()),
                Cell::text(entry.display_score()),
            ],
        );
    }
    table
}
