//! Page shell: navigation bar, alerts and the loading indicator.

use html_escape::{encode_double_quoted_attribute, encode_text};

/// Top-level screens, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Users,
    Activities,
    Leaderboard,
    Teams,
    Workouts,
}

impl Nav {
    pub const ALL: [Nav; 5] = [
        Nav::Users,
        Nav::Activities,
        Nav::Leaderboard,
        Nav::Teams,
        Nav::Workouts,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Nav::Users => "/users",
            Nav::Activities => "/activities",
            Nav::Leaderboard => "/leaderboard",
            Nav::Teams => "/teams",
            Nav::Workouts => "/workouts",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Nav::Users => "Users",
            Nav::Activities => "Activities",
            Nav::Leaderboard => "Leaderboard",
            Nav::Teams => "Teams",
            Nav::Workouts => "Workouts",
        }
    }
}

/// Wrap screen content in the full HTML document with navigation.
pub fn page(title: &str, active: Option<Nav>, content: &str) -> String {
    let mut nav = String::new();
    for item in Nav::ALL {
        let class = if Some(item) == active {
            "nav-link active"
        } else {
            "nav-link"
        };
        nav.push_str(&format!(
            r#"<li class="nav-item"><a class="{}" href="{}">{}</a></li>"#,
            class,
            item.path(),
            item.label()
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} · OctoFit Tracker</title>
<link rel="stylesheet" href="/static/app.css">
</head>
<body>
<nav class="navbar"><a class="navbar-brand" href="/">OctoFit Tracker</a><ul class="navbar-nav">{nav}</ul></nav>
<main>
{content}
</main>
</body>
</html>
"#,
        title = encode_text(title),
        nav = nav,
        content = content,
    )
}

/// Full-width error alert.
pub fn alert(message: &str) -> String {
    format!(
        r#"<div class="alert alert-danger" role="alert">Error: {}</div>"#,
        encode_text(message)
    )
}

/// Loading indicator.
pub fn spinner() -> String {
    concat!(
        r#"<div class="text-center">"#,
        r#"<div class="spinner-border" role="status" aria-label="Loading"></div>"#,
        "</div>"
    )
    .to_string()
}

/// Escape a value for a double-quoted attribute.
pub fn attr(value: &str) -> String {
    encode_double_quoted_attribute(value).into_owned()
}

/// Landing page hero.
pub fn home() -> String {
    page(
        "Home",
        None,
        concat!(
            r#"<div class="container"><div class="octofit-hero">"#,
            "<h1>Welcome to OctoFit Tracker</h1>",
            r#"<p class="lead">Track your fitness, compete with your team, and reach your goals. "#,
            "Use the navigation menu to explore Users, Activities, Leaderboard, Teams, ",
            "and Workouts.</p>",
            "</div></div>"
        ),
    )
}
