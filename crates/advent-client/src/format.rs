//! Renders a leaderboard as fixed-font chat text.

use crate::types::{Leaderboard, Member, DAYS};

/// Chat clients render lines indented by four spaces in a fixed-width font.
const FIXED_FONT: &str = "    ";

/// A member's position on the leaderboard.
#[derive(Debug, Clone)]
pub struct Standing<'a> {
    pub rank: usize,
    pub member: &'a Member,
    pub name: String,
    pub stars: u32,
}

/// Rank members by score, then star count.
///
/// Members with the same score and the same number of stars share a rank,
/// and the next member gets the next rank (dense ranking). Ties are listed
/// alphabetically.
pub fn standings(leaderboard: &Leaderboard) -> Vec<Standing<'_>> {
    let mut standings: Vec<Standing<'_>> = leaderboard
        .members
        .values()
        .map(|member| Standing {
            rank: 0,
            member,
            name: member.display_name(),
            stars: member.total_stars(),
        })
        .collect();

    standings.sort_by(|a, b| {
        b.member
            .local_score
            .cmp(&a.member.local_score)
            .then(b.stars.cmp(&a.stars))
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            .then_with(|| a.member.id.cmp(&b.member.id))
    });

    let mut rank = 0;
    let mut previous: Option<(u64, u32)> = None;
    for standing in &mut standings {
        let key = (standing.member.local_score, standing.stars);
        if previous != Some(key) {
            rank += 1;
            previous = Some(key);
        }
        standing.rank = rank;
    }

    standings
}

/// One character per day, in blocks of five: `.` no stars, `^` one, `*` both.
pub fn star_grid(member: &Member) -> String {
    let cells: Vec<char> = (1..=DAYS)
        .map(|day| match member.stars_on(day) {
            0 => '.',
            1 => '^',
            _ => '*',
        })
        .collect();

    cells
        .chunks(5)
        .map(|block| block.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("|")
}

/// Format a leaderboard. `web_url` is the leaderboard's page, shown in the
/// header line.
pub fn format_leaderboard(leaderboard: &Leaderboard, web_url: &str) -> String {
    let standings = standings(leaderboard);

    let ranks: Vec<String> = standings.iter().map(|s| format!("{}.", s.rank)).collect();
    let rank_width = ranks.iter().map(|r| r.len()).max().unwrap_or(0);
    let name_width = standings
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0);
    let score_width = standings
        .iter()
        .map(|s| s.member.local_score.to_string().len())
        .max()
        .unwrap_or(0);
    let stars_width = standings
        .iter()
        .map(|s| s.stars.to_string().len())
        .max()
        .unwrap_or(0);

    let mut out = format!(
        "{}Leaderboard owned by {} ({})\n",
        FIXED_FONT,
        leaderboard.owner_name(),
        web_url
    );

    for (standing, rank) in standings.iter().zip(&ranks) {
        out.push_str(&format!(
            "{}{:<rw$} {:<nw$} (score: {:>sw$}) {} {:>tw$} stars\n",
            FIXED_FONT,
            rank,
            standing.name,
            standing.member.local_score,
            star_grid(standing.member),
            standing.stars,
            rw = rank_width,
            nw = name_width,
            sw = score_width,
            tw = stars_width,
        ));
    }

    out
}
