use super::user::UserProfile;
use serde::Serialize;

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingEntry {
    pub user_id: String,
    pub unified_rating: f64,
    pub course_bonus: f64,
    pub total_rating: f64,
}

impl From<&UserProfile> for RankingEntry {
    fn from(user: &UserProfile) -> Self {
        Self {
            user_id: user.user_id.clone(),
            unified_rating: user.unified_rating,
            course_bonus: user.course_bonus,
            total_rating: user.total_rating,
        }
    }
}

/// Sort users by total rating, highest first; equal totals order by user id.
/// `top_n` keeps only the first N rows.
pub fn rank<'a, I>(users: I, top_n: Option<usize>) -> Vec<RankingEntry>
where
    I: IntoIterator<Item = &'a UserProfile>,
{
    let mut entries: Vec<RankingEntry> = users.into_iter().map(RankingEntry::from).collect();

    entries.sort_by(|a, b| {
        // Primary: total descending
        b.total_rating
            .total_cmp(&a.total_rating)
            // Tie-breaker: user id ascending
            .then_with(|| a.user_id.cmp(&b.user_id))
    });

    if let Some(n) = top_n {
        entries.truncate(n);
    }
    entries
}
