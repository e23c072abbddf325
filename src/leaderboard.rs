use crate::api::{LeaderboardEntry, Member};

/// Ranks members by balance using standard competition ranking.
///
/// Members sharing a balance share the rank of the first of them and are all
/// marked as tied, the next distinct balance gets its 1-based position
/// (`[100, 100, 80]` ranks as `[1, 1, 3]`). The sort is stable, so tied
/// members keep the order of the snapshot.
pub fn build(members: &[Member], current: &str) -> Vec<LeaderboardEntry> {
    let mut sorted: Vec<&Member> = members.iter().collect();
    sorted.sort_by(|a, b| b.balance.cmp(&a.balance));

    let mut entries: Vec<LeaderboardEntry> = Vec::with_capacity(sorted.len());
    for (index, member) in sorted.iter().enumerate() {
        let rank = match entries.last() {
            Some(previous) if previous.balance == member.balance => previous.rank,
            _ => index as u32 + 1,
        };
        entries.push(LeaderboardEntry {
            user: member.user.clone(),
            balance: member.balance,
            rank,
            tied: false,
            is_current: member.user == current,
        });
    }
    for index in 0..entries.len() {
        let balance = entries[index].balance;
        let before = index > 0 && entries[index - 1].balance == balance;
        let after = index + 1 < entries.len() && entries[index + 1].balance == balance;
        entries[index].tied = before || after;
    }
    entries
}
