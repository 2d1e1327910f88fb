//! Streak milestone arithmetic and share copy

/// Streak counts that trigger a milestone celebration
pub const MILESTONES: [u32; 7] = [3, 7, 14, 21, 30, 50, 100];

/// Whether a streak count lands exactly on a milestone
pub fn is_milestone(count: u32) -> bool {
    MILESTONES.contains(&count)
}

/// The next milestone strictly above the given count, if any remain
pub fn next_milestone(count: u32) -> Option<u32> {
    MILESTONES.iter().copied().find(|m| *m > count)
}

/// Share copy for an ongoing streak, rotated by count for variety
pub fn streak_share_message(count: u32) -> String {
    let messages = [
        format!("🔥 I'm on a {count}-day streak on Snapstreak! Can you beat me? Download now and challenge me!"),
        format!("📸 {count} days and counting! My Snapstreak game is strong 🔥 Join the challenge!"),
        format!("🎯 Day {count} of my photo streak! Building habits one snap at a time. Join me on Snapstreak!"),
        format!("⚡ {count}-day streak unlocked! Consistency is key. Start your own streak on Snapstreak!"),
        format!("🌟 I've maintained a {count}-day photo streak! What's your longest streak? Let's compete on Snapstreak!"),
    ];
    let index = (count as usize) % messages.len();
    messages[index].clone()
}

/// Share copy for a milestone achievement
pub fn milestone_share_message(milestone: u32) -> String {
    format!(
        "🎉 MILESTONE ACHIEVED! 🎉\n\nI just hit a {milestone}-day streak on Snapstreak!\n\nThis calls for celebration! Can you match my dedication? 🔥"
    )
}
