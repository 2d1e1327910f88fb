//! CLI subcommands

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Subcommand;
use snapstreak_client::ApiClient;
use snapstreak_client::types::{NewSnap, ReportRequest, SnapImage};
use snapstreak_core::streak;
use std::path::{Path, PathBuf};

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account
    Register { email: String, password: String },
    /// Sign in and store the session tokens
    Login { email: String, password: String },
    /// Forget the stored session tokens
    Logout,
    /// Show the authenticated user's profile
    Profile,
    /// Show streak counters
    Streak {
        /// Also print share copy for the current streak
        #[arg(long)]
        share: bool,
    },
    /// List snap history
    History {
        #[arg(long, default_value = "1")]
        page: u32,
        #[arg(long, default_value = "20")]
        limit: u32,
    },
    /// Upload today's snap
    Post {
        /// Path to the image file (jpeg, png or heic)
        image: PathBuf,
        #[arg(long, default_value = "")]
        caption: String,
        #[arg(long, default_value = "none")]
        filter: String,
    },
    /// Bank a streak freeze
    Freeze,
    /// Like a snap
    Like { snap_id: String },
    /// Delete one of your snaps
    Delete { snap_id: String },
    /// Block a user
    Block { user_id: String },
    /// Unblock a user
    Unblock { user_id: String },
    /// Report content for moderation
    Report {
        content_type: String,
        content_id: String,
        #[arg(long)]
        category: String,
        #[arg(long, default_value = "")]
        reason: String,
    },
    /// Delete the account (requires password confirmation)
    DeleteAccount { password: String },
}

impl Commands {
    pub async fn execute(self, client: &ApiClient) -> Result<()> {
        match self {
            Commands::Register { email, password } => {
                let auth = client.register(&email, &password).await?;
                println!("Registered and signed in as {}", auth.user.email);
            }
            Commands::Login { email, password } => {
                let auth = client.login(&email, &password).await?;
                println!("Signed in as {}", auth.user.email);
            }
            Commands::Logout => {
                client.logout().await?;
                println!("Signed out");
            }
            Commands::Profile => {
                let profile = client.profile().await?;
                println!("id:      {}", profile.id);
                println!("email:   {}", profile.email);
                println!("joined:  {}", profile.created_at.format("%Y-%m-%d"));
            }
            Commands::Streak { share } => {
                let summary = client.streak().await?;
                println!("Current streak: {} day(s)", summary.current_streak);
                println!("Longest streak: {} day(s)", summary.longest_streak);
                println!("Total snaps:    {}", summary.total_snaps);
                println!(
                    "Snapped today:  {}",
                    if summary.has_snapped_today { "yes" } else { "not yet" }
                );
                println!(
                    "Freezes:        {} available, {} used",
                    summary.freezes_available, summary.freezes_used
                );
                if let Some(next) = streak::next_milestone(summary.current_streak) {
                    println!("Next milestone: {next} day(s)");
                }
                if share {
                    let message = if streak::is_milestone(summary.current_streak) {
                        streak::milestone_share_message(summary.current_streak)
                    } else {
                        streak::streak_share_message(summary.current_streak)
                    };
                    println!("\n{message}");
                }
            }
            Commands::History { page, limit } => {
                let history = client.list_snaps(page, limit).await?;
                for snap in &history.snaps {
                    println!(
                        "{}  {:10}  {}  ({} like(s))",
                        snap.snap_date.format("%Y-%m-%d"),
                        snap.filter,
                        snap.caption,
                        snap.like_count
                    );
                }
                println!(
                    "Page {} ({} snap(s) total)",
                    history.page, history.total
                );
            }
            Commands::Post {
                image,
                caption,
                filter,
            } => {
                let snap = read_snap_image(&image, caption, filter).await?;
                let created = client.create_snap(&snap).await?;
                println!(
                    "Posted snap {} for {}",
                    created.id,
                    created.snap_date.format("%Y-%m-%d")
                );
            }
            Commands::Freeze => {
                let freeze = client.add_freeze().await?;
                println!(
                    "{} ({} available, {} used)",
                    freeze.message, freeze.freezes_available, freeze.freezes_used
                );
            }
            Commands::Like { snap_id } => {
                println!("{}", client.like_snap(&snap_id).await?.message);
            }
            Commands::Delete { snap_id } => {
                println!("{}", client.delete_snap(&snap_id).await?.message);
            }
            Commands::Block { user_id } => {
                println!("{}", client.block_user(&user_id).await?.message);
            }
            Commands::Unblock { user_id } => {
                println!("{}", client.unblock_user(&user_id).await?.message);
            }
            Commands::Report {
                content_type,
                content_id,
                category,
                reason,
            } => {
                let report = ReportRequest {
                    content_type,
                    content_id,
                    category,
                    reason,
                };
                println!("{}", client.report(&report).await?.message);
            }
            Commands::DeleteAccount { password } => {
                let message = client.delete_account(&password).await?;
                println!("{}", message.message);
            }
        }

        Ok(())
    }
}

/// Load an image from disk into an uploadable snap
async fn read_snap_image(path: &Path, caption: String, filter: String) -> Result<NewSnap> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read image {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("jpg")
        .to_lowercase();
    let mime_type = match extension.as_str() {
        "png" => "image/png",
        "heic" => "image/heic",
        _ => "image/jpeg",
    };
    let file_name = format!("snap_{}.{extension}", Utc::now().timestamp_millis());

    Ok(NewSnap {
        image: SnapImage {
            file_name,
            mime_type: mime_type.to_string(),
            bytes,
        },
        caption,
        filter,
    })
}
