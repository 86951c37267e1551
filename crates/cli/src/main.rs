use anyhow::{anyhow, Context, Result};
use catalog::{
    contact_list, CatalogIndex, ContactKind, Video, VideoDetail, VideoId, Viewer, SHORT_TITLE_WIDTH,
};
use clap::{Parser, Subcommand};
use colored::Colorize;
use feed::{placement, CourseFeed, Placement, POPULAR_STAR_THRESHOLD};
use rand::Rng;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

/// Elimu course feed - browse a learner's catalog from the terminal
#[derive(Parser)]
#[command(name = "elimu-feed")]
#[command(about = "Course catalog feed: popular and recommended videos per learner", long_about = None)]
struct Cli {
    /// Directory holding videos.json, reviews.json, mentors.json and users.json
    #[arg(short, long, default_value = "data/elimu")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the popular and recommended sections for a learner
    Feed {
        /// Email of the learner viewing the catalog
        #[arg(long)]
        viewer: String,

        /// Search box content (case-insensitive title substring)
        #[arg(long, default_value = "")]
        query: String,

        /// Show why each video landed in its section
        #[arg(long)]
        explain: bool,
    },

    /// Show the search suggestions for a query
    Search {
        /// Email of the learner viewing the catalog
        #[arg(long)]
        viewer: String,

        /// Search box content
        #[arg(long)]
        query: String,
    },

    /// Show the detail summary of a video
    Video {
        /// Video ID to display
        #[arg(long)]
        id: VideoId,

        /// Learner email, used to tell whether they already reviewed it
        #[arg(long)]
        viewer: Option<String>,
    },

    /// Show a learner's messaging contacts
    Contacts {
        /// Email of the learner
        #[arg(long)]
        viewer: String,
    },

    /// Measure per-keystroke feed latency
    Benchmark {
        /// Number of simulated keystrokes
        #[arg(long, default_value = "1000")]
        iterations: usize,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let index = CatalogIndex::load_from_dir(&cli.data_dir)
        .with_context(|| format!("Failed to load catalog exports from {}", cli.data_dir.display()))?;
    info!("Catalog ready in {:?}", start.elapsed());

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Feed {
            viewer,
            query,
            explain,
        } => handle_feed(&index, &viewer, &query, explain)?,
        Commands::Search { viewer, query } => handle_search(&index, &viewer, &query)?,
        Commands::Video { id, viewer } => handle_video(&index, id, viewer.as_deref())?,
        Commands::Contacts { viewer } => handle_contacts(&index, &viewer)?,
        Commands::Benchmark { iterations } => handle_benchmark(&index, iterations)?,
    }

    Ok(())
}

fn lookup_viewer<'a>(index: &'a CatalogIndex, email: &str) -> Result<&'a Viewer> {
    index
        .get_viewer(email)
        .ok_or_else(|| anyhow!("Viewer {} not found", email))
}

/// Handle the 'feed' command
fn handle_feed(index: &CatalogIndex, email: &str, query: &str, explain: bool) -> Result<()> {
    let viewer = lookup_viewer(index, email)?;
    let feed = CourseFeed::new(index.videos(), viewer);
    let sections = feed.sections(query);

    println!(
        "{}",
        format!(
            "Track: {}  Mentor: {}",
            viewer.track.as_deref().unwrap_or("Non défini"),
            viewer.mentor_name.as_deref().unwrap_or("Non défini")
        )
        .bold()
    );

    if feed.track_scoped().is_empty() {
        println!("No videos for this track yet.");
        return Ok(());
    }

    if !sections.popular.is_empty() {
        println!(
            "\n{} ({} vidéos populaires)",
            "🔥 Tendances".bold().red(),
            sections.popular.len()
        );
        for (rank, video) in sections.popular.iter().enumerate() {
            print_video_line(rank + 1, video);
            if explain {
                println!("     rated {:.1} > {}", video.stars, POPULAR_STAR_THRESHOLD);
            }
        }
    }

    if !sections.recommended.is_empty() {
        println!("\n{}", "📚 Pour vous".bold().blue());
        for (rank, video) in sections.recommended.iter().enumerate() {
            print_video_line(rank + 1, video);
            if explain {
                // Popular is full whenever a qualifying video is recommended
                let reason = match placement(video, sections.popular.len()) {
                    Placement::BelowThreshold => {
                        format!("rated {:.1}, not above {}", video.stars, POPULAR_STAR_THRESHOLD)
                    }
                    Placement::PopularFull | Placement::Popular => {
                        format!("rated {:.1}, popular section already full", video.stars)
                    }
                };
                println!("     {}", reason);
            }
        }
    }

    if sections.popular.is_empty() && sections.recommended.is_empty() {
        println!("No video title contains {:?}.", query);
    }
    Ok(())
}

/// Handle the 'search' command
fn handle_search(index: &CatalogIndex, email: &str, query: &str) -> Result<()> {
    let viewer = lookup_viewer(index, email)?;
    let feed = CourseFeed::new(index.videos(), viewer);
    let sections = feed.sections(query);

    println!("{}", format!("Suggestions for '{}':", query).bold().blue());
    if sections.suggestions.is_empty() {
        println!("  (none)");
    }
    for video in &sections.suggestions {
        println!("  {} {}", "•".green(), video.title);
    }
    Ok(())
}

/// Handle the 'video' command
fn handle_video(index: &CatalogIndex, id: VideoId, viewer_email: Option<&str>) -> Result<()> {
    let detail = VideoDetail::build(index, id, viewer_email)
        .ok_or_else(|| anyhow!("Video {} not found", id))?;
    let video = detail.video;

    println!("{}", video.title.bold().blue());
    println!("{}{}", "• ".green(), video.course_label());
    println!("{}Category: {}", "• ".green(), video.category);
    println!("{}Stars: {:.1}", "• ".green(), video.stars);
    println!("{}{} vues", "• ".cyan(), detail.view_count);
    if detail.average_rating > 0.0 {
        println!(
            "{}Average review: {:.2} ({} avis)",
            "• ".cyan(),
            detail.average_rating,
            detail.reviews.len()
        );
    }
    if let Some(url) = &video.youtube_url {
        println!("{}YouTube: {}", "• ".cyan(), url);
    }
    if let Some(description) = &video.description {
        println!("\n{}", description);
    }

    match detail.mentor {
        Some(mentor) => println!("\nMentor: {} <{}>", mentor.name, mentor.email),
        None => println!("\nMentor: {}", video.mentor_email),
    }

    println!("\n{} ({})", "💬 Avis des utilisateurs".bold(), detail.reviews.len());
    for review in detail.reviews {
        println!("  {} {}/5 {}", review.mentee_email, review.stars, review.comment);
    }

    if viewer_email.is_some() && !detail.viewer_has_reviewed {
        println!("\n{}", "You have not reviewed this video yet.".yellow());
    }
    Ok(())
}

/// Handle the 'contacts' command
fn handle_contacts(index: &CatalogIndex, email: &str) -> Result<()> {
    let viewer = lookup_viewer(index, email)?;

    println!("{}", "Messages".bold().blue());
    for contact in contact_list(viewer) {
        let role = match contact.kind {
            ContactKind::Mentor => "Votre mentor personnel",
            ContactKind::Assistant => "Assistant IA",
        };
        println!("  {} {} <{}> - {}", "•".green(), contact.name, contact.email, role);
    }
    Ok(())
}

/// Handle the 'benchmark' command
///
/// Each iteration picks a random viewer and types a random prefix of one of
/// their titles, then times `CourseFeed::sections` alone.
fn handle_benchmark(index: &CatalogIndex, iterations: usize) -> Result<()> {
    let viewers: Vec<&Viewer> = index.viewers().collect();
    if viewers.is_empty() {
        return Err(anyhow!("No viewer profiles loaded"));
    }
    if iterations == 0 {
        return Err(anyhow!("Need at least one iteration"));
    }

    let feeds: Vec<CourseFeed> = viewers
        .iter()
        .map(|viewer| CourseFeed::new(index.videos(), viewer))
        .collect();

    let mut rng = rand::rng();
    let mut timings: Vec<Duration> = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        let feed = &feeds[rng.random_range(0..feeds.len())];
        let query = random_prefix(&mut rng, feed.track_scoped());

        let start = Instant::now();
        let sections = feed.sections(&query);
        timings.push(start.elapsed());
        std::hint::black_box(sections);
    }

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[((timings.len() as f32 * 0.95) as usize).min(timings.len() - 1)];
    let p99 = timings[((timings.len() as f32 * 0.99) as usize).min(timings.len() - 1)];
    let throughput = iterations as f32 / total_time.as_secs_f32().max(f32::EPSILON);

    println!("Benchmark results ({} viewers):", viewers.len());
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!("Throughput: {:.2} keystrokes/second", throughput);

    Ok(())
}

/// What the search box holds partway through typing a title.
fn random_prefix(rng: &mut impl Rng, videos: &[&Video]) -> String {
    if videos.is_empty() {
        return String::new();
    }
    let title = &videos[rng.random_range(0..videos.len())].title;
    let typed = rng.random_range(0..=title.chars().count());
    title.chars().take(typed).collect()
}

/// One line of a section: rank, short title, course label, rating, views
fn print_video_line(rank: usize, video: &Video) {
    println!(
        "{}. {} [{}] - {:.1}★ - {} vues",
        rank.to_string().green(),
        video.short_title(SHORT_TITLE_WIDTH),
        video.course_label(),
        video.stars,
        video.view_count()
    );
}
