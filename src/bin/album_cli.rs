use std::env;
use std::process;

use video_album::core::youtube_api::YoutubeApiClient;
use video_album::utils::logging::{filter_for_level, init_tracing_with};
use video_album::utils::validation::sanitize_pasted_url;
use video_album::{format_duration, resolve_video_id, AppConfig, Video};

const USAGE: &str = "Usage: album-cli <command> <argument>

Commands:
  resolve <url>        Print the video ID of a YouTube URL
  embed <url>          Print the privacy-enhanced embed URL
  duration <iso8601>   Format an API duration (PT1H2M3S -> 1:02:03)
  fetch <url>          Fetch video metadata (requires YOUTUBE_API_KEY)";

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("{USAGE}");
        process::exit(1);
    }

    let config = AppConfig::from_env();
    init_tracing_with(&filter_for_level(&config.app.log_level));

    if let Err(error) = run(&args[1], &args[2], config).await {
        eprintln!("Error: {error}");
        process::exit(1);
    }
}

async fn run(command: &str, argument: &str, config: AppConfig) -> anyhow::Result<()> {
    match command {
        "resolve" => {
            let id = resolve_video_id(sanitize_pasted_url(argument))
                .ok_or_else(|| anyhow::anyhow!("no video ID found in {argument:?}"))?;
            println!("{id}");
        }
        "embed" => {
            let id = resolve_video_id(sanitize_pasted_url(argument))
                .ok_or_else(|| anyhow::anyhow!("no video ID found in {argument:?}"))?;
            println!("{}", id.embed_url());
        }
        "duration" => {
            println!("{}", format_duration(argument.trim())?);
        }
        "fetch" => {
            config.validate()?;
            if !config.has_api_key() {
                anyhow::bail!("YOUTUBE_API_KEY is not set");
            }
            let client = YoutubeApiClient::new(config.youtube)?;
            let video = client.get_video_by_url(sanitize_pasted_url(argument)).await?;
            print_video(&video)?;
        }
        other => anyhow::bail!("unknown command {other:?}\n\n{USAGE}"),
    }
    Ok(())
}

fn print_video(video: &Video) -> anyhow::Result<()> {
    println!("ID: {}", video.id);
    println!("Title: {}", video.snippet.title);
    println!("Channel: {} ({})", video.snippet.channel_title, video.snippet.channel_id);
    println!("Published: {}", video.snippet.published_at.format("%Y-%m-%d"));
    println!("Duration: {}", video.formatted_duration()?);
    if let Some(ref thumbnail) = video.snippet.thumbnail {
        println!("Thumbnail: {} ({}x{})", thumbnail.url, thumbnail.width, thumbnail.height);
    }
    println!("Embed: {}", video.embed_url());
    Ok(())
}
