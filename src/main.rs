use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use chatstats::{
    AnalysisContext, CloudLayout, CloudRenderer, FrequencyCloudRenderer, NormalizerConfig,
    RankConfig, build_corpus, format_ranking, parse_export_file, rank_responders, top_responders,
    word_cloud_text, write_corpus_text, write_ranking_json,
};

#[derive(Parser)]
#[command(name = "chatstats")]
#[command(author, version, about = "Statistics for exported chat transcripts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the members who most often reply to questions
    TopResponders {
        /// Chat export file (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Number of members to list
        #[arg(short = 'n', long, default_value = "10")]
        top_n: usize,

        /// Write the ranking as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Build the reshaped word cloud corpus and its weighted token stream
    WordCloud {
        /// Chat export file (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Newline-delimited stopword list
        #[arg(short, long)]
        stopwords: PathBuf,

        /// Directory for wordcloud.txt and wordcloud.json
        #[arg(short, long)]
        output_dir: PathBuf,

        /// Canvas width in pixels
        #[arg(long, default_value = "1200")]
        width: u32,

        /// Canvas height in pixels
        #[arg(long, default_value = "800")]
        height: u32,

        /// Largest glyph size
        #[arg(long, default_value = "250")]
        max_font_size: u32,

        /// Canvas background color
        #[arg(long, default_value = "white")]
        background_color: String,

        /// Font file with Arabic presentation-form glyphs
        #[arg(long)]
        font: Option<PathBuf>,

        /// Keep ASCII digits instead of converting to Persian digits
        #[arg(long)]
        keep_ascii_digits: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print a summary of both analyses without writing files
    Analyze {
        /// Chat export file (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Optional stopword list for the corpus summary
        #[arg(short, long)]
        stopwords: Option<PathBuf>,

        /// Number of members to list
        #[arg(short = 'n', long, default_value = "10")]
        top_n: usize,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::TopResponders {
            input,
            top_n,
            output,
            verbose,
        } => {
            setup_logging(verbose);
            run_top_responders(input, top_n, output)
        }
        Commands::WordCloud {
            input,
            stopwords,
            output_dir,
            width,
            height,
            max_font_size,
            background_color,
            font,
            keep_ascii_digits,
            verbose,
        } => {
            setup_logging(verbose);
            let layout = CloudLayout {
                width,
                height,
                max_font_size,
                background_color,
                font_path: font,
            };
            let normalizer_config = NormalizerConfig {
                persian_digits: !keep_ascii_digits,
                ..Default::default()
            };
            run_word_cloud(input, stopwords, output_dir, layout, normalizer_config)
        }
        Commands::Analyze {
            input,
            stopwords,
            top_n,
            verbose,
        } => {
            setup_logging(verbose);
            analyze(input, stopwords, top_n)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn run_top_responders(input: PathBuf, top_n: usize, output: Option<PathBuf>) -> Result<()> {
    info!("Loading chat data from {:?}", input);
    let transcript = parse_export_file(&input).context("Failed to load chat export")?;
    info!("Loaded {} messages", transcript.len());

    let context = AnalysisContext::new();
    match output {
        // the JSON report also carries the reply totals
        Some(path) => {
            let result = rank_responders(&transcript, &context, &RankConfig { top_n });
            print!("{}", format_ranking(&result.responders));
            write_ranking_json(&path, &result).context("Failed to write ranking")?;
            info!("Ranking written to {:?}", path);
        }
        None => print!("{}", format_ranking(&top_responders(&transcript, &context, top_n))),
    }

    Ok(())
}

fn run_word_cloud(
    input: PathBuf,
    stopwords: PathBuf,
    output_dir: PathBuf,
    layout: CloudLayout,
    normalizer_config: NormalizerConfig,
) -> Result<()> {
    // resources first, so nothing is analyzed when one is missing
    layout.check_resources()?;
    let context = AnalysisContext::with_stopwords_file(&stopwords, normalizer_config)?;

    info!("Loading chat data from {:?}", input);
    let transcript = parse_export_file(&input).context("Failed to load chat export")?;
    info!("Loaded {} messages", transcript.len());

    info!("Loading text content...");
    let display = word_cloud_text(&transcript, &context);

    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create directory: {:?}", output_dir))?;
    let text_path = output_dir.join("wordcloud.txt");
    write_corpus_text(&text_path, &display).context("Failed to write corpus")?;
    info!("Corpus written to {:?}", text_path);

    info!("Generating word cloud");
    let cloud_path = FrequencyCloudRenderer
        .render(&display, &layout, &output_dir)
        .context("Failed to render word cloud")?;
    info!("Word cloud written to {:?}", cloud_path);

    Ok(())
}

fn analyze(input: PathBuf, stopwords: Option<PathBuf>, top_n: usize) -> Result<()> {
    let context = match stopwords {
        Some(path) => AnalysisContext::with_stopwords_file(&path, NormalizerConfig::default())?,
        None => AnalysisContext::new(),
    };

    info!("Analyzing chat data from {:?}", input);
    let transcript = parse_export_file(&input).context("Failed to load chat export")?;

    let ranking = rank_responders(&transcript, &context, &RankConfig { top_n });
    let corpus = build_corpus(&transcript, &context);

    println!("Chat Analysis");
    println!("=============");
    if let Some(name) = &transcript.name {
        println!("Chat: {}", name);
    }
    println!("Messages: {}", transcript.len());
    println!("Question-bearing messages: {}", ranking.questions);
    println!();

    println!("Replies");
    println!("-------");
    println!("To questions: {}", ranking.replies.counted);
    println!("To non-questions: {}", ranking.replies.not_a_question);
    println!("To unknown messages: {}", ranking.replies.unresolved);
    println!();

    println!("Top Responders");
    println!("--------------");
    print!("{}", format_ranking(&ranking.responders));
    println!();

    println!("Word Cloud Corpus");
    println!("-----------------");
    println!("Plain-text messages used: {}", corpus.messages_used);
    println!("Formatted messages skipped: {}", corpus.messages_skipped);
    println!("Tokens kept: {}", corpus.tokens_kept);
    println!("Stopwords removed: {}", corpus.stopwords_removed);

    Ok(())
}
