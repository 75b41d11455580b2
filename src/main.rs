mod api;
mod server;

use chrono::Local;
use clap::{Args, Parser, Subcommand};
use mahjong_fortune::almanac::{Almanac, AlmanacSummary};
use mahjong_fortune::calendar;
use mahjong_fortune::config::{default_config_path, FortuneConfig};
use mahjong_fortune::content::narrative::share_text;
use mahjong_fortune::{generate_fortune_at, sanitize_result, FortuneInput, LongitudeInput};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mahjong-fortune", about = "Daily mahjong fortune from your birth chart")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Fortune for a person on a day
    Fortune(FortuneArgs),
    /// Almanac entry for a day
    Almanac(AlmanacArgs),
    /// Today's date and almanac headline
    Today,
    /// HTTP API plus static web root
    Serve(ServeArgs),
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Args, Debug, Clone)]
struct FortuneArgs {
    #[arg(long)]
    name: String,
    /// Birth date, YYYY-MM-DD
    #[arg(long)]
    birth: String,
    /// Birth time, HH:mm
    #[arg(long)]
    time: Option<String>,
    /// Birth longitude in degrees east
    #[arg(long, allow_hyphen_values = true)]
    longitude: Option<String>,
    /// Target day, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    date: Option<String>,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct AlmanacArgs {
    #[arg(long)]
    date: Option<String>,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    #[arg(long)]
    pub host: Option<String>,
    #[arg(long)]
    pub port: Option<u16>,
    #[arg(long)]
    pub web_root: Option<PathBuf>,
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Write the default config file
    Init {
        #[arg(long)]
        path: Option<PathBuf>,
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Today);

    match command {
        Command::Fortune(args) => run_fortune(args),
        Command::Almanac(args) => run_almanac(args),
        Command::Today => run_today(),
        Command::Serve(args) => server::serve(args).await,
        Command::Config(ConfigCommand::Init { path, force }) => run_config_init(path, force),
    }
}

fn run_fortune(args: FortuneArgs) -> Result<(), String> {
    let mut input = FortuneInput::new(args.name, args.birth);
    if let Some(time) = args.time {
        input = input.with_time(time);
    }
    if let Some(longitude) = args.longitude {
        input = input.with_longitude(LongitudeInput::Text(longitude));
    }
    if let Some(date) = args.date {
        if calendar::parse_ymd(date.trim()).is_none() {
            return Err(format!("invalid date (YYYY-MM-DD): {}", date));
        }
        input = input.on_date(date);
    }
    input.validate()?;

    let (config, _) = FortuneConfig::load(None)?;
    let result = sanitize_result(generate_fortune_at(
        &input,
        Local::now().date_naive(),
        &config.scoring,
    ));
    if args.json {
        let payload = serde_json::to_string_pretty(&result)
            .map_err(|err| format!("failed to serialize result: {}", err))?;
        println!("{}", payload);
        return Ok(());
    }

    println!("日期：{}", result.date_key);
    println!("{}", share_text(&result));
    println!("概要：{}", result.summary);
    if !result.bazi_summary.is_empty() {
        println!("八字：{}", result.bazi_summary);
    }
    println!(
        "黄历：{} {}日 · 宜{} · 忌{}",
        result.almanac.lunar_date,
        result.almanac.jianchu,
        result.almanac.yi.join("、"),
        result.almanac.ji.join("、")
    );
    Ok(())
}

fn resolve_almanac(date: Option<&str>) -> Result<Almanac, String> {
    match date.map(str::trim) {
        Some(text) => {
            let parsed = calendar::parse_ymd(text)
                .ok_or_else(|| format!("invalid date (YYYY-MM-DD): {}", text))?;
            Almanac::for_date(parsed)
                .ok_or_else(|| format!("date outside 1900-2100: {}", text))
        }
        None => Ok(Almanac::nearest(Local::now().date_naive())),
    }
}

fn run_almanac(args: AlmanacArgs) -> Result<(), String> {
    let summary = resolve_almanac(args.date.as_deref())?.summary();
    if args.json {
        let payload = serde_json::to_string_pretty(&summary)
            .map_err(|err| format!("failed to serialize almanac: {}", err))?;
        println!("{}", payload);
        return Ok(());
    }
    print_almanac(&summary);
    Ok(())
}

fn print_almanac(summary: &AlmanacSummary) {
    println!("公历：{}", summary.solar);
    println!("农历：{}（{}年）", summary.lunar_date, summary.year_animal);
    println!(
        "干支：{}年 {}月 {}日",
        summary.ganzhi_year, summary.ganzhi_month, summary.ganzhi_day
    );
    if !summary.solar_term.is_empty() {
        println!("节气：{}", summary.solar_term);
    }
    println!(
        "建除：{}日 · {}卦（{}） · {}",
        summary.jianchu, summary.jianchu_trigram, summary.jianchu_element, summary.jianchu_meaning
    );
    println!("宜：{}", summary.yi.join("、"));
    println!("忌：{}", summary.ji.join("、"));
    println!("吉时：{}", summary.lucky_times.join("，"));
    println!("忌时：{}", summary.avoid_time);
}

fn run_today() -> Result<(), String> {
    let almanac = Almanac::nearest(Local::now().date_naive());
    let summary = almanac.summary();
    println!("今天是 {}", calendar::format_ymd_label(almanac.date));
    println!(
        "{} · {}日 · 宜{}",
        summary.lunar_date,
        summary.jianchu,
        summary.yi.join("、")
    );
    Ok(())
}

fn run_config_init(path: Option<PathBuf>, force: bool) -> Result<(), String> {
    let path = path
        .or_else(default_config_path)
        .ok_or_else(|| "no config path available".to_string())?;
    if path.exists() && !force {
        return Err(format!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        ));
    }
    FortuneConfig::default().write(&path)?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
