//! src/main.rs
//!
//! 程序的主入口。
//! 负责解析命令行、初始化日志、加载配置，并把计算结果打印给用户。

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fishit_rng_calc::config::{self, ConfigOverrides};
use fishit_rng_calc::models::{AppConfig, OutputFormat};
use fishit_rng_calc::session::PromptOutcome;
use fishit_rng_calc::{RawInput, Session, calculator, report, utils};
use itertools::Itertools;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "fishit-rng", version, about = "Fish It (Roblox) 稀有鱼 RNG 概率计算器")]
struct Cli {
    /// 配置文件路径（默认读取当前目录下的 config.json）
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 文本语言: id 或 en
    #[arg(long, global = true)]
    lang: Option<String>,

    /// 以 JSON 输出结果
    #[arg(long, global = true)]
    json: bool,

    /// 提高日志级别（-v info，-vv debug，-vvv trace）
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 计算一条鱼的概率
    Calc {
        /// 基础掉率 1 : X 中的 X
        #[arg(long, allow_hyphen_values = true)]
        base: String,
        /// Total Luck（%）
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        luck: String,
        /// 已经抛竿的次数
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        caught: String,
        /// 鱼名（可选，仅用于显示）
        #[arg(long, default_value = "")]
        fish: String,
    },
    /// 从 JSON 文件批量计算（数组，每项含 fishName/baseDenominator/totalLuck/totalCaught）
    Batch { file: PathBuf },
    /// 交互模式：逐项询问四个字段后计算，循环直到 quit 或输入结束
    Interactive,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let overrides = ConfigOverrides {
        language: cli.lang.clone(),
        json: cli.json,
    };
    let app_config = config::load_and_build_config(cli.config.as_deref(), &overrides)
        .context("加载配置失败")?;
    info!(language = ?app_config.language, output = ?app_config.output, "配置已加载");

    match cli.command {
        Command::Calc {
            base,
            luck,
            caught,
            fish,
        } => run_calc(&app_config, RawInput::new(fish, base, luck, caught)),
        Command::Batch { file } => run_batch(&app_config, &file),
        Command::Interactive => run_interactive(&app_config),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(io::stderr)
        .init();
}

fn run_calc(app_config: &AppConfig, input: RawInput) -> Result<()> {
    let messages = &app_config.messages;
    let result = calculator::compute(&input, messages);

    match app_config.output {
        OutputFormat::Json => println!("{}", report::render_json(&result)?),
        OutputFormat::Text => {
            println!("{}\n", messages.labels.title);
            let label = utils::fish_label(&input.fish_name, messages);
            println!("{}", report::render_text(&result, label, messages));
            println!("\n{}", messages.labels.footer);
        }
    }
    Ok(())
}

fn run_batch(app_config: &AppConfig, file: &Path) -> Result<()> {
    let start_time = Instant::now();
    let messages = &app_config.messages;

    let raw = fs::read_to_string(file)
        .with_context(|| format!("无法读取批量文件 {}", file.display()))?;
    let inputs: Vec<RawInput> = serde_json::from_str(&raw)
        .with_context(|| format!("批量文件 {} 格式错误", file.display()))?;
    info!(count = inputs.len(), "开始批量计算");

    let results = calculator::compute_batch(&inputs, messages);
    let invalid = results.iter().filter(|r| !r.valid).count();
    if invalid > 0 {
        warn!(invalid, "部分输入的基础掉率无效");
    }

    match app_config.output {
        OutputFormat::Json => println!("{}", report::render_json(&results)?),
        OutputFormat::Text => {
            let labels = inputs
                .iter()
                .map(|input| utils::fish_label(&input.fish_name, messages))
                .collect_vec();
            println!(
                "{}",
                report::render_batch_text(labels.into_iter().zip(&results), messages)
            );
        }
    }

    info!("总计算耗时: {:.2?}", start_time.elapsed());
    Ok(())
}

fn run_interactive(app_config: &AppConfig) -> Result<()> {
    let messages = &app_config.messages;
    let mut session = Session::new();
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout();

    println!("{}", messages.labels.title);
    println!("{}", messages.labels.interactive_help);

    while session.prompt_fields(&mut stdin, &mut stdout, messages)? == PromptOutcome::Complete {
        let result = session.submit(messages).clone();
        match app_config.output {
            OutputFormat::Json => println!("{}", report::render_json(&result)?),
            OutputFormat::Text => println!(
                "\n{}\n",
                report::render_text(&result, session.fish_label(messages), messages)
            ),
        }
    }
    info!("交互模式结束");
    Ok(())
}
