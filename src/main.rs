//! # onamae — 应用入口
//!
//! 本文件仅负责日志初始化、参数解析与子命令分发。
//! 合成逻辑分布在 `label` 模块中，详见 `lib.rs` 架构文档。

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Args, Parser, Subcommand};
use image::{ImageFormat, RgbaImage};

use onamae::error::AppError;
use onamae::label::layout::{LABEL_HEIGHT, LABEL_WIDTH};
use onamae::label::{
    render_default_template, render_sample_icon, ComposerConfig, ImageBackend, LabelComposer,
    LabelError, LabelRequest, ResizeQuality, TemplateSource,
};

#[derive(Parser, Debug)]
#[command(
    name = "onamae",
    version,
    about = "お名前シール生成ツール",
    long_about = "onamae - お名前シール生成ツール\n\nマスキングテープ用のお名前シールを生成します。\nSUZURI推奨サイズ（1181×425px）に対応しています。"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// テンプレートに名前（とアイコン）を合成してお名前シールを生成
    Generate(GenerateArgs),
    /// 内蔵テンプレートをファイルに書き出す
    Template {
        #[arg(short, long, default_value = "assets/templates/default.png")]
        output: PathBuf,
    },
    /// テスト用のサンプルアイコンを生成
    SampleIcon {
        #[arg(short, long, default_value = "test_icon.png")]
        output: PathBuf,
        #[arg(long, default_value_t = 300)]
        size: u32,
    },
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// お名前（必須）
    #[arg(short, long)]
    name: String,
    /// アイコン画像のパス
    #[arg(short, long)]
    icon: Option<PathBuf>,
    /// 2つ目のお名前
    #[arg(long)]
    name2: Option<String>,
    /// 2つ目のアイコン画像のパス
    #[arg(long)]
    icon2: Option<PathBuf>,
    /// テンプレート画像のパス（省略時は内蔵テンプレート）
    #[arg(short, long)]
    template: Option<PathBuf>,
    /// 出力ファイルのパス
    #[arg(short, long, default_value = "output.png")]
    output: PathBuf,
    /// フォントファイルのパス
    #[arg(long, env = "ONAMAE_FONT", default_value = onamae::label::DEFAULT_FONT_PATH)]
    font: PathBuf,
    /// アイコン縮小の品質（quality / balanced / speed）
    #[arg(long, default_value = "balanced", value_parser = ResizeQuality::parse)]
    quality: ResizeQuality,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return exit_on_parse_error(err),
    };
    let result = match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Template { output } => save_asset(&render_default_template(), &output, "テンプレート"),
        Command::SampleIcon { output, size } => save_asset(&render_sample_icon(size), &output, "サンプルアイコン"),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("❌ [{}] {}", err.code(), err);
            eprintln!("✗ 生成に失敗しました: {}", err);
            ExitCode::FAILURE
        }
    }
}

/// 参数解析失败统一以 1 退出；`--help` / `--version` 仍视为成功。
fn exit_on_parse_error(err: clap::Error) -> ExitCode {
    let _ = err.print();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), AppError> {
    let template = args
        .template
        .map(TemplateSource::File)
        .unwrap_or(TemplateSource::Builtin);

    let mut request =
        LabelRequest::new(args.name, template, args.output).with_second(args.name2, args.icon2);
    request.icon = args.icon;
    request.validate()?;

    let mut config = ComposerConfig {
        font_path: args.font,
        ..ComposerConfig::default()
    };
    config.apply_resize_quality(args.quality);

    let composer = LabelComposer::new(ImageBackend::new(config));

    println!("🎨 お名前シールを生成中...");
    composer.compose(&request)?;

    println!("✓ お名前シールを生成しました: {}", request.output.display());
    print_summary(&request);

    Ok(())
}

fn print_summary(request: &LabelRequest) {
    let icon1 = request.icon.as_ref().filter(|p| !p.as_os_str().is_empty());

    println!();
    println!("📋 生成情報:");
    if request.is_two_patterns() {
        println!("   パターン1 - 名前: {}", request.name);
        if let Some(icon) = icon1 {
            println!("   パターン1 - アイコン: {}", icon.display());
        }
        match request.name2.as_deref().filter(|_| request.has_name2()) {
            Some(name2) => println!("   パターン2 - 名前: {}", name2),
            None => println!("   パターン2 - 名前: {} (再利用)", request.name),
        }
        match (request.icon2.as_ref().filter(|_| request.has_icon2()), icon1) {
            (Some(icon2), _) => println!("   パターン2 - アイコン: {}", icon2.display()),
            (None, Some(icon)) => println!("   パターン2 - アイコン: {} (再利用)", icon.display()),
            (None, None) => {}
        }
    } else {
        println!("   名前: {}", request.name);
        if let Some(icon) = icon1 {
            println!("   アイコン: {}", icon.display());
        }
    }
    println!("   テンプレート: {}", request.template.describe());
    println!("   出力: {}", request.output.display());
    match image::image_dimensions(&request.output) {
        Ok((LABEL_WIDTH, LABEL_HEIGHT)) => {
            println!("   サイズ: {}×{}px (SUZURI推奨)", LABEL_WIDTH, LABEL_HEIGHT)
        }
        Ok((width, height)) => println!("   サイズ: {}×{}px", width, height),
        Err(e) => log::warn!("⚠️ 无法读取输出尺寸：{}", e),
    }
}

fn save_asset(image: &RgbaImage, output: &Path, what: &str) -> Result<(), AppError> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    image
        .save_with_format(output, ImageFormat::Png)
        .map_err(|e| LabelError::Encode(format!("无法写入 {}：{}", output.display(), e)))?;

    log::info!("✅ {}已生成: {} ({}x{})", what, output.display(), image.width(), image.height());
    println!("✓ {}を生成しました: {}", what, output.display());
    Ok(())
}
