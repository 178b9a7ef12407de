use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::error;

use screenplay_rust::{parse_fountain_file, Conf, ParseOutput, ScreenplayResult};

/// 解析 Fountain 剧本并输出结构化结果
#[derive(Parser, Debug)]
#[command(name = "screenplay-parser", version, about)]
struct Args {
    /// Fountain 剧本文件
    file: PathBuf,

    /// JSON 配置文件
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 输出完整的 JSON 结果
    #[arg(long)]
    json: bool,

    /// 日志级别 (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .parse_filters(&args.log_level)
        .format_timestamp(None)
        .init();

    if let Err(e) = run(&args).await {
        error!("{}", e);
        eprintln!("解析失败: {}", e);
        process::exit(1);
    }
}

async fn run(args: &Args) -> ScreenplayResult<()> {
    let config = match &args.config {
        Some(path) => Conf::from_json_file(path)?,
        None => Conf::default(),
    };
    let result = parse_fountain_file(&args.file, Some(config)).await?;

    if !args.json {
        print_summary(&result);
        return Ok(());
    }
    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("序列化解析结果失败: {}", e),
    }
    Ok(())
}

fn print_summary(result: &ParseOutput) {
    println!("解析完成！");
    println!("解析时间: {}ms", result.parse_time);
    println!("元素数量: {}", result.screenplay.len());
    println!("场景数量: {}", result.properties.scene_count());
    for (index, name) in result.properties.scene_names.iter().enumerate() {
        match &result.properties.scene_numbers[index] {
            Some(number) => println!("  #{} {}", number, name),
            None => println!("  {}", name),
        }
    }
    println!("角色数量: {}", result.properties.characters.len());
    for (name, count) in &result.properties.characters {
        println!("  {}: {} 段对白", name, count);
    }
    if !result.properties.title_keys.is_empty() {
        println!("标题页: {}", result.properties.title_keys.join(", "));
    }
}
