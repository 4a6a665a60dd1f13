use std::{
    fs::File,
    io::{Seek, SeekFrom},
    path::PathBuf,
};

use clap::Parser;
use log::{error, info};
use mrcap_core::{read_cmd_header, read_sample_file_header, SampleFileHeaderExt};
use mrcap_types::{CmdHeader, SampleFileHeader};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(
    name = "mrcap-inspect",
    version = env!("CARGO_PKG_VERSION"),
    about = "Inspect headers of a meeting capture file",
    long_about = None,
)]
struct Cli {
    /// Путь к файлу захвата
    input: PathBuf,
    /// Дополнительно декодировать командную запись по смещению (байты)
    #[arg(long, value_name = "OFFSET")]
    cmd_at: Option<u64>,
    /// Вывод в формате JSON
    #[arg(long)]
    json: bool,
    /// Тихий режим (только ошибки)
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Serialize)]
struct HeaderSummary {
    magic_header: String,
    magic_trailer: String,
    version_info: u32,
    version_number: i32,
    multi_codec: bool,
    file_offset: u32,
}

#[derive(Debug, Serialize)]
struct CmdSummary {
    offset: u64,
    size_to_read: u32,
    kind: i32,
    name_ident: i32,
    timing_a: u32,
    some_type: u16,
    additional_size: i32,
}

#[derive(Debug, Serialize)]
struct InspectSummary {
    file: String,
    header: HeaderSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    cmd: Option<CmdSummary>,
}

fn header_summary(h: &SampleFileHeader) -> HeaderSummary {
    HeaderSummary {
        magic_header: format!("{:#010x}", h.header),
        magic_trailer: format!("{:#010x}", h.trailer),
        version_info: h.version_info,
        version_number: h.version_number(),
        multi_codec: h.is_multi_codec(),
        file_offset: h.file_offset,
    }
}

fn cmd_summary(
    cmd: &CmdHeader,
    offset: u64,
) -> CmdSummary {
    CmdSummary {
        offset,
        size_to_read: cmd.size_to_read,
        kind: cmd.kind,
        name_ident: cmd.name_ident,
        timing_a: cmd.timing_a,
        some_type: cmd.some_type,
        additional_size: cmd.additional_size,
    }
}

fn main() {
    let cli = Cli::parse();
    let level = if cli.quiet { "error" } else { "info" };

    env_logger::Builder::new()
        .filter_level(level.parse().unwrap())
        .format_target(false)
        .format_timestamp_secs()
        .init();

    let mut file = match File::open(&cli.input) {
        Ok(f) => f,
        Err(e) => {
            error!("Failed to open {:?}: {e}", cli.input);
            std::process::exit(1);
        }
    };

    let header = match read_sample_file_header(&mut file) {
        Ok(h) => h,
        Err(e) => {
            error!("Not a capture file: {e}");
            std::process::exit(1);
        }
    };

    let cmd = cli.cmd_at.map(|offset| {
        let result = file
            .seek(SeekFrom::Start(offset))
            .map_err(mrcap_types::CaptureError::from)
            .and_then(|_| read_cmd_header(&mut file));

        match result {
            Ok(c) => cmd_summary(&c, offset),
            Err(e) => {
                error!("Failed to read cmd header at {offset}: {e}");
                std::process::exit(1);
            }
        }
    });

    let summary = InspectSummary {
        file: cli.input.display().to_string(),
        header: header_summary(&header),
        cmd,
    };

    if cli.json {
        // JSON уходит в stdout для машинной обработки
        println!("{}", serde_json::to_string_pretty(&summary).unwrap());
        return;
    }

    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!("  File          : {:?}", cli.input);
    info!("  Magic         : {} / {}", summary.header.magic_header, summary.header.magic_trailer);
    info!("  Version info  : {:#x}", summary.header.version_info);
    info!("  Version       : {}", summary.header.version_number);
    info!("  Multi-codec   : {}", summary.header.multi_codec);
    info!("  Data offset   : {}", summary.header.file_offset);

    if let Some(cmd) = &summary.cmd {
        info!("  ── Cmd record @ {} ──", cmd.offset);
        info!("  Kind          : {}", cmd.kind);
        info!("  Size to read  : {}", cmd.size_to_read);
        info!("  Name ident    : {:#x}", cmd.name_ident);
        info!("  Timing        : {:#x}", cmd.timing_a);
        info!("  Some type     : {:#x}", cmd.some_type);
        info!("  Additional    : {}", cmd.additional_size);
    }

    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
}
