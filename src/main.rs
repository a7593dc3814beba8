//! pcapcarve CLI entry point.

use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pcapcarve::cli::Args;
use pcapcarve::io::CaptureSource;
use pcapcarve::Reassembled;

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| args.log_filter().into()),
        )
        .with_writer(io::stderr)
        .init();

    let source = CaptureSource::open(&args.file)
        .with_context(|| format!("Failed to open PCAP file: {}", args.file.display()))?;
    info!(
        path = %args.file.display(),
        compression = %source.compression(),
        bytes = source.len(),
        "loaded trace"
    );

    if args.show_header {
        let header = pcapcarve::load(&source)
            .with_context(|| format!("Failed to read PCAP header: {}", args.file.display()))?;
        println!("{header}");
    }

    let reassembled = pcapcarve::reassemble(&source, args.extract_mode())
        .with_context(|| format!("Failed to reassemble stream from {}", args.file.display()))?;

    report(&reassembled);

    if args.writes_stdout() {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(&reassembled.body)
            .and_then(|()| stdout.flush())
            .context("Failed to write body to stdout")?;
    } else {
        fs::write(&args.output, &reassembled.body)
            .with_context(|| format!("Failed to write output: {}", args.output.display()))?;
        info!(
            path = %args.output.display(),
            bytes = reassembled.body.len(),
            "wrote body"
        );
    }

    Ok(())
}

fn report(reassembled: &Reassembled) {
    if let Some(first) = reassembled.skipped.first() {
        warn!(
            skipped = reassembled.skipped.len(),
            first_frame = first.frame,
            first_error = %first.error,
            "some records could not be decoded"
        );
    }
    if !reassembled.finished {
        info!("trace ended before a FIN segment");
    }

    let Some(head) = &reassembled.head else {
        return;
    };
    info!(
        status = head.status,
        reason = %head.reason,
        content_type = head.content_type().unwrap_or("-"),
        "response head"
    );
    if head.is_chunked() {
        warn!("response uses chunked transfer encoding; body is written undecoded");
    }
    if let Some(expected) = head.content_length() {
        if expected != reassembled.body.len() {
            warn!(
                expected,
                actual = reassembled.body.len(),
                "body length differs from Content-Length"
            );
        }
    }
}
