mod console;
pub mod format;
mod opts;

use console::ConsoleRenderer;
use fio_bridge_core::{
    open_module, Dispatcher, EventLoop, FsReader, ModuleLink, Renderer, StaticQuota,
    UploadItem, UploadStreamer,
};
use log::{debug, info, warn};
use opts::{Command, EncodeCommand, Request, SendCommand};
use std::error::Error;
use std::io;
use std::path::PathBuf;
use tokio::net::TcpStream;

pub use opts::Opts;

/// Primary entrypoint to run the executable based on input options
pub async fn run(opts: Opts) -> Result<(), Box<dyn Error>> {
    match opts.command {
        Command::Encode(c) => run_encode(c).await?,
        Command::Send(c) => run_send(c).await?,
    };

    Ok(())
}

async fn write_stdout(text: String, path: Option<&PathBuf>) -> io::Result<()> {
    match path {
        Some(p) => {
            use tokio::io::AsyncWriteExt;
            tokio::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(p)
                .await?
                .write_all(text.as_bytes())
                .await
        }
        None => {
            print!("{}", text);
            Ok(())
        }
    }
}

async fn load_items(files: Vec<PathBuf>) -> io::Result<Vec<UploadItem>> {
    let mut items = Vec::with_capacity(files.len());
    for file in files {
        items.push(UploadItem::from_path(file).await?);
    }
    Ok(items)
}

async fn run_encode(cmd: EncodeCommand) -> Result<(), Box<dyn Error>> {
    debug!("Encoding operation: {:?}", cmd.op);

    let text = match cmd.op.into_request()? {
        Request::Message(msg) => serde_json::to_string(&msg.to_wire())? + "\n",
        Request::Upload(files) => load_items(files)
            .await?
            .iter()
            .map(|item| item.summary() + "\n")
            .collect(),
    };

    write_stdout(text, cmd.redirect_stdout.as_ref()).await?;
    Ok(())
}

async fn run_send(cmd: SendCommand) -> Result<(), Box<dyn Error>> {
    info!("Connecting to module at {}", cmd.addr);

    let request = cmd.op.into_request()?;
    let (reader, writer) = TcpStream::connect(cmd.addr).await?.into_split();
    let (link, tx, rx) = ModuleLink::spawn(
        reader,
        writer,
        cmd.opts.format,
        cmd.opts.max_frame,
        cmd.opts.internal_buffer_size,
    );

    let mut renderer = ConsoleRenderer::new(cmd.output_format, cmd.redirect_stdout);
    let host = StaticQuota::new(cmd.opts.capacity);
    let module = match open_module(&host, cmd.opts.quota, tx, &mut renderer).await {
        Ok(module) => module,
        Err(x) => {
            link.abort();
            renderer.flush().await?;
            return Err(x.into());
        }
    };

    match request {
        Request::Message(msg) => module.post(msg).await?,
        Request::Upload(files) => {
            let items = load_items(files).await?;
            for item in items.iter() {
                renderer.log(&item.summary());
            }

            let report = UploadStreamer::new(FsReader)
                .stream(items, Some(module.port()))
                .await;
            if report.failed > 0 || report.dropped > 0 {
                warn!(
                    "Upload incomplete: {} failed, {} dropped",
                    report.failed, report.dropped
                );
            }
            renderer.log(&format!("Sent {} file(s) to module", report.sent));
        }
    }

    let mut dispatcher = Dispatcher::new(module);
    let count = EventLoop::new(rx)
        .with_idle_timeout(cmd.opts.timeout)
        .run(&mut dispatcher, &mut renderer)
        .await;
    debug!("Dispatched {} message(s) from module", count);

    link.abort();
    renderer.flush().await?;

    Ok(())
}
