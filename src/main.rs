//! Console transport for the expense bot.
//!
//! Reads one event per line from stdin and prints the reply, processing
//! events strictly in order — the same contract a chat-platform transport
//! would honor. Lines are messages; a line starting with `callback:` is
//! treated as a button click carrying that token.

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, Level};

use gastobot::{
    Choice, Config, DbConnection, Dispatcher, Event, PlottersChartRenderer, Reply,
    SqliteExpenseStore,
};

/// All console input belongs to one conversation.
const CONSOLE_CHAT: i64 = 1;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let config = Config::from_env();

    info!("Setting up database");
    let db = DbConnection::new(&config.database_url).await?;
    let store = SqliteExpenseStore::new(db);

    std::fs::create_dir_all(&config.charts_dir)?;
    let renderer = PlottersChartRenderer::new(&config.charts_dir);

    let mut dispatcher = Dispatcher::new(store, renderer);

    info!("Bot pronto. Digite um comando (/help para a lista).");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let event = match line.strip_prefix("callback:") {
            Some(data) => Event::Callback {
                chat: CONSOLE_CHAT,
                data: data.trim().to_string(),
            },
            None => Event::Message {
                chat: CONSOLE_CHAT,
                text: line.to_string(),
            },
        };

        print_reply(dispatcher.dispatch(event).await);
    }

    Ok(())
}

fn print_reply(reply: Reply) {
    match reply {
        Reply::Text(text) => println!("{}\n", text),
        Reply::Choices { text, options } => {
            println!("{}", text);
            for Choice { label, data } in options {
                println!("  {}  →  callback:{}", label, data);
            }
            println!();
        }
        Reply::Photo { path, caption } => {
            println!("[imagem] {}", path.display());
            if let Some(caption) = caption {
                println!("{}", caption);
            }
            println!();
        }
    }
}
