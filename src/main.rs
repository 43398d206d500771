use wordseek::{Client, ClientConfig, RelationKind, WordQuery};

/// One-shot lookup: words that typically follow "wreak".
#[tokio::main]
async fn main() {
    // Initialize logging
    let _log_guard = wordseek::logging::init();
    log::info!("wordseek v{} starting", wordseek::VERSION);

    let client = Client::new(ClientConfig::load());

    let query = WordQuery::new()
        .related(RelationKind::Follows, "wreak")
        .max_results(10);

    match client.search(query).await {
        Ok(entries) => {
            for entry in &entries {
                println!("{}", entry.word);
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
