use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use shelfcli::{cli, config, error, types::Status, utils};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Browse the bookshelf, optionally filtered
    Shelf(ShelfOptions),

    /// Show one book in full
    Show(ShowOptions),

    /// Add a book to the library
    Add(cli::AddOptions),

    /// Edit a book in an interactive session
    Edit(EditOptions),

    /// Delete a book from the library
    Delete(DeleteOptions),

    /// Show library statistics
    Stats,

    /// Look up book details by ISBN
    Lookup(LookupOptions),

    /// Open a book's link in the browser
    Open(OpenOptions),

    /// Some helper information about the server and collection
    Info(InfoOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Browse the bookshelf, optionally filtered")]
pub struct ShelfOptions {
    /// Search titles, authors and descriptions
    #[clap(long)]
    pub search: Option<String>,

    /// Filter by book type(s), comma separated: physical, kindle, audible, ebook
    #[clap(long = "type", value_parser = utils::parse_book_kinds)]
    pub kind: Option<utils::BookKinds>,

    /// Filter by reading status
    #[clap(long, value_parser = utils::parse_status)]
    pub status: Option<Status>,

    /// Minimum rating (1-5)
    #[clap(long)]
    pub rating: Option<u8>,

    /// Filter by genre
    #[clap(long)]
    pub genre: Option<String>,

    /// Filter by author
    #[clap(long)]
    pub author: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ShowOptions {
    /// Id of the book to show
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct EditOptions {
    /// Id of the book to edit
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteOptions {
    /// Id of the book to delete
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct LookupOptions {
    /// ISBN to look up (hyphens and spaces are ignored)
    pub isbn: String,
}

#[derive(Parser, Debug, Clone)]
pub struct OpenOptions {
    /// Id of the book whose link to open
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct InfoOptions {
    /// List the featured ISBN set
    #[clap(long)]
    featured: bool,

    /// Check the bookshelf server's health
    #[clap(long)]
    health: bool,

    /// Print the collection size
    #[clap(long)]
    count: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Shelf(opt) => {
            cli::shelf(
                opt.search, opt.kind, opt.status, opt.rating, opt.genre, opt.author,
            )
            .await
        }
        Command::Show(opt) => cli::show(opt.id).await,
        Command::Add(opt) => cli::add(opt).await,
        Command::Edit(opt) => cli::edit(opt.id).await,
        Command::Delete(opt) => cli::delete(opt.id).await,
        Command::Stats => cli::stats().await,
        Command::Lookup(opt) => cli::lookup(opt.isbn).await,
        Command::Open(opt) => cli::open(opt.id).await,
        Command::Info(opt) => cli::info(opt.featured, opt.health, opt.count).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
