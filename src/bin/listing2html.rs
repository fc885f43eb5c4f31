//! CLI binary for listing2html.
//!
//! A thin shim over the library crate: every subcommand opens the session
//! store, does one thing, and prints the result.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use listing2html::{
    defaults::{account_name, default_record},
    embed::image_data_url,
    input::load_record,
    render, Copywriter, CopywriterConfig, Edit, ImageField, ImageList, ListingError, ListingStore,
    SaveReport, Session, ShippingField, StoreConfig, TextList,
};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers ──────────────────────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn yellow(s: &str) -> String {
    format!("\x1b[33m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Render the saved listing to a file for copy-paste
  listing2html render -o listing.html

  # Render a listing JSON file (or URL) without touching the store
  listing2html render --input listing.json

  # Start over from the built-in listing
  listing2html init --force

  # Edit the saved listing
  listing2html edit title "Retro Metal Lampshade Easy Fit Pendant Shade"
  listing2html edit text add about
  listing2html edit text set about 0 "DESIGN: Retro style dome shade"
  listing2html edit row add "Wattage"
  listing2html edit row rename 1 "build material"
  listing2html edit item set 0 customRow1 "40W"

  # Embed a local photo as a data URL and append it to the feature grid
  listing2html embed photo.jpg --add feature

  # Draft copy with an LLM
  listing2html describe
  listing2html optimize-title
  listing2html describe --with-title

ENVIRONMENT VARIABLES:
  LISTING2HTML_STORE_DIR  Directory for saved listings (default: .listing2html)
  OPENAI_API_KEY          OpenAI API key
  ANTHROPIC_API_KEY       Anthropic API key
  GEMINI_API_KEY          Google Gemini API key
  EDGEQUAKE_LLM_PROVIDER  Override provider (openai, anthropic, gemini, ollama)
  EDGEQUAKE_MODEL         Override model ID
"#;

/// Build marketplace listing descriptions and render them to HTML.
#[derive(Parser, Debug)]
#[command(
    name = "listing2html",
    version,
    about = "Build marketplace listing descriptions and render them to HTML",
    long_about = "Edit a product listing (title, images, comparison table, detail panels) and \
render it into one self-contained HTML fragment ready to paste into a marketplace description \
field. Optional LLM helpers draft the description and optimize the title.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Directory holding the saved listing.
    #[arg(long, global = true, env = "LISTING2HTML_STORE_DIR")]
    store_dir: Option<PathBuf>,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, global = true, env = "LISTING2HTML_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, global = true, env = "LISTING2HTML_QUIET")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a listing to HTML
    Render {
        /// Listing JSON path or HTTP/HTTPS URL. Defaults to the saved listing.
        #[arg(long)]
        input: Option<String>,

        /// Write HTML to this file instead of stdout.
        #[arg(short, long, env = "LISTING2HTML_OUTPUT")]
        output: Option<PathBuf>,

        /// HTTP download timeout in seconds.
        #[arg(long, env = "LISTING2HTML_DOWNLOAD_TIMEOUT", default_value_t = 120)]
        download_timeout: u64,
    },
    /// Replace the saved listing with the built-in one, or with `--from`
    Init {
        /// Listing JSON path or URL to import instead of the defaults.
        #[arg(long)]
        from: Option<String>,

        /// Overwrite an existing saved listing.
        #[arg(long)]
        force: bool,

        #[arg(long, env = "LISTING2HTML_DOWNLOAD_TIMEOUT", default_value_t = 120)]
        download_timeout: u64,
    },
    /// Print the saved listing
    Show {
        /// Print the full record as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Apply one edit to the saved listing
    Edit {
        #[command(subcommand)]
        edit: EditCmd,
    },
    /// Draft a product description with an LLM
    Describe {
        /// Also optimize the title, concurrently.
        #[arg(long)]
        with_title: bool,

        #[command(flatten)]
        llm: LlmArgs,
    },
    /// Rewrite the title for search and click-through with an LLM
    OptimizeTitle {
        #[command(flatten)]
        llm: LlmArgs,
    },
    /// Encode a local image as a data URL
    Embed {
        path: PathBuf,

        /// Append the image to this list of the saved listing instead of printing.
        #[arg(long, value_enum)]
        add: Option<ListArg>,

        /// Alt text for the added image.
        #[arg(long, default_value = "")]
        alt: String,
    },
}

#[derive(clap::Args, Debug)]
struct LlmArgs {
    /// LLM model ID (e.g. gpt-4.1-nano, gpt-4.1-mini, claude-sonnet-4-20250514).
    #[arg(long, env = "EDGEQUAKE_MODEL")]
    model: Option<String>,

    /// LLM provider: openai, anthropic, gemini, ollama, azure.
    #[arg(long, env = "EDGEQUAKE_PROVIDER")]
    provider: Option<String>,

    /// LLM temperature (0.0–2.0).
    #[arg(long, env = "LISTING2HTML_TEMPERATURE", default_value_t = 0.7)]
    temperature: f32,

    /// Retries per call on LLM failure.
    #[arg(long, env = "LISTING2HTML_MAX_RETRIES", default_value_t = 2)]
    max_retries: u32,

    /// Per-call LLM timeout in seconds.
    #[arg(long, env = "LISTING2HTML_API_TIMEOUT", default_value_t = 60)]
    api_timeout: u64,

    /// Print the result without saving it.
    #[arg(long)]
    dry_run: bool,
}

/// Indexes are 0-based.
#[derive(Subcommand, Debug)]
enum EditCmd {
    /// Set the title (max 79 characters)
    Title { value: String },
    /// Set the internal account id
    Account { id: String },
    Description { value: String },
    AboutUs { value: String },
    LogoUrl { value: String },
    LogoAlt { value: String },
    StoreUrl { value: String },
    /// Text above the comparison table
    ComparisonDescription { value: String },
    BrandBar { value: String },
    /// Text under the feature grid
    FeatureFooter { value: String },
    Shipping {
        #[arg(value_enum)]
        field: ShippingArg,
        value: String,
    },
    /// Main and feature images
    Image {
        #[command(subcommand)]
        action: ImageCmd,
    },
    /// Bullets under a main image
    Bullet {
        #[command(subcommand)]
        action: BulletCmd,
    },
    /// Specifications, package contents and about-this-item lines
    Text {
        #[command(subcommand)]
        action: TextCmd,
    },
    /// Comparison table items
    Item {
        #[command(subcommand)]
        action: ItemCmd,
    },
    /// Comparison table rows
    Row {
        #[command(subcommand)]
        action: RowCmd,
    },
}

#[derive(Subcommand, Debug)]
enum ImageCmd {
    Add {
        #[arg(value_enum)]
        list: ListArg,
    },
    Remove {
        #[arg(value_enum)]
        list: ListArg,
        index: usize,
    },
    Set {
        #[arg(value_enum)]
        list: ListArg,
        index: usize,
        #[arg(value_enum)]
        field: ImageFieldArg,
        value: String,
    },
}

#[derive(Subcommand, Debug)]
enum BulletCmd {
    Add { image: usize },
    Set { image: usize, bullet: usize, value: String },
    Remove { image: usize, bullet: usize },
}

#[derive(Subcommand, Debug)]
enum TextCmd {
    Add {
        #[arg(value_enum)]
        list: TextListArg,
    },
    Set {
        #[arg(value_enum)]
        list: TextListArg,
        index: usize,
        value: String,
    },
    Remove {
        #[arg(value_enum)]
        list: TextListArg,
        index: usize,
    },
}

#[derive(Subcommand, Debug)]
enum ItemCmd {
    Add,
    Remove { index: usize },
    /// FIELD is image, imageAlt, title, link, or a row key
    Set { index: usize, field: String, value: String },
}

#[derive(Subcommand, Debug)]
enum RowCmd {
    Add { label: String },
    /// Change a row's key; item values move with it
    Rename { index: usize, key: String },
    Label { index: usize, label: String },
    Remove { key: String },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ListArg {
    Main,
    Feature,
}

impl From<ListArg> for ImageList {
    fn from(v: ListArg) -> Self {
        match v {
            ListArg::Main => ImageList::Main,
            ListArg::Feature => ImageList::Feature,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ImageFieldArg {
    Url,
    Alt,
    Link,
    Title,
    Details,
}

impl From<ImageFieldArg> for ImageField {
    fn from(v: ImageFieldArg) -> Self {
        match v {
            ImageFieldArg::Url => ImageField::Url,
            ImageFieldArg::Alt => ImageField::Alt,
            ImageFieldArg::Link => ImageField::Link,
            ImageFieldArg::Title => ImageField::Title,
            ImageFieldArg::Details => ImageField::Details,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum TextListArg {
    Specifications,
    Package,
    About,
}

impl From<TextListArg> for TextList {
    fn from(v: TextListArg) -> Self {
        match v {
            TextListArg::Specifications => TextList::Specifications,
            TextListArg::Package => TextList::PackageIncludes,
            TextListArg::About => TextList::AboutItems,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ShippingArg {
    Free,
    FirstClass,
    International,
}

impl From<ShippingArg> for ShippingField {
    fn from(v: ShippingArg) -> Self {
        match v {
            ShippingArg::Free => ShippingField::FreeShipping,
            ShippingArg::FirstClass => ShippingField::FirstClass,
            ShippingArg::International => ShippingField::International,
        }
    }
}

impl From<EditCmd> for Edit {
    fn from(cmd: EditCmd) -> Self {
        match cmd {
            EditCmd::Title { value } => Edit::SetTitle(value),
            EditCmd::Account { id } => Edit::SetAccount(id),
            EditCmd::Description { value } => Edit::SetDescription(value),
            EditCmd::AboutUs { value } => Edit::SetAboutUs(value),
            EditCmd::LogoUrl { value } => Edit::SetLogoUrl(value),
            EditCmd::LogoAlt { value } => Edit::SetLogoAlt(value),
            EditCmd::StoreUrl { value } => Edit::SetStoreUrl(value),
            EditCmd::ComparisonDescription { value } => Edit::SetComparisonDescription(value),
            EditCmd::BrandBar { value } => Edit::SetComparisonBrandBar(value),
            EditCmd::FeatureFooter { value } => Edit::SetFeatureFooter(value),
            EditCmd::Shipping { field, value } => Edit::SetShipping {
                field: field.into(),
                value,
            },
            EditCmd::Image { action } => match action {
                ImageCmd::Add { list } => Edit::AddImage(list.into()),
                ImageCmd::Remove { list, index } => Edit::RemoveImage {
                    list: list.into(),
                    index,
                },
                ImageCmd::Set {
                    list,
                    index,
                    field,
                    value,
                } => Edit::UpdateImage {
                    list: list.into(),
                    index,
                    field: field.into(),
                    value,
                },
            },
            EditCmd::Bullet { action } => match action {
                BulletCmd::Add { image } => Edit::AddBullet { image },
                BulletCmd::Set {
                    image,
                    bullet,
                    value,
                } => Edit::SetBullet {
                    image,
                    bullet,
                    value,
                },
                BulletCmd::Remove { image, bullet } => Edit::RemoveBullet { image, bullet },
            },
            EditCmd::Text { action } => match action {
                TextCmd::Add { list } => Edit::AddText(list.into()),
                TextCmd::Set { list, index, value } => Edit::SetText {
                    list: list.into(),
                    index,
                    value,
                },
                TextCmd::Remove { list, index } => Edit::RemoveText {
                    list: list.into(),
                    index,
                },
            },
            EditCmd::Item { action } => match action {
                ItemCmd::Add => Edit::AddComparisonItem,
                ItemCmd::Remove { index } => Edit::RemoveComparisonItem { index },
                ItemCmd::Set {
                    index,
                    field,
                    value,
                } => Edit::SetComparisonField {
                    index,
                    field,
                    value,
                },
            },
            EditCmd::Row { action } => match action {
                RowCmd::Add { label } => Edit::AddRow { label },
                RowCmd::Rename { index, key } => Edit::RenameRowKey { index, key },
                RowCmd::Label { index, label } => Edit::SetRowLabel { index, label },
                RowCmd::Remove { key } => Edit::RemoveRow { key },
            },
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let mut store_config = StoreConfig::builder();
    if let Some(ref dir) = cli.store_dir {
        store_config = store_config.dir(dir);
    }
    let store_config = store_config.build().context("Invalid store configuration")?;
    let store = ListingStore::from_config(&store_config);

    match cli.command {
        Commands::Render {
            input,
            output,
            download_timeout,
        } => {
            let html = match input {
                Some(ref src) => render(
                    &load_record(src, download_timeout)
                        .await
                        .context("Failed to load listing")?,
                ),
                None => Session::open(store).html().to_string(),
            };
            match output {
                Some(ref path) => {
                    write_atomic(path, &html).await?;
                    if !cli.quiet {
                        eprintln!(
                            "{}  {} bytes  →  {}",
                            green("✔"),
                            html.len(),
                            bold(&path.display().to_string())
                        );
                    }
                }
                None => {
                    let stdout = io::stdout();
                    let mut handle = stdout.lock();
                    handle
                        .write_all(html.as_bytes())
                        .context("Failed to write to stdout")?;
                }
            }
        }

        Commands::Init {
            from,
            force,
            download_timeout,
        } => {
            let durable = store_config.durable_dir().join(format!("{}.json", store_config.key));
            if durable.exists() && !force {
                anyhow::bail!(
                    "A saved listing already exists at {}. Pass --force to replace it.",
                    durable.display()
                );
            }
            let record = match from {
                Some(ref src) => load_record(src, download_timeout)
                    .await
                    .context("Failed to load listing")?,
                None => default_record(),
            };
            let mut session = Session::open(store);
            let report = session.replace(record);
            report_save(&report, cli.quiet);
        }

        Commands::Show { json } => {
            let session = Session::open(store);
            let rec = session.record();
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(rec).context("Failed to serialise listing")?
                );
            } else {
                println!("Title:        {}", rec.title);
                println!(
                    "Account:      {} {}",
                    rec.account_id,
                    dim(account_name(&rec.account_id).unwrap_or("(unknown)"))
                );
                println!("Main images:  {}", rec.main_images.len());
                println!("Features:     {}", rec.feature_images.len());
                println!("Compare:      {} items", rec.comparison_items.len());
                for (i, row) in rec.effective_rows().iter().enumerate() {
                    println!("  row {i}:      {} {}", row.label, dim(&format!("({})", row.key)));
                }
                println!("Specs:        {}", rec.specifications.len());
                println!("About items:  {}", rec.about_items.len());
                println!("HTML:         {} bytes", session.html().len());
            }
        }

        Commands::Edit { edit } => {
            let mut session = Session::open(store);
            match session.apply(edit.into()) {
                Some(report) => report_save(&report, cli.quiet),
                None => {
                    if !cli.quiet {
                        eprintln!("{}  nothing changed", yellow("⚠"));
                    }
                }
            }
        }

        Commands::Describe { with_title, llm } => {
            let copywriter = build_copywriter(&llm)?;
            let mut session = Session::open(store);
            let current = session.record().clone();

            let spinner = spinner(cli.quiet, "Drafting description…");
            let next = if with_title {
                let (described, retitled) =
                    futures::join!(copywriter.describe(&current), copywriter.retitle(&current));
                listing2html::ListingRecord {
                    title: retitled.title,
                    ..described
                }
            } else {
                copywriter.describe(&current).await
            };
            spinner.finish_and_clear();

            if with_title {
                println!("{}", next.title);
            }
            println!("{}", next.description);
            if !llm.dry_run && next != current {
                report_save(&session.replace(next), cli.quiet);
            }
        }

        Commands::OptimizeTitle { llm } => {
            let copywriter = build_copywriter(&llm)?;
            let mut session = Session::open(store);
            let current = session.record().clone();

            let spinner = spinner(cli.quiet, "Optimizing title…");
            let next = copywriter.retitle(&current).await;
            spinner.finish_and_clear();

            println!("{}", next.title);
            if !llm.dry_run && next != current {
                report_save(&session.replace(next), cli.quiet);
            }
        }

        Commands::Embed { path, add, alt } => {
            let url = image_data_url(&path)
                .with_context(|| format!("Failed to embed {}", path.display()))?;
            match add {
                None => println!("{url}"),
                Some(list) => {
                    let list = ImageList::from(list);
                    let mut session = Session::open(store);
                    let index = match list {
                        ImageList::Main => session.record().main_images.len(),
                        ImageList::Feature => session.record().feature_images.len(),
                    };
                    if let Some(report) = session.apply_all([
                        Edit::AddImage(list),
                        Edit::UpdateImage {
                            list,
                            index,
                            field: ImageField::Alt,
                            value: alt,
                        },
                        Edit::UpdateImage {
                            list,
                            index,
                            field: ImageField::Url,
                            value: url,
                        },
                    ]) {
                        report_save(&report, cli.quiet);
                    }
                }
            }
        }
    }

    Ok(())
}

fn build_copywriter(llm: &LlmArgs) -> Result<Copywriter<listing2html::LlmGenerator>> {
    let mut config = CopywriterConfig::builder()
        .temperature(llm.temperature)
        .max_retries(llm.max_retries)
        .api_timeout_secs(llm.api_timeout)
        .build()
        .context("Invalid configuration")?;
    config.model = llm.model.clone();
    config.provider_name = llm.provider.clone();
    Copywriter::from_config(config).context("Failed to initialise LLM provider")
}

fn spinner(quiet: bool, msg: &'static str) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}  {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]),
    );
    bar.set_message(msg);
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}

fn report_save(report: &SaveReport, quiet: bool) {
    if quiet {
        return;
    }
    match report.durable {
        None => eprintln!("{}  saved", green("✔")),
        Some(ref e) => eprintln!("{}  not saved: {e}", yellow("⚠")),
    }
}

/// Write to a sibling temp file, then rename over `path`.
async fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let failed = |source| ListingError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(failed)?;
    }
    let tmp_path = path.with_extension("html.tmp");
    tokio::fs::write(&tmp_path, contents).await.map_err(failed)?;
    tokio::fs::rename(&tmp_path, path).await.map_err(failed)?;
    Ok(())
}
