use clap::{Parser, Subcommand};
use vitrine_commerce::{ProductField, RequestContext, StorefrontClient};
use vitrine_core::{
    assemble_home, BEST_SELLING_FETCH_COUNT, FEATURED_FETCH_COUNT, NEWEST_FETCH_COUNT,
};

#[derive(Debug, Parser)]
#[command(name = "vitrine-cli")]
#[command(about = "Vitrine storefront command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch and assemble the homepage lists for a locale, printed as JSON.
    Home {
        /// Locale to fetch, defaults to the configured default locale.
        #[arg(long)]
        locale: Option<String>,
        /// Fetch draft content instead of published content.
        #[arg(long)]
        preview: bool,
    },
    /// Verify that the commerce backend is reachable with the configured
    /// credentials.
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = vitrine_core::load_app_config()?;
    let locales = vitrine_core::load_locales(&config.locales_path)?;
    let client = StorefrontClient::from_config(&config)?;
    tracing::debug!(
        base_url = %config.storefront_api_url,
        locales = locales.locales.len(),
        "storefront client ready"
    );

    let cli = Cli::parse();
    match cli.command {
        Commands::Home { locale, preview } => {
            let locale = locale.unwrap_or_else(|| config.default_locale.clone());
            anyhow::ensure!(
                locales.contains(&locale),
                "locale {locale} is not in {}",
                config.locales_path.display()
            );
            let ctx = RequestContext {
                channel_id: locales.get(&locale).and_then(|l| l.channel_id.clone()),
                locale,
                preview,
            };

            let (featured, best_selling, newest) = tokio::try_join!(
                client.get_all_products(ProductField::Featured, FEATURED_FETCH_COUNT, &ctx),
                client.get_all_products(ProductField::BestSelling, BEST_SELLING_FETCH_COUNT, &ctx),
                client.get_all_products(ProductField::Newest, NEWEST_FETCH_COUNT, &ctx),
            )?;
            let lists = assemble_home(&featured, &best_selling, &newest);

            let out = serde_json::json!({
                "locale": ctx.locale,
                "featured": lists.featured,
                "best_selling": lists.best_selling,
                "marquee": lists.marquee(),
                "newest_products": newest,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Commands::Check => {
            let ctx = RequestContext::published(&config.default_locale);
            let site = client.get_site_info(&ctx).await?;
            println!(
                "backend ok: {} categories, {} brands",
                site.categories.len(),
                site.brands.len()
            );
        }
    }

    Ok(())
}
