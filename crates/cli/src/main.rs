use anyhow::{anyhow, Context, Result};
use catalog::{Catalog, CategoryFilter, Product, SortOrder};
use clap::{Parser, Subcommand};
use colored::Colorize;
use ranking::{RankingConfig, RecommendationEngine, RecommendationResult};
use rust_decimal::Decimal;
use session::{CartEvent, Session};
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;

/// Storefront - product catalog, cart and recommendations
#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Browse the storefront catalog and rank recommendations", long_about = None)]
struct Cli {
    /// Path to a JSON catalog file (defaults to the built-in sample catalog)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products the way the product grid shows them
    Products {
        /// Category to show, or "all"
        #[arg(long, default_value = "all")]
        category: String,

        /// featured, price-low, price-high or rating
        #[arg(long, default_value = "featured")]
        sort: String,
    },

    /// Search for products by name
    Search {
        /// Case-insensitive name or part of a name
        #[arg(long)]
        query: String,
    },

    /// Recommend products for a cart and browsing history
    Recommend {
        /// Product ids in the cart (comma separated)
        #[arg(long, value_delimiter = ',')]
        cart: Vec<String>,

        /// Additionally viewed product ids (comma separated)
        #[arg(long, value_delimiter = ',')]
        viewed: Vec<String>,

        /// Number of products per list
        #[arg(long, default_value = "4")]
        limit: usize,

        /// Show scores and the top category
        #[arg(long)]
        explain: bool,
    },

    /// Show trending products
    Trending {
        /// Number of products to show
        #[arg(long, default_value = "4")]
        limit: usize,
    },

    /// Fill a cart and show its totals
    Cart {
        /// Product id to add; repeat to add more than one unit
        #[arg(long = "add", required = true)]
        add: Vec<String>,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let catalog = match &cli.catalog {
        Some(path) => Catalog::load_from_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => Catalog::sample(),
    };
    println!(
        "{} Loaded {} products in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Products { category, sort } => handle_products(&catalog, &category, &sort),
        Commands::Search { query } => handle_search(&catalog, &query),
        Commands::Recommend {
            cart,
            viewed,
            limit,
            explain,
        } => handle_recommend(&catalog, &cart, &viewed, limit, explain)?,
        Commands::Trending { limit } => handle_trending(&catalog, limit),
        Commands::Cart { add } => handle_cart(&catalog, &add)?,
    }

    Ok(())
}

/// Handle the 'products' command
fn handle_products(catalog: &Catalog, category: &str, sort: &str) {
    let filter = CategoryFilter::parse(category);
    // Infallible: unknown keys mean "featured"
    let sort: SortOrder = sort.parse().unwrap_or_default();

    let categories = std::iter::once("all")
        .chain(catalog.categories().iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(", ");
    println!("{} {}", "Categories:".bold(), categories);

    let products = catalog.browse(&filter, sort);
    println!(
        "{}",
        format!("Showing {} products", products.len()).bold().blue()
    );
    for product in products {
        print_product(product);
    }
}

/// Handle the 'search' command
fn handle_search(catalog: &Catalog, query: &str) {
    let results = catalog.search(query);
    println!(
        "{}",
        format!("Search results for '{}':", query).bold().blue()
    );
    if results.is_empty() {
        println!("  No products found");
    }
    for product in results {
        print_product(product);
    }
}

/// Handle the 'recommend' command
fn handle_recommend(
    catalog: &Catalog,
    cart: &[String],
    viewed: &[String],
    limit: usize,
    explain: bool,
) -> Result<()> {
    let mut session = Session::new();
    for id in cart {
        let product = catalog
            .get_product(id)
            .ok_or_else(|| anyhow!("Product {} not found", id))?;
        session.add_to_cart(product);
    }
    for id in viewed {
        session.view(id);
    }

    let engine = RecommendationEngine::new(RankingConfig::default().with_limit(limit));
    debug!("Ranking with {:?}", engine.config());
    let snapshot = session.snapshot();

    let explanation = if explain {
        Some(engine.explain(catalog, &snapshot.cart_entries, &snapshot.viewed_ids))
    } else {
        None
    };
    let result = match &explanation {
        Some(explanation) => RecommendationResult {
            recommended: explanation.recommended(),
            trending: engine.trending(catalog),
        },
        None => engine.recommend(catalog, &snapshot.cart_entries, &snapshot.viewed_ids),
    };

    if result.is_empty() {
        println!("No recommendations available");
        return Ok(());
    }

    if !result.recommended.is_empty() {
        println!("{}", "Recommended For You:".bold().blue());
        match &explanation {
            Some(explanation) => {
                let top = explanation
                    .context
                    .top_category
                    .as_deref()
                    .unwrap_or("none");
                println!("   Top category: {}", top.yellow());
                for (rank, scored) in explanation.ranked.iter().enumerate() {
                    println!(
                        "{}. {} - Score: {:.2}",
                        (rank + 1).to_string().green(),
                        scored.product.name,
                        scored.score
                    );
                }
            }
            None => print_ranked(&result.recommended),
        }
    }

    println!("{}", "Trending Now:".bold().blue());
    print_ranked(&result.trending);
    Ok(())
}

/// Handle the 'trending' command
fn handle_trending(catalog: &Catalog, limit: usize) {
    let engine = RecommendationEngine::new(RankingConfig::default().with_limit(limit));
    let trending = engine.trending(catalog);

    println!("{}", "Trending Now:".bold().blue());
    for (rank, product) in trending.iter().enumerate() {
        println!(
            "{}. {} - {} reviews, rated {:.1}",
            (rank + 1).to_string().green(),
            product.name,
            product.reviews,
            product.rating
        );
    }
}

/// Handle the 'cart' command
fn handle_cart(catalog: &Catalog, add: &[String]) -> Result<()> {
    let mut session = Session::new();
    for id in add {
        let product = catalog
            .get_product(id)
            .ok_or_else(|| anyhow!("Product {} not found", id))?;
        match session.add_to_cart(product) {
            CartEvent::Added { name, .. } => println!("{} {} added to cart", "+".green(), name),
            CartEvent::QuantityIncreased { name, quantity, .. } => {
                println!("{} {} quantity now {}", "+".green(), name, quantity)
            }
            CartEvent::QuantityChanged { .. } | CartEvent::Removed { .. } => {}
        }
    }

    let cart = &session.cart;
    println!(
        "{}",
        format!("Shopping Cart ({} items)", cart.item_count()).bold().blue()
    );
    for entry in cart.entries() {
        println!(
            "  {} x{} - ${}",
            entry.product.name,
            entry.quantity,
            money(entry.line_total())
        );
    }

    let totals = cart.totals();
    println!("{}Subtotal: ${}", "• ".cyan(), money(totals.subtotal));
    if totals.shipping.is_zero() {
        println!("{}Shipping: {}", "• ".cyan(), "Free".green());
    } else {
        println!("{}Shipping: ${}", "• ".cyan(), money(totals.shipping));
    }
    println!("{}Tax: ${}", "• ".cyan(), money(totals.tax));
    println!("{}", format!("Total: ${}", money(totals.total)).bold());
    Ok(())
}

fn print_product(product: &Product) {
    let mut badges = Vec::new();
    if product.is_new {
        badges.push("New".cyan().to_string());
    }
    let discount = product.discount_percent();
    if discount > 0 {
        badges.push(format!("-{}%", discount).red().to_string());
    }
    if product.is_featured {
        badges.push("Featured".magenta().to_string());
    }

    println!(
        "{}: {} [{}] ${} - rated {:.1} ({} reviews) {}",
        product.id,
        product.name,
        product.category,
        money(product.price),
        product.rating,
        product.reviews,
        badges.join(" ")
    );
}

fn print_ranked(products: &[Product]) {
    for (rank, product) in products.iter().enumerate() {
        println!(
            "{}. {} [{}] ${}",
            (rank + 1).to_string().green(),
            product.name,
            product.category,
            money(product.price)
        );
    }
}

/// Two decimal places, the way prices are displayed
fn money(amount: Decimal) -> String {
    format!("{:.2}", amount)
}
