use catalog::Catalog;
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = Path::new("data/catalog.json");

    println!("Loading catalog from {}...\n", path.display());

    let start = Instant::now();
    let catalog = Catalog::load_from_file(path).expect("Failed to load catalog");
    let elapsed = start.elapsed();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Products: {}", catalog.len());
    println!("Categories: {}", catalog.categories().join(", "));
    println!(
        "Matches sample catalog: {}",
        catalog.products() == Catalog::sample().products()
    );
}
