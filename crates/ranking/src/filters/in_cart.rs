//! Filter to remove products already in the cart.

use crate::context::RankingContext;
use crate::traits::Filter;
use catalog::Product;

/// Removes candidates the shopper already has in the cart.
///
/// ## Algorithm
/// Uses the HashSet in RankingContext.cart_ids for O(1) lookups.
pub struct InCartFilter;

impl Filter for InCartFilter {
    fn name(&self) -> &str {
        "InCartFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a Product>,
        context: &RankingContext,
    ) -> Vec<&'a Product> {
        candidates
            .into_iter()
            .filter(|product| !context.in_cart(&product.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Catalog;

    #[test]
    fn test_in_cart_filter() {
        let catalog = Catalog::sample();
        let mut context = RankingContext::default();
        context.cart_ids.insert("2".to_string());
        context.cart_ids.insert("5".to_string());

        let candidates: Vec<&Product> = catalog.products().iter().collect();
        let filtered = InCartFilter.apply(candidates, &context);

        let ids: Vec<&str> = filtered.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "4", "6", "7", "8"]);
    }
}
