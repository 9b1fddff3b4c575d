use anyhow::Context;
use tracing::info;

use auth::demo_authenticator::{DEMO_EMAIL, DEMO_PASSWORD};
use business::domain::shared::value_objects::{ProducerId, ProductId};

use super::dependency_injection::DependencyContainer;

/// What a scripted visit ended with.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    pub signed_in: bool,
    pub checkout_items: u64,
    pub checkout_total: String,
    pub search_hits: usize,
    pub cart_empty_after_sign_out: bool,
}

/// Replays a typical visit the way the screens drive the stores: sign in,
/// browse a producer, fill the cart, search, check out, sign out.
pub struct ShoppingSession;

impl ShoppingSession {
    pub async fn run(container: &DependencyContainer) -> anyhow::Result<SessionReport> {
        // Tab bar badge follows the cart item count.
        let mut cart_updates = container.cart.subscribe();
        let badge = tokio::spawn(async move {
            while cart_updates.changed().await.is_ok() {
                let count = cart_updates.borrow_and_update().item_count();
                info!(target: "storefront::tabs", badge = count, "Cart badge updated");
            }
        });

        // Welcome screen
        let signed_in = container.auth.login(DEMO_EMAIL, DEMO_PASSWORD).await;
        if let Some(user) = container.auth.current_user() {
            info!(name = %user.name, "Welcome back");
        }

        // Producer detail screen
        let producer = container
            .catalog
            .get_producer_by_id(ProducerId::new(1))
            .await
            .context("producer 1 missing from catalog")?;
        let products = container
            .catalog
            .get_products_by_producer(producer.id)
            .await
            .context("could not list producer products")?;
        info!(producer = %producer.name, products = products.len(), "Browsing producer");

        for product in products.iter().filter(|p| p.category == "Vegetables").take(2) {
            container.cart.add_item(product.to_cart_line());
        }
        if let Some(first) = products.first() {
            container.cart.add_item(first.to_cart_line());
        }

        // Cart screen +/- buttons
        container.cart.change_quantity(ProductId::new(2), 1);
        container.cart.change_quantity(ProductId::new(2), -2);

        // Search screen
        container.search.set_search_query("organic");
        container
            .search
            .perform_search("organic")
            .completed()
            .await
            .context("search task failed")?;
        let search = container.search.state();
        let search_hits = search.results.producers.len() + search.results.products.len();
        info!(
            producers = search.results.producers.len(),
            products = search.results.products.len(),
            "Search results for '{}'",
            search.query
        );
        if let Some(hit) = search
            .results
            .products
            .iter()
            .find(|p| container.cart.get_item_quantity(p.id) == 0)
        {
            container.cart.add_item(hit.to_cart_line());
        }

        // Checkout confirmation
        let summary = container.cart.checkout_summary();
        info!(
            items = summary.item_count,
            total = %summary.formatted_total(),
            "Proceed to checkout"
        );

        // Profile screen
        container.auth.logout();
        let cart_empty_after_sign_out = container.cart.state().is_empty();

        tokio::task::yield_now().await;
        badge.abort();

        Ok(SessionReport {
            signed_in,
            checkout_items: summary.item_count,
            checkout_total: summary.formatted_total(),
            search_hits,
            cart_empty_after_sign_out,
        })
    }
}
