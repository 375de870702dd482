//! In-memory catalog adapter.
//!
//! The original deployment shipped a hardcoded six-product list in some
//! revisions; here that list lives on as seed data. The in-memory adapter is
//! the substitutable fake for tests - MongoDB stays the production source.

use async_trait::async_trait;

use petstore_types::{CatalogError, Product, ProductCatalog};

/// Catalog served from a fixed in-process list.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    products: Vec<Product>,
}

impl MemoryCatalog {
    /// Creates a catalog over the given products.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Creates a catalog pre-populated with the six-product seed list.
    pub fn seeded() -> Self {
        Self::new(seed_products())
    }
}

#[async_trait]
impl ProductCatalog for MemoryCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.clone())
    }
}

/// The seed catalog, mirroring the documents the store is populated with.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "chicken-coop-cleaner".into(),
            name: "Cozy Coop Cleaner".into(),
            description: "Keep your hens happy with a lavender-scented, pet-safe coop spray."
                .into(),
            price: 14.99,
            image_url:
                "https://images.unsplash.com/photo-1573333744619-00d101e99133??auto=format&fit=crop&w=600&q=80"
                    .into(),
            category: "Chickens".into(),
        },
        Product {
            id: "turtle-terrarium-kit".into(),
            name: "Lagoon Terrarium Starter Kit".into(),
            description:
                "All-in-one habitat kit for small turtles with basking dock and LED lighting."
                    .into(),
            price: 89.5,
            image_url:
                "https://images.unsplash.com/photo-1663907181190-6ed43256458d?auto=format&fit=crop&w=600&q=80"
                    .into(),
            category: "Turtles".into(),
        },
        Product {
            id: "catnip-toy-set".into(),
            name: "Feline Fiesta Catnip Toys".into(),
            description: "A trio of hand-stitched toys packed with organic catnip.".into(),
            price: 22.0,
            image_url:
                "https://images.unsplash.com/photo-1518791841217-8f162f1e1131?auto=format&fit=crop&w=600&q=80"
                    .into(),
            category: "Cats".into(),
        },
        Product {
            id: "guinea-pig-salad".into(),
            name: "Garden Greens Salad Mix".into(),
            description: "Dried chamomile, carrot curls, and rose hips for guinea pigs and rabbits."
                .into(),
            price: 11.75,
            image_url:
                "https://images.unsplash.com/photo-1612267168669-679c961c5b31?auto=format&fit=crop&w=600&q=80"
                    .into(),
            category: "Small Pets".into(),
        },
        Product {
            id: "dog-spa-shampoo".into(),
            name: "Tail Waggers Spa Shampoo".into(),
            description: "Oatmeal and aloe shampoo that soothes dry skin and keeps coats shiny."
                .into(),
            price: 18.25,
            image_url:
                "https://images.unsplash.com/photo-1518717758536-85ae29035b6d?auto=format&fit=crop&w=600&q=80"
                    .into(),
            category: "Dogs".into(),
        },
        Product {
            id: "parakeet-playground".into(),
            name: "Skyline Play Tower".into(),
            description:
                "Colorful perches and bells designed to keep parakeets entertained for hours."
                    .into(),
            price: 32.4,
            image_url:
                "https://images.unsplash.com/photo-1652536122320-ca870caea2ae?auto=format&fit=crop&w=600&q=80"
                    .into(),
            category: "Birds".into(),
        },
    ]
}
