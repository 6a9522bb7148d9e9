//! # Mock Data
//!
//! Random products and companies for the demo lists. Generated once at
//! startup and never mutated afterwards.
//!
//! Every record carries a UUID drawn from the same RNG as its text, so a
//! seeded run reproduces ids as well as names.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use uuid::{Builder, Uuid};

pub const DEFAULT_PRODUCT_COUNT: usize = 20;
pub const DEFAULT_COMPANY_COUNT: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Decimal with two fractional digits, e.g. `"129.00"`.
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub catchphrase: String,
}

/// How much data to generate, and from which seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataConfig {
    pub product_count: usize,
    pub company_count: usize,
    /// `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            product_count: DEFAULT_PRODUCT_COUNT,
            company_count: DEFAULT_COMPANY_COUNT,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Dataset {
    pub products: Vec<Product>,
    pub companies: Vec<Company>,
}

impl Dataset {
    pub fn generate(config: &DataConfig) -> Self {
        let dataset = match config.seed {
            Some(seed) => Self::generate_with(&mut StdRng::seed_from_u64(seed), config),
            None => Self::generate_with(&mut rand::rng(), config),
        };
        log::info!(
            "Generated {} products and {} companies (seed: {:?})",
            dataset.products.len(),
            dataset.companies.len(),
            config.seed
        );
        dataset
    }

    fn generate_with<R: Rng + ?Sized>(rng: &mut R, config: &DataConfig) -> Self {
        Self {
            products: products(rng, config.product_count),
            companies: companies(rng, config.company_count),
        }
    }
}

// ============================================================================
// Word Lists
// ============================================================================

const PRODUCT_ADJECTIVES: [&str; 16] = [
    "Small", "Ergonomic", "Rustic", "Intelligent", "Gorgeous", "Incredible", "Fantastic",
    "Practical", "Sleek", "Awesome", "Generic", "Handcrafted", "Handmade", "Licensed",
    "Refined", "Unbranded",
];

const PRODUCT_MATERIALS: [&str; 12] = [
    "Steel", "Wooden", "Concrete", "Plastic", "Cotton", "Granite", "Rubber", "Metal", "Soft",
    "Frozen", "Bronze", "Silk",
];

const PRODUCT_NOUNS: [&str; 20] = [
    "Chair", "Car", "Computer", "Keyboard", "Mouse", "Bike", "Ball", "Gloves", "Pants",
    "Shirt", "Table", "Shoes", "Hat", "Towels", "Soap", "Lamp", "Clock", "Kettle", "Wallet",
    "Backpack",
];

const PRODUCT_DESCRIPTIONS: [&str; 8] = [
    "Built to last through daily use, with a finish that still looks new after years on the shelf.",
    "A lightweight design that packs down small and sets up in under a minute.",
    "Designed with input from people who use one every day, so the details are where you expect them.",
    "Comes fully assembled and ready to use straight out of the box.",
    "A quiet, efficient everyday essential that does one job well.",
    "Balanced weight and a comfortable grip make it easy to handle for long stretches.",
    "Made from recycled materials without giving up strength or comfort.",
    "An updated take on a classic, with sharper lines and a more durable frame.",
];

const LAST_NAMES: [&str; 20] = [
    "Schmidt", "Okafor", "Lindqvist", "Moreau", "Tanaka", "Kowalski", "Haddad", "Brennan",
    "Novak", "Castillo", "Weber", "Osei", "Fischer", "Yilmaz", "Larsen", "Romano", "Nakamura",
    "Dubois", "Petrov", "Hughes",
];

const COMPANY_SUFFIXES: [&str; 5] = ["Inc", "LLC", "Group", "and Sons", "GmbH"];

const PHRASE_ADJECTIVES: [&str; 12] = [
    "Adaptive", "Balanced", "Centralized", "Cross-platform", "Distributed", "Enhanced",
    "Focused", "Integrated", "Managed", "Optimized", "Reactive", "Streamlined",
];

const PHRASE_DESCRIPTORS: [&str; 12] = [
    "24/7", "asynchronous", "bottom-line", "client-driven", "dynamic", "fault-tolerant",
    "global", "heuristic", "modular", "real-time", "scalable", "zero-defect",
];

const PHRASE_NOUNS: [&str; 12] = [
    "architecture", "capability", "database", "framework", "hierarchy", "initiative",
    "interface", "matrix", "moderator", "paradigm", "pipeline", "workforce",
];

// ============================================================================
// Generation
// ============================================================================

/// Generates `count` products in order.
pub fn products<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Product> {
    (0..count)
        .map(|_| Product {
            id: random_id(rng),
            name: format!(
                "{} {} {}",
                pick(rng, &PRODUCT_ADJECTIVES),
                pick(rng, &PRODUCT_MATERIALS),
                pick(rng, &PRODUCT_NOUNS)
            ),
            description: pick(rng, &PRODUCT_DESCRIPTIONS).to_string(),
            price: random_price(rng),
        })
        .collect()
}

/// Generates `count` companies in order.
pub fn companies<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Company> {
    (0..count)
        .map(|_| Company {
            id: random_id(rng),
            name: company_name(rng),
            catchphrase: format!(
                "{} {} {}",
                pick(rng, &PHRASE_ADJECTIVES),
                pick(rng, &PHRASE_DESCRIPTORS),
                pick(rng, &PHRASE_NOUNS)
            ),
        })
        .collect()
}

fn pick<R: Rng + ?Sized>(rng: &mut R, words: &[&'static str]) -> &'static str {
    words[rng.random_range(0..words.len())]
}

fn random_id<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    Builder::from_random_bytes(rng.random()).into_uuid()
}

/// A price between 1.00 and 1000.00, always with two decimals.
fn random_price<R: Rng + ?Sized>(rng: &mut R) -> String {
    let cents: u32 = rng.random_range(100..=100_000);
    format!("{}.{:02}", cents / 100, cents % 100)
}

fn company_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    match rng.random_range(0..3) {
        0 => format!("{} {}", pick(rng, &LAST_NAMES), pick(rng, &COMPANY_SUFFIXES)),
        1 => format!("{} - {}", pick(rng, &LAST_NAMES), pick(rng, &LAST_NAMES)),
        _ => format!(
            "{}, {} and {}",
            pick(rng, &LAST_NAMES),
            pick(rng, &LAST_NAMES),
            pick(rng, &LAST_NAMES)
        ),
    }
}
