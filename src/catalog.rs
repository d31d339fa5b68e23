//! Flower catalog
//!
//! The storefront sells a fixed collection. The list is handed to the shop
//! whole at startup, either the built-in house collection or a JSON file for
//! stores carrying different stock. Nothing here mutates after load.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;

use crate::domain::value_objects::Rupees;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Bouquet,
    Single,
    Plant,
    Occasion,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bouquet => write!(f, "bouquet"),
            Self::Single => write!(f, "single"),
            Self::Plant => write!(f, "plant"),
            Self::Occasion => write!(f, "occasion"),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Flower {
    pub id: String,
    pub name: String,
    pub price: Rupees,
    pub description: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub category: Category,
}

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    flowers: Vec<Flower>,
}

impl Catalog {
    pub fn new(flowers: Vec<Flower>) -> Self { Self { flowers } }

    pub fn get(&self, id: &str) -> Option<&Flower> { self.flowers.iter().find(|f| f.id == id) }
    pub fn iter(&self) -> impl Iterator<Item = &Flower> { self.flowers.iter() }
    pub fn len(&self) -> usize { self.flowers.len() }
    pub fn is_empty(&self) -> bool { self.flowers.is_empty() }

    /// Loads a catalog from a JSON array of flowers.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let flowers: Vec<Flower> = serde_json::from_str(&raw)?;
        Ok(Self::new(flowers))
    }

    /// The house collection, as sold in the Bandra studio.
    pub fn builtin() -> Self {
        fn flower(
            id: &str,
            name: &str,
            price: u64,
            description: &str,
            image_url: &str,
            category: Category,
        ) -> Flower {
            Flower {
                id: id.to_string(),
                name: name.to_string(),
                price: Rupees::new(price),
                description: description.to_string(),
                image_url: image_url.to_string(),
                category,
            }
        }

        Self::new(vec![
            flower(
                "1",
                "Marigold (Genda)",
                350,
                "Vibrant orange garlands sourced daily from local markets. Perfect for poojas.",
                "product_marigold.png",
                Category::Bouquet,
            ),
            flower(
                "2",
                "Classic Red Roses",
                850,
                "Velvet red roses wrapped in simple kraft paper. Timeless elegance.",
                "product_rose.png",
                Category::Bouquet,
            ),
            flower(
                "3",
                "Mogra Gajra",
                150,
                "Fragrant jasmine strands for hair, offering a sweet, calming scent.",
                "product_mogra.png",
                Category::Single,
            ),
            flower(
                "4",
                "Pink Lotus",
                1200,
                "Sacred pink lotus blooms, representing purity and divine beauty.",
                "product_lotus.png",
                Category::Occasion,
            ),
            flower(
                "5",
                "Tuberose Stems",
                400,
                "Long-stemmed Rajnigandha. White, elegant, and intensely fragrant.",
                "product_tuberose.png",
                Category::Single,
            ),
            flower(
                "6",
                "Hibiscus Plant",
                250,
                "A potted red Hibiscus. A staple for Indian gardens and offerings.",
                "product_hibiscus.png",
                Category::Plant,
            ),
            flower(
                "7",
                "Orchid Stem",
                1800,
                "Exotic purple orchids. Minimalist and modern.",
                "product_orchid.png",
                Category::Plant,
            ),
            flower(
                "8",
                "Summer Mix",
                1500,
                "Bright yellow and white blooms to lighten up any room.",
                "product_mix.png",
                Category::Bouquet,
            ),
        ])
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
}
