//! Demo catalog and testimonials.
//!
//! Seed content for local development and tests, matching the kind of
//! inventory the shop actually carries.

use cbc_core::{Price, Product, ProductDraft, Rating, Testimonial, TestimonialId};

fn product(
    name: &str,
    description: &str,
    price: i64,
    old_price: Option<i64>,
    category: &str,
    featured: bool,
    stock: u32,
) -> Product {
    ProductDraft {
        name: name.to_string(),
        description: description.to_string(),
        price: Price::fcfa(price),
        old_price: old_price.map(Price::fcfa),
        image: format!(
            "https://images.cbc-boutique.tg/{}.jpg",
            name.to_lowercase().replace(' ', "-")
        ),
        category: category.to_string(),
        featured,
        stock,
    }
    .into_product()
}

/// The demo catalog.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        product(
            "HP EliteBook 840 G8",
            "Intel Core i5 11e gén., 16 Go de RAM, SSD 512 Go, écran 14 pouces.",
            485_000,
            Some(550_000),
            "Ordinateurs",
            true,
            6,
        ),
        product(
            "MacBook Air M2",
            "Puce Apple M2, 8 Go de RAM, SSD 256 Go, châssis aluminium.",
            920_000,
            None,
            "Ordinateurs",
            true,
            3,
        ),
        product(
            "Samsung Galaxy A54",
            "Écran AMOLED 6,4 pouces, 128 Go, double SIM, garantie 12 mois.",
            195_000,
            Some(225_000),
            "Smartphones",
            true,
            12,
        ),
        product(
            "iPhone 13",
            "128 Go, reconditionné grade A, batterie neuve.",
            410_000,
            None,
            "Smartphones",
            false,
            5,
        ),
        product(
            "Samsung Galaxy Tab S9",
            "Écran 11 pouces, 256 Go, stylet S Pen inclus.",
            520_000,
            None,
            "Tablettes",
            false,
            4,
        ),
        product(
            "Clavier Logitech MX Keys",
            "Clavier sans fil rétroéclairé, AZERTY, multi-appareils.",
            75_000,
            None,
            "Accessoires",
            false,
            15,
        ),
        product(
            "Disque SSD externe 1 To",
            "USB-C 3.2, 1050 Mo/s, compatible PC et Mac.",
            95_000,
            Some(110_000),
            "Accessoires",
            false,
            2,
        ),
    ]
}

/// The demo testimonials.
#[must_use]
pub fn testimonials() -> Vec<Testimonial> {
    let entries = [
        (
            "Kodjo A.",
            "Togo",
            5,
            "Commande livrée à Lomé en 48h, ordinateur impeccable.",
        ),
        (
            "Aïcha D.",
            "Côte d'Ivoire",
            4,
            "Bon rapport qualité-prix, le suivi de commande pourrait être plus détaillé.",
        ),
        (
            "Mamadou S.",
            "Sénégal",
            5,
            "Deuxième achat chez eux, toujours aussi sérieux.",
        ),
    ];

    entries
        .into_iter()
        .filter_map(|(name, country, stars, comment)| {
            let rating = Rating::new(stars).ok()?;
            Some(Testimonial {
                id: TestimonialId::generate(),
                name: name.to_string(),
                country: country.to_string(),
                rating,
                comment: comment.to_string(),
            })
        })
        .collect()
}
