//! HTML rendering for the storefront landing page.
//!
//! Templates are maud macros: compile-checked markup with auto-escaped
//! interpolation, so product names and descriptions from the backend cannot
//! inject script. The page mirrors the storefront composition: hero, a
//! marquee of the top best sellers, the featured grid, and the all-products
//! grid with category/brand navigation.

use maud::{html, Markup, PreEscaped, DOCTYPE};
use vitrine_core::{Brand, Category, HomeLists, Product};

use crate::fetch::HomeProps;

const STYLESHEET: &str = include_str!("home.css");

/// Renders the full landing page for one locale.
#[must_use]
pub fn render_home(props: &HomeProps, lists: &HomeLists, locale: &str) -> Markup {
    page_shell(
        locale,
        "Vitrine",
        html! {
            header.hero {
                h1 { "Vitrine" }
                p { "Everything new, featured, and flying off the shelves." }
            }
            section.marquee aria-label="Best sellers" {
                @for product in lists.marquee() {
                    (product_card(product, true))
                }
            }
            section.featured aria-label="Featured products" {
                h2 { "Featured" }
                div.grid {
                    @for product in &lists.featured {
                        (product_card(product, false))
                    }
                }
            }
            (all_products_grid(&props.categories, &props.brands, &props.newest_products))
            footer {
                nav aria-label="Pages" {
                    @for page in &props.pages {
                        @if let Some(url) = &page.url {
                            a href=(url) { (page.name) }
                        }
                    }
                }
            }
        },
    )
}

/// Minimal error page for renders with no cached fallback.
#[must_use]
pub fn render_error(locale: &str) -> Markup {
    page_shell(
        locale,
        "Vitrine — temporarily unavailable",
        html! {
            main.error {
                h1 { "We'll be right back" }
                p { "The store is briefly unavailable. Please try again in a moment." }
            }
        },
    )
}

fn page_shell(locale: &str, title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(locale) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(STYLESHEET)) }
            }
            body {
                (body)
            }
        }
    }
}

fn product_card(product: &Product, slim: bool) -> Markup {
    html! {
        article.card.card-slim[slim] {
            a href=(product.path) {
                @if let Some(image) = &product.image {
                    img src=(image.url) alt=[image.alt.as_deref()] loading="lazy";
                }
                h3 { (product.name) }
                span.price { (product.display_price()) }
            }
        }
    }
}

/// The grid below the fold: newest products flanked by category and brand
/// navigation, all passed through untouched from the backend.
fn all_products_grid(
    categories: &[Category],
    brands: &[Brand],
    newest: &[Product],
) -> Markup {
    html! {
        section.all-products aria-label="All products" {
            aside.categories {
                h2 { "Categories" }
                ul {
                    @for category in categories {
                        li { a href=(category.path) { (category.name) } }
                    }
                }
            }
            div.grid {
                @for product in newest {
                    (product_card(product, false))
                }
            }
            aside.brands {
                h2 { "Brands" }
                ul {
                    @for brand in brands {
                        li { a href=(brand.path) { (brand.name) } }
                    }
                }
            }
        }
    }
}
