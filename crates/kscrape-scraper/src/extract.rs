//! Field extraction from listing-page item blocks.
//!
//! Each field is described by a [`FieldRule`]: a container selector scoped
//! to the item block, a target selector scoped to the container, and a
//! post-processing step. Lookups never fail; a missing container or target
//! produces the field default (`""` for text, `0` for numbers) so one
//! malformed card never costs the rest of the page.

use scraper::{ElementRef, Html, Selector};

use kscrape_core::{digits_or_zero, parse_decimal_or_zero, ListingRecord};

use crate::error::ScraperError;

/// Selector that marks one product card.
pub const ITEM_BLOCK: &str = "div.itemUnit";

/// Author cells end with this role marker ("저" = written by).
const AUTHOR_SUFFIX: &str = "저";

/// How the located element's text becomes a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Post {
    /// Trimmed text nodes, concatenated.
    Text,
    /// Like `Text`, with the trailing author-role marker removed.
    Author,
    /// Digits only, parsed as an integer.
    Digits,
    /// Digits and dot, parsed as a decimal.
    Decimal,
}

struct FieldRule {
    container: Selector,
    target: Selector,
    post: Post,
}

impl FieldRule {
    fn new(container: &str, target: &str, post: Post) -> Result<Self, ScraperError> {
        Ok(Self {
            container: compile(container)?,
            target: compile(target)?,
            post,
        })
    }

    /// Text of the first `target` inside the first `container`, if both exist.
    fn locate(&self, item: ElementRef<'_>) -> Option<String> {
        let container = item.select(&self.container).next()?;
        let target = container.select(&self.target).next()?;
        Some(match self.post {
            Post::Author => author_text(target),
            Post::Text | Post::Digits | Post::Decimal => element_text(target),
        })
    }

    fn text(&self, item: ElementRef<'_>) -> String {
        self.locate(item).unwrap_or_default()
    }

    fn integer(&self, item: ElementRef<'_>) -> i64 {
        debug_assert_eq!(self.post, Post::Digits);
        digits_or_zero(&self.locate(item).unwrap_or_else(|| "0".to_owned()))
    }

    fn decimal(&self, item: ElementRef<'_>) -> f64 {
        debug_assert_eq!(self.post, Post::Decimal);
        parse_decimal_or_zero(&self.locate(item).unwrap_or_else(|| "0".to_owned()))
    }
}

/// Compiled selectors for one listing page layout.
///
/// Build once per run with [`ItemSelectors::new`] and reuse for every page.
pub struct ItemSelectors {
    item: Selector,
    title: FieldRule,
    subtitle: FieldRule,
    author: FieldRule,
    publisher: FieldRule,
    pub_date: FieldRule,
    discount_rate: FieldRule,
    sale_price: FieldRule,
    original_price: FieldRule,
    sales_index: FieldRule,
    review_count: FieldRule,
    rating: FieldRule,
    tags: Selector,
}

impl ItemSelectors {
    /// # Errors
    ///
    /// Returns [`ScraperError::Selector`] if any selector fails to compile.
    pub fn new() -> Result<Self, ScraperError> {
        const NAME: &str = "div.info_name";
        const PUB: &str = "div.info_pubGrp";
        const PRICE: &str = "div.info_price";
        const RATING: &str = "div.info_rating";

        Ok(Self {
            item: compile(ITEM_BLOCK)?,
            title: FieldRule::new(NAME, "a.gd_name", Post::Text)?,
            subtitle: FieldRule::new(NAME, "span.gd_nameE", Post::Text)?,
            author: FieldRule::new(PUB, "span.info_auth", Post::Author)?,
            publisher: FieldRule::new(PUB, "span.info_pub", Post::Text)?,
            pub_date: FieldRule::new(PUB, "span.info_date", Post::Text)?,
            discount_rate: FieldRule::new(PRICE, "span.txt_sale em.num", Post::Digits)?,
            sale_price: FieldRule::new(PRICE, "strong.txt_num em.yes_b", Post::Digits)?,
            original_price: FieldRule::new(PRICE, "span.txt_num.dash em.yes_m", Post::Digits)?,
            sales_index: FieldRule::new(RATING, "span.saleNum", Post::Digits)?,
            review_count: FieldRule::new(RATING, "span.rating_rvCount em.txC_blue", Post::Digits)?,
            rating: FieldRule::new(RATING, "span.rating_grade em.yes_b", Post::Decimal)?,
            tags: compile("div.info_tag span.tag a")?,
        })
    }

    /// Item blocks of `document` in page order.
    #[must_use]
    pub fn item_blocks<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>> {
        document.select(&self.item).collect()
    }
}

fn compile(css: &str) -> Result<Selector, ScraperError> {
    Selector::parse(css).map_err(|e| ScraperError::Selector {
        selector: css.to_owned(),
        reason: e.to_string(),
    })
}

/// Normalizes one item block into a [`ListingRecord`].
#[must_use]
pub fn extract_item(item: ElementRef<'_>, selectors: &ItemSelectors) -> ListingRecord {
    let sale_price = selectors.sale_price.integer(item);
    let original_price = selectors
        .original_price
        .locate(item)
        .map_or(sale_price, |text| digits_or_zero(&text));

    let tags: Vec<String> = item
        .select(&selectors.tags)
        .map(element_text)
        .collect();

    ListingRecord {
        title: selectors.title.text(item),
        subtitle: selectors.subtitle.text(item),
        author: selectors.author.text(item),
        publisher: selectors.publisher.text(item),
        pub_date: selectors.pub_date.text(item),
        discount_rate: selectors.discount_rate.integer(item),
        sale_price,
        original_price,
        sales_index: selectors.sales_index.integer(item),
        review_count: selectors.review_count.integer(item),
        rating: selectors.rating.decimal(item),
        tags: tags.join(", "),
    }
}

/// Parses a listing page and extracts every item block on it.
///
/// An empty result means the page had no item blocks.
#[must_use]
pub fn parse_listing_page(html: &str, selectors: &ItemSelectors) -> Vec<ListingRecord> {
    let document = Html::parse_document(html);
    selectors
        .item_blocks(&document)
        .into_iter()
        .map(|item| extract_item(item, selectors))
        .collect()
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().map(str::trim).collect()
}

/// Author cells read like `"홍길동, 김철수 저"`; keep the names only.
fn author_text(element: ElementRef<'_>) -> String {
    let raw: String = element.text().collect();
    let joined = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let trimmed = joined.as_str();
    trimmed
        .strip_suffix(AUTHOR_SUFFIX)
        .filter(|rest| rest.is_empty() || rest.ends_with(char::is_whitespace))
        .unwrap_or(trimmed)
        .trim()
        .to_owned()
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
