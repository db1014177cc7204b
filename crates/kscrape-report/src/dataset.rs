//! Typed, cleaned view of the listing frame.

use kscrape_core::parse_float_or_zero;

use crate::error::ReportError;
use crate::frame::Frame;

pub const COL_TITLE: &str = "제목";
pub const COL_PUBLISHER: &str = "출판사";
pub const COL_SALE_PRICE: &str = "판매가";
pub const COL_LIST_PRICE: &str = "정가";
pub const COL_SALES_INDEX: &str = "판매지수";
pub const COL_REVIEWS: &str = "리뷰수";
pub const COL_RATING: &str = "평점";
pub const COL_DISCOUNT: &str = "할인율";

/// Currency suffix on prices ("won").
const CURRENCY_SUFFIX: char = '원';

/// How aggressively numeric cells are cleaned before parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cleaning {
    /// Remove thousands separators only; `"12,000원"` is not a number.
    SeparatorsOnly,
    /// Also remove the currency suffix and any whitespace.
    SeparatorsAndCurrency,
}

/// Cleans and parses one numeric cell, `0.0` when it is not a number.
#[must_use]
pub fn clean_number(raw: &str, cleaning: Cleaning) -> f64 {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| match cleaning {
            Cleaning::SeparatorsOnly => *c != ',',
            Cleaning::SeparatorsAndCurrency => {
                *c != ',' && *c != CURRENCY_SUFFIX && !c.is_whitespace()
            }
        })
        .collect();
    parse_float_or_zero(&cleaned)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub title: String,
    pub publisher: String,
    pub sale_price: f64,
    pub list_price: f64,
    pub sales_index: f64,
    pub review_count: f64,
    pub rating: f64,
    pub discount_rate: f64,
}

/// Listing rows with display-named columns resolved and numbers coerced.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    pub books: Vec<Book>,
}

impl Dataset {
    /// Builds the dataset from a frame whose columns are already renamed.
    ///
    /// 제목, 출판사, 판매가, 판매지수 and 리뷰수 are required; 정가, 평점 and
    /// 할인율 are optional and read as `0` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MissingColumn`] naming the first required
    /// column that is absent.
    pub fn from_frame(frame: &Frame, cleaning: Cleaning) -> Result<Self, ReportError> {
        let required = |name: &str| {
            frame.column(name).ok_or_else(|| ReportError::MissingColumn {
                column: name.to_owned(),
            })
        };
        let titles = required(COL_TITLE)?;
        let publishers = required(COL_PUBLISHER)?;
        let sale_prices = required(COL_SALE_PRICE)?;
        let sales_indexes = required(COL_SALES_INDEX)?;
        let reviews = required(COL_REVIEWS)?;
        let list_prices = frame.column(COL_LIST_PRICE);
        let ratings = frame.column(COL_RATING);
        let discounts = frame.column(COL_DISCOUNT);

        let optional = |cells: Option<&Vec<&str>>, idx: usize| {
            cells
                .and_then(|c| c.get(idx))
                .map_or(0.0, |raw| clean_number(raw, cleaning))
        };

        let books = (0..frame.len())
            .map(|idx| Book {
                title: titles[idx].trim().to_owned(),
                publisher: publishers[idx].trim().to_owned(),
                sale_price: clean_number(sale_prices[idx], cleaning),
                list_price: optional(list_prices.as_ref(), idx),
                sales_index: clean_number(sales_indexes[idx], cleaning),
                review_count: clean_number(reviews[idx], cleaning),
                rating: optional(ratings.as_ref(), idx),
                discount_rate: optional(discounts.as_ref(), idx),
            })
            .collect();

        Ok(Self { books })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::DISPLAY_NAMES;

    fn frame(csv: &str) -> Frame {
        let mut frame = Frame::from_reader(csv.as_bytes()).unwrap();
        frame.rename_columns(&DISPLAY_NAMES);
        frame
    }

    #[test]
    fn separators_only_rejects_currency_suffix() {
        assert!((clean_number("12,000", Cleaning::SeparatorsOnly) - 12_000.0).abs() < 1e-9);
        assert!(clean_number("12,000원", Cleaning::SeparatorsOnly).abs() < f64::EPSILON);
    }

    #[test]
    fn lenient_cleaning_strips_currency_and_spaces() {
        let v = clean_number(" 12,000 원", Cleaning::SeparatorsAndCurrency);
        assert!((v - 12_000.0).abs() < 1e-9);
    }

    #[test]
    fn non_numeric_cells_become_zero() {
        for cleaning in [Cleaning::SeparatorsOnly, Cleaning::SeparatorsAndCurrency] {
            assert!(clean_number("품절", cleaning).abs() < f64::EPSILON);
            assert!(clean_number("", cleaning).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn dataset_coerces_numeric_columns() {
        let f = frame(
            "title,publisher,sale_price,sales_index,review_count,rating\n\
             A,P,\"23,400\",\"1,234\",12,9.5\n\
             B,Q,n/a,987,,\n",
        );
        let data = Dataset::from_frame(&f, Cleaning::SeparatorsOnly).unwrap();
        assert_eq!(data.len(), 2);
        assert!((data.books[0].sale_price - 23_400.0).abs() < 1e-9);
        assert!((data.books[0].sales_index - 1_234.0).abs() < 1e-9);
        assert!(data.books[1].sale_price.abs() < f64::EPSILON);
        assert!(data.books[1].review_count.abs() < f64::EPSILON);
        assert!(data.books[1].list_price.abs() < f64::EPSILON);
    }

    #[test]
    fn missing_required_column_is_named() {
        let f = frame("title,publisher,sale_price,review_count\nA,P,1,2\n");
        let err = Dataset::from_frame(&f, Cleaning::SeparatorsOnly).unwrap_err();
        assert!(
            matches!(err, ReportError::MissingColumn { ref column } if column == COL_SALES_INDEX),
            "got: {err:?}"
        );
    }
}
